use blake2s::{Blake2s, Blake2s256, Blake2xs, Digest as _, OUTPUT_LENGTH_UNKNOWN, Xof as _, sum256};

fn hex(bytes: &[u8]) -> String {
  bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn blake2s_256_unkeyed_vectors() {
  let cases: [(&[u8], &str); 4] = [
    (b"", "69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9"),
    (&[0x00], "e34d74dbaf4ff4c6abd871cc220451d2ea2648846c7757fbaac82fe51ad64bea"),
    (b"abc", "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982"),
    (
      b"The quick brown fox jumps over the lazy dog",
      "606beeec743ccbeff6cbcdf5d5302aa855c256c29b88c8ed331ea1a6bf3c8812",
    ),
  ];
  for (i, (input, expected)) in cases.iter().enumerate() {
    assert_eq!(hex(&sum256(input)), *expected, "blake2s-256 vector mismatch at case {i}");
    assert_eq!(hex(&Blake2s256::digest(input)), *expected, "trait path mismatch at case {i}");
  }
}

#[test]
fn blake2s_256_keyed_vectors() {
  let key: Vec<u8> = (0u8..32).collect();
  let cases: [(&[u8], &str); 2] = [
    (b"", "48a8997da407876b3d79c0d92325ad3b89cbb754d86ab71aee047ad345fd2c49"),
    (&[0x00], "40d15fee7c328830166ac3f918650f807e7e01e177258cdc0a39b11f598066f1"),
  ];
  for (i, (input, expected)) in cases.iter().enumerate() {
    let mut h = Blake2s::new_256(&key).unwrap();
    h.update(input);
    assert_eq!(hex(h.finalize().as_bytes()), *expected, "keyed vector mismatch at case {i}");
  }
}

/// Deterministic input generator from RFC 7693 Appendix E.
fn selftest_seq(len: usize, seed: u32) -> Vec<u8> {
  let mut a = 0xDEAD_4BADu32.wrapping_mul(seed);
  let mut b = 1u32;
  (0..len)
    .map(|_| {
      let t = a.wrapping_add(b);
      a = b;
      b = t;
      (t >> 24) as u8
    })
    .collect()
}

#[test]
fn rfc7693_self_test() {
  const MD_LEN: [usize; 4] = [16, 20, 28, 32];
  const IN_LEN: [usize; 6] = [0, 3, 64, 65, 255, 1024];

  let mut ctx = Blake2s::default();
  for outlen in MD_LEN {
    for inlen in IN_LEN {
      let input = selftest_seq(inlen, inlen as u32);

      let mut h = Blake2s::with_output_size(outlen, &[]).unwrap();
      h.update(&input);
      ctx.update(h.finalize().as_bytes());

      let key = selftest_seq(outlen, outlen as u32);
      let mut h = Blake2s::with_output_size(outlen, &key).unwrap();
      h.update(&input);
      ctx.update(h.finalize().as_bytes());
    }
  }

  assert_eq!(
    hex(ctx.finalize().as_bytes()),
    "6a411f08ce25adcdfb02aba641451cec53c598b24f4fc787fbdc88797f4c1dfe"
  );
}

fn blake2xs_out(length: u16, key: &[u8], input: &[u8], n: usize) -> Vec<u8> {
  let mut x = Blake2xs::new(length, key).unwrap();
  x.update(input);
  let mut reader = x.finalize_xof();
  let mut out = vec![0u8; n];
  assert_eq!(reader.squeeze(&mut out), n);
  out
}

/// Key `00..1f`, input `00..len-1`, output lengths around the 32-byte node
/// boundary so both full and truncated final nodes are covered.
#[test]
fn blake2xs_keyed_vectors() {
  let key: Vec<u8> = (0u8..32).collect();
  let input: Vec<u8> = (0..=255u8).collect();
  let cases: [(u16, usize, &str); 9] = [
    (1, 0, "94"),
    (1, 3, "aa"),
    (1, 256, "0e"),
    (32, 0, "f969bcc748b59723eefa9322c1e40028adac757f8725d30939356908c753ee3f"),
    (32, 256, "a4fe2bd0f96a215fa7164ae1a405f4030a586c12b0c29806a099d7d7fdd8dd72"),
    (33, 3, "f26f08b31b04ebf5c403158a90d1ded512e4cde8a5fe519983d3d06159a245b216"),
    (
      64,
      256,
      "ec470d0aa932c78c5bcf86203ec0014314114765fa679c3daef214f883a17e1b\
       4ca12f44433772a6e4ef685c904b2fc35586c6bd88f325b965968b06d808d73f",
    ),
    (
      65,
      0,
      "a37a3b8faec47894aba9cd7bb9ba0012f9238510a85d5a6327577fa65c8ee22a\
       68448867215d06f292486abd1ad14517e7c9b5ee3e15eb59dcb9ef08b4d5b976ce",
    ),
    (
      100,
      3,
      "8599afcce0906f67d8fb3a101a9b32752d2549012dc7f8dc7e73db6e4dfbffc1\
       336437f3284034c1dc22334f2f889e1b193926fd94a051a06e27d39de29bdf7a\
       80c345f7d904651e34510c3d48d32d5a0c3460763a05032f9f2b96e1d77a1648\
       74cc4cf6",
    ),
  ];
  for (i, (length, in_len, expected)) in cases.iter().enumerate() {
    let out = blake2xs_out(*length, &key, &input[..*in_len], usize::from(*length));
    assert_eq!(
      hex(&out),
      *expected,
      "blake2xs vector mismatch at case {i} (length={length}, in_len={in_len})"
    );
  }
}

#[test]
fn blake2xs_unknown_length_vectors() {
  assert_eq!(
    hex(&blake2xs_out(OUTPUT_LENGTH_UNKNOWN, &[], b"x", 80)),
    "cea209ef6c43f6204de705fd51d8b1f55dd6119775bee7692ad6141ff929ce0a\
     d3f2931d36087785f468691a812b42ebf95923b16c6a7478e2accfdb258d7a23\
     cd24e190708184425b376a33b3b24ea2"
  );

  let key: Vec<u8> = (0u8..32).collect();
  assert_eq!(
    hex(&blake2xs_out(OUTPUT_LENGTH_UNKNOWN, &key, &[0, 1, 2], 96)),
    "90f882ae8d6a7301b8b0efff303256a4f4d826540547416de78aa62657e07585\
     e7e0ca41b6d524a4d8421a5ceba64242a7d3a32395623e625772b1f86d6b5770\
     9c722e4d87034019aaf36a77d3db4372edc4d711c23ef122a51ce86bc15576ce"
  );
}
