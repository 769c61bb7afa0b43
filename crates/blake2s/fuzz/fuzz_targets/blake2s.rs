#![no_main]

use blake2s::{Blake2s, sum256};
use libfuzzer_sys::fuzz_target;

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

fuzz_target!(|input: &[u8]| {
  let split = split_point(input);
  let (a, b) = input.split_at(split);

  let ours = sum256(input);
  let mut h = Blake2s::default();
  h.update(a);
  h.update(b);
  assert_eq!(h.finalize().as_bytes(), &ours[..]);

  use blake2::Digest as _;
  let ref_out = blake2::Blake2s256::digest(input);
  assert_eq!(&ours[..], &ref_out[..]);

  // Keyed: the first up-to-32 bytes double as the key.
  let key = &input[..input.len().min(32)];
  if !key.is_empty() {
    use blake2::digest::{KeyInit as _, Mac as _};
    let mut mac = Blake2s::new_256(key).unwrap();
    mac.update(a);
    mac.update(b);
    let mut reference = blake2::Blake2sMac256::new_from_slice(key).unwrap();
    reference.update(input);
    assert_eq!(mac.finalize().as_bytes(), &reference.finalize().into_bytes()[..]);
  }
});
