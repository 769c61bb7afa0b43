#![no_main]

use blake2s::{Blake2s, MARSHALED_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
  // Arbitrary bytes must never panic the decoder.
  let mut h = Blake2s::default();
  if h.unmarshal_binary(input).is_ok() {
    assert_eq!(input.len(), MARSHALED_LEN);
    assert_eq!(&h.marshal_binary().unwrap()[..], input);
    let _ = h.finalize();
  }

  // Suspend at the split, resume, and compare with the uninterrupted hash.
  let split = input.first().map_or(0, |&b| b as usize % (input.len() + 1));
  let (a, b) = input.split_at(split);
  let mut whole = Blake2s::default();
  whole.update(input);

  let mut first = Blake2s::default();
  first.update(a);
  let snap = first.marshal_binary().unwrap();
  let mut resumed = Blake2s::from_marshaled(&snap).unwrap();
  resumed.update(b);
  assert_eq!(whole.finalize(), resumed.finalize());
});
