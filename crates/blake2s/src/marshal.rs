//! Binary snapshots of unkeyed hasher state.
//!
//! Layout (109 bytes, integers big-endian):
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 3 | magic `b2s` |
//! | 3 | 32 | chaining value `h[0..8]` |
//! | 35 | 8 | byte counter `c[0]`, `c[1]` |
//! | 43 | 1 | output size |
//! | 44 | 64 | pending block |
//! | 108 | 1 | pending block offset |
//!
//! The digest output itself is little-endian; only this snapshot format uses
//! big-endian words. Keyed state is never exported.

use crate::{
  compress::BLOCK_LEN,
  digest::{Blake2s, Blake2s256},
  error::Blake2sError,
  params::{Blake2sConfig, SIZE_256},
};

/// Snapshot identifier.
pub const MAGIC: &[u8; 3] = b"b2s";

/// Total snapshot length in bytes.
pub const MARSHALED_LEN: usize = MAGIC.len() + 8 * 4 + 2 * 4 + 1 + BLOCK_LEN + 1;

/// Sequential big-endian writer over a fixed snapshot buffer.
struct Writer<'a> {
  rest: &'a mut [u8],
}

impl Writer<'_> {
  fn put(&mut self, bytes: &[u8]) {
    let rest = core::mem::take(&mut self.rest);
    let (head, tail) = rest.split_at_mut(bytes.len());
    head.copy_from_slice(bytes);
    self.rest = tail;
  }

  fn put_u32(&mut self, v: u32) {
    self.put(&v.to_be_bytes());
  }
}

/// Sequential reader; the caller has already checked the total length.
struct Reader<'a> {
  rest: &'a [u8],
}

impl<'a> Reader<'a> {
  fn take<const N: usize>(&mut self) -> Result<&'a [u8; N], Blake2sError> {
    let (head, tail) = self.rest.split_first_chunk::<N>().ok_or(Blake2sError::InvalidStateSize {
      len: MARSHALED_LEN - self.rest.len(),
    })?;
    self.rest = tail;
    Ok(head)
  }

  fn u32(&mut self) -> Result<u32, Blake2sError> {
    Ok(u32::from_be_bytes(*self.take::<4>()?))
  }

  fn u8(&mut self) -> Result<u8, Blake2sError> {
    let [b] = *self.take::<1>()?;
    Ok(b)
  }
}

/// Decoded snapshot fields, validated but not yet applied.
struct Snapshot {
  h: [u32; 8],
  c: [u32; 2],
  config: Blake2sConfig,
  block: [u8; BLOCK_LEN],
  offset: usize,
}

fn decode(data: &[u8]) -> Result<Snapshot, Blake2sError> {
  if data.get(..MAGIC.len()) != Some(MAGIC.as_slice()) {
    trace_event!(len = data.len(), "rejected blake2s snapshot: bad identifier");
    return Err(Blake2sError::InvalidStateIdentifier);
  }
  if data.len() != MARSHALED_LEN {
    trace_event!(len = data.len(), "rejected blake2s snapshot: bad length");
    return Err(Blake2sError::InvalidStateSize { len: data.len() });
  }

  let mut r = Reader {
    rest: data.get(MAGIC.len()..).unwrap_or_default(),
  };
  let mut h = [0u32; 8];
  for word in &mut h {
    *word = r.u32()?;
  }
  let c = [r.u32()?, r.u32()?];
  let output_size = usize::from(r.u8()?);
  let block = *r.take::<BLOCK_LEN>()?;
  let offset = usize::from(r.u8()?);

  let config = match Blake2sConfig::new(output_size) {
    Ok(config) if offset <= BLOCK_LEN => config,
    _ => {
      trace_event!(output_size, offset, "rejected blake2s snapshot: field out of range");
      return Err(Blake2sError::InvalidStateField);
    }
  };

  Ok(Snapshot {
    h,
    c,
    config,
    block,
    offset,
  })
}

impl Snapshot {
  /// Overwrite `d` with the snapshot. Infallible: every field was validated
  /// by [`decode`].
  fn apply(self, d: &mut Blake2s) {
    d.config = self.config;
    d.h = self.h;
    d.c = self.c;
    d.block = self.block;
    d.offset = self.offset;
  }
}

impl Blake2s {
  /// Serialize the in-progress state so it can be resumed later with
  /// [`Blake2s::unmarshal_binary`] or [`Blake2s::from_marshaled`].
  ///
  /// # Errors
  ///
  /// [`Blake2sError::CannotMarshalKeyedState`] for keyed (MAC) hashers.
  pub fn marshal_binary(&self) -> Result<[u8; MARSHALED_LEN], Blake2sError> {
    if self.is_keyed() {
      trace_event!("refused to marshal keyed blake2s state");
      return Err(Blake2sError::CannotMarshalKeyedState);
    }

    let mut out = [0u8; MARSHALED_LEN];
    let mut w = Writer { rest: &mut out };
    w.put(MAGIC);
    for word in self.h {
      w.put_u32(word);
    }
    w.put_u32(self.c[0]);
    w.put_u32(self.c[1]);
    w.put(&[self.output_size() as u8]);
    w.put(&self.block);
    w.put(&[self.offset as u8]);
    debug_assert!(w.rest.is_empty());
    Ok(out)
  }

  /// Restore state produced by [`Blake2s::marshal_binary`], replacing the
  /// receiver's state and configuration. The result is always unkeyed.
  ///
  /// # Errors
  ///
  /// [`Blake2sError::InvalidStateIdentifier`] if the tag is wrong (checked
  /// first), [`Blake2sError::InvalidStateSize`] if the length is wrong, and
  /// [`Blake2sError::InvalidStateField`] for an out-of-range output size or
  /// offset. On error the receiver is unchanged.
  pub fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), Blake2sError> {
    decode(data)?.apply(self);
    Ok(())
  }

  /// Build a hasher from a snapshot.
  ///
  /// # Errors
  ///
  /// Same as [`Blake2s::unmarshal_binary`].
  pub fn from_marshaled(data: &[u8]) -> Result<Self, Blake2sError> {
    let mut d = Self::default();
    d.unmarshal_binary(data)?;
    Ok(d)
  }
}

impl Blake2s256 {
  /// See [`Blake2s::marshal_binary`]. Never fails for this unkeyed type.
  ///
  /// # Errors
  ///
  /// [`Blake2sError::CannotMarshalKeyedState`] is unreachable here but kept in
  /// the signature for parity with [`Blake2s`].
  pub fn marshal_binary(&self) -> Result<[u8; MARSHALED_LEN], Blake2sError> {
    self.0.marshal_binary()
  }

  /// See [`Blake2s::unmarshal_binary`]. Snapshots must carry a 32-byte output
  /// size.
  ///
  /// # Errors
  ///
  /// As [`Blake2s::unmarshal_binary`], plus [`Blake2sError::InvalidStateField`]
  /// when the snapshot is for a different output size.
  pub fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), Blake2sError> {
    let snap = decode(data)?;
    if snap.config.output_size() != SIZE_256 {
      trace_event!(output_size = snap.config.output_size(), "rejected blake2s-256 snapshot");
      return Err(Blake2sError::InvalidStateField);
    }
    snap.apply(&mut self.0);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8) ^ 0x3C).collect()
  }

  #[test]
  fn marshaled_len_matches_layout() {
    assert_eq!(MARSHALED_LEN, 109);
  }

  #[test]
  fn fresh_state_layout() {
    let out = Blake2s::default().marshal_binary().unwrap();
    assert_eq!(&out[..3], b"b2s");
    // IV[0] ^ 0x0101_0020, big-endian.
    assert_eq!(&out[3..7], &[0x6B, 0x08, 0xE6, 0x47]);
    assert_eq!(&out[7..11], &[0xBB, 0x67, 0xAE, 0x85]);
    assert_eq!(&out[35..43], &[0u8; 8]);
    assert_eq!(out[43], 32);
    assert_eq!(&out[44..108], &[0u8; 64]);
    assert_eq!(out[108], 0);
  }

  #[test]
  fn counter_and_offset_layout() {
    let mut d = Blake2s::with_output_size(20, &[]).unwrap();
    d.update(&pattern(64 * 3 + 5));
    let out = d.marshal_binary().unwrap();
    assert_eq!(&out[35..39], &192u32.to_be_bytes());
    assert_eq!(&out[39..43], &[0u8; 4]);
    assert_eq!(out[43], 20);
    assert_eq!(&out[44..49], &pattern(64 * 3 + 5)[192..]);
    assert_eq!(out[108], 5);
  }

  #[test]
  fn round_trip_resumes_identically() {
    let msg = pattern(1000);
    for split in [0usize, 1, 63, 64, 65, 128, 500, 1000] {
      let mut d = Blake2s::default();
      d.update(&msg[..split]);
      let snap = d.marshal_binary().unwrap();

      let mut resumed = Blake2s::from_marshaled(&snap).unwrap();
      resumed.update(&msg[split..]);
      d.update(&msg[split..]);
      assert_eq!(resumed.finalize(), d.finalize(), "split={split}");
    }
  }

  #[test]
  fn keyed_state_is_not_exportable() {
    let mac = Blake2s::new_256(b"k").unwrap();
    assert_eq!(mac.marshal_binary(), Err(Blake2sError::CannotMarshalKeyedState));
  }

  #[test]
  fn unmarshal_checks_identifier_before_size() {
    let mut d = Blake2s::default();
    assert_eq!(d.unmarshal_binary(b""), Err(Blake2sError::InvalidStateIdentifier));
    assert_eq!(d.unmarshal_binary(b"b2"), Err(Blake2sError::InvalidStateIdentifier));
    assert_eq!(
      d.unmarshal_binary(&[0u8; MARSHALED_LEN]),
      Err(Blake2sError::InvalidStateIdentifier)
    );
    assert_eq!(
      d.unmarshal_binary(b"b2s"),
      Err(Blake2sError::InvalidStateSize { len: 3 })
    );

    let mut long = Blake2s::default().marshal_binary().unwrap().to_vec();
    long.push(0);
    assert_eq!(
      d.unmarshal_binary(&long),
      Err(Blake2sError::InvalidStateSize { len: MARSHALED_LEN + 1 })
    );
  }

  #[test]
  fn unmarshal_rejects_out_of_range_fields_without_mutation() {
    let mut d = Blake2s::default();
    d.update(b"keep me");
    let before = d.finalize();

    let mut snap = Blake2s::default().marshal_binary().unwrap();
    snap[43] = 33;
    assert_eq!(d.unmarshal_binary(&snap), Err(Blake2sError::InvalidStateField));
    snap[43] = 0;
    assert_eq!(d.unmarshal_binary(&snap), Err(Blake2sError::InvalidStateField));
    snap[43] = 32;
    snap[108] = 65;
    assert_eq!(d.unmarshal_binary(&snap), Err(Blake2sError::InvalidStateField));

    assert_eq!(d.finalize(), before);
  }

  #[test]
  fn unmarshal_clears_key() {
    let mut plain = Blake2s::with_output_size(24, &[]).unwrap();
    plain.update(b"abc");
    let snap = plain.marshal_binary().unwrap();

    let mut mac = Blake2s::new_256(b"secret").unwrap();
    mac.unmarshal_binary(&snap).unwrap();
    assert!(!mac.is_keyed());
    assert_eq!(mac.output_size(), 24);
    assert_eq!(mac.finalize(), plain.finalize());
  }

  #[test]
  fn full_pending_block_round_trips() {
    let mut d = Blake2s::default();
    d.update(&pattern(128));
    let snap = d.marshal_binary().unwrap();
    assert_eq!(snap[108], 64);
    let resumed = Blake2s::from_marshaled(&snap).unwrap();
    assert_eq!(resumed.finalize(), d.finalize());
  }

  #[test]
  fn blake2s256_requires_full_size_snapshot() {
    use traits::Digest as _;

    let short = Blake2s::with_output_size(16, &[]).unwrap().marshal_binary().unwrap();
    let mut h = Blake2s256::new();
    assert_eq!(h.unmarshal_binary(&short), Err(Blake2sError::InvalidStateField));

    h.update(b"abc");
    let snap = h.marshal_binary().unwrap();
    let mut resumed = Blake2s256::new();
    resumed.unmarshal_binary(&snap).unwrap();
    assert_eq!(resumed.finalize(), h.finalize());
  }

  #[test]
  fn blake2s256_unmarshal_overwrites_dirty_state() {
    use traits::Digest as _;

    let mut src = Blake2s256::new();
    src.update(&pattern(70));
    let snap = src.marshal_binary().unwrap();

    let mut dst = Blake2s256::new();
    dst.update(&pattern(500));
    let before = dst.marshal_binary().unwrap();

    let mut bad = snap;
    bad[MARSHALED_LEN - 1] = 65;
    assert_eq!(dst.unmarshal_binary(&bad), Err(Blake2sError::InvalidStateField));
    assert_eq!(dst.marshal_binary().unwrap(), before);

    dst.unmarshal_binary(&snap).unwrap();
    assert_eq!(dst.marshal_binary().unwrap(), snap);
    src.update(b"tail");
    dst.update(b"tail");
    assert_eq!(dst.finalize(), src.finalize());
  }
}
