//! Streaming BLAKE2s: buffered updates, non-destructive finalize, keyed mode.

#![allow(clippy::indexing_slicing)] // Buffer offsets are bounded by BLOCK_LEN

use core::fmt;

use subtle::ConstantTimeEq;
use traits::{Digest, VerificationError};

use crate::{
  compress::{BLOCK_LEN, FINAL_FLAG, compress_blocks, rewind_counter},
  error::Blake2sError,
  params::{Blake2sConfig, SIZE_128, SIZE_256},
};

/// Run the final compression on copies of `h`/`c` with `pending` zero-padded
/// to a full block, and serialize the state words little-endian.
///
/// `pending.len()` must not exceed [`BLOCK_LEN`].
pub(crate) fn finalize_words(mut h: [u32; 8], mut c: [u32; 2], pending: &[u8]) -> [u8; SIZE_256] {
  debug_assert!(pending.len() <= BLOCK_LEN);
  let mut block = [0u8; BLOCK_LEN];
  block[..pending.len()].copy_from_slice(pending);

  // The final block is counted by its real length, not the padded one.
  rewind_counter(&mut c, (BLOCK_LEN - pending.len()) as u32);
  compress_blocks(&mut h, &mut c, FINAL_FLAG, &block);

  let mut out = [0u8; SIZE_256];
  let (words, _) = out.as_chunks_mut::<4>();
  for (dst, word) in words.iter_mut().zip(h) {
    *dst = word.to_le_bytes();
  }
  out
}

/// Length of the prefix of `data` that can be compressed eagerly: every whole
/// block except the last one, which stays buffered for the final compression.
#[inline(always)]
fn eager_len(len: usize) -> usize {
  if len <= BLOCK_LEN {
    return 0;
  }
  let full = len & !(BLOCK_LEN - 1);
  if full == len { full - BLOCK_LEN } else { full }
}

/// A finalized digest of 1 to 32 bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blake2sOutput {
  bytes: [u8; SIZE_256],
  len: u8,
}

impl Blake2sOutput {
  fn truncate(mut bytes: [u8; SIZE_256], len: usize) -> Self {
    bytes[len..].fill(0);
    Self { bytes, len: len as u8 }
  }

  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes[..self.len as usize]
  }

  /// Digest length in bytes (the configured output size).
  #[inline]
  #[must_use]
  #[allow(clippy::len_without_is_empty)] // never empty
  pub fn len(&self) -> usize {
    self.len as usize
  }
}

impl AsRef<[u8]> for Blake2sOutput {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl PartialEq<[u8]> for Blake2sOutput {
  fn eq(&self, other: &[u8]) -> bool {
    self.as_bytes() == other
  }
}

impl fmt::LowerHex for Blake2sOutput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in self.as_bytes() {
      write!(f, "{b:02x}")?;
    }
    Ok(())
  }
}

impl fmt::Debug for Blake2sOutput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Blake2sOutput({self:x})")
  }
}

/// Streaming BLAKE2s with a configurable digest size and optional MAC key.
///
/// ```
/// use blake2s::Blake2s;
///
/// let mut h = Blake2s::new_256(&[])?;
/// h.update(b"ab");
/// h.update(b"c");
/// assert_eq!(
///   format!("{:x}", h.finalize()),
///   "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982"
/// );
/// # Ok::<(), blake2s::Blake2sError>(())
/// ```
#[derive(Clone)]
pub struct Blake2s {
  pub(crate) h: [u32; 8],
  pub(crate) c: [u32; 2],
  pub(crate) block: [u8; BLOCK_LEN],
  /// Bytes of `block` not yet compressed, in `0..=BLOCK_LEN`.
  pub(crate) offset: usize,
  pub(crate) config: Blake2sConfig,
}

impl Blake2s {
  /// Create a hasher from a validated configuration.
  #[must_use]
  pub fn new(config: Blake2sConfig) -> Self {
    let mut d = Self {
      h: [0u32; 8],
      c: [0u32; 2],
      block: [0u8; BLOCK_LEN],
      offset: 0,
      config,
    };
    d.reset();
    d
  }

  /// BLAKE2s-256. A non-empty `key` turns the hasher into a MAC.
  ///
  /// # Errors
  ///
  /// [`Blake2sError::InvalidKeySize`] if `key` is longer than 32 bytes.
  pub fn new_256(key: &[u8]) -> Result<Self, Blake2sError> {
    Ok(Self::new(Blake2sConfig::BLAKE2S_256.with_key(key)?))
  }

  /// BLAKE2s-128 MAC. The key is mandatory: a 128-bit unkeyed digest is too
  /// small to be used as a general purpose hash.
  ///
  /// # Errors
  ///
  /// [`Blake2sError::KeyRequired`] for an empty key,
  /// [`Blake2sError::InvalidKeySize`] for a key longer than 32 bytes.
  pub fn new_128(key: &[u8]) -> Result<Self, Blake2sError> {
    if key.is_empty() {
      trace_event!("rejected unkeyed blake2s-128");
      return Err(Blake2sError::KeyRequired);
    }
    Ok(Self::new(Blake2sConfig::new(SIZE_128)?.with_key(key)?))
  }

  /// BLAKE2s with a custom digest size in `1..=32`.
  ///
  /// # Errors
  ///
  /// [`Blake2sError::InvalidOutputSize`] or [`Blake2sError::InvalidKeySize`].
  pub fn with_output_size(output_size: usize, key: &[u8]) -> Result<Self, Blake2sError> {
    Ok(Self::new(Blake2sConfig::new(output_size)?.with_key(key)?))
  }

  /// Absorb `data`. Never fails; any chunking yields the same digest.
  pub fn update(&mut self, mut data: &[u8]) {
    if self.offset > 0 {
      let remaining = BLOCK_LEN - self.offset;
      if data.len() <= remaining {
        self.block[self.offset..self.offset + data.len()].copy_from_slice(data);
        self.offset += data.len();
        return;
      }
      // More input follows, so the buffered block cannot be the last one.
      let (head, rest) = data.split_at(remaining);
      self.block[self.offset..].copy_from_slice(head);
      compress_blocks(&mut self.h, &mut self.c, 0, &self.block);
      self.offset = 0;
      data = rest;
    }

    let eager = eager_len(data.len());
    if eager != 0 {
      let (full, rest) = data.split_at(eager);
      compress_blocks(&mut self.h, &mut self.c, 0, full);
      data = rest;
    }

    self.block[..data.len()].copy_from_slice(data);
    self.offset = data.len();
  }

  #[inline]
  pub(crate) fn finalize_full(&self) -> [u8; SIZE_256] {
    finalize_words(self.h, self.c, &self.block[..self.offset])
  }

  /// Digest of everything written so far, truncated to the output size.
  ///
  /// Works on a copy of the state: the hasher can keep absorbing afterwards and
  /// repeated calls return identical bytes.
  #[must_use]
  pub fn finalize(&self) -> Blake2sOutput {
    Blake2sOutput::truncate(self.finalize_full(), self.output_size())
  }

  /// Append the digest to `out`.
  #[cfg(feature = "alloc")]
  pub fn finalize_append(&self, out: &mut alloc::vec::Vec<u8>) {
    out.extend_from_slice(self.finalize().as_bytes());
  }

  /// Compare the digest against `tag` in constant time.
  ///
  /// # Errors
  ///
  /// [`VerificationError`] if the tag differs or has a different length.
  pub fn verify(&self, tag: &[u8]) -> Result<(), VerificationError> {
    if bool::from(self.finalize().as_bytes().ct_eq(tag)) {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }

  /// Return to the post-construction state. Keyed hashers get their key block
  /// back in the buffer.
  pub fn reset(&mut self) {
    self.h = self.config.initial_state();
    self.c = [0, 0];
    if self.config.is_keyed() {
      self.block = self.config.key_block();
      self.offset = BLOCK_LEN;
    } else {
      self.offset = 0;
    }
  }

  #[inline]
  #[must_use]
  pub const fn output_size(&self) -> usize {
    self.config.output_size()
  }

  #[inline]
  #[must_use]
  pub const fn block_size(&self) -> usize {
    BLOCK_LEN
  }

  #[inline]
  #[must_use]
  pub const fn is_keyed(&self) -> bool {
    self.config.is_keyed()
  }

  #[inline]
  #[must_use]
  pub const fn config(&self) -> &Blake2sConfig {
    &self.config
  }
}

impl Default for Blake2s {
  #[inline]
  fn default() -> Self {
    Self::new(Blake2sConfig::BLAKE2S_256)
  }
}

impl fmt::Debug for Blake2s {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Blake2s")
      .field("config", &self.config)
      .field("counter", &self.c)
      .field("offset", &self.offset)
      .finish_non_exhaustive()
  }
}

/// Unkeyed BLAKE2s-256 behind the [`Digest`] trait.
#[derive(Clone, Default, Debug)]
pub struct Blake2s256(pub(crate) Blake2s);

impl Blake2s256 {
  /// The underlying streaming hasher.
  #[inline]
  #[must_use]
  pub fn as_inner(&self) -> &Blake2s {
    &self.0
  }
}

impl Digest for Blake2s256 {
  const OUTPUT_SIZE: usize = SIZE_256;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; SIZE_256];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.0.update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.0.finalize_full()
  }

  #[inline]
  fn reset(&mut self) {
    self.0.reset();
  }
}

/// BLAKE2s-256 of `data` in one shot.
///
/// Whole blocks are compressed straight from `data`; only the final block is
/// copied.
#[must_use]
pub fn sum256(data: &[u8]) -> [u8; SIZE_256] {
  let mut h = Blake2sConfig::BLAKE2S_256.initial_state();
  let mut c = [0u32; 2];
  let (full, tail) = data.split_at(eager_len(data.len()));
  compress_blocks(&mut h, &mut c, 0, full);
  finalize_words(h, c, tail)
}
