//! Digest configuration: output size and optional MAC key.

use core::fmt;

use crate::{compress::IV, error::Blake2sError};

/// Digest size of BLAKE2s-128 in bytes.
pub const SIZE_128: usize = 16;

/// Digest size of BLAKE2s-256 in bytes (also the largest supported size).
pub const SIZE_256: usize = 32;

/// Largest supported key in bytes.
pub const MAX_KEY_LEN: usize = 32;

/// Validated, immutable parameters for a [`Blake2s`](crate::Blake2s) instance.
///
/// The key is never printed by the `Debug` impl.
///
/// ```
/// use blake2s::{Blake2s, Blake2sConfig};
///
/// let config = Blake2sConfig::new(20)?.with_key(b"secret")?;
/// let mut mac = Blake2s::new(config);
/// mac.update(b"message");
/// assert_eq!(mac.finalize().len(), 20);
/// # Ok::<(), blake2s::Blake2sError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Blake2sConfig {
  output_size: u8,
  key_len: u8,
  key: [u8; MAX_KEY_LEN],
  /// Parameter word 3 (node offset high half / XOF length). Zero except for
  /// BLAKE2Xs root hashes.
  node_word: u32,
}

impl Blake2sConfig {
  /// Unkeyed BLAKE2s-256.
  pub const BLAKE2S_256: Self = Self::unkeyed(SIZE_256 as u8);

  const fn unkeyed(output_size: u8) -> Self {
    Self {
      output_size,
      key_len: 0,
      key: [0u8; MAX_KEY_LEN],
      node_word: 0,
    }
  }

  /// Unkeyed configuration producing `output_size` bytes.
  ///
  /// # Errors
  ///
  /// [`Blake2sError::InvalidOutputSize`] unless `1 <= output_size <= 32`.
  pub fn new(output_size: usize) -> Result<Self, Blake2sError> {
    if output_size == 0 || output_size > SIZE_256 {
      trace_event!(output_size, "rejected blake2s output size");
      return Err(Blake2sError::InvalidOutputSize { len: output_size });
    }
    Ok(Self::unkeyed(output_size as u8))
  }

  /// Attach a MAC key. An empty key leaves the configuration unkeyed.
  ///
  /// # Errors
  ///
  /// [`Blake2sError::InvalidKeySize`] if `key` is longer than 32 bytes.
  pub fn with_key(mut self, key: &[u8]) -> Result<Self, Blake2sError> {
    let Some(dst) = self.key.get_mut(..key.len()) else {
      trace_event!(key_len = key.len(), "rejected blake2s key");
      return Err(Blake2sError::InvalidKeySize { len: key.len() });
    };
    dst.copy_from_slice(key);
    if let Some(rest) = self.key.get_mut(key.len()..) {
      rest.fill(0);
    }
    self.key_len = key.len() as u8;
    Ok(self)
  }

  pub(crate) const fn with_node_word(mut self, node_word: u32) -> Self {
    self.node_word = node_word;
    self
  }

  /// Digest size in bytes.
  #[inline]
  #[must_use]
  pub const fn output_size(&self) -> usize {
    self.output_size as usize
  }

  /// The MAC key (empty when unkeyed).
  #[inline]
  #[must_use]
  pub fn key(&self) -> &[u8] {
    self.key.get(..self.key_len as usize).unwrap_or_default()
  }

  #[inline]
  #[must_use]
  pub const fn is_keyed(&self) -> bool {
    self.key_len != 0
  }

  /// Initial chaining value: `IV` XOR the parameter block.
  ///
  /// Word 0 packs digest length, key length, fan-out 1 and depth 1.
  pub(crate) const fn initial_state(&self) -> [u32; 8] {
    let mut h = IV;
    h[0] ^= (self.output_size as u32) | ((self.key_len as u32) << 8) | (1 << 16) | (1 << 24);
    h[3] ^= self.node_word;
    h
  }

  /// The key zero-padded to a full block, as fed to the first compression.
  pub(crate) fn key_block(&self) -> [u8; crate::BLOCK_LEN] {
    let mut block = [0u8; crate::BLOCK_LEN];
    let (head, _) = block.split_at_mut(MAX_KEY_LEN);
    head.copy_from_slice(&self.key);
    block
  }
}

impl Default for Blake2sConfig {
  #[inline]
  fn default() -> Self {
    Self::BLAKE2S_256
  }
}

impl fmt::Debug for Blake2sConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Blake2sConfig")
      .field("output_size", &self.output_size)
      .field("key_len", &self.key_len)
      .finish_non_exhaustive()
  }
}
