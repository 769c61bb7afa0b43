//! Error type for construction, state snapshots, and BLAKE2Xs parameters.
//!
//! Every error is detected before the receiver is mutated, so a failed call
//! leaves the hasher exactly as it was.

use core::fmt;

/// Errors reported by the BLAKE2s engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Blake2sError {
  /// Key longer than 32 bytes.
  InvalidKeySize {
    /// Length of the rejected key.
    len: usize,
  },
  /// Digest size outside `1..=32`.
  InvalidOutputSize {
    /// The rejected size.
    len: usize,
  },
  /// BLAKE2s-128 is only offered as a MAC; an unkeyed 128-bit digest is too
  /// short to be collision resistant.
  KeyRequired,
  /// Snapshots of keyed (MAC) state would expose the key block.
  CannotMarshalKeyedState,
  /// Snapshot does not start with the `b2s` tag.
  InvalidStateIdentifier,
  /// Snapshot has the right tag but the wrong total length.
  InvalidStateSize {
    /// Length of the rejected snapshot.
    len: usize,
  },
  /// Snapshot carries an output size outside `1..=32` or a buffer offset past
  /// the end of the block.
  InvalidStateField,
  /// BLAKE2Xs output length 65535 is reserved to mean "unknown".
  XofLengthTooLarge,
}

impl fmt::Display for Blake2sError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidKeySize { len } => write!(f, "blake2s: invalid key size {len} (max 32)"),
      Self::InvalidOutputSize { len } => write!(f, "blake2s: invalid output size {len} (expected 1..=32)"),
      Self::KeyRequired => f.write_str("blake2s: a key is required for a 128-bit hash"),
      Self::CannotMarshalKeyedState => f.write_str("blake2s: cannot marshal MACs"),
      Self::InvalidStateIdentifier => f.write_str("blake2s: invalid hash state identifier"),
      Self::InvalidStateSize { len } => write!(f, "blake2s: invalid hash state size {len}"),
      Self::InvalidStateField => f.write_str("blake2s: invalid hash state field"),
      Self::XofLengthTooLarge => f.write_str("blake2s: XOF length too large"),
    }
  }
}

impl core::error::Error for Blake2sError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn display_messages() {
    assert_eq!(
      Blake2sError::InvalidKeySize { len: 40 }.to_string(),
      "blake2s: invalid key size 40 (max 32)"
    );
    assert_eq!(
      Blake2sError::KeyRequired.to_string(),
      "blake2s: a key is required for a 128-bit hash"
    );
    assert_eq!(
      Blake2sError::CannotMarshalKeyedState.to_string(),
      "blake2s: cannot marshal MACs"
    );
    assert_eq!(
      Blake2sError::InvalidStateSize { len: 3 }.to_string(),
      "blake2s: invalid hash state size 3"
    );
  }

  #[test]
  fn is_small_and_copy() {
    fn assert_traits<T: Copy + Send + Sync + core::error::Error>() {}
    assert_traits::<Blake2sError>();
    assert!(core::mem::size_of::<Blake2sError>() <= 16);
  }
}
