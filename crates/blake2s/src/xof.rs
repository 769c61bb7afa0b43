//! BLAKE2Xs extendable-output function.
//!
//! The input is hashed once into a 32-byte root (BLAKE2s-256 with the XOF
//! length in parameter word 3). Output block `i` is then the BLAKE2s hash of
//! that root under a parameter block with node offset `i`, leaf and inner
//! length 32, fan-out and depth 0. The last block's digest length is the
//! number of bytes still owed, so outputs of different declared lengths are
//! unrelated.
//!
//! ```
//! use blake2s::{Blake2xs, Xof as _};
//!
//! let mut xof = Blake2xs::new(100, &[])?;
//! xof.update(b"seed");
//! let mut reader = xof.finalize_xof();
//! let mut out = [0u8; 128];
//! assert_eq!(reader.squeeze(&mut out), 100);
//! assert_eq!(reader.remaining(), 0);
//! # Ok::<(), blake2s::Blake2sError>(())
//! ```

#![allow(clippy::indexing_slicing)] // Parameter block offsets are fixed

use traits::Xof;

use crate::{
  compress::IV,
  digest::{Blake2s, finalize_words},
  error::Blake2sError,
  params::{Blake2sConfig, SIZE_256},
};

/// Pass as `length` to [`Blake2xs::new`] when the output length is not known
/// in advance.
pub const OUTPUT_LENGTH_UNKNOWN: u16 = 0;

/// Parameter-block encoding of an unknown output length.
const MAGIC_UNKNOWN_OUTPUT_LENGTH: u16 = u16::MAX;

/// Output cap when the length is unknown: 2^32 blocks of 32 bytes.
const MAX_OUTPUT_LENGTH: u64 = (1 << 32) * SIZE_256 as u64;

/// BLAKE2Xs hasher (absorbing phase).
#[derive(Clone, Debug)]
pub struct Blake2xs {
  root: Blake2s,
  length: u16,
}

impl Blake2xs {
  /// Create a BLAKE2Xs hasher producing `length` bytes, or up to 128 GiB when
  /// `length` is [`OUTPUT_LENGTH_UNKNOWN`]. A non-empty key makes it a keyed
  /// XOF.
  ///
  /// # Errors
  ///
  /// [`Blake2sError::InvalidKeySize`] for a key over 32 bytes and
  /// [`Blake2sError::XofLengthTooLarge`] for `length == 65535`, which the
  /// parameter block reserves for "unknown".
  pub fn new(length: u16, key: &[u8]) -> Result<Self, Blake2sError> {
    let config = Blake2sConfig::BLAKE2S_256.with_key(key)?;
    if length == MAGIC_UNKNOWN_OUTPUT_LENGTH {
      trace_event!(length, "rejected blake2xs output length");
      return Err(Blake2sError::XofLengthTooLarge);
    }
    let length = if length == OUTPUT_LENGTH_UNKNOWN {
      MAGIC_UNKNOWN_OUTPUT_LENGTH
    } else {
      length
    };
    Ok(Self {
      root: Blake2s::new(config.with_node_word(u32::from(length))),
      length,
    })
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.root.update(data);
  }

  #[inline]
  pub fn reset(&mut self) {
    self.root.reset();
  }

  /// Declared output length, or `None` when unknown.
  #[inline]
  #[must_use]
  pub fn output_length(&self) -> Option<u16> {
    (self.length != MAGIC_UNKNOWN_OUTPUT_LENGTH).then_some(self.length)
  }

  /// Switch to the squeezing phase. The hasher itself is left untouched and
  /// may keep absorbing.
  #[must_use]
  pub fn finalize_xof(&self) -> Blake2xsReader {
    let remaining = match self.output_length() {
      Some(len) => u64::from(len),
      None => MAX_OUTPUT_LENGTH,
    };
    Blake2xsReader {
      root_hash: self.root.finalize_full(),
      length: self.length,
      remaining,
      unexpanded: remaining,
      block: [0u8; SIZE_256],
      pos: SIZE_256,
      node_offset: 0,
    }
  }
}

/// BLAKE2Xs output stream.
#[derive(Clone)]
pub struct Blake2xsReader {
  root_hash: [u8; SIZE_256],
  length: u16,
  /// Bytes not yet handed to the caller.
  remaining: u64,
  /// Bytes not yet expanded into `block`.
  unexpanded: u64,
  block: [u8; SIZE_256],
  pos: usize,
  node_offset: u32,
}

impl Blake2xsReader {
  /// Bytes still available.
  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> u64 {
    self.remaining
  }

  /// Expand the next output block from the root hash.
  fn expand(&mut self) {
    let digest_len = self.unexpanded.min(SIZE_256 as u64) as u32;

    // Parameter words: digest length (fan-out, depth and key length are 0),
    // leaf length, node offset, XOF length, and inner length in the top byte
    // of word 3. Salt and personalization stay zero.
    let mut h = IV;
    h[0] ^= digest_len;
    h[1] ^= SIZE_256 as u32;
    h[2] ^= self.node_offset;
    h[3] ^= u32::from(self.length) | ((SIZE_256 as u32) << 24);

    let out = finalize_words(h, [0, 0], &self.root_hash);
    self.block = out;
    self.pos = 0;
    self.node_offset = self.node_offset.wrapping_add(1);
    self.unexpanded -= u64::from(digest_len);
  }

  /// Copy up to `out.len()` output bytes into `out`, returning how many were
  /// written. Returns `0` once the declared length is exhausted.
  pub fn read(&mut self, out: &mut [u8]) -> usize {
    let n = out.len().min(usize::try_from(self.remaining).unwrap_or(usize::MAX));
    let mut dst = &mut out[..n];
    while !dst.is_empty() {
      if self.pos == SIZE_256 {
        self.expand();
      }
      let take = (SIZE_256 - self.pos).min(dst.len());
      let (head, tail) = dst.split_at_mut(take);
      head.copy_from_slice(&self.block[self.pos..self.pos + take]);
      self.pos += take;
      dst = tail;
    }
    self.remaining -= n as u64;
    if self.remaining == 0 && n > 0 {
      trace_event!(length = self.length, "blake2xs output exhausted");
    }
    n
  }
}

impl Xof for Blake2xsReader {
  #[inline]
  fn squeeze(&mut self, out: &mut [u8]) -> usize {
    self.read(out)
  }
}

#[cfg(feature = "std")]
impl std::io::Read for Blake2xsReader {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    Ok(Blake2xsReader::read(self, buf))
  }
}

impl core::fmt::Debug for Blake2xsReader {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Blake2xsReader")
      .field("length", &self.length)
      .field("remaining", &self.remaining)
      .finish_non_exhaustive()
  }
}
