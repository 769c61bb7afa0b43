//! Cryptographic digest trait.
//!
//! Streaming updates, idempotent finalize, and reset support.

use core::fmt::Debug;

/// Cryptographic hash function producing a fixed-size digest.
///
/// Implementors buffer partial input internally; `finalize` must not disturb
/// the streaming state, so calling it twice without an intervening `update`
/// yields the same output.
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Input block size in bytes.
  const BLOCK_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug + AsRef<[u8]>;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the digest.
  ///
  /// This method does not consume the hasher, allowing further updates if needed.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the digest of data in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the digest of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn digest_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the digest transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::Digest;
  /// # #[derive(Clone, Default)]
  /// # struct XorDigest([u8; 1]);
  /// # impl Digest for XorDigest {
  /// #   const OUTPUT_SIZE: usize = 1;
  /// #   const BLOCK_SIZE: usize = 1;
  /// #   type Output = [u8; 1];
  /// #   fn new() -> Self { Self([0]) }
  /// #   fn update(&mut self, data: &[u8]) {
  /// #     self.0[0] = data.iter().fold(self.0[0], |acc, &b| acc ^ b);
  /// #   }
  /// #   fn finalize(&self) -> Self::Output { self.0 }
  /// #   fn reset(&mut self) { self.0 = [0]; }
  /// # }
  /// # use std::io::Cursor;
  /// let mut reader = XorDigest::reader(Cursor::new(b"abc".to_vec()));
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// assert_eq!(reader.digest(), [b'a' ^ b'b' ^ b'c']);
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::DigestReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::DigestReader::new(inner)
  }

  /// Wrap a writer to compute the digest transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::Digest;
  /// # #[derive(Clone, Default)]
  /// # struct XorDigest([u8; 1]);
  /// # impl Digest for XorDigest {
  /// #   const OUTPUT_SIZE: usize = 1;
  /// #   const BLOCK_SIZE: usize = 1;
  /// #   type Output = [u8; 1];
  /// #   fn new() -> Self { Self([0]) }
  /// #   fn update(&mut self, data: &[u8]) {
  /// #     self.0[0] = data.iter().fold(self.0[0], |acc, &b| acc ^ b);
  /// #   }
  /// #   fn finalize(&self) -> Self::Output { self.0 }
  /// #   fn reset(&mut self) { self.0 = [0]; }
  /// # }
  /// # use std::io::Write;
  /// let mut writer = XorDigest::writer(Vec::new());
  /// writer.write_all(b"hi")?;
  /// let (out, digest) = writer.into_parts();
  /// assert_eq!(out, b"hi".to_vec());
  /// assert_eq!(digest, [b'h' ^ b'i']);
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::DigestWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::DigestWriter::new(inner)
  }
}
