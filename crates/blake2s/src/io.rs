//! `std::io` integration.
//!
//! [`Blake2s`] and [`Blake2xs`] accept bytes through [`std::io::Write`] so
//! they can be fed with `std::io::copy`. [`Blake2s256`](crate::Blake2s256)
//! additionally works with the [`DigestReader`] and [`DigestWriter`] adapters.
//!
//! ```
//! use blake2s::{Blake2s256, Digest as _, sum256};
//!
//! let data = vec![7u8; 10_000];
//! let mut reader = Blake2s256::reader(std::io::Cursor::new(&data));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.digest(), sum256(&data));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{DigestReader, DigestWriter};

use crate::{digest::Blake2s, xof::Blake2xs};

impl std::io::Write for Blake2s {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

impl std::io::Write for Blake2xs {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
