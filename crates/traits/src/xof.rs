//! Extendable-output function (XOF) trait.

/// Extendable-output function producing a stream of output bytes.
///
/// Usable in `no_std` environments. Readers may also implement `std::io::Read`.
pub trait Xof: Clone {
  /// Squeeze output bytes into `out`.
  ///
  /// Returns the number of bytes written. This is less than `out.len()` only
  /// when the function has a declared output length and it has been exhausted;
  /// once exhausted every further call returns `0`.
  fn squeeze(&mut self, out: &mut [u8]) -> usize;
}
