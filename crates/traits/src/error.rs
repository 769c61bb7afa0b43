//! Shared error types.
//!
//! Algorithm crates define their own error enums for parameter and state
//! validation; only verification failures are shared here.

use core::fmt;

/// Verification failed.
///
/// Returned when a computed MAC tag does not match the expected one.
/// Intentionally opaque: it carries no information about where the tags
/// differed.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: &[u8], expected: &[u8]) -> Result<(), VerificationError> {
///   let diff = computed
///     .iter()
///     .zip(expected)
///     .fold(0u8, |acc, (a, b)| acc | (a ^ b));
///   if computed.len() == expected.len() && diff == 0 {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// assert!(verify(&[0u8; 16], &[1u8; 16]).is_err());
/// assert!(verify(&[7u8; 16], &[7u8; 16]).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}
