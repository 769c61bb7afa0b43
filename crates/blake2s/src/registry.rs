//! Lookup of hash constructors by algorithm name.
//!
//! Generic code that only knows an algorithm name (from a config file or a
//! protocol identifier such as `Noise_..._BLAKE2s`) can obtain a hasher here.
//! The table is a `static`; nothing is registered at runtime.

use crate::{BLOCK_LEN, digest::Blake2s, params::SIZE_256};

/// A named, unkeyed hash algorithm.
#[derive(Clone, Copy)]
pub struct HashAlgorithm {
  /// Canonical name.
  pub name: &'static str,
  /// Digest size in bytes.
  pub output_size: usize,
  /// Block size in bytes.
  pub block_size: usize,
  aliases: &'static [&'static str],
  new: fn() -> Blake2s,
}

impl HashAlgorithm {
  /// Construct a fresh hasher.
  #[inline]
  #[must_use]
  pub fn new_hasher(&self) -> Blake2s {
    (self.new)()
  }

  fn matches(&self, name: &str) -> bool {
    self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
  }
}

impl core::fmt::Debug for HashAlgorithm {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("HashAlgorithm")
      .field("name", &self.name)
      .field("output_size", &self.output_size)
      .field("block_size", &self.block_size)
      .finish()
  }
}

static REGISTRY: [HashAlgorithm; 1] = [HashAlgorithm {
  name: "BLAKE2s-256",
  output_size: SIZE_256,
  block_size: BLOCK_LEN,
  aliases: &["blake2s256", "blake2s", "BLAKE2s"],
  new: Blake2s::default,
}];

/// All registered algorithms.
#[must_use]
pub fn all() -> &'static [HashAlgorithm] {
  &REGISTRY
}

/// Find an algorithm by name, ignoring ASCII case.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static HashAlgorithm> {
  REGISTRY.iter().find(|alg| alg.matches(name))
}
