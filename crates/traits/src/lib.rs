//! Core hashing traits for the blake2s workspace.
//!
//! This crate provides the foundational traits the hash engine conforms to. It
//! is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | Fixed-size cryptographic digests | BLAKE2s-256 |
//! | [`Xof`] | Extendable-output functions | BLAKE2Xs |
//!
//! # Error Types
//!
//! - [`VerificationError`] - Opaque error for MAC tag verification
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;
#[cfg(feature = "std")]
pub mod io;
mod xof;

pub use digest::Digest;
pub use error::VerificationError;
pub use xof::Xof;
