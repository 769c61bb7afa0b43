//! BLAKE2s (RFC 7693): streaming hash, keyed MAC, resumable state, BLAKE2Xs.
//!
//! BLAKE2s is optimized for 8- to 32-bit platforms and produces digests of any
//! size from 1 to 32 bytes. This crate is `no_std` compatible, allocation
//! free, and portable.
//!
//! # Quick Start
//!
//! ```
//! use blake2s::{Blake2s, Blake2s256, Digest as _, sum256};
//!
//! // One-shot
//! let digest = sum256(b"hello world");
//!
//! // Streaming through the `Digest` trait
//! let mut h = Blake2s256::new();
//! h.update(b"hello ");
//! h.update(b"world");
//! assert_eq!(h.finalize(), digest);
//!
//! // Keyed MAC with a 16-byte tag
//! let mut mac = Blake2s::new_128(b"a secret key")?;
//! mac.update(b"message");
//! let tag = mac.finalize();
//! assert!(mac.verify(tag.as_bytes()).is_ok());
//! # Ok::<(), blake2s::Blake2sError>(())
//! ```
//!
//! # Suspending and resuming
//!
//! Unkeyed state can be exported with [`Blake2s::marshal_binary`] into a
//! fixed 109-byte snapshot and resumed with [`Blake2s::from_marshaled`]. Keyed
//! state is never exported.
//!
//! # Modules
//!
//! - [`compress`] - The compression function and its constants.
//! - [`registry`] - Name-based lookup for generic callers.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io` integration (implies `alloc`) |
//! | `alloc` | Yes | [`Blake2s::finalize_append`] |
//! | `tracing` | No | Debug events on rejected inputs and XOF exhaustion |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod trace;

pub mod compress;
mod digest;
mod error;
#[cfg(feature = "std")]
pub mod io;
mod marshal;
mod params;
pub mod registry;
mod xof;

pub use compress::BLOCK_LEN;
pub use digest::{Blake2s, Blake2s256, Blake2sOutput, sum256};
pub use error::Blake2sError;
pub use marshal::{MAGIC, MARSHALED_LEN};
pub use params::{Blake2sConfig, MAX_KEY_LEN, SIZE_128, SIZE_256};
pub use traits::{Digest, VerificationError, Xof};
pub use xof::{Blake2xs, Blake2xsReader, OUTPUT_LENGTH_UNKNOWN};
