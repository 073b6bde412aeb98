//! # camellia-simd
//!
//! A Rust library implementing the Camellia block cipher (RFC 3713) for
//! high-throughput batch processing. The cipher state is byte-sliced
//! across SIMD vectors so that 16 blocks (128-bit vectors) or 32 blocks
//! (256-bit vectors) are encrypted or decrypted in lockstep, with the
//! Camellia S-box computed through the hardware AES last-round
//! instruction via a GF(2^8) field isomorphism.
//!
//! The library provides the cipher core only: key setup and the N-block
//! batch encrypt/decrypt paths. Block cipher modes, padding and any kind
//! of measurement harness are left to the caller.
//!
//! # Usage
//!
//! Key setup is portable; the batch entry points require a capability
//! check once at startup:
//!
//! ```
//! use camellia_simd::camellia::{select_variant, CamelliaContext, SimdVariant};
//!
//! let _ctx = CamelliaContext::new(&[0u8; 16])?;
//! if select_variant() >= SimdVariant::Simd128 {
//!     // hand 16-block (or, with Simd256, 32-block) batches to the
//!     // camellia_encrypt_*/camellia_decrypt_* entry points
//! }
//! # Ok::<(), camellia_simd::Error>(())
//! ```
//!
//! # Disclaimer
//!
//! This implementation is provided "as is", without warranty of any kind,
//! express or implied. Table lookups are performed with data-independent
//! vector shuffles and the AES instructions of the host CPU; no claims
//! are made about microarchitectural side channels beyond that.

pub mod camellia;
pub mod error;

pub use error::{Error, Result};
