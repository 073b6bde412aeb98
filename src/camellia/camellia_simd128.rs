//! 16-block Batch Interface (SIMD128)
//!
//! Batch encryption and decryption of 16 Camellia blocks in parallel
//! using 128-bit vectors with AES-NI for the s-box computation. Buffers
//! are 256 bytes (16 blocks of 16 bytes) in big-endian Camellia block
//! order; input and output may be unaligned and may alias, so in-place
//! operation is simply a matter of passing the same pointer twice.
//!
//! These functions do not verify CPU capabilities; callers gate on
//! [`select_variant`](super::select_variant) once at startup.

use super::camellia_keys::CamelliaContext;
use super::camellia_rounds::{decrypt_batch, encrypt_batch};
use super::camellia_vec::Simd128;

/// Number of blocks one SIMD128 batch call processes.
pub const SIMD128_PARALLEL_BLOCKS: usize = 16;

/// Encrypt 16 blocks (256 bytes) from `input` into `out`.
///
/// # Safety
///
/// - The host CPU must support the SIMD128 path (AES-NI, SSSE3 and
///   SSE4.1); check with [`select_variant`](super::select_variant).
/// - `input` must be readable and `out` writable for 256 bytes. The
///   regions may overlap only if the pointers are equal (in-place).
#[target_feature(enable = "aes,ssse3,sse4.1")]
pub unsafe fn camellia_encrypt_16_blocks(
    ctx: &CamelliaContext,
    out: *mut u8,
    input: *const u8,
) {
    encrypt_batch::<Simd128>(ctx, out, input);
}

/// Decrypt 16 blocks (256 bytes) from `input` into `out`.
///
/// # Safety
///
/// Same contract as [`camellia_encrypt_16_blocks`].
#[target_feature(enable = "aes,ssse3,sse4.1")]
pub unsafe fn camellia_decrypt_16_blocks(
    ctx: &CamelliaContext,
    out: *mut u8,
    input: *const u8,
) {
    decrypt_batch::<Simd128>(ctx, out, input);
}
