//! 32-block Batch Interface (SIMD256)
//!
//! Batch encryption and decryption of 32 Camellia blocks in parallel
//! using 256-bit vectors. The round algebra is the same generic code as
//! the 16-block path; only the AES last-round step differs between the
//! two instantiations this module dispatches over:
//!
//! - hosts with VAES run the native 256-bit `vaesenclast`,
//! - plain AVX2/AES-NI hosts split each vector into its two 128-bit
//!   halves, apply the 128-bit instruction twice and reinsert.
//!
//! Buffers are 512 bytes (32 blocks); unaligned and aliasing pointers
//! are permitted exactly as on the 16-block path.

use super::camellia_keys::CamelliaContext;
use super::camellia_rounds::{decrypt_batch, encrypt_batch};
use super::camellia_vec::{Simd256, Simd256Vaes};

/// Number of blocks one SIMD256 batch call processes.
pub const SIMD256_PARALLEL_BLOCKS: usize = 32;

#[target_feature(enable = "avx2,vaes")]
unsafe fn encrypt_32_vaes(ctx: &CamelliaContext, out: *mut u8, input: *const u8) {
    encrypt_batch::<Simd256Vaes>(ctx, out, input);
}

#[target_feature(enable = "avx2,aes")]
unsafe fn encrypt_32_aesni(ctx: &CamelliaContext, out: *mut u8, input: *const u8) {
    encrypt_batch::<Simd256>(ctx, out, input);
}

#[target_feature(enable = "avx2,vaes")]
unsafe fn decrypt_32_vaes(ctx: &CamelliaContext, out: *mut u8, input: *const u8) {
    decrypt_batch::<Simd256Vaes>(ctx, out, input);
}

#[target_feature(enable = "avx2,aes")]
unsafe fn decrypt_32_aesni(ctx: &CamelliaContext, out: *mut u8, input: *const u8) {
    decrypt_batch::<Simd256>(ctx, out, input);
}

/// Encrypt 32 blocks (512 bytes) from `input` into `out`.
///
/// # Safety
///
/// - The host CPU must support the SIMD256 path; check with
///   [`select_variant`](super::select_variant).
/// - `input` must be readable and `out` writable for 512 bytes. The
///   regions may overlap only if the pointers are equal (in-place).
pub unsafe fn camellia_encrypt_32_blocks(
    ctx: &CamelliaContext,
    out: *mut u8,
    input: *const u8,
) {
    if std::arch::is_x86_feature_detected!("vaes") {
        encrypt_32_vaes(ctx, out, input);
    } else {
        encrypt_32_aesni(ctx, out, input);
    }
}

/// Decrypt 32 blocks (512 bytes) from `input` into `out`.
///
/// # Safety
///
/// Same contract as [`camellia_encrypt_32_blocks`].
pub unsafe fn camellia_decrypt_32_blocks(
    ctx: &CamelliaContext,
    out: *mut u8,
    input: *const u8,
) {
    if std::arch::is_x86_feature_detected!("vaes") {
        decrypt_32_vaes(ctx, out, input);
    } else {
        decrypt_32_aesni(ctx, out, input);
    }
}
