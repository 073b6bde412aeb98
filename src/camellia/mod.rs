//! Camellia cipher core: key setup and byte-sliced batch processing.

mod camellia_keys;
#[cfg(target_arch = "x86_64")]
mod camellia_rounds;
#[cfg(target_arch = "x86_64")]
mod camellia_simd128;
#[cfg(target_arch = "x86_64")]
mod camellia_simd256;
#[cfg(target_arch = "x86_64")]
mod camellia_vec;

pub use camellia_keys::*;
#[cfg(target_arch = "x86_64")]
pub use camellia_simd128::*;
#[cfg(target_arch = "x86_64")]
pub use camellia_simd256::*;


use crate::error::{Error, Result};

/// The widest batch path supported by the host CPU.
///
/// Variants are strictly ordered: a host reporting [`SimdVariant::Simd256`]
/// supports the 16-block path as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SimdVariant {
    /// No supported SIMD path; the batch entry points must not be called.
    None,
    /// 16-block batches (128-bit vectors, AES-NI).
    Simd128,
    /// 32-block batches (256-bit vectors) in addition to 16-block ones.
    Simd256,
}

/// Query the host CPU once and report the widest supported batch width.
///
/// The batch entry points themselves perform no capability checks;
/// callers are expected to gate on this before using them.
pub fn select_variant() -> SimdVariant {
    #[cfg(target_arch = "x86_64")]
    {
        let aes128 = std::arch::is_x86_feature_detected!("aes")
            && std::arch::is_x86_feature_detected!("ssse3")
            && std::arch::is_x86_feature_detected!("sse4.1");
        if aes128 && std::arch::is_x86_feature_detected!("avx2") {
            return SimdVariant::Simd256;
        }
        if aes128 {
            return SimdVariant::Simd128;
        }
    }
    SimdVariant::None
}

/// As [`select_variant`], but reports an unusable host as an error.
pub fn require_simd() -> Result<SimdVariant> {
    match select_variant() {
        SimdVariant::None => Err(Error::UnsupportedCpu),
        v => Ok(v),
    }
}
