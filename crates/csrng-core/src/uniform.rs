//! Bias-free range reduction and uniform floats.
//!
//! # Algorithm
//!
//! To draw from `[0, N)` we extract `bits = 8 * min_bytes(N - 1)` random bits,
//! the smallest whole-byte width whose range `M = 2^bits` covers `N`. When `N`
//! is a power of two, masking the draw is exact. Otherwise `M` splits into
//! `M / N` full intervals of length `N` plus `M mod N` leftover values:
//!
//! ```text
//! N = 65, bits = 8, M = 256, limit = 195
//!
//! 0        65       130      195    256
//! |        |        |        |      |
//! |<0---64>|<0---64>|<0---64>|unused|
//! ```
//!
//! Draws below `limit = M - (M mod N)` are reduced with `r mod N`; draws in the
//! leftover tail are discarded and redrawn. Since `N <= M`, `limit >= M / 2`
//! and each draw is accepted with probability above one half.
//!
//! `M` reaches `2^64` for bounds above `2^56`, so the limit is computed in
//! `u128` instead of relying on `u64` wraparound.

use crate::bits::{min_bytes, uint64_bits_from};
use crate::error::{Error, Result};
use crate::source::EntropySource;

/// Consecutive rejections after which a draw is abandoned. An honest source
/// gets here with probability below `2^-128`.
pub const MAX_DRAWS: u32 = 128;

/// Random bits behind each [`float64_from`] value: the `f64` significand width.
pub const FLOAT_BITS: u32 = f64::MANTISSA_DIGITS;

// ---------------------------------------------------------------------------
// Integers
// ---------------------------------------------------------------------------

/// Uniform `u64` in `[0, n)`. Fails with [`Error::InvalidArgument`] when `n == 0`.
pub fn uint64n_from<S>(src: &mut S, n: u64) -> Result<u64>
where
    S: EntropySource + ?Sized,
{
    if n == 0 {
        return Err(Error::InvalidArgument("bound must be positive, got 0".into()));
    }

    let bits = min_bytes(n - 1) * 8;
    if n.is_power_of_two() {
        return Ok(uint64_bits_from(src, bits)? & (n - 1));
    }

    let limit = rejection_limit(n, bits);
    for draw in 1..=MAX_DRAWS {
        let r = uint64_bits_from(src, bits)?;
        if u128::from(r) < limit {
            return Ok(r % n);
        }
        log::trace!("bound {n}: draw {draw} rejected ({r:#x} >= limit {limit:#x})");
    }

    log::error!(
        "bound {n}: {MAX_DRAWS} consecutive draws from {} rejected, source is not random",
        src.name()
    );
    Err(Error::RejectionLimit {
        bound: n,
        draws: MAX_DRAWS,
    })
}

/// Exclusive upper bound on accepted draws: the largest multiple of `n` not
/// above `2^bits`. `bits` must be at most 64 and `2^bits >= n`.
pub(crate) fn rejection_limit(n: u64, bits: u32) -> u128 {
    let m = 1u128 << bits;
    m - m % u128::from(n)
}

/// Uniform `i64` in `[0, n)`. Fails with [`Error::InvalidArgument`] when `n <= 0`.
pub fn intn_from<S>(src: &mut S, n: i64) -> Result<i64>
where
    S: EntropySource + ?Sized,
{
    if n <= 0 {
        return Err(Error::InvalidArgument(format!(
            "bound must be positive, got {n}"
        )));
    }
    // Result is below n, so it fits back into i64.
    Ok(uint64n_from(src, n as u64)? as i64)
}

/// Uniform index in `[0, n)`; the building block for the sequence samplers.
pub fn index_from<S>(src: &mut S, n: usize) -> Result<usize>
where
    S: EntropySource + ?Sized,
{
    Ok(uint64n_from(src, n as u64)? as usize)
}

// ---------------------------------------------------------------------------
// Floats
// ---------------------------------------------------------------------------

/// Uniform `f64` in `[0.0, 1.0)` with `2^-53` spacing. Reads 7 bytes.
pub fn float64_from<S>(src: &mut S) -> Result<f64>
where
    S: EntropySource + ?Sized,
{
    let r = uint64_bits_from(src, FLOAT_BITS)?;
    Ok(r as f64 / (1u64 << FLOAT_BITS) as f64)
}
