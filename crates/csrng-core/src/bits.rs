//! Bit extraction: the only place that turns source bytes into integers.
//!
//! Reads are byte-granular and minimal. Asking for `n` bits reads
//! `ceil(n / 8)` bytes, never a full word, so scarce sources are not drained
//! faster than needed.

use crate::error::{Error, Result};
use crate::source::EntropySource;

/// Widest value [`uint64_bits_from`] can produce.
pub const MAX_BITS: u32 = u64::BITS;

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Return a `u64` whose `n` low bits are random and whose other bits are zero.
///
/// Reads exactly `ceil(n / 8)` bytes and assembles them little-endian. Fails
/// with [`Error::InvalidArgument`] when `n > 64` (nothing is read) and with
/// [`Error::Source`] when the source cannot deliver.
pub fn uint64_bits_from<S>(src: &mut S, n: u32) -> Result<u64>
where
    S: EntropySource + ?Sized,
{
    if n > MAX_BITS {
        return Err(Error::InvalidArgument(format!(
            "cannot extract {n} bits, at most {MAX_BITS}"
        )));
    }

    let bytes = n.div_ceil(8) as usize;
    let mut buf = [0u8; 8];
    if let Err(e) = src.fill_bytes(&mut buf[..bytes]) {
        log::warn!(
            "entropy source {} failed to supply {bytes} bytes: {e}",
            src.name()
        );
        return Err(e.into());
    }

    Ok(u64::from_le_bytes(buf) & mask(n))
}

/// Low-bit mask of width `n`. `n == 64` is special-cased so `1 << 64` is
/// never evaluated.
fn mask(n: u32) -> u64 {
    if n >= MAX_BITS {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

// ---------------------------------------------------------------------------
// Width helper
// ---------------------------------------------------------------------------

/// Smallest number of bytes that can hold `n` in binary: `0` for `0`,
/// otherwise `ceil(bitlength(n) / 8)`.
pub fn min_bytes(n: u64) -> u32 {
    (u64::BITS - n.leading_zeros()).div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::sources::FixedSource;

    const PATTERN: [u8; 8] = [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0];

    // -----------------------------------------------------------------------
    // Byte order and read size
    // -----------------------------------------------------------------------

    #[test]
    fn test_reads_little_endian_minimum_bytes() {
        let cases: [(u32, u64); 9] = [
            (0, 0),
            (8, 0x12),
            (16, 0x3412),
            (24, 0x56_3412),
            (32, 0x7856_3412),
            (40, 0x9a_7856_3412),
            (48, 0xbc9a_7856_3412),
            (56, 0xde_bc9a_7856_3412),
            (64, 0xf0de_bc9a_7856_3412),
        ];
        for (bits, expected) in cases {
            // Source holds exactly the bytes needed; reading more would fail.
            let mut src = FixedSource::new(&PATTERN[..(bits / 8) as usize]);
            let v = uint64_bits_from(&mut src, bits).unwrap();
            assert_eq!(v, expected, "bits={bits}");
            assert_eq!(src.remaining(), 0, "bits={bits}");
        }
    }

    #[test]
    fn test_two_bytes_scenario() {
        let mut src = FixedSource::new(vec![0x12, 0x34]);
        assert_eq!(uint64_bits_from(&mut src, 16).unwrap(), 0x3412);
    }

    #[test]
    fn test_partial_byte_reads_whole_byte() {
        for bits in 1..=64u32 {
            let mut src = FixedSource::new(vec![0u8; 8]);
            uint64_bits_from(&mut src, bits).unwrap();
            assert_eq!(src.consumed() as u32, bits.div_ceil(8), "bits={bits}");
        }
    }

    // -----------------------------------------------------------------------
    // Masking
    // -----------------------------------------------------------------------

    #[test]
    fn test_masks_extra_bits() {
        let cases: [(u32, u64); 15] = [
            (0, 0x0),
            (1, 0x1),
            (2, 0x3),
            (3, 0x7),
            (4, 0xf),
            (5, 0x1f),
            (6, 0x3f),
            (7, 0x7f),
            (8, 0xff),
            (9, 0x1ff),
            (60, 0x0fff_ffff_ffff_ffff),
            (61, 0x1fff_ffff_ffff_ffff),
            (62, 0x3fff_ffff_ffff_ffff),
            (63, 0x7fff_ffff_ffff_ffff),
            (64, 0xffff_ffff_ffff_ffff),
        ];
        for (bits, expected) in cases {
            let mut src = FixedSource::new(vec![0xff; 8]);
            assert_eq!(uint64_bits_from(&mut src, bits).unwrap(), expected, "bits={bits}");
        }
    }

    #[test]
    fn test_no_bits_above_width() {
        for bits in 0..=64u32 {
            let mut src = FixedSource::new(vec![0xa5; 8]);
            let v = uint64_bits_from(&mut src, bits).unwrap();
            assert_eq!(v & !mask(bits), 0, "bits={bits}");
        }
    }

    // -----------------------------------------------------------------------
    // Errors
    // -----------------------------------------------------------------------

    #[test]
    fn test_too_many_bits_reads_nothing() {
        let mut src = FixedSource::new(vec![0u8; 16]);
        let err = uint64_bits_from(&mut src, 65).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(src.consumed(), 0);
    }

    #[test]
    fn test_empty_source_is_error() {
        let mut src = FixedSource::default();
        let err = uint64_bits_from(&mut src, 8).unwrap_err();
        assert!(matches!(
            err,
            Error::Source(SourceError::Exhausted { requested: 1, .. })
        ));
    }

    #[test]
    fn test_zero_bits_from_empty_source() {
        let mut src = FixedSource::default();
        assert_eq!(uint64_bits_from(&mut src, 0).unwrap(), 0);
    }

    // -----------------------------------------------------------------------
    // min_bytes
    // -----------------------------------------------------------------------

    #[test]
    fn test_min_bytes() {
        let cases: [(u64, u32); 18] = [
            (0, 0),
            (0x1, 1),
            (0xff, 1),
            (0x100, 2),
            (0xffff, 2),
            (0x1_0000, 3),
            (0xff_ffff, 3),
            (0x100_0000, 4),
            (0xffff_ffff, 4),
            (0x1_0000_0000, 5),
            (0xff_ffff_ffff, 5),
            (0x100_0000_0000, 6),
            (0xffff_ffff_ffff, 6),
            (0x1_0000_0000_0000, 7),
            (0xff_ffff_ffff_ffff, 7),
            (0x100_0000_0000_0000, 8),
            (0x7fff_ffff_ffff_ffff, 8),
            (0xffff_ffff_ffff_ffff, 8),
        ];
        for (arg, expected) in cases {
            assert_eq!(min_bytes(arg), expected, "min_bytes({arg:#x})");
        }
    }

    #[test]
    fn test_min_bytes_matches_bit_length() {
        for shift in 0..64u32 {
            let n = 1u64 << shift;
            assert_eq!(min_bytes(n), (shift + 1).div_ceil(8), "n={n:#x}");
        }
    }
}
