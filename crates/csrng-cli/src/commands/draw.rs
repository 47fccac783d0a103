//! Repeated independent draws: `intn`, `float64`, `bits`.

use csrng_core::EntropySource;

use super::{CommandResult, Format, Report, render_draws};

pub fn run_intn(
    src: &mut dyn EntropySource,
    range: i64,
    count: usize,
    format: Format,
) -> CommandResult {
    let report = intn_report(src, range, count)?;
    println!("{}", render_draws(&report, format)?);
    Ok(())
}

pub fn run_float64(src: &mut dyn EntropySource, count: usize, format: Format) -> CommandResult {
    let report = float64_report(src, count)?;
    println!("{}", render_draws(&report, format)?);
    Ok(())
}

pub fn run_bits(
    src: &mut dyn EntropySource,
    bits: u32,
    count: usize,
    format: Format,
) -> CommandResult {
    let report = bits_report(src, bits, count)?;
    println!("{}", render_draws(&report, format)?);
    Ok(())
}

fn intn_report(
    src: &mut dyn EntropySource,
    range: i64,
    count: usize,
) -> csrng_core::Result<Report<i64>> {
    let values = (0..count)
        .map(|_| csrng_core::intn_from(&mut *src, range))
        .collect::<csrng_core::Result<Vec<_>>>()?;
    Ok(Report {
        kind: "intn",
        bound: u64::try_from(range).ok(),
        values,
    })
}

fn float64_report(src: &mut dyn EntropySource, count: usize) -> csrng_core::Result<Report<f64>> {
    let values = (0..count)
        .map(|_| csrng_core::float64_from(&mut *src))
        .collect::<csrng_core::Result<Vec<_>>>()?;
    Ok(Report {
        kind: "float64",
        bound: None,
        values,
    })
}

fn bits_report(
    src: &mut dyn EntropySource,
    bits: u32,
    count: usize,
) -> csrng_core::Result<Report<u64>> {
    let values = (0..count)
        .map(|_| csrng_core::uint64_bits_from(&mut *src, bits))
        .collect::<csrng_core::Result<Vec<_>>>()?;
    Ok(Report {
        kind: "bits",
        bound: None,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use csrng_core::{Error, FixedSource};

    #[test]
    fn test_intn_report_from_fixed_bytes() {
        // range 10 -> one byte per draw, limit 250.
        let mut src = FixedSource::new(vec![3, 13, 249]);
        let report = intn_report(&mut src, 10, 3).unwrap();
        assert_eq!(report.values, vec![3, 3, 9]);
        assert_eq!(report.bound, Some(10));
    }

    #[test]
    fn test_intn_report_rejects_bad_range() {
        let mut src = FixedSource::new(vec![0; 4]);
        assert!(matches!(
            intn_report(&mut src, 0, 1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_intn_report_zero_count() {
        let mut src = FixedSource::default();
        assert!(intn_report(&mut src, 256, 0).unwrap().values.is_empty());
    }

    #[test]
    fn test_float64_report_reads_seven_bytes_each() {
        let mut src = FixedSource::new(vec![0u8; 14]);
        let report = float64_report(&mut src, 2).unwrap();
        assert_eq!(report.values, vec![0.0, 0.0]);
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn test_bits_report_masks() {
        let mut src = FixedSource::new(vec![0xff; 4]);
        let report = bits_report(&mut src, 12, 2).unwrap();
        assert_eq!(report.values, vec![0xfff, 0xfff]);
    }

    #[test]
    fn test_exhausted_source_surfaces_error() {
        let mut src = FixedSource::new(vec![1]);
        let err = bits_report(&mut src, 8, 2).unwrap_err();
        assert!(err.is_source_error());
    }
}
