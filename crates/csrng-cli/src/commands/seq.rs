//! Sequence commands: `perm`, `sample`.

use csrng_core::EntropySource;

use super::{CommandResult, Format, Report, render_sequence};

pub fn run_perm(src: &mut dyn EntropySource, n: usize, format: Format) -> CommandResult {
    let report = Report {
        kind: "perm",
        bound: Some(n as u64),
        values: csrng_core::perm_from(src, n)?,
    };
    println!("{}", render_sequence(&report, format)?);
    Ok(())
}

pub fn run_sample(
    src: &mut dyn EntropySource,
    n: usize,
    k: usize,
    format: Format,
) -> CommandResult {
    if k > n {
        log::warn!("sample size {k} exceeds range {n}, returning all {n} values");
    }
    let report = Report {
        kind: "sample",
        bound: Some(n as u64),
        values: csrng_core::sample_from(src, n, k)?,
    };
    println!("{}", render_sequence(&report, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use csrng_core::FixedSource;

    #[test]
    fn test_run_perm_with_fixed_source() {
        let mut src = FixedSource::new(vec![1, 0]);
        run_perm(&mut src, 3, Format::Text).unwrap();
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn test_run_sample_reports_exhaustion() {
        let mut src = FixedSource::new(vec![3]);
        let err = run_sample(&mut src, 10, 2, Format::Json).unwrap_err();
        assert!(err.to_string().contains("exhausted"));
    }
}
