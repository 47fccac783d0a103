//! Random permutations and k-subsets, built only on [`index_from`].

use std::collections::HashSet;

use crate::error::Result;
use crate::source::EntropySource;
use crate::uniform::index_from;

/// Random permutation of `0..n` (inside-out Fisher–Yates).
///
/// Every one of the `n!` orderings is equally likely. Step `i` draws from
/// `[0, i]`, so the first step reads no bytes at all.
pub fn perm_from<S>(src: &mut S, n: usize) -> Result<Vec<usize>>
where
    S: EntropySource + ?Sized,
{
    let mut m = vec![0usize; n];
    for i in 0..n {
        let j = index_from(src, i + 1)?;
        m[i] = m[j];
        m[j] = i;
    }
    Ok(m)
}

/// `min(k, n)` distinct values from `0..n`, chosen uniformly among subsets.
///
/// When more than half the range is wanted this takes a prefix of a full
/// permutation. Otherwise it draws from `[0, n)` and skips repeats. In that
/// case values come back in draw order: deterministic for a deterministic
/// source, but not sorted.
pub fn sample_from<S>(src: &mut S, n: usize, k: usize) -> Result<Vec<usize>>
where
    S: EntropySource + ?Sized,
{
    let k = k.min(n);

    if k > n / 2 {
        let mut m = perm_from(src, n)?;
        m.truncate(k);
        return Ok(m);
    }

    let mut sample = Vec::with_capacity(k);
    let mut seen = HashSet::with_capacity(k);
    while sample.len() < k {
        let r = index_from(src, n)?;
        if seen.insert(r) {
            sample.push(r);
        }
    }
    Ok(sample)
}
