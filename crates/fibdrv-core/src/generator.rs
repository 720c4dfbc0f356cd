//! Sequence generation and cross-validation.

use std::ops::RangeInclusive;
use std::sync::Arc;

use fibdrv_bignum::BigInt;
use rayon::prelude::*;
use tracing::debug;

use crate::calculator::{Calculator, FibError};

/// Number of indices in a non-empty `range`, saturating at `usize::MAX`.
fn range_len(range: &RangeInclusive<u64>) -> usize {
    usize::try_from(range.end() - range.start()).map_or(usize::MAX, |d| d.saturating_add(1))
}

/// Compute F(i) for every `i` in `range`, one index after another.
pub fn generate(
    calc: &dyn Calculator,
    range: RangeInclusive<u64>,
) -> Result<Vec<(u64, BigInt)>, FibError> {
    if range.is_empty() {
        return Err(FibError::Config("start must be <= end".into()));
    }
    debug!(
        start = range.start(),
        end = range.end(),
        len = range_len(&range),
        calculator = calc.name(),
        "sequential generation"
    );
    range
        .map(|n| calc.calculate(n).map(|value| (n, value)))
        .collect()
}

/// Compute F(i) for every `i` in `range` on the rayon pool.
///
/// Each index is evaluated with its own values; results come back in index
/// order.
pub fn generate_parallel(
    calc: &dyn Calculator,
    range: RangeInclusive<u64>,
) -> Result<Vec<(u64, BigInt)>, FibError> {
    if range.is_empty() {
        return Err(FibError::Config("start must be <= end".into()));
    }
    debug!(
        start = range.start(),
        end = range.end(),
        calculator = calc.name(),
        "parallel generation"
    );
    range
        .into_par_iter()
        .map(|n| calc.calculate(n).map(|value| (n, value)))
        .collect()
}

/// Run every calculator on `n` and require identical results.
///
/// Returns the agreed value.
pub fn cross_check(calcs: &[Arc<dyn Calculator>], n: u64) -> Result<BigInt, FibError> {
    let Some((first, rest)) = calcs.split_first() else {
        return Err(FibError::Config("no calculators to cross-check".into()));
    };
    let expected = first.calculate(n)?;
    for calc in rest {
        let value = calc.calculate(n)?;
        if value != expected {
            return Err(FibError::Mismatch {
                n,
                left: first.name().to_string(),
                right: calc.name().to_string(),
            });
        }
    }
    Ok(expected)
}
