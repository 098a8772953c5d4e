//! Rabbits and recurrence relations
//!
//! Population of immortal rabbit pairs where every mature pair produces a
//! litter of `k` new pairs each month:
//!
//! ```text
//! f(1) = f(2) = 1
//! f(m) = f(m - 1) + k * f(m - 2)
//! ```

use super::{ComputeError, ComputeResult};

/// Largest month whose plain Fibonacci value (`k = 1`) fits in a `u128`.
///
/// Larger litters overflow sooner; [`rabbit_pairs`] reports that as
/// [`ComputeError::Overflow`] instead of wrapping.
pub const MAX_FIBONACCI_MONTH: u32 = 186;

/// Number of rabbit pairs alive after `months` months with litter size `litter`.
///
/// Runs in `O(months)` time with two accumulators.
pub fn rabbit_pairs(months: u32, litter: u64) -> ComputeResult<u128> {
    if months == 0 {
        return Err(ComputeError::InvalidInput(
            "month count starts at 1".to_string(),
        ));
    }

    let litter = u128::from(litter);
    // (f(m - 1), f(m)) starting at m = 2
    let (mut previous, mut current): (u128, u128) = (1, 1);

    for month in 3..=months {
        let next = litter
            .checked_mul(previous)
            .and_then(|offspring| offspring.checked_add(current))
            .ok_or_else(|| {
                log::debug!("rabbit recurrence overflowed u128 at month {}", month);
                ComputeError::Overflow(format!(
                    "rabbit pairs for month {} with litter {} exceed u128",
                    month, litter
                ))
            })?;
        previous = current;
        current = next;
    }

    Ok(current)
}
