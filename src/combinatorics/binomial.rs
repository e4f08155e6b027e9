//! Exact binomial coefficients over overflow-checked 128-bit integers.

use crate::combinatorics::error::DomainError;
use crate::combinatorics::fraction::gcd;

/// Number of `r`-subsets of an `n`-element set.
///
/// Uses the running product `C(n, i+1) = C(n, i) * (n - i) / (i + 1)`. The gcd of the
/// accumulator and `i + 1` is divided out before multiplying, so every step stays integral
/// and no intermediate value exceeds the final result by more than a factor of `n`.
///
/// # Example
/// ```
/// # use lotto_odds::combinatorics::binomial;
/// assert_eq!(binomial(49, 6).unwrap(), 13_983_816);
/// ```
pub fn binomial(n: i64, r: i64) -> Result<u128, DomainError> {
    if n < 0 || r < 0 {
        return Err(DomainError::NegativeOperand { n, r });
    }
    if r > n {
        return Err(DomainError::SubsetTooLarge { n, r });
    }

    let size = n as u128;
    let steps = (r as u128).min(size - r as u128);
    let mut acc: u128 = 1;
    for i in 0..steps {
        let factor = size - i;
        let divisor = i + 1;
        let common = gcd(acc, divisor);
        // acc / common and divisor / common are coprime, so the rest of divisor divides factor.
        acc = (acc / common)
            .checked_mul(factor / (divisor / common))
            .ok_or(DomainError::Overflow { n, r })?;
    }
    Ok(acc)
}
