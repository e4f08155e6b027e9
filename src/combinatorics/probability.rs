use std::fmt;

use serde::Serialize;

use crate::combinatorics::error::DomainError;
use crate::combinatorics::fraction::Fraction;
use crate::combinatorics::outcomes::{
    favorable_outcomes, total_outcomes, LotteryConfiguration, MatchQuery,
};

/// Exact probability of one query.
///
/// `exact` keeps the unreduced favorable/total pair for auditing; `reduced` is lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbabilityResult {
    pub favorable: u128,
    pub total: u128,
    pub exact: Fraction,
    pub reduced: Fraction,
    /// Nearest whole "1 in N"; `None` when the outcome is impossible.
    pub one_in: Option<u128>,
}

impl ProbabilityResult {
    pub fn from_counts(favorable: u128, total: u128) -> Self {
        let exact = Fraction::new(favorable, total);
        let reduced = exact.reduced();
        Self {
            favorable,
            total,
            exact,
            reduced,
            one_in: reduced.one_in(),
        }
    }

    /// True when the reduced fraction is already `1/N`, so `one_in` is exact.
    pub fn is_exact_unit(&self) -> bool {
        self.reduced.is_unit()
    }

    pub fn as_f64(&self) -> f64 {
        self.exact.as_f64()
    }
}

impl fmt::Display for ProbabilityResult {
    // `a/b ≈ 1/c`, or `a/b = 1/c` when the reduction is exact.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.exact)?;
        match self.one_in {
            Some(one_in) if self.is_exact_unit() => write!(f, " = 1/{one_in}"),
            Some(one_in) => write!(f, " \u{2248} 1/{one_in}"),
            None => Ok(()),
        }
    }
}

/// Exact probability that a single ticket satisfies `query`.
///
/// # Example
/// ```
/// # use lotto_odds::combinatorics::{probability_of, BonusCondition, LotteryConfiguration, MatchQuery};
/// let config = LotteryConfiguration::with_bonus(49, 6).unwrap();
/// let result = probability_of(&config, &MatchQuery::new(5, BonusCondition::IncludingBonus)).unwrap();
/// assert_eq!(result.to_string(), "6/13983816 = 1/2330636");
/// ```
pub fn probability_of(
    config: &LotteryConfiguration,
    query: &MatchQuery,
) -> Result<ProbabilityResult, DomainError> {
    let favorable = favorable_outcomes(config, query)?;
    let total = total_outcomes(config)?;
    let result = ProbabilityResult::from_counts(favorable, total);
    tracing::debug!(%config, %query, %favorable, %total, "probability computed");
    Ok(result)
}
