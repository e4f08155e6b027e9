//! Whole-game prize tier tables.

use serde::Serialize;

use crate::combinatorics::error::DomainError;
use crate::combinatorics::outcomes::{
    favorable_outcomes, is_reachable, total_outcomes, BonusCondition, LotteryConfiguration,
    MatchQuery,
};
use crate::combinatorics::probability::{probability_of, ProbabilityResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrizeTier {
    pub query: MatchQuery,
    pub probability: ProbabilityResult,
}

/// Every outcome class a ticket can reach, best tier first.
///
/// Bonus games split each match count into "with bonus" and "without bonus" rows. Tiers that
/// no ticket can reach in a small pool are left out, so the favorable counts of the returned
/// rows always sum to [total_outcomes].
pub fn prize_tiers(config: &LotteryConfiguration) -> Result<Vec<PrizeTier>, DomainError> {
    let mut tiers = Vec::new();
    for k in (0..=config.draw_size()).rev() {
        let conditions: &[BonusCondition] = if !config.has_bonus() {
            &[BonusCondition::None]
        } else if k == config.draw_size() {
            &[BonusCondition::ExcludingBonus]
        } else {
            &[BonusCondition::IncludingBonus, BonusCondition::ExcludingBonus]
        };
        for &condition in conditions {
            let query = MatchQuery::new(k, condition);
            if !is_reachable(config, &query)? {
                continue;
            }
            tiers.push(PrizeTier {
                query,
                probability: probability_of(config, &query)?,
            });
        }
    }
    Ok(tiers)
}

/// Probability of matching at least `min_k` winning numbers, bonus ignored.
pub fn odds_of_at_least(
    config: &LotteryConfiguration,
    min_k: u32,
) -> Result<ProbabilityResult, DomainError> {
    if min_k > config.draw_size() {
        return Err(DomainError::MatchExceedsDraw {
            k: min_k,
            draw_size: config.draw_size(),
        });
    }
    let mut favorable: u128 = 0;
    for k in min_k..=config.draw_size() {
        let query = MatchQuery::plain(k);
        if !is_reachable(config, &query)? {
            continue;
        }
        let count = favorable_outcomes(config, &query)?;
        favorable = favorable.checked_add(count).ok_or(DomainError::CountOverflow {
            left: favorable,
            right: count,
        })?;
    }
    Ok(ProbabilityResult::from_counts(favorable, total_outcomes(config)?))
}
