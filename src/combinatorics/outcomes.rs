//! Outcome counting for "match k of the drawn numbers" queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::combinatorics::binomial::binomial;
use crate::combinatorics::error::DomainError;

/// Shape of a game: how many numbers exist, how many are drawn, whether a bonus follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LotteryConfiguration {
    pool_size: u32,
    draw_size: u32,
    has_bonus: bool,
    bonus_pool_size: u32,
}

impl LotteryConfiguration {
    /// A game without a bonus number.
    pub fn new(pool_size: u32, draw_size: u32) -> Result<Self, DomainError> {
        if draw_size > pool_size {
            return Err(DomainError::DrawExceedsPool {
                pool_size,
                draw_size,
            });
        }
        Ok(Self {
            pool_size,
            draw_size,
            has_bonus: false,
            bonus_pool_size: 0,
        })
    }

    /// A game with one bonus number drawn from the numbers left after the main draw.
    pub fn with_bonus(pool_size: u32, draw_size: u32) -> Result<Self, DomainError> {
        let available = pool_size.saturating_sub(draw_size);
        Self::with_bonus_pool(pool_size, draw_size, available)
    }

    /// Like [LotteryConfiguration::with_bonus] with an explicit bonus pool size.
    pub fn with_bonus_pool(
        pool_size: u32,
        draw_size: u32,
        bonus_pool_size: u32,
    ) -> Result<Self, DomainError> {
        let base = Self::new(pool_size, draw_size)?;
        let available = pool_size - draw_size;
        if bonus_pool_size == 0 || bonus_pool_size > available {
            return Err(DomainError::InvalidBonusPool {
                bonus_pool_size,
                available,
            });
        }
        Ok(Self {
            has_bonus: true,
            bonus_pool_size,
            ..base
        })
    }

    pub fn pool_size(&self) -> u32 {
        self.pool_size
    }

    pub fn draw_size(&self) -> u32 {
        self.draw_size
    }

    pub fn has_bonus(&self) -> bool {
        self.has_bonus
    }

    /// Zero when the game has no bonus number.
    pub fn bonus_pool_size(&self) -> u32 {
        self.bonus_pool_size
    }
}

impl fmt::Display for LotteryConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.draw_size, self.pool_size)?;
        if self.has_bonus {
            write!(f, " + bonus")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BonusCondition {
    /// Bonus number not considered.
    None,
    /// Ticket does not hold the bonus number.
    ExcludingBonus,
    /// Ticket holds the bonus number in one of its non-matching slots.
    IncludingBonus,
}

impl BonusCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ExcludingBonus => "excluding-bonus",
            Self::IncludingBonus => "including-bonus",
        }
    }
}

impl fmt::Display for BonusCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BonusCondition {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "none" | "" => Ok(Self::None),
            "excluding-bonus" | "excluding" | "no-bonus" => Ok(Self::ExcludingBonus),
            "including-bonus" | "including" | "bonus" => Ok(Self::IncludingBonus),
            other => Err(format!("unknown bonus condition '{other}'")),
        }
    }
}

/// "Match `k` winning numbers" under a bonus condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MatchQuery {
    pub k: u32,
    pub bonus_condition: BonusCondition,
}

impl MatchQuery {
    pub fn new(k: u32, bonus_condition: BonusCondition) -> Self {
        Self { k, bonus_condition }
    }

    pub fn plain(k: u32) -> Self {
        Self::new(k, BonusCondition::None)
    }
}

impl fmt::Display for MatchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bonus_condition {
            BonusCondition::None | BonusCondition::ExcludingBonus => write!(f, "{}", self.k),
            BonusCondition::IncludingBonus => write!(f, "{} + bonus", self.k),
        }
    }
}

/// Count of all distinct tickets: `C(pool, draw)`.
pub fn total_outcomes(config: &LotteryConfiguration) -> Result<u128, DomainError> {
    binomial(config.pool_size.into(), config.draw_size.into())
}

/// Ticket slots left after the matched numbers, paired with the non-winning numbers that can
/// fill them.
fn open_slots(
    config: &LotteryConfiguration,
    query: &MatchQuery,
) -> Result<(i64, i64), DomainError> {
    let draw = i64::from(config.draw_size);
    let pool = i64::from(config.pool_size);
    let k = i64::from(query.k);
    if query.k > config.draw_size {
        return Err(DomainError::MatchExceedsDraw {
            k: query.k,
            draw_size: config.draw_size,
        });
    }

    let (losing_pool, remaining) = match query.bonus_condition {
        BonusCondition::None => (pool - draw, draw - k),
        BonusCondition::ExcludingBonus => {
            require_bonus(config)?;
            (pool - draw - 1, draw - k)
        }
        BonusCondition::IncludingBonus => {
            require_bonus(config)?;
            // One slot holds the bonus number: C(1, 1) == 1.
            (pool - draw - 1, draw - 1 - k)
        }
    };
    if remaining < 0 {
        return Err(DomainError::NegativeRemainingSlots {
            k: query.k,
            remaining,
        });
    }
    Ok((losing_pool, remaining))
}

/// Whether some ticket can land in `query`'s tier.
///
/// Small pools leave too few non-winning numbers for low match counts: in a 7-ball game
/// drawing 6, every ticket matches at least five.
pub fn is_reachable(
    config: &LotteryConfiguration,
    query: &MatchQuery,
) -> Result<bool, DomainError> {
    let (losing_pool, remaining) = open_slots(config, query)?;
    Ok(remaining <= losing_pool)
}

/// Count of tickets that satisfy `query`.
///
/// Fails when the query does not fit the configuration, including tiers no ticket can reach;
/// check [is_reachable] first when walking every tier of a small game.
pub fn favorable_outcomes(
    config: &LotteryConfiguration,
    query: &MatchQuery,
) -> Result<u128, DomainError> {
    let (losing_pool, remaining) = open_slots(config, query)?;
    let matched = binomial(config.draw_size.into(), query.k.into())?;
    let unmatched = binomial(losing_pool, remaining)?;
    matched.checked_mul(unmatched).ok_or(DomainError::CountOverflow {
        left: matched,
        right: unmatched,
    })
}

fn require_bonus(config: &LotteryConfiguration) -> Result<(), DomainError> {
    if config.has_bonus {
        Ok(())
    } else {
        Err(DomainError::NoBonusNumber)
    }
}
