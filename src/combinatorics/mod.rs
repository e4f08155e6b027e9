pub mod binomial;
pub mod error;
pub mod fraction;
pub mod outcomes;
pub mod probability;
pub mod tiers;

pub use binomial::binomial;
pub use error::DomainError;
pub use fraction::Fraction;
pub use outcomes::{
    favorable_outcomes, is_reachable, total_outcomes, BonusCondition, LotteryConfiguration,
    MatchQuery,
};
pub use probability::{probability_of, ProbabilityResult};
pub use tiers::{odds_of_at_least, prize_tiers, PrizeTier};
