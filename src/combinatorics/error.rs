/// Every invalid-input case of the probability engine.
///
/// Raised at the point of detection and never folded into a zero count.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("binomial operands must be non-negative, got n={n}, r={r}")]
    NegativeOperand { n: i64, r: i64 },

    #[error("cannot choose {r} items from a set of {n}")]
    SubsetTooLarge { n: i64, r: i64 },

    #[error("binomial({n}, {r}) does not fit in 128 bits")]
    Overflow { n: i64, r: i64 },

    #[error("outcome count {left} combined with {right} does not fit in 128 bits")]
    CountOverflow { left: u128, right: u128 },

    #[error("draw size {draw_size} exceeds pool size {pool_size}")]
    DrawExceedsPool { pool_size: u32, draw_size: u32 },

    #[error("bonus pool size {bonus_pool_size} must be between 1 and {available}")]
    InvalidBonusPool { bonus_pool_size: u32, available: u32 },

    #[error("cannot match {k} of {draw_size} winning numbers")]
    MatchExceedsDraw { k: u32, draw_size: u32 },

    #[error("matching {k} numbers with the bonus leaves {remaining} ticket slots")]
    NegativeRemainingSlots { k: u32, remaining: i64 },

    #[error("bonus condition used on a game without a bonus number")]
    NoBonusNumber,
}
