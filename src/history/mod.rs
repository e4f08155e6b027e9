//! Draw-history analysis: ball statistics, recurring runs, and suggested ticket rows.

pub mod patterns;
pub mod records;
pub mod selection;
pub mod stats;

pub use patterns::{recurring_subsequences, Subsequence};
pub use records::{
    load_history_csv, parse_history_csv, DrawRecord, HistoryError, HISTORY_DATE_FORMAT,
};
pub use selection::{select_unique_combination, suggest_rows, RowStrategy, SuggestedRow};
pub use stats::{ball_stats, least_frequent, most_frequent, most_overdue, BallStat};
