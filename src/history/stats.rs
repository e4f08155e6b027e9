//! Per-ball frequency and recency, plus the hot/cold/least-common orderings built on them.

use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::Serialize;

use crate::history::records::DrawRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BallStat {
    pub ball: u32,
    pub drawn: u32,
    pub last_drawn: Option<NaiveDate>,
}

impl BallStat {
    /// Days between the last draw of this ball and `as_of`; `None` if never drawn.
    pub fn days_since_drawn(&self, as_of: NaiveDate) -> Option<i64> {
        self.last_drawn.map(|date| (as_of - date).num_days())
    }
}

/// One entry per ball `1..=pool_size`, in ball order. Numbers outside the pool are skipped.
pub fn ball_stats(history: &[DrawRecord], pool_size: u32) -> Vec<BallStat> {
    let mut stats: Vec<BallStat> = (1..=pool_size)
        .map(|ball| BallStat {
            ball,
            drawn: 0,
            last_drawn: None,
        })
        .collect();

    for draw in history {
        for &ball in &draw.numbers {
            // Ball 0 wraps past the end and is rejected with the rest.
            let Some(stat) = stats.get_mut(ball.wrapping_sub(1) as usize) else {
                tracing::warn!(ball, pool_size, date = %draw.date, "ball outside pool ignored");
                continue;
            };
            stat.drawn += 1;
            if stat.last_drawn.map_or(true, |last| draw.date > last) {
                stat.last_drawn = Some(draw.date);
            }
        }
    }
    stats
}

/// Most drawn first; ties go to the higher ball.
pub fn most_frequent(stats: &[BallStat], count: usize) -> Vec<u32> {
    let mut ordered: Vec<&BallStat> = stats.iter().collect();
    ordered.sort_by_key(|stat| Reverse((stat.drawn, stat.ball)));
    ordered.into_iter().take(count).map(|stat| stat.ball).collect()
}

/// Least drawn first; ties go to the lower ball.
pub fn least_frequent(stats: &[BallStat], count: usize) -> Vec<u32> {
    let mut ordered: Vec<&BallStat> = stats.iter().collect();
    ordered.sort_by_key(|stat| (stat.drawn, stat.ball));
    ordered.into_iter().take(count).map(|stat| stat.ball).collect()
}

/// Longest since last drawn first, never-drawn balls ahead of all others; ties go to the
/// higher ball. Each ball appears once.
pub fn most_overdue(stats: &[BallStat], count: usize, as_of: NaiveDate) -> Vec<u32> {
    let mut ordered: Vec<(i64, u32)> = stats
        .iter()
        .map(|stat| (stat.days_since_drawn(as_of).unwrap_or(i64::MAX), stat.ball))
        .collect();
    ordered.sort_by_key(|&key| Reverse(key));
    ordered.dedup_by_key(|&mut (_, ball)| ball);
    ordered.into_iter().take(count).map(|(_, ball)| ball).collect()
}
