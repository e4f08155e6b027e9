//! Statistics-driven ticket rows: most common, most overdue, and hot/cold mixes.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::history::stats::{least_frequent, most_frequent, most_overdue, BallStat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowStrategy {
    MostCommon,
    MostOverdue,
    NextMostCommon,
    HotColdMix,
    NextHotColdMix,
    LeastCommonHotMix,
}

impl RowStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MostCommon => "most common",
            Self::MostOverdue => "most overdue",
            Self::NextMostCommon => "next most common",
            Self::HotColdMix => "hot/cold mix",
            Self::NextHotColdMix => "next hot/cold mix",
            Self::LeastCommonHotMix => "least common/hot mix",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedRow {
    pub strategy: RowStrategy,
    pub numbers: Vec<u32>,
}

/// Pushes unseen numbers from `source` until `limit` were added or `selected` holds `total`.
/// Returns how far into `source` it read.
fn take_unique(source: &[u32], selected: &mut Vec<u32>, limit: usize, total: usize) -> usize {
    let mut added = 0;
    let mut read = 0;
    for &n in source {
        if added == limit || selected.len() >= total {
            break;
        }
        read += 1;
        if !selected.contains(&n) {
            selected.push(n);
            added += 1;
        }
    }
    read
}

/// Up to `primary_count` unique numbers from `primary`, then up to `secondary_count` from
/// `secondary`, then the rest of `primary`, then the rest of `secondary`, stopping at `total`.
pub fn select_unique_combination(
    primary: &[u32],
    primary_count: usize,
    secondary: &[u32],
    secondary_count: usize,
    total: usize,
) -> Vec<u32> {
    let mut selected = Vec::with_capacity(total);
    let primary_read = take_unique(primary, &mut selected, primary_count, total);
    let secondary_read = take_unique(secondary, &mut selected, secondary_count, total);
    take_unique(&primary[primary_read..], &mut selected, usize::MAX, total);
    take_unique(&secondary[secondary_read..], &mut selected, usize::MAX, total);
    selected
}

/// Keeps `numbers` sorted when it fills a whole row, recording its balls in `used`.
fn push_row(
    rows: &mut Vec<SuggestedRow>,
    strategy: RowStrategy,
    mut numbers: Vec<u32>,
    numbers_per_row: usize,
    used: Option<&mut HashSet<u32>>,
) {
    if numbers.len() != numbers_per_row {
        tracing::warn!(
            strategy = strategy.label(),
            got = numbers.len(),
            numbers_per_row,
            "row skipped"
        );
        return;
    }
    if let Some(used) = used {
        used.extend(numbers.iter().copied());
    }
    numbers.sort_unstable();
    rows.push(SuggestedRow { strategy, numbers });
}

/// Up to six rows of `numbers_per_row` unique numbers each, sorted ascending.
///
/// Rows that cannot be completed are skipped; without a complete most-common row nothing is
/// suggested.
pub fn suggest_rows(
    stats: &[BallStat],
    numbers_per_row: usize,
    as_of: NaiveDate,
) -> Vec<SuggestedRow> {
    let n = numbers_per_row;
    let hot = most_frequent(stats, stats.len());
    let cold = most_overdue(stats, stats.len(), as_of);
    let least = least_frequent(stats, stats.len());

    if n == 0 || hot.len() < n {
        tracing::warn!(available = hot.len(), numbers_per_row = n, "not enough balls for a row");
        return Vec::new();
    }

    let mut rows = Vec::new();
    let mut used: HashSet<u32> = HashSet::new();
    push_row(&mut rows, RowStrategy::MostCommon, hot[..n].to_vec(), n, Some(&mut used));

    let mut overdue: Vec<u32> = cold.iter().copied().take(n).collect();
    for &ball in &hot[n..] {
        if overdue.len() == n {
            break;
        }
        if !used.contains(&ball) && !overdue.contains(&ball) {
            overdue.push(ball);
        }
    }
    push_row(&mut rows, RowStrategy::MostOverdue, overdue, n, Some(&mut used));

    let next_end = (2 * n).min(hot.len());
    let mut next_common: Vec<u32> = hot[n..next_end]
        .iter()
        .copied()
        .filter(|ball| !used.contains(ball))
        .collect();
    for &ball in &hot[next_end..] {
        if next_common.len() == n {
            break;
        }
        if !used.contains(&ball) {
            next_common.push(ball);
        }
    }
    push_row(&mut rows, RowStrategy::NextMostCommon, next_common, n, Some(&mut used));

    let hot_count = n.div_ceil(2);
    let cold_count = n - hot_count;

    if hot.len() >= hot_count && cold.len() >= cold_count {
        let mix = select_unique_combination(&hot, hot_count, &cold, cold_count, n);
        push_row(&mut rows, RowStrategy::HotColdMix, mix, n, None);
    }

    let next_hot = &hot[hot_count..];
    let next_cold = &cold[cold_count.min(cold.len())..];
    if next_hot.len() >= hot_count && next_cold.len() >= cold_count {
        let mix = select_unique_combination(next_hot, hot_count, next_cold, cold_count, n);
        push_row(&mut rows, RowStrategy::NextHotColdMix, mix, n, None);
    } else {
        tracing::warn!("not enough candidates for the next hot/cold mix");
    }

    if least.len() >= hot_count && hot.len() >= cold_count {
        let mix = select_unique_combination(&least, hot_count, &hot, cold_count, n);
        push_row(&mut rows, RowStrategy::LeastCommonHotMix, mix, n, None);
    }

    rows
}
