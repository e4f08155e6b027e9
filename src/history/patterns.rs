use std::collections::BTreeMap;

use serde::Serialize;

use crate::history::records::DrawRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subsequence {
    pub numbers: Vec<u32>,
    pub count: usize,
}

/// Frequency of every run of `length` consecutive numbers within a draw, in draw order.
/// Most frequent first; equal counts in lexicographic order.
pub fn recurring_subsequences(history: &[DrawRecord], length: usize) -> Vec<Subsequence> {
    if length == 0 || history.is_empty() {
        tracing::warn!(length, draws = history.len(), "nothing to analyze");
        return Vec::new();
    }

    let mut counts: BTreeMap<&[u32], usize> = BTreeMap::new();
    for draw in history {
        for window in draw.numbers.windows(length) {
            *counts.entry(window).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<Subsequence> = counts
        .into_iter()
        .map(|(numbers, count)| Subsequence {
            numbers: numbers.to_vec(),
            count,
        })
        .collect();
    // Stable sort keeps the map's lexicographic order within equal counts.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draw(numbers: &[u32]) -> DrawRecord {
        DrawRecord {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            numbers: numbers.to_vec(),
        }
    }

    #[test]
    fn counts_sliding_pairs() {
        let history = vec![draw(&[1, 2, 3]), draw(&[2, 3, 1]), draw(&[9])];
        let pairs = recurring_subsequences(&history, 2);
        assert_eq!(
            pairs,
            vec![
                Subsequence {
                    numbers: vec![2, 3],
                    count: 2
                },
                Subsequence {
                    numbers: vec![1, 2],
                    count: 1
                },
                Subsequence {
                    numbers: vec![3, 1],
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn degenerate_inputs_are_empty() {
        assert!(recurring_subsequences(&[draw(&[1, 2])], 0).is_empty());
        assert!(recurring_subsequences(&[], 2).is_empty());
        assert!(recurring_subsequences(&[draw(&[1, 2])], 3).is_empty());
    }
}
