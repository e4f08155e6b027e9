//! Batch distribution for parallel simulation.
//!
//! Splits a draw count into contiguous ranges; each range becomes one independently seeded
//! rayon task in [crate::simulation::simulate].

/// Half-open draw ranges, at most `num_batches` of them and never empty. Sizes differ by at
/// most one, with the larger batches first.
///
/// # Example
/// ```
/// # use lotto_odds::parallel::batch_ranges;
/// assert_eq!(batch_ranges(10, 3), vec![(0, 4), (4, 7), (7, 10)]);
/// ```
pub fn batch_ranges(draws: usize, num_batches: usize) -> Vec<(usize, usize)> {
    let batches = num_batches.min(draws);
    if batches == 0 {
        return Vec::new();
    }
    let (per_batch, extra) = (draws / batches, draws % batches);
    let mut next = 0;
    (0..batches)
        .map(|index| {
            let start = next;
            next += per_batch + usize::from(index < extra);
            (start, next)
        })
        .collect()
}
