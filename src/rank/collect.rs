// src/rank/collect.rs
use rayon::slice::ParallelSliceMut;

use crate::index::TitleIndex;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub title: String,
    pub score: f64,
}

/// Joins scores back to titles and orders them by descending score, ties
/// broken by ascending title.
#[must_use]
pub fn collect(index: &TitleIndex, scores: &[f64]) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = index
        .iter()
        .zip(scores)
        .map(|((_, title), &score)| RankedEntry {
            title: title.to_string(),
            score,
        })
        .collect();
    sort_ranked(&mut ranked);
    ranked
}

pub fn sort_ranked(ranked: &mut [RankedEntry]) {
    ranked.par_sort_unstable_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.title.cmp(&b.title))
    });
}

/// The `n` highest-ranked entries of an already sorted slice.
#[must_use]
pub fn top_n(ranked: &[RankedEntry], n: usize) -> &[RankedEntry] {
    &ranked[..n.min(ranked.len())]
}
