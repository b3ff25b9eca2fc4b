// src/rank/pagerank.rs
//! `PageRank` power iteration with dangling-mass redistribution.

use tracing::{debug, info};

use crate::graph::AdjacencyGraph;

/// Fixed-iteration `PageRank`. There is no convergence test: exactly
/// `iterations` steps are always run.
#[derive(Debug, Clone, Copy)]
pub struct RankEngine {
    damping: f64,
    iterations: usize,
}

/// Final scores, indexed by node id.
#[derive(Debug, Clone, PartialEq)]
pub struct RankResult {
    pub scores: Vec<f64>,
    pub iterations: usize,
}

impl RankResult {
    /// Total score mass; stays at 1.0 up to rounding for non-empty graphs.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.scores.iter().sum()
    }
}

impl RankEngine {
    #[must_use]
    pub fn new(damping: f64, iterations: usize) -> Self {
        Self {
            damping,
            iterations,
        }
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Runs the configured number of iterations from the uniform vector.
    ///
    /// Takes the graph by value and drops it before returning, so the edge
    /// lists do not outlive ranking.
    #[must_use]
    pub fn run(&self, graph: AdjacencyGraph) -> RankResult {
        let n = graph.node_count();
        info!(
            articles = n,
            iterations = self.iterations,
            damping = self.damping,
            "computing pagerank"
        );
        let mut scores = initial_scores(n);
        for iteration in 0..self.iterations {
            scores = self.step(&graph, &scores);
            debug!(iteration = iteration + 1, mass = scores.iter().sum::<f64>(), "iteration done");
        }
        drop(graph);

        RankResult {
            scores,
            iterations: self.iterations,
        }
    }

    /// Performs one power-iteration step and returns the new score vector.
    ///
    /// Each edge `i -> j` deposits `score[i] / out_degree(i)` into `j`, once per
    /// duplicate. Mass held by articles without out-edges is pooled and spread
    /// evenly, then the damping and teleport terms are applied:
    /// `alpha * next[j] + alpha * dangling / n + (1 - alpha) / n`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step(&self, graph: &AdjacencyGraph, scores: &[f64]) -> Vec<f64> {
        let n = graph.node_count();
        if n == 0 {
            return Vec::new();
        }

        let mut next = vec![0.0; n];
        let mut dangling_mass = 0.0;
        for (node, edges) in graph.iter() {
            let score = scores[node as usize];
            if edges.is_empty() {
                dangling_mass += score;
                continue;
            }
            let share = score / edges.len() as f64;
            for &target in edges {
                next[target as usize] += share;
            }
        }

        let alpha = self.damping;
        let n = n as f64;
        let uniform = alpha * dangling_mass / n + (1.0 - alpha) / n;
        for value in &mut next {
            *value = alpha * *value + uniform;
        }
        next
    }
}

/// Uniform starting vector `1/n`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn initial_scores(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    vec![1.0 / n as f64; n]
}
