// tests/unit_rank.rs
//! Tests for the PageRank power iteration.

use wikirank_core::graph::AdjacencyGraph;
use wikirank_core::rank::pagerank::initial_scores;
use wikirank_core::rank::RankEngine;

const EPS: f64 = 1e-12;

fn graph(nodes: usize, edges: &[(u32, u32)]) -> AdjacencyGraph {
    let mut g = AdjacencyGraph::with_nodes(nodes);
    for &(from, to) in edges {
        g.add_edge(from, to);
    }
    g
}

/// Deterministic pseudo-random graph with duplicates and dangling nodes.
fn scrambled_graph(nodes: usize, edges: usize) -> AdjacencyGraph {
    let mut g = AdjacencyGraph::with_nodes(nodes);
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    for _ in 0..edges {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let from = ((state >> 33) % nodes as u64) as u32;
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let to = ((state >> 33) % nodes as u64) as u32;
        // Leave every fifth node without out-edges.
        if from % 5 != 0 {
            g.add_edge(from, to);
        }
    }
    g
}

#[test]
fn test_mass_conserved_every_iteration() {
    let g = scrambled_graph(50, 400);
    assert!(g.dangling_nodes().count() >= 10);
    for damping in [0.5, 0.85, 1.0] {
        let engine = RankEngine::new(damping, 30);
        let mut scores = initial_scores(g.node_count());
        for _ in 0..engine.iterations() {
            scores = engine.step(&g, &scores);
            let sum: f64 = scores.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "mass drifted to {sum}");
        }
    }
}

#[test]
fn test_cycle_is_rank_preserving() {
    let g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
    let result = RankEngine::new(0.85, 1).run(g);
    assert_eq!(result.iterations, 1);
    for score in &result.scores {
        assert!((score - 1.0 / 3.0).abs() < EPS);
    }
}

#[test]
fn test_dangling_mass_closed_form() {
    // A -> D, D has no out-edges.
    let g = graph(2, &[(0, 1)]);
    let alpha: f64 = 0.85;
    let next = RankEngine::new(alpha, 1).step(&g, &[0.5, 0.5]);

    let a = alpha * (0.5 / 2.0) + (1.0 - alpha) / 2.0;
    let d = alpha * (0.5 / 1.0 + 0.5 / 2.0) + (1.0 - alpha) / 2.0;
    assert!((next[0] - a).abs() < EPS, "A = {}", next[0]);
    assert!((next[1] - d).abs() < EPS, "D = {}", next[1]);
}

#[test]
fn test_dangling_mass_spread_to_every_article() {
    // Node 3 is the only dangling node and holds mass m.
    let g = graph(4, &[(0, 1), (1, 2), (2, 0)]);
    let alpha = 0.9;
    let m = 0.4;
    let scores = [0.2, 0.2, 0.2, m];
    let next = RankEngine::new(alpha, 1).step(&g, &scores);

    let without = RankEngine::new(alpha, 1).step(&g, &[0.2, 0.2, 0.2, 0.0]);
    for (with_mass, base) in next.iter().zip(&without) {
        assert!((with_mass - base - alpha * m / 4.0).abs() < EPS);
    }
}

#[test]
fn test_duplicate_edges_deposit_twice() {
    // 0 links to 1 twice and to 2 once.
    let g = graph(3, &[(0, 1), (0, 1), (0, 2), (1, 0), (2, 0)]);
    let next = RankEngine::new(1.0, 1).step(&g, &[0.6, 0.2, 0.2]);
    assert!((next[1] - 0.4).abs() < EPS);
    assert!((next[2] - 0.2).abs() < EPS);
    assert!((next[0] - 0.4).abs() < EPS);
}

#[test]
fn test_zero_iterations_keeps_uniform_scores() {
    let g = graph(4, &[(0, 1)]);
    let result = RankEngine::new(0.85, 0).run(g);
    assert_eq!(result.scores, vec![0.25; 4]);
}

#[test]
fn test_empty_graph() {
    let result = RankEngine::new(0.85, 10).run(AdjacencyGraph::default());
    assert!(result.scores.is_empty());
    assert_eq!(result.mass(), 0.0);
}

#[test]
fn test_hub_outranks_leaves() {
    let g = graph(4, &[(1, 0), (2, 0), (3, 0), (0, 1)]);
    let result = RankEngine::new(0.85, 40).run(g);
    let hub = result.scores[0];
    assert!(result.scores[1..].iter().all(|&s| s < hub));
    assert!(result.scores[1] > result.scores[2]);
}
