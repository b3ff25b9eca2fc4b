// src/graph/adjacency.rs
//! Per-article out-edge lists.

use crate::index::TitleId;

/// Out-edges for every article, indexed by [`TitleId`].
///
/// Duplicate edges are kept: two links from `A` to `B` are two entries and
/// give `A` an out-degree of two. The out-degree of an article is the length
/// of its edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    out_edges: Vec<Vec<TitleId>>,
}

impl AdjacencyGraph {
    /// Creates a graph of `nodes` articles with no edges.
    #[must_use]
    pub fn with_nodes(nodes: usize) -> Self {
        Self {
            out_edges: vec![Vec::new(); nodes],
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.out_edges.len()
    }

    /// Total number of edges, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.out_edges.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn out_edges(&self, node: TitleId) -> &[TitleId] {
        self.out_edges.get(node as usize).map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn out_degree(&self, node: TitleId) -> usize {
        self.out_edges(node).len()
    }

    /// Appends edges from `source`, preserving their order.
    ///
    /// # Panics
    /// Panics if `source` or any target is not a node of this graph.
    pub fn extend_edges<I>(&mut self, source: TitleId, targets: I)
    where
        I: IntoIterator<Item = TitleId>,
    {
        let nodes = self.out_edges.len();
        let edges = &mut self.out_edges[source as usize];
        for target in targets {
            assert!((target as usize) < nodes, "edge target {target} out of range");
            edges.push(target);
        }
    }

    pub fn add_edge(&mut self, source: TitleId, target: TitleId) {
        self.extend_edges(source, [target]);
    }

    /// Articles with no out-edges.
    pub fn dangling_nodes(&self) -> impl Iterator<Item = TitleId> + '_ {
        self.out_edges
            .iter()
            .enumerate()
            .filter(|(_, edges)| edges.is_empty())
            .map(|(node, _)| node as TitleId)
    }

    /// Iterates `(source, out_edges)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TitleId, &[TitleId])> {
        self.out_edges
            .iter()
            .enumerate()
            .map(|(node, edges)| (node as TitleId, edges.as_slice()))
    }
}
