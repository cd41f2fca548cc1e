//! Undirected graph over vertices `1..=n`

use anyhow::Result;

/// Undirected graph stored as a symmetric adjacency matrix.
///
/// Vertices are numbered `1..=n`. The graph is immutable once built from its
/// edge list; every downstream stage only queries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    /// (n+1) x (n+1) matrix; row and column 0 are unused padding so vertex
    /// ids can index directly.
    adjacency: Vec<Vec<bool>>,
    edge_count: usize,
}

impl Graph {
    /// Create an edgeless graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            adjacency: vec![vec![false; vertex_count + 1]; vertex_count + 1],
            edge_count: 0,
        }
    }

    /// Build a graph from an explicit edge list.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Add an undirected edge. Duplicate edges are ignored, self-loops are
    /// rejected.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        if u == 0 || u > self.vertex_count || v == 0 || v > self.vertex_count {
            anyhow::bail!(
                "Edge ({}, {}) out of range for {} vertices",
                u,
                v,
                self.vertex_count
            );
        }
        if u == v {
            anyhow::bail!("Self-loop ({}, {}) is not allowed", u, v);
        }
        if !self.adjacency[u][v] {
            self.adjacency[u][v] = true;
            self.adjacency[v][u] = true;
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Whether vertices `u` and `v` are connected by an edge.
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.adjacency[u][v]
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of unordered vertex pairs not connected by an edge.
    pub fn non_edge_count(&self) -> usize {
        self.vertex_count * (self.vertex_count.saturating_sub(1)) / 2 - self.edge_count
    }

    /// Derive the complement graph: `u` and `v` are adjacent in the result
    /// exactly when they are distinct and not adjacent here.
    pub fn complement(&self) -> Self {
        let mut complement = Self::new(self.vertex_count);
        for u in 1..self.vertex_count {
            for v in (u + 1)..=self.vertex_count {
                if !self.adjacency[u][v] {
                    complement.adjacency[u][v] = true;
                    complement.adjacency[v][u] = true;
                    complement.edge_count += 1;
                }
            }
        }
        complement
    }
}
