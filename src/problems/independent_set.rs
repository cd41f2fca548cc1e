//! Independent-set detection via the complement graph
//!
//! An independent set in a graph is exactly a clique in its complement, so
//! the encoding is the clique reduction run against the complement. The
//! decoded vertices are the independent set of the original graph.

use super::{CliqueProblem, DomainAnswer, Problem};
use crate::graph::Graph;
use crate::sat::{CnfFormula, OracleVerdict};
use anyhow::Result;

/// A "find an independent set of exactly `group_size` vertices" instance.
#[derive(Debug, Clone)]
pub struct IndependentSetProblem {
    complement_clique: CliqueProblem,
}

impl IndependentSetProblem {
    pub fn new(graph: &Graph, group_size: usize) -> Result<Self> {
        Ok(Self {
            complement_clique: CliqueProblem::new(graph.complement(), group_size)?,
        })
    }

    pub fn group_size(&self) -> usize {
        self.complement_clique.group_size()
    }

    /// Closed-form clause count of the underlying complement-clique
    /// encoding. The complement's non-edges are the original's edges.
    pub fn expected_clause_count(&self) -> usize {
        self.complement_clique.expected_clause_count()
    }
}

impl Problem for IndependentSetProblem {
    fn encode(&self) -> Result<CnfFormula> {
        self.complement_clique.encode()
    }

    fn decode(&self, verdict: &OracleVerdict) -> Result<DomainAnswer> {
        self.complement_clique.decode(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::{CadicalOracle, Oracle};

    fn solve(problem: &IndependentSetProblem) -> DomainAnswer {
        let formula = problem.encode().unwrap();
        let verdict = CadicalOracle::new().solve(&formula).unwrap();
        problem.decode(&verdict).unwrap()
    }

    #[test]
    fn test_path_graph_endpoints() {
        // Path 1-2-3: the only independent set of size 2 is {1, 3}.
        let graph = Graph::from_edges(3, &[(1, 2), (2, 3)]).unwrap();
        let problem = IndependentSetProblem::new(&graph, 2).unwrap();

        assert_eq!(solve(&problem), DomainAnswer::Vertices(vec![1, 3]));
    }

    #[test]
    fn test_complete_graph_has_no_pair() {
        let graph = Graph::from_edges(3, &[(1, 2), (1, 3), (2, 3)]).unwrap();
        let problem = IndependentSetProblem::new(&graph, 2).unwrap();

        assert_eq!(solve(&problem), DomainAnswer::Unsat);
    }

    #[test]
    fn test_clause_count_uses_original_edges() {
        // The complement's non-edge count equals the original's edge count.
        let graph = Graph::from_edges(4, &[(1, 2), (3, 4)]).unwrap();
        let problem = IndependentSetProblem::new(&graph, 2).unwrap();

        let formula = problem.encode().unwrap();
        // k=2, n=4, complement nonEdges = 2: 2 + 2*1*2 + 4*1 = 10
        assert_eq!(problem.expected_clause_count(), 10);
        assert_eq!(formula.clause_count(), 10);
    }
}
