//! Clique detection reduced to SAT
//!
//! A clique of size `k` is encoded over `k` slots with the graph's vertices
//! as candidates. Three clause families: every slot holds some vertex
//! (existence), no two slots hold non-adjacent vertices (pairwise
//! exclusion), and no vertex fills two slots (uniqueness).

use super::{DomainAnswer, Problem};
use crate::graph::Graph;
use crate::sat::{Clause, CnfFormula, OracleVerdict, VariableCodec};
use anyhow::Result;
use std::collections::{BTreeMap, BTreeSet};

/// A "find a clique of exactly `group_size` vertices" instance.
#[derive(Debug, Clone)]
pub struct CliqueProblem {
    graph: Graph,
    group_size: usize,
    codec: VariableCodec,
}

impl CliqueProblem {
    pub fn new(graph: Graph, group_size: usize) -> Result<Self> {
        if group_size == 0 {
            anyhow::bail!("Clique size must be at least 1");
        }
        if group_size > graph.vertex_count() {
            anyhow::bail!(
                "Clique size {} exceeds the vertex count {}",
                group_size,
                graph.vertex_count()
            );
        }
        let codec = VariableCodec::new(graph.vertex_count())?;
        Ok(Self {
            graph,
            group_size,
            codec,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Closed-form clause count:
    /// `k + k(k-1)*nonEdges + n*k(k-1)/2`.
    ///
    /// The serialized header is always derived from the emitted clause list;
    /// this formula exists so tests can hold the emission to it.
    pub fn expected_clause_count(&self) -> usize {
        let n = self.graph.vertex_count();
        let k = self.group_size;
        let existence = k;
        let exclusion = k * (k - 1) * self.graph.non_edge_count();
        let uniqueness = n * k * (k - 1) / 2;
        existence + exclusion + uniqueness
    }

    /// "Slot `slot` is occupied by some vertex."
    fn existence_clause(&self, slot: usize) -> Clause {
        let literals = (1..=self.graph.vertex_count())
            .map(|vertex| self.codec.encode(slot, vertex))
            .collect();
        Clause::new(literals)
    }

    /// For every other slot and every non-adjacent vertex pair: the two
    /// vertices cannot occupy the two slots simultaneously.
    fn push_exclusion_clauses(&self, slot: usize, formula: &mut CnfFormula) -> Result<()> {
        let n = self.graph.vertex_count();
        for other in 1..=self.group_size {
            if other == slot {
                continue;
            }
            for v in 1..n {
                for w in (v + 1)..=n {
                    if !self.graph.is_adjacent(v, w) {
                        formula.push(Clause::binary(
                            -self.codec.encode(slot, v),
                            -self.codec.encode(other, w),
                        ))?;
                    }
                }
            }
        }
        Ok(())
    }

    /// A vertex cannot fill both `slot` and any later slot.
    fn push_uniqueness_clauses(&self, slot: usize, formula: &mut CnfFormula) -> Result<()> {
        for other in (slot + 1)..=self.group_size {
            for vertex in 1..=self.graph.vertex_count() {
                formula.push(Clause::binary(
                    -self.codec.encode(slot, vertex),
                    -self.codec.encode(other, vertex),
                ))?;
            }
        }
        Ok(())
    }
}

impl Problem for CliqueProblem {
    fn encode(&self) -> Result<CnfFormula> {
        let variable_count = self.graph.vertex_count() * self.group_size;
        let mut formula = CnfFormula::new(variable_count);

        // The three families are interleaved per slot, keeping the
        // serialized clause order reproducible.
        for slot in 1..=self.group_size {
            formula.push(self.existence_clause(slot))?;
            self.push_exclusion_clauses(slot, &mut formula)?;
            self.push_uniqueness_clauses(slot, &mut formula)?;
        }

        Ok(formula)
    }

    fn decode(&self, verdict: &OracleVerdict) -> Result<DomainAnswer> {
        let OracleVerdict::Satisfiable(assignment) = verdict else {
            return Ok(DomainAnswer::Unsat);
        };

        // One representative vertex per slot, lowest variable id first. A
        // model may set several vertices true in one slot; the exclusion
        // clauses already force every cross-slot pair to be adjacent, so any
        // representative choice yields a clique.
        let mut slot_vertices = BTreeMap::new();
        for &literal in assignment {
            if literal > 0 {
                let (slot, vertex) = self.codec.decode(literal);
                slot_vertices.entry(slot).or_insert(vertex);
            }
        }

        let vertices: BTreeSet<usize> = slot_vertices.into_values().collect();
        if vertices.len() != self.group_size {
            anyhow::bail!(
                "Assignment selects {} distinct vertices, expected {}",
                vertices.len(),
                self.group_size
            );
        }
        Ok(DomainAnswer::Vertices(vertices.into_iter().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::{CadicalOracle, Oracle};

    fn solve(problem: &CliqueProblem) -> DomainAnswer {
        let formula = problem.encode().unwrap();
        let verdict = CadicalOracle::new().solve(&formula).unwrap();
        problem.decode(&verdict).unwrap()
    }

    #[test]
    fn test_clause_count_law() {
        let graph = Graph::from_edges(4, &[(1, 2), (2, 3), (3, 4)]).unwrap();
        let problem = CliqueProblem::new(graph, 2).unwrap();

        let formula = problem.encode().unwrap();
        // k=2, n=4, nonEdges=3: 2 + 2*1*3 + 4*1 = 12
        assert_eq!(problem.expected_clause_count(), 12);
        assert_eq!(formula.clause_count(), 12);
        assert_eq!(formula.variable_count(), 8);
    }

    #[test]
    fn test_clause_count_law_larger_group() {
        let graph = Graph::from_edges(5, &[(1, 2), (1, 3), (2, 3), (3, 4)]).unwrap();
        let problem = CliqueProblem::new(graph, 3).unwrap();

        let formula = problem.encode().unwrap();
        // k=3, n=5, nonEdges=6: 3 + 3*2*6 + 5*3 = 54
        assert_eq!(problem.expected_clause_count(), 54);
        assert_eq!(formula.clause_count(), 54);
    }

    #[test]
    fn test_existence_clause_comes_first() {
        let graph = Graph::from_edges(3, &[(1, 2)]).unwrap();
        let problem = CliqueProblem::new(graph, 2).unwrap();
        let formula = problem.encode().unwrap();

        // Slot 1 over vertices 1..=3 with span 3.
        assert_eq!(formula.clauses()[0].literals, vec![1, 2, 3]);
    }

    #[test]
    fn test_satisfiable_pair() {
        // n=3 with the single edge (1,2): the only clique of size 2 is {1,2}.
        let graph = Graph::from_edges(3, &[(1, 2)]).unwrap();
        let problem = CliqueProblem::new(graph, 2).unwrap();

        assert_eq!(solve(&problem), DomainAnswer::Vertices(vec![1, 2]));
    }

    #[test]
    fn test_unsatisfiable_triangle() {
        // Same graph, k=3: no triangle exists.
        let graph = Graph::from_edges(3, &[(1, 2)]).unwrap();
        let problem = CliqueProblem::new(graph, 3).unwrap();

        assert_eq!(solve(&problem), DomainAnswer::Unsat);
    }

    #[test]
    fn test_single_vertex_clique() {
        let graph = Graph::new(2);
        let problem = CliqueProblem::new(graph, 1).unwrap();
        let formula = problem.encode().unwrap();

        // Existence only: no pairs of slots exist.
        assert_eq!(formula.clause_count(), 1);
        assert!(matches!(solve(&problem), DomainAnswer::Vertices(v) if v.len() == 1));
    }

    #[test]
    fn test_oversized_group_is_rejected() {
        let graph = Graph::new(3);
        assert!(CliqueProblem::new(graph, 4).is_err());
    }

    #[test]
    fn test_decode_rejects_empty_assignment() {
        let graph = Graph::from_edges(3, &[(1, 2)]).unwrap();
        let problem = CliqueProblem::new(graph, 2).unwrap();

        // All six variables false: no slot is occupied.
        let verdict = OracleVerdict::Satisfiable(vec![-1, -2, -3, -4, -5, -6]);
        assert!(problem.decode(&verdict).is_err());
    }

    #[test]
    fn test_decode_takes_one_vertex_per_slot() {
        // Triangle graph: extra positives within a slot are legal models and
        // must not break decoding.
        let graph = Graph::from_edges(3, &[(1, 2), (1, 3), (2, 3)]).unwrap();
        let problem = CliqueProblem::new(graph, 2).unwrap();

        // Slot 1 holds vertices 1 and 2, slot 2 holds vertex 3.
        let verdict = OracleVerdict::Satisfiable(vec![1, 2, -3, -4, -5, 6]);
        assert_eq!(
            problem.decode(&verdict).unwrap(),
            DomainAnswer::Vertices(vec![1, 3])
        );
    }
}
