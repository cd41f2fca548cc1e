//! Register assignment (graph coloring) reduced to SAT
//!
//! Here the slots are the program variables (graph vertices) and the
//! candidates are the registers. Every variable gets some register
//! (existence), adjacent variables never share one (pairwise exclusion),
//! and no variable holds two registers at once (uniqueness).

use super::{DomainAnswer, Problem};
use crate::graph::Graph;
use crate::sat::{Clause, CnfFormula, OracleVerdict, VariableCodec};
use anyhow::Result;
use itertools::Itertools;
use std::collections::BTreeMap;

/// A "color the interference graph with `register_count` registers"
/// instance.
#[derive(Debug, Clone)]
pub struct ColoringProblem {
    graph: Graph,
    register_count: usize,
    codec: VariableCodec,
}

impl ColoringProblem {
    pub fn new(graph: Graph, register_count: usize) -> Result<Self> {
        if register_count == 0 {
            anyhow::bail!("Register count must be at least 1");
        }
        let codec = VariableCodec::new(register_count)?;
        Ok(Self {
            graph,
            register_count,
            codec,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn register_count(&self) -> usize {
        self.register_count
    }

    /// Closed-form clause count:
    /// `n + k*edges + n*k(k-1)/2`.
    pub fn expected_clause_count(&self) -> usize {
        let n = self.graph.vertex_count();
        let k = self.register_count;
        let existence = n;
        let exclusion = k * self.graph.edge_count();
        let uniqueness = n * k * (k - 1) / 2;
        existence + exclusion + uniqueness
    }

    /// "Variable `variable` is assigned some register."
    fn existence_clause(&self, variable: usize) -> Clause {
        let literals = (1..=self.register_count)
            .map(|register| self.codec.encode(variable, register))
            .collect();
        Clause::new(literals)
    }

    /// Adjacent variables must not share any register. Exclusion keys off
    /// slot adjacency here, not candidate compatibility.
    fn push_exclusion_clauses(&self, variable: usize, formula: &mut CnfFormula) -> Result<()> {
        for other in (variable + 1)..=self.graph.vertex_count() {
            if self.graph.is_adjacent(variable, other) {
                for register in 1..=self.register_count {
                    formula.push(Clause::binary(
                        -self.codec.encode(variable, register),
                        -self.codec.encode(other, register),
                    ))?;
                }
            }
        }
        Ok(())
    }

    /// A variable cannot hold two distinct registers simultaneously.
    fn push_uniqueness_clauses(&self, variable: usize, formula: &mut CnfFormula) -> Result<()> {
        for (first, second) in (1..=self.register_count).tuple_combinations() {
            formula.push(Clause::binary(
                -self.codec.encode(variable, first),
                -self.codec.encode(variable, second),
            ))?;
        }
        Ok(())
    }
}

impl Problem for ColoringProblem {
    fn encode(&self) -> Result<CnfFormula> {
        let variable_count = self.graph.vertex_count() * self.register_count;
        let mut formula = CnfFormula::new(variable_count);

        for variable in 1..=self.graph.vertex_count() {
            formula.push(self.existence_clause(variable))?;
            self.push_exclusion_clauses(variable, &mut formula)?;
            self.push_uniqueness_clauses(variable, &mut formula)?;
        }

        Ok(formula)
    }

    fn decode(&self, verdict: &OracleVerdict) -> Result<DomainAnswer> {
        let OracleVerdict::Satisfiable(assignment) = verdict else {
            return Ok(DomainAnswer::Unsat);
        };

        let mut registers = BTreeMap::new();
        for &literal in assignment {
            if literal > 0 {
                let (variable, register) = self.codec.decode(literal);
                if registers.insert(variable, register).is_some() {
                    anyhow::bail!("Variable {} is assigned more than one register", variable);
                }
            }
        }

        if registers.len() != self.graph.vertex_count() {
            anyhow::bail!(
                "Assignment covers {} variables, expected {}",
                registers.len(),
                self.graph.vertex_count()
            );
        }
        Ok(DomainAnswer::Registers(registers))
    }
}
