//! Pipeline sequencing
//!
//! One attempt is encode -> ask the oracle -> decode. The independent-set
//! variant wraps that attempt in a descending search over candidate group
//! sizes, stopping at the first satisfiable verdict.

use crate::graph::Graph;
use crate::problems::{DomainAnswer, IndependentSetProblem, Problem};
use crate::sat::Oracle;
use anyhow::{Context, Result};

/// Drives encode -> solve -> decode against one oracle.
pub struct ReductionOrchestrator<O: Oracle> {
    oracle: O,
}

impl<O: Oracle> ReductionOrchestrator<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Run a single attempt for one problem instance.
    pub fn run<P: Problem>(&mut self, problem: &P) -> Result<DomainAnswer> {
        let formula = problem.encode().context("Failed to encode the problem")?;
        let verdict = self
            .oracle
            .solve(&formula)
            .context("Oracle invocation failed")?;
        problem
            .decode(&verdict)
            .context("Failed to decode the oracle's answer")
    }

    /// Search for the largest independent set by trying group sizes from
    /// `n` down to `2` and returning the first satisfiable answer.
    ///
    /// Size 1 is never attempted, even though a lone vertex is trivially
    /// independent: a graph whose largest independent set is a single
    /// vertex (a complete graph) yields `None`. Satisfiability is monotone
    /// in the group size, so the first hit of the descending scan is the
    /// maximum.
    pub fn search_largest_independent_set(
        &mut self,
        graph: &Graph,
    ) -> Result<Option<DomainAnswer>> {
        for group_size in (2..=graph.vertex_count()).rev() {
            let problem = IndependentSetProblem::new(graph, group_size)?;
            let answer = self.run(&problem).with_context(|| {
                format!("Independent-set attempt for group size {} failed", group_size)
            })?;
            if answer.is_satisfiable() {
                return Ok(Some(answer));
            }
        }
        Ok(None)
    }
}
