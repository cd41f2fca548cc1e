//! Problem reductions
//!
//! Each graph problem is one implementation of [`Problem`]: it knows how to
//! turn its instance into a CNF formula and how to read a domain answer back
//! out of the oracle's verdict. All three share the same five-step lifecycle
//! (read, encode, ask, decode, write); the pipeline around them never needs
//! to know which problem it is driving.

pub mod clique;
pub mod coloring;
pub mod independent_set;

pub use clique::CliqueProblem;
pub use coloring::ColoringProblem;
pub use independent_set::IndependentSetProblem;

use crate::sat::{CnfFormula, OracleVerdict};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// A graph problem reducible to SAT.
pub trait Problem {
    /// Build the CNF formula encoding this instance.
    fn encode(&self) -> Result<CnfFormula>;

    /// Map the oracle's verdict back to a domain answer.
    fn decode(&self, verdict: &OracleVerdict) -> Result<DomainAnswer>;
}

/// Domain-level answer decoded from a satisfying assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainAnswer {
    /// Sorted vertex ids, for the clique and independent-set variants.
    Vertices(Vec<usize>),
    /// Register assigned to each variable, keyed by variable id, for the
    /// coloring variant.
    Registers(BTreeMap<usize, usize>),
    /// The formula was unsatisfiable. A valid outcome, not an error.
    Unsat,
}

impl DomainAnswer {
    /// Whether this answer carries a satisfying solution.
    pub fn is_satisfiable(&self) -> bool {
        !matches!(self, DomainAnswer::Unsat)
    }
}
