//! Graph-to-SAT reduction pipeline
//!
//! Reduces clique detection, independent-set search, and register
//! assignment (graph coloring) to Boolean satisfiability, delegates solving
//! to an oracle, and decodes the verdict back into a domain answer.

pub mod config;
pub mod graph;
pub mod orchestrator;
pub mod problems;
pub mod sat;
pub mod utils;

pub use config::Settings;
pub use graph::Graph;
pub use orchestrator::ReductionOrchestrator;
pub use problems::{CliqueProblem, ColoringProblem, DomainAnswer, IndependentSetProblem, Problem};

use anyhow::Result;
use crate::sat::ConfiguredOracle;

/// Solve a clique instance with the configured oracle.
pub fn solve_clique(graph: Graph, group_size: usize, settings: &Settings) -> Result<DomainAnswer> {
    let problem = CliqueProblem::new(graph, group_size)?;
    orchestrator_for(settings).run(&problem)
}

/// Solve a register-assignment instance with the configured oracle.
pub fn solve_coloring(
    graph: Graph,
    register_count: usize,
    settings: &Settings,
) -> Result<DomainAnswer> {
    let problem = ColoringProblem::new(graph, register_count)?;
    orchestrator_for(settings).run(&problem)
}

/// Search for the largest independent set with the configured oracle.
/// `None` means no group of size at least 2 was satisfiable.
pub fn search_independent_set(graph: &Graph, settings: &Settings) -> Result<Option<DomainAnswer>> {
    orchestrator_for(settings).search_largest_independent_set(graph)
}

fn orchestrator_for(settings: &Settings) -> ReductionOrchestrator<ConfiguredOracle> {
    ReductionOrchestrator::new(ConfiguredOracle::from_config(&settings.oracle))
}
