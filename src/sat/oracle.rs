//! Oracle boundary
//!
//! The reduction core treats the oracle as a pure function from a formula
//! to a verdict. Everything process- or file-shaped lives behind the
//! [`Oracle`] trait so the combinatorial logic can be tested with an
//! in-process backend or a fake.

use super::cnf::CnfFormula;
use super::dimacs::{dimacs_string, parse_solution};
use crate::config::{OracleBackend, OracleConfig};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Outcome of one oracle invocation.
///
/// A satisfiable verdict carries the full assignment: entry `i` (1-based)
/// holds `+i` when variable `i` is true and `-i` when it is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleVerdict {
    Unsatisfiable,
    Satisfiable(Vec<i32>),
}

impl OracleVerdict {
    /// Whether the formula was found satisfiable.
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, OracleVerdict::Satisfiable(_))
    }
}

/// A SAT oracle: consumes a formula, produces a verdict.
pub trait Oracle {
    fn solve(&mut self, formula: &CnfFormula) -> Result<OracleVerdict>;
}

/// In-process oracle backed by CaDiCaL.
///
/// A fresh solver is created per invocation; each formula is private to one
/// call, matching the one-formula-per-iteration lifecycle of the pipeline.
#[derive(Debug, Default)]
pub struct CadicalOracle;

impl CadicalOracle {
    pub fn new() -> Self {
        Self
    }
}

impl Oracle for CadicalOracle {
    fn solve(&mut self, formula: &CnfFormula) -> Result<OracleVerdict> {
        let mut solver: cadical::Solver = cadical::Solver::new();
        for clause in formula.clauses() {
            solver.add_clause(clause.literals.iter().copied());
        }

        match solver.solve() {
            Some(true) => {
                let mut assignment = Vec::with_capacity(formula.variable_count());
                for variable in 1..=formula.variable_count() as i32 {
                    let is_true = solver.value(variable).unwrap_or(false);
                    assignment.push(if is_true { variable } else { -variable });
                }
                Ok(OracleVerdict::Satisfiable(assignment))
            }
            Some(false) => Ok(OracleVerdict::Unsatisfiable),
            None => anyhow::bail!("SAT solver was interrupted before reaching a verdict"),
        }
    }
}

/// External oracle process invoked through the documented artifact formats.
///
/// Per invocation: write the DIMACS input artifact, run the configured
/// command to completion, then parse the result artifact. The result file is
/// never read before the process has terminated.
#[derive(Debug, Clone)]
pub struct ProcessOracle {
    command: String,
    args: Vec<String>,
    cnf_file: PathBuf,
    solution_file: PathBuf,
    timeout: Option<Duration>,
}

impl ProcessOracle {
    pub fn new(
        command: String,
        args: Vec<String>,
        cnf_file: PathBuf,
        solution_file: PathBuf,
    ) -> Self {
        Self {
            command,
            args,
            cnf_file,
            solution_file,
            timeout: None,
        }
    }

    /// Bound a single oracle invocation. Expiry kills the solver process and
    /// surfaces an error; the happy path is unaffected.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn wait_for_exit(&self, child: &mut std::process::Child) -> Result<std::process::ExitStatus> {
        let Some(timeout) = self.timeout else {
            return child.wait().context("Failed to wait for oracle process");
        };

        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) = child
                .try_wait()
                .context("Failed to poll oracle process")?
            {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                anyhow::bail!(
                    "Oracle process exceeded the {}s timeout",
                    timeout.as_secs()
                );
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Oracle for ProcessOracle {
    fn solve(&mut self, formula: &CnfFormula) -> Result<OracleVerdict> {
        std::fs::write(&self.cnf_file, dimacs_string(formula)).with_context(|| {
            format!("Failed to write CNF artifact: {}", self.cnf_file.display())
        })?;

        // A stale result from a previous run must never be mistaken for this
        // invocation's answer.
        if self.solution_file.exists() {
            std::fs::remove_file(&self.solution_file).with_context(|| {
                format!(
                    "Failed to remove stale result artifact: {}",
                    self.solution_file.display()
                )
            })?;
        }

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to spawn oracle process '{}'", self.command))?;

        let status = self.wait_for_exit(&mut child)?;
        if !status.success() {
            anyhow::bail!("Oracle process '{}' exited with {}", self.command, status);
        }

        let text = std::fs::read_to_string(&self.solution_file).with_context(|| {
            format!(
                "Oracle produced no result artifact at {}",
                self.solution_file.display()
            )
        })?;

        parse_solution(&text, formula.variable_count()).with_context(|| {
            format!(
                "Malformed result artifact: {}",
                self.solution_file.display()
            )
        })
    }
}

/// Oracle backend selected by configuration, behind one interface.
pub enum ConfiguredOracle {
    Cadical(CadicalOracle),
    Process(ProcessOracle),
}

impl ConfiguredOracle {
    /// Build the oracle the configuration asks for.
    pub fn from_config(config: &OracleConfig) -> Self {
        match config.backend {
            OracleBackend::Cadical => ConfiguredOracle::Cadical(CadicalOracle::new()),
            OracleBackend::Process => {
                let mut oracle = ProcessOracle::new(
                    config.command.clone(),
                    config.args.clone(),
                    config.cnf_file.clone(),
                    config.solution_file.clone(),
                );
                if let Some(seconds) = config.timeout_seconds {
                    oracle = oracle.with_timeout(Duration::from_secs(seconds));
                }
                ConfiguredOracle::Process(oracle)
            }
        }
    }
}

impl Oracle for ConfiguredOracle {
    fn solve(&mut self, formula: &CnfFormula) -> Result<OracleVerdict> {
        match self {
            ConfiguredOracle::Cadical(oracle) => oracle.solve(formula),
            ConfiguredOracle::Process(oracle) => oracle.solve(formula),
        }
    }
}
