//! SAT reduction plumbing: variable numbering, formulas, artifact formats,
//! and the oracle boundary

pub mod cnf;
pub mod codec;
pub mod dimacs;
pub mod oracle;

pub use cnf::{Clause, CnfFormula};
pub use codec::VariableCodec;
pub use dimacs::{dimacs_string, parse_solution, write_dimacs, SolutionFormatError};
pub use oracle::{CadicalOracle, ConfiguredOracle, Oracle, OracleVerdict, ProcessOracle};
