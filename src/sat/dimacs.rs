//! Oracle artifact formats
//!
//! The hand-off to the oracle is two text artifacts: a DIMACS-style CNF
//! input (`p cnf <vars> <clauses>` header, one `0`-terminated clause per
//! line) and a result file (`True`/`False`, then the full assignment).

use super::cnf::CnfFormula;
use super::oracle::OracleVerdict;
use itertools::Itertools;
use std::io::{self, Write};
use thiserror::Error;

/// Serialize a formula into the oracle's DIMACS input format.
///
/// The header's clause count is read off the clause list itself, so the
/// declared count can never disagree with the body.
pub fn write_dimacs<W: Write>(formula: &CnfFormula, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "p cnf {} {}",
        formula.variable_count(),
        formula.clause_count()
    )?;
    for clause in formula.clauses() {
        writeln!(writer, "{} 0", clause.literals.iter().join(" "))?;
    }
    Ok(())
}

/// Serialize a formula to a DIMACS string.
pub fn dimacs_string(formula: &CnfFormula) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec<u8> cannot fail.
    write_dimacs(formula, &mut buffer).expect("in-memory write failed");
    String::from_utf8(buffer).expect("DIMACS output is ASCII")
}

/// Errors raised while parsing the oracle's result artifact. A malformed or
/// truncated artifact is fatal, never silently truncated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolutionFormatError {
    #[error("result artifact is empty")]
    Empty,

    #[error("expected verdict 'True' or 'False', found '{0}'")]
    UnknownVerdict(String),

    #[error("expected an integer in the assignment, found '{0}'")]
    InvalidInteger(String),

    #[error("artifact declares {declared} literals but holds {found}")]
    LiteralCountMismatch { declared: usize, found: usize },

    #[error("artifact declares {declared} literals for a formula over {expected} variables")]
    VariableCountMismatch { declared: usize, expected: usize },

    #[error("assignment entry {position} is {literal}, expected ±{position}")]
    MisplacedLiteral { position: usize, literal: i32 },
}

/// Parse a result artifact for a formula over `variable_count` variables.
///
/// Format: line 1 is `True` or `False`; on `True` an integer count follows,
/// then that many signed integers, entry `i` holding `+i` or `-i`.
pub fn parse_solution(
    text: &str,
    variable_count: usize,
) -> Result<OracleVerdict, SolutionFormatError> {
    let mut tokens = text.split_whitespace();
    let verdict = tokens.next().ok_or(SolutionFormatError::Empty)?;

    match verdict {
        "False" => Ok(OracleVerdict::Unsatisfiable),
        "True" => {
            let declared = next_integer(&mut tokens)? as usize;
            if declared != variable_count {
                return Err(SolutionFormatError::VariableCountMismatch {
                    declared,
                    expected: variable_count,
                });
            }

            let mut assignment = Vec::with_capacity(declared);
            for token in tokens.by_ref().take(declared) {
                let literal: i32 = token
                    .parse()
                    .map_err(|_| SolutionFormatError::InvalidInteger(token.to_string()))?;
                let position = assignment.len() + 1;
                if literal.unsigned_abs() as usize != position {
                    return Err(SolutionFormatError::MisplacedLiteral { position, literal });
                }
                assignment.push(literal);
            }
            if assignment.len() != declared {
                return Err(SolutionFormatError::LiteralCountMismatch {
                    declared,
                    found: assignment.len(),
                });
            }
            Ok(OracleVerdict::Satisfiable(assignment))
        }
        other => Err(SolutionFormatError::UnknownVerdict(other.to_string())),
    }
}

fn next_integer<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
) -> Result<i64, SolutionFormatError> {
    let token = tokens
        .next()
        .ok_or_else(|| SolutionFormatError::InvalidInteger(String::new()))?;
    token
        .parse()
        .map_err(|_| SolutionFormatError::InvalidInteger(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::cnf::Clause;

    fn sample_formula() -> CnfFormula {
        let mut formula = CnfFormula::new(3);
        formula.push(Clause::new(vec![1, 2, 3])).unwrap();
        formula.push(Clause::binary(-1, -2)).unwrap();
        formula.push(Clause::unit(3)).unwrap();
        formula
    }

    #[test]
    fn test_dimacs_output() {
        let formula = sample_formula();
        assert_eq!(dimacs_string(&formula), "p cnf 3 3\n1 2 3 0\n-1 -2 0\n3 0\n");
    }

    #[test]
    fn test_header_tracks_clause_list() {
        let mut formula = CnfFormula::new(2);
        assert_eq!(dimacs_string(&formula), "p cnf 2 0\n");

        formula.push(Clause::binary(1, -2)).unwrap();
        assert_eq!(dimacs_string(&formula), "p cnf 2 1\n1 -2 0\n");
    }

    #[test]
    fn test_parse_unsatisfiable() {
        assert_eq!(
            parse_solution("False\n", 4).unwrap(),
            OracleVerdict::Unsatisfiable
        );
    }

    #[test]
    fn test_parse_satisfiable() {
        let verdict = parse_solution("True\n4\n1 -2 3 -4\n", 4).unwrap();
        assert_eq!(verdict, OracleVerdict::Satisfiable(vec![1, -2, 3, -4]));
    }

    #[test]
    fn test_parse_empty_artifact() {
        assert_eq!(parse_solution("", 2), Err(SolutionFormatError::Empty));
    }

    #[test]
    fn test_parse_unknown_verdict() {
        assert_eq!(
            parse_solution("Maybe\n", 2),
            Err(SolutionFormatError::UnknownVerdict("Maybe".to_string()))
        );
    }

    #[test]
    fn test_parse_wrong_variable_count() {
        assert_eq!(
            parse_solution("True\n3\n1 -2 3\n", 4),
            Err(SolutionFormatError::VariableCountMismatch {
                declared: 3,
                expected: 4
            })
        );
    }

    #[test]
    fn test_parse_truncated_assignment() {
        assert_eq!(
            parse_solution("True\n3\n1 -2\n", 3),
            Err(SolutionFormatError::LiteralCountMismatch {
                declared: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_parse_misplaced_literal() {
        assert_eq!(
            parse_solution("True\n3\n1 3 -2\n", 3),
            Err(SolutionFormatError::MisplacedLiteral {
                position: 2,
                literal: 3
            })
        );
    }

    #[test]
    fn test_parse_non_numeric_literal() {
        assert_eq!(
            parse_solution("True\n2\n1 x\n", 2),
            Err(SolutionFormatError::InvalidInteger("x".to_string()))
        );
    }
}
