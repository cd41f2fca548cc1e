//! In-memory CNF formula representation

use anyhow::Result;

/// A SAT clause: a disjunction of nonzero signed literals.
///
/// Literal order is irrelevant to the semantics but is preserved so the
/// serialized output is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>,
}

impl Clause {
    /// Create a new clause from literals.
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal).
    pub fn unit(literal: i32) -> Self {
        Self {
            literals: vec![literal],
        }
    }

    /// Create a binary clause (two literals).
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self {
            literals: vec![lit1, lit2],
        }
    }

    /// Check if the clause is empty (unsatisfiable).
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

/// A CNF formula: a fixed variable count plus the collected clauses.
///
/// Every literal's absolute value must stay within `variable_count`; `push`
/// enforces this so a formula handed to the oracle is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnfFormula {
    variable_count: usize,
    clauses: Vec<Clause>,
}

impl CnfFormula {
    /// Create an empty formula over `variable_count` variables.
    pub fn new(variable_count: usize) -> Self {
        Self {
            variable_count,
            clauses: Vec::new(),
        }
    }

    /// Append a clause, validating its literals.
    pub fn push(&mut self, clause: Clause) -> Result<()> {
        if clause.is_empty() {
            anyhow::bail!("Cannot add empty clause (unsatisfiable)");
        }
        for &literal in &clause.literals {
            if literal == 0 {
                anyhow::bail!("Literal 0 is reserved for the clause terminator");
            }
            let variable = literal.unsigned_abs() as usize;
            if variable > self.variable_count {
                anyhow::bail!(
                    "Literal {} references a variable beyond the declared count {}",
                    literal,
                    self.variable_count
                );
            }
        }
        self.clauses.push(clause);
        Ok(())
    }

    /// Number of variables the formula ranges over.
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Number of clauses collected so far.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The collected clauses, in emission order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_count() {
        let mut formula = CnfFormula::new(3);
        formula.push(Clause::new(vec![1, 2, 3])).unwrap();
        formula.push(Clause::binary(-1, -2)).unwrap();

        assert_eq!(formula.variable_count(), 3);
        assert_eq!(formula.clause_count(), 2);
        assert_eq!(formula.clauses()[1], Clause::binary(-1, -2));
    }

    #[test]
    fn test_empty_clause_is_rejected() {
        let mut formula = CnfFormula::new(2);
        assert!(formula.push(Clause::new(vec![])).is_err());
    }

    #[test]
    fn test_zero_literal_is_rejected() {
        let mut formula = CnfFormula::new(2);
        assert!(formula.push(Clause::new(vec![1, 0])).is_err());
    }

    #[test]
    fn test_out_of_range_literal_is_rejected() {
        let mut formula = CnfFormula::new(2);
        assert!(formula.push(Clause::unit(3)).is_err());
        assert!(formula.push(Clause::unit(-3)).is_err());
        assert!(formula.push(Clause::unit(-2)).is_ok());
    }

    #[test]
    fn test_literal_order_is_preserved() {
        let mut formula = CnfFormula::new(5);
        formula.push(Clause::new(vec![5, -3, 1])).unwrap();
        assert_eq!(formula.clauses()[0].literals, vec![5, -3, 1]);
    }
}
