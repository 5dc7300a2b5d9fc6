use std::collections::HashSet;

use crate::formulas::{Formula, Literal, Variable};

/// An `Assignment` stores a set of positive and negative [`Variable`]s and
/// evaluates formulas against them.
///
/// Variables in neither set are unassigned and evaluate to `false`; the `neg`
/// set exists so callers can record explicitly-false facts, which matters
/// when enumerating or comparing assignments.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use resolvent::datastructures::Assignment;
/// # use resolvent::formulas::{FormulaFactory, ToFormula};
/// let f = FormulaFactory::new();
///
/// let assignment = Assignment::from_variables(&[f.var("a")], &[f.var("b")]);
///
/// assert!(assignment.evaluate(&"a | b".to_formula(&f)));
/// assert!(!assignment.evaluate(&"a & b".to_formula(&f)));
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Assignment {
    /// Set of all positive variables of this assignment.
    pub pos: HashSet<Variable>,
    /// Set of all negative variables of this assignment.
    pub neg: HashSet<Variable>,
}

impl Assignment {
    /// Creates a new assignment.
    pub const fn new(pos: HashSet<Variable>, neg: HashSet<Variable>) -> Self {
        Self { pos, neg }
    }

    /// Creates a new assignment from slices of positive and negative
    /// variables.
    pub fn from_variables(pos: &[Variable], neg: &[Variable]) -> Self {
        Self { pos: pos.iter().copied().collect(), neg: neg.iter().copied().collect() }
    }

    /// Creates a new assignment from literals. A positive literal is added to
    /// the positive variables, a negative literal to the negative variables.
    pub fn from_literals(literals: &[Literal]) -> Self {
        let mut assignment = Self::default();
        for lit in literals {
            assignment.add_literal(*lit);
        }
        assignment
    }

    /// Adds a literal to this assignment. The variable is removed from the
    /// opposite set if present, so the latest addition wins.
    pub fn add_literal(&mut self, lit: Literal) {
        match lit {
            Literal::Pos(v) => {
                self.neg.remove(&v);
                self.pos.insert(v);
            }
            Literal::Neg(v) => {
                self.pos.remove(&v);
                self.neg.insert(v);
            }
        }
    }

    /// Evaluates a literal under this assignment. A positive literal is
    /// `true` iff its variable is in the positive set; a negative literal is
    /// `true` iff its variable is *not* in the positive set (unassigned
    /// variables are treated as `false`).
    pub fn evaluate_lit(&self, lit: Literal) -> bool {
        match lit {
            Literal::Pos(v) => self.pos.contains(&v),
            Literal::Neg(v) => !self.pos.contains(&v),
        }
    }

    /// Evaluates a formula under this assignment.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::datastructures::Assignment;
    /// # use resolvent::formulas::{FormulaFactory, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let assignment = Assignment::from_variables(&[f.var("a"), f.var("b")], &[]);
    ///
    /// assert!(assignment.evaluate(&"a => b".to_formula(&f)));
    /// assert!(assignment.evaluate(&"a <=> b".to_formula(&f)));
    /// assert!(!assignment.evaluate(&"~a | ~b".to_formula(&f)));
    /// ```
    pub fn evaluate(&self, formula: &Formula) -> bool {
        match formula {
            Formula::Lit(lit) => self.evaluate_lit(*lit),
            Formula::Not(op) => !self.evaluate(op),
            Formula::And(ops) => ops.iter().all(|op| self.evaluate(op)),
            Formula::Or(ops) => ops.iter().any(|op| self.evaluate(op)),
            Formula::Impl(pair) => !self.evaluate(&pair.0) || self.evaluate(&pair.1),
            Formula::Equiv(pair) => self.evaluate(&pair.0) == self.evaluate(&pair.1),
        }
    }
}
