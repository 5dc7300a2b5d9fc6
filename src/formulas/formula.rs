use std::collections::BTreeSet;
use std::sync::Arc;

use itertools::Itertools;

use crate::formulas::{FormulaFactory, Literal, Variable};

/// Specifies all types a [`Formula`] can have.
///
/// You can get the type of a `Formula` by calling [`Formula::formula_type()`].
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum FormulaType {
    /// Equivalence
    Equiv,
    /// Implication
    Impl,
    /// Disjunction
    Or,
    /// Conjunction
    And,
    /// Negation
    Not,
    /// Literal
    Lit,
}

/// A propositional formula as an immutable value tree.
///
/// A `Formula` is one of the following:
/// - a literal (an atomic symbol or its minimal negation),
/// - a negation of a formula,
/// - a conjunction or disjunction of an ordered sequence of formulas
///   (arity >= 0),
/// - an implication or equivalence of two formulas.
///
/// Equality and hashing are structural: two formulas are equal iff they have
/// the same recursive shape. Sub-formulas are held behind [`Arc`], so cloning
/// is cheap and sharing is harmless since nodes are never mutated.
///
/// Atoms reference a [`Variable`] interned in a [`FormulaFactory`], so a
/// formula can only be printed in the context of the factory it was created
/// in. The usual way to obtain formulas is through the factory constructors
/// ([`variable`], [`literal`], [`not`], [`and`], [`or`], [`implication`],
/// [`equivalence`]) or by parsing a string via [`ToFormula`].
///
/// [`variable`]: FormulaFactory::variable
/// [`literal`]: FormulaFactory::literal
/// [`not`]: FormulaFactory::not
/// [`and`]: FormulaFactory::and
/// [`or`]: FormulaFactory::or
/// [`implication`]: FormulaFactory::implication
/// [`equivalence`]: FormulaFactory::equivalence
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub enum Formula {
    /// Literal
    Lit(Literal),
    /// Negation of a formula
    Not(Arc<Formula>),
    /// Conjunction of an ordered sequence of formulas
    And(Arc<[Formula]>),
    /// Disjunction of an ordered sequence of formulas
    Or(Arc<[Formula]>),
    /// Implication with antecedent and consequent
    Impl(Arc<(Formula, Formula)>),
    /// Equivalence of two formulas
    Equiv(Arc<(Formula, Formula)>),
}

impl Formula {
    /// Returns the type of the formula as a [`FormulaType`] enum.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::{FormulaFactory, FormulaType, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let formula1 = "a & b".to_formula(&f);
    /// let formula2 = "a => b".to_formula(&f);
    ///
    /// assert_eq!(formula1.formula_type(), FormulaType::And);
    /// assert_eq!(formula2.formula_type(), FormulaType::Impl);
    /// ```
    pub const fn formula_type(&self) -> FormulaType {
        match self {
            Self::Lit(_) => FormulaType::Lit,
            Self::Not(_) => FormulaType::Not,
            Self::And(_) => FormulaType::And,
            Self::Or(_) => FormulaType::Or,
            Self::Impl(_) => FormulaType::Impl,
            Self::Equiv(_) => FormulaType::Equiv,
        }
    }

    /// Returns `true` if this formula is an atom, i.e. a literal.
    pub const fn is_atomic(&self) -> bool {
        matches!(self, Self::Lit(_))
    }

    /// Returns this formula as a [`Literal`] if it is one.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::{FormulaFactory, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// assert_eq!("~a".to_formula(&f).as_literal(), Some(f.lit("a", false)));
    /// assert_eq!("a & b".to_formula(&f).as_literal(), None);
    /// ```
    pub const fn as_literal(&self) -> Option<Literal> {
        match self {
            Self::Lit(lit) => Some(*lit),
            _ => None,
        }
    }

    /// Returns this formula as a [`Variable`] if it is a positive literal.
    pub const fn as_variable(&self) -> Option<Variable> {
        match self {
            Self::Lit(Literal::Pos(v)) => Some(*v),
            _ => None,
        }
    }

    /// Returns all variables occurring in this formula.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::{FormulaFactory, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let formula = "~a | b => c".to_formula(&f);
    /// let vars = formula.variables();
    ///
    /// assert_eq!(vars.len(), 3);
    /// assert!(vars.contains(&f.var("a")));
    /// ```
    pub fn variables(&self) -> BTreeSet<Variable> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<Variable>) {
        match self {
            Self::Lit(lit) => {
                vars.insert(lit.variable());
            }
            Self::Not(op) => op.collect_variables(vars),
            Self::And(ops) | Self::Or(ops) => {
                for op in ops.iter() {
                    op.collect_variables(vars);
                }
            }
            Self::Impl(pair) | Self::Equiv(pair) => {
                pair.0.collect_variables(vars);
                pair.1.collect_variables(vars);
            }
        }
    }

    /// Returns all literals occurring in this formula. A variable occurring
    /// with both phases yields two entries.
    pub fn literals(&self) -> BTreeSet<Literal> {
        let mut lits = BTreeSet::new();
        self.collect_literals(&mut lits);
        lits
    }

    fn collect_literals(&self, lits: &mut BTreeSet<Literal>) {
        match self {
            Self::Lit(lit) => {
                lits.insert(*lit);
            }
            Self::Not(op) => op.collect_literals(lits),
            Self::And(ops) | Self::Or(ops) => {
                for op in ops.iter() {
                    op.collect_literals(lits);
                }
            }
            Self::Impl(pair) | Self::Equiv(pair) => {
                pair.0.collect_literals(lits);
                pair.1.collect_literals(lits);
            }
        }
    }

    /// Returns a string representation of this formula in the context of its
    /// [`FormulaFactory`].
    ///
    /// The printed form round-trips through the parser: `~` binds strongest,
    /// then `&`, `|`, `=>`, `<=>`, with `=>` and `<=>` right-associative.
    /// Empty conjunctions print as `$true` and empty disjunctions as
    /// `$false` (neither is parseable, both only arise from explicitly
    /// constructed zero-arity operators).
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::{FormulaFactory, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let formula = "(a | ~b) & c => d".to_formula(&f);
    ///
    /// assert_eq!(formula.to_string(&f), "(a | ~b) & c => d");
    /// ```
    pub fn to_string(&self, f: &FormulaFactory) -> String {
        match self {
            Self::Lit(lit) => lit.to_string(f),
            Self::Not(op) => {
                if op.is_atomic() {
                    format!("~{}", op.to_string(f))
                } else {
                    format!("~({})", op.to_string(f))
                }
            }
            Self::And(ops) => {
                if ops.is_empty() {
                    "$true".to_string()
                } else {
                    ops.iter().map(|op| self.operand_string(op, f)).join(" & ")
                }
            }
            Self::Or(ops) => {
                if ops.is_empty() {
                    "$false".to_string()
                } else {
                    ops.iter().map(|op| self.operand_string(op, f)).join(" | ")
                }
            }
            Self::Impl(pair) => {
                format!("{} => {}", self.operand_string(&pair.0, f), self.right_operand_string(&pair.1, f))
            }
            Self::Equiv(pair) => {
                format!("{} <=> {}", self.operand_string(&pair.0, f), self.right_operand_string(&pair.1, f))
            }
        }
    }

    /// Renders `op` as an operand of `self`, parenthesized if its operator
    /// binds weaker (or equal, for the left side of the right-associative
    /// binary operators).
    fn operand_string(&self, op: &Self, f: &FormulaFactory) -> String {
        let needs_parens = match self {
            Self::And(_) => matches!(op, Self::Or(_) | Self::Impl(_) | Self::Equiv(_)),
            Self::Or(_) => matches!(op, Self::Impl(_) | Self::Equiv(_)),
            Self::Impl(_) => matches!(op, Self::Impl(_) | Self::Equiv(_)),
            Self::Equiv(_) => matches!(op, Self::Equiv(_)),
            Self::Lit(_) | Self::Not(_) => false,
        };
        if needs_parens {
            format!("({})", op.to_string(f))
        } else {
            op.to_string(f)
        }
    }

    fn right_operand_string(&self, op: &Self, f: &FormulaFactory) -> String {
        let needs_parens = match self {
            Self::Impl(_) => matches!(op, Self::Equiv(_)),
            _ => false,
        };
        if needs_parens {
            format!("({})", op.to_string(f))
        } else {
            op.to_string(f)
        }
    }
}

/// Conversion into a [`Formula`] in the context of a [`FormulaFactory`].
///
/// Implemented for strings (backed by the formula parser), [`Variable`], and
/// [`Literal`].
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use resolvent::formulas::{FormulaFactory, ToFormula};
/// let f = FormulaFactory::new();
///
/// let formula = "a => b".to_formula(&f);
///
/// assert_eq!(formula.to_string(&f), "a => b");
/// ```
pub trait ToFormula {
    /// Converts this value into a formula.
    fn to_formula(&self, f: &FormulaFactory) -> Formula;
}
