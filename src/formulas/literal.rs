use std::sync::Arc;

use crate::formulas::{Formula, FormulaFactory, ToFormula, Variable};

/// Boolean literal.
///
/// A literal consists of a [`Variable`] and its phase (also sign or polarity
/// in the literature). Literals are the atomic formulas of this crate: a
/// positive literal is what the knowledge-base layer calls a symbol, a
/// negative literal its minimal negation.
///
/// Two literals are *complementary* iff they have the same variable and
/// opposite phase; [`negate`] produces the complement.
///
/// `Literal` can only be interpreted in the context of the [`FormulaFactory`]
/// which interned its variable, since the name is stored there.
///
/// [`negate`]: Literal::negate
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Literal {
    /// Positive literal
    Pos(Variable),
    /// Negative literal
    Neg(Variable),
}

impl Literal {
    /// Creates a new `Literal` from a [`Variable`] and a `phase`. `phase`
    /// describes the value of the literal. So `true` will yield a positive
    /// literal, and `false` a negated literal.
    ///
    /// If you want to create a literal without an existing `Variable`, you can
    /// use the function [`lit()`] in [`FormulaFactory`].
    ///
    /// [`lit()`]: FormulaFactory::lit
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// # use resolvent::formulas::Literal;
    /// let f = FormulaFactory::new();
    ///
    /// let var = f.var("a");
    /// let literal1 = Literal::new(var, true); // "a"
    /// let literal2 = Literal::new(var, false); // "~a"
    /// ```
    pub const fn new(variable: Variable, phase: bool) -> Self {
        if phase {
            Self::Pos(variable)
        } else {
            Self::Neg(variable)
        }
    }

    /// Returns the inherit variable of this literal.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// # use resolvent::formulas::Literal;
    /// let f = FormulaFactory::new();
    ///
    /// let var = f.var("a");
    /// let literal = Literal::new(var, true);
    ///
    /// assert_eq!(literal.variable(), var);
    /// ```
    pub const fn variable(&self) -> Variable {
        match self {
            Self::Pos(v) | Self::Neg(v) => *v,
        }
    }

    /// Returns the phase of this literal.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let lit1 = f.lit("a", true);
    /// let lit2 = f.lit("a", false);
    ///
    /// assert!(lit1.phase());
    /// assert!(!lit2.phase());
    /// ```
    pub const fn phase(&self) -> bool {
        matches!(self, Self::Pos(_))
    }

    /// Returns the complement of this literal: same variable, opposite phase.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let lit = f.lit("a", true);
    ///
    /// assert_eq!(lit.negate(), f.lit("a", false));
    /// assert_eq!(lit.negate().negate(), lit);
    /// ```
    pub const fn negate(&self) -> Self {
        match self {
            Self::Pos(v) => Self::Neg(*v),
            Self::Neg(v) => Self::Pos(*v),
        }
    }

    /// Returns the name of the inherit variable of this literal.
    pub fn name(&self, f: &FormulaFactory) -> Arc<str> {
        self.variable().name(f)
    }

    /// Returns a string representation of this literal: the variable name,
    /// prefixed with `~` for a negative literal.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// assert_eq!(f.lit("a", true).to_string(&f), "a");
    /// assert_eq!(f.lit("a", false).to_string(&f), "~a");
    /// ```
    pub fn to_string(&self, f: &FormulaFactory) -> String {
        match self {
            Self::Pos(v) => v.name(f).to_string(),
            Self::Neg(v) => format!("~{}", v.name(f)),
        }
    }
}

/// Literals order by variable, positive phase first.
impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.variable().cmp(&other.variable()).then_with(|| other.phase().cmp(&self.phase()))
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Literal> for Formula {
    fn from(lit: Literal) -> Self {
        Self::Lit(lit)
    }
}

impl ToFormula for Literal {
    fn to_formula(&self, _: &FormulaFactory) -> Formula {
        (*self).into()
    }
}
