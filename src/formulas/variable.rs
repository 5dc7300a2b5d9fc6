use std::sync::Arc;

use crate::formulas::{Formula, FormulaFactory, Literal, ToFormula};

/// Boolean variables.
///
/// A `Variable` is a `Copy` handle into the [`FormulaFactory`] which interned
/// its name. Interning the same name twice yields the same variable, so
/// variables can be compared and hashed without touching the factory. This
/// also means that **a `Variable` is only meaningful in the context of the
/// `FormulaFactory` it was created in.**
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Variable(pub(super) u64);

impl Variable {
    /// Constructs a variable based on an index in a [`FormulaFactory`].
    ///
    /// Note that this variable will not be registered in any `FormulaFactory`.
    /// Passing an index which was never handed out by the factory and using
    /// the resulting variable will end in a panic on name lookup.
    ///
    /// In any normal use case of this library, it should not be necessary to
    /// use this constructor.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use resolvent::formulas::{FormulaFactory, Variable};
    /// let f = FormulaFactory::new();
    ///
    /// let var1 = f.var("A");
    /// let var2 = Variable::from_index(0);
    ///
    /// assert_eq!(var1, var2);
    /// ```
    pub const fn from_index(index: u64) -> Self {
        Self(index)
    }

    /// Returns the name of the variable.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let var = f.var("A");
    ///
    /// assert_eq!(&*var.name(&f), "A");
    /// ```
    pub fn name(&self, f: &FormulaFactory) -> Arc<str> {
        f.var_name(*self)
    }

    /// Returns this variable as a positive literal.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let var = f.var("A");
    /// let lit = f.lit("A", true);
    ///
    /// assert_eq!(var.pos_lit(), lit);
    /// ```
    pub const fn pos_lit(self) -> Literal {
        Literal::Pos(self)
    }

    /// Returns this variable as a negative literal.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let var = f.var("A");
    /// let lit = f.lit("A", false);
    ///
    /// assert_eq!(var.neg_lit(), lit);
    /// ```
    pub const fn neg_lit(self) -> Literal {
        Literal::Neg(self)
    }

    /// Returns this variable as a negative literal.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let var = f.var("A");
    /// let lit = f.lit("A", false);
    ///
    /// assert_eq!(var.negate(), lit);
    /// ```
    pub const fn negate(self) -> Literal {
        Literal::Neg(self)
    }

    pub(crate) const fn index(self) -> u64 {
        self.0
    }
}

impl From<Variable> for Formula {
    fn from(var: Variable) -> Self {
        Self::Lit(Literal::Pos(var))
    }
}

impl ToFormula for Variable {
    fn to_formula(&self, _: &FormulaFactory) -> Formula {
        (*self).into()
    }
}
