use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::formulas::{Formula, Literal, Variable};

/// The context in which formulas live.
///
/// A `FormulaFactory` interns variable names and hands out [`Variable`]
/// handles: requesting the same name twice yields the same variable, so all
/// formulas created on one factory agree on variable identity. It also
/// provides the constructors for all formula types.
///
/// All constructors take `&self`; the name table uses interior mutability, so
/// a factory can be shared freely between formula-building call sites.
///
/// Formulas and variables from one factory are meaningless in the context of
/// another factory: printing them there will yield wrong names or panic.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use resolvent::formulas::FormulaFactory;
/// let f = FormulaFactory::new();
///
/// let red = f.variable("red");
/// let moving = f.variable("speed_above_5");
/// let violation = f.variable("RedLightViolation");
///
/// let rule = f.or(&[f.not(red), f.not(moving), violation]);
///
/// assert_eq!(rule.to_string(&f), "~red | ~speed_above_5 | RedLightViolation");
/// ```
#[derive(Default, Debug)]
pub struct FormulaFactory {
    vars: RwLock<VariableTable>,
}

#[derive(Default, Debug)]
struct VariableTable {
    names: Vec<Arc<str>>,
    indices: HashMap<Arc<str>, Variable>,
}

impl FormulaFactory {
    /// Creates a new factory with an empty variable table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `name` and returns its [`Variable`] handle.
    ///
    /// Names are case-sensitive; interning the same name again returns the
    /// same variable.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// assert_eq!(f.var("a"), f.var("a"));
    /// assert_ne!(f.var("a"), f.var("A"));
    /// ```
    pub fn var(&self, name: &str) -> Variable {
        {
            let table = self.vars.read().expect("variable table lock poisoned");
            if let Some(var) = table.indices.get(name) {
                return *var;
            }
        }
        let mut table = self.vars.write().expect("variable table lock poisoned");
        // Another writer may have interned the name between the locks.
        if let Some(var) = table.indices.get(name) {
            return *var;
        }
        let var = Variable(table.names.len() as u64);
        let name: Arc<str> = Arc::from(name);
        table.names.push(Arc::clone(&name));
        table.indices.insert(name, var);
        var
    }

    /// Interns `name` and returns a [`Literal`] with the given `phase`.
    pub fn lit(&self, name: &str, phase: bool) -> Literal {
        Literal::new(self.var(name), phase)
    }

    /// Interns `name` and returns it as a positive-literal formula.
    pub fn variable(&self, name: &str) -> Formula {
        Formula::Lit(Literal::Pos(self.var(name)))
    }

    /// Interns `name` and returns it as a literal formula with the given
    /// `phase`.
    pub fn literal(&self, name: &str, phase: bool) -> Formula {
        Formula::Lit(self.lit(name, phase))
    }

    /// Creates the negation of `operand`.
    ///
    /// Negation of a literal collapses into the complementary literal, and a
    /// double negation collapses into the inner formula. Negations over all
    /// other formula types are kept structurally.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let a = f.variable("a");
    ///
    /// assert_eq!(f.not(a.clone()), f.literal("a", false));
    /// assert_eq!(f.not(f.not(a.clone())), a);
    /// ```
    pub fn not(&self, operand: Formula) -> Formula {
        match operand {
            Formula::Lit(lit) => Formula::Lit(lit.negate()),
            Formula::Not(inner) => inner.as_ref().clone(),
            other => Formula::Not(Arc::new(other)),
        }
    }

    /// Creates the conjunction of `operands`. The operand order is kept.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let formula = f.and(&[f.variable("a"), f.literal("b", false)]);
    ///
    /// assert_eq!(formula.to_string(&f), "a & ~b");
    /// ```
    pub fn and(&self, operands: &[Formula]) -> Formula {
        Formula::And(operands.to_vec().into())
    }

    /// Creates the disjunction of `operands`. The operand order is kept.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let formula = f.or(&[f.literal("a", false), f.variable("b")]);
    ///
    /// assert_eq!(formula.to_string(&f), "~a | b");
    /// ```
    pub fn or(&self, operands: &[Formula]) -> Formula {
        Formula::Or(operands.to_vec().into())
    }

    /// Creates the implication `left => right`.
    pub fn implication(&self, left: Formula, right: Formula) -> Formula {
        Formula::Impl(Arc::new((left, right)))
    }

    /// Creates the equivalence `left <=> right`.
    pub fn equivalence(&self, left: Formula, right: Formula) -> Formula {
        Formula::Equiv(Arc::new((left, right)))
    }

    pub(crate) fn var_name(&self, var: Variable) -> Arc<str> {
        let table = self.vars.read().expect("variable table lock poisoned");
        Arc::clone(&table.names[var.index() as usize])
    }
}
