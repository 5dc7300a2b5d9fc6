use fastrand::Rng;

use crate::formulas::{Formula, FormulaFactory, Literal, Variable};

/// A randomizer for knowledge-base shaped formulas.
///
/// Generates random literals, rule clauses (disjunctions of literals), and
/// fact sets over a fixed variable alphabet `v0 .. v{n-1}`. The sentences it
/// produces always stay inside the fragment the entailment engine supports,
/// which makes the randomizer suitable for differential testing against
/// brute-force truth-table enumeration.
///
/// The generator is seeded, so every test run sees the same sequence.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use resolvent::formulas::FormulaFactory;
/// # use resolvent::util::formula_randomizer::FormulaRandomizer;
/// let f = FormulaFactory::new();
/// let mut randomizer = FormulaRandomizer::new(&f, 4, 42);
///
/// let kb = randomizer.rule_clauses(3, 2);
/// assert_eq!(kb.len(), 3);
/// ```
pub struct FormulaRandomizer {
    rng: Rng,
    variables: Vec<Variable>,
}

impl FormulaRandomizer {
    /// Creates a randomizer over `num_vars` variables with the given seed.
    pub fn new(f: &FormulaFactory, num_vars: usize, seed: u64) -> Self {
        let variables = (0..num_vars).map(|i| f.var(&format!("v{i}"))).collect();
        Self { rng: Rng::with_seed(seed), variables }
    }

    /// Returns a random variable of the alphabet.
    pub fn variable(&mut self) -> Variable {
        self.variables[self.rng.usize(..self.variables.len())]
    }

    /// Returns a random literal with uniformly random phase.
    pub fn literal(&mut self) -> Literal {
        Literal::new(self.variable(), self.rng.bool())
    }

    /// Returns a random unit-literal fact.
    pub fn fact(&mut self) -> Formula {
        Formula::Lit(self.literal())
    }

    /// Returns `num` random unit-literal facts.
    pub fn facts(&mut self, num: usize) -> Vec<Formula> {
        (0..num).map(|_| self.fact()).collect()
    }

    /// Returns a random clause with 1 to `max_width` literals as a
    /// disjunction. Duplicate literals may occur and collapse downstream.
    pub fn rule_clause(&mut self, max_width: usize) -> Formula {
        let width = self.rng.usize(1..=max_width);
        let literals = (0..width).map(|_| Formula::Lit(self.literal())).collect::<Vec<_>>();
        Formula::Or(literals.into())
    }

    /// Returns `num` random clauses with at most `max_width` literals each.
    pub fn rule_clauses(&mut self, num: usize, max_width: usize) -> Vec<Formula> {
        (0..num).map(|_| self.rule_clause(max_width)).collect()
    }
}
