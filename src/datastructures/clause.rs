use std::collections::BTreeSet;

use itertools::Itertools;

use crate::formulas::{FormulaFactory, Literal};

/// A clause: a set of [`Literal`]s interpreted as their disjunction.
///
/// Duplicate literals collapse. A clause containing a literal and its
/// complement is tautological; this is not special-cased, it behaves
/// correctly under resolution regardless. The empty clause denotes a logical
/// contradiction (`false`).
///
/// Identity is purely set-based: two clauses are equal iff they contain the
/// same literals, independent of insertion order.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use resolvent::datastructures::Clause;
/// # use resolvent::formulas::FormulaFactory;
/// let f = FormulaFactory::new();
///
/// let clause: Clause = [f.lit("a", false), f.lit("b", true), f.lit("a", false)].into_iter().collect();
///
/// assert_eq!(clause.len(), 2);
/// assert_eq!(clause.to_string(&f), "~a | b");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Clause {
    lits: BTreeSet<Literal>,
}

impl Clause {
    /// Creates the empty clause.
    pub const fn empty() -> Self {
        Self { lits: BTreeSet::new() }
    }

    /// Creates a unit clause holding a single literal.
    pub fn unit(lit: Literal) -> Self {
        Self { lits: BTreeSet::from([lit]) }
    }

    /// Returns `true` if this is the empty clause, i.e. a contradiction.
    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    /// Returns the number of distinct literals in this clause.
    pub fn len(&self) -> usize {
        self.lits.len()
    }

    /// Returns `true` if this clause contains `lit`.
    pub fn contains(&self, lit: Literal) -> bool {
        self.lits.contains(&lit)
    }

    /// Iterates over the literals of this clause in their natural order.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.lits.iter().copied()
    }

    /// Inserts a literal into this clause. Returns `true` if the literal was
    /// not yet present.
    pub fn insert(&mut self, lit: Literal) -> bool {
        self.lits.insert(lit)
    }

    /// Merges all literals of `other` into this clause.
    pub fn merge(&mut self, other: &Self) {
        self.lits.extend(other.lits.iter().copied());
    }

    /// Computes all resolvents of this clause with `other`.
    ///
    /// For every literal `l` in `self` whose complement is in `other`, the
    /// resolvent `(self \ {l}) ∪ (other \ {~l})` is produced. Several
    /// complementary pairs yield several resolvents. An empty result means
    /// the two clauses do not clash.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use resolvent::datastructures::Clause;
    /// # use resolvent::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let c1: Clause = [f.lit("a", true), f.lit("b", true)].into_iter().collect();
    /// let c2: Clause = [f.lit("a", false), f.lit("c", true)].into_iter().collect();
    ///
    /// let resolvents = c1.resolvents(&c2);
    /// assert_eq!(resolvents.len(), 1);
    /// assert_eq!(resolvents[0].to_string(&f), "b | c");
    /// ```
    pub fn resolvents(&self, other: &Self) -> Vec<Self> {
        let mut resolvents = Vec::new();
        for lit in self.literals() {
            let comp = lit.negate();
            if other.contains(comp) {
                let lits = self
                    .literals()
                    .filter(|&l| l != lit)
                    .chain(other.literals().filter(|&l| l != comp))
                    .collect();
                resolvents.push(Self { lits });
            }
        }
        resolvents
    }

    /// Returns a string representation of this clause as a disjunction of
    /// literals. The empty clause prints as `$false`.
    pub fn to_string(&self, f: &FormulaFactory) -> String {
        if self.lits.is_empty() {
            "$false".to_string()
        } else {
            self.lits.iter().map(|lit| lit.to_string(f)).join(" | ")
        }
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self { lits: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use crate::datastructures::Clause;
    use crate::formulas::FormulaFactory;

    #[test]
    fn test_set_semantics() {
        let f = FormulaFactory::new();
        let c1: Clause = [f.lit("a", true), f.lit("b", false)].into_iter().collect();
        let c2: Clause = [f.lit("b", false), f.lit("a", true), f.lit("a", true)].into_iter().collect();
        assert_eq!(c1, c2);
        assert_eq!(c1.len(), 2);
        assert!(!c1.is_empty());
        assert!(Clause::empty().is_empty());
    }

    #[test]
    fn test_single_resolvent() {
        let f = FormulaFactory::new();
        let c1: Clause = [f.lit("red", false), f.lit("violation", true)].into_iter().collect();
        let c2 = Clause::unit(f.lit("red", true));
        let resolvents = c1.resolvents(&c2);
        assert_eq!(resolvents, vec![Clause::unit(f.lit("violation", true))]);
    }

    #[test]
    fn test_empty_resolvent_from_complementary_units() {
        let f = FormulaFactory::new();
        let pos = Clause::unit(f.lit("a", true));
        let neg = Clause::unit(f.lit("a", false));
        let resolvents = pos.resolvents(&neg);
        assert_eq!(resolvents, vec![Clause::empty()]);
    }

    #[test]
    fn test_no_clash_yields_no_resolvents() {
        let f = FormulaFactory::new();
        let c1 = Clause::unit(f.lit("a", true));
        let c2 = Clause::unit(f.lit("b", false));
        assert!(c1.resolvents(&c2).is_empty());
    }

    #[test]
    fn test_multiple_complementary_pairs() {
        let f = FormulaFactory::new();
        // {a, b} vs {~a, ~b}: resolving on a leaves {b, ~b}, resolving on b
        // leaves {a, ~a}. Both are tautologies and both are produced.
        let c1: Clause = [f.lit("a", true), f.lit("b", true)].into_iter().collect();
        let c2: Clause = [f.lit("a", false), f.lit("b", false)].into_iter().collect();
        let resolvents = c1.resolvents(&c2);
        assert_eq!(resolvents.len(), 2);
        let taut_b: Clause = [f.lit("b", true), f.lit("b", false)].into_iter().collect();
        let taut_a: Clause = [f.lit("a", true), f.lit("a", false)].into_iter().collect();
        assert!(resolvents.contains(&taut_a));
        assert!(resolvents.contains(&taut_b));
    }

    #[test]
    fn test_to_string() {
        let f = FormulaFactory::new();
        assert_eq!(Clause::empty().to_string(&f), "$false");
        let c: Clause = [f.lit("b", true), f.lit("a", false)].into_iter().collect();
        assert_eq!(c.to_string(&f), "~a | b");
    }
}
