use std::collections::BTreeSet;

use crate::datastructures::Clause;
use crate::errors::EntailmentError;
use crate::formulas::{Formula, FormulaFactory};
use crate::operations::transformations::nnf;

/// Extracts a [`Clause`] from an NNF formula which is a literal or a
/// disjunction of literals.
///
/// Nested disjunctions are flattened into one literal set. Any other formula
/// type fails with [`EntailmentError::UnexpectedFormula`]: conjunctions must
/// be split into separate clauses by the caller first (see [`clausify`]), and
/// general CNF distribution is not performed.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use resolvent::formulas::{FormulaFactory, ToFormula};
/// # use resolvent::operations::transformations::to_clause;
/// let f = FormulaFactory::new();
///
/// let clause = to_clause(&"~a | (b | ~c)".to_formula(&f), &f).unwrap();
///
/// assert_eq!(clause.to_string(&f), "~a | b | ~c");
/// ```
pub fn to_clause(formula: &Formula, f: &FormulaFactory) -> Result<Clause, EntailmentError> {
    match formula {
        Formula::Lit(lit) => Ok(Clause::unit(*lit)),
        Formula::Or(ops) => {
            let mut clause = Clause::empty();
            for op in ops.iter() {
                clause.merge(&to_clause(op, f)?);
            }
            Ok(clause)
        }
        other => Err(EntailmentError::UnexpectedFormula(other.to_string(f))),
    }
}

/// Converts a set of sentences into a set of clauses.
///
/// Each sentence is independently rewritten into NNF. If the result is a
/// conjunction, each conjunct is extracted as its own clause; otherwise the
/// whole NNF formula is extracted as one clause. Duplicate clauses collapse.
///
/// The supported sentence fragment is: unit literals, disjunctions of
/// literals, and conjunctions of such. A conjunct which is itself a
/// disjunction of conjunctions is outside the fragment and fails with
/// [`EntailmentError::UnexpectedFormula`]; a negation sitting directly on an
/// implication or equivalence fails with
/// [`EntailmentError::UnsupportedFormula`].
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use resolvent::formulas::{FormulaFactory, ToFormula};
/// # use resolvent::operations::transformations::clausify;
/// let f = FormulaFactory::new();
///
/// let sentences = vec!["a => b".to_formula(&f), "a".to_formula(&f)];
/// let clauses = clausify(&sentences, &f).unwrap();
///
/// assert_eq!(clauses.len(), 2);
/// ```
pub fn clausify(sentences: &[Formula], f: &FormulaFactory) -> Result<BTreeSet<Clause>, EntailmentError> {
    let mut clauses = BTreeSet::new();
    for sentence in sentences {
        let sentence = nnf(sentence, f)?;
        if let Formula::And(ops) = &sentence {
            for op in ops.iter() {
                clauses.insert(to_clause(op, f)?);
            }
        } else {
            clauses.insert(to_clause(&sentence, f)?);
        }
    }
    Ok(clauses)
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::{clausify, to_clause};
    use crate::datastructures::Clause;
    use crate::errors::EntailmentError;
    use crate::formulas::ToFormula;
    use crate::util::test_util::F;

    #[test]
    fn test_unit_clauses() {
        let F = F::new();
        let f = &F.f;
        assert_eq!(to_clause(&F.A, f), Ok(Clause::unit(f.lit("a", true))));
        assert_eq!(to_clause(&F.NA, f), Ok(Clause::unit(f.lit("a", false))));
    }

    #[test]
    fn test_flattens_nested_disjunctions() {
        let F = F::new();
        let f = &F.f;
        let formula = f.or(&[F.NA.clone(), f.or(&[F.X.clone(), f.or(&[F.NY.clone(), F.B.clone()])])]);
        let clause = to_clause(&formula, f).unwrap();
        assert_eq!(clause.len(), 4);
        assert_eq!(clause.to_string(f), "~a | b | x | ~y");
    }

    #[test]
    fn test_duplicate_literals_collapse() {
        let F = F::new();
        let f = &F.f;
        let formula = f.or(&[F.A.clone(), F.A.clone(), F.NA.clone()]);
        let clause = to_clause(&formula, f).unwrap();
        assert_eq!(clause.len(), 2);
    }

    #[test]
    fn test_rejects_conjunctions() {
        let F = F::new();
        let f = &F.f;
        assert_eq!(to_clause(&F.AND1, f), Err(EntailmentError::UnexpectedFormula("a & b".to_string())));
        // also inside a disjunction
        let formula = f.or(&[F.X.clone(), F.AND1.clone()]);
        assert_eq!(to_clause(&formula, f), Err(EntailmentError::UnexpectedFormula("a & b".to_string())));
    }

    #[test]
    fn test_rejects_unconverted_operators() {
        let F = F::new();
        let f = &F.f;
        assert!(matches!(to_clause(&F.IMP1, f), Err(EntailmentError::UnexpectedFormula(_))));
        assert!(matches!(to_clause(&F.EQ1, f), Err(EntailmentError::UnexpectedFormula(_))));
        assert!(matches!(to_clause(&F.NOT1, f), Err(EntailmentError::UnexpectedFormula(_))));
    }

    #[test]
    fn test_implication_elimination() {
        let F = F::new();
        let f = &F.f;
        let clauses = clausify(&["a => b".to_formula(f)], f).unwrap();
        let expected: Clause = [f.lit("a", false), f.lit("b", true)].into_iter().collect();
        assert_eq!(clauses, [expected].into_iter().collect());
    }

    #[test]
    fn test_de_morgan_clause() {
        let F = F::new();
        let f = &F.f;
        let clauses = clausify(&[f.not(F.AND1.clone())], f).unwrap();
        let expected: Clause = [f.lit("a", false), f.lit("b", false)].into_iter().collect();
        assert_eq!(clauses, [expected].into_iter().collect());
    }

    #[test]
    fn test_conjunction_splits_into_clauses() {
        let F = F::new();
        let f = &F.f;
        let sentence = "(~a | b) & x & (~y | a)".to_formula(f);
        let clauses = clausify(&[sentence], f).unwrap();
        assert_eq!(clauses.len(), 3);
        assert!(clauses.contains(&Clause::unit(f.lit("x", true))));
    }

    #[test]
    fn test_equivalence_splits_into_both_directions() {
        let F = F::new();
        let f = &F.f;
        let clauses = clausify(&[F.EQ1.clone()], f).unwrap();
        let forward: Clause = [f.lit("a", false), f.lit("b", true)].into_iter().collect();
        let backward: Clause = [f.lit("a", true), f.lit("b", false)].into_iter().collect();
        assert_eq!(clauses, [forward, backward].into_iter().collect());
    }

    #[test]
    fn test_duplicate_sentences_collapse() {
        let F = F::new();
        let f = &F.f;
        let clauses = clausify(&["a | b".to_formula(f), "b | a".to_formula(f), F.A.clone()], f).unwrap();
        assert_eq!(clauses.len(), 2);
    }

    #[test]
    fn test_conjunct_outside_fragment_is_rejected() {
        let F = F::new();
        let f = &F.f;
        // NNF of the sentence is a conjunction whose first conjunct is a
        // disjunction of conjunctions; no CNF distribution is attempted.
        let sentence = f.and(&[F.OR3.clone(), F.A.clone()]);
        assert!(matches!(clausify(&[sentence], f), Err(EntailmentError::UnexpectedFormula(_))));
    }

    #[test]
    fn test_propagates_unsupported_negation() {
        let F = F::new();
        let f = &F.f;
        let sentence = f.not(F.IMP1.clone());
        assert_eq!(clausify(&[sentence], f), Err(EntailmentError::UnsupportedFormula("a => b".to_string())));
    }
}
