use crate::errors::EntailmentError;
use crate::formulas::{Formula, FormulaFactory};

/// Rewrites `formula` into negation normal form.
///
/// In the result, negation occurs only on atoms: double negations are
/// eliminated, negated conjunctions and disjunctions are pushed inwards via
/// De Morgan, implications become `~a | b`, and equivalences become the
/// conjunction of both implications.
///
/// A negation applied directly to an implication or equivalence is *not*
/// expanded; it fails with [`EntailmentError::UnsupportedFormula`]. Callers
/// which need such sentences must rewrite them before handing them to the
/// engine.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use resolvent::formulas::{FormulaFactory, ToFormula};
/// # use resolvent::operations::transformations::nnf;
/// let f = FormulaFactory::new();
///
/// let formula = "a => b".to_formula(&f);
/// let nnf = nnf(&formula, &f).unwrap();
///
/// assert_eq!(nnf.to_string(&f), "~a | b");
/// ```
pub fn nnf(formula: &Formula, f: &FormulaFactory) -> Result<Formula, EntailmentError> {
    match formula {
        Formula::Lit(_) => Ok(formula.clone()),
        Formula::Not(op) => match op.as_ref() {
            Formula::Lit(lit) => Ok(Formula::Lit(lit.negate())),
            Formula::Not(inner) => nnf(inner, f),
            Formula::And(ops) => {
                let negated = ops.iter().map(|op| f.not(op.clone())).collect::<Vec<_>>();
                nnf(&f.or(&negated), f)
            }
            Formula::Or(ops) => {
                let negated = ops.iter().map(|op| f.not(op.clone())).collect::<Vec<_>>();
                nnf(&f.and(&negated), f)
            }
            Formula::Impl(_) | Formula::Equiv(_) => Err(EntailmentError::UnsupportedFormula(op.to_string(f))),
        },
        Formula::And(ops) => {
            let new_ops = ops.iter().map(|op| nnf(op, f)).collect::<Result<Vec<_>, _>>()?;
            Ok(f.and(&new_ops))
        }
        Formula::Or(ops) => {
            let new_ops = ops.iter().map(|op| nnf(op, f)).collect::<Result<Vec<_>, _>>()?;
            Ok(f.or(&new_ops))
        }
        Formula::Impl(pair) => {
            let (left, right) = pair.as_ref();
            nnf(&f.or(&[f.not(left.clone()), right.clone()]), f)
        }
        Formula::Equiv(pair) => {
            let (left, right) = pair.as_ref();
            let forward = f.implication(left.clone(), right.clone());
            let backward = f.implication(right.clone(), left.clone());
            nnf(&f.and(&[forward, backward]), f)
        }
    }
}
