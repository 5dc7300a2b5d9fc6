use crate::formulas::Formula;

/// NNF predicate. Indicates whether a formula is in NNF or not.
///
/// A formula is in NNF if negation occurs only on atoms. With the factory
/// collapsing negated literals, this means the formula contains no `Not`,
/// `Impl`, or `Equiv` node.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use resolvent::formulas::{FormulaFactory, ToFormula};
/// # use resolvent::operations::predicates::is_nnf;
/// # let f = FormulaFactory::new();
///
/// let formula1 = "a & ~b".to_formula(&f);
/// let formula2 = "(a & (~b | c) & ~c) | d".to_formula(&f);
/// let formula3 = "a => b".to_formula(&f);
/// let formula4 = "~(a | b)".to_formula(&f);
///
/// assert_eq!(is_nnf(&formula1), true);
/// assert_eq!(is_nnf(&formula2), true);
/// assert_eq!(is_nnf(&formula3), false);
/// assert_eq!(is_nnf(&formula4), false);
/// ```
pub fn is_nnf(formula: &Formula) -> bool {
    match formula {
        Formula::Lit(_) => true,
        Formula::Not(_) | Formula::Impl(_) | Formula::Equiv(_) => false,
        Formula::And(ops) | Formula::Or(ops) => ops.iter().all(is_nnf),
    }
}
