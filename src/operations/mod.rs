/// A transformation takes a formula as input and returns another formula or a
/// derived structure, e.g. the NNF rewrite or the extraction of clauses.
pub mod transformations;

/// A predicate takes a formula as input and computes a truth value on that
/// formula, e.g. whether a formula is in NNF.
pub mod predicates;
