use std::collections::BTreeSet;

use itertools::Itertools;

use crate::datastructures::Clause;
use crate::errors::EntailmentError;
use crate::formulas::{Formula, FormulaFactory};
use crate::operations::transformations::clausify;

/// Bounds for the resolution closure.
///
/// Worst-case clause-set growth is exponential in the number of distinct
/// literals, so the engine gives up with
/// [`EntailmentError::ResourceExhausted`] once either bound is exceeded,
/// rather than silently deciding. The defaults are far beyond anything a
/// knowledge base of unit facts and rule clauses produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolutionConfig {
    /// Maximum number of resolution rounds before giving up.
    pub max_rounds: u64,
    /// Maximum size of the accumulated clause set before giving up.
    pub max_clauses: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self { max_rounds: 1_000, max_clauses: 100_000 }
    }
}

/// Decides entailment of a query by resolution refutation.
///
/// The engine holds only its [`ResolutionConfig`]; every call to
/// [`entails`](ResolutionEngine::entails) clausifies from scratch and owns
/// its clause set exclusively, so calls are independent and the engine can be
/// reused freely.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use resolvent::formulas::{FormulaFactory, ToFormula};
/// # use resolvent::solver::ResolutionEngine;
/// let f = FormulaFactory::new();
///
/// let kb = vec![
///     "red".to_formula(&f),
///     "speed_above_5".to_formula(&f),
///     "~red | ~speed_above_5 | RedLightViolation".to_formula(&f),
/// ];
/// let query = f.variable("RedLightViolation");
///
/// let engine = ResolutionEngine::new();
/// assert_eq!(engine.entails(&kb, &query, &f), Ok(true));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ResolutionEngine {
    config: ResolutionConfig,
}

impl ResolutionEngine {
    /// Creates an engine with the default [`ResolutionConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given bounds.
    pub const fn with_config(config: ResolutionConfig) -> Self {
        Self { config }
    }

    /// Returns the bounds of this engine.
    pub const fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// Decides whether `knowledge` entails `query` by resolution refutation.
    ///
    /// The negated query is clausified into the knowledge base's clause set,
    /// then clause pairs are resolved on complementary literals round by
    /// round. Deriving the empty clause proves the contradiction, so the
    /// query is entailed; a round producing no new clause means the set
    /// reached its fixpoint without contradiction, so it is not.
    ///
    /// Each round recomputes all unordered pairs over the full accumulated
    /// clause set; all resolvents of a round are collected before the clause
    /// set is extended, so the derivation is independent of pair order.
    ///
    /// # Errors
    ///
    /// - [`EntailmentError::UnsupportedFormula`] /
    ///   [`EntailmentError::UnexpectedFormula`] if a sentence is outside the
    ///   supported fragment (see [`clausify`]).
    /// - [`EntailmentError::ResourceExhausted`] if the fixpoint is not
    ///   reached within the configured bounds.
    pub fn entails(&self, knowledge: &[Formula], query: &Formula, f: &FormulaFactory) -> Result<bool, EntailmentError> {
        let mut clauses = clausify(knowledge, f)?;
        // Refutation: assume the negation of the query. Clausification
        // handles the NNF rewrite and splits a conjunctive negation into
        // separate clauses.
        let negated_query = f.not(query.clone());
        clauses.extend(clausify(std::slice::from_ref(&negated_query), f)?);

        log::debug!("resolution start: {} clauses", clauses.len());

        for round in 1..=self.config.max_rounds {
            let mut new: BTreeSet<Clause> = BTreeSet::new();
            for (ci, cj) in clauses.iter().tuple_combinations() {
                for resolvent in ci.resolvents(cj) {
                    if resolvent.is_empty() {
                        log::debug!("empty clause derived in round {round}");
                        return Ok(true);
                    }
                    new.insert(resolvent);
                }
            }

            if new.iter().all(|clause| clauses.contains(clause)) {
                log::debug!("fixpoint after {round} rounds with {} clauses", clauses.len());
                return Ok(false);
            }

            clauses.extend(new);
            log::trace!("round {round}: {} clauses accumulated", clauses.len());
            if clauses.len() > self.config.max_clauses {
                return Err(EntailmentError::ResourceExhausted { rounds: round, clauses: clauses.len() });
            }
        }

        Err(EntailmentError::ResourceExhausted { rounds: self.config.max_rounds, clauses: clauses.len() })
    }
}

/// Decides whether `knowledge` entails `query` with the default bounds.
///
/// See [`ResolutionEngine::entails`].
pub fn entails(knowledge: &[Formula], query: &Formula, f: &FormulaFactory) -> Result<bool, EntailmentError> {
    ResolutionEngine::new().entails(knowledge, query, f)
}
