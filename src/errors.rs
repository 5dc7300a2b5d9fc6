use std::fmt::{Display, Formatter};

/// Errors surfaced by the entailment engine.
///
/// The first two variants indicate sentences outside the supported fragment
/// (unit literals, disjunctions of literals, and conjunctions thereof). They
/// point at a bug on the side of the knowledge-base builder, not a transient
/// condition: the computation is deterministic and pure, so retrying
/// reproduces the same failure. They are surfaced instead of being silently
/// skipped, since dropping a sentence would corrupt the knowledge base.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EntailmentError {
    /// A negation was applied directly to an implication or equivalence, which
    /// the NNF rewrite does not expand. Carries the display form of the
    /// negated formula.
    UnsupportedFormula(String),
    /// Clause extraction received something other than a literal or a
    /// disjunction of literals. Carries the display form of the formula.
    UnexpectedFormula(String),
    /// Resolution did not reach a fixpoint within the configured bounds, so
    /// entailment is undecided.
    ResourceExhausted {
        /// Completed resolution rounds.
        rounds: u64,
        /// Size of the clause set when the computation was given up.
        clauses: usize,
    },
}

impl Display for EntailmentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormula(formula) => {
                write!(f, "unsupported formula in NNF rewrite: negation of {formula}")
            }
            Self::UnexpectedFormula(formula) => {
                write!(f, "unexpected formula in clause extraction: {formula}")
            }
            Self::ResourceExhausted { rounds, clauses } => {
                write!(f, "resolution gave up after {rounds} rounds with {clauses} clauses, entailment undecided")
            }
        }
    }
}

impl std::error::Error for EntailmentError {}
