use crate::formulas::{Formula, FormulaFactory};

/// Builds a knowledge base of sentences inside the engine-supported fragment.
///
/// Facts become unit literals and rules become single disjunctive clauses
/// `~premise_1 | ... | ~premise_n | conclusion`, i.e. the clause form of
/// `premise_1 & ... & premise_n => conclusion`.
///
/// Symbol naming is the integration contract with the engine: every fact and
/// every conclusion is a distinct symbol by exact (case-sensitive) name.
/// Reusing one name for two unrelated facts silently merges them and is a
/// correctness hazard on the caller's side.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use resolvent::formulas::FormulaFactory;
/// # use resolvent::knowledge::KnowledgeBaseBuilder;
/// # use resolvent::solver::entails;
/// let f = FormulaFactory::new();
///
/// let mut kb = KnowledgeBaseBuilder::new(&f);
/// kb.fact("speed_above_60", true);
/// kb.fact("school_zone", false);
/// kb.rule(&["speed_above_60"], "SpeedingViolation");
/// kb.rule(&["school_zone", "speed_above_40"], "SchoolZoneSpeedingViolation");
///
/// let sentences = kb.build();
/// assert_eq!(entails(&sentences, &f.variable("SpeedingViolation"), &f), Ok(true));
/// assert_eq!(entails(&sentences, &f.variable("SchoolZoneSpeedingViolation"), &f), Ok(false));
/// ```
pub struct KnowledgeBaseBuilder<'a> {
    f: &'a FormulaFactory,
    sentences: Vec<Formula>,
}

impl<'a> KnowledgeBaseBuilder<'a> {
    /// Creates a builder producing sentences in the context of `f`.
    pub const fn new(f: &'a FormulaFactory) -> Self {
        Self { f, sentences: Vec::new() }
    }

    /// Records a boolean fact: a positive unit literal if `holds`, otherwise
    /// a negative one. Facts which are false must be recorded as negative
    /// literals rather than omitted, otherwise rules over them cannot be
    /// refuted.
    pub fn fact(&mut self, name: &str, holds: bool) -> &mut Self {
        self.sentences.push(self.f.literal(name, holds));
        self
    }

    /// Records a domain rule `premises => conclusion` as its clause form
    /// `~premise_1 | ... | ~premise_n | conclusion`.
    ///
    /// A rule with no premises degenerates to the unit clause of its
    /// conclusion.
    pub fn rule(&mut self, premises: &[&str], conclusion: &str) -> &mut Self {
        let mut operands: Vec<Formula> = premises.iter().map(|premise| self.f.literal(premise, false)).collect();
        operands.push(self.f.variable(conclusion));
        self.sentences.push(self.f.or(&operands));
        self
    }

    /// Records an arbitrary sentence. The sentence must stay inside the
    /// fragment the engine supports, otherwise entailment checks will fail
    /// with an error.
    pub fn sentence(&mut self, sentence: Formula) -> &mut Self {
        self.sentences.push(sentence);
        self
    }

    /// Returns the accumulated sentences.
    pub fn build(self) -> Vec<Formula> {
        self.sentences
    }
}
