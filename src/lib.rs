#![doc = include_str!("../README.md")]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

extern crate pest;
#[macro_use]
extern crate pest_derive;

/// Truth assignments and clause datastructures.
pub mod datastructures;
/// Error types surfaced by the entailment engine.
pub mod errors;
/// Types and datastructures to represent and manage formulas.
pub mod formulas;
/// Translation of domain facts and rules into formula sentences.
pub mod knowledge;
/// Predicates and transformations for formulas.
pub mod operations;
/// Parsing of formulas from strings.
pub mod parser;
/// The resolution-based entailment solver.
pub mod solver;
/// Additional utility.
pub mod util;
