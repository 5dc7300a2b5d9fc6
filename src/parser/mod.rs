mod propositional_parser;

pub use propositional_parser::*;
