mod formula;
mod formula_factory;
mod literal;
mod variable;

pub use formula::*;
pub use formula_factory::*;
pub use literal::*;
pub use variable::*;
