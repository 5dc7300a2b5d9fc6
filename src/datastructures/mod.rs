mod assignment;
mod clause;

pub use assignment::*;
pub use clause::*;
