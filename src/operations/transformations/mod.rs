mod clausify;
mod nnf;

pub use clausify::*;
pub use nnf::*;
