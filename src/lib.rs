mod ai;
mod generic;

pub use ai::*;
pub use generic::*;
