mod regression;
mod reversal;

pub use regression::*;
pub use reversal::*;
