pub mod stats;
pub mod types;

pub use stats::*;
pub use types::*;
