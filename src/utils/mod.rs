//! Utility modules

pub mod format;
pub mod memory_store;
pub mod validation;

pub use format::*;
pub use memory_store::*;
pub use validation::*;
