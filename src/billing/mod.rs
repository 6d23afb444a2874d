//! Invoice computation and assembly

pub mod calculator;
pub mod invoice;

pub use calculator::*;
pub use invoice::*;
