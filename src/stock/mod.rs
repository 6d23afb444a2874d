//! Stock classification for inventory records

pub mod classifier;

pub use classifier::*;
