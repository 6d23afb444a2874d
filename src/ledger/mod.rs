//! Ledger module containing inventory and billing management

pub mod billing;
pub mod core;
pub mod inventory;

pub use billing::*;
pub use core::*;
pub use inventory::*;
