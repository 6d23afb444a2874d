//! Lifecycle state machines for invoices and equipment records
//!
//! Transitions consume the old value and return a fresh one; nothing is
//! mutated behind the caller's back, so immutable-state UIs can simply
//! replace their copy with the returned value.

pub mod equipment;
pub mod invoice;

pub use equipment::*;
pub use invoice::*;
