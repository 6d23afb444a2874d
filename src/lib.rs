//! # Ledger Core
//!
//! The shared billing and inventory engine behind the hospital dashboards:
//! stock status classification, invoice totals computation, and the
//! lifecycle state machines that invoices and equipment records move
//! through.
//!
//! ## Features
//!
//! - **Stock classification**: derive available / low-stock / out-of-stock /
//!   expired badges from quantity, threshold, and expiry date
//! - **Invoice computation**: fixed-point subtotal, tax, discount, and total
//!   with line-level rounding
//! - **Lifecycle control**: draft -> sent -> paid/cancelled invoices and
//!   available/in-use/maintenance/out-of-order equipment, with terminal
//!   states enforced
//! - **Storage abstraction**: backend-agnostic design with a trait-based
//!   store and an in-memory implementation for tests and demos
//!
//! ## Quick Start
//!
//! ```rust
//! use ledger_core::{classify, InventoryRecord, ItemCategory, StockStatus};
//! use chrono::NaiveDate;
//!
//! let record = InventoryRecord::consumable(
//!     "med1".to_string(),
//!     "Amoxicillin 500mg".to_string(),
//!     ItemCategory::Medicines,
//!     25,
//!     30,
//!     None,
//! );
//!
//! let as_of = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
//! assert_eq!(classify(&record, as_of), StockStatus::LowStock);
//! ```

pub mod billing;
pub mod ledger;
pub mod lifecycle;
pub mod stock;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use billing::*;
pub use ledger::*;
pub use lifecycle::*;
pub use stock::*;
pub use traits::*;
pub use types::*;

// Re-export invoice patterns for convenience
pub use billing::invoice::patterns;
