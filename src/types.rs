//! Core types and data structures for the hospital ledger

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inventory categories tracked by the hospital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemCategory {
    /// Medical equipment (monitors, ventilators, wheelchairs, etc.)
    MedicalEquipment,
    /// Furniture (beds, cabinets, chairs, etc.)
    Furniture,
    /// Medicines - perishable, tracked with expiry dates
    Medicines,
    /// General supplies (gloves, syringes, gauze, etc.)
    Supplies,
}

impl ItemCategory {
    /// Whether records of this category carry operator-set operational states
    /// (in-use / maintenance / out-of-order) in addition to stock levels
    pub fn is_equipment(&self) -> bool {
        matches!(self, ItemCategory::MedicalEquipment | ItemCategory::Furniture)
    }
}

/// Physical condition of an item, descriptive only - never an input to
/// stock classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemCondition {
    Excellent,
    Good,
    Fair,
    NeedsRepair,
}

/// Operator-set operational state for equipment records
///
/// Orthogonal to the quantity/expiry-derived classification: it is only set
/// through lifecycle transitions, never inferred from stock levels, and only
/// surfaces as the derived status when no depletion/expiry rule applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationalState {
    #[default]
    Available,
    InUse,
    Maintenance,
    OutOfOrder,
}

/// Derived availability classification of an inventory record
///
/// Always recomputed from the record's current fields; never stored on the
/// record itself, so it cannot drift out of sync with quantity or expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    Available,
    InUse,
    Maintenance,
    OutOfOrder,
    LowStock,
    OutOfStock,
    Expired,
}

impl StockStatus {
    /// Badge label as displayed by the dashboards
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Available => "available",
            StockStatus::InUse => "in-use",
            StockStatus::Maintenance => "maintenance",
            StockStatus::OutOfOrder => "out-of-order",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
            StockStatus::Expired => "expired",
        }
    }

    /// Whether the item can still be handed out in this state
    pub fn is_available(&self) -> bool {
        matches!(self, StockStatus::Available | StockStatus::LowStock)
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A stocked inventory record (equipment or consumable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Unique, stable identifier
    pub id: String,
    /// Human-readable item name
    pub name: String,
    /// Inventory category
    pub category: ItemCategory,
    /// Units on hand; negative values are clamped to 0 during classification
    pub quantity: i32,
    /// Threshold at or below which the item is low on stock
    pub min_stock_level: i32,
    /// Expiry date for perishable items; absent for non-perishables
    pub expiry_date: Option<NaiveDate>,
    /// Physical condition (descriptive only)
    pub condition: ItemCondition,
    /// Operator-set operational state (meaningful for equipment)
    pub operational: OperationalState,
    /// Additional metadata (supplier, location, batch number, etc.)
    pub metadata: HashMap<String, String>,
    /// Bumped on every lifecycle transition; hook for callers that need an
    /// optimistic-concurrency check when serializing updates per record
    pub version: u64,
    /// When the record was created
    pub created_at: NaiveDateTime,
    /// When the record was last updated
    pub updated_at: NaiveDateTime,
}

impl InventoryRecord {
    /// Create a new inventory record
    pub fn new(
        id: String,
        name: String,
        category: ItemCategory,
        quantity: i32,
        min_stock_level: i32,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id,
            name,
            category,
            quantity,
            min_stock_level,
            expiry_date: None,
            condition: ItemCondition::Good,
            operational: OperationalState::Available,
            metadata: HashMap::new(),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an equipment record (no expiry tracking)
    pub fn equipment(id: String, name: String, category: ItemCategory, quantity: i32) -> Self {
        Self::new(id, name, category, quantity, 0)
    }

    /// Create a consumable record with a stock threshold and optional expiry
    pub fn consumable(
        id: String,
        name: String,
        category: ItemCategory,
        quantity: i32,
        min_stock_level: i32,
        expiry_date: Option<NaiveDate>,
    ) -> Self {
        let mut record = Self::new(id, name, category, quantity, min_stock_level);
        record.expiry_date = expiry_date;
        record
    }

    /// Set the item condition
    pub fn with_condition(mut self, condition: ItemCondition) -> Self {
        self.condition = condition;
        self
    }

    pub(crate) fn touch(&mut self) {
        self.version += 1;
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}

/// One billed medication/service row on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    /// What was billed
    pub description: String,
    /// Billed quantity (must be positive)
    pub quantity: BigDecimal,
    /// Price per unit (must be non-negative)
    pub unit_price: BigDecimal,
}

impl InvoiceLineItem {
    /// Create a new line item
    pub fn new(description: String, quantity: BigDecimal, unit_price: BigDecimal) -> Self {
        Self {
            description,
            quantity,
            unit_price,
        }
    }

    /// Line total rounded to currency precision
    ///
    /// Rounding happens here, at the line level, so that the invoice subtotal
    /// always equals the sum of the line totals as displayed. Summing raw
    /// products and rounding once at the end can disagree with the displayed
    /// lines by a cent.
    pub fn line_total(&self) -> BigDecimal {
        round_currency(&(&self.quantity * &self.unit_price))
    }

    /// Validate the line item
    pub fn validate(&self) -> LedgerResult<()> {
        if self.quantity <= BigDecimal::from(0) {
            return Err(LedgerError::InvalidLineItem(format!(
                "'{}': quantity must be positive",
                self.description
            )));
        }
        if self.unit_price < BigDecimal::from(0) {
            return Err(LedgerError::InvalidLineItem(format!(
                "'{}': unit price cannot be negative",
                self.description
            )));
        }
        Ok(())
    }
}

/// Invoice lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, InvoiceStatus::Paid | InvoiceStatus::Cancelled)
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// A patient/pharmacy bill moving through the draft -> sent -> paid lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier for the invoice
    pub id: String,
    /// Ordered billed rows; non-empty once finalized
    pub line_items: Vec<InvoiceLineItem>,
    /// Operator-supplied discount; clamped to the payable amount when totals
    /// are computed, rejected only when negative
    pub discount: BigDecimal,
    /// Payment due date, drives overdue detection
    pub due_date: NaiveDate,
    /// Current lifecycle state
    pub status: InvoiceStatus,
    /// Present only when the invoice was cancelled via rejection
    pub rejection_reason: Option<String>,
    /// Present only once paid
    pub payment_method: Option<String>,
    /// Present only once paid
    pub paid_date: Option<NaiveDate>,
    /// Additional metadata (patient id, department, etc.)
    pub metadata: HashMap<String, String>,
    /// Bumped on every lifecycle transition (see [`InventoryRecord::version`])
    pub version: u64,
    /// When the invoice was created
    pub created_at: NaiveDateTime,
    /// When the invoice was last updated
    pub updated_at: NaiveDateTime,
}

impl Invoice {
    /// Create a new draft invoice
    pub fn new(id: String, due_date: NaiveDate) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id,
            line_items: Vec::new(),
            discount: BigDecimal::from(0),
            due_date,
            status: InvoiceStatus::Draft,
            rejection_reason: None,
            payment_method: None,
            paid_date: None,
            metadata: HashMap::new(),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a line item to the invoice
    pub fn add_line_item(&mut self, item: InvoiceLineItem) {
        self.line_items.push(item);
        self.updated_at = chrono::Utc::now().naive_utc();
    }

    /// Validate the invoice structure
    pub fn validate(&self) -> LedgerResult<()> {
        if self.line_items.is_empty() {
            return Err(LedgerError::Validation(
                "Invoice must have at least one line item".to_string(),
            ));
        }
        for item in &self.line_items {
            item.validate()?;
        }
        if self.discount < BigDecimal::from(0) {
            return Err(LedgerError::InvalidDiscount(
                "Discount cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn touch(&mut self) {
        self.version += 1;
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}

/// Round an amount to currency precision (two decimal places, half-up)
pub fn round_currency(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, RoundingMode::HalfUp)
}

/// Errors that can occur in the ledger core
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid line item: {0}")]
    InvalidLineItem(String),
    #[error("Invalid discount: {0}")]
    InvalidDiscount(String),
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
    #[error("Record not found: {0}")]
    RecordNotFound(String),
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
