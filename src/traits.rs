//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for the ledger core
///
/// The dashboards hold their record collections in UI state; this trait lets
/// the core work against any collection owner (in-memory store, database,
/// frontend bridge) without owning persistence itself. Deletion is
/// deliberately absent - removing a record is a collaborator-side list
/// operation, not a ledger concern.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Save an inventory record
    async fn save_record(&mut self, record: &InventoryRecord) -> LedgerResult<()>;

    /// Get an inventory record by ID
    async fn get_record(&self, record_id: &str) -> LedgerResult<Option<InventoryRecord>>;

    /// List inventory records, optionally filtered by category
    async fn list_records(
        &self,
        category: Option<ItemCategory>,
    ) -> LedgerResult<Vec<InventoryRecord>>;

    /// Update an existing inventory record
    async fn update_record(&mut self, record: &InventoryRecord) -> LedgerResult<()>;

    /// Save an invoice
    async fn save_invoice(&mut self, invoice: &Invoice) -> LedgerResult<()>;

    /// Get an invoice by ID
    async fn get_invoice(&self, invoice_id: &str) -> LedgerResult<Option<Invoice>>;

    /// List invoices, optionally filtered by status
    async fn list_invoices(&self, status: Option<InvoiceStatus>) -> LedgerResult<Vec<Invoice>>;

    /// Update an existing invoice
    async fn update_invoice(&mut self, invoice: &Invoice) -> LedgerResult<()>;
}

/// Trait for implementing custom inventory record validation rules
pub trait RecordValidator: Send + Sync {
    /// Validate a record before saving
    fn validate_record(&self, record: &InventoryRecord) -> LedgerResult<()>;
}

/// Trait for implementing custom invoice validation rules
pub trait InvoiceValidator: Send + Sync {
    /// Validate an invoice before saving
    fn validate_invoice(&self, invoice: &Invoice) -> LedgerResult<()>;
}

/// Default record validator with basic rules
///
/// Permissive about quantities: a negative quantity is left for the
/// classifier to clamp, matching the observed dashboard behavior. Use
/// [`crate::utils::EnhancedRecordValidator`] to reject it instead.
pub struct DefaultRecordValidator;

impl RecordValidator for DefaultRecordValidator {
    fn validate_record(&self, record: &InventoryRecord) -> LedgerResult<()> {
        if record.id.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Record ID cannot be empty".to_string(),
            ));
        }
        if record.name.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Record name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default invoice validator applying the structural invoice rules
pub struct DefaultInvoiceValidator;

impl InvoiceValidator for DefaultInvoiceValidator {
    fn validate_invoice(&self, invoice: &Invoice) -> LedgerResult<()> {
        if invoice.id.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Invoice ID cannot be empty".to_string(),
            ));
        }
        invoice.validate()
    }
}
