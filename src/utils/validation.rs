//! Validation utilities

use crate::traits::*;
use crate::types::*;

/// Validate that a record or invoice ID is well formed
pub fn validate_id(id: &str) -> LedgerResult<()> {
    if id.trim().is_empty() {
        return Err(LedgerError::Validation("ID cannot be empty".to_string()));
    }

    if id.len() > 50 {
        return Err(LedgerError::Validation(
            "ID cannot exceed 50 characters".to_string(),
        ));
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(LedgerError::Validation(
            "ID can only contain alphanumeric characters, dashes, and underscores".to_string(),
        ));
    }

    Ok(())
}

/// Validate that an item name is well formed
pub fn validate_item_name(name: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Item name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(LedgerError::Validation(
            "Item name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate an inventory record strictly, rejecting what the classifier
/// would otherwise clamp
pub fn validate_inventory_record(record: &InventoryRecord) -> LedgerResult<()> {
    validate_id(&record.id)?;
    validate_item_name(&record.name)?;

    if record.quantity < 0 {
        return Err(LedgerError::MalformedRecord(format!(
            "Record '{}' has negative quantity {}",
            record.id, record.quantity
        )));
    }

    if record.min_stock_level < 0 {
        return Err(LedgerError::MalformedRecord(format!(
            "Record '{}' has negative minimum stock level {}",
            record.id, record.min_stock_level
        )));
    }

    Ok(())
}

/// Enhanced record validator with strict checks
///
/// Unlike [`DefaultRecordValidator`], this rejects negative quantities as
/// `MalformedRecord` instead of leaving them to the classifier's clamp.
pub struct EnhancedRecordValidator;

impl RecordValidator for EnhancedRecordValidator {
    fn validate_record(&self, record: &InventoryRecord) -> LedgerResult<()> {
        validate_inventory_record(record)
    }
}

/// Enhanced invoice validator with detailed checks
pub struct EnhancedInvoiceValidator;

impl InvoiceValidator for EnhancedInvoiceValidator {
    fn validate_invoice(&self, invoice: &Invoice) -> LedgerResult<()> {
        validate_id(&invoice.id)?;
        invoice.validate()?;

        for item in &invoice.line_items {
            if item.description.trim().is_empty() {
                return Err(LedgerError::InvalidLineItem(
                    "Line item description cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
