//! Inventory management over a storage backend
//!
//! The manager does the read-transition-write plumbing around the pure
//! classification and lifecycle functions: fetch the current record, apply
//! the operation, persist the returned copy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::lifecycle;
use crate::lifecycle::StockTransition;
use crate::stock::{classify, compute_stock_ratio};
use crate::traits::*;
use crate::types::*;

/// Inventory manager for stock tracking and equipment lifecycle operations
pub struct InventoryManager<S: LedgerStore> {
    pub(crate) store: S,
    validator: Box<dyn RecordValidator>,
}

impl<S: LedgerStore> InventoryManager<S> {
    /// Create a new inventory manager
    pub fn new(store: S) -> Self {
        Self {
            store,
            validator: Box::new(DefaultRecordValidator),
        }
    }

    /// Create a new inventory manager with a custom validator
    pub fn with_validator(store: S, validator: Box<dyn RecordValidator>) -> Self {
        Self { store, validator }
    }

    /// Add a new record to the inventory
    pub async fn add_record(&mut self, record: InventoryRecord) -> LedgerResult<InventoryRecord> {
        self.validator.validate_record(&record)?;

        if self.store.get_record(&record.id).await?.is_some() {
            return Err(LedgerError::Validation(format!(
                "Record with ID '{}' already exists",
                record.id
            )));
        }

        self.store.save_record(&record).await?;
        Ok(record)
    }

    /// Get a record by ID
    pub async fn get_record(&self, record_id: &str) -> LedgerResult<Option<InventoryRecord>> {
        self.store.get_record(record_id).await
    }

    /// Get a record by ID, returning an error if not found
    pub async fn get_record_required(&self, record_id: &str) -> LedgerResult<InventoryRecord> {
        self.store
            .get_record(record_id)
            .await?
            .ok_or_else(|| LedgerError::RecordNotFound(record_id.to_string()))
    }

    /// List records, optionally filtered by category
    pub async fn list_records(
        &self,
        category: Option<ItemCategory>,
    ) -> LedgerResult<Vec<InventoryRecord>> {
        self.store.list_records(category).await
    }

    /// Derive the stock status of a stored record as of a given date
    pub async fn classify_record(
        &self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockStatus> {
        let record = self.get_record_required(record_id).await?;
        Ok(classify(&record, as_of))
    }

    /// Stock-level display ratio of a stored record
    pub async fn stock_ratio(&self, record_id: &str) -> LedgerResult<f64> {
        let record = self.get_record_required(record_id).await?;
        Ok(compute_stock_ratio(&record))
    }

    /// Increase the on-hand quantity of a record
    pub async fn restock(
        &mut self,
        record_id: &str,
        quantity: i32,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        if quantity <= 0 {
            return Err(LedgerError::Validation(
                "Restock quantity must be positive".to_string(),
            ));
        }

        let mut record = self.get_record_required(record_id).await?;
        record.quantity = record.quantity.max(0) + quantity;
        record.touch();
        self.store.update_record(&record).await?;

        let status = classify(&record, as_of);
        Ok(StockTransition { record, status })
    }

    /// Remove dispensed units from a record
    pub async fn dispense(
        &mut self,
        record_id: &str,
        quantity: i32,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        if quantity <= 0 {
            return Err(LedgerError::Validation(
                "Dispense quantity must be positive".to_string(),
            ));
        }

        let mut record = self.get_record_required(record_id).await?;
        if quantity > record.quantity.max(0) {
            return Err(LedgerError::Validation(format!(
                "Cannot dispense {} units of '{}': only {} on hand",
                quantity,
                record.id,
                record.quantity.max(0)
            )));
        }

        record.quantity = record.quantity.max(0) - quantity;
        record.touch();
        self.store.update_record(&record).await?;

        let status = classify(&record, as_of);
        Ok(StockTransition { record, status })
    }

    /// Check an available equipment record out for use
    pub async fn mark_in_use(
        &mut self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        let record = self.get_record_required(record_id).await?;
        let transition = lifecycle::mark_in_use(record, as_of)?;
        self.store.update_record(&transition.record).await?;
        Ok(transition)
    }

    /// Return an in-use equipment record to availability
    pub async fn release(
        &mut self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        let record = self.get_record_required(record_id).await?;
        let transition = lifecycle::release(record, as_of)?;
        self.store.update_record(&transition.record).await?;
        Ok(transition)
    }

    /// Send an equipment record to maintenance
    pub async fn send_to_maintenance(
        &mut self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        let record = self.get_record_required(record_id).await?;
        let transition = lifecycle::send_to_maintenance(record, as_of)?;
        self.store.update_record(&transition.record).await?;
        Ok(transition)
    }

    /// Complete maintenance on an equipment record
    pub async fn complete_maintenance(
        &mut self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        let record = self.get_record_required(record_id).await?;
        let transition = lifecycle::complete_maintenance(record, as_of)?;
        self.store.update_record(&transition.record).await?;
        Ok(transition)
    }

    /// Mark an equipment record out of order
    pub async fn mark_out_of_order(
        &mut self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        let record = self.get_record_required(record_id).await?;
        let transition = lifecycle::mark_out_of_order(record, as_of)?;
        self.store.update_record(&transition.record).await?;
        Ok(transition)
    }

    /// Repair an out-of-order equipment record
    pub async fn repair(
        &mut self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        let record = self.get_record_required(record_id).await?;
        let transition = lifecycle::repair(record, as_of)?;
        self.store.update_record(&transition.record).await?;
        Ok(transition)
    }

    /// Snapshot of the inventory's derived statuses as of a given date
    pub async fn inventory_summary(&self, as_of: NaiveDate) -> LedgerResult<InventorySummary> {
        let records = self.store.list_records(None).await?;

        let mut status_counts: HashMap<StockStatus, usize> = HashMap::new();
        let mut attention_needed = Vec::new();

        for record in &records {
            let status = classify(record, as_of);
            *status_counts.entry(status).or_default() += 1;

            if matches!(
                status,
                StockStatus::LowStock | StockStatus::OutOfStock | StockStatus::Expired
            ) {
                attention_needed.push(record.id.clone());
            }
        }

        attention_needed.sort();

        Ok(InventorySummary {
            as_of,
            total_records: records.len(),
            status_counts,
            attention_needed,
        })
    }
}

/// Derived-status snapshot of the whole inventory at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    /// Date the statuses were derived against
    pub as_of: NaiveDate,
    /// Number of records in the inventory
    pub total_records: usize,
    /// Record counts per derived status
    pub status_counts: HashMap<StockStatus, usize>,
    /// Records that are low on stock, depleted, or expired
    pub attention_needed: Vec<String>,
}
