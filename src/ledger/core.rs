//! Main ledger facade that coordinates inventory and billing

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::billing::InvoiceTotals;
use crate::ledger::{BillingManager, BillingSummary, InventoryManager, InventorySummary};
use crate::lifecycle::StockTransition;
use crate::traits::*;
use crate::types::*;

/// Ledger system orchestrating inventory and billing over one store
pub struct Ledger<S: LedgerStore> {
    inventory: InventoryManager<S>,
    billing: BillingManager<S>,
}

impl<S: LedgerStore + Clone> Ledger<S> {
    /// Create a new ledger with the given storage backend
    pub fn new(store: S) -> Self {
        Self {
            inventory: InventoryManager::new(store.clone()),
            billing: BillingManager::new(store),
        }
    }

    /// Create a new ledger with custom validators
    pub fn with_validators(
        store: S,
        record_validator: Box<dyn RecordValidator>,
        invoice_validator: Box<dyn InvoiceValidator>,
    ) -> Self {
        Self {
            inventory: InventoryManager::with_validator(store.clone(), record_validator),
            billing: BillingManager::with_validator(store, invoice_validator),
        }
    }

    /// Override the billing tax rate
    pub fn with_tax_rate(mut self, tax_rate: BigDecimal) -> Self {
        self.billing = self.billing.with_tax_rate(tax_rate);
        self
    }

    // Inventory operations
    /// Add a new inventory record
    pub async fn add_record(&mut self, record: InventoryRecord) -> LedgerResult<InventoryRecord> {
        self.inventory.add_record(record).await
    }

    /// Get an inventory record by ID
    pub async fn get_record(&self, record_id: &str) -> LedgerResult<Option<InventoryRecord>> {
        self.inventory.get_record(record_id).await
    }

    /// List inventory records, optionally filtered by category
    pub async fn list_records(
        &self,
        category: Option<ItemCategory>,
    ) -> LedgerResult<Vec<InventoryRecord>> {
        self.inventory.list_records(category).await
    }

    /// Derive the stock status of a record as of a given date
    pub async fn classify_record(
        &self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockStatus> {
        self.inventory.classify_record(record_id, as_of).await
    }

    /// Stock-level display ratio of a record
    pub async fn stock_ratio(&self, record_id: &str) -> LedgerResult<f64> {
        self.inventory.stock_ratio(record_id).await
    }

    /// Increase the on-hand quantity of a record
    pub async fn restock(
        &mut self,
        record_id: &str,
        quantity: i32,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        self.inventory.restock(record_id, quantity, as_of).await
    }

    /// Remove dispensed units from a record
    pub async fn dispense(
        &mut self,
        record_id: &str,
        quantity: i32,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        self.inventory.dispense(record_id, quantity, as_of).await
    }

    /// Check an equipment record out for use
    pub async fn mark_in_use(
        &mut self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        self.inventory.mark_in_use(record_id, as_of).await
    }

    /// Return an in-use equipment record to availability
    pub async fn release(
        &mut self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        self.inventory.release(record_id, as_of).await
    }

    /// Send an equipment record to maintenance
    pub async fn send_to_maintenance(
        &mut self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        self.inventory.send_to_maintenance(record_id, as_of).await
    }

    /// Complete maintenance on an equipment record
    pub async fn complete_maintenance(
        &mut self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        self.inventory.complete_maintenance(record_id, as_of).await
    }

    /// Mark an equipment record out of order
    pub async fn mark_out_of_order(
        &mut self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        self.inventory.mark_out_of_order(record_id, as_of).await
    }

    /// Repair an out-of-order equipment record
    pub async fn repair(
        &mut self,
        record_id: &str,
        as_of: NaiveDate,
    ) -> LedgerResult<StockTransition> {
        self.inventory.repair(record_id, as_of).await
    }

    // Billing operations
    /// Register a new invoice
    pub async fn create_invoice(&mut self, invoice: Invoice) -> LedgerResult<Invoice> {
        self.billing.create_invoice(invoice).await
    }

    /// Get an invoice by ID
    pub async fn get_invoice(&self, invoice_id: &str) -> LedgerResult<Option<Invoice>> {
        self.billing.get_invoice(invoice_id).await
    }

    /// List invoices, optionally filtered by status
    pub async fn list_invoices(
        &self,
        status: Option<InvoiceStatus>,
    ) -> LedgerResult<Vec<Invoice>> {
        self.billing.list_invoices(status).await
    }

    /// Compute the financial totals of a stored invoice
    pub async fn invoice_totals(&self, invoice_id: &str) -> LedgerResult<InvoiceTotals> {
        self.billing.invoice_totals(invoice_id).await
    }

    /// Approve a draft invoice
    pub async fn approve_invoice(&mut self, invoice_id: &str) -> LedgerResult<Invoice> {
        self.billing.approve_invoice(invoice_id).await
    }

    /// Reject an invoice with a reason
    pub async fn reject_invoice(
        &mut self,
        invoice_id: &str,
        reason: String,
    ) -> LedgerResult<Invoice> {
        self.billing.reject_invoice(invoice_id, reason).await
    }

    /// Record payment of an invoice
    pub async fn mark_invoice_paid(
        &mut self,
        invoice_id: &str,
        method: String,
        paid_date: NaiveDate,
    ) -> LedgerResult<Invoice> {
        self.billing
            .mark_invoice_paid(invoice_id, method, paid_date)
            .await
    }

    /// Flip every sent invoice past its due date to overdue
    pub async fn sweep_overdue(&mut self, as_of: NaiveDate) -> LedgerResult<Vec<Invoice>> {
        self.billing.sweep_overdue(as_of).await
    }

    // Reporting
    /// Inventory status snapshot as of a given date
    pub async fn inventory_summary(&self, as_of: NaiveDate) -> LedgerResult<InventorySummary> {
        self.inventory.inventory_summary(as_of).await
    }

    /// Billing snapshot across all invoices
    pub async fn billing_summary(&self) -> LedgerResult<BillingSummary> {
        self.billing.billing_summary().await
    }

    /// Combined dashboard snapshot: runs the overdue sweep, then reports
    /// both sides of the ledger as of the same date
    pub async fn daily_snapshot(&mut self, as_of: NaiveDate) -> LedgerResult<LedgerSnapshot> {
        let newly_overdue = self.sweep_overdue(as_of).await?;
        let inventory = self.inventory_summary(as_of).await?;
        let billing = self.billing_summary().await?;

        Ok(LedgerSnapshot {
            as_of,
            inventory,
            billing,
            newly_overdue: newly_overdue.into_iter().map(|i| i.id).collect(),
        })
    }
}

/// Combined snapshot across inventory and billing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub as_of: NaiveDate,
    pub inventory: InventorySummary,
    pub billing: BillingSummary,
    /// Invoices flipped to overdue by this snapshot's sweep
    pub newly_overdue: Vec<String>,
}
