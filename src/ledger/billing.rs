//! Billing management over a storage backend

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::billing::{InvoiceCalculator, InvoiceTotals};
use crate::traits::*;
use crate::types::*;

/// Billing manager for invoice storage, totals, and lifecycle operations
pub struct BillingManager<S: LedgerStore> {
    pub(crate) store: S,
    validator: Box<dyn InvoiceValidator>,
    calculator: InvoiceCalculator,
}

impl<S: LedgerStore> BillingManager<S> {
    /// Create a new billing manager with the standard 8% tax rate
    pub fn new(store: S) -> Self {
        Self {
            store,
            validator: Box::new(DefaultInvoiceValidator),
            calculator: InvoiceCalculator::with_default_rate(),
        }
    }

    /// Create a new billing manager with a custom validator
    pub fn with_validator(store: S, validator: Box<dyn InvoiceValidator>) -> Self {
        Self {
            store,
            validator,
            calculator: InvoiceCalculator::with_default_rate(),
        }
    }

    /// Override the tax rate used for totals
    pub fn with_tax_rate(mut self, tax_rate: BigDecimal) -> Self {
        self.calculator = InvoiceCalculator::new(tax_rate);
        self
    }

    /// The calculator used for totals
    pub fn calculator(&self) -> &InvoiceCalculator {
        &self.calculator
    }

    /// Register a new invoice
    pub async fn create_invoice(&mut self, invoice: Invoice) -> LedgerResult<Invoice> {
        self.validator.validate_invoice(&invoice)?;

        if self.store.get_invoice(&invoice.id).await?.is_some() {
            return Err(LedgerError::Validation(format!(
                "Invoice with ID '{}' already exists",
                invoice.id
            )));
        }

        self.store.save_invoice(&invoice).await?;
        Ok(invoice)
    }

    /// Get an invoice by ID
    pub async fn get_invoice(&self, invoice_id: &str) -> LedgerResult<Option<Invoice>> {
        self.store.get_invoice(invoice_id).await
    }

    /// Get an invoice by ID, returning an error if not found
    pub async fn get_invoice_required(&self, invoice_id: &str) -> LedgerResult<Invoice> {
        self.store
            .get_invoice(invoice_id)
            .await?
            .ok_or_else(|| LedgerError::InvoiceNotFound(invoice_id.to_string()))
    }

    /// List invoices, optionally filtered by status
    pub async fn list_invoices(
        &self,
        status: Option<InvoiceStatus>,
    ) -> LedgerResult<Vec<Invoice>> {
        self.store.list_invoices(status).await
    }

    /// Compute the financial totals of a stored invoice
    pub async fn invoice_totals(&self, invoice_id: &str) -> LedgerResult<InvoiceTotals> {
        let invoice = self.get_invoice_required(invoice_id).await?;
        self.calculator.invoice_totals(&invoice)
    }

    /// Approve a draft invoice
    pub async fn approve_invoice(&mut self, invoice_id: &str) -> LedgerResult<Invoice> {
        let invoice = self.get_invoice_required(invoice_id).await?.approve()?;
        self.store.update_invoice(&invoice).await?;
        Ok(invoice)
    }

    /// Reject an invoice with a reason (stored verbatim, may be empty)
    pub async fn reject_invoice(
        &mut self,
        invoice_id: &str,
        reason: String,
    ) -> LedgerResult<Invoice> {
        let invoice = self.get_invoice_required(invoice_id).await?.reject(reason)?;
        self.store.update_invoice(&invoice).await?;
        Ok(invoice)
    }

    /// Record payment of an invoice
    pub async fn mark_invoice_paid(
        &mut self,
        invoice_id: &str,
        method: String,
        paid_date: NaiveDate,
    ) -> LedgerResult<Invoice> {
        let invoice = self
            .get_invoice_required(invoice_id)
            .await?
            .mark_paid(method, paid_date)?;
        self.store.update_invoice(&invoice).await?;
        Ok(invoice)
    }

    /// Flip every sent invoice past its due date to overdue
    ///
    /// Returns the invoices that actually transitioned. Meant to run
    /// periodically from the caller (a dashboard refresh, a scheduler).
    pub async fn sweep_overdue(&mut self, as_of: NaiveDate) -> LedgerResult<Vec<Invoice>> {
        let sent = self.store.list_invoices(Some(InvoiceStatus::Sent)).await?;
        let mut flipped = Vec::new();

        for invoice in sent {
            let swept = invoice.detect_overdue(as_of);
            if swept.status == InvoiceStatus::Overdue {
                self.store.update_invoice(&swept).await?;
                flipped.push(swept);
            }
        }

        Ok(flipped)
    }

    /// Snapshot of invoice counts and amounts by lifecycle state
    pub async fn billing_summary(&self) -> LedgerResult<BillingSummary> {
        let invoices = self.store.list_invoices(None).await?;

        let mut status_counts: HashMap<InvoiceStatus, usize> = HashMap::new();
        let mut outstanding_total = BigDecimal::from(0);
        let mut collected_total = BigDecimal::from(0);

        for invoice in &invoices {
            *status_counts.entry(invoice.status).or_default() += 1;

            let totals = self.calculator.invoice_totals(invoice)?;
            match invoice.status {
                InvoiceStatus::Sent | InvoiceStatus::Overdue => {
                    outstanding_total += totals.total;
                }
                InvoiceStatus::Paid => {
                    collected_total += totals.total;
                }
                InvoiceStatus::Draft | InvoiceStatus::Cancelled => {}
            }
        }

        Ok(BillingSummary {
            total_invoices: invoices.len(),
            status_counts,
            outstanding_total,
            collected_total,
        })
    }
}

/// Billing snapshot across all invoices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingSummary {
    /// Number of invoices on record
    pub total_invoices: usize,
    /// Invoice counts per lifecycle state
    pub status_counts: HashMap<InvoiceStatus, usize>,
    /// Sum of totals still awaiting payment (sent + overdue)
    pub outstanding_total: BigDecimal,
    /// Sum of totals already collected (paid)
    pub collected_total: BigDecimal,
}
