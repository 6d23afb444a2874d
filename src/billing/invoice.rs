//! Invoice assembly

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::types::{Invoice, InvoiceLineItem, LedgerResult};

/// Invoice builder for assembling draft invoices line by line
#[derive(Debug)]
pub struct InvoiceBuilder {
    invoice: Invoice,
}

impl InvoiceBuilder {
    /// Create a builder for an invoice with the given id
    pub fn new(id: String, due_date: NaiveDate) -> Self {
        Self {
            invoice: Invoice::new(id, due_date),
        }
    }

    /// Create a builder with a freshly minted UUID id
    pub fn with_generated_id(due_date: NaiveDate) -> Self {
        Self::new(Uuid::new_v4().to_string(), due_date)
    }

    /// Add a billed line
    pub fn line_item(
        mut self,
        description: String,
        quantity: BigDecimal,
        unit_price: BigDecimal,
    ) -> Self {
        self.invoice
            .add_line_item(InvoiceLineItem::new(description, quantity, unit_price));
        self
    }

    /// Add a prebuilt line item
    pub fn item(mut self, item: InvoiceLineItem) -> Self {
        self.invoice.add_line_item(item);
        self
    }

    /// Set the operator-supplied discount
    pub fn discount(mut self, discount: BigDecimal) -> Self {
        self.invoice.discount = discount;
        self
    }

    /// Add metadata to the invoice
    pub fn metadata(mut self, key: String, value: String) -> Self {
        self.invoice.metadata.insert(key, value);
        self
    }

    /// Finalize the draft invoice
    ///
    /// Validation happens here: a finalized invoice must have at least one
    /// valid line item and a non-negative discount.
    pub fn build(self) -> LedgerResult<Invoice> {
        self.invoice.validate()?;
        Ok(self.invoice)
    }
}

/// Common invoice patterns used by the billing screens
pub mod patterns {
    use super::*;

    /// Create a single-service invoice (consultation, procedure, etc.)
    pub fn create_service_invoice(
        id: String,
        due_date: NaiveDate,
        description: String,
        amount: BigDecimal,
    ) -> LedgerResult<Invoice> {
        InvoiceBuilder::new(id, due_date)
            .line_item(description, BigDecimal::from(1), amount)
            .build()
    }

    /// Create a pharmacy dispense invoice from (description, quantity,
    /// unit price) rows with an optional discount
    pub fn create_pharmacy_invoice(
        id: String,
        due_date: NaiveDate,
        rows: Vec<(String, BigDecimal, BigDecimal)>,
        discount: BigDecimal,
    ) -> LedgerResult<Invoice> {
        let mut builder = InvoiceBuilder::new(id, due_date).discount(discount);
        for (description, quantity, unit_price) in rows {
            builder = builder.line_item(description, quantity, unit_price);
        }
        builder.build()
    }
}
