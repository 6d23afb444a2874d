//! In-memory store implementation for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory store backed by shared hash maps
#[derive(Debug, Clone)]
pub struct MemoryStore {
    records: Arc<RwLock<HashMap<String, InventoryRecord>>>,
    invoices: Arc<RwLock<HashMap<String, Invoice>>>,
}

impl MemoryStore {
    /// Create a new memory store instance
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            invoices: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.records.write().unwrap().clear();
        self.invoices.write().unwrap().clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn save_record(&mut self, record: &InventoryRecord) -> LedgerResult<()> {
        self.records
            .write()
            .unwrap()
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn get_record(&self, record_id: &str) -> LedgerResult<Option<InventoryRecord>> {
        Ok(self.records.read().unwrap().get(record_id).cloned())
    }

    async fn list_records(
        &self,
        category: Option<ItemCategory>,
    ) -> LedgerResult<Vec<InventoryRecord>> {
        let records = self.records.read().unwrap();
        let mut filtered: Vec<InventoryRecord> = records
            .values()
            .filter(|record| category.is_none_or(|c| record.category == c))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(filtered)
    }

    async fn update_record(&mut self, record: &InventoryRecord) -> LedgerResult<()> {
        if self.records.read().unwrap().contains_key(&record.id) {
            self.records
                .write()
                .unwrap()
                .insert(record.id.clone(), record.clone());
            Ok(())
        } else {
            Err(LedgerError::RecordNotFound(record.id.clone()))
        }
    }

    async fn save_invoice(&mut self, invoice: &Invoice) -> LedgerResult<()> {
        self.invoices
            .write()
            .unwrap()
            .insert(invoice.id.clone(), invoice.clone());
        Ok(())
    }

    async fn get_invoice(&self, invoice_id: &str) -> LedgerResult<Option<Invoice>> {
        Ok(self.invoices.read().unwrap().get(invoice_id).cloned())
    }

    async fn list_invoices(&self, status: Option<InvoiceStatus>) -> LedgerResult<Vec<Invoice>> {
        let invoices = self.invoices.read().unwrap();
        let mut filtered: Vec<Invoice> = invoices
            .values()
            .filter(|invoice| status.is_none_or(|s| invoice.status == s))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(filtered)
    }

    async fn update_invoice(&mut self, invoice: &Invoice) -> LedgerResult<()> {
        if self.invoices.read().unwrap().contains_key(&invoice.id) {
            self.invoices
                .write()
                .unwrap()
                .insert(invoice.id.clone(), invoice.clone());
            Ok(())
        } else {
            Err(LedgerError::InvoiceNotFound(invoice.id.clone()))
        }
    }
}
