//! Invoice totals computation
//!
//! All currency arithmetic is fixed-point via `BigDecimal` with rounding to
//! two decimal places. Line totals are rounded before summation so the
//! subtotal always equals the sum of the line totals as displayed.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::{round_currency, Invoice, InvoiceLineItem, LedgerError, LedgerResult};

/// Fixed default tax rate applied across all billing screens (8%)
pub fn default_tax_rate() -> BigDecimal {
    BigDecimal::from(8) / BigDecimal::from(100)
}

/// Financial totals derived from an invoice's line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of rounded line totals
    pub subtotal: BigDecimal,
    /// Tax on the subtotal, rounded to currency precision
    pub tax: BigDecimal,
    /// Discount actually applied, after clamping to the payable amount
    pub discount: BigDecimal,
    /// `subtotal + tax - discount`, guaranteed non-negative
    pub total: BigDecimal,
}

/// Compute invoice totals from line items, a discount, and a tax rate
///
/// The discount is clamped to `[0, subtotal + tax]` - clamping an oversized
/// discount is the documented policy, rejection is reserved for negative
/// input. Fails with `InvalidLineItem` if any line has a non-positive
/// quantity or a negative unit price.
pub fn compute(
    line_items: &[InvoiceLineItem],
    discount: &BigDecimal,
    tax_rate: &BigDecimal,
) -> LedgerResult<InvoiceTotals> {
    for item in line_items {
        item.validate()?;
    }

    if *discount < BigDecimal::from(0) {
        return Err(LedgerError::InvalidDiscount(format!(
            "Discount cannot be negative: {}",
            discount
        )));
    }

    let subtotal: BigDecimal = line_items.iter().map(|item| item.line_total()).sum();
    let subtotal = round_currency(&subtotal);

    let tax = round_currency(&(&subtotal * tax_rate));

    let payable = &subtotal + &tax;
    let discount = if *discount > payable {
        payable.clone()
    } else {
        round_currency(discount)
    };

    let total = round_currency(&(payable - &discount));

    Ok(InvoiceTotals {
        subtotal,
        tax,
        discount,
        total,
    })
}

/// Invoice computation engine with a configured tax rate
#[derive(Debug, Clone)]
pub struct InvoiceCalculator {
    tax_rate: BigDecimal,
}

impl InvoiceCalculator {
    /// Create a calculator with an explicit tax rate (e.g. `0.08` for 8%)
    pub fn new(tax_rate: BigDecimal) -> Self {
        Self { tax_rate }
    }

    /// Create a calculator with the standard 8% rate
    pub fn with_default_rate() -> Self {
        Self::new(default_tax_rate())
    }

    /// The configured tax rate
    pub fn tax_rate(&self) -> &BigDecimal {
        &self.tax_rate
    }

    /// Compute totals for a set of line items and a discount
    pub fn compute(
        &self,
        line_items: &[InvoiceLineItem],
        discount: &BigDecimal,
    ) -> LedgerResult<InvoiceTotals> {
        compute(line_items, discount, &self.tax_rate)
    }

    /// Compute totals for a whole invoice
    pub fn invoice_totals(&self, invoice: &Invoice) -> LedgerResult<InvoiceTotals> {
        self.compute(&invoice.line_items, &invoice.discount)
    }
}

impl Default for InvoiceCalculator {
    fn default() -> Self {
        Self::with_default_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn item(description: &str, quantity: &str, unit_price: &str) -> InvoiceLineItem {
        InvoiceLineItem::new(description.to_string(), dec(quantity), dec(unit_price))
    }

    #[test]
    fn test_worked_example() {
        let items = vec![
            item("Amoxicillin 500mg", "30", "2.50"),
            item("Paracetamol 500mg", "60", "1.25"),
        ];

        let totals = compute(&items, &dec("5.00"), &default_tax_rate()).unwrap();

        assert_eq!(totals.subtotal, dec("150.00"));
        assert_eq!(totals.tax, dec("12.00"));
        assert_eq!(totals.discount, dec("5.00"));
        assert_eq!(totals.total, dec("157.00"));
    }

    #[test]
    fn test_subtotal_equals_sum_of_rounded_line_totals() {
        // Raw products are 1.115 and 2.665; rounding each line first gives
        // 1.12 + 2.67 = 3.79, while rounding the raw sum would give 3.78.
        let items = vec![item("a", "1", "1.115"), item("b", "1", "2.665")];

        let totals = compute(&items, &BigDecimal::from(0), &default_tax_rate()).unwrap();
        let line_sum: BigDecimal = items.iter().map(|i| i.line_total()).sum();

        assert_eq!(totals.subtotal, round_currency(&line_sum));
        assert_eq!(totals.subtotal, dec("3.79"));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let items = vec![item("a", "3", "19.99")];
        let first = compute(&items, &dec("2.00"), &default_tax_rate()).unwrap();
        let second = compute(&items, &dec("2.00"), &default_tax_rate()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_oversized_discount_is_clamped_to_payable() {
        let items = vec![item("a", "1", "10.00")];
        let totals = compute(&items, &dec("500.00"), &default_tax_rate()).unwrap();

        assert_eq!(totals.subtotal, dec("10.00"));
        assert_eq!(totals.tax, dec("0.80"));
        assert_eq!(totals.discount, dec("10.80"));
        assert_eq!(totals.total, dec("0.00"));
    }

    #[test]
    fn test_total_identity_holds_post_clamp() {
        let items = vec![item("a", "4", "12.75"), item("b", "2", "3.10")];
        let totals = compute(&items, &dec("20.00"), &default_tax_rate()).unwrap();

        assert_eq!(
            totals.total,
            round_currency(&(&totals.subtotal + &totals.tax - &totals.discount))
        );
        assert!(totals.total >= BigDecimal::from(0));
    }

    #[test]
    fn test_negative_discount_is_rejected() {
        let items = vec![item("a", "1", "10.00")];
        let err = compute(&items, &dec("-1.00"), &default_tax_rate()).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDiscount(_)));
    }

    #[test]
    fn test_non_positive_quantity_is_rejected() {
        let items = vec![item("a", "0", "10.00")];
        let err = compute(&items, &BigDecimal::from(0), &default_tax_rate()).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidLineItem(_)));
    }

    #[test]
    fn test_negative_unit_price_is_rejected() {
        let items = vec![item("a", "1", "-0.01")];
        let err = compute(&items, &BigDecimal::from(0), &default_tax_rate()).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidLineItem(_)));
    }

    #[test]
    fn test_empty_line_items_yield_zero_totals() {
        let totals = compute(&[], &BigDecimal::from(0), &default_tax_rate()).unwrap();
        assert_eq!(totals.total, dec("0.00"));
    }

    #[test]
    fn test_calculator_with_custom_rate() {
        let calculator = InvoiceCalculator::new(dec("0.10"));
        let items = vec![item("a", "2", "50.00")];

        let totals = calculator.compute(&items, &BigDecimal::from(0)).unwrap();
        assert_eq!(totals.tax, dec("10.00"));
        assert_eq!(totals.total, dec("110.00"));
    }
}
