//! Pharmacy billing example: invoice assembly, totals, and lifecycle

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use ledger_core::utils::{format_currency, MemoryStore};
use ledger_core::{InvoiceBuilder, InvoiceStatus, Ledger};
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).expect("valid decimal literal")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("💊 Ledger Core - Pharmacy Billing Example\n");

    let mut ledger = Ledger::new(MemoryStore::new());
    let due = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    // 1. Assemble a dispense invoice
    println!("🧾 Building invoice...");
    let invoice = InvoiceBuilder::new("inv-2024-001".to_string(), due)
        .line_item("Amoxicillin 500mg x30".to_string(), dec("30"), dec("2.50"))
        .line_item("Paracetamol 500mg x60".to_string(), dec("60"), dec("1.25"))
        .discount(dec("5.00"))
        .metadata("patient".to_string(), "p-042".to_string())
        .build()?;

    let invoice = ledger.create_invoice(invoice).await?;
    println!("  ✓ Created {} ({} lines)", invoice.id, invoice.line_items.len());

    for item in &invoice.line_items {
        println!(
            "    {} = {}",
            item.description,
            format_currency(&item.line_total())
        );
    }

    // 2. Totals under the fixed 8% tax rate
    let totals = ledger.invoice_totals("inv-2024-001").await?;
    println!("\n💰 Totals:");
    println!("  Subtotal: {}", format_currency(&totals.subtotal));
    println!("  Tax:      {}", format_currency(&totals.tax));
    println!("  Discount: {}", format_currency(&totals.discount));
    println!("  Total:    {}", format_currency(&totals.total));

    // 3. Lifecycle: approve, let it lapse, then collect
    println!("\n📨 Lifecycle:");
    let sent = ledger.approve_invoice("inv-2024-001").await?;
    println!("  Approved -> {}", sent.status);

    let lapsed = ledger
        .sweep_overdue(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
        .await?;
    println!("  Overdue sweep flipped {} invoice(s)", lapsed.len());

    let paid = ledger
        .mark_invoice_paid(
            "inv-2024-001",
            "card".to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
        )
        .await?;
    println!(
        "  Paid via {} on {}",
        paid.payment_method.as_deref().unwrap_or("-"),
        paid.paid_date.map(|d| d.to_string()).unwrap_or_default()
    );

    // 4. A draft the admin rejects
    let duplicate = InvoiceBuilder::new("inv-2024-002".to_string(), due)
        .line_item("Consultation".to_string(), dec("1"), dec("150.00"))
        .build()?;
    ledger.create_invoice(duplicate).await?;

    let cancelled = ledger
        .reject_invoice("inv-2024-002", "duplicate of inv-2024-001".to_string())
        .await?;
    println!(
        "  Rejected {}: {}",
        cancelled.id,
        cancelled.rejection_reason.as_deref().unwrap_or("-")
    );

    // 5. Billing summary
    let summary = ledger.billing_summary().await?;
    println!("\n📊 Billing summary ({} invoices):", summary.total_invoices);
    println!(
        "  Collected:   {}",
        format_currency(&summary.collected_total)
    );
    println!(
        "  Outstanding: {}",
        format_currency(&summary.outstanding_total)
    );
    println!(
        "  Cancelled:   {}",
        summary
            .status_counts
            .get(&InvoiceStatus::Cancelled)
            .copied()
            .unwrap_or(0)
    );

    Ok(())
}
