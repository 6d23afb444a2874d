//! Inventory dashboard example: classification, lifecycle, and summary

use chrono::NaiveDate;
use ledger_core::utils::{format_stock_percent, MemoryStore};
use ledger_core::{compute_stock_ratio, InventoryRecord, ItemCategory, ItemCondition, Ledger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏥 Ledger Core - Inventory Dashboard Example\n");

    let mut ledger = Ledger::new(MemoryStore::new());
    let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

    // 1. Stock the inventory
    println!("📦 Stocking inventory...");
    let catalog = vec![
        InventoryRecord::equipment(
            "eq-vent-01".to_string(),
            "Ventilator".to_string(),
            ItemCategory::MedicalEquipment,
            4,
        )
        .with_condition(ItemCondition::Excellent),
        InventoryRecord::equipment(
            "fur-bed-12".to_string(),
            "Hospital Bed".to_string(),
            ItemCategory::Furniture,
            12,
        ),
        InventoryRecord::consumable(
            "med-amox".to_string(),
            "Amoxicillin 500mg".to_string(),
            ItemCategory::Medicines,
            25,
            30,
            NaiveDate::from_ymd_opt(2025, 6, 1),
        ),
        InventoryRecord::consumable(
            "med-syrup".to_string(),
            "Cough Syrup".to_string(),
            ItemCategory::Medicines,
            80,
            25,
            NaiveDate::from_ymd_opt(2024, 1, 30),
        ),
        InventoryRecord::consumable(
            "sup-gloves".to_string(),
            "Nitrile Gloves".to_string(),
            ItemCategory::Supplies,
            0,
            100,
            None,
        ),
    ];

    for record in catalog {
        let record = ledger.add_record(record).await?;
        println!("  ✓ Added: {} - {}", record.id, record.name);
    }
    println!();

    // 2. Derived status badges
    println!("🏷️  Status badges as of {}...", today);
    for record in ledger.list_records(None).await? {
        let status = ledger.classify_record(&record.id, today).await?;
        let ratio = compute_stock_ratio(&record);
        println!(
            "  {} [{}] stock level {}",
            record.name,
            status.label(),
            format_stock_percent(ratio)
        );
    }
    println!();

    // 3. Equipment lifecycle
    println!("🔧 Equipment lifecycle...");
    let in_use = ledger.mark_in_use("eq-vent-01", today).await?;
    println!("  Ventilator checked out -> [{}]", in_use.status);

    let maintained = ledger.send_to_maintenance("eq-vent-01", today).await?;
    println!("  Ventilator to maintenance -> [{}]", maintained.status);

    let back = ledger.complete_maintenance("eq-vent-01", today).await?;
    println!("  Maintenance done -> [{}]", back.status);
    println!();

    // 4. Restock the depleted supplies
    println!("🚚 Restocking gloves...");
    let restocked = ledger.restock("sup-gloves", 250, today).await?;
    println!(
        "  Gloves now {} units -> [{}]",
        restocked.record.quantity, restocked.status
    );
    println!();

    // 5. Summary
    let summary = ledger.inventory_summary(today).await?;
    println!("📊 Inventory summary ({} records):", summary.total_records);
    for (status, count) in &summary.status_counts {
        println!("  {:>12}: {}", status.label(), count);
    }
    println!("  Needs attention: {:?}", summary.attention_needed);

    Ok(())
}
