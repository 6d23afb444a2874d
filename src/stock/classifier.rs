//! Derives the availability status of an inventory record
//!
//! Classification is a pure function of the record and an injected `as_of`
//! date. The rules apply in strict precedence order because an item can be
//! both expired and below its minimum stock level at the same time: expiry
//! always wins, then depletion, then the operator-set operational state.

use chrono::NaiveDate;

use crate::types::{InventoryRecord, OperationalState, StockStatus};

/// Classify an inventory record as of a given date
///
/// Precedence, first match wins:
/// 1. expiry date in the past -> `Expired`
/// 2. zero quantity -> `OutOfStock`
/// 3. quantity at or below the minimum stock level -> `LowStock`
/// 4. operator-set operational state, `Available` otherwise
///
/// Never fails: a malformed record with a negative quantity is clamped to 0
/// before evaluation. Rejecting malformed input outright is the job of the
/// validators upstream.
pub fn classify(record: &InventoryRecord, as_of: NaiveDate) -> StockStatus {
    let quantity = record.quantity.max(0);
    let min_stock = record.min_stock_level.max(0);

    if let Some(expiry) = record.expiry_date {
        if expiry < as_of {
            return StockStatus::Expired;
        }
    }

    if quantity == 0 {
        return StockStatus::OutOfStock;
    }

    if quantity <= min_stock {
        return StockStatus::LowStock;
    }

    match record.operational {
        OperationalState::InUse => StockStatus::InUse,
        OperationalState::Maintenance => StockStatus::Maintenance,
        OperationalState::OutOfOrder => StockStatus::OutOfOrder,
        OperationalState::Available => StockStatus::Available,
    }
}

/// Stock-level display ratio for progress-bar style UIs
///
/// `min(quantity / (min_stock_level * 2), 1.0)`; a record with no threshold
/// is fully stocked as long as anything is on hand. Presentation-only and
/// must never feed back into [`classify`].
pub fn compute_stock_ratio(record: &InventoryRecord) -> f64 {
    let quantity = record.quantity.max(0);
    let min_stock = record.min_stock_level.max(0);

    if min_stock > 0 {
        (quantity as f64 / (min_stock as f64 * 2.0)).min(1.0)
    } else if quantity > 0 {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemCategory;

    fn medicine(quantity: i32, min_stock: i32, expiry: Option<NaiveDate>) -> InventoryRecord {
        InventoryRecord::consumable(
            "med1".to_string(),
            "Amoxicillin 500mg".to_string(),
            ItemCategory::Medicines,
            quantity,
            min_stock,
            expiry,
        )
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn test_expired_wins_over_healthy_quantity() {
        let record = medicine(80, 25, NaiveDate::from_ymd_opt(2024, 1, 30));
        assert_eq!(classify(&record, as_of()), StockStatus::Expired);
    }

    #[test]
    fn test_expired_wins_over_out_of_stock() {
        let record = medicine(0, 25, NaiveDate::from_ymd_opt(2024, 1, 30));
        assert_eq!(classify(&record, as_of()), StockStatus::Expired);
    }

    #[test]
    fn test_expiry_on_as_of_date_is_not_expired() {
        let record = medicine(80, 25, Some(as_of()));
        assert_eq!(classify(&record, as_of()), StockStatus::Available);
    }

    #[test]
    fn test_zero_quantity_is_out_of_stock() {
        let record = medicine(0, 25, None);
        assert_eq!(classify(&record, as_of()), StockStatus::OutOfStock);
    }

    #[test]
    fn test_quantity_at_or_below_threshold_is_low_stock() {
        assert_eq!(classify(&medicine(25, 30, None), as_of()), StockStatus::LowStock);
        assert_eq!(classify(&medicine(30, 30, None), as_of()), StockStatus::LowStock);
        assert_eq!(classify(&medicine(1, 30, None), as_of()), StockStatus::LowStock);
    }

    #[test]
    fn test_quantity_above_threshold_is_available() {
        let record = medicine(31, 30, None);
        let status = classify(&record, as_of());
        assert_eq!(status, StockStatus::Available);
        assert!(status.is_available());
        assert!(StockStatus::LowStock.is_available());
        assert!(!StockStatus::Expired.is_available());
    }

    #[test]
    fn test_negative_quantity_clamps_to_out_of_stock() {
        let record = medicine(-5, 30, None);
        assert_eq!(classify(&record, as_of()), StockStatus::OutOfStock);
    }

    #[test]
    fn test_operational_state_surfaces_when_stocked() {
        let mut record = InventoryRecord::equipment(
            "eq1".to_string(),
            "Ventilator".to_string(),
            ItemCategory::MedicalEquipment,
            3,
        );
        record.operational = OperationalState::Maintenance;
        assert_eq!(classify(&record, as_of()), StockStatus::Maintenance);
    }

    #[test]
    fn test_depletion_wins_over_operational_state() {
        let mut record = InventoryRecord::equipment(
            "eq1".to_string(),
            "Ventilator".to_string(),
            ItemCategory::MedicalEquipment,
            0,
        );
        record.operational = OperationalState::InUse;
        assert_eq!(classify(&record, as_of()), StockStatus::OutOfStock);
    }

    #[test]
    fn test_stock_ratio_scales_against_double_threshold() {
        assert_eq!(compute_stock_ratio(&medicine(30, 30, None)), 0.5);
        assert_eq!(compute_stock_ratio(&medicine(15, 30, None)), 0.25);
        assert_eq!(compute_stock_ratio(&medicine(90, 30, None)), 1.0);
    }

    #[test]
    fn test_stock_ratio_without_threshold() {
        assert_eq!(compute_stock_ratio(&medicine(5, 0, None)), 1.0);
        assert_eq!(compute_stock_ratio(&medicine(0, 0, None)), 0.0);
        assert_eq!(compute_stock_ratio(&medicine(-2, 0, None)), 0.0);
    }
}
