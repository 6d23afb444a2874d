//! Operational state transitions for equipment records
//!
//! State machine over [`OperationalState`]: `available <-> in-use`, either
//! of those into `maintenance` and back to `available`, any state into
//! `out-of-order`, and `out-of-order -> available` via repair. These states
//! are operator-set only and coexist with the quantity/expiry-derived
//! classification, which takes precedence when the item is depleted or
//! expired.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::stock::classify;
use crate::types::{InventoryRecord, LedgerError, LedgerResult, OperationalState, StockStatus};

/// Result of a successful equipment transition: the updated record together
/// with its freshly re-derived stock status as of the transition date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockTransition {
    pub record: InventoryRecord,
    pub status: StockStatus,
}

fn check_equipment(record: &InventoryRecord) -> LedgerResult<()> {
    if !record.category.is_equipment() {
        return Err(LedgerError::InvalidTransition(format!(
            "Record '{}' is a consumable; operational states apply to equipment only",
            record.id
        )));
    }
    Ok(())
}

fn apply(
    mut record: InventoryRecord,
    next: OperationalState,
    as_of: NaiveDate,
) -> StockTransition {
    record.operational = next;
    record.touch();
    let status = classify(&record, as_of);
    StockTransition { record, status }
}

fn invalid(record: &InventoryRecord, action: &str) -> LedgerError {
    LedgerError::InvalidTransition(format!(
        "Cannot {} record '{}' in state '{:?}'",
        action, record.id, record.operational
    ))
}

/// Check an available item out for use
pub fn mark_in_use(record: InventoryRecord, as_of: NaiveDate) -> LedgerResult<StockTransition> {
    check_equipment(&record)?;
    if record.operational != OperationalState::Available {
        return Err(invalid(&record, "mark in-use"));
    }
    Ok(apply(record, OperationalState::InUse, as_of))
}

/// Return an in-use item to availability
pub fn release(record: InventoryRecord, as_of: NaiveDate) -> LedgerResult<StockTransition> {
    check_equipment(&record)?;
    if record.operational != OperationalState::InUse {
        return Err(invalid(&record, "release"));
    }
    Ok(apply(record, OperationalState::Available, as_of))
}

/// Take an available or in-use item into maintenance
pub fn send_to_maintenance(
    record: InventoryRecord,
    as_of: NaiveDate,
) -> LedgerResult<StockTransition> {
    check_equipment(&record)?;
    if !matches!(
        record.operational,
        OperationalState::Available | OperationalState::InUse
    ) {
        return Err(invalid(&record, "send to maintenance"));
    }
    Ok(apply(record, OperationalState::Maintenance, as_of))
}

/// Return an item from maintenance to availability
pub fn complete_maintenance(
    record: InventoryRecord,
    as_of: NaiveDate,
) -> LedgerResult<StockTransition> {
    check_equipment(&record)?;
    if record.operational != OperationalState::Maintenance {
        return Err(invalid(&record, "complete maintenance"));
    }
    Ok(apply(record, OperationalState::Available, as_of))
}

/// Mark an item out of order, from any operational state
pub fn mark_out_of_order(
    record: InventoryRecord,
    as_of: NaiveDate,
) -> LedgerResult<StockTransition> {
    check_equipment(&record)?;
    Ok(apply(record, OperationalState::OutOfOrder, as_of))
}

/// Bring a repaired item back into availability
pub fn repair(record: InventoryRecord, as_of: NaiveDate) -> LedgerResult<StockTransition> {
    check_equipment(&record)?;
    if record.operational != OperationalState::OutOfOrder {
        return Err(invalid(&record, "repair"));
    }
    Ok(apply(record, OperationalState::Available, as_of))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemCategory;

    fn ventilator() -> InventoryRecord {
        InventoryRecord::equipment(
            "eq1".to_string(),
            "Ventilator".to_string(),
            ItemCategory::MedicalEquipment,
            4,
        )
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn test_in_use_round_trip() {
        let checked_out = mark_in_use(ventilator(), as_of()).unwrap();
        assert_eq!(checked_out.status, StockStatus::InUse);
        assert_eq!(checked_out.record.version, 1);

        let released = release(checked_out.record, as_of()).unwrap();
        assert_eq!(released.status, StockStatus::Available);
        assert_eq!(released.record.version, 2);
    }

    #[test]
    fn test_maintenance_from_in_use() {
        let in_use = mark_in_use(ventilator(), as_of()).unwrap();
        let maintained = send_to_maintenance(in_use.record, as_of()).unwrap();
        assert_eq!(maintained.status, StockStatus::Maintenance);

        let done = complete_maintenance(maintained.record, as_of()).unwrap();
        assert_eq!(done.status, StockStatus::Available);
    }

    #[test]
    fn test_out_of_order_from_any_state_and_repair() {
        let maintained = send_to_maintenance(ventilator(), as_of()).unwrap();
        let broken = mark_out_of_order(maintained.record, as_of()).unwrap();
        assert_eq!(broken.status, StockStatus::OutOfOrder);

        let repaired = repair(broken.record, as_of()).unwrap();
        assert_eq!(repaired.status, StockStatus::Available);
    }

    #[test]
    fn test_incompatible_transitions_fail() {
        assert!(matches!(
            release(ventilator(), as_of()),
            Err(LedgerError::InvalidTransition(_))
        ));
        assert!(matches!(
            complete_maintenance(ventilator(), as_of()),
            Err(LedgerError::InvalidTransition(_))
        ));
        assert!(matches!(
            repair(ventilator(), as_of()),
            Err(LedgerError::InvalidTransition(_))
        ));
    }

    #[test]
    fn test_consumables_have_no_operational_transitions() {
        let gauze = InventoryRecord::consumable(
            "sup1".to_string(),
            "Gauze".to_string(),
            ItemCategory::Supplies,
            100,
            20,
            None,
        );
        assert!(matches!(
            mark_in_use(gauze, as_of()),
            Err(LedgerError::InvalidTransition(_))
        ));
    }

    #[test]
    fn test_transition_rederives_depletion_status() {
        // A depleted record stays out-of-stock in the derived badge even
        // after an operational transition succeeds.
        let mut record = ventilator();
        record.quantity = 0;
        let broken = mark_out_of_order(record, as_of()).unwrap();
        assert_eq!(broken.record.operational, OperationalState::OutOfOrder);
        assert_eq!(broken.status, StockStatus::OutOfStock);
    }
}
