//! Invoice lifecycle transitions
//!
//! State machine: `draft -> sent -> paid`, with `draft -> cancelled` via
//! rejection and `sent -> overdue` detected against the due date. `paid`
//! and `cancelled` are terminal. An overdue invoice can still be paid or
//! rejected, but never returns to `sent`.

use chrono::NaiveDate;

use crate::types::{Invoice, InvoiceStatus, LedgerError, LedgerResult};

impl Invoice {
    /// Approve a draft invoice, sending it to the payer
    pub fn approve(mut self) -> LedgerResult<Invoice> {
        if self.status != InvoiceStatus::Draft {
            return Err(LedgerError::InvalidTransition(format!(
                "Cannot approve invoice '{}' in state '{}'",
                self.id, self.status
            )));
        }
        self.validate()?;
        self.status = InvoiceStatus::Sent;
        self.touch();
        Ok(self)
    }

    /// Reject an invoice, cancelling it with the given reason
    ///
    /// The reason is stored verbatim and may be empty - the admin screens
    /// never enforced a non-empty reason, and the transition is recorded
    /// either way.
    pub fn reject(mut self, reason: String) -> LedgerResult<Invoice> {
        if !matches!(self.status, InvoiceStatus::Draft | InvoiceStatus::Overdue) {
            return Err(LedgerError::InvalidTransition(format!(
                "Cannot reject invoice '{}' in state '{}'",
                self.id, self.status
            )));
        }
        self.status = InvoiceStatus::Cancelled;
        self.rejection_reason = Some(reason);
        self.touch();
        Ok(self)
    }

    /// Record payment of a sent (or overdue) invoice
    pub fn mark_paid(mut self, method: String, paid_date: NaiveDate) -> LedgerResult<Invoice> {
        if !matches!(self.status, InvoiceStatus::Sent | InvoiceStatus::Overdue) {
            return Err(LedgerError::InvalidTransition(format!(
                "Cannot mark invoice '{}' paid in state '{}'",
                self.id, self.status
            )));
        }
        if method.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Payment method cannot be empty".to_string(),
            ));
        }
        self.status = InvoiceStatus::Paid;
        self.payment_method = Some(method);
        self.paid_date = Some(paid_date);
        self.touch();
        Ok(self)
    }

    /// Flip a sent invoice to overdue once its due date has passed
    ///
    /// A periodic sweep rather than an operator action: invoices in any
    /// other state, or not yet past due, pass through unchanged.
    pub fn detect_overdue(mut self, as_of: NaiveDate) -> Invoice {
        if self.status == InvoiceStatus::Sent && as_of > self.due_date {
            self.status = InvoiceStatus::Overdue;
            self.touch();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::InvoiceBuilder;
    use bigdecimal::BigDecimal;

    fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn draft_invoice() -> Invoice {
        InvoiceBuilder::new("inv1".to_string(), due_date())
            .line_item(
                "Consultation".to_string(),
                BigDecimal::from(1),
                BigDecimal::from(150),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_approve_moves_draft_to_sent() {
        let invoice = draft_invoice().approve().unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Sent);
        assert_eq!(invoice.version, 1);
    }

    #[test]
    fn test_second_approve_fails() {
        let sent = draft_invoice().approve().unwrap();
        let err = sent.approve().unwrap_err();
        assert!(matches!(err, LedgerError::InvalidTransition(_)));
    }

    #[test]
    fn test_reject_with_empty_reason_is_recorded() {
        let invoice = draft_invoice().reject(String::new()).unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Cancelled);
        assert_eq!(invoice.rejection_reason.as_deref(), Some(""));
    }

    #[test]
    fn test_reject_stores_reason_verbatim() {
        let invoice = draft_invoice()
            .reject("duplicate of inv0".to_string())
            .unwrap();
        assert_eq!(invoice.rejection_reason.as_deref(), Some("duplicate of inv0"));
    }

    #[test]
    fn test_mark_paid_requires_sent_state() {
        let err = draft_invoice()
            .mark_paid("card".to_string(), due_date())
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidTransition(_)));
    }

    #[test]
    fn test_mark_paid_requires_method() {
        let sent = draft_invoice().approve().unwrap();
        let err = sent.mark_paid("  ".to_string(), due_date()).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn test_mark_paid_records_method_and_date() {
        let paid = draft_invoice()
            .approve()
            .unwrap()
            .mark_paid("card".to_string(), due_date())
            .unwrap();
        assert_eq!(paid.status, InvoiceStatus::Paid);
        assert_eq!(paid.payment_method.as_deref(), Some("card"));
        assert_eq!(paid.paid_date, Some(due_date()));
    }

    #[test]
    fn test_detect_overdue_past_due_date() {
        let sent = draft_invoice().approve().unwrap();
        let overdue = sent.detect_overdue(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(overdue.status, InvoiceStatus::Overdue);
    }

    #[test]
    fn test_detect_overdue_on_due_date_is_still_sent() {
        let sent = draft_invoice().approve().unwrap();
        let unchanged = sent.detect_overdue(due_date());
        assert_eq!(unchanged.status, InvoiceStatus::Sent);
    }

    #[test]
    fn test_overdue_can_still_be_paid() {
        let paid = draft_invoice()
            .approve()
            .unwrap()
            .detect_overdue(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap())
            .mark_paid("cash".to_string(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
            .unwrap();
        assert_eq!(paid.status, InvoiceStatus::Paid);
    }

    #[test]
    fn test_terminal_states_accept_no_transitions() {
        let paid = draft_invoice()
            .approve()
            .unwrap()
            .mark_paid("card".to_string(), due_date())
            .unwrap();
        assert!(matches!(
            paid.clone().reject("late".to_string()),
            Err(LedgerError::InvalidTransition(_))
        ));
        assert!(matches!(
            paid.clone().mark_paid("card".to_string(), due_date()),
            Err(LedgerError::InvalidTransition(_))
        ));
        // The overdue sweep is identity on terminal states, not an error.
        let swept = paid.detect_overdue(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(swept.status, InvoiceStatus::Paid);
    }
}
