//! Stock counters and the quantity edit model.
//!
//! A product carries three counters: units physically on hand, units reserved
//! against unconfirmed orders, and units already allocated to shipments.
//! Available-for-sale is derived, never stored. Updates are submitted as one
//! atomic replacement of all three counters; the two ways of producing that
//! replacement (direct edit vs. stock receipt) are mutually exclusive and
//! modeled by [`StockEdit`].

use serde::{Deserialize, Serialize};

/// Parse a free-text quantity field.
///
/// Blank or non-numeric input coerces to `0` rather than failing; callers
/// treat a zero as "nothing entered" and suppress the action. This is the
/// single place operator-typed numbers are interpreted.
#[must_use]
pub fn parse_quantity(input: &str) -> i64 {
    input.trim().parse().unwrap_or(0)
}

/// The three stock counters of a product.
///
/// Values arrive from the system of record and are replaced wholesale on
/// save. Nothing clamps them client-side: a bad upstream write can push
/// [`available_for_sale`](Self::available_for_sale) negative, and that
/// negative value is shown to the operator as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StockCounters {
    /// Physical units on hand.
    pub actual_quantity: i64,
    /// Units held against unconfirmed or partial orders.
    pub reserved_quantity: i64,
    /// Units already allocated to orders ready to ship.
    pub quantity_for_shipping: i64,
}

impl StockCounters {
    /// Create counters from their three values.
    #[must_use]
    pub const fn new(actual: i64, reserved: i64, for_shipping: i64) -> Self {
        Self {
            actual_quantity: actual,
            reserved_quantity: reserved,
            quantity_for_shipping: for_shipping,
        }
    }

    /// Units that can still be sold: on hand minus everything committed.
    ///
    /// Negative when commitments exceed stock on hand; the business rule
    /// `reserved + for_shipping <= actual` is not enforced anywhere.
    #[must_use]
    pub const fn available_for_sale(&self) -> i64 {
        self.actual_quantity - (self.quantity_for_shipping + self.reserved_quantity)
    }
}

/// One atomic counter update, in one of the two submission modes.
///
/// The modes are selected by an explicit toggle in the quantities form and
/// never combine: a receipt leaves `reserved` and `for_shipping` untouched,
/// a replacement ignores the receipt field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockEdit {
    /// Replace all three counters with the given values.
    Replace(StockCounters),
    /// Stock receipt: add `delta` to the current on-hand count.
    Receive {
        /// Units received (negative deltas are accepted, matching a signed
        /// correction entry).
        delta: i64,
    },
}

impl StockEdit {
    /// Resolve the edit against the current counters into the full
    /// replacement payload that goes over the wire. Last write wins; the
    /// caller re-fetches after a successful submission.
    #[must_use]
    pub const fn apply(&self, current: &StockCounters) -> StockCounters {
        match *self {
            Self::Replace(counters) => counters,
            Self::Receive { delta } => StockCounters {
                actual_quantity: current.actual_quantity + delta,
                ..*current
            },
        }
    }
}

/// Typed state of the quantities form section.
///
/// All four numeric fields are free text; they resolve through
/// [`parse_quantity`], so blanks and garbage become `0` instead of errors.
/// `edit_enabled` is the toggle picking between the two [`StockEdit`] modes.
#[derive(Debug, Clone, Default)]
pub struct StockCounterForm {
    /// Whether direct editing of the three counters is enabled.
    pub edit_enabled: bool,
    /// On-hand counter field.
    pub actual_quantity: String,
    /// Reserved counter field.
    pub reserved_quantity: String,
    /// Allocated-for-shipping counter field.
    pub quantity_for_shipping: String,
    /// Receipt field ("add to stock"), active only while editing is off.
    pub receipt: String,
}

impl StockCounterForm {
    /// Pre-fill the counter fields from the product's current values, the
    /// way the form opens.
    #[must_use]
    pub fn from_counters(counters: &StockCounters) -> Self {
        Self {
            edit_enabled: false,
            actual_quantity: counters.actual_quantity.to_string(),
            reserved_quantity: counters.reserved_quantity.to_string(),
            quantity_for_shipping: counters.quantity_for_shipping.to_string(),
            receipt: String::new(),
        }
    }

    /// Resolve the form into the edit to submit.
    #[must_use]
    pub fn resolve(&self) -> StockEdit {
        if self.edit_enabled {
            StockEdit::Replace(StockCounters {
                actual_quantity: parse_quantity(&self.actual_quantity),
                reserved_quantity: parse_quantity(&self.reserved_quantity),
                quantity_for_shipping: parse_quantity(&self.quantity_for_shipping),
            })
        } else {
            StockEdit::Receive {
                delta: parse_quantity(&self.receipt),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_coerces_to_zero() {
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("   "), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("12x"), 0);
        assert_eq!(parse_quantity(" 42 "), 42);
        assert_eq!(parse_quantity("-7"), -7);
    }

    #[test]
    fn test_available_for_sale() {
        let counters = StockCounters::new(100, 20, 10);
        assert_eq!(counters.available_for_sale(), 70);
    }

    #[test]
    fn test_available_for_sale_can_go_negative() {
        let counters = StockCounters::new(5, 4, 3);
        assert_eq!(counters.available_for_sale(), -2);
    }

    #[test]
    fn test_receive_adds_to_actual_only() {
        let current = StockCounters::new(100, 20, 10);
        let updated = StockEdit::Receive { delta: 15 }.apply(&current);
        assert_eq!(updated, StockCounters::new(115, 20, 10));
        assert_eq!(updated.available_for_sale(), 85);
    }

    #[test]
    fn test_replace_ignores_current_values() {
        let current = StockCounters::new(100, 20, 10);
        let updated = StockEdit::Replace(StockCounters::new(1, 2, 3)).apply(&current);
        assert_eq!(updated, StockCounters::new(1, 2, 3));
    }

    #[test]
    fn test_form_resolves_receipt_when_editing_disabled() {
        let current = StockCounters::new(100, 20, 10);
        let mut form = StockCounterForm::from_counters(&current);
        form.receipt = "15".to_string();
        assert_eq!(form.resolve().apply(&current), StockCounters::new(115, 20, 10));
    }

    #[test]
    fn test_form_blank_receipt_submits_unchanged_counters() {
        let current = StockCounters::new(100, 20, 10);
        let form = StockCounterForm::from_counters(&current);
        assert_eq!(form.resolve().apply(&current), current);
    }

    #[test]
    fn test_form_replace_ignores_receipt_field() {
        let current = StockCounters::new(100, 20, 10);
        let mut form = StockCounterForm::from_counters(&current);
        form.edit_enabled = true;
        form.actual_quantity = "50".to_string();
        form.receipt = "999".to_string();
        assert_eq!(form.resolve().apply(&current), StockCounters::new(50, 20, 10));
    }

    #[test]
    fn test_form_blank_fields_coerce_to_zero() {
        let form = StockCounterForm {
            edit_enabled: true,
            actual_quantity: String::new(),
            reserved_quantity: "oops".to_string(),
            quantity_for_shipping: "3".to_string(),
            receipt: String::new(),
        };
        let resolved = form.resolve().apply(&StockCounters::new(9, 9, 9));
        assert_eq!(resolved, StockCounters::new(0, 0, 3));
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(StockCounters::new(1, 2, 3)).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "actualQuantity": 1,
                "reservedQuantity": 2,
                "quantityForShipping": 3,
            })
        );
    }
}
