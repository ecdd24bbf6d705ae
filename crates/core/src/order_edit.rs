//! Staged edits to an order's cart.
//!
//! An edit session accumulates two delta sets against the order's
//! server-confirmed cart: lines to add and lines to remove. The two sets are
//! deliberately NOT netted against each other - staging an add of 2 and a
//! removal of 1 for the same product submits both deltas and lets the system
//! of record resolve them. The confirmed cart itself is never touched
//! locally; after a successful submission the session is thrown away and the
//! order re-fetched.

use serde::{Deserialize, Serialize};

use crate::cart::{CartLine, CartLineSet};
use crate::types::ProductId;

/// The cart-line delta payload submitted to the system of record.
///
/// Each side is `None` - serialized as JSON `null`, never omitted - when
/// nothing was staged for it, so the server can tell "no change" apart from
/// an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDeltas {
    pub cart_lines_dto_for_add: Option<Vec<CartLine>>,
    pub cart_lines_dto_for_remove: Option<Vec<CartLine>>,
}

impl CartLineDeltas {
    /// Whether the payload would change anything server-side.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.cart_lines_dto_for_add.is_some() || self.cart_lines_dto_for_remove.is_some()
    }
}

/// One order edit session.
///
/// Holds a snapshot of the confirmed cart (for `remove all` lookups and for
/// display) plus the two staged delta sets.
#[derive(Debug, Clone, Default)]
pub struct OrderEditSession {
    confirmed: Vec<CartLine>,
    adds: CartLineSet,
    removes: CartLineSet,
}

impl OrderEditSession {
    /// Open a session against the order's server-confirmed cart lines.
    #[must_use]
    pub fn new(confirmed: Vec<CartLine>) -> Self {
        Self {
            confirmed,
            adds: CartLineSet::new(),
            removes: CartLineSet::new(),
        }
    }

    /// The confirmed cart the session was opened with. Displayed unmodified
    /// until a submission succeeds.
    #[must_use]
    pub fn confirmed(&self) -> &[CartLine] {
        &self.confirmed
    }

    /// Lines staged for addition.
    #[must_use]
    pub const fn adds(&self) -> &CartLineSet {
        &self.adds
    }

    /// Lines staged for removal.
    #[must_use]
    pub const fn removes(&self) -> &CartLineSet {
        &self.removes
    }

    /// Stage `quantity` more units of a product for addition.
    ///
    /// Parsed free-text input arrives here, so `quantity <= 0` means
    /// "nothing entered" and is suppressed. Returns whether anything was
    /// staged.
    pub fn stage_add(&mut self, product_id: ProductId, quantity: i64) -> bool {
        self.adds.add_or_merge(product_id, quantity)
    }

    /// Stage `quantity` units of a product for removal.
    ///
    /// Independent of any staged addition for the same product; the two
    /// sides are never netted.
    pub fn stage_remove(&mut self, product_id: ProductId, quantity: i64) -> bool {
        self.removes.add_or_merge(product_id, quantity)
    }

    /// Stage removal of the product's FULL confirmed quantity.
    ///
    /// Replaces whatever was already staged for removal on that product and
    /// moves its line to the end of the remove list. A product absent from
    /// the confirmed cart is a no-op.
    pub fn stage_remove_all(&mut self, product_id: ProductId) -> bool {
        let Some(line) = self
            .confirmed
            .iter()
            .find(|line| line.product_id == product_id)
        else {
            return false;
        };
        let quantity = i64::from(line.quantity);
        self.removes.remove(product_id);
        self.removes.add_or_merge(product_id, quantity)
    }

    /// Drop a product from the staged additions.
    pub fn unstage_add(&mut self, product_id: ProductId) -> bool {
        self.adds.remove(product_id)
    }

    /// Drop a product from the staged removals.
    pub fn unstage_remove(&mut self, product_id: ProductId) -> bool {
        self.removes.remove(product_id)
    }

    /// Whether anything is staged on either side.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.adds.is_empty() || !self.removes.is_empty()
    }

    /// Build the submission payload.
    ///
    /// Each side is `Some` with the staged lines in staging order, or `None`
    /// when that side is empty. The session stays usable afterwards; callers
    /// drop it once the gateway accepts the payload.
    #[must_use]
    pub fn deltas(&self) -> CartLineDeltas {
        let side = |set: &CartLineSet| {
            if set.is_empty() {
                None
            } else {
                Some(set.as_slice().to_vec())
            }
        };
        CartLineDeltas {
            cart_lines_dto_for_add: side(&self.adds),
            cart_lines_dto_for_remove: side(&self.removes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn pid() -> ProductId {
        ProductId::new(Uuid::new_v4())
    }

    #[test]
    fn test_empty_session_produces_null_sides() {
        let session = OrderEditSession::new(vec![CartLine::new(pid(), 3)]);
        let deltas = session.deltas();
        assert_eq!(deltas.cart_lines_dto_for_add, None);
        assert_eq!(deltas.cart_lines_dto_for_remove, None);
        assert!(!deltas.has_changes());
        assert!(!session.has_changes());
    }

    #[test]
    fn test_add_and_remove_are_not_netted() {
        let p = pid();
        let mut session = OrderEditSession::new(vec![CartLine::new(p, 10)]);
        assert!(session.stage_add(p, 5));
        assert!(session.stage_remove(p, 2));
        let deltas = session.deltas();
        assert_eq!(deltas.cart_lines_dto_for_add, Some(vec![CartLine::new(p, 5)]));
        assert_eq!(
            deltas.cart_lines_dto_for_remove,
            Some(vec![CartLine::new(p, 2)])
        );
    }

    #[test]
    fn test_submission_scenario() {
        // Order with [{P1, 3}]; stage add [{P2, 2}] and remove [{P1, 1}].
        let (p1, p2) = (pid(), pid());
        let mut session = OrderEditSession::new(vec![CartLine::new(p1, 3)]);
        session.stage_add(p2, 2);
        session.stage_remove(p1, 1);
        let deltas = session.deltas();
        assert_eq!(
            deltas.cart_lines_dto_for_add,
            Some(vec![CartLine::new(p2, 2)])
        );
        assert_eq!(
            deltas.cart_lines_dto_for_remove,
            Some(vec![CartLine::new(p1, 1)])
        );
        // The confirmed cart stays untouched until re-fetch.
        assert_eq!(session.confirmed(), &[CartLine::new(p1, 3)]);
    }

    #[test]
    fn test_nonpositive_quantities_suppressed() {
        let p = pid();
        let mut session = OrderEditSession::new(vec![CartLine::new(p, 3)]);
        assert!(!session.stage_add(p, 0));
        assert!(!session.stage_remove(p, -1));
        assert!(!session.has_changes());
    }

    #[test]
    fn test_remove_all_stages_confirmed_quantity() {
        let p = pid();
        let mut session = OrderEditSession::new(vec![CartLine::new(p, 7)]);
        // Whatever was staged before is replaced, not merged.
        session.stage_remove(p, 2);
        assert!(session.stage_remove_all(p));
        assert_eq!(session.removes().get(p), Some(7));
        assert_eq!(session.removes().len(), 1);
    }

    #[test]
    fn test_remove_all_moves_line_to_end() {
        let (p1, p2) = (pid(), pid());
        let mut session =
            OrderEditSession::new(vec![CartLine::new(p1, 4), CartLine::new(p2, 6)]);
        session.stage_remove(p1, 1);
        session.stage_remove(p2, 1);
        session.stage_remove_all(p1);
        assert_eq!(
            session.removes().as_slice(),
            &[CartLine::new(p2, 1), CartLine::new(p1, 4)]
        );
    }

    #[test]
    fn test_remove_all_unknown_product_is_noop() {
        let mut session = OrderEditSession::new(vec![CartLine::new(pid(), 3)]);
        assert!(!session.stage_remove_all(pid()));
        assert!(session.removes().is_empty());
    }

    #[test]
    fn test_unstage_clears_one_side_only() {
        let p = pid();
        let mut session = OrderEditSession::new(vec![CartLine::new(p, 3)]);
        session.stage_add(p, 5);
        session.stage_remove(p, 1);
        assert!(session.unstage_add(p));
        assert_eq!(session.deltas().cart_lines_dto_for_add, None);
        assert_eq!(
            session.deltas().cart_lines_dto_for_remove,
            Some(vec![CartLine::new(p, 1)])
        );
    }

    #[test]
    fn test_payload_serializes_null_not_missing() {
        let p = pid();
        let mut session = OrderEditSession::new(Vec::new());
        session.stage_add(p, 2);
        let json = serde_json::to_value(session.deltas()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "cartLinesDtoForAdd": [{ "productId": p.as_uuid(), "quantity": 2 }],
                "cartLinesDtoForRemove": null,
            })
        );
    }
}
