//! Cart lines and the one-line-per-product set they live in.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A (product, quantity) pairing inside an order's cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    /// Always positive; zero-quantity lines are never created.
    pub quantity: u32,
}

impl CartLine {
    /// Create a cart line.
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// An insertion-ordered set of cart lines with at most one line per product.
///
/// Adding a product that is already present merges into the existing line
/// instead of appending a duplicate; this invariant holds after every
/// operation. Order is preserved because the submission payload carries the
/// staged lines as an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartLineSet {
    lines: Vec<CartLine>,
}

impl CartLineSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` units of a product, merging with an existing line.
    ///
    /// Quantities at or below zero are a no-op, not an error: free-text
    /// input parses blanks and garbage to `0` and the action is simply
    /// suppressed. Returns whether the set changed.
    pub fn add_or_merge(&mut self, product_id: ProductId, quantity: i64) -> bool {
        let Ok(quantity) = u32::try_from(quantity) else {
            return false;
        };
        if quantity == 0 {
            return false;
        }
        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine::new(product_id, quantity)),
        }
        true
    }

    /// Drop the product's line entirely, whatever its quantity.
    ///
    /// Returns whether a line was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        self.lines.len() != before
    }

    /// Quantity currently staged for a product, if any.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| line.quantity)
    }

    /// Iterate the lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    /// The lines as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[CartLine] {
        &self.lines
    }

    /// Consume the set into its lines.
    #[must_use]
    pub fn into_vec(self) -> Vec<CartLine> {
        self.lines
    }

    /// Number of distinct products staged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> IntoIterator for &'a CartLineSet {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
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
    fn test_add_appends_new_line() {
        let (p1, p2) = (pid(), pid());
        let mut set = CartLineSet::new();
        assert!(set.add_or_merge(p1, 3));
        assert!(set.add_or_merge(p2, 1));
        assert_eq!(set.as_slice(), &[CartLine::new(p1, 3), CartLine::new(p2, 1)]);
    }

    #[test]
    fn test_add_merges_existing_line() {
        let p = pid();
        let mut set = CartLineSet::new();
        set.add_or_merge(p, 2);
        set.add_or_merge(p, 5);
        assert_eq!(set.get(p), Some(7));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_repeated_adds_equal_single_add() {
        let p = pid();
        let mut split = CartLineSet::new();
        split.add_or_merge(p, 2);
        split.add_or_merge(p, 5);
        let mut whole = CartLineSet::new();
        whole.add_or_merge(p, 7);
        assert_eq!(split, whole);
    }

    #[test]
    fn test_nonpositive_quantity_is_noop() {
        let p = pid();
        let mut set = CartLineSet::new();
        assert!(!set.add_or_merge(p, 0));
        assert!(!set.add_or_merge(p, -4));
        assert!(set.is_empty());

        set.add_or_merge(p, 3);
        assert!(!set.add_or_merge(p, 0));
        assert_eq!(set.get(p), Some(3));
    }

    #[test]
    fn test_remove_drops_whole_line() {
        let (p1, p2) = (pid(), pid());
        let mut set = CartLineSet::new();
        set.add_or_merge(p1, 9);
        set.add_or_merge(p2, 1);
        assert!(set.remove(p1));
        assert_eq!(set.as_slice(), &[CartLine::new(p2, 1)]);
        assert!(!set.remove(p1));
    }

    #[test]
    fn test_one_line_per_product_after_any_sequence() {
        let (p1, p2) = (pid(), pid());
        let mut set = CartLineSet::new();
        set.add_or_merge(p1, 1);
        set.add_or_merge(p2, 2);
        set.add_or_merge(p1, 3);
        set.remove(p2);
        set.add_or_merge(p2, 4);
        set.add_or_merge(p2, 1);
        for line in &set {
            let occurrences = set
                .iter()
                .filter(|l| l.product_id == line.product_id)
                .count();
            assert_eq!(occurrences, 1);
        }
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_wire_field_names() {
        let p = pid();
        let json = serde_json::to_value(CartLine::new(p, 4)).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "productId": p.as_uuid(), "quantity": 4 })
        );
    }
}
