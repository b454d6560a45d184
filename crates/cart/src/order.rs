//! Checkout preparation.
//!
//! The cart engine does not implement checkout; it only prepares the data
//! the order-submission backend consumes. Monetary values here are rounded
//! to currency precision because the draft is a hand-off boundary, not an
//! accumulator.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use magnolia_core::{ItemId, ItemKind};

use crate::engine::Cart;
use crate::store::CartStore;

/// One priced line of an [`OrderDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Catalog id of the ordered item.
    pub item_id: ItemId,
    /// Kind of catalog entity (menu item or retail product).
    pub kind: ItemKind,
    /// Display name at the time the draft was built.
    pub name: String,
    /// Selected variant name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Ordered quantity.
    pub quantity: u32,
    /// Unit price, rounded to currency precision.
    pub unit_price: Decimal,
    /// Extended line price, rounded to currency precision.
    pub line_total: Decimal,
}

/// The finalized cart contents, ready for order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Client-generated draft id for idempotent submission.
    pub id: Uuid,
    /// When the draft was assembled.
    pub created_at: DateTime<Utc>,
    /// Priced lines in cart display order.
    pub lines: Vec<OrderLine>,
    /// Sum of line totals, rounded.
    pub subtotal: Decimal,
    /// Tax at the rate the cart was configured with, rounded.
    pub tax: Decimal,
    /// Subtotal plus tax, rounded.
    pub total: Decimal,
}

impl OrderDraft {
    /// Assemble a draft from the cart's current state.
    #[must_use]
    pub fn from_cart<S: CartStore>(cart: &Cart<S>) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| OrderLine {
                item_id: line.item.id().clone(),
                kind: line.item.kind(),
                name: line.item.name().to_owned(),
                variant: line.variant.as_ref().map(|v| v.name.clone()),
                quantity: line.quantity,
                unit_price: line.unit_price().rounded(),
                line_total: line.line_total().rounded(),
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            lines,
            subtotal: cart.subtotal().rounded(),
            tax: cart.tax().rounded(),
            total: cart.total().rounded(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use magnolia_core::{ItemRef, Price, Variant, VariantId};

    use crate::store::MemoryStore;

    use super::*;

    fn cart_with_two_lines() -> Cart<MemoryStore> {
        let rate = "0.0725".parse().unwrap();
        let mut cart = Cart::new(MemoryStore::new(), rate);
        cart.add_item(
            ItemRef::Menu {
                id: ItemId::new("rib-dinner"),
                name: "Rib Dinner".to_owned(),
                price: Price::from_cents(1900),
            },
            None,
        );
        cart.add_item(
            ItemRef::Menu {
                id: ItemId::new("mac-and-cheese"),
                name: "Mac & Cheese".to_owned(),
                price: Price::from_cents(450),
            },
            Some(Variant {
                id: VariantId::new("large"),
                name: "Large".to_owned(),
                price_modifier: Decimal::new(150, 2),
            }),
        );
        cart.add_item(
            ItemRef::Menu {
                id: ItemId::new("mac-and-cheese"),
                name: "Mac & Cheese".to_owned(),
                price: Price::from_cents(450),
            },
            Some(Variant {
                id: VariantId::new("large"),
                name: "Large".to_owned(),
                price_modifier: Decimal::new(150, 2),
            }),
        );
        cart
    }

    #[test]
    fn test_draft_lines_mirror_cart_state() {
        let cart = cart_with_two_lines();
        let draft = cart.order_draft();

        assert_eq!(draft.lines.len(), 2);
        let mac = &draft.lines[1];
        assert_eq!(mac.variant.as_deref(), Some("Large"));
        assert_eq!(mac.quantity, 2);
        assert_eq!(mac.unit_price.to_string(), "6.00");
        assert_eq!(mac.line_total.to_string(), "12.00");
    }

    #[test]
    fn test_draft_totals_match_cart_getters() {
        let cart = cart_with_two_lines();
        let draft = cart.order_draft();

        // 19.00 + 6.00 * 2 = 31.00; tax 31.00 * 0.0725 = 2.2475 -> 2.25
        assert_eq!(draft.subtotal.to_string(), "31.00");
        assert_eq!(draft.tax.to_string(), "2.25");
        assert_eq!(draft.total.to_string(), "33.25");
    }

    #[test]
    fn test_drafts_get_distinct_ids() {
        let cart = cart_with_two_lines();
        assert_ne!(cart.order_draft().id, cart.order_draft().id);
    }
}
