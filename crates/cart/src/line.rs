//! Cart lines and line-key derivation.

use magnolia_core::{ItemRef, LineId, Price, Variant};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derive the deterministic line id for an (item, variant) combination.
///
/// The key identifies the combination, not the catalog entity: adding the
/// same item with a different variant yields a different key and therefore a
/// separate line, while re-adding the identical combination maps to the
/// existing line.
#[must_use]
pub fn line_key(item: &ItemRef, variant: Option<&Variant>) -> LineId {
    match variant {
        Some(v) => LineId::new(format!("{}:{}:{}", item.kind(), item.id(), v.id)),
        None => LineId::new(format!("{}:{}", item.kind(), item.id())),
    }
}

/// One entry in the cart: an item+variant combination and its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Line id, derived from the (item, variant) combination.
    pub id: LineId,
    /// The referenced catalog entity.
    pub item: ItemRef,
    /// Optional selected variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    /// Always >= 1; a line whose quantity would reach 0 is removed instead.
    pub quantity: u32,
}

impl CartLine {
    /// Create a new line with quantity 1.
    #[must_use]
    pub fn new(item: ItemRef, variant: Option<Variant>) -> Self {
        Self {
            id: line_key(&item, variant.as_ref()),
            item,
            variant,
            quantity: 1,
        }
    }

    /// Unit price: base price plus the variant's modifier, if any.
    ///
    /// Recomputed on every read rather than cached at add time, so a catalog
    /// price carried on the reference always prices the line consistently
    /// wherever it is read.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        let modifier = self
            .variant
            .as_ref()
            .map_or(Decimal::ZERO, |v| v.price_modifier);
        Price::new(self.item.price().amount() + modifier)
    }

    /// Extended price for the line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price() * self.quantity
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use magnolia_core::{ItemId, VariantId};

    use super::*;

    fn catfish() -> ItemRef {
        ItemRef::Menu {
            id: ItemId::new("catfish-dinner"),
            name: "Catfish Dinner".to_owned(),
            price: Price::from_cents(1800),
        }
    }

    fn five_piece() -> Variant {
        Variant {
            id: VariantId::new("5-piece"),
            name: "5 Piece".to_owned(),
            price_modifier: Decimal::new(400, 2),
        }
    }

    #[test]
    fn test_line_key_distinguishes_variants() {
        let item = catfish();
        let plain = line_key(&item, None);
        let upsized = line_key(&item, Some(&five_piece()));

        assert_eq!(plain.as_str(), "menu:catfish-dinner");
        assert_eq!(upsized.as_str(), "menu:catfish-dinner:5-piece");
        assert_ne!(plain, upsized);
    }

    #[test]
    fn test_line_key_distinguishes_kinds() {
        let menu = catfish();
        let product = ItemRef::Product {
            id: ItemId::new("catfish-dinner"),
            name: "Catfish Dinner (frozen)".to_owned(),
            price: Price::from_cents(1200),
        };
        assert_ne!(line_key(&menu, None), line_key(&product, None));
    }

    #[test]
    fn test_unit_price_applies_variant_modifier() {
        let line = CartLine::new(catfish(), Some(five_piece()));
        assert_eq!(line.unit_price(), Price::from_cents(2200));
    }

    #[test]
    fn test_line_total_scales_with_quantity() {
        let mut line = CartLine::new(catfish(), None);
        line.quantity = 3;
        assert_eq!(line.line_total(), Price::from_cents(5400));
    }

    #[test]
    fn test_negative_modifier_reduces_unit_price() {
        let small = Variant {
            id: VariantId::new("half"),
            name: "Half Portion".to_owned(),
            price_modifier: Decimal::new(-500, 2),
        };
        let line = CartLine::new(catfish(), Some(small));
        assert_eq!(line.unit_price(), Price::from_cents(1300));
    }
}
