//! Polymorphic catalog item references.
//!
//! The cart references catalog entities of two kinds: menu items (dinners,
//! sides, desserts) and retail products (bottled sauce, seasoning). Both
//! share an id/name/price shape; [`ItemRef`] is the tagged union the cart
//! stores so every read of the price is forced through an exhaustive match.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ItemId, VariantId};
use super::money::Price;

/// The kind of catalog entity an [`ItemRef`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A kitchen menu item.
    Menu,
    /// A retail product.
    Product,
}

impl ItemKind {
    /// The wire/storage tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Product => "product",
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a catalog entity, carried by a cart line.
///
/// Tagged by `type` in serialized form, matching the two catalog families.
/// The referenced entity's name and base price are carried along so the cart
/// can render and price itself without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemRef {
    /// A menu item reference.
    Menu {
        /// Catalog id of the menu item.
        id: ItemId,
        /// Display name.
        name: String,
        /// Base price before any variant modifier.
        price: Price,
    },
    /// A retail product reference.
    Product {
        /// Catalog id of the product.
        id: ItemId,
        /// Display name.
        name: String,
        /// Base price before any variant modifier.
        price: Price,
    },
}

impl ItemRef {
    /// The referenced entity's catalog id.
    #[must_use]
    pub const fn id(&self) -> &ItemId {
        match self {
            Self::Menu { id, .. } | Self::Product { id, .. } => id,
        }
    }

    /// The referenced entity's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Menu { name, .. } | Self::Product { name, .. } => name,
        }
    }

    /// The referenced entity's base price.
    #[must_use]
    pub const fn price(&self) -> Price {
        match self {
            Self::Menu { price, .. } | Self::Product { price, .. } => *price,
        }
    }

    /// The kind tag of this reference.
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Menu { .. } => ItemKind::Menu,
            Self::Product { .. } => ItemKind::Product,
        }
    }
}

/// An optional modifier to a base catalog item (e.g., portion size).
///
/// The `price_modifier` is a signed delta added to the base price when
/// computing a line's unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Variant id, unique within its catalog item.
    pub id: VariantId,
    /// Display name (e.g., "5 Piece").
    pub name: String,
    /// Signed delta added to the item's base price.
    pub price_modifier: Decimal,
}
