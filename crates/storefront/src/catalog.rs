//! The in-process menu catalog.
//!
//! The restaurant's menu is small and changes by redeploy, so the catalog
//! provider is a seeded in-memory list rather than a database. The cart
//! never reads the catalog directly; handlers resolve an id here and hand
//! the resulting [`ItemRef`] to the engine.

use magnolia_core::{ItemId, ItemKind, ItemRef, MenuCategory, Price, Variant, VariantId};
use rust_decimal::Decimal;

/// One sellable entry in the catalog.
#[derive(Debug, Clone)]
pub struct CatalogItem {
    /// Stable slug id (e.g. `rib-dinner`).
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Menu copy shown to customers.
    pub description: String,
    /// Base price before any variant modifier.
    pub price: Price,
    /// Menu or retail product.
    pub kind: ItemKind,
    /// Menu section; `None` for retail products.
    pub category: Option<MenuCategory>,
    /// Image path, if photographed.
    pub image: Option<String>,
    /// Unavailable items render greyed out and cannot be added to a cart.
    pub available: bool,
    /// Selectable variants (portion sizes etc.); may be empty.
    pub variants: Vec<Variant>,
}

impl CatalogItem {
    /// The reference the cart engine stores for this item.
    #[must_use]
    pub fn item_ref(&self) -> ItemRef {
        match self.kind {
            ItemKind::Menu => ItemRef::Menu {
                id: self.id.clone(),
                name: self.name.clone(),
                price: self.price,
            },
            ItemKind::Product => ItemRef::Product {
                id: self.id.clone(),
                name: self.name.clone(),
                price: self.price,
            },
        }
    }

    /// Look up one of this item's variants by id.
    #[must_use]
    pub fn variant(&self, id: &VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.id == id)
    }
}

/// The catalog provider: every item the storefront can sell.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// The production menu.
    #[must_use]
    pub fn soul_food_menu() -> Self {
        Self {
            items: seed_items(),
        }
    }

    /// All items in menu order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Items in the given menu section, in menu order.
    #[must_use]
    pub fn by_category(&self, category: MenuCategory) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.category == Some(category))
            .collect()
    }
}

/// Build one menu item. Dinners come with two sides and cornbread.
fn menu_item(
    id: &str,
    name: &str,
    description: &str,
    cents: i64,
    category: MenuCategory,
    image: Option<&str>,
) -> CatalogItem {
    CatalogItem {
        id: ItemId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::from_cents(cents),
        kind: ItemKind::Menu,
        category: Some(category),
        image: image.map(str::to_owned),
        available: true,
        variants: Vec::new(),
    }
}

/// Build one retail product.
fn product(id: &str, name: &str, description: &str, cents: i64) -> CatalogItem {
    CatalogItem {
        id: ItemId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::from_cents(cents),
        kind: ItemKind::Product,
        category: None,
        image: None,
        available: true,
        variants: Vec::new(),
    }
}

fn variant(id: &str, name: &str, modifier_cents: i64) -> Variant {
    Variant {
        id: VariantId::new(id),
        name: name.to_owned(),
        price_modifier: Decimal::new(modifier_cents, 2),
    }
}

#[allow(clippy::too_many_lines)]
fn seed_items() -> Vec<CatalogItem> {
    let mut items = vec![
        // ==================== Entrees ====================
        menu_item(
            "rib-dinner",
            "Rib Dinner",
            "Fall-off-the-bone tender ribs, slow-smoked and glazed with our \
             tangy-sweet BBQ sauce. Served with two sides and cornbread.",
            1900,
            MenuCategory::Entrees,
            Some("/images/menu/rib-dinner.jpg"),
        ),
        menu_item(
            "oxtails-dinner",
            "Oxtails Dinner",
            "Buttery-tender oxtails slow-braised in rich, peppery gravy. \
             Sells out daily. Served with two sides.",
            3000,
            MenuCategory::Entrees,
            Some("/images/menu/oxtails-dinner.jpg"),
        ),
        menu_item(
            "smothered-pork-chops",
            "Smothered Pork Chops",
            "Thick-cut chops smothered in brown gravy with caramelized \
             onions. Served with two sides.",
            1700,
            MenuCategory::Entrees,
            Some("/images/menu/smothered-pork-chops.jpg"),
        ),
        menu_item(
            "meatloaf",
            "Meat Loaf",
            "Homestyle meatloaf topped with savory brown gravy. Served with \
             two sides and cornbread.",
            1800,
            MenuCategory::Entrees,
            None,
        ),
        menu_item(
            "baked-chicken",
            "Baked Chicken",
            "Seasoned and baked to golden perfection. Served with two sides.",
            1600,
            MenuCategory::Entrees,
            Some("/images/menu/baked-chicken.jpg"),
        ),
        // ==================== Seafood ====================
        menu_item(
            "catfish-dinner",
            "Catfish Dinner",
            "Cornmeal-crusted catfish fried golden. Served with two sides.",
            1800,
            MenuCategory::Seafood,
            Some("/images/menu/catfish-dinner.jpg"),
        ),
        // ==================== Sides ====================
        menu_item(
            "mac-and-cheese",
            "Mac & Cheese",
            "Baked five-cheese macaroni with a golden crust.",
            450,
            MenuCategory::Sides,
            None,
        ),
        menu_item(
            "collard-greens",
            "Collard Greens",
            "Slow-simmered greens with smoked turkey.",
            450,
            MenuCategory::Sides,
            None,
        ),
        menu_item(
            "candied-yams",
            "Candied Yams",
            "Sweet, buttery yams with a hint of cinnamon.",
            450,
            MenuCategory::Sides,
            None,
        ),
        // ==================== Desserts ====================
        menu_item(
            "peach-cobbler",
            "Peach Cobbler",
            "Warm spiced peaches under a buttery lattice crust.",
            550,
            MenuCategory::Desserts,
            None,
        ),
        menu_item(
            "banana-pudding",
            "Banana Pudding",
            "Layers of vanilla custard, wafers, and fresh banana.",
            500,
            MenuCategory::Desserts,
            None,
        ),
        // ==================== Sunday Specials ====================
        menu_item(
            "chicken-and-dressing",
            "Chicken & Dressing",
            "Sunday-only baked chicken over cornbread dressing with giblet \
             gravy. Served with two sides.",
            1700,
            MenuCategory::Sunday,
            None,
        ),
        // ==================== Retail products ====================
        product(
            "bbq-sauce-bottle",
            "House BBQ Sauce",
            "Our tangy-sweet BBQ sauce, bottled. 16 oz.",
            899,
        ),
        product(
            "seasoning-blend",
            "House Seasoning Blend",
            "The blend we season everything with. 8 oz shaker.",
            749,
        ),
    ];

    // Portion-size variants
    if let Some(catfish) = items
        .iter_mut()
        .find(|item| item.id.as_str() == "catfish-dinner")
    {
        catfish.variants = vec![
            variant("3-piece", "3 Piece", 0),
            variant("5-piece", "5 Piece", 400),
        ];
    }
    if let Some(mac) = items
        .iter_mut()
        .find(|item| item.id.as_str() == "mac-and-cheese")
    {
        mac.variants = vec![
            variant("regular", "Regular", 0),
            variant("large", "Large", 150),
        ];
    }

    items
}
