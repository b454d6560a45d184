//! Menu route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use magnolia_core::{ItemId, MenuCategory};

use crate::catalog::CatalogItem;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Variant display data.
#[derive(Debug, Clone, Serialize)]
pub struct VariantView {
    pub id: String,
    pub name: String,
    /// Final unit price with this variant applied.
    pub price: String,
}

/// Catalog item display data.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub available: bool,
    pub variants: Vec<VariantView>,
}

impl From<&CatalogItem> for MenuItemView {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.display(),
            kind: item.kind.as_str().to_owned(),
            category: item.category.map(|c| c.as_str().to_owned()),
            image: item.image.clone(),
            available: item.available,
            variants: item
                .variants
                .iter()
                .map(|v| VariantView {
                    id: v.id.to_string(),
                    name: v.name.clone(),
                    price: magnolia_core::Price::new(item.price.amount() + v.price_modifier)
                        .display(),
                })
                .collect(),
        }
    }
}

/// Menu listing query parameters.
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Restrict the listing to one menu section.
    pub category: Option<String>,
}

/// Catalog listing, optionally filtered by category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<Vec<MenuItemView>>> {
    let items: Vec<MenuItemView> = match query.category {
        Some(ref raw) => {
            let category: MenuCategory = raw
                .parse()
                .map_err(|e: magnolia_core::CategoryParseError| {
                    AppError::BadRequest(e.to_string())
                })?;
            state
                .catalog()
                .by_category(category)
                .into_iter()
                .map(MenuItemView::from)
                .collect()
        }
        None => state
            .catalog()
            .items()
            .iter()
            .map(MenuItemView::from)
            .collect(),
    };

    Ok(Json(items))
}

/// Catalog item detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItemView>> {
    let item_id = ItemId::new(id);
    state
        .catalog()
        .get(&item_id)
        .map(|item| Json(MenuItemView::from(item)))
        .ok_or_else(|| AppError::NotFound(item_id.to_string()))
}
