//! Cart route handlers.
//!
//! Each mutation hydrates the engine from the session snapshot, applies one
//! operation, and writes the updated snapshot back. The engine itself never
//! errors; failures here are catalog lookups and malformed input.

use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use magnolia_cart::{Cart, CartLine, MemoryStore, OrderDraft};
use magnolia_core::{ItemId, LineId, VariantId};

use crate::error::{AppError, Result};
use crate::session::{load_cart, save_cart};
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.item.name().to_owned(),
            variant: line.variant.as_ref().map(|v| v.name.clone()),
            quantity: line.quantity,
            unit_price: line.unit_price().display(),
            line_total: line.line_total().display(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    fn from_cart(cart: &Cart<MemoryStore>) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            subtotal: cart.subtotal().display(),
            tax: cart.tax().display(),
            total: cart.total().display(),
            item_count: cart.item_count(),
        }
    }
}

/// Cart badge count.
#[derive(Debug, Clone, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub item_id: String,
    pub variant_id: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub line_id: String,
    /// Absolute quantity; zero or negative removes the line.
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub line_id: String,
}

/// Current cart contents and totals.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Json<CartView> {
    let cart = load_cart(&session, state.config().tax_rate).await;
    Json(CartView::from_cart(&cart))
}

/// Add an item to the cart.
///
/// Re-adding an existing item+variant combination increments its line's
/// quantity instead of creating a duplicate line.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Json<CartView>> {
    let item_id = ItemId::new(form.item_id);
    let item = state
        .catalog()
        .get(&item_id)
        .ok_or_else(|| AppError::NotFound(item_id.to_string()))?;
    if !item.available {
        return Err(AppError::Unavailable(item.name.clone()));
    }

    let variant = match form.variant_id {
        Some(ref vid) => Some(
            item.variant(&VariantId::new(vid.clone()))
                .ok_or_else(|| {
                    AppError::BadRequest(format!("unknown variant {vid} for {item_id}"))
                })?
                .clone(),
        ),
        None => None,
    };

    let mut cart = load_cart(&session, state.config().tax_rate).await;
    cart.add_item(item.item_ref(), variant);
    save_cart(&session, &cart).await;

    Ok(Json(CartView::from_cart(&cart)))
}

/// Set a line's quantity. Zero or negative removes the line; an unknown
/// line id is a silent no-op.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Json<CartView> {
    let quantity = u32::try_from(form.quantity.max(0)).unwrap_or(u32::MAX);

    let mut cart = load_cart(&session, state.config().tax_rate).await;
    cart.update_quantity(&LineId::new(form.line_id), quantity);
    save_cart(&session, &cart).await;

    Json(CartView::from_cart(&cart))
}

/// Remove a line. An unknown line id is a silent no-op (remove can race
/// with itself in the UI).
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Json<CartView> {
    let mut cart = load_cart(&session, state.config().tax_rate).await;
    cart.remove_item(&LineId::new(form.line_id));
    save_cart(&session, &cart).await;

    Json(CartView::from_cart(&cart))
}

/// Empty the cart.
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Json<CartView> {
    let mut cart = load_cart(&session, state.config().tax_rate).await;
    cart.clear();
    save_cart(&session, &cart).await;

    Json(CartView::from_cart(&cart))
}

/// Cart badge count: the sum of line quantities, not the line count.
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Json<CartCountView> {
    let cart = load_cart(&session, state.config().tax_rate).await;
    Json(CartCountView {
        count: cart.item_count(),
    })
}

/// Finalize the cart into an order draft for the order-submission backend
/// and empty the cart.
#[instrument(skip(state, session))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<OrderDraft>> {
    let mut cart = load_cart(&session, state.config().tax_rate).await;
    if cart.is_empty() {
        return Err(AppError::BadRequest("cart is empty".to_string()));
    }

    let draft = cart.order_draft();
    cart.clear();
    save_cart(&session, &cart).await;

    Ok(Json(draft))
}
