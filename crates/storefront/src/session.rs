//! Session configuration and cart-session plumbing.
//!
//! The session is the storefront's persistence substrate: the serialized
//! cart snapshot rides in the visitor's session so the cart survives page
//! reloads. Handlers hydrate an engine from the session snapshot, run one
//! operation, and write the updated snapshot back.

use rust_decimal::Decimal;
use tower_sessions::{Expiry, MemoryStore as SessionMemoryStore, Session, SessionManagerLayer};

use magnolia_cart::{Cart, CartSnapshot, MemoryStore};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "magnolia_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Session keys for cart data.
pub mod keys {
    /// Key for storing the serialized cart snapshot.
    pub const CART: &str = "cart";
}

/// Create the session layer with an in-memory store.
///
/// Sessions hold only the cart snapshot, which is cheap to lose on restart;
/// an abandoned cart is not durable business state.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<SessionMemoryStore> {
    SessionManagerLayer::new(SessionMemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// Hydrate a cart engine from the session's snapshot.
///
/// A missing, unreadable, or stale snapshot starts an empty cart; a visit is
/// never blocked on bad session data.
pub async fn load_cart(session: &Session, tax_rate: Decimal) -> Cart<MemoryStore> {
    let snapshot = match session.get::<CartSnapshot>(keys::CART).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read cart from session, starting empty");
            None
        }
    };

    let store = match snapshot {
        Some(ref snap) => match MemoryStore::with_snapshot(snap) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(error = %e, "failed to buffer session cart, starting empty");
                MemoryStore::new()
            }
        },
        None => MemoryStore::new(),
    };

    Cart::new(store, tax_rate)
}

/// Write the cart's snapshot back to the session.
///
/// Write failures are logged and swallowed: the mutation already happened
/// in memory and the response reflects it, matching the engine's own
/// fire-and-forget persistence semantics.
pub async fn save_cart(session: &Session, cart: &Cart<MemoryStore>) {
    if let Err(e) = session.insert(keys::CART, cart.snapshot()).await {
        tracing::warn!(error = %e, "failed to persist cart to session");
    }
}
