//! Magnolia Cart - the cart engine library.
//!
//! Owns the authoritative list of lines a shopper has selected, computes
//! derived monetary totals, and persists itself across visits through a
//! pluggable [`CartStore`]. The engine is the only writer of cart state:
//! callers mutate exclusively through its operations and read through its
//! derived getters.
//!
//! # Design
//!
//! - All operations are synchronous and infallible from the caller's point
//!   of view. Store failures are handled locally: a failed hydration starts
//!   an empty cart, a failed write switches the engine to memory-only for
//!   the rest of its life. Nothing propagates as an error.
//! - Monetary values accumulate at full precision ([`magnolia_core::Price`])
//!   and are rounded only at display or checkout boundaries.
//! - The tax rate is injected by the composition root, never owned here, so
//!   pricing policy stays a deployment concern.
//!
//! # Example
//!
//! ```rust
//! use magnolia_cart::{Cart, MemoryStore};
//! use magnolia_core::{ItemId, ItemRef, Price};
//!
//! let rate = "0.0725".parse().expect("valid rate");
//! let mut cart = Cart::new(MemoryStore::new(), rate);
//!
//! cart.add_item(
//!     ItemRef::Menu {
//!         id: ItemId::new("rib-dinner"),
//!         name: "Rib Dinner".to_owned(),
//!         price: Price::from_cents(1900),
//!     },
//!     None,
//! );
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.subtotal().display(), "$19.00");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod engine;
pub mod error;
pub mod line;
pub mod order;
pub mod snapshot;
pub mod store;

pub use engine::Cart;
pub use error::StoreError;
pub use line::{CartLine, line_key};
pub use order::{OrderDraft, OrderLine};
pub use snapshot::{CartSnapshot, STORAGE_KEY};
pub use store::{CartStore, FileStore, MemoryStore};
