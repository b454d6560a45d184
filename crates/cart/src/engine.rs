//! The cart engine: authoritative cart state and derived pricing.

use magnolia_core::{ItemRef, LineId, Price, Variant};
use rust_decimal::Decimal;

use crate::line::{CartLine, line_key};
use crate::order::OrderDraft;
use crate::snapshot::CartSnapshot;
use crate::store::CartStore;

/// The cart engine.
///
/// Exclusively owns the line sequence. Hydrates synchronously from its store
/// at construction, before any mutation is possible, and persists a snapshot
/// after every mutation. Operations never fail: unknown line ids are silent
/// no-ops (UI races like a double-clicked remove are expected), and store
/// failures degrade the engine to memory-only rather than surfacing.
#[derive(Debug)]
pub struct Cart<S: CartStore> {
    store: S,
    tax_rate: Decimal,
    lines: Vec<CartLine>,
    is_open: bool,
    memory_only: bool,
}

impl<S: CartStore> Cart<S> {
    /// Construct the engine, hydrating from the store.
    ///
    /// A missing snapshot starts an empty cart. So does an unreadable or
    /// schema-mismatched one, after a warning; stale persisted data must
    /// never block a visit. `tax_rate` is a fraction (e.g. `0.0725`),
    /// injected by the composition root.
    pub fn new(store: S, tax_rate: Decimal) -> Self {
        let lines = match store.load() {
            Ok(Some(snapshot)) if snapshot.is_current() => snapshot.lines,
            Ok(Some(snapshot)) => {
                tracing::warn!(
                    version = snapshot.version,
                    "discarding cart snapshot with incompatible schema version"
                );
                Vec::new()
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "cart hydration failed, starting empty");
                Vec::new()
            }
        };

        Self {
            store,
            tax_rate,
            lines,
            is_open: false,
            memory_only: false,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one of the given item+variant combination.
    ///
    /// If a line for the combination already exists its quantity increments
    /// by 1; otherwise a new line is appended, preserving insertion order for
    /// display.
    pub fn add_item(&mut self, item: ItemRef, variant: Option<Variant>) {
        let key = line_key(&item, variant.as_ref());
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == key) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::new(item, variant));
        }
        self.persist();
    }

    /// Remove the line with the given id. No-op if absent.
    pub fn remove_item(&mut self, line_id: &LineId) {
        self.lines.retain(|line| &line.id != line_id);
        self.persist();
    }

    /// Set a line's quantity to an absolute value.
    ///
    /// A quantity of 0 removes the line. No-op if the id is unknown.
    pub fn update_quantity(&mut self, line_id: &LineId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(line_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.id == line_id) {
            line.quantity = quantity;
        }
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Mark the cart UI as open. Transient; never persisted.
    pub const fn open(&mut self) {
        self.is_open = true;
    }

    /// Mark the cart UI as closed.
    pub const fn close(&mut self) {
        self.is_open = false;
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    /// Sum of `unit_price * quantity` over all lines, at full precision.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Tax on the subtotal at the injected rate, at full precision.
    #[must_use]
    pub fn tax(&self) -> Price {
        self.subtotal() * self.tax_rate
    }

    /// Subtotal plus tax. Delivery fees and discounts are checkout-time
    /// policy and have no counterpart here.
    #[must_use]
    pub fn total(&self) -> Price {
        self.subtotal() + self.tax()
    }

    /// Sum of all line quantities (badge count), not the number of lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the cart UI is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the engine has degraded to memory-only after a write failure.
    #[must_use]
    pub const fn is_memory_only(&self) -> bool {
        self.memory_only
    }

    /// A snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::new(self.lines.clone())
    }

    /// Prepare the finalized cart contents for the order-submission backend.
    #[must_use]
    pub fn order_draft(&self) -> OrderDraft {
        OrderDraft::from_cart(self)
    }

    /// The injected tax rate.
    #[must_use]
    pub const fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Persist the current snapshot, fire-and-forget.
    ///
    /// The first write failure logs a warning and stops further attempts for
    /// this engine's lifetime; in-memory state stays authoritative.
    fn persist(&mut self) {
        if self.memory_only {
            return;
        }
        let snapshot = self.snapshot();
        if let Err(e) = self.store.save(&snapshot) {
            tracing::warn!(error = %e, "cart persist failed, continuing memory-only");
            self.memory_only = true;
        }
    }
}
