//! Magnolia Core - Shared types library.
//!
//! This crate provides common types used across all Magnolia Soul Kitchen
//! components:
//! - `cart` - Cart engine library (pricing, persistence, checkout prep)
//! - `storefront` - Public-facing ordering site
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients,
//! no storage. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, catalog item
//!   references, and menu categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
