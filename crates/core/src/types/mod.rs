//! Core types for Magnolia Soul Kitchen.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod item;
pub mod money;

pub use category::{CategoryParseError, MenuCategory};
pub use id::*;
pub use item::{ItemKind, ItemRef, Variant};
pub use money::Price;
