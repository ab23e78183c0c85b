//! # catalog-types
//!
//! Domain types for the catalog service.
//! This crate contains pure data types with no dependencies beyond serde.

pub mod item;

pub use item::{Item, ItemId, ItemPatch, NewItem};
