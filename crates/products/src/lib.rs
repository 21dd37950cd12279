//! Products domain module.
//!
//! The product record as the storefront receives it from the catalog API:
//! color and size entries with independent stock counters. Records are
//! validated once, at ingestion, so downstream code can rely on unique color
//! names and size labels.

pub mod entry;
pub mod product;
pub mod stock;

pub use entry::{ColorEntry, SizeEntry};
pub use product::{Product, ProductRecord};
