use serde::{Deserialize, Serialize};

use storefront_products::Product;

use crate::availability::joint_stock;

/// Outcome of resolving a color x size selection against a product.
///
/// Unlike [`crate::stock_for`], this keeps "no such color" apart from "color
/// exists but is sold out".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum StockLookup {
    /// Color or size is absent or empty.
    Unselected,
    /// The product has no colors list or no sizes list.
    MissingDimension,
    UnknownColor(String),
    UnknownSize(String),
    /// Both entries found; joint stock, possibly zero.
    Stock(u32),
}

impl StockLookup {
    /// Joint stock, with every unresolved outcome counted as zero.
    pub fn units(&self) -> u32 {
        match self {
            StockLookup::Stock(n) => *n,
            _ => 0,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, StockLookup::Stock(_))
    }
}

/// Treat an empty name the same as no selection.
pub(crate) fn chosen(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

/// Resolve a selection to a [`StockLookup`].
///
/// Checked in order: selection, product lists, color, size.
pub fn resolve_stock(product: &Product, color: Option<&str>, size: Option<&str>) -> StockLookup {
    let (Some(color), Some(size)) = (chosen(color), chosen(size)) else {
        return StockLookup::Unselected;
    };
    if product.colors().is_none() || product.sizes().is_none() {
        return StockLookup::MissingDimension;
    }

    let Some(color_entry) = product.color(color) else {
        tracing::trace!(product_id = %product.id_typed(), color, "resolve_stock: unknown color");
        return StockLookup::UnknownColor(color.to_string());
    };
    let Some(size_entry) = product.size(size) else {
        tracing::trace!(product_id = %product.id_typed(), size, "resolve_stock: unknown size");
        return StockLookup::UnknownSize(size.to_string());
    };

    StockLookup::Stock(joint_stock(color_entry.stock, size_entry.stock))
}
