//! Derived availability views, serialized in the shape the storefront UI reads.

use serde::{Deserialize, Serialize};

use storefront_products::{ColorEntry, SizeEntry};

/// A size as seen from a chosen color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeAvailability {
    pub size: String,
    /// The size's own counter.
    pub stock: u32,
    /// Joint stock with the chosen color.
    pub available_stock: u32,
    pub is_available: bool,
}

impl SizeAvailability {
    pub(crate) fn new(entry: &SizeEntry, available_stock: u32) -> Self {
        Self {
            size: entry.size.clone(),
            stock: entry.stock,
            available_stock,
            is_available: available_stock > 0,
        }
    }
}

/// A color as seen from a chosen size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAvailability {
    pub color: String,
    /// The color's own counter.
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hexcode: Option<String>,
    pub images: Vec<String>,
    /// Joint stock with the chosen size.
    pub available_stock: u32,
    pub is_available: bool,
}

impl ColorAvailability {
    pub(crate) fn new(entry: &ColorEntry, available_stock: u32) -> Self {
        Self {
            color: entry.color.clone(),
            stock: entry.stock,
            hexcode: entry.hexcode.clone(),
            images: entry.images.clone(),
            available_stock,
            is_available: available_stock > 0,
        }
    }
}

/// An in-stock color x size pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combination {
    pub color: String,
    pub size: String,
    /// Joint stock; always > 0.
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_hexcode: Option<String>,
    pub color_images: Vec<String>,
}

impl Combination {
    pub(crate) fn new(color: &ColorEntry, size: &SizeEntry, stock: u32) -> Self {
        Self {
            color: color.color.clone(),
            size: size.size.clone(),
            stock,
            color_hexcode: color.hexcode.clone(),
            color_images: color.images.clone(),
        }
    }
}

/// Joint stock of two independent counters.
pub(crate) fn joint_stock(color_stock: u32, size_stock: u32) -> u32 {
    color_stock.min(size_stock)
}
