//! Availability resolution across the two selectable dimensions.
//!
//! Each function scans the product's lists directly (they hold a handful of
//! entries) and builds a fresh result on every call.

use storefront_products::Product;

use crate::availability::{ColorAvailability, Combination, SizeAvailability, joint_stock};
use crate::lookup::resolve_stock;

/// Every size of `product`, annotated with its joint stock against `color`.
///
/// Empty when the product lacks a colors or sizes list, or when `color` is
/// not one of its colors. Otherwise one entry per size, in catalog order.
pub fn sizes_for_color(product: &Product, color: &str) -> Vec<SizeAvailability> {
    let (Some(_), Some(sizes)) = (product.colors(), product.sizes()) else {
        return Vec::new();
    };
    let Some(entry) = product.color(color) else {
        tracing::trace!(product_id = %product.id_typed(), color, "sizes_for_color: unknown color");
        return Vec::new();
    };

    sizes
        .iter()
        .map(|size| SizeAvailability::new(size, joint_stock(entry.stock, size.stock)))
        .collect()
}

/// Every color of `product`, annotated with its joint stock against `size`.
///
/// Mirror image of [`sizes_for_color`].
pub fn colors_for_size(product: &Product, size: &str) -> Vec<ColorAvailability> {
    let (Some(colors), Some(_)) = (product.colors(), product.sizes()) else {
        return Vec::new();
    };
    let Some(entry) = product.size(size) else {
        tracing::trace!(product_id = %product.id_typed(), size, "colors_for_size: unknown size");
        return Vec::new();
    };

    colors
        .iter()
        .map(|color| ColorAvailability::new(color, joint_stock(color.stock, entry.stock)))
        .collect()
}

/// Joint stock for a color x size pair; `0` for anything unresolvable.
pub fn stock_for(product: &Product, color: Option<&str>, size: Option<&str>) -> u32 {
    resolve_stock(product, color, size).units()
}

pub fn is_available(product: &Product, color: Option<&str>, size: Option<&str>) -> bool {
    stock_for(product, color, size) > 0
}

/// All color x size pairs with positive joint stock, color-major.
pub fn all_combinations(product: &Product) -> Vec<Combination> {
    let (Some(colors), Some(sizes)) = (product.colors(), product.sizes()) else {
        return Vec::new();
    };

    colors
        .iter()
        .flat_map(|color| {
            sizes.iter().filter_map(move |size| {
                let stock = joint_stock(color.stock, size.stock);
                (stock > 0).then(|| Combination::new(color, size, stock))
            })
        })
        .collect()
}
