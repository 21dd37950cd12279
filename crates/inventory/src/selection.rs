//! Selection validity for the add-to-cart flow.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_products::Product;

use crate::lookup::chosen;
use crate::resolver::stock_for;

/// Why a selection cannot be added to the cart.
///
/// `Display` is the message shown to the shopper.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionIssue {
    #[error("Please select a color")]
    ColorRequired,

    #[error("Please select a size")]
    SizeRequired,

    #[error("{color} / {size} is out of stock")]
    OutOfStock { color: String, size: String },
}

/// Rendered validation result, as the UI consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionValidation {
    pub is_valid: bool,
    pub message: String,
}

impl From<Result<(), SelectionIssue>> for SelectionValidation {
    fn from(result: Result<(), SelectionIssue>) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: true,
                message: String::new(),
            },
            Err(issue) => Self {
                is_valid: false,
                message: issue.to_string(),
            },
        }
    }
}

/// Check a selection; the first failing rule wins.
///
/// 1. the product has colors and none is chosen
/// 2. the product has sizes and none is chosen
/// 3. both are chosen and their joint stock is zero
///
/// The color prompt deliberately outranks the size prompt.
pub fn check_selection(
    product: &Product,
    color: Option<&str>,
    size: Option<&str>,
) -> Result<(), SelectionIssue> {
    let color = chosen(color);
    let size = chosen(size);

    if product.has_colors() && color.is_none() {
        return Err(SelectionIssue::ColorRequired);
    }
    if product.has_sizes() && size.is_none() {
        return Err(SelectionIssue::SizeRequired);
    }
    if let (Some(color), Some(size)) = (color, size) {
        if stock_for(product, Some(color), Some(size)) == 0 {
            return Err(SelectionIssue::OutOfStock {
                color: color.to_string(),
                size: size.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_selection(
    product: &Product,
    color: Option<&str>,
    size: Option<&str>,
) -> SelectionValidation {
    check_selection(product, color, size).into()
}
