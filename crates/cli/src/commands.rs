use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};

use storefront_inventory::{
    all_combinations, colors_for_size, resolve_stock, sizes_for_color, validate_selection,
};
use storefront_products::Product;

/// Exit code for a selection that cannot be added to the cart.
pub const EXIT_INVALID_SELECTION: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "storefront",
    version,
    about = "Inspect color/size availability of a catalog product"
)]
pub struct Cli {
    /// Product JSON file, in the catalog API shape
    #[arg(long, env = "STOREFRONT_PRODUCT")]
    pub product: PathBuf,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sizes for a color, with joint stock
    Sizes {
        #[arg(long)]
        color: String,
    },

    /// Colors for a size, with joint stock
    Colors {
        #[arg(long)]
        size: String,
    },

    /// Joint stock of a color/size pair
    Stock(SelectionArgs),

    /// Every in-stock color/size pair
    Combinations,

    /// Check whether a selection can go in the cart
    Validate(SelectionArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionArgs {
    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub size: Option<String>,
}

/// JSON to print, plus the process exit code.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub output: Value,
    pub exit_code: u8,
}

impl Outcome {
    fn ok(output: Value) -> Self {
        Self {
            output,
            exit_code: 0,
        }
    }
}

pub fn load_product(path: &Path) -> anyhow::Result<Product> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read product file {}", path.display()))?;
    let product = Product::from_json(&raw)
        .with_context(|| format!("invalid product record in {}", path.display()))?;

    tracing::debug!(
        product_id = %product.id_typed(),
        colors = product.colors().map_or(0, <[_]>::len),
        sizes = product.sizes().map_or(0, <[_]>::len),
        "product loaded"
    );
    Ok(product)
}

pub fn execute(command: &Command, product: &Product) -> anyhow::Result<Outcome> {
    let outcome = match command {
        Command::Sizes { color } => Outcome::ok(serde_json::to_value(sizes_for_color(product, color))?),
        Command::Colors { size } => Outcome::ok(serde_json::to_value(colors_for_size(product, size))?),
        Command::Stock(selection) => {
            let lookup = resolve_stock(product, selection.color(), selection.size());
            Outcome::ok(json!({
                "color": selection.color,
                "size": selection.size,
                "stock": lookup.units(),
                "available": lookup.units() > 0,
                "lookup": lookup,
            }))
        }
        Command::Combinations => Outcome::ok(serde_json::to_value(all_combinations(product))?),
        Command::Validate(selection) => {
            let verdict = validate_selection(product, selection.color(), selection.size());
            let exit_code = if verdict.is_valid { 0 } else { EXIT_INVALID_SELECTION };
            Outcome {
                output: serde_json::to_value(verdict)?,
                exit_code,
            }
        }
    };
    Ok(outcome)
}

impl SelectionArgs {
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }
}
