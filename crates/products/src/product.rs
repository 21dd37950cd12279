use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::entry::{ColorEntry, SizeEntry};

/// Wire shape of a product as returned by the catalog API.
///
/// Unvalidated; convert with `Product::try_from` (or [`Product::from_json`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<ColorEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<SizeEntry>>,
}

/// A validated catalog product.
///
/// Invariants (checked on construction):
/// - `name` is not blank
/// - every color name and size label is not blank
/// - color names are unique, size labels are unique
///
/// An absent `colors`/`sizes` list is kept distinct from an empty one so the
/// record serializes back the way it arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    colors: Option<Vec<ColorEntry>>,
    sizes: Option<Vec<SizeEntry>>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        colors: Option<Vec<ColorEntry>>,
        sizes: Option<Vec<SizeEntry>>,
    ) -> DomainResult<Self> {
        Self::try_from(ProductRecord {
            id,
            name: name.into(),
            colors,
            sizes,
        })
    }

    /// Parse and validate a product from catalog API JSON.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let record: ProductRecord =
            serde_json::from_str(json).map_err(|e| DomainError::validation(e.to_string()))?;
        Self::try_from(record)
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> Option<&[ColorEntry]> {
        self.colors.as_deref()
    }

    pub fn sizes(&self) -> Option<&[SizeEntry]> {
        self.sizes.as_deref()
    }

    /// Look up a color entry by exact name. First match wins.
    pub fn color(&self, name: &str) -> Option<&ColorEntry> {
        self.colors()?.iter().find(|c| c.color == name)
    }

    /// Look up a size entry by exact label. First match wins.
    pub fn size(&self, label: &str) -> Option<&SizeEntry> {
        self.sizes()?.iter().find(|s| s.size == label)
    }

    /// True when the product lists at least one color.
    pub fn has_colors(&self) -> bool {
        self.colors().is_some_and(|c| !c.is_empty())
    }

    /// True when the product lists at least one size.
    pub fn has_sizes(&self) -> bool {
        self.sizes().is_some_and(|s| !s.is_empty())
    }

    pub(crate) fn color_mut(&mut self, name: &str) -> Option<&mut ColorEntry> {
        self.colors.as_mut()?.iter_mut().find(|c| c.color == name)
    }

    pub(crate) fn size_mut(&mut self, label: &str) -> Option<&mut SizeEntry> {
        self.sizes.as_mut()?.iter_mut().find(|s| s.size == label)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        if record.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if let Some(colors) = &record.colors {
            ensure_unique_labels("color", colors.iter().map(|c| c.color.as_str()))?;
        }
        if let Some(sizes) = &record.sizes {
            ensure_unique_labels("size", sizes.iter().map(|s| s.size.as_str()))?;
        }

        Ok(Self {
            id: record.id,
            name: record.name,
            colors: record.colors,
            sizes: record.sizes,
        })
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            colors: product.colors,
            sizes: product.sizes,
        }
    }
}

fn ensure_unique_labels<'a>(
    kind: &str,
    labels: impl Iterator<Item = &'a str>,
) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for label in labels {
        if label.trim().is_empty() {
            return Err(DomainError::validation(format!("{kind} name cannot be empty")));
        }
        if !seen.insert(label) {
            return Err(DomainError::invariant(format!("duplicate {kind} '{label}'")));
        }
    }
    Ok(())
}
