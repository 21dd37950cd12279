//! Back-office stock adjustments.
//!
//! Color and size counters are independent; adjusting one never touches the
//! other. Every adjustment requires an [`AdminCapability`].

use storefront_auth::AdminCapability;
use storefront_core::{DomainError, DomainResult};

use crate::product::Product;

impl Product {
    /// Adjust the stock counter of a color by `delta`, returning the new count.
    pub fn adjust_color_stock(
        &mut self,
        admin: &AdminCapability,
        color: &str,
        delta: i64,
    ) -> DomainResult<u32> {
        let product_id = self.id_typed();
        let entry = self
            .color_mut(color)
            .ok_or_else(|| DomainError::not_found(format!("color '{color}'")))?;
        let updated = apply_delta(entry.stock, delta)?;
        entry.stock = updated;

        tracing::info!(
            %product_id,
            color,
            delta,
            stock = updated,
            admin = %admin.granted_to(),
            "color stock adjusted"
        );
        Ok(updated)
    }

    /// Adjust the stock counter of a size by `delta`, returning the new count.
    pub fn adjust_size_stock(
        &mut self,
        admin: &AdminCapability,
        size: &str,
        delta: i64,
    ) -> DomainResult<u32> {
        let product_id = self.id_typed();
        let entry = self
            .size_mut(size)
            .ok_or_else(|| DomainError::not_found(format!("size '{size}'")))?;
        let updated = apply_delta(entry.stock, delta)?;
        entry.stock = updated;

        tracing::info!(
            %product_id,
            size,
            delta,
            stock = updated,
            admin = %admin.granted_to(),
            "size stock adjusted"
        );
        Ok(updated)
    }
}

fn apply_delta(current: u32, delta: i64) -> DomainResult<u32> {
    if delta == 0 {
        return Err(DomainError::validation("delta cannot be zero"));
    }

    let next = i64::from(current)
        .checked_add(delta)
        .ok_or_else(|| DomainError::invariant("stock overflow"))?;
    if next < 0 {
        return Err(DomainError::invariant("stock cannot go negative"));
    }
    u32::try_from(next).map_err(|_| DomainError::invariant("stock overflow"))
}
