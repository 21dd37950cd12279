//! Inventory availability resolution.
//!
//! Products carry independent stock counters per color and per size; there is
//! no per-combination ledger. The joint stock of a color x size pair is taken
//! as `min(color.stock, size.stock)`, an upper bound rather than an
//! allocation: one physical unit can show up in several combinations.
//!
//! Everything here is a pure function of a `&Product` and the caller's current
//! selection. Nothing is cached, nothing is mutated, and nothing fails: missing
//! lists, unknown names and empty selections degrade to empty results or zero
//! stock. Use [`resolve_stock`] when "unknown" and "sold out" must be told apart.

pub mod availability;
pub mod lookup;
pub mod resolver;
pub mod selection;

#[cfg(test)]
mod test_support;

pub use availability::{ColorAvailability, Combination, SizeAvailability};
pub use lookup::{StockLookup, resolve_stock};
pub use resolver::{all_combinations, colors_for_size, is_available, sizes_for_color, stock_for};
pub use selection::{SelectionIssue, SelectionValidation, check_selection, validate_selection};
