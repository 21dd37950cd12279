//! `storefront-auth`: explicit session context for storefront callers.
//!
//! There is no process-wide "logged in" or "is admin" flag. Callers hold a
//! [`Session`] obtained at login and pass it (or an [`AdminCapability`]
//! derived from it) to whatever needs it. Logging out is dropping the value.
//!
//! Decoupled from HTTP and storage.

pub mod capability;
pub mod role;
pub mod session;

pub use capability::AdminCapability;
pub use role::Role;
pub use session::{AuthzError, Session};
