//! Records that carry a backend-assigned identity.

/// A catalog or account record identified by the backend.
///
/// Two entities with the same id describe the same record, even if one of
/// them is a staler snapshot than the other.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    /// Same backend record, regardless of field values.
    fn same_record(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
