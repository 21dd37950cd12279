use storefront_core::UserId;

/// Proof that a verified, unexpired admin session was presented.
///
/// Only [`crate::Session::admin_capability`] can mint one, so any function
/// taking `&AdminCapability` is admin-gated by its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCapability {
    granted_to: UserId,
}

impl AdminCapability {
    pub(crate) fn new(granted_to: UserId) -> Self {
        Self { granted_to }
    }

    pub fn granted_to(&self) -> UserId {
        self.granted_to
    }
}
