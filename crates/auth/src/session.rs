use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::UserId;

use crate::{AdminCapability, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("session has expired")]
    Expired,

    #[error("session not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid session time window (expires_at <= issued_at)")]
    InvalidTimeWindow,

    #[error("forbidden: {0}")]
    Forbidden(String),
}

/// An authenticated storefront session, as verified by the backend at login.
///
/// The role is whatever the server asserted when the session was issued; it is
/// never toggled locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user_id: UserId,
    role: Role,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        user_id: UserId,
        role: Role,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, AuthzError> {
        if ttl <= Duration::zero() {
            return Err(AuthzError::InvalidTimeWindow);
        }
        Ok(Self {
            user_id,
            role,
            issued_at,
            expires_at: issued_at + ttl,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Check the session's time window against `now`.
    ///
    /// A deserialized session may carry any window, so this re-checks the
    /// ordering as well.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), AuthzError> {
        if self.expires_at <= self.issued_at {
            return Err(AuthzError::InvalidTimeWindow);
        }
        if now < self.issued_at {
            return Err(AuthzError::NotYetValid);
        }
        if self.is_expired(now) {
            return Err(AuthzError::Expired);
        }
        Ok(())
    }

    /// Derive an admin capability from this session.
    pub fn admin_capability(&self, now: DateTime<Utc>) -> Result<AdminCapability, AuthzError> {
        self.validate(now)?;
        if !self.is_admin() {
            tracing::debug!(user_id = %self.user_id, role = %self.role, "admin capability denied");
            return Err(AuthzError::Forbidden(format!(
                "role '{}' cannot manage inventory",
                self.role
            )));
        }
        Ok(AdminCapability::new(self.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn session(role: Role) -> Session {
        Session::new(UserId::new(), role, t0(), Duration::hours(1)).unwrap()
    }

    #[test]
    fn rejects_non_positive_ttl() {
        let err = Session::new(UserId::new(), Role::Admin, t0(), Duration::zero()).unwrap_err();
        assert_eq!(err, AuthzError::InvalidTimeWindow);
    }

    #[test]
    fn admin_session_grants_capability_for_its_user() {
        let s = session(Role::Admin);
        let cap = s.admin_capability(t0() + Duration::minutes(5)).unwrap();
        assert_eq!(cap.granted_to(), s.user_id());
    }

    #[test]
    fn customer_session_is_forbidden() {
        let s = session(Role::Customer);
        match s.admin_capability(t0()) {
            Err(AuthzError::Forbidden(msg)) => assert!(msg.contains("customer")),
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }

    #[test]
    fn expired_admin_session_is_rejected_before_role_check() {
        let s = session(Role::Admin);
        let now = t0() + Duration::hours(1);
        assert!(s.is_expired(now));
        assert_eq!(s.admin_capability(now).unwrap_err(), AuthzError::Expired);
    }

    #[test]
    fn session_from_the_future_is_not_yet_valid() {
        let s = session(Role::Admin);
        assert_eq!(
            s.validate(t0() - Duration::seconds(1)).unwrap_err(),
            AuthzError::NotYetValid
        );
    }

    #[test]
    fn deserialized_session_with_inverted_window_is_invalid() {
        let json = serde_json::json!({
            "user_id": UserId::new(),
            "role": "admin",
            "issued_at": "2024-05-01T12:00:00Z",
            "expires_at": "2024-05-01T11:00:00Z",
        });
        let s: Session = serde_json::from_value(json).unwrap();
        assert_eq!(s.validate(t0()).unwrap_err(), AuthzError::InvalidTimeWindow);
    }
}
