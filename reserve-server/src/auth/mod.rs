//! Authentication and caller scope
//!
//! Token issuance lives in an external identity service; this module only
//! validates bearer tokens and resolves the caller into an [`AdminScope`].
//! The scope is threaded explicitly into every engine operation that needs
//! it — never read from ambient state.

mod extractor;
pub mod jwt;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};

use crate::utils::{AppError, AppResult};

/// Resolved admin caller identity.
///
/// `restaurant_id: None` denotes a superuser with unrestricted access;
/// otherwise the caller is confined to records of that one restaurant.
#[derive(Debug, Clone)]
pub struct AdminScope {
    pub admin_id: String,
    pub restaurant_id: Option<i64>,
}

impl AdminScope {
    pub fn superuser(admin_id: impl Into<String>) -> Self {
        Self {
            admin_id: admin_id.into(),
            restaurant_id: None,
        }
    }

    pub fn for_restaurant(admin_id: impl Into<String>, restaurant_id: i64) -> Self {
        Self {
            admin_id: admin_id.into(),
            restaurant_id: Some(restaurant_id),
        }
    }

    pub fn can_access(&self, restaurant_id: i64) -> bool {
        match self.restaurant_id {
            None => true,
            Some(own) => own == restaurant_id,
        }
    }

    /// Forbidden error on a tenant mismatch
    pub fn authorize(&self, restaurant_id: i64) -> AppResult<()> {
        if self.can_access(restaurant_id) {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Caller is not authorized for this restaurant",
            ))
        }
    }

    /// Narrow an optional list filter to the caller's own restaurant.
    /// A scoped admin always sees only their restaurant, whatever they asked.
    pub fn narrow_filter(&self, requested: Option<i64>) -> Option<i64> {
        match self.restaurant_id {
            Some(own) => Some(own),
            None => requested,
        }
    }
}

impl From<Claims> for AdminScope {
    fn from(claims: Claims) -> Self {
        Self {
            admin_id: claims.sub,
            restaurant_id: claims.restaurant_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superuser_accesses_everything() {
        let scope = AdminScope::superuser("root");
        assert!(scope.can_access(1));
        assert!(scope.can_access(999));
        assert!(scope.authorize(42).is_ok());
    }

    #[test]
    fn test_scoped_admin_is_confined() {
        let scope = AdminScope::for_restaurant("admin", 2);
        assert!(scope.can_access(2));
        assert!(!scope.can_access(3));
        assert!(scope.authorize(3).is_err());
    }

    #[test]
    fn test_narrow_filter_ignores_foreign_request() {
        let scoped = AdminScope::for_restaurant("admin", 2);
        assert_eq!(scoped.narrow_filter(Some(5)), Some(2));
        assert_eq!(scoped.narrow_filter(None), Some(2));

        let root = AdminScope::superuser("root");
        assert_eq!(root.narrow_filter(Some(5)), Some(5));
        assert_eq!(root.narrow_filter(None), None);
    }
}
