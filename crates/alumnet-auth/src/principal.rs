use std::collections::BTreeSet;

use alumnet_core::AppError;
use uuid::Uuid;

/// Identity of the caller for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub email: String,
    pub roles: BTreeSet<String>,
}

impl Principal {
    /// Exact, case-sensitive match.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// Fails with 403 unless the principal holds `role`.
pub fn require_role(principal: &Principal, role: &str) -> Result<(), AppError> {
    if principal.has_role(role) {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "Forbidden: '{role}' role required"
        )))
    }
}
