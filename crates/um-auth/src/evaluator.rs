use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::PermissionCatalog;
use crate::error::AuthError;
use crate::permission::PermissionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => write!(f, "allow"),
            Decision::Deny => write!(f, "deny"),
        }
    }
}

/// Permissions held by the current actor for one request or session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrantedPermissionSet(HashSet<PermissionId>);

impl GrantedPermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &PermissionId) -> bool {
        self.0.contains(id)
    }

    pub fn insert(&mut self, id: PermissionId) -> bool {
        self.0.insert(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PermissionId> {
        self.0.iter()
    }
}

impl FromIterator<PermissionId> for GrantedPermissionSet {
    fn from_iter<I: IntoIterator<Item = PermissionId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<PermissionId> for GrantedPermissionSet {
    fn extend<I: IntoIterator<Item = PermissionId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Flat membership check with a single superuser override.
///
/// Holding one permission never implies another; `USERS_UPDATE` does not
/// grant `USERS_GET_DETAILS`. The catalog is consulted only for the
/// superuser identifier, so required permissions outside the well-known
/// vocabulary are authorized the same way as listed ones.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationEvaluator<'a> {
    catalog: &'a PermissionCatalog,
}

impl<'a> AuthorizationEvaluator<'a> {
    pub fn new(catalog: &'a PermissionCatalog) -> Self {
        Self { catalog }
    }

    pub fn authorize(&self, granted: &GrantedPermissionSet, required: &PermissionId) -> Decision {
        if granted.contains(self.catalog.superuser_permission()) {
            tracing::debug!(%required, "allowed by superuser permission");
            return Decision::Allow;
        }

        let decision = if granted.contains(required) {
            Decision::Allow
        } else {
            Decision::Deny
        };
        tracing::debug!(%required, %decision, granted = granted.len(), "authorization evaluated");
        decision
    }

    /// Like [`authorize`](Self::authorize), turning a denial into
    /// [`AuthError::Forbidden`].
    pub fn require(
        &self,
        granted: &GrantedPermissionSet,
        required: &PermissionId,
    ) -> Result<(), AuthError> {
        match self.authorize(granted, required) {
            Decision::Allow => Ok(()),
            Decision::Deny => Err(AuthError::Forbidden {
                required: required.clone(),
            }),
        }
    }
}
