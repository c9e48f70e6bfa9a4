use std::collections::{BTreeMap, BTreeSet};

use crate::error::{AuthError, Result};
use crate::permission::{PERMISSIONS, PermissionId, READ_ONLY_PERMISSIONS};

/// The compiled-in permission vocabulary.
///
/// Built once from the static tables and never mutated afterwards, so a
/// single instance can be shared freely between request handlers.
///
/// The vocabulary is a convenience subset of every permission the
/// surrounding services define. Authorization does not depend on it; only
/// [`PermissionCatalog::is_read_only`] refuses identifiers it does not know.
#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    known: BTreeMap<PermissionId, &'static str>,
    read_only: BTreeSet<PermissionId>,
    superuser: PermissionId,
}

impl Default for PermissionCatalog {
    fn default() -> Self {
        Self {
            known: PERMISSIONS
                .iter()
                .map(|(name, desc)| (PermissionId::from(*name), *desc))
                .collect(),
            read_only: READ_ONLY_PERMISSIONS
                .iter()
                .map(|name| PermissionId::from(*name))
                .collect(),
            superuser: PermissionId::SUPERUSER,
        }
    }
}

impl PermissionCatalog {
    pub fn is_known(&self, id: &PermissionId) -> bool {
        self.known.contains_key(id)
    }

    /// Whether `id` denotes a non-mutating action.
    ///
    /// Fails with [`AuthError::UnknownPermission`] for identifiers outside
    /// the well-known vocabulary rather than guessing.
    pub fn is_read_only(&self, id: &PermissionId) -> Result<bool> {
        if !self.is_known(id) {
            tracing::warn!(permission = %id, "classification requested for unknown permission");
            return Err(AuthError::UnknownPermission(id.to_string()));
        }
        Ok(self.read_only.contains(id))
    }

    pub fn read_only_permissions(&self) -> &BTreeSet<PermissionId> {
        &self.read_only
    }

    pub fn superuser_permission(&self) -> &PermissionId {
        &self.superuser
    }

    pub fn known_permissions(&self) -> impl Iterator<Item = &PermissionId> {
        self.known.keys()
    }

    pub fn describe(&self, id: &PermissionId) -> Option<&'static str> {
        self.known.get(id).copied()
    }

    /// Verify the structural guarantees callers rely on.
    pub fn check_invariants(&self) -> Result<()> {
        if let Some(stray) = self.read_only.iter().find(|id| !self.is_known(id)) {
            return Err(AuthError::InvalidCatalog(format!(
                "read-only permission {stray} is not a known permission"
            )));
        }
        if !self.is_known(&self.superuser) {
            return Err(AuthError::InvalidCatalog(format!(
                "superuser permission {} is not a known permission",
                self.superuser
            )));
        }
        if self.read_only.contains(&self.superuser) {
            return Err(AuthError::InvalidCatalog(format!(
                "superuser permission {} cannot be read-only",
                self.superuser
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_consistent() {
        let catalog = PermissionCatalog::default();
        catalog.check_invariants().unwrap();
        assert_eq!(catalog.known_permissions().count(), 35);
        assert_eq!(catalog.read_only_permissions().len(), 12);
    }

    #[test]
    fn classify_known_permissions() {
        let catalog = PermissionCatalog::default();
        let read_only = |id: &PermissionId| catalog.is_read_only(id).unwrap();
        assert!(read_only(&PermissionId::USERS_GET_DETAILS));
        assert!(read_only(&PermissionId::SAML_PROVIDERS_SEARCH));
        assert!(!read_only(&PermissionId::USERS_DELETE));
        assert!(!read_only(&PermissionId::SUPERUSER));
    }

    #[test]
    fn classify_unknown_fails() {
        let catalog = PermissionCatalog::default();
        let err = catalog
            .is_read_only(&PermissionId::from("REPORTS_EXPORT"))
            .unwrap_err();
        match err {
            AuthError::UnknownPermission(id) => assert_eq!(id, "REPORTS_EXPORT"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!catalog.is_known(&PermissionId::from("REPORTS_EXPORT")));
    }

    #[test]
    fn mutating_verbs_are_never_read_only() {
        let catalog = PermissionCatalog::default();
        let mutating = [
            "_CREATE",
            "_UPDATE",
            "_DELETE",
            "_ACTIVATE",
            "_DEACTIVATE",
            "_REGENERATE",
            "_CLIENT_SECRET_GET_DETAILS",
        ];
        for id in catalog.read_only_permissions() {
            assert!(
                !mutating.iter().any(|suffix| id.as_str().ends_with(suffix)),
                "{id} must not be read-only"
            );
        }
    }

    #[test]
    fn describe_known_and_unknown() {
        let catalog = PermissionCatalog::default();
        assert_eq!(
            catalog.describe(&PermissionId::SUPERUSER),
            Some("Automatically grants every permission")
        );
        assert_eq!(catalog.describe(&PermissionId::from("NOPE")), None);
    }

    #[test]
    fn invariant_violations_are_reported() {
        let mut catalog = PermissionCatalog::default();
        catalog.read_only.insert(PermissionId::SUPERUSER);
        assert!(matches!(
            catalog.check_invariants(),
            Err(AuthError::InvalidCatalog(_))
        ));

        let mut catalog = PermissionCatalog::default();
        catalog.read_only.insert(PermissionId::from("REPORTS_VIEW"));
        assert!(matches!(
            catalog.check_invariants(),
            Err(AuthError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn unknown_superuser_is_reported() {
        let mut catalog = PermissionCatalog::default();
        catalog.superuser = PermissionId::from("ROOT");
        let err = catalog.check_invariants().unwrap_err();
        assert!(matches!(err, AuthError::InvalidCatalog(_)));
        assert!(err.to_string().contains("ROOT"), "got: {err}");
    }
}
