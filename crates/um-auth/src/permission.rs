use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Symbolic name of an authorizable action, e.g. `USERS_SEARCH`.
///
/// Identifiers are case-sensitive and compared by value. The constants on
/// this type cover only the well-known vocabulary; any other identifier the
/// surrounding services define is equally valid, so never treat a failed
/// lookup in [`PERMISSIONS`] as a malformed permission.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PermissionId(Cow<'static, str>);

macro_rules! well_known_permissions {
    ($($name:ident => $desc:literal,)+) => {
        impl PermissionId {
            $(
                pub const $name: PermissionId = PermissionId(Cow::Borrowed(stringify!($name)));
            )+
        }

        /// Well-known permission identifiers with a short description each.
        pub const PERMISSIONS: &[(&str, &str)] = &[
            $((stringify!($name), $desc),)+
        ];
    };
}

well_known_permissions! {
    SUPERUSER => "Automatically grants every permission",
    USERS_GET_DETAILS => "View a user's details",
    USERS_SEARCH => "Search users",
    USERS_CREATE => "Create users",
    USERS_UPDATE => "Update users",
    USERS_DELETE => "Delete users",
    USERS_ACTIVATE => "Activate users",
    USERS_DEACTIVATE => "Deactivate users",
    GROUPS_GET_DETAILS => "View a group's details",
    GROUPS_SEARCH => "Search groups",
    GROUPS_CREATE => "Create groups",
    GROUPS_UPDATE => "Update groups",
    GROUPS_DELETE => "Delete groups",
    ORGS_GET_DETAILS => "View an organization's details",
    ORGS_SEARCH => "Search organizations",
    ORGS_CREATE => "Create organizations",
    ORGS_UPDATE => "Update organizations",
    ORGS_DELETE => "Delete organizations",
    APPS_GET_DETAILS => "View an application's details",
    APPS_SEARCH => "Search applications",
    APPS_CREATE => "Register applications",
    APPS_UPDATE => "Update applications",
    APPS_DELETE => "Delete applications",
    APPS_REGENERATE => "Regenerate an application's client secret",
    APPS_CLIENT_SECRET_GET_DETAILS => "Read an application's client secret",
    FILTERS_GET_DETAILS => "View a data filter's details",
    FILTERS_SEARCH => "Search data filters",
    FILTERS_CREATE => "Create data filters",
    FILTERS_UPDATE => "Update data filters",
    FILTERS_DELETE => "Delete data filters",
    SAML_PROVIDERS_GET_DETAILS => "View a SAML provider's details",
    SAML_PROVIDERS_SEARCH => "Search SAML providers",
    SAML_PROVIDERS_CREATE => "Register SAML providers",
    SAML_PROVIDERS_UPDATE => "Update SAML providers",
    SAML_PROVIDERS_DELETE => "Delete SAML providers",
}

/// Well-known permissions that only query state.
pub const READ_ONLY_PERMISSIONS: &[&str] = &[
    "USERS_GET_DETAILS",
    "USERS_SEARCH",
    "GROUPS_GET_DETAILS",
    "GROUPS_SEARCH",
    "ORGS_GET_DETAILS",
    "ORGS_SEARCH",
    "APPS_GET_DETAILS",
    "APPS_SEARCH",
    "FILTERS_GET_DETAILS",
    "FILTERS_SEARCH",
    "SAML_PROVIDERS_GET_DETAILS",
    "SAML_PROVIDERS_SEARCH",
];

impl PermissionId {
    /// Parse an identifier supplied from outside the process.
    ///
    /// Rejects empty names and names containing whitespace. Anything else is
    /// accepted, whether or not it is part of the well-known vocabulary.
    pub fn parse(name: &str) -> Result<Self, AuthError> {
        if name.is_empty() {
            return Err(AuthError::InvalidInput(
                "empty permission identifier".into(),
            ));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(AuthError::InvalidInput(format!(
                "permission identifier contains whitespace: {name:?}"
            )));
        }
        Ok(Self(Cow::Owned(name.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl std::str::FromStr for PermissionId {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&'static str> for PermissionId {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl TryFrom<String> for PermissionId {
    type Error = AuthError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::parse(&name)
    }
}

impl From<PermissionId> for String {
    fn from(id: PermissionId) -> Self {
        id.0.into_owned()
    }
}
