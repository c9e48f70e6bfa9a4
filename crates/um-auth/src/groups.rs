use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};
use crate::evaluator::GrantedPermissionSet;
use crate::permission::PermissionId;

pub const SUPERUSER_GROUP_ID: &str = "groups_superuser";
pub const READ_ONLY_UM_GROUP_ID: &str = "groups_read_only_um";

const SUPERUSER_GROUP_DESCRIPTION: &str =
    "Grants all permissions inside of user's organization and its sub-organizations";

const READ_ONLY_UM_PERMISSIONS: &[PermissionId] = &[
    PermissionId::USERS_GET_DETAILS,
    PermissionId::USERS_SEARCH,
    PermissionId::GROUPS_GET_DETAILS,
    PermissionId::GROUPS_SEARCH,
    PermissionId::ORGS_GET_DETAILS,
    PermissionId::ORGS_SEARCH,
    PermissionId::APPS_GET_DETAILS,
    PermissionId::APPS_SEARCH,
];

/// A named bundle of permissions a principal can be a member of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub grants_permissions: Vec<PermissionId>,
}

/// Groups every deployment starts with.
pub fn default_groups() -> Vec<GroupDefinition> {
    vec![
        GroupDefinition {
            id: SUPERUSER_GROUP_ID.to_string(),
            name: "Superusers".to_string(),
            description: SUPERUSER_GROUP_DESCRIPTION.to_string(),
            grants_permissions: vec![PermissionId::SUPERUSER],
        },
        GroupDefinition {
            id: READ_ONLY_UM_GROUP_ID.to_string(),
            name: "Read-only UM".to_string(),
            description: "Grants all known read-only permissions for user management"
                .to_string(),
            grants_permissions: READ_ONLY_UM_PERMISSIONS.to_vec(),
        },
    ]
}

/// Union of the permissions granted by each of `group_ids`.
///
/// Groups do not inherit from each other; membership in an unlisted group
/// is an error rather than an empty grant.
pub fn resolve_grants<S: AsRef<str>>(
    groups: &[GroupDefinition],
    group_ids: &[S],
) -> Result<GrantedPermissionSet> {
    let mut granted = GrantedPermissionSet::new();
    for gid in group_ids {
        let gid = gid.as_ref();
        let group = groups
            .iter()
            .find(|g| g.id == gid)
            .ok_or_else(|| AuthError::NotFound(format!("group {gid}")))?;
        granted.extend(group.grants_permissions.iter().cloned());
    }
    Ok(granted)
}
