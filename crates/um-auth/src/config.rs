use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};
use crate::evaluator::GrantedPermissionSet;
use crate::groups::{
    GroupDefinition, READ_ONLY_UM_GROUP_ID, SUPERUSER_GROUP_ID, default_groups, resolve_grants,
};
use crate::permission::PermissionId;

/// Group and principal assignments stored as TOML.
///
/// The permission catalog is compiled in and is not part of this file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessConfig {
    #[serde(default)]
    pub groups: Vec<GroupDefinition>,
    #[serde(default)]
    pub principals: Vec<PrincipalConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalConfig {
    pub name: String,
    /// Group ids the principal is a member of.
    #[serde(default)]
    pub groups: Vec<String>,
    /// Permissions granted directly, outside any group.
    #[serde(default)]
    pub permissions: Vec<PermissionId>,
}

impl AccessConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AuthError::ConfigNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| AuthError::TomlDe(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| AuthError::TomlSer(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default config for `um-access init`.
    pub fn default_config() -> Self {
        Self {
            groups: default_groups(),
            principals: vec![
                PrincipalConfig {
                    name: "root".to_string(),
                    groups: vec![SUPERUSER_GROUP_ID.to_string()],
                    permissions: vec![],
                },
                PrincipalConfig {
                    name: "deepcortex".to_string(),
                    groups: vec![READ_ONLY_UM_GROUP_ID.to_string()],
                    permissions: vec![],
                },
            ],
        }
    }

    /// Resolve the config file path: `<base_dir>/access.toml`
    pub fn default_path(base_dir: &Path) -> PathBuf {
        base_dir.join("access.toml")
    }

    /// Resolve the default home directory: `~/.um-access`
    pub fn default_base_dir() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|h| h.join(".um-access"))
            .ok_or_else(|| AuthError::Config("Cannot determine home directory".to_string()))
    }

    pub fn principal(&self, name: &str) -> Result<&PrincipalConfig> {
        self.principals
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| AuthError::NotFound(format!("principal {name}")))
    }

    /// Effective grants of a principal: direct permissions plus those of
    /// every group it belongs to.
    pub fn granted_for(&self, name: &str) -> Result<GrantedPermissionSet> {
        let principal = self.principal(name)?;
        let mut granted = resolve_grants(&self.groups, &principal.groups)?;
        granted.extend(principal.permissions.iter().cloned());
        Ok(granted)
    }

    fn validate(&self) -> Result<()> {
        for (i, group) in self.groups.iter().enumerate() {
            if self.groups[..i].iter().any(|g| g.id == group.id) {
                return Err(AuthError::Config(format!("duplicate group id {}", group.id)));
            }
        }
        for (i, principal) in self.principals.iter().enumerate() {
            if self.principals[..i].iter().any(|p| p.name == principal.name) {
                return Err(AuthError::Config(format!("duplicate principal {}", principal.name)));
            }
            if let Some(missing) = principal
                .groups
                .iter()
                .find(|gid| !self.groups.iter().any(|g| &g.id == *gid))
            {
                return Err(AuthError::Config(format!(
                    "principal {} references unknown group {missing}",
                    principal.name
                )));
            }
        }
        Ok(())
    }
}
