pub mod check;
pub mod classify;
pub mod groups;
pub mod init;
pub mod permissions;

use std::path::Path;

use um_auth::AccessConfig;

/// Load the config if present, falling back to the built-in defaults.
pub fn load_or_default(base_dir: &Path) -> anyhow::Result<AccessConfig> {
    let config_path = AccessConfig::default_path(base_dir);
    if config_path.exists() {
        Ok(AccessConfig::load(&config_path)?)
    } else {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        Ok(AccessConfig::default_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn allowed(dir: &Path, required: &str, p: &str) -> bool {
        check::run(dir, required, &[], &[], Some(p)).is_ok()
    }

    fn decide(dir: &Path, required: &str, grants: &[String], groups: &[String]) -> bool {
        check::run(dir, required, grants, groups, None).is_ok()
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_or_default(tmp.path()).unwrap();
        assert_eq!(config.groups.len(), 2);
    }

    #[test]
    fn init_then_check_principal() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        init::run(dir).unwrap();
        assert!(init::run(dir).is_err());

        assert!(allowed(dir, "SAML_PROVIDERS_DELETE", "root"));
        assert!(allowed(dir, "USERS_SEARCH", "deepcortex"));
        assert!(!allowed(dir, "USERS_DELETE", "deepcortex"));
        assert!(!allowed(dir, "USERS_SEARCH", "nobody"));
    }

    #[test]
    fn check_with_direct_grants_and_groups() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        let grants = ["REPORTS_EXPORT".to_string()];
        assert!(decide(dir, "REPORTS_EXPORT", &grants, &[]));
        assert!(!decide(dir, "ORGS_CREATE", &grants, &[]));

        let groups = ["groups_read_only_um".to_string()];
        let missing = ["groups_missing".to_string()];
        assert!(decide(dir, "ORGS_SEARCH", &[], &groups));
        assert!(!decide(dir, "ORGS_SEARCH", &[], &missing));
    }

    #[test]
    fn check_rejects_malformed_grant() {
        let tmp = TempDir::new().unwrap();
        let grants = ["USERS SEARCH".to_string()];
        assert!(!decide(tmp.path(), "USERS_SEARCH", &grants, &[]));
    }

    #[test]
    fn classify_rejects_unknown() {
        classify::run("USERS_SEARCH").unwrap();
        assert!(classify::run("REPORTS_EXPORT").is_err());
        assert!(classify::run("").is_err());
    }

    #[test]
    fn groups_listing_with_and_without_config() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        groups::run(dir).unwrap();

        AccessConfig::default()
            .save(&AccessConfig::default_path(dir))
            .unwrap();
        assert!(load_or_default(dir).unwrap().groups.is_empty());
        groups::run(dir).unwrap();
    }

    #[test]
    fn groups_listing_rejects_broken_config() {
        let tmp = TempDir::new().unwrap();
        let path = AccessConfig::default_path(tmp.path());
        let dangling = "[[principals]]\nname = \"x\"\ngroups = [\"nope\"]\n";
        std::fs::write(&path, dangling).unwrap();
        assert!(groups::run(tmp.path()).is_err());
    }
}
