use anyhow::{Result, bail};
use std::path::Path;

use um_auth::{
    AuthorizationEvaluator, Decision, GrantedPermissionSet, PermissionCatalog, PermissionId,
    resolve_grants,
};

pub fn run(
    base_dir: &Path,
    required: &str,
    grants: &[String],
    groups: &[String],
    principal: Option<&str>,
) -> Result<()> {
    let catalog = PermissionCatalog::default();
    let required = PermissionId::parse(required)?;

    let mut granted = grants
        .iter()
        .map(|g| PermissionId::parse(g))
        .collect::<Result<GrantedPermissionSet, _>>()?;

    if !groups.is_empty() || principal.is_some() {
        let config = super::load_or_default(base_dir)?;
        let from_groups = resolve_grants(&config.groups, groups)?;
        granted.extend(from_groups.iter().cloned());
        if let Some(name) = principal {
            granted.extend(config.granted_for(name)?.iter().cloned());
        }
    }

    if !catalog.is_known(&required) {
        tracing::info!(%required, "required permission is outside the well-known vocabulary");
    }

    let eval = AuthorizationEvaluator::new(&catalog);
    let decision = eval.authorize(&granted, &required);
    println!("{required}: {decision}");

    if decision == Decision::Deny {
        bail!("access denied");
    }
    Ok(())
}
