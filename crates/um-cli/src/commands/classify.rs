use anyhow::Result;

use um_auth::{PermissionCatalog, PermissionId};

pub fn run(permission: &str) -> Result<()> {
    let catalog = PermissionCatalog::default();
    let id = PermissionId::parse(permission)?;

    if catalog.is_read_only(&id)? {
        println!("{id}: read-only");
    } else {
        println!("{id}: mutating");
    }
    Ok(())
}
