use anyhow::Result;

use um_auth::{PermissionCatalog, PermissionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Superuser,
    ReadOnly,
    Mutating,
}

impl Flag {
    pub fn as_str(self) -> &'static str {
        match self {
            Flag::Superuser => "superuser",
            Flag::ReadOnly => "read-only",
            Flag::Mutating => "mutating",
        }
    }
}

/// One line of the permission listing.
#[derive(Debug)]
pub struct Row<'a> {
    pub id: &'a PermissionId,
    pub flag: Flag,
    pub description: &'static str,
}

pub fn rows(catalog: &PermissionCatalog, only_read_only: bool) -> Vec<Row<'_>> {
    catalog
        .known_permissions()
        .filter_map(|id| {
            let flag = if id == catalog.superuser_permission() {
                Flag::Superuser
            } else if catalog.read_only_permissions().contains(id) {
                Flag::ReadOnly
            } else {
                Flag::Mutating
            };
            if only_read_only && flag != Flag::ReadOnly {
                return None;
            }
            Some(Row {
                id,
                flag,
                description: catalog.describe(id).unwrap_or_default(),
            })
        })
        .collect()
}

pub fn run(only_read_only: bool) -> Result<()> {
    let catalog = PermissionCatalog::default();

    for row in rows(&catalog, only_read_only) {
        println!(
            "  {:<32} {:<10} {}",
            row.id,
            row.flag.as_str(),
            row.description
        );
    }

    Ok(())
}
