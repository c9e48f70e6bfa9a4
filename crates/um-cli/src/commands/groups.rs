use anyhow::Result;
use std::path::Path;

pub fn run(base_dir: &Path) -> Result<()> {
    let config = super::load_or_default(base_dir)?;

    if config.groups.is_empty() {
        println!("No groups configured.");
        return Ok(());
    }

    println!("Groups ({}):", config.groups.len());
    for g in &config.groups {
        println!("  - {} ({})", g.name, g.id);
        if !g.description.is_empty() {
            println!("    {}", g.description);
        }
        for p in &g.grants_permissions {
            println!("    * {p}");
        }
    }
    Ok(())
}
