use anyhow::Result;

use boilerkit_core::boilerplate;

/// Print the default boilerplate destination path.
pub fn run() -> Result<()> {
    let path = boilerplate::default_path()?;
    println!("{}", path.display());
    Ok(())
}
