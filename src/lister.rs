use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::config::Config;
use crate::fs::FileSystem;

/// Prefix printed before every listed entry.
pub const BRANCH_MARKER: &str = "├── ";

const WRITE_FAILED: &str = "failed to write listing";

/// Print the direct children of the configured scenes folder under
/// `working_dir`.
///
/// A missing folder is reported on `out` and is not an error. Entries are
/// printed in the order the filesystem yields them; directories get a
/// trailing `/`.
pub fn list_scenes<F, W>(
    fs: &F,
    working_dir: &Path,
    config: &Config,
    out: &mut W,
) -> anyhow::Result<()>
where
    F: FileSystem + ?Sized,
    W: Write + ?Sized,
{
    let target = config.resolve(working_dir);
    let display = config.display_path();
    log::debug!("listing {}", target.display());

    if !fs.exists(&target) {
        log::debug!("{} does not exist", target.display());
        writeln!(out, "No '{display}' folder found.").context(WRITE_FAILED)?;
        return Ok(());
    }

    writeln!(out, "{display}/").context(WRITE_FAILED)?;

    let children = fs
        .list_children(&target)
        .with_context(|| format!("failed to list `{}`", target.display()))?;
    log::debug!("{} entries in {}", children.len(), target.display());
    for child in &children {
        if child.is_directory {
            writeln!(out, "{BRANCH_MARKER}{}/", child.name).context(WRITE_FAILED)?;
        } else {
            writeln!(out, "{BRANCH_MARKER}{}", child.name).context(WRITE_FAILED)?;
        }
    }

    Ok(())
}
