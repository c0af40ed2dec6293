//! Loading of already-extracted configuration files.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Raw configuration files keyed by filename.
///
/// Ordered by filename, so every pass over the files sees them in the same order.
pub type Contents = BTreeMap<String, Vec<u8>>;

/// Reads every regular file directly inside `dir`.
///
/// Subdirectories are not descended into. Files whose name is not valid UTF-8
/// are skipped.
///
/// # Errors
///
/// Returns an error if the directory or one of its files cannot be read.
pub async fn load_contents(dir: &Path) -> Result<Contents> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut contents = Contents::new();
    while let Some(entry) = entries.next_entry().await? {
        let file_type = entry.file_type().await?;
        if !file_type.is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            log::debug!("Skipping file with non UTF-8 name in {}", dir.display());
            continue;
        };
        let content = tokio::fs::read(entry.path())
            .await
            .with_context(|| format!("Failed to read {}", entry.path().display()))?;
        contents.insert(name, content);
    }

    Ok(contents)
}
