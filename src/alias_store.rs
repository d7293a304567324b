//! Reading and writing the persisted alias file.

use std::{
    collections::{BTreeMap, BTreeSet},
    io::ErrorKind,
    path::Path,
};

use log::{info, warn};

/// Canonical name to every alternate string that should resolve to it.
pub type AliasMap = BTreeMap<String, BTreeSet<String>>;

/// Root document of `media-aliases.json`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AliasFile {
    #[serde(default)]
    pub aliases: AliasMap,
}

/// Reads the alias map at `path`. A missing, unreadable or malformed file yields
/// an empty map so the run can continue.
pub fn load_alias_file(path: &Path) -> AliasMap {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "Alias file {} not found. Starting with empty existing aliases.",
                path.display()
            );
            return AliasMap::new();
        }
        Err(err) => {
            warn!(
                "Failed to read alias file {}. Starting with empty existing aliases. error={}",
                path.display(),
                err
            );
            return AliasMap::new();
        }
    };

    match serde_json::from_str::<AliasFile>(&content) {
        Ok(alias_file) => alias_file.aliases,
        Err(err) => {
            warn!(
                "Error decoding JSON from {}. Starting with empty existing aliases. error={}",
                path.display(),
                err
            );
            AliasMap::new()
        }
    }
}

/// Serializes `aliases` to `path`, creating the parent directory first.
/// Alias lists come out sorted and non-ASCII text is written as-is.
pub fn write_alias_file(path: &Path, aliases: &AliasMap) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| {
            format!(
                "failed to create alias directory {}: {}",
                parent.display(),
                err
            )
        })?;
    }

    let document = AliasFile {
        aliases: aliases.clone(),
    };
    let text = serde_json::to_string_pretty(&document)
        .map_err(|err| format!("failed to serialize aliases: {}", err))?;

    std::fs::write(path, text)
        .map_err(|err| format!("failed to write alias file {}: {}", path.display(), err))
}
