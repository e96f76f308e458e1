use crate::error::LookupError;
use crate::model::Lookup;
use log::info;
use std::fs;
use std::path::Path;

/// Write `{"entries": {...}}` pretty-printed with two-space indentation.
pub fn write_lookup(path: &Path, lookup: &Lookup) -> Result<(), LookupError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(lookup)?;
    fs::write(path, json)?;

    info!("Wrote {} entries to {}", lookup.len(), path.display());
    Ok(())
}
