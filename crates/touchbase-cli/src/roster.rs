//! Contacts file I/O and lookup.
//!
//! The roster is a JSON array of contacts. The engine itself never reads
//! it; commands load the whole file, hand the records to the engine, and
//! write back full snapshots.

use std::error::Error;
use std::path::{Path, PathBuf};

use touchbase_core::Contact;

use crate::config::Config;

/// Resolve the roster path from `--file` or configuration.
pub fn resolve_path(file: Option<PathBuf>) -> Result<PathBuf, Box<dyn Error>> {
    match file {
        Some(path) => Ok(path),
        None => Config::load_or_default().contacts_path(),
    }
}

/// Load all contacts; a missing file is an empty roster.
pub fn load(path: &Path) -> Result<Vec<Contact>, Box<dyn Error>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Persist the full roster.
pub fn save(path: &Path, contacts: &[Contact]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(contacts)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Find a contact by exact id, case-insensitive name, or id prefix.
pub fn find_index(contacts: &[Contact], query: &str) -> Option<usize> {
    contacts
        .iter()
        .position(|c| c.id == query)
        .or_else(|| {
            contacts
                .iter()
                .position(|c| c.name.eq_ignore_ascii_case(query))
        })
        .or_else(|| contacts.iter().position(|c| c.id.starts_with(query)))
}

/// Reference variant of [`find_index`].
pub fn find<'a>(contacts: &'a [Contact], query: &str) -> Option<&'a Contact> {
    find_index(contacts, query).map(|i| &contacts[i])
}
