//! Manifest discovery and loading.
//!
//! This module finds the command manifest and loads it in priority order:
//!
//! 1. Explicit path (`--config` or `CMDMENU_CONFIG`)
//! 2. Nearest `.cmdmenu/commands.yml`, walking up from the working directory
//! 3. User global manifest (`~/.cmdmenu/commands.yml`)

use crate::config::schema::Manifest;
use crate::config::validator::validate;
use crate::error::{MenuError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the manifest, both per project and under the home directory.
pub const MANIFEST_DIR: &str = ".cmdmenu";

/// Manifest file name inside [`MANIFEST_DIR`].
pub const MANIFEST_FILE: &str = "commands.yml";

/// Find the project root by walking up from `start`.
///
/// The root is the first directory containing `.cmdmenu/commands.yml`.
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(MANIFEST_DIR).join(MANIFEST_FILE).is_file() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// User's global manifest at ~/.cmdmenu/commands.yml, if it exists.
pub fn find_user_global() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(MANIFEST_DIR).join(MANIFEST_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Locate the manifest to load.
///
/// An explicit path always wins, even if it does not exist, so that a
/// mistyped `--config` is reported instead of silently falling back.
pub fn discover_manifest(start: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    find_project_root(start)
        .map(|root| root.join(MANIFEST_DIR).join(MANIFEST_FILE))
        .or_else(find_user_global)
}

/// Load, parse and validate a manifest file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if the commands are inconsistent.
pub fn load_manifest_file(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MenuError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MenuError::Io(e)
        }
    })?;

    let manifest = parse_manifest(&content, path)?;
    validate(&manifest)?;

    tracing::debug!(
        "Loaded {} commands from {}",
        manifest.commands.len(),
        path.display()
    );

    Ok(manifest)
}

/// Parse YAML content into a Manifest.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    if content.trim().is_empty() {
        return Ok(Manifest::default());
    }

    serde_yaml::from_str(content).map_err(|e| MenuError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
