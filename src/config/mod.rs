//! Manifest loading, parsing, and validation.
//!
//! The shipped host registry reads its commands from a YAML manifest:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//! - `${variable}` interpolation of `run` lines in [`interpolation`]
//!
//! # Example
//!
//! ```
//! use cmdmenu::config::{load_manifest_file, MANIFEST_DIR, MANIFEST_FILE};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(MANIFEST_DIR);
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join(MANIFEST_FILE),
//!     "commands:\n  - name: cache:clear\n    run: echo cleared\n",
//! )
//! .unwrap();
//!
//! let manifest = load_manifest_file(&dir.join(MANIFEST_FILE)).unwrap();
//! assert_eq!(manifest.commands[0].name, "cache:clear");
//! ```

pub mod interpolation;
pub mod loader;
pub mod schema;
pub mod validator;

pub use interpolation::{parse_interpolation, resolve_string, InterpolationContext, Segment};
pub use loader::{
    discover_manifest, find_project_root, find_user_global, load_manifest_file, parse_manifest,
    MANIFEST_DIR, MANIFEST_FILE,
};
pub use schema::{ArgumentConfig, CommandConfig, Manifest, OptionConfig, Settings};
pub use validator::{validate, validate_manifest, ValidationError};
