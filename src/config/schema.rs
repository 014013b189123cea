//! Manifest schema definitions.
//!
//! These structs map to the YAML command manifest:
//!
//! ```yaml
//! settings:
//!   env:
//!     APP_ENV: local
//! commands:
//!   - name: db:seed
//!     description: Seed database
//!     run: ./bin/seed ${class}
//!     arguments:
//!       - name: class
//!         description: Seeder class to run
//!         default: DatabaseSeeder
//!     options:
//!       - name: force
//!         shortcut: f
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::registry::{ArgumentDefinition, ArgumentMode, CommandDefinition, OptionDefinition};

/// Root of a command manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Settings shared by every command.
    pub settings: Settings,

    /// Command definitions, in listing order.
    pub commands: Vec<CommandConfig>,
}

/// Settings shared by every command.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Environment variables exported to every command.
    pub env: HashMap<String, String>,
}

/// A single command entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandConfig {
    /// Full name, e.g. `db:seed`.
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Shell line to run; `${argument}` placeholders are interpolated.
    pub run: String,

    /// Working directory, relative to the manifest's directory.
    #[serde(default)]
    pub working_directory: Option<PathBuf>,

    /// Extra environment variables for this command.
    #[serde(default)]
    pub env: HashMap<String, String>,

    #[serde(default)]
    pub arguments: Vec<ArgumentConfig>,

    #[serde(default)]
    pub options: Vec<OptionConfig>,
}

/// A positional argument entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ArgumentConfig {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub default: Option<String>,
}

/// An option entry.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionConfig {
    pub name: String,

    #[serde(default)]
    pub shortcut: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Whether the option takes a value (`--queue=emails`) rather than being a flag.
    #[serde(default)]
    pub value: bool,
}

impl From<&ArgumentConfig> for ArgumentDefinition {
    fn from(config: &ArgumentConfig) -> Self {
        Self {
            name: config.name.clone(),
            mode: if config.required {
                ArgumentMode::Required
            } else {
                ArgumentMode::Optional
            },
            description: config.description.clone(),
            default: config.default.clone(),
        }
    }
}

impl From<&OptionConfig> for OptionDefinition {
    fn from(config: &OptionConfig) -> Self {
        Self {
            name: config.name.clone(),
            shortcut: config.shortcut.clone(),
            description: config.description.clone(),
            accepts_value: config.value,
        }
    }
}

impl From<&CommandConfig> for CommandDefinition {
    fn from(config: &CommandConfig) -> Self {
        Self {
            name: config.name.clone(),
            description: config.description.clone(),
            arguments: config.arguments.iter().map(Into::into).collect(),
            options: config.options.iter().map(Into::into).collect(),
        }
    }
}
