//! Error types for cmdmenu operations.
//!
//! This module defines [`MenuError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MenuError` for failures the flow or the host needs to distinguish
//! - Use `anyhow::Error` (via `MenuError::Other`) for unexpected errors
//! - Malformed option tokens never reach this type; they are skipped

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cmdmenu operations.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The command registry could not be reached or loaded.
    #[error("Command registry unavailable: {message}")]
    HostUnavailable { message: String },

    /// The registry holds no commands, so there is nothing to pick from.
    #[error("No commands are registered")]
    NoCommands,

    /// A signature built from the menus does not resolve in the registry.
    #[error("Unknown command: {signature}")]
    UnknownCommand { signature: String },

    /// A group was offered with no commands in it.
    #[error("Command group '{group}' has no commands")]
    EmptyGroup { group: String },

    /// The prompt returned a value outside the offered choices.
    #[error("'{choice}' is not one of the offered choices")]
    InvalidSelection { choice: String },

    /// Manifest file not found at the expected location.
    #[error("Manifest not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Manifest parsed but its contents are inconsistent.
    #[error("Invalid manifest: {message}")]
    ConfigValidationError { message: String },

    /// A required argument had no value and no default.
    #[error("Not enough arguments for '{command}' (missing: \"{argument}\")")]
    MissingArgument { command: String, argument: String },

    /// A parameter named an option the command does not declare.
    #[error("The \"--{option}\" option does not exist on '{command}'")]
    UnknownOption { command: String, option: String },

    /// The shell could not be started for a command line.
    #[error("Could not start shell for '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MenuError {
    /// Whether the error means the host registry itself is out of reach.
    pub fn is_host_unavailable(&self) -> bool {
        matches!(
            self,
            Self::HostUnavailable { .. } | Self::ConfigNotFound { .. } | Self::ConfigParseError { .. }
        )
    }
}

/// Result type alias for cmdmenu operations.
pub type Result<T> = std::result::Result<T, MenuError>;
