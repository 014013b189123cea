//! Command registry abstraction.
//!
//! The interactive flow never executes anything itself. It talks to a
//! [`CommandRegistry`], which owns the command table and knows how to run
//! an entry from it:
//!
//! - [`ManifestRegistry`] - commands declared in a YAML manifest, run through the shell
//! - [`MockRegistry`] - in-memory registry that records calls, for tests
//!
//! # Example
//!
//! ```
//! use cmdmenu::registry::{CommandDefinition, CommandRegistry, MockRegistry, Parameters};
//!
//! let mut registry = MockRegistry::new()
//!     .with_command(CommandDefinition::new("cache:clear", "Clear cache"));
//!
//! let code = registry.call("cache:clear", &Parameters::new()).unwrap();
//! assert_eq!(code, 0);
//! assert_eq!(registry.calls()[0].0, "cache:clear");
//! ```

pub mod manifest;
pub mod mock;

pub use manifest::ManifestRegistry;
pub use mock::MockRegistry;

use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;

/// Name and description of a registered command, as listed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub name: String,
    pub description: String,
}

impl CommandSummary {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Whether an argument must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgumentMode {
    Required,
    #[default]
    Optional,
}

/// A positional argument declared by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDefinition {
    /// Identifier used as the parameter key.
    pub name: String,
    /// Required or optional.
    pub mode: ArgumentMode,
    /// Human-readable description, used as the prompt question.
    pub description: String,
    /// Value used when the caller leaves the argument out.
    pub default: Option<String>,
}

impl ArgumentDefinition {
    pub fn new(name: impl Into<String>, mode: ArgumentMode, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode,
            description: description.into(),
            default: None,
        }
    }

    /// Question to show when asking for this argument.
    ///
    /// Falls back to the argument name when no description was declared.
    pub fn question(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}

/// An option (`--name` / `--name=value`) declared by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    pub name: String,
    /// Single-letter alias, e.g. `m` for `-m`.
    pub shortcut: Option<String>,
    pub description: String,
    /// `true` if the option takes a value, `false` for a plain flag.
    pub accepts_value: bool,
}

impl OptionDefinition {
    /// Check whether `key` names this option, by full name or shortcut.
    pub fn matches(&self, key: &str) -> bool {
        self.name == key || self.shortcut.as_deref() == Some(key)
    }
}

/// Full definition of a command, resolved by signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    /// Arguments in declaration order.
    pub arguments: Vec<ArgumentDefinition>,
    pub options: Vec<OptionDefinition>,
}

impl CommandDefinition {
    /// Create a definition with no arguments or options.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            arguments: Vec::new(),
            options: Vec::new(),
        }
    }

    pub fn with_argument(mut self, argument: ArgumentDefinition) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_option(mut self, option: OptionDefinition) -> Self {
        self.options.push(option);
        self
    }

    /// Find a declared option by name or shortcut.
    pub fn option(&self, key: &str) -> Option<&OptionDefinition> {
        self.options.iter().find(|o| o.matches(key))
    }

    pub fn summary(&self) -> CommandSummary {
        CommandSummary::new(&self.name, &self.description)
    }
}

/// Value of a parameter passed to [`CommandRegistry::call`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    /// Explicit value (`name=value`, or an argument answer).
    Value(String),
    /// Option given without a value, i.e. `true`.
    Flag,
}

impl ParameterValue {
    /// Get the explicit value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            Self::Flag => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(v),
            Self::Flag => f.write_str("true"),
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

/// Parameter mapping handed to the host, keyed by argument or option name.
pub type Parameters = BTreeMap<String, ParameterValue>;

/// Host command registry.
///
/// Implementations expose the command table and the invocation entry point.
pub trait CommandRegistry {
    /// List every registered command, in registration order.
    ///
    /// Fails with `HostUnavailable` if the registry cannot be read.
    fn all(&self) -> Result<Vec<CommandSummary>>;

    /// Resolve a command definition by its full signature.
    fn find(&self, signature: &str) -> Option<CommandDefinition>;

    /// Invoke a command, returning its exit code.
    fn call(&mut self, signature: &str, parameters: &Parameters) -> Result<i32>;
}
