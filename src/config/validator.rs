//! Manifest validation rules.
//!
//! This module validates a manifest for consistency:
//! - Command names must be non-empty, unique and not end with `:`
//! - Argument names must be non-empty and unique within a command, also
//!   once folded into their `CMDMENU_PROMPT_ARG_*` variable
//! - Option names and shortcuts must not collide within a command

use crate::config::schema::{CommandConfig, Manifest};
use crate::error::{MenuError, Result};
use crate::selector::{argument_prompt_key, SEPARATOR};
use crate::ui::non_interactive::prompt_env_key;
use std::collections::{HashMap, HashSet};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Command name if error is command-specific
    pub command: Option<String>,
}

impl ValidationError {
    fn for_command(rule: &str, command: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            command: Some(command.to_string()),
        }
    }
}

/// Validate a manifest and return all errors.
///
/// Collects every error rather than stopping at the first one.
pub fn validate_manifest(manifest: &Manifest) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for command in &manifest.commands {
        if command.name.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-name".to_string(),
                message: "Command name must not be empty".to_string(),
                command: None,
            });
            continue;
        }

        // `db:` would rebuild to the signature `db` and never resolve.
        if command.name.ends_with(SEPARATOR) {
            errors.push(ValidationError::for_command(
                "trailing-separator",
                &command.name,
                format!(
                    "Command '{}' must not end with '{}'",
                    command.name, SEPARATOR
                ),
            ));
        }

        if !seen.insert(command.name.as_str()) {
            errors.push(ValidationError::for_command(
                "duplicate-command",
                &command.name,
                format!("Command '{}' is declared more than once", command.name),
            ));
        }

        errors.extend(validate_arguments(command));
        errors.extend(validate_options(command));
    }

    errors
}

fn validate_arguments(command: &CommandConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut env_keys: HashMap<String, &str> = HashMap::new();

    for argument in &command.arguments {
        if argument.name.trim().is_empty() {
            errors.push(ValidationError::for_command(
                "empty-argument",
                &command.name,
                format!("Command '{}' declares an argument without a name", command.name),
            ));
        } else if !seen.insert(argument.name.as_str()) {
            errors.push(ValidationError::for_command(
                "duplicate-argument",
                &command.name,
                format!(
                    "Command '{}' declares argument '{}' more than once",
                    command.name, argument.name
                ),
            ));
        } else if let Some(other) = env_keys.insert(
            prompt_env_key(&argument_prompt_key(&argument.name)),
            &argument.name,
        ) {
            errors.push(ValidationError::for_command(
                "ambiguous-argument",
                &command.name,
                format!(
                    "Command '{}' declares arguments '{}' and '{}' that read the same prompt variable",
                    command.name, other, argument.name
                ),
            ));
        }
    }

    errors
}

fn validate_options(command: &CommandConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for option in &command.options {
        let keys = std::iter::once(option.name.as_str()).chain(option.shortcut.as_deref());
        for key in keys {
            if key.trim().is_empty() || key.starts_with('-') {
                errors.push(ValidationError::for_command(
                    "invalid-option",
                    &command.name,
                    format!(
                        "Command '{}' declares an invalid option name '{}'",
                        command.name, key
                    ),
                ));
            } else if !seen.insert(key) {
                errors.push(ValidationError::for_command(
                    "duplicate-option",
                    &command.name,
                    format!(
                        "Command '{}' declares option '{}' more than once",
                        command.name, key
                    ),
                ));
            }
        }
    }

    errors
}

/// Validate and return a single error joining all messages.
pub fn validate(manifest: &Manifest) -> Result<()> {
    let errors = validate_manifest(manifest);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(MenuError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
