//! Mock registry implementation for testing.
//!
//! `MockRegistry` implements the `CommandRegistry` trait over an in-memory
//! command table and records every call for later assertion.
//!
//! # Example
//!
//! ```
//! use cmdmenu::registry::{CommandDefinition, CommandRegistry, MockRegistry, Parameters};
//!
//! let mut registry = MockRegistry::new()
//!     .with_command(CommandDefinition::new("db:seed", "Seed database"))
//!     .with_exit_code(3);
//!
//! assert_eq!(registry.all().unwrap().len(), 1);
//! assert_eq!(registry.call("db:seed", &Parameters::new()).unwrap(), 3);
//! assert!(registry.was_called("db:seed"));
//! ```

use crate::error::{MenuError, Result};

use super::{CommandDefinition, CommandRegistry, CommandSummary, Parameters};

/// In-memory registry capturing invocations.
#[derive(Debug, Default)]
pub struct MockRegistry {
    commands: Vec<CommandDefinition>,
    calls: Vec<(String, Parameters)>,
    exit_code: i32,
    unavailable: bool,
}

impl MockRegistry {
    /// Create an empty registry whose calls succeed with exit code 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command.
    pub fn with_command(mut self, command: CommandDefinition) -> Self {
        self.commands.push(command);
        self
    }

    /// Register several `(name, description)` commands with no arguments or options.
    pub fn with_commands(mut self, commands: &[(&str, &str)]) -> Self {
        for (name, description) in commands {
            self.commands
                .push(CommandDefinition::new(*name, *description));
        }
        self
    }

    /// Exit code returned by every call.
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// Make `all()` fail as if the registry could not be reached.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Get all captured calls as (signature, parameters).
    pub fn calls(&self) -> &[(String, Parameters)] {
        &self.calls
    }

    /// Check if a signature was invoked.
    pub fn was_called(&self, signature: &str) -> bool {
        self.calls.iter().any(|(s, _)| s == signature)
    }
}

impl CommandRegistry for MockRegistry {
    fn all(&self) -> Result<Vec<CommandSummary>> {
        if self.unavailable {
            return Err(MenuError::HostUnavailable {
                message: "mock registry marked unavailable".to_string(),
            });
        }
        Ok(self.commands.iter().map(CommandDefinition::summary).collect())
    }

    fn find(&self, signature: &str) -> Option<CommandDefinition> {
        self.commands.iter().find(|c| c.name == signature).cloned()
    }

    fn call(&mut self, signature: &str, parameters: &Parameters) -> Result<i32> {
        if self.find(signature).is_none() {
            return Err(MenuError::UnknownCommand {
                signature: signature.to_string(),
            });
        }
        self.calls.push((signature.to_string(), parameters.clone()));
        Ok(self.exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ParameterValue;

    #[test]
    fn all_preserves_registration_order() {
        let registry =
            MockRegistry::new().with_commands(&[("queue:work", "Work"), ("db:seed", "Seed")]);
        let names: Vec<_> = registry.all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["queue:work", "db:seed"]);
    }

    #[test]
    fn unavailable_registry_fails_listing() {
        let registry = MockRegistry::new().unavailable();
        let err = registry.all().unwrap_err();
        assert!(matches!(err, MenuError::HostUnavailable { .. }));
    }

    #[test]
    fn call_records_parameters() {
        let mut registry = MockRegistry::new().with_commands(&[("db:seed", "Seed")]);
        let mut params = Parameters::new();
        params.insert("class".to_string(), ParameterValue::from("UserSeeder"));

        registry.call("db:seed", &params).unwrap();

        assert_eq!(registry.calls().len(), 1);
        assert_eq!(registry.calls()[0].1, params);
    }

    #[test]
    fn call_unknown_signature_fails() {
        let mut registry = MockRegistry::new();
        let err = registry.call("nope", &Parameters::new()).unwrap_err();
        assert!(matches!(err, MenuError::UnknownCommand { .. }));
        assert!(registry.calls().is_empty());
    }
}
