//! List command implementation.
//!
//! The `cmdmenu list` command prints every command, grouped the same way
//! the interactive menu groups them.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::error::{MenuError, Result};
use crate::registry::CommandRegistry;
use crate::selector::{group_commands, CommandDescriptor};
use crate::ui::{MenuTheme, UserInterface};

use super::dispatcher::{load_registry, Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: None,
            args,
        }
    }

    /// Use an explicit manifest path.
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = load_registry(&self.project_root, self.config.as_deref())?;
        let grouped = group_commands(
            registry
                .all()?
                .into_iter()
                .map(CommandDescriptor::from),
        );

        if grouped.is_empty() {
            ui.warning("No commands defined in the manifest.");
            return Ok(CommandResult::success());
        }

        if let Some(group) = &self.args.group {
            if grouped.commands(group).is_none() {
                return Err(MenuError::EmptyGroup {
                    group: group.clone(),
                });
            }
        }

        let theme = MenuTheme::detect();
        let width = grouped
            .iter()
            .flat_map(|(_, commands)| commands.iter())
            .map(|c| c.full_name.chars().count())
            .max()
            .unwrap_or(0);

        let mut first = true;
        for (group, commands) in grouped.iter() {
            if self.args.group.as_deref().is_some_and(|g| g != group) {
                continue;
            }

            if !first {
                ui.message("");
            }
            first = false;

            ui.message(&format!("{}", theme.highlight.apply_to(group)));
            for command in commands {
                let name = format!("{:<width$}", command.full_name, width = width);
                ui.message(&format!(
                    "  {}  {}",
                    theme.command.apply_to(name),
                    theme.dim.apply_to(&command.description)
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
