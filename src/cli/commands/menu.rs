//! Interactive menu command.
//!
//! Running `cmdmenu` without a subcommand loads the manifest and walks the
//! group → command → arguments → options flow.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::selector::InteractiveSelector;
use crate::ui::UserInterface;

use super::dispatcher::{load_registry, Command, CommandResult};

/// The interactive menu implementation.
pub struct MenuCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
}

impl MenuCommand {
    /// Create a new menu command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: None,
        }
    }

    /// Use an explicit manifest path.
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }
}

impl Command for MenuCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = load_registry(&self.project_root, self.config.as_deref())?;

        let mut selector = InteractiveSelector::new(registry);
        let code = selector.run(ui)?;

        tracing::debug!("Command finished with exit code {}", code);
        Ok(CommandResult::from_exit_code(code))
    }
}
