//! Shell command execution for manifest commands.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult};
pub use platform::{detect_shell, is_ci, ShellInfo, ShellType};
