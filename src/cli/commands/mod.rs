//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running without a subcommand
//! opens the interactive menu ([`menu::MenuCommand`]).

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod menu;

pub use dispatcher::{load_registry, Command, CommandDispatcher, CommandResult};
