//! cmdmenu - Pick and run project commands from a grouped menu.
//!
//! Commands named `group:subcommand` are grouped by their prefix. The user
//! picks a group, then a command, answers one prompt per declared argument
//! and types any options on a single line; the command then runs with the
//! merged parameters and its exit code becomes cmdmenu's.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Manifest loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`registry`] - The command registry seam and its implementations
//! - [`selector`] - Grouping, option parsing, and the interactive flow
//! - [`shell`] - Shell command execution
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use cmdmenu::registry::ParameterValue;
//! use cmdmenu::selector::{build_signature, parse_options, split_name};
//!
//! assert_eq!(split_name("queue:failed:table"), ("queue", "failed:table"));
//! assert_eq!(build_signature("db", "seed"), "db:seed");
//!
//! let options = parse_options("m --queue=emails");
//! assert_eq!(options["m"], ParameterValue::Flag);
//! assert_eq!(options["queue"], ParameterValue::from("emails"));
//! ```
//!
//! For manifest-backed runs, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod selector;
pub mod shell;
pub mod ui;

pub use error::{MenuError, Result};
