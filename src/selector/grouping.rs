//! Grouping of command names by their prefix.

use std::collections::BTreeMap;

use crate::registry::CommandSummary;

/// Separator between a command's group and its subcommand.
pub const SEPARATOR: char = ':';

/// A discovered command, split into group and subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub full_name: String,
    pub group: String,
    /// Empty when the name has no separator.
    pub subcommand: String,
    pub description: String,
}

impl CommandDescriptor {
    pub fn new(name: &str, description: &str) -> Self {
        let (group, subcommand) = split_name(name);
        Self {
            full_name: name.to_string(),
            group: group.to_string(),
            subcommand: subcommand.to_string(),
            description: description.to_string(),
        }
    }

    /// Signature rebuilt from group and subcommand.
    pub fn signature(&self) -> String {
        build_signature(&self.group, &self.subcommand)
    }

    /// Label shown in the command menu.
    ///
    /// A command without subcommand is labelled by its description alone.
    pub fn label(&self, key_width: usize) -> String {
        match (self.subcommand.is_empty(), self.description.is_empty()) {
            (true, true) => self.group.clone(),
            (true, false) => self.description.clone(),
            (false, true) => self.subcommand.clone(),
            (false, false) => format!(
                "{:<width$}  {}",
                self.subcommand,
                self.description,
                width = key_width
            ),
        }
    }
}

impl From<CommandSummary> for CommandDescriptor {
    fn from(summary: CommandSummary) -> Self {
        Self::new(&summary.name, &summary.description)
    }
}

/// Split a command name on the first separator.
///
/// Returns `(group, subcommand)`; the subcommand is empty when there is no separator.
pub fn split_name(name: &str) -> (&str, &str) {
    name.split_once(SEPARATOR).unwrap_or((name, ""))
}

/// Build the signature used to invoke a command.
pub fn build_signature(group: &str, subcommand: &str) -> String {
    if subcommand.is_empty() {
        group.to_string()
    } else {
        format!("{group}{SEPARATOR}{subcommand}")
    }
}

/// Commands partitioned by group, iterated in ascending group order.
///
/// Commands inside a group keep their discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedCommands {
    groups: BTreeMap<String, Vec<CommandDescriptor>>,
}

impl GroupedCommands {
    /// Group names, sorted ascending.
    pub fn group_names(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// Commands in `group`, in discovery order.
    pub fn commands(&self, group: &str) -> Option<&[CommandDescriptor]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// `(subcommand, description)` pairs offered for `group`.
    pub fn choices(&self, group: &str) -> Option<Vec<(&str, &str)>> {
        self.commands(group).map(|commands| {
            commands
                .iter()
                .map(|c| (c.subcommand.as_str(), c.description.as_str()))
                .collect()
        })
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CommandDescriptor])> {
        self.groups
            .iter()
            .map(|(group, commands)| (group.as_str(), commands.as_slice()))
    }
}

/// Partition commands by group.
pub fn group_commands(commands: impl IntoIterator<Item = CommandDescriptor>) -> GroupedCommands {
    let mut groups: BTreeMap<String, Vec<CommandDescriptor>> = BTreeMap::new();
    for command in commands {
        groups
            .entry(command.group.clone())
            .or_default()
            .push(command);
    }
    GroupedCommands { groups }
}
