//! Interactive command selection.
//!
//! [`InteractiveSelector`] walks a strictly linear flow over a
//! [`CommandRegistry`]:
//!
//! 1. list every command and split names into group and subcommand
//! 2. ask for a group, then for a command inside it
//! 3. ask for each declared argument, then for options in one line
//! 4. hand the signature and merged parameters to the registry
//!
//! # Example
//!
//! ```
//! use cmdmenu::registry::MockRegistry;
//! use cmdmenu::selector::{FlowState, InteractiveSelector};
//! use cmdmenu::ui::MockUI;
//!
//! let registry = MockRegistry::new().with_commands(&[
//!     ("db:seed", "Seed database"),
//!     ("db:wipe", "Wipe database"),
//!     ("cache:clear", "Clear cache"),
//! ]);
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("group", "db");
//! ui.set_prompt_response("command", "wipe");
//!
//! let mut selector = InteractiveSelector::new(registry);
//! let code = selector.run(&mut ui).unwrap();
//!
//! assert_eq!(code, 0);
//! assert_eq!(selector.state(), FlowState::Done);
//! assert!(selector.registry().was_called("db:wipe"));
//! ```

pub mod grouping;
pub mod invocation;
pub mod options;

pub use grouping::{
    build_signature, group_commands, split_name, CommandDescriptor, GroupedCommands, SEPARATOR,
};
pub use invocation::InvocationRequest;
pub use options::{parse_options, parse_token};

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{MenuError, Result};
use crate::registry::{CommandDefinition, CommandRegistry, OptionDefinition, Parameters};
use crate::ui::{Prompt, PromptOption, UserInterface};

/// Prompt key of the group menu.
pub const GROUP_PROMPT: &str = "group";

/// Prompt key of the command menu.
pub const COMMAND_PROMPT: &str = "command";

/// Prompt key of the options line.
pub const OPTIONS_PROMPT: &str = "options";

/// Prompt key for the argument `name`.
pub fn argument_prompt_key(name: &str) -> String {
    format!("arg_{}", name)
}

const ARGUMENTS_NOTE: &str = "The below arguments are taken from the command, they may or may not be optional depending on the command you are running.";

/// Position in the selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Start,
    Discovered,
    Grouped,
    GroupChosen,
    CommandChosen,
    ArgumentsCollected,
    OptionsCollected,
    Invoked,
    Done,
    Failed,
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Discovered => "discovered",
            Self::Grouped => "grouped",
            Self::GroupChosen => "group-chosen",
            Self::CommandChosen => "command-chosen",
            Self::ArgumentsCollected => "arguments-collected",
            Self::OptionsCollected => "options-collected",
            Self::Invoked => "invoked",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Group-then-command picker over a registry.
#[derive(Debug)]
pub struct InteractiveSelector<R> {
    registry: R,
    state: FlowState,
}

impl<R: CommandRegistry> InteractiveSelector<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            state: FlowState::Start,
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn into_registry(self) -> R {
        self.registry
    }

    /// Where the last run got to.
    pub fn state(&self) -> FlowState {
        self.state
    }

    fn advance(&mut self, next: FlowState) {
        tracing::debug!("Selector state: {} -> {}", self.state, next);
        self.state = next;
    }

    /// Run the whole flow and return the invoked command's exit code.
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> Result<i32> {
        self.state = FlowState::Start;

        match self.run_flow(ui) {
            Ok(code) => {
                self.advance(FlowState::Done);
                Ok(code)
            }
            Err(e) => {
                self.advance(FlowState::Failed);
                Err(e)
            }
        }
    }

    fn run_flow(&mut self, ui: &mut dyn UserInterface) -> Result<i32> {
        let commands = self.list_commands()?;
        self.advance(FlowState::Discovered);

        let grouped = group_commands(commands);
        self.advance(FlowState::Grouped);

        let group = ask_for_group(ui, &grouped)?;
        self.advance(FlowState::GroupChosen);

        let subcommand = ask_for_command(ui, &grouped, &group)?;
        self.advance(FlowState::CommandChosen);

        let signature = build_signature(&group, &subcommand);

        let arguments = self.collect_arguments(ui, &signature)?;
        self.advance(FlowState::ArgumentsCollected);

        let options = self.collect_options(ui, &signature)?;
        self.advance(FlowState::OptionsCollected);

        let request = InvocationRequest {
            signature,
            arguments,
            options,
        };

        if ui.output_mode().shows_details() {
            ui.message(&format!("Invoking {}", describe(&request)));
        }

        let code = self.invoke(&request)?;
        self.advance(FlowState::Invoked);

        Ok(code)
    }

    /// Every registered command, split into group and subcommand.
    pub fn list_commands(&self) -> Result<Vec<CommandDescriptor>> {
        let commands: Vec<CommandDescriptor> = self
            .registry
            .all()?
            .into_iter()
            .map(CommandDescriptor::from)
            .collect();

        if commands.is_empty() {
            return Err(MenuError::NoCommands);
        }

        tracing::debug!("Discovered {} commands", commands.len());
        Ok(commands)
    }

    fn resolve(&self, signature: &str) -> Result<CommandDefinition> {
        self.registry
            .find(signature)
            .ok_or_else(|| MenuError::UnknownCommand {
                signature: signature.to_string(),
            })
    }

    /// Ask for each declared argument of `signature`.
    ///
    /// Empty answers are left out so the command's own defaults apply.
    pub fn collect_arguments(
        &self,
        ui: &mut dyn UserInterface,
        signature: &str,
    ) -> Result<BTreeMap<String, String>> {
        let definition = self.resolve(signature)?;
        let mut arguments = BTreeMap::new();

        if definition.arguments.is_empty() {
            return Ok(arguments);
        }

        ui.message(ARGUMENTS_NOTE);

        for argument in &definition.arguments {
            let prompt = Prompt::input(
                argument_prompt_key(&argument.name),
                argument.question(),
                Some(""),
            );
            let answer = ui.prompt(&prompt)?;
            let answer = answer.trim();

            if !answer.is_empty() {
                arguments.insert(argument.name.clone(), answer.to_string());
            }
        }

        Ok(arguments)
    }

    /// Ask for options of `signature` as one `name` / `name=value` line.
    ///
    /// Commands that declare no options are not asked.
    pub fn collect_options(
        &self,
        ui: &mut dyn UserInterface,
        signature: &str,
    ) -> Result<Parameters> {
        let definition = self.resolve(signature)?;

        if definition.options.is_empty() {
            tracing::debug!("{} declares no options", signature);
            return Ok(Parameters::new());
        }

        ui.hint("For example, you could enter -m when making a model to create a migration.");
        ui.hint("Or --queue=somequeuename if running a queue related command.");
        ui.hint(&format!(
            "Available: {}",
            definition
                .options
                .iter()
                .map(option_usage)
                .collect::<Vec<_>>()
                .join(", ")
        ));

        let answer = ui.prompt(&Prompt::input(
            OPTIONS_PROMPT,
            "Enter any command options",
            Some(""),
        ))?;

        Ok(parse_options(&answer))
    }

    /// Merge the request's parameters and hand them to the registry.
    pub fn invoke(&mut self, request: &InvocationRequest) -> Result<i32> {
        let parameters = request.parameters();
        tracing::debug!("Calling {} with {} parameters", request.signature, parameters.len());
        self.registry.call(&request.signature, &parameters)
    }
}

/// Ask which group to pick a command from.
fn ask_for_group(ui: &mut dyn UserInterface, grouped: &GroupedCommands) -> Result<String> {
    let options: Vec<PromptOption> = grouped
        .group_names()
        .into_iter()
        .map(|g| PromptOption::new(g, g))
        .collect();

    if options.is_empty() {
        return Err(MenuError::NoCommands);
    }

    let prompt = Prompt::select(
        GROUP_PROMPT,
        "What type of command would you like to run?",
        options,
    );
    let group = ui.prompt(&prompt)?;

    if !prompt.offers(&group) {
        return Err(MenuError::InvalidSelection { choice: group });
    }
    Ok(group)
}

/// Ask which command of `group` to run, returning its subcommand key.
fn ask_for_command(
    ui: &mut dyn UserInterface,
    grouped: &GroupedCommands,
    group: &str,
) -> Result<String> {
    let commands = grouped
        .commands(group)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| MenuError::EmptyGroup {
            group: group.to_string(),
        })?;

    let width = commands
        .iter()
        .map(|c| c.subcommand.chars().count())
        .max()
        .unwrap_or(0);
    let options: Vec<PromptOption> = commands
        .iter()
        .map(|c| PromptOption::new(c.label(width), &c.subcommand))
        .collect();

    let prompt = Prompt::select(COMMAND_PROMPT, "Which command would you like to run?", options);
    let subcommand = ui.prompt(&prompt)?;

    if !prompt.offers(&subcommand) {
        return Err(MenuError::InvalidSelection { choice: subcommand });
    }
    Ok(subcommand)
}

fn option_usage(option: &OptionDefinition) -> String {
    let mut usage = format!("--{}", option.name);
    if option.accepts_value {
        usage.push_str("=<value>");
    }
    if let Some(shortcut) = &option.shortcut {
        usage.push_str(&format!(" (-{})", shortcut));
    }
    usage
}

fn describe(request: &InvocationRequest) -> String {
    let mut line = request.signature.clone();
    for (name, value) in request.parameters() {
        line.push_str(&format!(" {}={}", name, value));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{
        ArgumentDefinition, ArgumentMode, MockRegistry, OptionDefinition, ParameterValue,
    };
    use crate::ui::MockUI;

    fn make_model() -> CommandDefinition {
        CommandDefinition::new("make:model", "Create a new model")
            .with_argument(ArgumentDefinition::new(
                "name",
                ArgumentMode::Required,
                "The name of the model",
            ))
            .with_argument(ArgumentDefinition::new("table", ArgumentMode::Optional, ""))
            .with_option(OptionDefinition {
                name: "migration".to_string(),
                shortcut: Some("m".to_string()),
                description: "Create a migration".to_string(),
                accepts_value: false,
            })
            .with_option(OptionDefinition {
                name: "connection".to_string(),
                shortcut: None,
                description: String::new(),
                accepts_value: true,
            })
    }

    fn registry() -> MockRegistry {
        MockRegistry::new()
            .with_commands(&[
                ("db:seed", "Seed database"),
                ("db:wipe", "Wipe database"),
                ("cache:clear", "Clear cache"),
                ("migrate", "Run the database migrations"),
            ])
            .with_command(make_model())
    }

    #[test]
    fn end_to_end_wipe() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(GROUP_PROMPT, "db");
        ui.set_prompt_response(COMMAND_PROMPT, "wipe");

        let mut selector = InteractiveSelector::new(registry());
        assert_eq!(selector.run(&mut ui).unwrap(), 0);

        let command_prompt = ui.prompt_for(COMMAND_PROMPT).unwrap();
        let offered: Vec<_> = command_prompt
            .options()
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(offered, vec!["seed", "wipe"]);

        let calls = selector.registry().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "db:wipe");
        assert!(calls[0].1.is_empty());
        assert_eq!(selector.state(), FlowState::Done);
        assert_eq!(ui.prompts_shown(), vec![GROUP_PROMPT, COMMAND_PROMPT]);
    }

    #[test]
    fn group_menu_is_sorted() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(GROUP_PROMPT, "cache");
        ui.set_prompt_response(COMMAND_PROMPT, "clear");

        let mut selector = InteractiveSelector::new(registry());
        selector.run(&mut ui).unwrap();

        let groups: Vec<_> = ui
            .prompt_for(GROUP_PROMPT)
            .unwrap()
            .options()
            .iter()
            .map(|o| o.value.clone())
            .collect();
        assert_eq!(groups, vec!["cache", "db", "make", "migrate"]);
    }

    #[test]
    fn command_without_separator_is_selectable() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(GROUP_PROMPT, "migrate");
        ui.set_prompt_response(COMMAND_PROMPT, "");

        let mut selector = InteractiveSelector::new(registry());
        selector.run(&mut ui).unwrap();

        let prompt = ui.prompt_for(COMMAND_PROMPT).unwrap();
        assert_eq!(prompt.options()[0].label, "Run the database migrations");
        assert!(selector.registry().was_called("migrate"));
    }

    #[test]
    fn arguments_and_options_are_collected() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(GROUP_PROMPT, "make");
        ui.set_prompt_response(COMMAND_PROMPT, "model");
        ui.set_prompt_response("arg_name", "Post");
        ui.set_prompt_response(OPTIONS_PROMPT, "-m --connection=sqlite");

        let mut selector = InteractiveSelector::new(registry());
        selector.run(&mut ui).unwrap();

        let (signature, params) = &selector.registry().calls()[0];
        assert_eq!(signature, "make:model");
        assert_eq!(params.len(), 3);
        assert_eq!(params["name"], ParameterValue::from("Post"));
        assert_eq!(params["m"], ParameterValue::Flag);
        assert_eq!(params["connection"], ParameterValue::from("sqlite"));
        assert!(!params.contains_key("table"));

        assert_eq!(
            ui.prompts_shown(),
            vec![GROUP_PROMPT, COMMAND_PROMPT, "arg_name", "arg_table", OPTIONS_PROMPT]
        );
        assert!(ui.has_message("may or may not be optional"));
        assert!(ui.has_hint("--connection=<value>"));
        assert!(ui.has_hint("--migration (-m)"));
    }

    #[test]
    fn argument_question_is_description_or_name() {
        let mut ui = MockUI::new();
        let selector = InteractiveSelector::new(registry());
        selector.collect_arguments(&mut ui, "make:model").unwrap();

        assert_eq!(ui.prompt_for("arg_name").unwrap().question, "The name of the model");
        assert_eq!(ui.prompt_for("arg_table").unwrap().question, "table");
        assert_eq!(ui.prompt_for("arg_table").unwrap().default.as_deref(), Some(""));
    }

    #[test]
    fn empty_argument_answers_are_omitted() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("arg_name", "   ");
        let selector = InteractiveSelector::new(registry());

        let arguments = selector.collect_arguments(&mut ui, "make:model").unwrap();
        assert!(arguments.is_empty());
    }

    #[test]
    fn no_argument_note_without_arguments() {
        let mut ui = MockUI::new();
        let selector = InteractiveSelector::new(registry());

        let arguments = selector.collect_arguments(&mut ui, "db:seed").unwrap();
        assert!(arguments.is_empty());
        assert!(ui.messages().is_empty());
        assert!(ui.prompts().is_empty());
    }

    #[test]
    fn options_prompt_skipped_without_declared_options() {
        let mut ui = MockUI::new();
        let selector = InteractiveSelector::new(registry());

        let options = selector.collect_options(&mut ui, "db:seed").unwrap();
        assert!(options.is_empty());
        assert!(ui.prompts().is_empty());
    }

    #[test]
    fn single_option_token_is_flag() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(OPTIONS_PROMPT, "m");
        let selector = InteractiveSelector::new(registry());

        let options = selector.collect_options(&mut ui, "make:model").unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options["m"], ParameterValue::Flag);
    }

    #[test]
    fn unresolvable_signature_is_unknown_command() {
        let mut ui = MockUI::new();
        let selector = InteractiveSelector::new(registry());

        let err = selector.collect_arguments(&mut ui, "db:nope").unwrap_err();
        assert!(matches!(err, MenuError::UnknownCommand { ref signature } if signature == "db:nope"));

        let err = selector.collect_options(&mut ui, "db:nope").unwrap_err();
        assert!(matches!(err, MenuError::UnknownCommand { .. }));
    }

    #[test]
    fn unavailable_registry_fails_run() {
        let mut ui = MockUI::new();
        let mut selector = InteractiveSelector::new(MockRegistry::new().unavailable());

        let err = selector.run(&mut ui).unwrap_err();
        assert!(matches!(err, MenuError::HostUnavailable { .. }));
        assert_eq!(selector.state(), FlowState::Failed);
        assert!(ui.prompts().is_empty());
    }

    #[test]
    fn empty_registry_fails_run() {
        let mut ui = MockUI::new();
        let mut selector = InteractiveSelector::new(MockRegistry::new());

        let err = selector.run(&mut ui).unwrap_err();
        assert!(matches!(err, MenuError::NoCommands));
    }

    #[test]
    fn invalid_group_answer_fails() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(GROUP_PROMPT, "queue");

        let mut selector = InteractiveSelector::new(registry());
        let err = selector.run(&mut ui).unwrap_err();
        assert!(matches!(err, MenuError::InvalidSelection { ref choice } if choice == "queue"));
        assert_eq!(selector.state(), FlowState::Failed);
        assert!(selector.registry().calls().is_empty());
    }

    #[test]
    fn invalid_command_answer_fails() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(GROUP_PROMPT, "db");
        ui.set_prompt_response(COMMAND_PROMPT, "migrate");

        let mut selector = InteractiveSelector::new(registry());
        let err = selector.run(&mut ui).unwrap_err();
        assert!(matches!(err, MenuError::InvalidSelection { .. }));
    }

    #[test]
    fn empty_group_is_rejected() {
        let mut ui = MockUI::new();
        let grouped = group_commands(Vec::new());
        let err = ask_for_command(&mut ui, &grouped, "db").unwrap_err();
        assert!(matches!(err, MenuError::EmptyGroup { ref group } if group == "db"));
    }

    #[test]
    fn exit_code_is_surfaced_unchanged() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(GROUP_PROMPT, "cache");
        ui.set_prompt_response(COMMAND_PROMPT, "clear");

        let mut selector = InteractiveSelector::new(registry().with_exit_code(7));
        assert_eq!(selector.run(&mut ui).unwrap(), 7);
    }

    #[test]
    fn verbose_mode_describes_invocation() {
        let mut ui = MockUI::with_mode(crate::ui::OutputMode::Verbose);
        ui.set_prompt_response(GROUP_PROMPT, "make");
        ui.set_prompt_response(COMMAND_PROMPT, "model");
        ui.set_prompt_response("arg_name", "Post");
        ui.set_prompt_response(OPTIONS_PROMPT, "m");

        let mut selector = InteractiveSelector::new(registry());
        selector.run(&mut ui).unwrap();
        assert!(ui.has_message("Invoking make:model m=true name=Post"));
    }

    #[test]
    fn list_commands_splits_names() {
        let selector = InteractiveSelector::new(registry());
        let commands = selector.list_commands().unwrap();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0].group, "db");
        assert_eq!(commands[0].subcommand, "seed");
        assert_eq!(commands[3].subcommand, "");
    }

    #[test]
    fn flow_state_display() {
        assert_eq!(FlowState::GroupChosen.to_string(), "group-chosen");
        assert_eq!(FlowState::default(), FlowState::Start);
    }
}
