//! Non-interactive UI for CI/headless environments.
//!
//! Prompts are answered from `CMDMENU_PROMPT_<KEY>` environment variables,
//! falling back to the prompt's default. The key is upper-cased with every
//! non-alphanumeric character replaced by `_`, so the `arg_name` prompt
//! reads `CMDMENU_PROMPT_ARG_NAME`.

use std::collections::HashMap;

use anyhow::anyhow;

use crate::error::{MenuError, Result};

use super::{OutputMode, Prompt, PromptType, UserInterface};

/// Prefix of the environment variables answering prompts.
pub const PROMPT_ENV_PREFIX: &str = "CMDMENU_PROMPT_";

/// Environment variable answering the prompt with `key`.
pub fn prompt_env_key(key: &str) -> String {
    let normalized: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}{}", PROMPT_ENV_PREFIX, normalized)
}

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI reading overrides from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("  {}", msg);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let env_key = prompt_env_key(&prompt.key);
        let answer = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .cloned()
            .ok_or_else(|| {
                MenuError::Other(anyhow!(
                    "Cannot prompt for '{}' in non-interactive mode (set {})",
                    prompt.key,
                    env_key
                ))
            })?;

        // No one is there to re-ask, so an unknown choice is final.
        if matches!(prompt.prompt_type, PromptType::Select { .. }) && !prompt.offers(&answer) {
            return Err(MenuError::InvalidSelection { choice: answer });
        }

        tracing::debug!("Answered '{}' with '{}'", prompt.key, answer);
        Ok(answer)
    }
}
