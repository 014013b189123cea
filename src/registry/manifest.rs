//! Registry backed by a YAML command manifest.
//!
//! Each manifest entry becomes a command. Calling one renders its `run`
//! line and hands it to the user's shell:
//!
//! - declared arguments are interpolated as `${name}`, shell-quoted,
//!   falling back to their default (or an empty string when optional)
//! - every other parameter must be a declared option and is appended as
//!   `--name` or `--name=value`, in name order
//! - commands run from the directory holding `.cmdmenu/` (or the manifest's
//!   own directory), adjusted by `working_directory`

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::{
    discover_manifest, load_manifest_file, resolve_string, CommandConfig, InterpolationContext,
    Manifest, MANIFEST_DIR,
};
use crate::error::{MenuError, Result};
use crate::shell::{self, CommandOptions};

use super::{CommandDefinition, CommandRegistry, CommandSummary, ParameterValue, Parameters};

/// A fully rendered invocation, ready for the shell.
#[derive(Debug, Clone)]
pub struct RenderedCommand {
    /// Command line passed to the shell.
    pub line: String,
    /// Working directory and environment.
    pub options: CommandOptions,
}

/// Command registry loaded from a manifest file.
#[derive(Debug, Clone)]
pub struct ManifestRegistry {
    manifest: Manifest,
    base_dir: PathBuf,
    capture_output: bool,
}

impl ManifestRegistry {
    /// Create a registry from an already parsed manifest.
    ///
    /// `base_dir` is the default working directory for every command.
    pub fn new(manifest: Manifest, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest,
            base_dir: base_dir.into(),
            capture_output: false,
        }
    }

    /// Load the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let manifest = load_manifest_file(path)?;
        Ok(Self::new(manifest, base_dir_for(path)))
    }

    /// Find and load the manifest for `start`, honouring an explicit path.
    ///
    /// Any failure to find, read or parse the manifest is reported as
    /// `HostUnavailable`.
    pub fn discover(start: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = discover_manifest(start, explicit).ok_or_else(|| {
            MenuError::HostUnavailable {
                message: format!(
                    "no {}/commands.yml found in {} or its parents, and none in the home directory",
                    MANIFEST_DIR,
                    start.display()
                ),
            }
        })?;

        tracing::debug!("Using manifest {}", path.display());

        Self::load(&path).map_err(|e| MenuError::HostUnavailable {
            message: e.to_string(),
        })
    }

    /// Capture command output instead of inheriting the terminal.
    pub fn capture_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }

    /// The loaded manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Default working directory for commands.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn command(&self, signature: &str) -> Option<&CommandConfig> {
        self.manifest.commands.iter().find(|c| c.name == signature)
    }

    /// Render the shell invocation for `signature` without running it.
    pub fn render(&self, signature: &str, parameters: &Parameters) -> Result<RenderedCommand> {
        let config = self
            .command(signature)
            .ok_or_else(|| MenuError::UnknownCommand {
                signature: signature.to_string(),
            })?;

        let mut context = InterpolationContext::new().with_env(std::env::vars().collect());

        for argument in &config.arguments {
            let value = match parameters.get(&argument.name) {
                Some(value) => value.to_string(),
                None => match (&argument.default, argument.required) {
                    (Some(default), _) => default.clone(),
                    (None, true) => {
                        return Err(MenuError::MissingArgument {
                            command: config.name.clone(),
                            argument: argument.name.clone(),
                        })
                    }
                    (None, false) => String::new(),
                },
            };
            context
                .arguments
                .insert(argument.name.clone(), quote(&value));
        }

        let mut line = resolve_string(&config.run, &context)?;

        for (key, value) in parameters {
            if config.arguments.iter().any(|a| &a.name == key) {
                continue;
            }

            let option = config
                .options
                .iter()
                .find(|o| &o.name == key || o.shortcut.as_ref() == Some(key))
                .ok_or_else(|| MenuError::UnknownOption {
                    command: config.name.clone(),
                    option: key.clone(),
                })?;

            match value {
                ParameterValue::Flag => {
                    line.push_str(" --");
                    line.push_str(&option.name);
                }
                ParameterValue::Value(v) => {
                    line.push_str(&format!(" --{}={}", option.name, quote(v)));
                }
            }
        }

        let mut env: HashMap<String, String> = self.manifest.settings.env.clone();
        env.extend(config.env.clone());

        let cwd = match &config.working_directory {
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.clone(),
        };

        Ok(RenderedCommand {
            line,
            options: CommandOptions {
                cwd: Some(cwd),
                env,
                capture_stdout: self.capture_output,
                capture_stderr: self.capture_output,
            },
        })
    }
}

impl CommandRegistry for ManifestRegistry {
    fn all(&self) -> Result<Vec<CommandSummary>> {
        Ok(self
            .manifest
            .commands
            .iter()
            .map(|c| CommandSummary::new(&c.name, &c.description))
            .collect())
    }

    fn find(&self, signature: &str) -> Option<CommandDefinition> {
        self.command(signature).map(CommandDefinition::from)
    }

    fn call(&mut self, signature: &str, parameters: &Parameters) -> Result<i32> {
        let rendered = self.render(signature, parameters)?;
        tracing::info!("Running {}", signature);

        let result = shell::execute(&rendered.line, &rendered.options)?;
        tracing::debug!(
            "{} exited with {:?} after {:?}",
            signature,
            result.exit_code,
            result.duration
        );

        Ok(result.code())
    }
}

/// Directory commands run from by default.
///
/// A manifest inside `.cmdmenu/` belongs to the directory above it.
fn base_dir_for(path: &Path) -> PathBuf {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    if parent.file_name().is_some_and(|n| n == MANIFEST_DIR) {
        parent.parent().unwrap_or(parent).to_path_buf()
    } else {
        parent.to_path_buf()
    }
}

fn quote(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        shell_words::quote(value).into_owned()
    }
}
