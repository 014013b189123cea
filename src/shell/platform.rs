//! Platform-specific shell detection.

use std::path::PathBuf;

/// Information about the shell commands are run through.
#[derive(Debug, Clone)]
pub struct ShellInfo {
    /// Shell executable path.
    pub executable: PathBuf,

    /// Shell family.
    pub name: ShellType,
}

/// Known shell types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Cmd,
    Unknown,
}

impl ShellType {
    /// Parse shell type from executable name.
    pub fn from_executable(exe: &str) -> Self {
        let name = std::path::Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" => ShellType::Bash,
            "zsh" => ShellType::Zsh,
            "fish" => ShellType::Fish,
            "powershell" | "pwsh" => ShellType::PowerShell,
            "cmd" => ShellType::Cmd,
            _ => ShellType::Unknown,
        }
    }

    /// Flag that makes the shell run the next argument as a command line.
    ///
    /// POSIX-style shells run as login shells so version managers set up in
    /// profile files are on PATH.
    pub fn command_flag(&self) -> &'static str {
        match self {
            ShellType::Cmd => "/C",
            ShellType::PowerShell => "-Command",
            ShellType::Bash | ShellType::Zsh | ShellType::Fish | ShellType::Unknown => "-lc",
        }
    }
}

/// Detect the current shell environment.
pub fn detect_shell() -> ShellInfo {
    let executable = get_shell_executable();
    let name = ShellType::from_executable(&executable.to_string_lossy());

    ShellInfo { executable, name }
}

fn get_shell_executable() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"))
    } else {
        std::env::var("SHELL")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/bin/sh"))
    }
}

/// Environment variables that mark a CI run.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used to force the non-interactive UI in `main()`.
pub fn is_ci() -> bool {
    is_ci_with(|name| std::env::var_os(name).is_some())
}

/// CI check against an arbitrary variable lookup.
pub fn is_ci_with(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.iter().any(|name| is_set(name))
}
