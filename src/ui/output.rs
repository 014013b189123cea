//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show the resolved command line before running it.
    Verbose,
    /// Show notes, hints and status.
    #[default]
    Normal,
    /// Show only prompts and errors.
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the `--verbose` / `--quiet` flags; quiet wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows details such as resolved command lines.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages and hints.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
