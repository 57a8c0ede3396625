//! Color mode configuration for console output.

use clap::ValueEnum;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorMode {
    Always,
    Never,
    #[default]
    Auto,
}

impl ColorMode {
    /// Whether output should carry ANSI colors.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}
