//! Command-line interface for `counters`.
//!
//! # Examples
//!
//! ```bash
//! # Both counters, full screen
//! counters
//!
//! # Only the hook-style counter, no mouse capture
//! counters --variant hook --no-mouse
//!
//! # Print the screen after three clicks on every counter, no terminal needed
//! counters render --clicks 3
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Variant;
use crate::headless::Target;

/// Class-style and hook-style counters, side by side.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "counters",
    author,
    version,
    about = "Class-style and hook-style counters, side by side",
    long_about = "Mounts a struct-state counter and a hook-state counter in the \
                  terminal. Tab moves focus, Enter or Space clicks the focused \
                  button, q quits."
)]
pub struct Cli {
    /// Which counters to mount
    #[arg(long, value_enum, env = "COUNTERS_VARIANT")]
    pub variant: Option<Variant>,

    /// Path to a TOML config file
    ///
    /// Flags given on the command line override values from the file
    #[arg(long, env = "COUNTERS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable alternate screen mode
    #[arg(long)]
    pub no_alt_screen: bool,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Force color output off
    ///
    /// Respects `NO_COLOR` environment variable (any value but a falsey one)
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Hide the key help footer
    #[arg(long)]
    pub no_help: bool,

    /// Event loop frame rate (1-120)
    #[arg(long)]
    pub fps: Option<u32>,

    /// Write logs to this file
    #[arg(long, env = "COUNTERS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Optional subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Click counters without a terminal and print the resulting screen
    Render(RenderArgs),
}

/// Arguments for the render subcommand.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Clicks to apply to each targeted counter
    #[arg(long, default_value_t = 0)]
    pub clicks: u32,

    /// Counters that receive the clicks
    #[arg(long, value_enum, default_value_t = Target::All)]
    pub target: Target,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["counters"]).unwrap();
        assert!(!cli.no_alt_screen);
        assert!(!cli.no_mouse);
        assert!(!cli.no_help);
        assert!(cli.fps.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_variant_values() {
        for (arg, variant) in [
            ("class", Variant::Class),
            ("hook", Variant::Hook),
            ("both", Variant::Both),
        ] {
            let cli = Cli::try_parse_from(["counters", "--variant", arg]).unwrap();
            assert_eq!(cli.variant, Some(variant));
        }
    }

    #[test]
    fn cli_rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["counters", "--variant", "neither"]).is_err());
    }

    #[test]
    fn cli_no_color_flag() {
        let cli = Cli::try_parse_from(["counters", "--no-color"]).unwrap();
        assert!(cli.no_color);
    }

    #[test]
    fn cli_verbose_count() {
        let cli = Cli::try_parse_from(["counters", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn cli_render_subcommand() {
        let cli =
            Cli::try_parse_from(["counters", "render", "--clicks", "3", "--target", "hook"])
                .unwrap();
        match cli.command {
            Some(Command::Render(args)) => {
                assert_eq!(args.clicks, 3);
                assert_eq!(args.target, Target::Hook);
            }
            None => panic!("expected render subcommand"),
        }
    }

    #[test]
    fn cli_render_defaults() {
        let cli = Cli::try_parse_from(["counters", "render"]).unwrap();
        let Some(Command::Render(args)) = cli.command else {
            panic!("expected render subcommand");
        };
        assert_eq!(args.clicks, 0);
        assert_eq!(args.target, Target::All);
    }

    #[test]
    fn cli_global_flags_before_subcommand() {
        let cli =
            Cli::try_parse_from(["counters", "--variant", "class", "render", "--clicks", "1"])
                .unwrap();
        assert_eq!(cli.variant, Some(Variant::Class));
        assert!(matches!(cli.command, Some(Command::Render(_))));
    }
}
