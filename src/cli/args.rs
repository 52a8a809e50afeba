//! Command-line argument parsing for SHEra
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SHEra - onboarding questionnaire and PCOS risk assessment
#[derive(Parser, Debug)]
#[command(name = "shera")]
#[command(author = "SHEra Team")]
#[command(version)]
#[command(about = "Answer the SHEra onboarding questions and get a PCOS risk assessment", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding onboarding progress and results
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Question table in TOML (built-in questions by default)
    #[arg(long, global = true)]
    pub questions: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List the onboarding questions
    Questions {
        /// Only show one category, e.g. "MENTAL HEALTH"
        #[arg(long)]
        category: Option<String>,
    },

    /// Answer the onboarding questions interactively
    Onboard,

    /// Score an answers file (JSON object of question id to value)
    Score {
        /// Answers file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the stored assessment
    Result {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Clear onboarding progress and the stored assessment
    Reset,

    /// Display current configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Verbosity from flags, or `default` when none were given
    pub fn verbosity_or(&self, default: Verbosity) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => default,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Reject contradictory flags
    pub fn validate(&self) -> Result<(), String> {
        if self.quiet && self.verbose > 0 {
            return Err("Cannot combine --quiet with --verbose.".to_string());
        }
        Ok(())
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    pub fn parse(value: &str) -> Option<Verbosity> {
        match value {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// tracing filter directive used when RUST_LOG is unset
    pub fn log_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }

    /// Check if should show progress bars
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_verbosity_quiet() {
        let args = parse(&["shera", "-q", "reset"]);
        assert_eq!(args.verbosity_or(Verbosity::Normal), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_default_from_config() {
        let args = parse(&["shera", "reset"]);
        assert_eq!(args.verbosity_or(Verbosity::Verbose), Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_very_verbose() {
        let args = parse(&["shera", "onboard", "-vv"]);
        assert_eq!(args.verbosity_or(Verbosity::Normal), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_validate_fail_quiet_and_verbose() {
        let args = parse(&["shera", "-q", "-v", "onboard"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_score_command() {
        let args = parse(&["shera", "score", "answers.json", "--json"]);
        assert_eq!(
            args.command,
            Commands::Score {
                file: PathBuf::from("answers.json"),
                json: true
            }
        );
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_global_paths() {
        let args = parse(&["shera", "result", "--data-dir", "/tmp/shera", "--questions", "q.toml"]);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/shera")));
        assert_eq!(args.questions, Some(PathBuf::from("q.toml")));
        assert_eq!(args.command, Commands::Result { json: false });
    }

    #[test]
    fn test_config_save_flag() {
        assert_eq!(parse(&["shera", "config"]).command, Commands::Config { save: false });
        let args = parse(&["shera", "-c", "/tmp/shera.toml", "config", "--save"]);
        assert_eq!(args.command, Commands::Config { save: true });
        assert_eq!(args.config, Some(PathBuf::from("/tmp/shera.toml")));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["shera"]).is_err());
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());
        assert_eq!(Verbosity::parse("very_verbose"), Some(Verbosity::VeryVerbose));
        assert_eq!(Verbosity::parse("loud"), None);
        assert_eq!(Verbosity::Verbose.log_directive(), "info");
    }
}
