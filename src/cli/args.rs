// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CMT - Interactive conventional commit message wizard
///
/// Composes a structured commit message through a question-and-answer flow.
#[derive(Parser, Debug)]
#[command(name = "cmt")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Interactive conventional commit message wizard", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to commit if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compose a commit message interactively (default command)
    Commit(CommitArgs),

    /// List the configured commit types
    Types,

    /// Initialize cmt configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the commit command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CommitArgs {
    /// Pre-fill the commit type by name
    #[arg(short = 't', long)]
    pub r#type: Option<String>,

    /// Pre-fill the scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Pre-fill the message/subject
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Skip a question (type, scope, message, body, footer); repeatable
    #[arg(long, value_name = "KEY")]
    pub skip: Vec<String>,

    /// Skip the staged-changes check
    #[arg(long)]
    pub no_verify: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Commit if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Commit(CommitArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_commit() {
        let args = Cli::parse_from(["cmt", "commit", "-t", "feat", "-s", "core"]);
        if let Some(Commands::Commit(commit_args)) = args.command {
            assert_eq!(commit_args.r#type.as_deref(), Some("feat"));
            assert_eq!(commit_args.scope.as_deref(), Some("core"));
        } else {
            panic!("Expected Commit command");
        }
    }

    #[test]
    fn test_parse_skip_flags() {
        let args = Cli::parse_from(["cmt", "commit", "--skip", "scope", "--skip", "body"]);
        if let Some(Commands::Commit(commit_args)) = args.command {
            assert_eq!(commit_args.skip, vec!["scope", "body"]);
        } else {
            panic!("Expected Commit command");
        }
    }

    #[test]
    fn test_parse_init() {
        let args = Cli::parse_from(["cmt", "init", "--force"]);
        assert!(matches!(args.command, Some(Commands::Init(_))));
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["cmt", "--debug", "types"]);
        assert!(args.debug);
        assert!(matches!(args.command, Some(Commands::Types)));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["cmt"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Commit(_)));
    }
}
