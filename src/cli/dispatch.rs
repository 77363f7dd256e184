// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::{style, Term};

use crate::commit::{Composer, DialoguerPrompt};
use crate::config::CmtConfig;
use crate::error::{CmtError, GitError, Result};
use crate::git::{check_add_stage, SystemRunner};

use super::args::{Cli, Commands};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CmtConfig::load_from(config_path)?
    } else {
        CmtConfig::load()?
    };

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Commit(args) => run_commit(&config, args),
        Commands::Types => run_types(&config),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the commit command: check staging, compose, print the message.
fn run_commit(config: &CmtConfig, args: super::args::CommitArgs) -> Result<()> {
    tracing::debug!("Running commit command with args: {:?}", args);

    let term = Term::stderr();

    if !args.no_verify {
        let runner = SystemRunner;
        if !check_add_stage(&runner)? {
            return Err(CmtError::Git(GitError::NoStagedChanges));
        }
    }

    // CLI skip flags extend the configured skip-list
    let mut config = config.clone();
    for key in &args.skip {
        if !config.questions.skip.contains(key) {
            config.questions.skip.push(key.clone());
        }
    }

    let mut composer = Composer::new(&config);
    if let Some(ref t) = args.r#type {
        composer = composer.with_type_name(t)?;
    }
    if let Some(ref scope) = args.scope {
        composer = composer.with_scope(scope);
    }
    if let Some(ref message) = args.message {
        composer = composer.with_subject(message);
    }

    let mut prompt = DialoguerPrompt::new();
    let message = composer.ask_questions(&mut prompt)?;

    term.write_line(&format!("\n{}", style("Commit message:").green().bold()))?;
    println!("{}", message);

    Ok(())
}

/// Run the types command.
fn run_types(config: &CmtConfig) -> Result<()> {
    for commit_type in &config.types {
        println!(
            "{:24} {}",
            commit_type.label(),
            style(&commit_type.description).dim()
        );
    }
    Ok(())
}

/// Run the init command.
fn run_init(args: super::args::InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("cmt.toml");

    if config_path.exists() && !args.force {
        return Err(CmtError::WithContext {
            context: "init".to_string(),
            message: "Configuration file already exists. Use --force to overwrite.".to_string(),
        });
    }

    std::fs::write(config_path, example_config()).map_err(|e| CmtError::WithContext {
        context: "init".to_string(),
        message: format!("Failed to write configuration: {}", e),
    })?;

    println!("✓ Created cmt.toml");

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cmt {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
