// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CMT - Interactive Conventional Commit Wizard
//!
//! A CLI tool for authoring conventional commit messages through a guided
//! question-and-answer flow.
//!
//! # Features
//!
//! - **Stage Check**: Verifies that changes are staged before asking anything
//! - **Guided Composition**: Ordered questions for type, scope, message, body and footer
//! - **Skip-list**: Any question can be bypassed via configuration or flags
//! - **Configured Types**: Commit types (with emoji) come from `cmt.toml`
//!
//! # Example
//!
//! ```no_run
//! use cmt::commit::{Composer, DialoguerPrompt};
//! use cmt::config::CmtConfig;
//!
//! let config = CmtConfig::load().unwrap();
//! let mut prompt = DialoguerPrompt::new();
//! let message = Composer::new(&config).ask_questions(&mut prompt).unwrap();
//! println!("{}", message);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;

// Re-exports for convenience
pub use config::CmtConfig;
pub use error::{CmtError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cmt.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
