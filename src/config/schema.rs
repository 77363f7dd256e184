// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cmt.toml.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// The main configuration structure for cmt.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CmtConfig {
    /// The ordered list of selectable commit types.
    pub types: Vec<CommitType>,

    /// Question flow configuration.
    pub questions: QuestionsConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl CmtConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Validate the configuration before it is used for prompting.
    pub fn validate(&self) -> Result<()> {
        if self.types.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "types".to_string(),
                message: "at least one commit type is required".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// A selectable commit type.
///
/// Supplied by configuration; the description is shown in the type prompt
/// but only name and emoji end up in the commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitType {
    /// Type name (feat, fix, etc.).
    pub name: String,

    /// Emoji shortcode shown next to the name.
    pub emoji: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

impl CommitType {
    /// Create a new commit type.
    pub fn new(
        name: impl Into<String>,
        emoji: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            description: description.into(),
        }
    }

    /// The form of this type used in the commit message: `"<name> <emoji>"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.emoji)
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.emoji)
    }
}

/// Question flow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionsConfig {
    /// Question keys to skip entirely (type, scope, message, body, footer).
    pub skip: Vec<String>,

    /// Maximum length of the message/subject line.
    pub subject_max_length: usize,

    /// Minimum length of the message/subject line.
    pub subject_min_length: usize,
}

impl Default for QuestionsConfig {
    fn default() -> Self {
        Self {
            skip: Vec::new(),
            subject_max_length: 72,
            subject_min_length: 3,
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to show hints.
    pub hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            hints: true,
        }
    }
}
