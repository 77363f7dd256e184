// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The interactive commit message composer.
//!
//! Runs a fixed sequence of questions (type, scope, message, body, footer)
//! against the configured commit types and renders the answers into one
//! commit message string. Individual questions can be bypassed through the
//! configured skip-list or pre-filled from CLI flags.

use crate::config::CmtConfig;
use crate::error::{CmtError, ConfigError, Result};

use super::prompt::{Prompt, Question, SelectOption};

/// Check whether a question key appears literally in the skip-list.
pub fn is_in_skip_questions(key: &str, skip: &[String]) -> bool {
    skip.iter().any(|s| s == key)
}

/// Interactive commit message composer.
pub struct Composer<'a> {
    config: &'a CmtConfig,
    type_label: Option<String>,
    scope: Option<String>,
    subject: Option<String>,
    body: Option<String>,
    footer: Option<String>,
}

impl<'a> Composer<'a> {
    /// Create a new composer over the given configuration.
    pub fn new(config: &'a CmtConfig) -> Self {
        Self {
            config,
            type_label: None,
            scope: None,
            subject: None,
            body: None,
            footer: None,
        }
    }

    /// Pre-fill the commit type by name, resolving it against the
    /// configured type list.
    pub fn with_type_name(mut self, name: &str) -> Result<Self> {
        let commit_type = self
            .config
            .types
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| {
                CmtError::Config(ConfigError::InvalidValue {
                    key: "type".to_string(),
                    message: format!("unknown commit type: {}", name),
                })
            })?;

        self.type_label = Some(commit_type.label());
        Ok(self)
    }

    /// Pre-fill the scope.
    pub fn with_scope(mut self, scope: &str) -> Self {
        if !scope.is_empty() {
            self.scope = Some(scope.to_string());
        }
        self
    }

    /// Pre-fill the message/subject.
    pub fn with_subject(mut self, subject: &str) -> Self {
        if !subject.is_empty() {
            self.subject = Some(subject.to_string());
        }
        self
    }

    /// Run the question sequence and render the commit message.
    ///
    /// All-or-nothing: the first prompt failure aborts the flow and no
    /// partial message is produced.
    pub fn ask_questions(mut self, prompter: &mut dyn Prompt) -> Result<String> {
        self.config.validate()?;
        let skip = &self.config.questions.skip;

        if self.type_label.is_none() && !is_in_skip_questions("type", skip) {
            let options: Vec<SelectOption> = self
                .config
                .types
                .iter()
                .map(|t| SelectOption {
                    value: t.label(),
                    hint: t.description.clone(),
                })
                .collect();

            let answer = prompter.ask(&Question::select(
                "type",
                "Select the type of change you are committing",
                options,
            ))?;
            self.type_label = Some(answer);
        }

        if self.scope.is_none() && !is_in_skip_questions("scope", skip) {
            let answer = prompter.ask(&Question::input(
                "scope",
                "Scope of this change (press enter to skip)",
                true,
            ))?;
            if !answer.is_empty() {
                self.scope = Some(answer);
            }
        }

        if self.subject.is_none() && !is_in_skip_questions("message", skip) {
            let answer = prompter.ask(&Question::input_with_length(
                "message",
                format!(
                    "Short description of the change (max {} chars)",
                    self.config.questions.subject_max_length
                ),
                self.config.questions.subject_min_length,
                self.config.questions.subject_max_length,
            ))?;
            self.subject = Some(answer);
        }

        if self.body.is_none() && !is_in_skip_questions("body", skip) {
            let answer = prompter.ask(&Question::editor(
                "body",
                "Provide a longer description of the change",
            ))?;
            if !answer.trim().is_empty() {
                self.body = Some(answer.trim().to_string());
            }
        }

        if self.footer.is_none() && !is_in_skip_questions("footer", skip) {
            let answer = prompter.ask(&Question::input(
                "footer",
                "Footer (issue references, press enter to skip)",
                true,
            ))?;
            if !answer.is_empty() {
                self.footer = Some(answer);
            }
        }

        Ok(self.render())
    }

    /// Render the collected answers into the final message string.
    ///
    /// Header format: `"<name> <emoji> (<scope>): <message>"`, with the
    /// parenthetical omitted entirely when no scope was collected. Body
    /// and footer follow as separate paragraphs.
    fn render(&self) -> String {
        let mut result = String::new();

        if let Some(ref type_label) = self.type_label {
            result.push_str(type_label);
        }

        if let Some(ref scope) = self.scope {
            result.push_str(" (");
            result.push_str(scope);
            result.push(')');
        }

        result.push_str(": ");
        result.push_str(self.subject.as_deref().unwrap_or(""));

        if let Some(ref body) = self.body {
            result.push_str("\n\n");
            result.push_str(body);
        }

        if let Some(ref footer) = self.footer {
            result.push_str("\n\n");
            result.push_str(footer);
        }

        result
    }
}
