// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The prompting seam for the composer.
//!
//! The composer only depends on [`Prompt`]: ask one question, get one
//! string answer. The interactive implementation is backed by dialoguer;
//! tests substitute scripted doubles.

use crate::error::Result;
use dialoguer::{theme::ColorfulTheme, Editor, Input, Select};

/// One question in the composing flow.
#[derive(Debug, Clone)]
pub struct Question {
    /// Stable key identifying the question (type, scope, message, ...).
    pub key: &'static str,

    /// Prompt text shown to the user.
    pub text: String,

    /// How the question is asked.
    pub kind: QuestionKind,
}

impl Question {
    /// A selection question.
    pub fn select(key: &'static str, text: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            key,
            text: text.into(),
            kind: QuestionKind::Select { options },
        }
    }

    /// A single-line input question.
    pub fn input(key: &'static str, text: impl Into<String>, allow_empty: bool) -> Self {
        Self {
            key,
            text: text.into(),
            kind: QuestionKind::Input {
                allow_empty,
                length: None,
            },
        }
    }

    /// A single-line input question with length limits.
    pub fn input_with_length(
        key: &'static str,
        text: impl Into<String>,
        min: usize,
        max: usize,
    ) -> Self {
        Self {
            key,
            text: text.into(),
            kind: QuestionKind::Input {
                allow_empty: false,
                length: Some((min, max)),
            },
        }
    }

    /// A multi-line question answered in the user's editor.
    pub fn editor(key: &'static str, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
            kind: QuestionKind::Editor,
        }
    }
}

/// How a question is presented and answered.
#[derive(Debug, Clone)]
pub enum QuestionKind {
    /// Pick one option from a list; the answer is the option's value.
    Select { options: Vec<SelectOption> },

    /// Free-form single-line input, optionally length-limited (min, max).
    Input {
        allow_empty: bool,
        length: Option<(usize, usize)>,
    },

    /// Multi-line input via an external editor; empty when aborted.
    Editor,
}

/// A selectable option: the value that becomes the answer, plus a hint
/// shown next to it in the prompt.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub hint: String,
}

/// Ask one question, get one string answer.
///
/// Each call blocks until an answer is produced. Failures are surfaced
/// verbatim; callers treat any error as fatal for the whole flow.
pub trait Prompt {
    fn ask(&mut self, question: &Question) -> Result<String>;
}

/// Interactive prompter backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompt for DialoguerPrompt {
    fn ask(&mut self, question: &Question) -> Result<String> {
        match &question.kind {
            QuestionKind::Select { options } => {
                let items: Vec<String> = options
                    .iter()
                    .map(|o| {
                        if o.hint.is_empty() {
                            o.value.clone()
                        } else {
                            format!("{:24} {}", o.value, console::style(&o.hint).dim())
                        }
                    })
                    .collect();

                let selection = Select::with_theme(&self.theme)
                    .with_prompt(&question.text)
                    .items(&items)
                    .default(0)
                    .interact()?;

                Ok(options[selection].value.clone())
            }
            QuestionKind::Input {
                allow_empty,
                length,
            } => {
                let mut input = Input::<String>::with_theme(&self.theme)
                    .with_prompt(&question.text)
                    .allow_empty(*allow_empty);

                if let Some((min, max)) = *length {
                    input = input.validate_with(move |answer: &String| {
                        if answer.len() < min {
                            Err("Answer is too short")
                        } else if answer.len() > max {
                            Err("Answer is too long")
                        } else {
                            Ok(())
                        }
                    });
                }

                Ok(input.interact_text()?)
            }
            QuestionKind::Editor => {
                let answer = Editor::new()
                    .edit(&question.text)
                    .map_err(|e| crate::error::CmtError::Ui(e.to_string()))?;

                Ok(answer.unwrap_or_default())
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_constructors() {
        let q = Question::input("scope", "Scope of this change", true);
        assert_eq!(q.key, "scope");
        assert!(matches!(
            q.kind,
            QuestionKind::Input {
                allow_empty: true,
                length: None
            }
        ));

        let q = Question::input_with_length("message", "Short description", 3, 72);
        assert!(matches!(
            q.kind,
            QuestionKind::Input {
                allow_empty: false,
                length: Some((3, 72))
            }
        ));
    }

    #[test]
    fn test_scripted_prompt_exhaustion() {
        use super::doubles::ScriptedPrompt;

        let mut prompt = ScriptedPrompt::new(&["one"]);
        let q = Question::input("scope", "Scope", true);
        assert_eq!(prompt.ask(&q).unwrap(), "one");
        assert!(prompt.ask(&q).is_err());
    }
}
