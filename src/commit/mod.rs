// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message composition.

mod composer;
pub mod prompt;

pub use composer::{is_in_skip_questions, Composer};
pub use prompt::{DialoguerPrompt, Prompt, Question, QuestionKind, SelectOption};
