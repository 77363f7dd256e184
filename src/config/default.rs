// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::{CmtConfig, CommitType};

/// Get the default configuration, including the built-in type list.
pub fn default_config() -> CmtConfig {
    CmtConfig {
        types: default_types(),
        ..CmtConfig::default()
    }
}

/// The built-in commit type list.
pub fn default_types() -> Vec<CommitType> {
    vec![
        CommitType::new("feat", ":sparkles:", "A new feature"),
        CommitType::new("fix", ":bug:", "A bug fix"),
        CommitType::new("docs", ":memo:", "Documentation only changes"),
        CommitType::new(
            "style",
            ":art:",
            "Changes that do not affect the meaning of the code",
        ),
        CommitType::new(
            "refactor",
            ":recycle:",
            "A code change that neither fixes a bug nor adds a feature",
        ),
        CommitType::new("perf", ":zap:", "A code change that improves performance"),
        CommitType::new(
            "test",
            ":white_check_mark:",
            "Adding missing tests or correcting existing tests",
        ),
        CommitType::new(
            "chore",
            ":wrench:",
            "Other changes that don't modify src or test files",
        ),
        CommitType::new(
            "build",
            ":package:",
            "Changes that affect the build system or external dependencies",
        ),
        CommitType::new(
            "ci",
            ":ferris_wheel:",
            "Changes to CI configuration files and scripts",
        ),
        CommitType::new("revert", ":rewind:", "Reverts a previous commit"),
    ]
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# CMT Configuration File
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Question flow configuration.
# Valid skip keys: "type", "scope", "message", "body", "footer"
[questions]
skip = ["body", "footer"]
subject_max_length = 72
subject_min_length = 3

# UI configuration
[ui]
color = true
hints = true

# Commit types presented in the type question, in order.
[[types]]
name = "feat"
emoji = ":sparkles:"
description = "A new feature"

[[types]]
name = "fix"
emoji = ":bug:"
description = "A bug fix"

[[types]]
name = "docs"
emoji = ":memo:"
description = "Documentation only changes"

[[types]]
name = "refactor"
emoji = ":recycle:"
description = "A code change that neither fixes a bug nor adds a feature"

[[types]]
name = "test"
emoji = ":white_check_mark:"
description = "Adding missing tests or correcting existing tests"

[[types]]
name = "chore"
emoji = ":wrench:"
description = "Other changes that don't modify src or test files"
"#
}
