// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! This module inspects repository staging state for cmt.

mod status;

pub use status::{check_add_stage, CommandRunner, SystemRunner};
