// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cmt.
//!
//! This module handles loading and parsing configuration from files,
//! with sensible built-in defaults.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, default_types};
pub use loader::{find_config_file, load_config, parse_config};
pub use schema::*;
