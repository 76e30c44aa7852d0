// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

//! The embeddable client surface: open a [`Session`] against a set of
//! endpoints, create tables, and hand out record, key/value and query
//! views over them.

mod config;
mod session;
mod table;

pub use config::SessionConfig;
pub use lattica_type::{Error, Result};
pub use session::Session;
pub use table::TableHandle;
