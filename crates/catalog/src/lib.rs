// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

mod catalog;
mod table;
mod validate;

pub use catalog::Catalog;
pub use lattica_type::{Error, Result};
pub use table::{ColumnDef, TableDef};
pub use validate::validate_row;
