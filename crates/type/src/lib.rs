// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

pub mod error;
pub mod row;
pub mod value;

pub use error::{
	Diagnostic, DiagnosticColumn, Error,
	diagnostic::{self, connection, constraint, encoding, query, schema, storage},
};
pub use row::{Key, Row};
pub use value::{Constraint, OrderedF64, OrderedFloatError, Type, TypeConstraint, Value};

pub type Result<T> = std::result::Result<T, Error>;
