// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticColumn};

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let diagnostic = &self.0;
		write!(f, "[{}] {}", diagnostic.code, diagnostic.message)?;
		if let Some(column) = &diagnostic.column {
			write!(f, " (column `{}`: {})", column.name, column.ty)?;
		}
		Ok(())
	}
}

impl Error {
	pub fn diagnostic(&self) -> &Diagnostic {
		&self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl std::error::Error for Error {}

/// Wraps a [`Diagnostic`] into an [`Error`].
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}

/// Returns early with an [`Error`] built from a [`Diagnostic`].
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::Error($diagnostic))
	};
}

#[cfg(test)]
mod tests {
	use crate::{Type, diagnostic::schema::column_not_found};

	#[test]
	fn test_display_includes_code_and_column() {
		let err = crate::Error(column_not_found("titel", "Album", Type::Utf8));
		let rendered = err.to_string();
		assert!(rendered.starts_with("[SCHEMA_005]"));
		assert!(rendered.contains("titel"));
	}

	#[test]
	fn test_diagnostic_is_readable_repeatedly() {
		let err = crate::Error(column_not_found("x", "t", Type::Int4));
		assert_eq!(err.diagnostic().code, "SCHEMA_005");
		assert_eq!(err.diagnostic().column.as_ref().unwrap().name, "x");
	}
}
