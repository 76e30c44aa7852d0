// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::{
	error::diagnostic::{Diagnostic, DiagnosticColumn},
	value::Type,
};

pub fn utf8_exceeds_max_bytes(column: &str, max_bytes: u32, got: usize) -> Diagnostic {
	Diagnostic {
		code: "CONSTRAINT_001".to_string(),
		message: format!(
			"value for column '{}' is {} bytes but the column allows at most {}",
			column, got, max_bytes
		),
		column: Some(DiagnosticColumn {
			name: column.to_string(),
			ty: Type::Utf8,
		}),
		label: Some("utf8 length constraint violated".to_string()),
		help: Some("shorten the value or widen the column constraint".to_string()),
		notes: vec![],
	}
}
