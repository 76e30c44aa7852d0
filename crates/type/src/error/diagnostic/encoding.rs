// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::{
	error::diagnostic::{Diagnostic, DiagnosticColumn},
	value::Type,
};

pub fn missing_required_field(table: &str, column: &str, ty: Type) -> Diagnostic {
	Diagnostic {
		code: "ENCODING_001".to_string(),
		message: format!(
			"no value for non-nullable column '{}' of table '{}'",
			column, table
		),
		column: Some(DiagnosticColumn {
			name: column.to_string(),
			ty,
		}),
		label: Some("this column is non-nullable and has no bound field".to_string()),
		help: Some("add a field mapping to this column or make the column nullable".to_string()),
		notes: vec![],
	}
}

pub fn value_type_mismatch(expected: Type, got: Type) -> Diagnostic {
	Diagnostic {
		code: "ENCODING_003".to_string(),
		message: format!("expected a {} value but got {}", expected, got),
		column: None,
		label: Some("a record field received a value of the wrong type".to_string()),
		help: Some("align the record field type with the column type".to_string()),
		notes: vec![],
	}
}

pub fn unmappable_column(table: &str, column: &str, ty: Type) -> Diagnostic {
	Diagnostic {
		code: "ENCODING_002".to_string(),
		message: format!(
			"column '{}' of table '{}' has no matching record field",
			column, table
		),
		column: Some(DiagnosticColumn {
			name: column.to_string(),
			ty,
		}),
		label: Some("decoding requires a field for every row column".to_string()),
		help: Some(
			"add a field with this name (case-insensitive match is accepted) or configure the codec with ignore_unmapped"
				.to_string(),
		),
		notes: vec![],
	}
}
