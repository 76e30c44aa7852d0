// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::{
	error::diagnostic::{Diagnostic, DiagnosticColumn},
	value::Type,
};

pub fn table_already_exists(table: &str) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_001".to_string(),
		message: format!("table '{}' already exists", table),
		column: None,
		label: Some("a table with this name is already defined".to_string()),
		help: Some(
			"pass if_not_exists with an identical definition for an idempotent create, or pick a different name"
				.to_string(),
		),
		notes: vec![],
	}
}

pub fn table_not_found(table: &str) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_002".to_string(),
		message: format!("table '{}' not found", table),
		column: None,
		label: Some("this table is not defined in the registry".to_string()),
		help: Some("create the table first or check for typos in the table name".to_string()),
		notes: vec![],
	}
}

pub fn invalid_definition(table: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_003".to_string(),
		message: format!("invalid definition for table '{}'", table),
		column: None,
		label: Some(reason.into()),
		help: Some(
			"a table needs at least one column and a non-empty primary key of non-nullable, declared columns"
				.to_string(),
		),
		notes: vec![],
	}
}

pub fn missing_key_column(table: &str, column: &str, ty: Type) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_004".to_string(),
		message: format!("row for table '{}' is missing primary-key column '{}'", table, column),
		column: Some(DiagnosticColumn {
			name: column.to_string(),
			ty,
		}),
		label: Some("every primary-key column must be present".to_string()),
		help: Some("set a value for this column before writing the row".to_string()),
		notes: vec![],
	}
}

pub fn column_not_found(column: &str, table: &str, ty: Type) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_005".to_string(),
		message: format!("column '{}' does not exist in table '{}'", column, table),
		column: Some(DiagnosticColumn {
			name: column.to_string(),
			ty,
		}),
		label: Some("this column is not declared by the table".to_string()),
		help: Some("check for typos or adjust the table definition".to_string()),
		notes: vec![],
	}
}

pub fn unexpected_key_column(table: &str, column: &str, ty: Type) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_007".to_string(),
		message: format!(
			"primary-key column '{}' of table '{}' appeared in the value part",
			column, table
		),
		column: Some(DiagnosticColumn {
			name: column.to_string(),
			ty,
		}),
		label: Some("key columns belong to the key part of a key/value pair".to_string()),
		help: Some("move this column into the key".to_string()),
		notes: vec![],
	}
}

pub fn type_mismatch(table: &str, column: &str, expected: Type, got: Type) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_006".to_string(),
		message: format!(
			"column '{}' of table '{}' expects {} but got {}",
			column, table, expected, got
		),
		column: Some(DiagnosticColumn {
			name: column.to_string(),
			ty: expected,
		}),
		label: Some("value type must match the declared column type exactly".to_string()),
		help: Some("convert the value before writing; no implicit widening is applied".to_string()),
		notes: vec![],
	}
}
