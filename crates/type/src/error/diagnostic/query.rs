// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::error::diagnostic::{Diagnostic, DiagnosticColumn};

pub fn table_not_found(table: &str) -> Diagnostic {
	Diagnostic {
		code: "QUERY_001".to_string(),
		message: format!("cannot query unknown table '{}'", table),
		column: None,
		label: Some("the queried table is not defined".to_string()),
		help: Some("create the table before querying it".to_string()),
		notes: vec![],
	}
}

pub fn invalid_predicate(table: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "QUERY_002".to_string(),
		message: format!(
			"predicate references column '{}' which is not declared by table '{}'",
			column, table
		),
		column: Some(DiagnosticColumn {
			name: column.to_string(),
			ty: crate::value::Type::Undefined,
		}),
		label: Some("predicates may only reference declared columns".to_string()),
		help: Some("check the column name against the table definition".to_string()),
		notes: vec![],
	}
}
