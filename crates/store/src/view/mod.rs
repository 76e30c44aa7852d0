// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

mod key_value;
mod record;

pub use key_value::{KeyValueView, TypedKeyValueView};
pub use record::{RecordView, TypedRecordView};

use lattica_catalog::TableDef;
use lattica_type::{Row, Value};

/// Normalize a validated row to the table shape: every declared column
/// present, in declaration order, absent nullable columns filled with
/// `Undefined`.
fn full_row(def: &TableDef, row: &Row) -> Row {
	def.columns
		.iter()
		.map(|column| {
			let value = row.get(&column.name).cloned().unwrap_or(Value::Undefined);
			(column.name.clone(), value)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use lattica_catalog::ColumnDef;
	use lattica_type::{Type, TypeConstraint};

	use super::*;

	#[test]
	fn test_full_row_fills_and_orders() {
		let def = TableDef {
			name: "Album".to_string(),
			columns: vec![
				ColumnDef::new("albumId", TypeConstraint::unconstrained(Type::Int4), false),
				ColumnDef::new("title", TypeConstraint::utf8_max_bytes(25), false),
				ColumnDef::new("releaseYear", TypeConstraint::unconstrained(Type::Int4), true),
			],
			primary_key: vec!["albumId".to_string()],
		};

		let row = Row::new()
			.set("title", Value::utf8("First Light"))
			.set("albumId", Value::int4(348));

		let normalized = full_row(&def, &row);
		let names: Vec<&str> = normalized.column_names().collect();
		assert_eq!(names, vec!["albumId", "title", "releaseYear"]);
		assert_eq!(normalized.get("releaseYear"), Some(&Value::Undefined));
	}
}
