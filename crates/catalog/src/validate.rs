// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::{
	Row,
	encoding::missing_required_field,
	return_error,
	schema::{column_not_found, missing_key_column, type_mismatch},
};

use crate::table::TableDef;

/// Validate a row against a table definition.
///
/// A row may carry every declared column or a subset, as long as the subset
/// contains all primary-key columns and every non-nullable column. Types
/// must match the declared column type exactly; no numeric widening.
/// Validation never mutates anything, so a failed check leaves any store
/// untouched.
pub fn validate_row(def: &TableDef, row: &Row) -> crate::Result<()> {
	for (name, value) in row.iter() {
		let Some(column) = def.column(name) else {
			return_error!(column_not_found(name, &def.name, value.get_type()));
		};
		if value.is_undefined() {
			if !column.nullable {
				return_error!(type_mismatch(
					&def.name,
					&column.name,
					column.get_type(),
					value.get_type()
				));
			}
			continue;
		}
		if value.get_type() != column.get_type() {
			return_error!(type_mismatch(
				&def.name,
				&column.name,
				column.get_type(),
				value.get_type()
			));
		}
		column.constraint.validate_value(&column.name, value)?;
	}

	for column in def.key_columns() {
		if !row.contains(&column.name) {
			return_error!(missing_key_column(&def.name, &column.name, column.get_type()));
		}
	}

	for column in def.value_columns() {
		if !column.nullable && !row.contains(&column.name) {
			return_error!(missing_required_field(&def.name, &column.name, column.get_type()));
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use lattica_type::{Type, TypeConstraint, Value};

	use super::*;
	use crate::table::ColumnDef;

	fn album_def() -> TableDef {
		TableDef {
			name: "Album".to_string(),
			columns: vec![
				ColumnDef::new("albumId", TypeConstraint::unconstrained(Type::Int4), false),
				ColumnDef::new("title", TypeConstraint::utf8_max_bytes(25), false),
				ColumnDef::new("artistId", TypeConstraint::unconstrained(Type::Int4), false),
				ColumnDef::new("releaseYear", TypeConstraint::unconstrained(Type::Int4), true),
			],
			primary_key: vec!["albumId".to_string(), "artistId".to_string()],
		}
	}

	fn valid_row() -> Row {
		Row::new()
			.set("albumId", Value::int4(348))
			.set("title", Value::utf8("First Light"))
			.set("artistId", Value::int4(276))
			.set("releaseYear", Value::int4(2023))
	}

	#[test]
	fn test_full_row_passes() {
		validate_row(&album_def(), &valid_row()).unwrap();
	}

	#[test]
	fn test_nullable_column_may_be_absent() {
		let row = Row::new()
			.set("albumId", Value::int4(348))
			.set("title", Value::utf8("First Light"))
			.set("artistId", Value::int4(276));
		validate_row(&album_def(), &row).unwrap();
	}

	#[test]
	fn test_unknown_column() {
		let row = valid_row().set("label", Value::utf8("Factory"));
		let err = validate_row(&album_def(), &row).unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_005");
		assert_eq!(err.diagnostic().column.as_ref().unwrap().name, "label");
	}

	#[test]
	fn test_missing_key_column() {
		let row = Row::new()
			.set("albumId", Value::int4(348))
			.set("title", Value::utf8("First Light"));
		let err = validate_row(&album_def(), &row).unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_004");
		assert_eq!(err.diagnostic().column.as_ref().unwrap().name, "artistId");
	}

	#[test]
	fn test_missing_non_nullable_column() {
		let row = Row::new()
			.set("albumId", Value::int4(348))
			.set("artistId", Value::int4(276));
		let err = validate_row(&album_def(), &row).unwrap_err();
		assert_eq!(err.diagnostic().code, "ENCODING_001");
		assert_eq!(err.diagnostic().column.as_ref().unwrap().name, "title");
	}

	#[test]
	fn test_type_mismatch_names_offending_column() {
		let row = valid_row().set("releaseYear", Value::utf8("2023"));
		let err = validate_row(&album_def(), &row).unwrap_err();
		let diagnostic = err.diagnostic();
		assert_eq!(diagnostic.code, "SCHEMA_006");
		assert_eq!(diagnostic.column.as_ref().unwrap().name, "releaseYear");
	}

	#[test]
	fn test_no_numeric_widening() {
		let row = valid_row().set("releaseYear", Value::int8(2023));
		let err = validate_row(&album_def(), &row).unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_006");
	}

	#[test]
	fn test_undefined_in_non_nullable_column() {
		let row = valid_row().set("title", Value::Undefined);
		let err = validate_row(&album_def(), &row).unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_006");
	}

	#[test]
	fn test_undefined_in_nullable_column() {
		let row = valid_row().set("releaseYear", Value::Undefined);
		validate_row(&album_def(), &row).unwrap();
	}

	#[test]
	fn test_constraint_checked() {
		let row = valid_row().set("title", Value::utf8("x".repeat(26)));
		let err = validate_row(&album_def(), &row).unwrap_err();
		assert_eq!(err.diagnostic().code, "CONSTRAINT_001");
	}
}
