// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::{
	Key, Row, Type, TypeConstraint, return_error,
	schema::{invalid_definition, missing_key_column, type_mismatch},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
	pub name: String,
	pub constraint: TypeConstraint,
	pub nullable: bool,
}

impl ColumnDef {
	pub fn new(name: impl Into<String>, constraint: TypeConstraint, nullable: bool) -> Self {
		Self {
			name: name.into(),
			constraint,
			nullable,
		}
	}

	pub fn get_type(&self) -> Type {
		self.constraint.get_type()
	}
}

/// A table definition: an ordered set of columns plus the ordered list of
/// primary-key column names. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
	pub name: String,
	pub columns: Vec<ColumnDef>,
	pub primary_key: Vec<String>,
}

impl TableDef {
	/// Look up a column by exact name.
	pub fn column(&self, name: &str) -> Option<&ColumnDef> {
		self.columns.iter().find(|col| col.name == name)
	}

	/// Look up a column by exact name first, falling back to a
	/// case-insensitive match.
	pub fn column_ci(&self, name: &str) -> Option<&ColumnDef> {
		self.column(name)
			.or_else(|| self.columns.iter().find(|col| col.name.eq_ignore_ascii_case(name)))
	}

	pub fn is_key_column(&self, name: &str) -> bool {
		self.primary_key.iter().any(|key| key == name)
	}

	/// Key columns in primary-key order.
	pub fn key_columns(&self) -> impl Iterator<Item = &ColumnDef> {
		self.primary_key.iter().filter_map(|name| self.column(name))
	}

	/// Non-key columns in declaration order.
	pub fn value_columns(&self) -> impl Iterator<Item = &ColumnDef> {
		self.columns.iter().filter(|col| !self.is_key_column(&col.name))
	}

	/// Extract the primary key of a row, type-checking each component.
	pub fn key_of(&self, row: &Row) -> crate::Result<Key> {
		let mut values = Vec::with_capacity(self.primary_key.len());
		for column in self.key_columns() {
			let Some(value) = row.get(&column.name) else {
				return_error!(missing_key_column(&self.name, &column.name, column.get_type()));
			};
			if value.get_type() != column.get_type() {
				return_error!(type_mismatch(
					&self.name,
					&column.name,
					column.get_type(),
					value.get_type()
				));
			}
			values.push(value.clone());
		}
		Ok(Key(values))
	}

	/// Structural validity: at least one column, unique column names, a
	/// non-empty primary key of declared, non-nullable columns.
	pub fn validate(&self) -> crate::Result<()> {
		if self.columns.is_empty() {
			return_error!(invalid_definition(&self.name, "table has no columns"));
		}
		for (i, column) in self.columns.iter().enumerate() {
			if self.columns[..i].iter().any(|other| other.name == column.name) {
				return_error!(invalid_definition(
					&self.name,
					format!("duplicate column '{}'", column.name)
				));
			}
		}
		if self.primary_key.is_empty() {
			return_error!(invalid_definition(&self.name, "primary key is empty"));
		}
		for (i, key) in self.primary_key.iter().enumerate() {
			if self.primary_key[..i].contains(key) {
				return_error!(invalid_definition(
					&self.name,
					format!("duplicate primary-key column '{}'", key)
				));
			}
			let Some(column) = self.column(key) else {
				return_error!(invalid_definition(
					&self.name,
					format!("primary-key column '{}' is not declared", key)
				));
			};
			if column.nullable {
				return_error!(invalid_definition(
					&self.name,
					format!("primary-key column '{}' must not be nullable", key)
				));
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use lattica_type::Value;

	use super::*;

	fn album_def() -> TableDef {
		TableDef {
			name: "Album".to_string(),
			columns: vec![
				ColumnDef::new("albumId", TypeConstraint::unconstrained(Type::Int4), false),
				ColumnDef::new("title", TypeConstraint::utf8_max_bytes(25), true),
				ColumnDef::new("artistId", TypeConstraint::unconstrained(Type::Int4), false),
				ColumnDef::new("releaseYear", TypeConstraint::unconstrained(Type::Int4), true),
			],
			primary_key: vec!["albumId".to_string(), "artistId".to_string()],
		}
	}

	#[test]
	fn test_valid_definition() {
		album_def().validate().unwrap();
	}

	#[test]
	fn test_empty_primary_key_rejected() {
		let mut def = album_def();
		def.primary_key.clear();
		let err = def.validate().unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_003");
	}

	#[test]
	fn test_undeclared_primary_key_column_rejected() {
		let mut def = album_def();
		def.primary_key = vec!["missing".to_string()];
		let err = def.validate().unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_003");
	}

	#[test]
	fn test_nullable_primary_key_column_rejected() {
		let mut def = album_def();
		def.columns[0].nullable = true;
		let err = def.validate().unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_003");
	}

	#[test]
	fn test_duplicate_column_rejected() {
		let mut def = album_def();
		def.columns.push(ColumnDef::new(
			"title",
			TypeConstraint::unconstrained(Type::Utf8),
			true,
		));
		let err = def.validate().unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_003");
	}

	#[test]
	fn test_column_ci_prefers_exact_match() {
		let def = TableDef {
			name: "t".to_string(),
			columns: vec![
				ColumnDef::new("id", TypeConstraint::unconstrained(Type::Int4), false),
				ColumnDef::new("ID", TypeConstraint::unconstrained(Type::Int8), true),
			],
			primary_key: vec!["id".to_string()],
		};
		assert_eq!(def.column_ci("ID").unwrap().get_type(), Type::Int8);
		assert_eq!(def.column_ci("Id").unwrap().get_type(), Type::Int4);
	}

	#[test]
	fn test_key_of_orders_by_primary_key() {
		let def = album_def();
		let row = Row::new()
			.set("artistId", Value::int4(276))
			.set("albumId", Value::int4(348));

		let key = def.key_of(&row).unwrap();
		assert_eq!(key.values(), &[Value::int4(348), Value::int4(276)]);
	}

	#[test]
	fn test_key_of_missing_component() {
		let def = album_def();
		let row = Row::new().set("albumId", Value::int4(348));
		let err = def.key_of(&row).unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_004");
	}

	#[test]
	fn test_key_of_type_checked() {
		let def = album_def();
		let row = Row::new()
			.set("albumId", Value::utf8("348"))
			.set("artistId", Value::int4(276));
		let err = def.key_of(&row).unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_006");
	}
}
