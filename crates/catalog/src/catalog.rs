// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::HashMap;

use lattica_type::{
	Row, return_error,
	schema::{table_already_exists, table_not_found},
};
use parking_lot::RwLock;
use tracing::instrument;

use crate::table::TableDef;

/// The schema registry. Owns every table definition for the lifetime of a
/// session; definitions are immutable once registered.
#[derive(Debug, Default)]
pub struct Catalog {
	tables: RwLock<HashMap<String, TableDef>>,
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a table definition.
	///
	/// Re-registering an identical definition with `if_not_exists` is a
	/// no-op. Any other collision on the name is an error; a same-name
	/// definition that differs is never silently adopted.
	#[instrument(name = "catalog::table::create", level = "debug", skip(self, def), fields(table = %def.name))]
	pub fn create_table(&self, def: TableDef, if_not_exists: bool) -> crate::Result<TableDef> {
		def.validate()?;

		let mut tables = self.tables.write();
		if let Some(existing) = tables.get(&def.name) {
			if if_not_exists && *existing == def {
				return Ok(def);
			}
			return_error!(table_already_exists(&def.name));
		}
		tables.insert(def.name.clone(), def.clone());
		Ok(def)
	}

	#[instrument(name = "catalog::table::find", level = "trace", skip(self))]
	pub fn find_table(&self, name: &str) -> Option<TableDef> {
		self.tables.read().get(name).cloned()
	}

	#[instrument(name = "catalog::table::get", level = "trace", skip(self))]
	pub fn get_table(&self, name: &str) -> crate::Result<TableDef> {
		self.find_table(name).ok_or_else(|| lattica_type::error!(table_not_found(name)))
	}

	/// Names of all registered tables, sorted.
	pub fn list_tables(&self) -> Vec<String> {
		let mut names: Vec<String> = self.tables.read().keys().cloned().collect();
		names.sort();
		names
	}

	/// Validate a row against a registered table. See [`crate::validate_row`].
	#[instrument(name = "catalog::row::validate", level = "trace", skip(self, row))]
	pub fn validate_row(&self, table: &str, row: &Row) -> crate::Result<()> {
		let def = self.get_table(table)?;
		crate::validate_row(&def, row)
	}
}

#[cfg(test)]
mod tests {
	use lattica_type::{Type, TypeConstraint};

	use super::*;
	use crate::table::ColumnDef;

	fn artist_def() -> TableDef {
		TableDef {
			name: "Artist".to_string(),
			columns: vec![
				ColumnDef::new("artistId", TypeConstraint::unconstrained(Type::Int4), false),
				ColumnDef::new("name", TypeConstraint::unconstrained(Type::Utf8), true),
			],
			primary_key: vec!["artistId".to_string()],
		}
	}

	#[test]
	fn test_create_and_get() {
		let catalog = Catalog::new();
		catalog.create_table(artist_def(), false).unwrap();

		let def = catalog.get_table("Artist").unwrap();
		assert_eq!(def, artist_def());
	}

	#[test]
	fn test_create_twice_if_not_exists_is_noop() {
		let catalog = Catalog::new();
		catalog.create_table(artist_def(), true).unwrap();
		catalog.create_table(artist_def(), true).unwrap();
		assert_eq!(catalog.list_tables(), vec!["Artist".to_string()]);
	}

	#[test]
	fn test_create_duplicate_fails() {
		let catalog = Catalog::new();
		catalog.create_table(artist_def(), false).unwrap();
		let err = catalog.create_table(artist_def(), false).unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_001");
	}

	#[test]
	fn test_create_conflicting_definition_fails_even_if_not_exists() {
		let catalog = Catalog::new();
		catalog.create_table(artist_def(), true).unwrap();

		let mut conflicting = artist_def();
		conflicting.columns[1].nullable = false;
		let err = catalog.create_table(conflicting, true).unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_001");
	}

	#[test]
	fn test_invalid_definition_is_not_registered() {
		let catalog = Catalog::new();
		let mut def = artist_def();
		def.primary_key.clear();

		let err = catalog.create_table(def, false).unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_003");
		assert!(catalog.find_table("Artist").is_none());
	}

	#[test]
	fn test_get_unknown_table() {
		let catalog = Catalog::new();
		let err = catalog.get_table("Album").unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_002");
	}
}
