// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_catalog::{ColumnDef, TableDef};
use lattica_type::{
	Row, Type, Value,
	encoding::{missing_required_field, unmappable_column},
	return_error,
};

/// A typed record with a declared field list — the explicit replacement for
/// reflection-based field discovery. `values` must yield one value per
/// declared field, in declaration order, and `from_values` receives values
/// in the same order (`Undefined` for fields the decoded scope did not
/// cover).
pub trait Record: Sized {
	fn fields() -> &'static [&'static str];

	fn values(&self) -> Vec<Value>;

	fn from_values(values: Vec<Value>) -> crate::Result<Self>;
}

/// A field-to-column binding table, built once per view from a table
/// definition. Fields resolve to columns by exact name first, then
/// case-insensitively.
#[derive(Debug, Clone)]
pub struct RecordCodec {
	table: String,
	bindings: Vec<Binding>,
	ignore_unmapped: bool,
}

#[derive(Debug, Clone)]
struct Binding {
	column: String,
	ty: Type,
	nullable: bool,
	field: Option<usize>,
}

impl RecordCodec {
	/// Bind a record type to every column of the table.
	pub fn for_table<R: Record>(def: &TableDef) -> Self {
		Self::bind(&def.name, def.columns.iter(), R::fields())
	}

	/// Bind a record type to the primary-key columns, in key order.
	pub fn for_key<R: Record>(def: &TableDef) -> Self {
		Self::bind(&def.name, def.key_columns(), R::fields())
	}

	/// Bind a record type to the non-key columns.
	pub fn for_value<R: Record>(def: &TableDef) -> Self {
		Self::bind(&def.name, def.value_columns(), R::fields())
	}

	fn bind<'a>(
		table: &str,
		columns: impl Iterator<Item = &'a ColumnDef>,
		fields: &'static [&'static str],
	) -> Self {
		let bindings = columns
			.map(|column| {
				let field = fields
					.iter()
					.position(|field| *field == column.name)
					.or_else(|| {
						fields.iter().position(|field| {
							field.eq_ignore_ascii_case(&column.name)
						})
					});
				Binding {
					column: column.name.clone(),
					ty: column.get_type(),
					nullable: column.nullable,
					field,
				}
			})
			.collect();
		Self {
			table: table.to_string(),
			bindings,
			ignore_unmapped: false,
		}
	}

	/// Decoding drops row columns without a matching field instead of
	/// failing.
	pub fn ignore_unmapped(mut self) -> Self {
		self.ignore_unmapped = true;
		self
	}

	/// Encode a record into a row carrying every bound column. A column
	/// with no field (or an undefined field value) becomes `Undefined` when
	/// nullable and an error otherwise.
	pub fn encode<R: Record>(&self, record: &R) -> crate::Result<Row> {
		let values = record.values();
		let mut row = Row::new();
		for binding in &self.bindings {
			let value = binding.field.and_then(|i| values.get(i)).cloned();
			match value {
				Some(value) if !value.is_undefined() => {
					row = row.set(binding.column.clone(), value);
				}
				_ if binding.nullable => {
					row = row.set(binding.column.clone(), Value::Undefined);
				}
				_ => return_error!(missing_required_field(
					&self.table,
					&binding.column,
					binding.ty
				)),
			}
		}
		Ok(row)
	}

	/// Decode a row into a record. Every row column must resolve to a
	/// declared field unless `ignore_unmapped` is configured.
	pub fn decode<R: Record>(&self, row: &Row) -> crate::Result<R> {
		let mut values = vec![Value::Undefined; R::fields().len()];
		for (name, value) in row.iter() {
			let field = self
				.bindings
				.iter()
				.find(|binding| binding.column == name)
				.and_then(|binding| binding.field);
			match field {
				Some(i) if i < values.len() => values[i] = value.clone(),
				_ if self.ignore_unmapped => {}
				_ => return_error!(unmappable_column(
					&self.table,
					name,
					value.get_type()
				)),
			}
		}
		R::from_values(values)
	}
}
