// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::sync::Arc;

use lattica_catalog::{TableDef, validate_row};
use lattica_type::{Row, Value, return_error, schema::unexpected_key_column};
use tracing::instrument;

use crate::{
	Connection,
	codec::{Record, RecordCodec},
	view::full_row,
};

/// Key/value access to one table: the primary-key columns form the key
/// part, all remaining columns the value part. Backed by the same stored
/// rows as [`RecordView`](crate::RecordView), so both views of a table
/// always agree.
pub struct KeyValueView {
	def: TableDef,
	conn: Arc<dyn Connection>,
}

impl KeyValueView {
	pub fn new(def: TableDef, conn: Arc<dyn Connection>) -> Self {
		Self {
			def,
			conn,
		}
	}

	pub fn table(&self) -> &str {
		&self.def.name
	}

	/// Store `value` under `key`, replacing any previous value. The value
	/// part must not carry key columns.
	#[instrument(name = "view::kv::put", level = "trace", skip_all, fields(table = %self.def.name))]
	pub fn put(&self, key: &Row, value: &Row) -> crate::Result<()> {
		for (name, value) in value.iter() {
			if self.def.is_key_column(name) {
				return_error!(unexpected_key_column(
					&self.def.name,
					name,
					value.get_type()
				));
			}
		}
		let row: Row = key
			.iter()
			.chain(value.iter())
			.map(|(name, value)| (name.to_string(), value.clone()))
			.collect();
		validate_row(&self.def, &row)?;
		let row = full_row(&self.def, &row);
		let key = self.def.key_of(&row)?;
		self.conn.upsert_row(&self.def.name, key, row)
	}

	/// Fetch the value part stored under `key`, projected to the non-key
	/// columns.
	#[instrument(name = "view::kv::get", level = "trace", skip_all, fields(table = %self.def.name))]
	pub fn get(&self, key: &Row) -> crate::Result<Option<Row>> {
		let key = self.def.key_of(key)?;
		let row = self.conn.get_row(&self.def.name, &key)?;
		Ok(row.map(|row| self.value_part(&row)))
	}

	/// Returns whether an entry was present.
	#[instrument(name = "view::kv::remove", level = "trace", skip_all, fields(table = %self.def.name))]
	pub fn remove(&self, key: &Row) -> crate::Result<bool> {
		let key = self.def.key_of(key)?;
		self.conn.delete_row(&self.def.name, &key)
	}

	pub fn contains(&self, key: &Row) -> crate::Result<bool> {
		let key = self.def.key_of(key)?;
		Ok(self.conn.get_row(&self.def.name, &key)?.is_some())
	}

	fn value_part(&self, row: &Row) -> Row {
		self.def
			.value_columns()
			.map(|column| {
				let value = row.get(&column.name).cloned().unwrap_or(Value::Undefined);
				(column.name.clone(), value)
			})
			.collect()
	}
}

/// [`KeyValueView`] with both parts mapped to record types.
pub struct TypedKeyValueView<K: Record, V: Record> {
	inner: KeyValueView,
	key_codec: RecordCodec,
	value_codec: RecordCodec,
	_key: std::marker::PhantomData<K>,
	_value: std::marker::PhantomData<V>,
}

impl<K: Record, V: Record> TypedKeyValueView<K, V> {
	pub fn new(def: TableDef, conn: Arc<dyn Connection>) -> Self {
		let key_codec = RecordCodec::for_key::<K>(&def);
		let value_codec = RecordCodec::for_value::<V>(&def);
		Self {
			inner: KeyValueView::new(def, conn),
			key_codec,
			value_codec,
			_key: std::marker::PhantomData,
			_value: std::marker::PhantomData,
		}
	}

	pub fn put(&self, key: &K, value: &V) -> crate::Result<()> {
		let key_row = self.key_codec.encode(key)?;
		let value_row = self.value_codec.encode(value)?;
		self.inner.put(&key_row, &value_row)
	}

	pub fn get(&self, key: &K) -> crate::Result<Option<V>> {
		let key_row = self.key_codec.encode(key)?;
		match self.inner.get(&key_row)? {
			Some(row) => Ok(Some(self.value_codec.decode(&row)?)),
			None => Ok(None),
		}
	}

	pub fn remove(&self, key: &K) -> crate::Result<bool> {
		let key_row = self.key_codec.encode(key)?;
		self.inner.remove(&key_row)
	}

	pub fn contains(&self, key: &K) -> crate::Result<bool> {
		let key_row = self.key_codec.encode(key)?;
		self.inner.contains(&key_row)
	}
}
