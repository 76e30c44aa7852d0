// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::sync::Arc;

use lattica_catalog::{TableDef, validate_row};
use lattica_type::Row;
use tracing::instrument;

use crate::{
	Connection,
	codec::{Record, RecordCodec},
	view::full_row,
};

/// Whole-row access to one table. Every write is validated against the
/// table definition before it reaches the backend, so an invalid row
/// never mutates stored state.
pub struct RecordView {
	def: TableDef,
	conn: Arc<dyn Connection>,
}

impl RecordView {
	pub fn new(def: TableDef, conn: Arc<dyn Connection>) -> Self {
		Self {
			def,
			conn,
		}
	}

	pub fn table(&self) -> &str {
		&self.def.name
	}

	/// Insert or fully replace the row identified by the primary-key
	/// fields of `row`.
	#[instrument(name = "view::record::upsert", level = "trace", skip_all, fields(table = %self.def.name))]
	pub fn upsert(&self, row: &Row) -> crate::Result<()> {
		validate_row(&self.def, row)?;
		let row = full_row(&self.def, row);
		let key = self.def.key_of(&row)?;
		self.conn.upsert_row(&self.def.name, key, row)
	}

	/// Fetch the row whose primary key matches the key fields of
	/// `key_row`. Non-key fields in `key_row` are ignored.
	#[instrument(name = "view::record::get", level = "trace", skip_all, fields(table = %self.def.name))]
	pub fn get(&self, key_row: &Row) -> crate::Result<Option<Row>> {
		let key = self.def.key_of(key_row)?;
		self.conn.get_row(&self.def.name, &key)
	}

	/// Returns whether a row was present.
	#[instrument(name = "view::record::delete", level = "trace", skip_all, fields(table = %self.def.name))]
	pub fn delete(&self, key_row: &Row) -> crate::Result<bool> {
		let key = self.def.key_of(key_row)?;
		self.conn.delete_row(&self.def.name, &key)
	}

	pub fn contains(&self, key_row: &Row) -> crate::Result<bool> {
		Ok(self.get(key_row)?.is_some())
	}
}

/// [`RecordView`] with rows mapped to a record type through a
/// [`RecordCodec`] bound at construction.
pub struct TypedRecordView<R: Record> {
	inner: RecordView,
	codec: RecordCodec,
	_record: std::marker::PhantomData<R>,
}

impl<R: Record> TypedRecordView<R> {
	pub fn new(def: TableDef, conn: Arc<dyn Connection>) -> Self {
		let codec = RecordCodec::for_table::<R>(&def);
		Self {
			inner: RecordView::new(def, conn),
			codec,
			_record: std::marker::PhantomData,
		}
	}

	pub fn upsert(&self, record: &R) -> crate::Result<()> {
		let row = self.codec.encode(record)?;
		self.inner.upsert(&row)
	}

	/// Fetch by a key record carrying the primary-key fields. The key
	/// record type may differ from `R` — a dedicated key struct works as
	/// well as a full record with non-key fields left unset.
	pub fn get<K: Record>(&self, key: &K) -> crate::Result<Option<R>> {
		let key_row = RecordCodec::for_key::<K>(&self.inner.def).encode(key)?;
		match self.inner.get(&key_row)? {
			Some(row) => Ok(Some(self.codec.decode(&row)?)),
			None => Ok(None),
		}
	}

	pub fn delete<K: Record>(&self, key: &K) -> crate::Result<bool> {
		let key_row = RecordCodec::for_key::<K>(&self.inner.def).encode(key)?;
		self.inner.delete(&key_row)
	}

	pub fn contains<K: Record>(&self, key: &K) -> crate::Result<bool> {
		Ok(self.get(key)?.is_some())
	}
}
