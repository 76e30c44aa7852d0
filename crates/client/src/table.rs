// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::sync::Arc;

use lattica_catalog::TableDef;
use lattica_store::{
	Connection, KeyValueView, Query, Record, RecordView, TypedKeyValueView, TypedRecordView,
};

/// A handle to one registered table, handing out the row, key/value and
/// query views over it. All views opened from the same handle share the
/// session connection and therefore the same stored rows.
pub struct TableHandle {
	def: TableDef,
	conn: Arc<dyn Connection>,
}

impl std::fmt::Debug for TableHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TableHandle").field("table", &self.def.name).finish_non_exhaustive()
	}
}

impl TableHandle {
	pub(crate) fn new(def: TableDef, conn: Arc<dyn Connection>) -> Self {
		Self {
			def,
			conn,
		}
	}

	pub fn name(&self) -> &str {
		&self.def.name
	}

	pub fn definition(&self) -> &TableDef {
		&self.def
	}

	/// Whole-row view with untyped [`Row`](lattica_type::Row) values.
	pub fn record_view(&self) -> RecordView {
		RecordView::new(self.def.clone(), self.conn.clone())
	}

	/// Whole-row view mapped to a record type.
	pub fn record_view_as<R: Record>(&self) -> TypedRecordView<R> {
		TypedRecordView::new(self.def.clone(), self.conn.clone())
	}

	/// Key/value view with untyped rows for both parts.
	pub fn key_value_view(&self) -> KeyValueView {
		KeyValueView::new(self.def.clone(), self.conn.clone())
	}

	/// Key/value view mapped to a key record and a value record.
	pub fn key_value_view_as<K: Record, V: Record>(&self) -> TypedKeyValueView<K, V> {
		TypedKeyValueView::new(self.def.clone(), self.conn.clone())
	}

	/// Read-only queries over this table.
	pub fn query(&self) -> Query {
		Query::new(self.def.clone(), self.conn.clone())
	}
}
