// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_catalog::TableDef;
use lattica_type::{Key, Row, Value};

/// The cluster backend collaborator. Everything below this trait — wire
/// protocol, replication, durability — is outside this layer.
pub trait Backend: Send + Sync {
	/// Attempt to connect to a single endpoint address.
	fn connect(&self, addr: &str) -> crate::Result<Box<dyn Connection>>;
}

/// One logical connection to the cluster backend. Row operations are
/// synchronous and may block; concurrent upserts of the same key resolve
/// last-writer-wins on the backend.
pub trait Connection: Send + Sync + std::fmt::Debug {
	fn create_table(&self, def: &TableDef, if_not_exists: bool) -> crate::Result<()>;

	/// Replace the whole row stored under `key`, inserting if absent.
	fn upsert_row(&self, table: &str, key: Key, row: Row) -> crate::Result<()>;

	fn get_row(&self, table: &str, key: &Key) -> crate::Result<Option<Row>>;

	/// Returns whether a row was present.
	fn delete_row(&self, table: &str, key: &Key) -> crate::Result<bool>;

	/// Snapshot of all rows of a table, ascending by primary key.
	fn scan_table(&self, table: &str) -> crate::Result<Vec<Row>>;

	/// Pass a statement through to the backend, opaque to this layer.
	fn execute_statement(&self, statement: &str, params: &[Value]) -> crate::Result<Vec<Row>>;

	fn close(&self) -> crate::Result<()>;
}
