// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::sync::{
	Arc,
	atomic::{AtomicBool, Ordering},
};

use lattica_catalog::{Catalog, TableDef};
use lattica_store::{Backend, Connection, Predicate, Query, Rows};
use lattica_type::{
	Key, Row, Value,
	connection::{no_reachable_endpoint, session_closed},
	error,
	query::table_not_found,
	return_error,
};
use tracing::{debug, instrument, warn};

use crate::{SessionConfig, TableHandle};

/// A client session: one backend connection plus the table definitions
/// registered through it. All views handed out by the session share the
/// connection and stop working once the session is closed.
pub struct Session {
	catalog: Catalog,
	conn: Arc<SessionConnection>,
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("tables", &self.catalog.list_tables())
			.field("closed", &self.is_closed())
			.finish_non_exhaustive()
	}
}

impl Session {
	/// Try each configured endpoint in order and open a session on the
	/// first one that accepts.
	#[instrument(name = "session::open", level = "debug", skip_all)]
	pub fn open(config: SessionConfig, backend: &dyn Backend) -> crate::Result<Self> {
		for addr in &config.endpoints {
			match backend.connect(addr) {
				Ok(conn) => {
					debug!(endpoint = %addr, "session connected");
					return Ok(Self {
						catalog: Catalog::new(),
						conn: Arc::new(SessionConnection {
							inner: conn,
							closed: AtomicBool::new(false),
						}),
					});
				}
				Err(err) => {
					warn!(endpoint = %addr, %err, "endpoint rejected connection");
				}
			}
		}
		Err(error!(no_reachable_endpoint(&config.endpoints)))
	}

	/// Register a table definition and create it on the backend. With
	/// `if_not_exists`, an identical existing definition is a no-op;
	/// a conflicting one is still an error.
	pub fn create_table(&self, def: TableDef, if_not_exists: bool) -> crate::Result<TableDef> {
		self.conn.ensure_open()?;
		let def = self.catalog.create_table(def, if_not_exists)?;
		// The catalog already arbitrated name collisions for this
		// session; another session may have created the table on the
		// shared backend first.
		self.conn.create_table(&def, true)?;
		Ok(def)
	}

	/// Look up a registered table and return a handle for opening views
	/// over it.
	pub fn table(&self, name: &str) -> crate::Result<TableHandle> {
		self.conn.ensure_open()?;
		let def = self.catalog.get_table(name)?;
		Ok(TableHandle::new(def, self.conn.clone()))
	}

	/// Open a query facade over a registered table.
	pub fn query(&self, table: &str) -> crate::Result<Query> {
		self.conn.ensure_open()?;
		let Some(def) = self.catalog.find_table(table) else {
			return_error!(table_not_found(table));
		};
		Ok(Query::new(def, self.conn.clone()))
	}

	/// Convenience wrapper over [`Session::query`] for the common
	/// execute-and-collect path.
	pub fn query_rows(
		&self,
		table: &str,
		predicate: Predicate,
		limit: Option<usize>,
	) -> crate::Result<Rows> {
		self.query(table)?.execute(predicate, limit)
	}

	/// Pass a statement through to the backend, opaque to the client.
	pub fn execute(&self, statement: &str, params: &[Value]) -> crate::Result<Vec<Row>> {
		self.conn.execute_statement(statement, params)
	}

	/// Read access to the session's schema registry.
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn is_closed(&self) -> bool {
		self.conn.closed.load(Ordering::Acquire)
	}

	/// Close the session. Idempotent; every operation afterwards fails.
	pub fn close(&self) -> crate::Result<()> {
		if self.conn.closed.swap(true, Ordering::AcqRel) {
			return Ok(());
		}
		debug!("session closed");
		self.conn.inner.close()
	}
}

impl Drop for Session {
	fn drop(&mut self) {
		let _ = self.close();
	}
}

/// A session is itself a [`Connection`], so code written against the
/// backend contract accepts a session directly.
impl Connection for Session {
	fn create_table(&self, def: &TableDef, if_not_exists: bool) -> crate::Result<()> {
		self.conn.create_table(def, if_not_exists)
	}

	fn upsert_row(&self, table: &str, key: Key, row: Row) -> crate::Result<()> {
		self.conn.upsert_row(table, key, row)
	}

	fn get_row(&self, table: &str, key: &Key) -> crate::Result<Option<Row>> {
		self.conn.get_row(table, key)
	}

	fn delete_row(&self, table: &str, key: &Key) -> crate::Result<bool> {
		self.conn.delete_row(table, key)
	}

	fn scan_table(&self, table: &str) -> crate::Result<Vec<Row>> {
		self.conn.scan_table(table)
	}

	fn execute_statement(&self, statement: &str, params: &[Value]) -> crate::Result<Vec<Row>> {
		self.conn.execute_statement(statement, params)
	}

	fn close(&self) -> crate::Result<()> {
		Session::close(self)
	}
}

/// The backend connection wrapped with the session's closed flag. Every
/// delegated operation checks the flag first, so views created before a
/// close fail afterwards instead of reaching a dead connection.
#[derive(Debug)]
struct SessionConnection {
	inner: Box<dyn Connection>,
	closed: AtomicBool,
}

impl SessionConnection {
	fn ensure_open(&self) -> crate::Result<()> {
		if self.closed.load(Ordering::Acquire) {
			return_error!(session_closed());
		}
		Ok(())
	}
}

impl Connection for SessionConnection {
	fn create_table(&self, def: &TableDef, if_not_exists: bool) -> crate::Result<()> {
		self.ensure_open()?;
		self.inner.create_table(def, if_not_exists)
	}

	fn upsert_row(&self, table: &str, key: Key, row: Row) -> crate::Result<()> {
		self.ensure_open()?;
		self.inner.upsert_row(table, key, row)
	}

	fn get_row(&self, table: &str, key: &Key) -> crate::Result<Option<Row>> {
		self.ensure_open()?;
		self.inner.get_row(table, key)
	}

	fn delete_row(&self, table: &str, key: &Key) -> crate::Result<bool> {
		self.ensure_open()?;
		self.inner.delete_row(table, key)
	}

	fn scan_table(&self, table: &str) -> crate::Result<Vec<Row>> {
		self.ensure_open()?;
		self.inner.scan_table(table)
	}

	fn execute_statement(&self, statement: &str, params: &[Value]) -> crate::Result<Vec<Row>> {
		self.ensure_open()?;
		self.inner.execute_statement(statement, params)
	}

	fn close(&self) -> crate::Result<()> {
		self.closed.store(true, Ordering::Release);
		self.inner.close()
	}
}
