// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::sync::Arc;

use lattica_catalog::TableDef;
use lattica_type::{
	Key, Row, Value,
	connection::endpoint_unreachable,
	return_error,
	storage::backend_failure,
};
use tracing::debug;

use crate::{
	backend::{Backend, Connection},
	memory::Memory,
};

/// An in-process cluster backend. Answers on a fixed set of endpoint
/// addresses; every connection shares the same storage, so multiple
/// sessions observe one another's writes.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
	endpoints: Vec<String>,
	memory: Arc<Memory>,
}

impl MemoryBackend {
	pub fn serving(endpoints: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			endpoints: endpoints.into_iter().map(Into::into).collect(),
			memory: Arc::new(Memory::new()),
		}
	}

	pub fn memory(&self) -> &Arc<Memory> {
		&self.memory
	}
}

impl Backend for MemoryBackend {
	fn connect(&self, addr: &str) -> crate::Result<Box<dyn Connection>> {
		if !self.endpoints.iter().any(|endpoint| endpoint == addr) {
			return_error!(endpoint_unreachable(addr));
		}
		debug!(addr, "memory backend accepted connection");
		Ok(Box::new(MemoryConnection {
			memory: Arc::clone(&self.memory),
		}))
	}
}

#[derive(Debug)]
pub struct MemoryConnection {
	memory: Arc<Memory>,
}

impl Connection for MemoryConnection {
	fn create_table(&self, def: &TableDef, if_not_exists: bool) -> crate::Result<()> {
		if self.memory.has_table(&def.name) && !if_not_exists {
			return_error!(backend_failure(format!(
				"table '{}' already exists on the backend",
				def.name
			)));
		}
		self.memory.create_table(&def.name);
		Ok(())
	}

	fn upsert_row(&self, table: &str, key: Key, row: Row) -> crate::Result<()> {
		if !self.memory.upsert(table, key, row) {
			return_error!(backend_failure(format!("unknown table '{}'", table)));
		}
		Ok(())
	}

	fn get_row(&self, table: &str, key: &Key) -> crate::Result<Option<Row>> {
		Ok(self.memory.get(table, key))
	}

	fn delete_row(&self, table: &str, key: &Key) -> crate::Result<bool> {
		Ok(self.memory.remove(table, key))
	}

	fn scan_table(&self, table: &str) -> crate::Result<Vec<Row>> {
		match self.memory.snapshot(table) {
			Some(rows) => Ok(rows),
			None => return_error!(backend_failure(format!("unknown table '{}'", table))),
		}
	}

	fn execute_statement(&self, _statement: &str, _params: &[Value]) -> crate::Result<Vec<Row>> {
		// The memory backend stores rows; it does not parse statements.
		return_error!(backend_failure("the memory backend does not execute statements"))
	}

	fn close(&self) -> crate::Result<()> {
		Ok(())
	}
}
