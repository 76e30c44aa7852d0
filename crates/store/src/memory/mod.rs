// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use crossbeam_skiplist::SkipMap;
use lattica_type::{Key, Row};

mod backend;

pub use backend::{MemoryBackend, MemoryConnection};

/// In-memory row storage: one ordered map per table, rows ordered by
/// primary key. Serves as the standalone stand-in for a real cluster
/// backend; all operations touch a single row at a time.
#[derive(Debug, Default)]
pub struct Memory {
	tables: SkipMap<String, TableRows>,
}

#[derive(Debug, Default)]
struct TableRows {
	rows: SkipMap<Key, Row>,
}

impl Memory {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn create_table(&self, name: &str) {
		self.tables.get_or_insert_with(name.to_string(), TableRows::default);
	}

	pub fn has_table(&self, name: &str) -> bool {
		self.tables.contains_key(name)
	}

	pub fn upsert(&self, table: &str, key: Key, row: Row) -> bool {
		match self.tables.get(table) {
			Some(entry) => {
				entry.value().rows.insert(key, row);
				true
			}
			None => false,
		}
	}

	pub fn get(&self, table: &str, key: &Key) -> Option<Row> {
		self.tables
			.get(table)
			.and_then(|entry| entry.value().rows.get(key).map(|row| row.value().clone()))
	}

	pub fn remove(&self, table: &str, key: &Key) -> bool {
		self.tables
			.get(table)
			.map(|entry| entry.value().rows.remove(key).is_some())
			.unwrap_or(false)
	}

	/// Snapshot of every row of a table, ascending by key. Iteration after
	/// the snapshot tolerates concurrent mutation by construction.
	pub fn snapshot(&self, table: &str) -> Option<Vec<Row>> {
		self.tables
			.get(table)
			.map(|entry| entry.value().rows.iter().map(|row| row.value().clone()).collect())
	}

	pub fn row_count(&self, table: &str) -> usize {
		self.tables.get(table).map(|entry| entry.value().rows.len()).unwrap_or(0)
	}
}
