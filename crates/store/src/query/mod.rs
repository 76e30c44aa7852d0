// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::sync::Arc;

use lattica_catalog::TableDef;
use lattica_type::{Row, Value, query::invalid_predicate, return_error};
use tracing::instrument;

use crate::Connection;

/// A structured filter over the columns of one table. No string parsing,
/// no projection, no joins — a predicate either matches a row or it does
/// not.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
	/// Matches every row.
	All,
	Eq(String, Value),
	Lt(String, Value),
	Le(String, Value),
	Gt(String, Value),
	Ge(String, Value),
	And(Vec<Predicate>),
}

impl Predicate {
	pub fn all() -> Self {
		Self::All
	}

	pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Eq(column.into(), value.into())
	}

	pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Lt(column.into(), value.into())
	}

	pub fn le(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Le(column.into(), value.into())
	}

	pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Gt(column.into(), value.into())
	}

	pub fn ge(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Ge(column.into(), value.into())
	}

	pub fn and(predicates: impl IntoIterator<Item = Predicate>) -> Self {
		Self::And(predicates.into_iter().collect())
	}

	/// Every referenced column must exist and the comparison value must
	/// carry the column's type.
	pub fn validate(&self, def: &TableDef) -> crate::Result<()> {
		match self {
			Self::All => Ok(()),
			Self::Eq(column, value)
			| Self::Lt(column, value)
			| Self::Le(column, value)
			| Self::Gt(column, value)
			| Self::Ge(column, value) => {
				let Some(def_column) = def.column(column) else {
					return_error!(invalid_predicate(&def.name, column));
				};
				if value.is_undefined() || value.get_type() != def_column.get_type() {
					return_error!(invalid_predicate(&def.name, column));
				}
				Ok(())
			}
			Self::And(predicates) => {
				for predicate in predicates {
					predicate.validate(def)?;
				}
				Ok(())
			}
		}
	}

	/// An absent or undefined column value never matches a comparison.
	pub fn matches(&self, row: &Row) -> bool {
		match self {
			Self::All => true,
			Self::Eq(column, value) => Self::compare(row, column, value, |o| o.is_eq()),
			Self::Lt(column, value) => Self::compare(row, column, value, |o| o.is_lt()),
			Self::Le(column, value) => Self::compare(row, column, value, |o| o.is_le()),
			Self::Gt(column, value) => Self::compare(row, column, value, |o| o.is_gt()),
			Self::Ge(column, value) => Self::compare(row, column, value, |o| o.is_ge()),
			Self::And(predicates) => predicates.iter().all(|p| p.matches(row)),
		}
	}

	fn compare(
		row: &Row,
		column: &str,
		value: &Value,
		check: impl Fn(std::cmp::Ordering) -> bool,
	) -> bool {
		row.get(column)
			.and_then(|stored| stored.partial_cmp(value))
			.is_some_and(check)
	}
}

/// A restartable cursor over a point-in-time snapshot of one table,
/// ascending by primary key. The predicate and limit apply lazily as the
/// cursor advances; restarting replays the same snapshot from the top.
#[derive(Debug)]
pub struct Rows {
	snapshot: Vec<Row>,
	predicate: Predicate,
	limit: Option<usize>,
	pos: usize,
	yielded: usize,
}

impl Rows {
	fn new(snapshot: Vec<Row>, predicate: Predicate, limit: Option<usize>) -> Self {
		Self {
			snapshot,
			predicate,
			limit,
			pos: 0,
			yielded: 0,
		}
	}

	/// Rewind to the start of the snapshot. Rows written after the query
	/// executed stay invisible.
	pub fn restart(&mut self) {
		self.pos = 0;
		self.yielded = 0;
	}
}

impl Iterator for Rows {
	type Item = Row;

	fn next(&mut self) -> Option<Row> {
		if self.limit.is_some_and(|limit| self.yielded >= limit) {
			return None;
		}
		while self.pos < self.snapshot.len() {
			let row = &self.snapshot[self.pos];
			self.pos += 1;
			if self.predicate.matches(row) {
				self.yielded += 1;
				return Some(row.clone());
			}
		}
		None
	}
}

/// Read-only queries against one table.
pub struct Query {
	def: TableDef,
	conn: Arc<dyn Connection>,
}

impl std::fmt::Debug for Query {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Query").field("table", &self.def.name).finish_non_exhaustive()
	}
}

impl Query {
	pub fn new(def: TableDef, conn: Arc<dyn Connection>) -> Self {
		Self {
			def,
			conn,
		}
	}

	/// Snapshot the table and return a cursor filtered by `predicate`,
	/// yielding at most `limit` rows when given.
	#[instrument(name = "query::execute", level = "debug", skip_all, fields(table = %self.def.name))]
	pub fn execute(&self, predicate: Predicate, limit: Option<usize>) -> crate::Result<Rows> {
		predicate.validate(&self.def)?;
		let snapshot = self.conn.scan_table(&self.def.name)?;
		Ok(Rows::new(snapshot, predicate, limit))
	}
}

#[cfg(test)]
mod tests {
	use lattica_catalog::ColumnDef;
	use lattica_type::{Type, TypeConstraint};

	use super::*;

	fn album_def() -> TableDef {
		TableDef {
			name: "Album".to_string(),
			columns: vec![
				ColumnDef::new("albumId", TypeConstraint::unconstrained(Type::Int4), false),
				ColumnDef::new("title", TypeConstraint::utf8_max_bytes(25), false),
				ColumnDef::new("releaseYear", TypeConstraint::unconstrained(Type::Int4), true),
			],
			primary_key: vec!["albumId".to_string()],
		}
	}

	fn album(id: i32, title: &str, year: Option<i32>) -> Row {
		Row::new()
			.set("albumId", Value::int4(id))
			.set("title", Value::utf8(title))
			.set(
				"releaseYear",
				year.map(Value::int4).unwrap_or(Value::Undefined),
			)
	}

	#[test]
	fn test_eq_matches() {
		let predicate = Predicate::eq("albumId", 5);
		assert!(predicate.matches(&album(5, "First Light", Some(2023))));
		assert!(!predicate.matches(&album(6, "Technique", Some(1989))));
	}

	#[test]
	fn test_range_matches() {
		let row = album(5, "First Light", Some(2023));
		assert!(Predicate::gt("releaseYear", 2000).matches(&row));
		assert!(Predicate::ge("releaseYear", 2023).matches(&row));
		assert!(!Predicate::lt("releaseYear", 2023).matches(&row));
		assert!(Predicate::le("releaseYear", 2023).matches(&row));
	}

	#[test]
	fn test_and_matches_all() {
		let predicate = Predicate::and([
			Predicate::ge("albumId", 1),
			Predicate::lt("releaseYear", 2000),
		]);
		assert!(predicate.matches(&album(5, "Technique", Some(1989))));
		assert!(!predicate.matches(&album(5, "First Light", Some(2023))));
	}

	#[test]
	fn test_undefined_never_matches_comparison() {
		let row = album(5, "First Light", None);
		assert!(!Predicate::eq("releaseYear", 2023).matches(&row));
		assert!(!Predicate::lt("releaseYear", 2023).matches(&row));
		assert!(Predicate::all().matches(&row));
	}

	#[test]
	fn test_validate_unknown_column() {
		let err = Predicate::eq("genre", "ambient")
			.validate(&album_def())
			.unwrap_err();
		assert_eq!(err.diagnostic().code, "QUERY_002");
	}

	#[test]
	fn test_validate_type_mismatch() {
		let err = Predicate::eq("albumId", "five")
			.validate(&album_def())
			.unwrap_err();
		assert_eq!(err.diagnostic().code, "QUERY_002");
	}

	#[test]
	fn test_validate_nested() {
		let predicate = Predicate::and([
			Predicate::ge("albumId", 1),
			Predicate::eq("genre", "ambient"),
		]);
		assert_eq!(
			predicate.validate(&album_def()).unwrap_err().diagnostic().code,
			"QUERY_002"
		);
	}

	#[test]
	fn test_rows_limit_and_restart() {
		let snapshot = vec![
			album(1, "Movement", Some(1981)),
			album(2, "Low-Life", Some(1985)),
			album(3, "Technique", Some(1989)),
		];
		let mut rows = Rows::new(snapshot, Predicate::all(), Some(2));

		let first: Vec<Row> = rows.by_ref().collect();
		assert_eq!(first.len(), 2);
		assert_eq!(first[0].get("albumId"), Some(&Value::int4(1)));

		rows.restart();
		let second: Vec<Row> = rows.collect();
		assert_eq!(first, second);
	}

	#[test]
	fn test_rows_filters_lazily() {
		let snapshot = vec![
			album(1, "Movement", Some(1981)),
			album(2, "Low-Life", Some(1985)),
			album(3, "Technique", Some(1989)),
		];
		let rows = Rows::new(snapshot, Predicate::gt("releaseYear", 1982), Some(1));

		let matched: Vec<Row> = rows.collect();
		assert_eq!(matched.len(), 1);
		assert_eq!(matched[0].get("albumId"), Some(&Value::int4(2)));
	}
}
