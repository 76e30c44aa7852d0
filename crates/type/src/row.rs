// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// An ordered mapping from column name to [`Value`].
///
/// A row is a free-standing value: it carries no reference to the table it
/// was validated against. Fields keep insertion order; setting a field that
/// already exists replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
	fields: Vec<(String, Value)>,
}

impl Row {
	pub fn new() -> Self {
		Self {
			fields: Vec::new(),
		}
	}

	/// Set a field, replacing any previous value under the same name.
	pub fn set(mut self, name: impl Into<String>, value: Value) -> Self {
		let name = name.into();
		match self.fields.iter_mut().find(|(n, _)| *n == name) {
			Some((_, slot)) => *slot = value,
			None => self.fields.push((name, value)),
		}
		self
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.fields.iter().any(|(n, _)| n == name)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.fields.iter().map(|(n, v)| (n.as_str(), v))
	}

	pub fn column_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|(n, _)| n.as_str())
	}

	/// Project the row onto the given columns, in the given order. Columns
	/// absent from the row are skipped.
	pub fn project<'a>(&self, columns: impl IntoIterator<Item = &'a str>) -> Row {
		let mut projected = Row::new();
		for name in columns {
			if let Some(value) = self.get(name) {
				projected = projected.set(name, value.clone());
			}
		}
		projected
	}
}

impl Display for Row {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("{")?;
		for (i, (name, value)) in self.fields.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}: {}", name, value)?;
		}
		f.write_str("}")
	}
}

impl FromIterator<(String, Value)> for Row {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		iter.into_iter().fold(Row::new(), |row, (name, value)| row.set(name, value))
	}
}

/// The primary-key values of a row, in primary-key column order.
///
/// Keys of rows in one table always hold the same value types in the same
/// positions, which makes the ordering below total in practice; mixed-type
/// positions fall back to the type rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key(pub Vec<Value>);

impl Key {
	pub fn values(&self) -> &[Value] {
		&self.0
	}
}

impl PartialOrd for Key {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Key {
	fn cmp(&self, other: &Self) -> Ordering {
		for (l, r) in self.0.iter().zip(other.0.iter()) {
			let ordering = l
				.partial_cmp(r)
				.unwrap_or_else(|| l.get_type().cmp(&r.get_type()));
			if ordering != Ordering::Equal {
				return ordering;
			}
		}
		self.0.len().cmp(&other.0.len())
	}
}

impl Display for Key {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("(")?;
		for (i, value) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			Display::fmt(value, f)?;
		}
		f.write_str(")")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_set_replaces_existing_field() {
		let row = Row::new()
			.set("artistId", Value::int4(276))
			.set("name", Value::utf8("New Discovery Band"))
			.set("artistId", Value::int4(277));

		assert_eq!(row.len(), 2);
		assert_eq!(row.get("artistId"), Some(&Value::int4(277)));
	}

	#[test]
	fn test_insertion_order_preserved() {
		let row = Row::new()
			.set("b", Value::int4(2))
			.set("a", Value::int4(1));

		let names: Vec<&str> = row.column_names().collect();
		assert_eq!(names, vec!["b", "a"]);
	}

	#[test]
	fn test_project_skips_absent_columns() {
		let row = Row::new()
			.set("albumId", Value::int4(348))
			.set("title", Value::utf8("First Light"));

		let projected = row.project(["title", "releaseYear"]);
		assert_eq!(projected.len(), 1);
		assert_eq!(projected.get("title"), Some(&Value::utf8("First Light")));
	}

	#[test]
	fn test_key_ordering_is_componentwise() {
		let a = Key(vec![Value::int4(348), Value::int4(276)]);
		let b = Key(vec![Value::int4(348), Value::int4(277)]);
		let c = Key(vec![Value::int4(349), Value::int4(0)]);

		assert!(a < b);
		assert!(b < c);
	}

	#[test]
	fn test_key_equality() {
		let a = Key(vec![Value::int4(5)]);
		let b = Key(vec![Value::int4(5)]);
		assert_eq!(a, b);
	}

	#[test]
	fn test_row_serde_round_trip() {
		let row = Row::new()
			.set("albumId", Value::int4(348))
			.set("title", Value::utf8("First Light"))
			.set("releaseYear", Value::Undefined);

		let json = serde_json::to_string(&row).unwrap();
		let decoded: Row = serde_json::from_str(&json).unwrap();
		assert_eq!(decoded, row);
	}
}
