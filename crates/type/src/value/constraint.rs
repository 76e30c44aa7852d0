// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};

use crate::{
	error::diagnostic::constraint::utf8_exceeds_max_bytes,
	value::{Type, Value},
};

/// Represents a type with optional constraints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConstraint {
	base_type: Type,
	constraint: Option<Constraint>,
}

/// Constraint types for different data types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
	/// Maximum number of bytes for UTF8
	MaxBytes(u32),
}

impl TypeConstraint {
	/// Create an unconstrained type (const for use in static contexts)
	pub const fn unconstrained(ty: Type) -> Self {
		Self {
			base_type: ty,
			constraint: None,
		}
	}

	/// Create a UTF8 type capped at `max_bytes` bytes
	pub const fn utf8_max_bytes(max_bytes: u32) -> Self {
		Self {
			base_type: Type::Utf8,
			constraint: Some(Constraint::MaxBytes(max_bytes)),
		}
	}

	pub fn get_type(&self) -> Type {
		self.base_type
	}

	pub fn constraint(&self) -> &Option<Constraint> {
		&self.constraint
	}

	/// Check a value against the constraint. The value is assumed to already
	/// match the base type.
	pub fn validate_value(&self, column: &str, value: &Value) -> crate::Result<()> {
		match (&self.constraint, value) {
			(Some(Constraint::MaxBytes(max_bytes)), Value::Utf8(text)) => {
				if text.len() > *max_bytes as usize {
					crate::return_error!(utf8_exceeds_max_bytes(column, *max_bytes, text.len()));
				}
				Ok(())
			}
			_ => Ok(()),
		}
	}
}
