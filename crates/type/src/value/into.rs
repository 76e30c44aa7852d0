// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::{
	Error,
	error::diagnostic::encoding::value_type_mismatch,
	value::{Type, Value},
};

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int4(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::float8(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl<T> From<Option<T>> for Value
where
	T: Into<Value>,
{
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Undefined)
	}
}

macro_rules! impl_try_from_value {
	($target:ty, $variant:ident, $ty:expr) => {
		impl TryFrom<Value> for $target {
			type Error = Error;

			fn try_from(value: Value) -> Result<Self, Self::Error> {
				match value {
					Value::$variant(v) => Ok(v.into()),
					other => Err(Error(value_type_mismatch($ty, other.get_type()))),
				}
			}
		}

		impl TryFrom<Value> for Option<$target> {
			type Error = Error;

			fn try_from(value: Value) -> Result<Self, Self::Error> {
				match value {
					Value::Undefined => Ok(None),
					other => <$target>::try_from(other).map(Some),
				}
			}
		}
	};
}

impl_try_from_value!(bool, Boolean, Type::Boolean);
impl_try_from_value!(i32, Int4, Type::Int4);
impl_try_from_value!(i64, Int8, Type::Int8);
impl_try_from_value!(f64, Float8, Type::Float8);
impl_try_from_value!(String, Utf8, Type::Utf8);
