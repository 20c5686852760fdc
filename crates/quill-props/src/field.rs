// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static field declarations for processor property schemas.

/// The compile-time default for a schema field.
///
/// The variant also fixes the field's target type: a text default declares
/// a text field, an integer default declares an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyDefault {
	Text(&'static str),
	Integer(i64),
}

/// A resolved field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
	Text(String),
	Integer(i64),
}

impl PropertyValue {
	pub fn as_text(&self) -> Option<&str> {
		match self {
			PropertyValue::Text(value) => Some(value),
			PropertyValue::Integer(_) => None,
		}
	}

	pub fn as_integer(&self) -> Option<i64> {
		match self {
			PropertyValue::Text(_) => None,
			PropertyValue::Integer(value) => Some(*value),
		}
	}
}

impl From<PropertyDefault> for PropertyValue {
	fn from(default: PropertyDefault) -> Self {
		match default {
			PropertyDefault::Text(value) => PropertyValue::Text(value.to_string()),
			PropertyDefault::Integer(value) => PropertyValue::Integer(value),
		}
	}
}

/// One named field in a processor's property schema: the lookup key and
/// the default substituted when the raw value is absent, null, or
/// malformed.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
	key: &'static str,
	default: PropertyDefault,
}

impl FieldSpec {
	/// Declare a text field.
	pub const fn text(key: &'static str, default: &'static str) -> Self {
		Self {
			key,
			default: PropertyDefault::Text(default),
		}
	}

	/// Declare a base-10 integer field.
	pub const fn integer(key: &'static str, default: i64) -> Self {
		Self {
			key,
			default: PropertyDefault::Integer(default),
		}
	}

	pub const fn key(&self) -> &'static str {
		self.key
	}

	pub const fn default_value(&self) -> PropertyDefault {
		self.default
	}

	/// Coerce a raw string to this field's declared type.
	///
	/// Text fields take the raw string as-is and cannot fail. Integer
	/// fields parse base-10 with no trimming; `None` means the caller must
	/// substitute the default.
	pub fn coerce(&self, raw: &str) -> Option<PropertyValue> {
		match self.default {
			PropertyDefault::Text(_) => Some(PropertyValue::Text(raw.to_string())),
			PropertyDefault::Integer(_) => raw.parse::<i64>().ok().map(PropertyValue::Integer),
		}
	}
}
