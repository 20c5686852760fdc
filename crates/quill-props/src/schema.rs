// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Schema resolution: untyped raw properties to typed field values.

use std::collections::HashMap;

use crate::field::{FieldSpec, PropertyValue};

/// The untyped mapping handed in by the embedding application.
///
/// A `None` value models a key that is present but explicitly null.
/// Ownership stays with the caller; resolution only reads the map and the
/// produced configuration shares no storage with it.
pub type RawProperties = HashMap<String, Option<String>>;

/// A fixed set of field declarations for one processor type.
///
/// Schemas wrap `static` tables and are read-only for the lifetime of the
/// process, so resolution is safe to run concurrently from any number of
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
	fields: &'static [FieldSpec],
}

impl Schema {
	pub const fn new(fields: &'static [FieldSpec]) -> Self {
		Self { fields }
	}

	pub const fn fields(&self) -> &'static [FieldSpec] {
		self.fields
	}

	fn declares(&self, key: &str) -> bool {
		self.fields.iter().any(|field| field.key() == key)
	}

	/// Resolve raw properties against this schema.
	///
	/// Every declared field ends up with a value: the coerced raw value
	/// when the key is present, non-null, and parseable, and the field
	/// default otherwise. Resolution never fails and never logs; keys that
	/// fell back are reported through
	/// [`ResolvedProperties::defaulted_keys`]. Keys the schema does not
	/// declare are copied verbatim (nulls included) into a freshly
	/// allocated additional-properties map.
	pub fn resolve(&self, raw: &RawProperties) -> ResolvedProperties {
		let mut values = HashMap::with_capacity(self.fields.len());
		let mut defaulted = Vec::new();

		for field in self.fields {
			let coerced = raw
				.get(field.key())
				.and_then(|value| value.as_deref())
				.and_then(|value| field.coerce(value));

			let value = match coerced {
				Some(value) => value,
				None => {
					defaulted.push(field.key());
					field.default_value().into()
				}
			};

			values.insert(field.key(), value);
		}

		let additional: RawProperties = raw
			.iter()
			.filter(|(key, _)| !self.declares(key))
			.map(|(key, value)| (key.clone(), value.clone()))
			.collect();

		ResolvedProperties {
			values,
			additional,
			defaulted,
		}
	}
}

/// The outcome of resolving raw properties against a [`Schema`].
#[derive(Debug, Clone)]
pub struct ResolvedProperties {
	values: HashMap<&'static str, PropertyValue>,
	additional: RawProperties,
	defaulted: Vec<&'static str>,
}

impl ResolvedProperties {
	/// The resolved text value for `key`.
	///
	/// Total: a key the schema does not declare as a text field yields the
	/// empty string. Declared keys always carry a value after resolution.
	pub fn text(&self, key: &str) -> String {
		self.values
			.get(key)
			.and_then(PropertyValue::as_text)
			.map(str::to_string)
			.unwrap_or_default()
	}

	/// The resolved integer value for `key`; zero for undeclared keys.
	pub fn integer(&self, key: &str) -> i64 {
		self.values
			.get(key)
			.and_then(PropertyValue::as_integer)
			.unwrap_or(0)
	}

	/// The keys the schema did not declare, copied out of the raw input.
	pub fn additional(&self) -> &RawProperties {
		&self.additional
	}

	/// Consume the resolution, yielding the additional-properties map.
	pub fn into_additional(self) -> RawProperties {
		self.additional
	}

	/// Keys that fell back to their declared default because the raw value
	/// was absent, null, or failed coercion.
	pub fn defaulted_keys(&self) -> &[&'static str] {
		&self.defaulted
	}
}
