// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The generic build routine shared by every processor configuration.

use crate::schema::{RawProperties, ResolvedProperties, Schema};

/// Schema-driven construction of a typed processor configuration from
/// untyped raw properties.
///
/// Implementors declare their field table once via [`schema`] and assemble
/// the configuration from resolved values in [`from_resolved`]; the build
/// entry points are provided and are the only sanctioned way to produce a
/// schema-valid configuration. Building is a pure function of its input:
/// no shared state, no I/O, safe to call concurrently.
///
/// Building never fails. A field whose raw value is absent, null, or not
/// coercible takes its declared default silently; this is the library's
/// configuration policy, not an oversight. Use [`build_with_fallbacks`]
/// when the distinction between "configured to the default" and "fell back
/// to the default" matters.
///
/// [`schema`]: FromProperties::schema
/// [`from_resolved`]: FromProperties::from_resolved
/// [`build_with_fallbacks`]: FromProperties::build_with_fallbacks
pub trait FromProperties: Sized {
	/// The field table for this configuration.
	fn schema() -> Schema;

	/// Assemble the configuration from resolved field values.
	fn from_resolved(resolved: ResolvedProperties) -> Self;

	/// Build from raw properties.
	///
	/// The raw map is only read; the returned configuration shares no
	/// storage with it.
	fn build(raw: &RawProperties) -> Self {
		Self::from_resolved(Self::schema().resolve(raw))
	}

	/// Build with every field at its declared default and an empty
	/// additional-properties map.
	///
	/// Behaviorally identical to `build(&RawProperties::new())`.
	fn build_default() -> Self {
		Self::build(&RawProperties::new())
	}

	/// Build and report which fields fell back to their defaults.
	///
	/// The configuration is identical to the one [`build`] returns; the
	/// report is the optional observability hook for callers that want to
	/// surface silent default substitution themselves.
	///
	/// [`build`]: FromProperties::build
	fn build_with_fallbacks(raw: &RawProperties) -> (Self, Vec<&'static str>) {
		let resolved = Self::schema().resolve(raw);
		let fallbacks = resolved.defaulted_keys().to_vec();
		(Self::from_resolved(resolved), fallbacks)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldSpec;
	use proptest::prelude::*;

	const KEY_STMT: &str = "insert_statement";
	const KEY_LENGTH: &str = "length";
	const DEFAULT_STMT: &str = "DEFAULT_STMT";
	const DEFAULT_LENGTH: i64 = 16;

	static SCHEMA: &[FieldSpec] = &[
		FieldSpec::text(KEY_STMT, DEFAULT_STMT),
		FieldSpec::integer(KEY_LENGTH, DEFAULT_LENGTH),
	];

	#[derive(Debug, Clone, PartialEq)]
	struct SampleConfig {
		insert_statement: String,
		length: i64,
		additional_properties: RawProperties,
	}

	impl FromProperties for SampleConfig {
		fn schema() -> Schema {
			Schema::new(SCHEMA)
		}

		fn from_resolved(resolved: ResolvedProperties) -> Self {
			Self {
				insert_statement: resolved.text(KEY_STMT),
				length: resolved.integer(KEY_LENGTH),
				additional_properties: resolved.into_additional(),
			}
		}
	}

	fn raw(entries: &[(&str, Option<&str>)]) -> RawProperties {
		entries
			.iter()
			.map(|(key, value)| (key.to_string(), value.map(str::to_string)))
			.collect()
	}

	#[test]
	fn build_default_equals_build_from_empty_map() {
		assert_eq!(
			SampleConfig::build_default(),
			SampleConfig::build(&RawProperties::new())
		);
	}

	#[test]
	fn build_default_uses_declared_defaults() {
		let config = SampleConfig::build_default();
		assert_eq!(config.insert_statement, DEFAULT_STMT);
		assert_eq!(config.length, DEFAULT_LENGTH);
		assert!(config.additional_properties.is_empty());
	}

	#[test]
	fn null_value_yields_default() {
		let config = SampleConfig::build(&raw(&[(KEY_STMT, None)]));
		assert_eq!(config.insert_statement, DEFAULT_STMT);
	}

	#[test]
	fn text_value_is_taken_as_is() {
		let config = SampleConfig::build(&raw(&[(KEY_STMT, Some("42"))]));
		assert_eq!(config.insert_statement, "42");
	}

	#[test]
	fn malformed_integer_yields_default() {
		let config = SampleConfig::build(&raw(&[(KEY_LENGTH, Some("asdf"))]));
		assert_eq!(config.length, DEFAULT_LENGTH);
	}

	#[test]
	fn valid_integer_is_parsed() {
		let config = SampleConfig::build(&raw(&[(KEY_LENGTH, Some("42"))]));
		assert_eq!(config.length, 42);
	}

	#[test]
	fn unrecognized_keys_land_in_additional_properties() {
		let input = raw(&[("some property", Some("some value"))]);
		let config = SampleConfig::build(&input);
		assert_eq!(config.additional_properties, input);
	}

	#[test]
	fn mutating_the_input_after_build_does_not_alter_the_config() {
		let mut input = raw(&[("some property", Some("some value"))]);
		let config = SampleConfig::build(&input);

		input.insert("some property".to_string(), Some("changed".to_string()));
		assert_eq!(
			config.additional_properties.get("some property"),
			Some(&Some("some value".to_string()))
		);
	}

	#[test]
	fn clone_is_equal_but_independent() {
		let config = SampleConfig::build(&raw(&[
			(KEY_STMT, Some("42")),
			("extra", Some("kept")),
		]));
		let mut copy = config.clone();
		assert_eq!(copy, config);
		assert_eq!(copy.insert_statement, "42");

		copy.additional_properties
			.insert("only in copy".to_string(), None);
		assert!(!config.additional_properties.contains_key("only in copy"));
	}

	#[test]
	fn build_with_fallbacks_reports_defaulted_fields() {
		let (config, fallbacks) =
			SampleConfig::build_with_fallbacks(&raw(&[(KEY_LENGTH, Some("asdf"))]));
		assert_eq!(config.length, DEFAULT_LENGTH);
		assert_eq!(fallbacks, [KEY_STMT, KEY_LENGTH]);

		let (config, fallbacks) = SampleConfig::build_with_fallbacks(&raw(&[
			(KEY_STMT, Some("s")),
			(KEY_LENGTH, Some("1")),
		]));
		assert_eq!(config.length, 1);
		assert!(fallbacks.is_empty());
	}

	proptest! {
		#[test]
		fn any_integer_value_round_trips(value in any::<i64>()) {
			let config = SampleConfig::build(&raw(&[(KEY_LENGTH, Some(&value.to_string()))]));
			prop_assert_eq!(config.length, value);
		}

		#[test]
		fn non_numeric_strings_always_fall_back(value in "[^0-9+-][^0-9]*") {
			let config = SampleConfig::build(&raw(&[(KEY_LENGTH, Some(&value))]));
			prop_assert_eq!(config.length, DEFAULT_LENGTH);
		}

		#[test]
		fn any_text_value_is_preserved(value in ".*") {
			let config = SampleConfig::build(&raw(&[(KEY_STMT, Some(&value))]));
			prop_assert_eq!(config.insert_statement, value);
		}

		#[test]
		fn additional_properties_are_exactly_the_undeclared_keys(
			entries in proptest::collection::hash_map("[a-z ]{1,12}", proptest::option::of(".{0,8}"), 0..8)
		) {
			let input: RawProperties = entries;
			let config = SampleConfig::build(&input);

			for (key, value) in &input {
				if key == KEY_STMT || key == KEY_LENGTH {
					prop_assert!(!config.additional_properties.contains_key(key));
				} else {
					prop_assert_eq!(config.additional_properties.get(key), Some(value));
				}
			}
			for key in config.additional_properties.keys() {
				prop_assert!(input.contains_key(key));
			}
		}

		#[test]
		fn building_never_panics(
			entries in proptest::collection::hash_map(".{0,16}", proptest::option::of(".{0,16}"), 0..8)
		) {
			let _ = SampleConfig::build(&entries);
		}
	}
}
