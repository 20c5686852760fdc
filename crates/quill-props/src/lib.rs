// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Schema-driven typed properties for Quill audit processors.
//!
//! Every processor in the audit library is configured from an untyped
//! string map supplied by the embedding application (sourced from a
//! properties file, the environment, or code; not this crate's concern).
//! This crate provides the one generalized mechanism they all share:
//!
//! - [`RawProperties`]: the untyped input map; values may be absent or
//!   explicitly null
//! - [`FieldSpec`] / [`Schema`]: static per-processor field tables with
//!   compile-time defaults
//! - [`FromProperties`]: the single generic build routine turning raw
//!   properties into a typed configuration
//!
//! Building never fails. A key that is absent, null, or not coercible to
//! its declared type resolves to the field's default; the builder neither
//! errors nor logs. Callers that need to know which fields fell back use
//! [`FromProperties::build_with_fallbacks`].
//!
//! # Usage
//!
//! ```
//! use quill_props::{FieldSpec, FromProperties, RawProperties, ResolvedProperties, Schema};
//!
//! static SCHEMA: &[FieldSpec] = &[
//! 	FieldSpec::text("greeting", "hello"),
//! 	FieldSpec::integer("repeat", 1),
//! ];
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct GreeterConfig {
//! 	greeting: String,
//! 	repeat: i64,
//! 	additional_properties: RawProperties,
//! }
//!
//! impl FromProperties for GreeterConfig {
//! 	fn schema() -> Schema {
//! 		Schema::new(SCHEMA)
//! 	}
//!
//! 	fn from_resolved(resolved: ResolvedProperties) -> Self {
//! 		Self {
//! 			greeting: resolved.text("greeting"),
//! 			repeat: resolved.integer("repeat"),
//! 			additional_properties: resolved.into_additional(),
//! 		}
//! 	}
//! }
//!
//! let mut raw = RawProperties::new();
//! raw.insert("repeat".to_string(), Some("not a number".to_string()));
//! let config = GreeterConfig::build(&raw);
//! assert_eq!(config.greeting, "hello");
//! assert_eq!(config.repeat, 1);
//! ```

pub mod builder;
pub mod field;
pub mod schema;

pub use builder::FromProperties;
pub use field::{FieldSpec, PropertyDefault, PropertyValue};
pub use schema::{RawProperties, ResolvedProperties, Schema};
