// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![cfg(feature = "processor-database")]

//! Audit-event persistence through a parameterized insert statement.
//!
//! The processor renders each event into the configured statement's
//! parameter vector and hands both to a [`StatementExecutor`]. How the
//! statement reaches the backing store is the embedder's concern.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use quill_props::{FieldSpec, FromProperties, RawProperties, ResolvedProperties, Schema};

use crate::error::ProcessorError;
use crate::event::AuditEvent;
use crate::processor::AuditProcessor;

/// Lookup key for the parameterized insert statement.
pub const KEY_INSERT_STATEMENT: &str = "insert_statement";
/// Lookup key for the payload string encoding.
pub const KEY_STRING_ENCODING: &str = "string_encoding";
/// Lookup key for the event field that carries the event identifier.
pub const KEY_EVENT_ID_FIELD_NAME: &str = "event_id_field_name";

pub const DEFAULT_INSERT_STATEMENT: &str = "INSERT INTO audit_event \
	(event_id, occurred_at, action, severity, payload) VALUES (?, ?, ?, ?, ?)";
pub const DEFAULT_STRING_ENCODING: &str = "UTF-8";
pub const DEFAULT_EVENT_ID_FIELD_NAME: &str = "event_id";

static SCHEMA: &[FieldSpec] = &[
	FieldSpec::text(KEY_INSERT_STATEMENT, DEFAULT_INSERT_STATEMENT),
	FieldSpec::text(KEY_STRING_ENCODING, DEFAULT_STRING_ENCODING),
	FieldSpec::text(KEY_EVENT_ID_FIELD_NAME, DEFAULT_EVENT_ID_FIELD_NAME),
];

/// Typed configuration for [`DatabaseProcessor`].
///
/// Built from raw properties via [`FromProperties`]; a plain mutable value
/// holder thereafter. Setters perform no validation; validation is a
/// build-time concern only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseProcessorConfig {
	insert_statement: String,
	string_encoding: String,
	event_id_field_name: String,
	additional_properties: RawProperties,
}

impl DatabaseProcessorConfig {
	pub fn insert_statement(&self) -> &str {
		&self.insert_statement
	}

	pub fn set_insert_statement(&mut self, value: impl Into<String>) {
		self.insert_statement = value.into();
	}

	pub fn string_encoding(&self) -> &str {
		&self.string_encoding
	}

	pub fn set_string_encoding(&mut self, value: impl Into<String>) {
		self.string_encoding = value.into();
	}

	pub fn event_id_field_name(&self) -> &str {
		&self.event_id_field_name
	}

	pub fn set_event_id_field_name(&mut self, value: impl Into<String>) {
		self.event_id_field_name = value.into();
	}

	/// The raw keys the schema does not recognize, passed through verbatim.
	pub fn additional_properties(&self) -> &RawProperties {
		&self.additional_properties
	}
}

impl FromProperties for DatabaseProcessorConfig {
	fn schema() -> Schema {
		Schema::new(SCHEMA)
	}

	fn from_resolved(resolved: ResolvedProperties) -> Self {
		Self {
			insert_statement: resolved.text(KEY_INSERT_STATEMENT),
			string_encoding: resolved.text(KEY_STRING_ENCODING),
			event_id_field_name: resolved.text(KEY_EVENT_ID_FIELD_NAME),
			additional_properties: resolved.into_additional(),
		}
	}
}

impl Default for DatabaseProcessorConfig {
	fn default() -> Self {
		Self::build_default()
	}
}

/// The storage seam.
///
/// The processor does not know how statements reach the backing store;
/// embedders supply an executor (a connection pool wrapper, a batcher, a
/// test recorder).
#[async_trait]
pub trait StatementExecutor: Send + Sync {
	async fn execute(&self, statement: &str, params: &[String]) -> Result<(), ProcessorError>;
}

pub struct DatabaseProcessor {
	config: DatabaseProcessorConfig,
	executor: Arc<dyn StatementExecutor>,
}

impl DatabaseProcessor {
	pub fn new(config: DatabaseProcessorConfig, executor: Arc<dyn StatementExecutor>) -> Self {
		if !config.string_encoding().eq_ignore_ascii_case("utf-8") {
			warn!(
				encoding = config.string_encoding(),
				"unsupported string encoding, payloads are written as UTF-8"
			);
		}
		Self { config, executor }
	}

	pub fn config(&self) -> &DatabaseProcessorConfig {
		&self.config
	}
}

#[async_trait]
impl AuditProcessor for DatabaseProcessor {
	fn name(&self) -> &str {
		"database"
	}

	async fn process(&self, event: &mut AuditEvent) -> Result<(), ProcessorError> {
		let params = render_params(&self.config, event)?;
		self.executor
			.execute(self.config.insert_statement(), &params)
			.await
	}
}

/// Render the parameter vector for the configured insert statement:
/// event ID (read from the configured field, empty when unset), RFC 3339
/// timestamp, action, severity, and the JSON payload of all fields.
pub fn render_params(
	config: &DatabaseProcessorConfig,
	event: &AuditEvent,
) -> Result<Vec<String>, ProcessorError> {
	let payload = serde_json::to_string(&event.fields)
		.map_err(|e| ProcessorError::Permanent(format!("payload serialization failed: {e}")))?;

	Ok(vec![
		event
			.field(config.event_id_field_name())
			.unwrap_or_default()
			.to_string(),
		event.timestamp.to_rfc3339(),
		event.action.clone(),
		event.severity.to_string(),
		payload,
	])
}
