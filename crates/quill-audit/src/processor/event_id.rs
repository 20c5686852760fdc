// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![cfg(feature = "processor-event-id")]

//! Random event-ID stamping.
//!
//! Stamps a random alphanumeric identifier into the event's field bag so
//! downstream processors (persistence in particular) have a stable ID to
//! correlate on. Events that already carry the field pass through
//! untouched.

use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use quill_props::{FieldSpec, FromProperties, RawProperties, ResolvedProperties, Schema};

use crate::error::ProcessorError;
use crate::event::AuditEvent;
use crate::processor::AuditProcessor;

/// Lookup key for the generated identifier length.
pub const KEY_LENGTH: &str = "length";
/// Lookup key for the event field the identifier is stamped into.
pub const KEY_EVENT_FIELD_NAME: &str = "event_field_name";

pub const DEFAULT_LENGTH: i64 = 16;
pub const DEFAULT_EVENT_FIELD_NAME: &str = "event_id";

static SCHEMA: &[FieldSpec] = &[
	FieldSpec::integer(KEY_LENGTH, DEFAULT_LENGTH),
	FieldSpec::text(KEY_EVENT_FIELD_NAME, DEFAULT_EVENT_FIELD_NAME),
];

/// Typed configuration for [`EventIdProcessor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventIdProcessorConfig {
	length: i64,
	event_field_name: String,
	additional_properties: RawProperties,
}

impl EventIdProcessorConfig {
	pub fn length(&self) -> i64 {
		self.length
	}

	pub fn set_length(&mut self, value: i64) {
		self.length = value;
	}

	pub fn event_field_name(&self) -> &str {
		&self.event_field_name
	}

	pub fn set_event_field_name(&mut self, value: impl Into<String>) {
		self.event_field_name = value.into();
	}

	pub fn additional_properties(&self) -> &RawProperties {
		&self.additional_properties
	}
}

impl FromProperties for EventIdProcessorConfig {
	fn schema() -> Schema {
		Schema::new(SCHEMA)
	}

	fn from_resolved(resolved: ResolvedProperties) -> Self {
		Self {
			length: resolved.integer(KEY_LENGTH),
			event_field_name: resolved.text(KEY_EVENT_FIELD_NAME),
			additional_properties: resolved.into_additional(),
		}
	}
}

impl Default for EventIdProcessorConfig {
	fn default() -> Self {
		Self::build_default()
	}
}

pub struct EventIdProcessor {
	config: EventIdProcessorConfig,
}

impl EventIdProcessor {
	pub fn new(config: EventIdProcessorConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &EventIdProcessorConfig {
		&self.config
	}

	fn generate(&self) -> String {
		let length = usize::try_from(self.config.length()).unwrap_or(0);
		rand::thread_rng()
			.sample_iter(&Alphanumeric)
			.take(length)
			.map(char::from)
			.collect()
	}
}

#[async_trait]
impl AuditProcessor for EventIdProcessor {
	fn name(&self) -> &str {
		"event_id"
	}

	async fn process(&self, event: &mut AuditEvent) -> Result<(), ProcessorError> {
		// A non-positive configured length disables stamping.
		if self.config.length() > 0 && event.field(self.config.event_field_name()).is_none() {
			let id = self.generate();
			event.set_field(self.config.event_field_name(), id);
		}
		Ok(())
	}
}
