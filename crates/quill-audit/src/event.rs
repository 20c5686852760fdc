// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core event types for the audit pipeline.
//!
//! - [`AuditSeverity`]: RFC 5424-compatible severity levels
//! - [`AuditEvent`]: an audit record with a named-field bag that
//!   processors read and stamp
//! - [`AuditEventBuilder`]: fluent API for constructing events

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity levels for audit events, compatible with RFC 5424 syslog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuditSeverity {
	Debug = 7,
	#[default]
	Info = 6,
	Notice = 5,
	Warning = 4,
	Error = 3,
	Critical = 2,
}

impl PartialOrd for AuditSeverity {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for AuditSeverity {
	fn cmp(&self, other: &Self) -> Ordering {
		// Lower numeric value = higher severity (Critical=2 > Debug=7)
		(*other as u8).cmp(&(*self as u8))
	}
}

impl fmt::Display for AuditSeverity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			AuditSeverity::Debug => "debug",
			AuditSeverity::Info => "info",
			AuditSeverity::Notice => "notice",
			AuditSeverity::Warning => "warning",
			AuditSeverity::Error => "error",
			AuditSeverity::Critical => "critical",
		};
		write!(f, "{s}")
	}
}

/// An event flowing through the audit pipeline.
///
/// Beyond the fixed envelope (timestamp, action, severity) an event
/// carries a bag of named string fields. Processors communicate through
/// the bag: the event-ID processor stamps an identifier into it, the
/// database processor reads the identifier back out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
	/// When the event occurred.
	pub timestamp: DateTime<Utc>,
	/// Human-readable description of the audited action.
	pub action: String,
	/// The severity level of this event.
	pub severity: AuditSeverity,
	/// Named event fields read and stamped by processors.
	pub fields: BTreeMap<String, String>,
}

impl AuditEvent {
	/// Create a new builder for an event describing `action`.
	pub fn builder(action: impl Into<String>) -> AuditEventBuilder {
		AuditEventBuilder::new(action)
	}

	/// The value of a named field, if present.
	pub fn field(&self, name: &str) -> Option<&str> {
		self.fields.get(name).map(String::as_str)
	}

	/// Set a named field, overwriting any previous value.
	pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.fields.insert(name.into(), value.into());
	}
}

/// Builder for constructing audit events with a fluent API.
#[derive(Debug, Clone)]
pub struct AuditEventBuilder {
	action: String,
	severity: AuditSeverity,
	fields: BTreeMap<String, String>,
}

impl AuditEventBuilder {
	pub fn new(action: impl Into<String>) -> Self {
		Self {
			action: action.into(),
			severity: AuditSeverity::default(),
			fields: BTreeMap::new(),
		}
	}

	/// Set the severity level. Defaults to `Info`.
	pub fn severity(mut self, severity: AuditSeverity) -> Self {
		self.severity = severity;
		self
	}

	/// Add a named field.
	pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.fields.insert(name.into(), value.into());
		self
	}

	/// Build the event, stamping the current time.
	pub fn build(self) -> AuditEvent {
		AuditEvent {
			timestamp: Utc::now(),
			action: self.action,
			severity: self.severity,
			fields: self.fields,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod audit_severity {
		use super::*;

		#[test]
		fn ordering_higher_severity_is_greater() {
			assert!(AuditSeverity::Critical > AuditSeverity::Error);
			assert!(AuditSeverity::Error > AuditSeverity::Warning);
			assert!(AuditSeverity::Warning > AuditSeverity::Notice);
			assert!(AuditSeverity::Notice > AuditSeverity::Info);
			assert!(AuditSeverity::Info > AuditSeverity::Debug);
		}

		#[test]
		fn display() {
			assert_eq!(AuditSeverity::Info.to_string(), "info");
			assert_eq!(AuditSeverity::Critical.to_string(), "critical");
		}

		#[test]
		fn serializes_snake_case() {
			assert_eq!(
				serde_json::to_string(&AuditSeverity::Warning).unwrap(),
				"\"warning\""
			);
		}

		#[test]
		fn default_is_info() {
			assert_eq!(AuditSeverity::default(), AuditSeverity::Info);
		}
	}

	mod audit_event_builder {
		use super::*;

		#[test]
		fn builds_minimal_event() {
			let event = AuditEvent::builder("user_login").build();
			assert_eq!(event.action, "user_login");
			assert_eq!(event.severity, AuditSeverity::Info);
			assert!(event.fields.is_empty());
		}

		#[test]
		fn builds_full_event() {
			let event = AuditEvent::builder("record_deleted")
				.severity(AuditSeverity::Notice)
				.field("actor", "alice")
				.field("record", "r-42")
				.build();

			assert_eq!(event.severity, AuditSeverity::Notice);
			assert_eq!(event.field("actor"), Some("alice"));
			assert_eq!(event.field("record"), Some("r-42"));
		}

		#[test]
		fn sets_timestamp_to_now() {
			let before = Utc::now();
			let event = AuditEvent::builder("x").build();
			let after = Utc::now();
			assert!(event.timestamp >= before);
			assert!(event.timestamp <= after);
		}

		#[test]
		fn set_field_overwrites() {
			let mut event = AuditEvent::builder("x").field("k", "v1").build();
			event.set_field("k", "v2");
			assert_eq!(event.field("k"), Some("v2"));
		}
	}

	mod serde_roundtrip {
		use super::*;

		#[test]
		fn event_round_trips_through_json() {
			let event = AuditEvent::builder("user_login")
				.severity(AuditSeverity::Warning)
				.field("actor", "alice")
				.build();

			let json = serde_json::to_string(&event).unwrap();
			let restored: AuditEvent = serde_json::from_str(&json).unwrap();
			assert_eq!(restored, event);
		}
	}

	mod proptest_tests {
		use super::*;
		use proptest::prelude::*;

		fn arb_severity() -> impl Strategy<Value = AuditSeverity> {
			prop_oneof![
				Just(AuditSeverity::Debug),
				Just(AuditSeverity::Info),
				Just(AuditSeverity::Notice),
				Just(AuditSeverity::Warning),
				Just(AuditSeverity::Error),
				Just(AuditSeverity::Critical),
			]
		}

		proptest! {
			#[test]
			fn severity_ordering_is_total(a in arb_severity(), b in arb_severity()) {
				prop_assert!(a <= b || b <= a);
			}

			#[test]
			fn severity_serde_roundtrip(severity in arb_severity()) {
				let json = serde_json::to_string(&severity).unwrap();
				let roundtrip: AuditSeverity = serde_json::from_str(&json).unwrap();
				prop_assert_eq!(severity, roundtrip);
			}

			#[test]
			fn builder_preserves_arbitrary_fields(
				action in ".*",
				name in "[a-z_]{1,16}",
				value in ".*",
			) {
				let event = AuditEvent::builder(&action).field(&name, &value).build();
				prop_assert_eq!(&event.action, &action);
				prop_assert_eq!(event.field(&name), Some(value.as_str()));
			}
		}
	}
}
