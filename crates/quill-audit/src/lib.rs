// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pluggable audit-event library.
//!
//! Events flow through a bounded queue into a chain of processors. Each
//! processor carries a typed configuration built from untyped raw
//! properties via `quill_props`: defaulting, type coercion, and
//! additional-properties passthrough are specified there and shared by
//! every processor.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use quill_audit::processor::event_id::{EventIdProcessor, EventIdProcessorConfig};
//! use quill_audit::{AuditEvent, AuditPipeline, FromProperties};
//!
//! // Raw properties come from the embedding application (file, env, ...).
//! let config = EventIdProcessorConfig::build(&raw_properties);
//! let pipeline = AuditPipeline::new(10_000, vec![Arc::new(EventIdProcessor::new(config))]);
//!
//! pipeline.log(AuditEvent::builder("user_login").field("actor", "alice").build())?;
//! ```

pub mod error;
pub mod event;
pub mod pipeline;
pub mod processor;

pub use error::{AuditError, AuditResult, ProcessorError};
pub use event::{AuditEvent, AuditEventBuilder, AuditSeverity};
pub use pipeline::AuditPipeline;
pub use processor::AuditProcessor;

pub use quill_props::{FieldSpec, FromProperties, RawProperties, ResolvedProperties, Schema};

#[cfg(feature = "processor-database")]
pub use processor::database::{DatabaseProcessor, DatabaseProcessorConfig, StatementExecutor};

#[cfg(feature = "processor-event-id")]
pub use processor::event_id::{EventIdProcessor, EventIdProcessorConfig};
