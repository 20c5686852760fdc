// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The processor trait and the built-in processors.

pub mod database;
pub mod event_id;

use async_trait::async_trait;

use crate::error::ProcessorError;
use crate::event::AuditEvent;

/// A pluggable stage in the audit pipeline.
///
/// Processors run in registration order and may mutate the event (field
/// stamping) or forward it to external storage (persistence). Each
/// processor owns its typed configuration, built from raw properties at
/// registration time via `quill_props::FromProperties`.
#[async_trait]
pub trait AuditProcessor: Send + Sync {
	fn name(&self) -> &str;

	async fn process(&self, event: &mut AuditEvent) -> Result<(), ProcessorError>;
}
