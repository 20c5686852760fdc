// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use tokio::sync::mpsc::{self, error::SendError};
use tracing::{instrument, warn};

use crate::error::{AuditError, AuditResult};
use crate::event::AuditEvent;
use crate::processor::AuditProcessor;

/// Dispatches audit events through the registered processors.
///
/// Events are queued on a bounded channel and handled by a background
/// task, which runs the processors in registration order (stamping
/// processors go before persistence processors, and that ordering is the
/// embedder's responsibility). A failing processor is logged and skipped;
/// the remaining processors still see the event.
pub struct AuditPipeline {
	tx: mpsc::Sender<AuditEvent>,
}

impl AuditPipeline {
	pub fn new(queue_capacity: usize, processors: Vec<Arc<dyn AuditProcessor>>) -> Self {
		let (tx, rx) = mpsc::channel(queue_capacity);

		tokio::spawn(Self::background_task(rx, processors));

		Self { tx }
	}

	async fn background_task(
		mut rx: mpsc::Receiver<AuditEvent>,
		processors: Vec<Arc<dyn AuditProcessor>>,
	) {
		while let Some(mut event) = rx.recv().await {
			for processor in &processors {
				if let Err(source) = processor.process(&mut event).await {
					let error = AuditError::Processor {
						processor: processor.name().to_string(),
						source,
					};
					warn!(error = %error, "audit processor failed");
				}
			}
		}
	}

	/// Queue an event for processing.
	///
	/// Fails with [`AuditError::QueueFull`] when the queue is at capacity;
	/// the event is dropped.
	#[instrument(skip(self, event), fields(action = %event.action))]
	pub fn log(&self, event: AuditEvent) -> AuditResult<()> {
		self.tx.try_send(event).map_err(|_| AuditError::QueueFull)
	}

	/// Queue an event, waiting for capacity instead of dropping.
	pub async fn log_blocking(&self, event: AuditEvent) -> Result<(), SendError<AuditEvent>> {
		self.tx.send(event).await
	}
}
