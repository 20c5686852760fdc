// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

pub type AuditResult<T> = Result<T, AuditError>;

#[derive(Error, Debug)]
pub enum AuditError {
	#[error("event queue is at capacity")]
	QueueFull,

	#[error("processor '{processor}' error: {source}")]
	Processor {
		processor: String,
		#[source]
		source: ProcessorError,
	},
}

#[derive(Error, Debug)]
pub enum ProcessorError {
	#[error("transient error: {0}")]
	Transient(String),

	#[error("permanent error: {0}")]
	Permanent(String),
}
