// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Cloudcap.
//
// Only conditions that prevent any result at all are errors. Everything a
// translation can recover from is reported as a `Diagnostic` instead.

use thiserror::Error;

/// Top-level error type for all Cloudcap operations.
#[derive(Debug, Error)]
pub enum CloudcapError {
    // -- Input errors --
    #[error("input is not a PPD document: {0}")]
    NotPpd(String),

    #[error("PPD document is {size} bytes, limit is {limit}")]
    DocumentTooLarge { size: usize, limit: usize },

    // -- Serialization --
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CloudcapError>;
