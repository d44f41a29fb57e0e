// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cloudcap: capability descriptor types, diagnostics, and error definitions
// shared by the PPD translator and its consumers.

pub mod cdd;
pub mod config;
pub mod diagnostics;
pub mod error;

pub use cdd::*;
pub use config::TranslateConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::CloudcapError;
