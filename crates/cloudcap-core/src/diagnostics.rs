// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Non-fatal findings accumulated while parsing and translating a PPD.
//
// A translation always returns its best-effort descriptor together with the
// diagnostics explaining what was skipped, repaired, or left untranslated.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What kind of problem a diagnostic describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Broken document structure: unterminated group or value, unparsable number.
    Structural,
    /// Well-formed entry with a keyword the translator does not know.
    Unrecognized,
    /// Well-formed entry that is deliberately not translated.
    Ignored,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Structural => "structural",
            Self::Unrecognized => "unrecognized",
            Self::Ignored => "ignored",
        };
        f.write_str(label)
    }
}

/// A single finding, optionally pinned to a source line and PPD keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based line in the PPD source.
    pub line: Option<usize>,
    /// Main keyword the finding relates to (without the leading `*`).
    pub key: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: None,
            key: None,
            message: message.into(),
        }
    }

    pub fn structural(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Structural, message)
    }

    pub fn unrecognized(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Unrecognized, message)
    }

    pub fn ignored(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Ignored, message)
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn for_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {line}: ")?;
        }
        write!(f, "{}", self.kind)?;
        if let Some(ref key) = self.key {
            write!(f, " [*{key}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Ordered collection of diagnostics. Every push is also traced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.kind {
            DiagnosticKind::Structural => warn!(
                line = diagnostic.line,
                key = diagnostic.key.as_deref(),
                "{}",
                diagnostic.message
            ),
            DiagnosticKind::Unrecognized | DiagnosticKind::Ignored => debug!(
                kind = %diagnostic.kind,
                line = diagnostic.line,
                key = diagnostic.key.as_deref(),
                "{}",
                diagnostic.message
            ),
        }
        self.entries.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Diagnostics of one kind, in the order they were recorded.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(move |d| d.kind == kind)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
