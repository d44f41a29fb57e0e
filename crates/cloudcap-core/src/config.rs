// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Translator configuration.

use serde::{Deserialize, Serialize};

use crate::cdd::DEFAULT_LOCALE;
use crate::error::Result;

/// Tunables for a PPD translation. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Emit unrecognized PickOne groups as vendor capabilities.
    pub vendor_capabilities: bool,
    /// Translate unknown page sizes into custom sizes (otherwise they are dropped).
    pub custom_media: bool,
    /// Documents larger than this are rejected outright.
    pub max_document_bytes: usize,
    /// Locale for display labels when the PPD has no `*LanguageVersion`.
    pub default_locale: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            vendor_capabilities: true,
            custom_media: true,
            max_document_bytes: 8 * 1024 * 1024,
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl TranslateConfig {
    /// Load a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
