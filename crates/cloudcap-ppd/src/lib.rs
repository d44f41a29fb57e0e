// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cloudcap: PPD parsing, capability translation, and model name cleanup.

pub mod model;
pub mod parser;
pub mod tables;
pub mod translate;
pub mod units;

pub use model::normalize_model;
pub use parser::{OptionGroup, PpdDocument, PpdOption, Statement, UiType, parse_ppd};
pub use translate::{Translation, translate_document, translate_ppd, translate_ppd_with};
pub use units::{inches_to_microns, mm_to_microns, points_to_microns};
