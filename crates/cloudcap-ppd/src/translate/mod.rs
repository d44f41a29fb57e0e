// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PPD → capability descriptor translation.
//
// Each well-known option group is routed by key to its translator; every
// other PickOne group becomes a generic vendor capability. Problems inside a
// group skip the offending option and are reported as diagnostics, so callers
// always get a best-effort descriptor.

mod color;
mod duplex;
mod media;
mod resolution;
mod speed;
mod vendor;

use tracing::{debug, info};

use cloudcap_core::cdd::CapabilityDescriptor;
use cloudcap_core::config::TranslateConfig;
use cloudcap_core::diagnostics::{Diagnostic, Diagnostics};
use cloudcap_core::error::{CloudcapError, Result};

use crate::model::normalize_model;
use crate::parser::{OptionGroup, PpdDocument, UiType, parse_ppd};
use crate::tables::lookup_locale;

/// Scalar attribute holding the print speed in pages per minute.
pub const THROUGHPUT: &str = "Throughput";
pub const PAGE_SIZE: &str = "PageSize";
pub const COLOR_MODEL: &str = "ColorModel";
pub const DUPLEX: &str = "Duplex";
pub const RESOLUTION: &str = "Resolution";

/// Group keys with a dedicated translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KnownGroup {
    PageSize,
    ColorModel,
    Duplex,
    Resolution,
}

impl KnownGroup {
    fn for_key(key: &str) -> Option<Self> {
        match key {
            PAGE_SIZE => Some(Self::PageSize),
            COLOR_MODEL => Some(Self::ColorModel),
            DUPLEX => Some(Self::Duplex),
            RESOLUTION => Some(Self::Resolution),
            _ => None,
        }
    }
}

/// Shared inputs of the per-group translators.
pub(crate) struct Context<'a> {
    pub locale: &'a str,
    pub config: &'a TranslateConfig,
    pub document: &'a PpdDocument,
}

/// Everything a translation produces.
#[derive(Debug, Clone)]
pub struct Translation {
    pub descriptor: CapabilityDescriptor,
    /// `*Manufacturer`, if declared.
    pub manufacturer: Option<String>,
    /// Normalized model name from `*NickName` or `*ModelName`.
    pub model: Option<String>,
    pub diagnostics: Diagnostics,
}

/// Translate PPD text with the default configuration.
pub fn translate_ppd(text: &str) -> Result<Translation> {
    translate_ppd_with(text, &TranslateConfig::default())
}

/// Translate PPD text.
///
/// Fails only when the text is too large or not PPD at all.
pub fn translate_ppd_with(text: &str, config: &TranslateConfig) -> Result<Translation> {
    if text.len() > config.max_document_bytes {
        return Err(CloudcapError::DocumentTooLarge {
            size: text.len(),
            limit: config.max_document_bytes,
        });
    }
    let document = parse_ppd(text)?;
    Ok(translate_document(&document, config))
}

/// Translate an already parsed document.
pub fn translate_document(document: &PpdDocument, config: &TranslateConfig) -> Translation {
    let mut diagnostics = document.diagnostics().clone();
    let locale = document_locale(document, config, &mut diagnostics);
    let ctx = Context {
        locale: &locale,
        config,
        document,
    };

    let mut descriptor = CapabilityDescriptor::default();
    if let Some(statement) = document.attribute(THROUGHPUT) {
        descriptor.printing_speed = speed::translate(statement, &mut diagnostics);
    }

    for group in document.groups() {
        if group.installable {
            diagnostics.push(
                Diagnostic::ignored("installable-option groups describe hardware, not job options")
                    .at_line(group.line)
                    .for_key(&group.key),
            );
            continue;
        }

        match KnownGroup::for_key(&group.key) {
            Some(known) => translate_known(known, group, &ctx, &mut descriptor, &mut diagnostics),
            None if group.ui_type != UiType::PickOne => diagnostics.push(
                Diagnostic::ignored(format!("{} groups are not translated", group.ui_type))
                    .at_line(group.line)
                    .for_key(&group.key),
            ),
            None if !config.vendor_capabilities => diagnostics.push(
                Diagnostic::ignored("vendor capabilities are disabled")
                    .at_line(group.line)
                    .for_key(&group.key),
            ),
            None => {
                debug!(key = %group.key, options = group.options.len(), "vendor capability");
                if let Some(capability) = vendor::translate(group, &ctx, &mut diagnostics) {
                    descriptor.vendor_capability.push(capability);
                }
            }
        }
    }

    let manufacturer = document
        .attribute_value("Manufacturer")
        .filter(|m| !m.is_empty())
        .map(str::to_string);
    let model = printer_model(document, manufacturer.as_deref());

    info!(
        model = model.as_deref().unwrap_or("unknown"),
        media_sizes = descriptor.media_size.as_ref().map_or(0, |m| m.option.len()),
        vendor_capabilities = descriptor.vendor_capability.len(),
        diagnostics = diagnostics.len(),
        "translated PPD"
    );

    Translation {
        descriptor,
        manufacturer,
        model,
        diagnostics,
    }
}

/// Run the translator for a known group; a later group that yields options
/// replaces an earlier one.
fn translate_known(
    known: KnownGroup,
    group: &OptionGroup,
    ctx: &Context<'_>,
    descriptor: &mut CapabilityDescriptor,
    diagnostics: &mut Diagnostics,
) {
    debug!(key = %group.key, options = group.options.len(), "translating known group");
    let outcome = match known {
        KnownGroup::PageSize => {
            store(&mut descriptor.media_size, media::translate(group, ctx, diagnostics))
        }
        KnownGroup::ColorModel => {
            store(&mut descriptor.color, color::translate(group, ctx, diagnostics))
        }
        KnownGroup::Duplex => store(&mut descriptor.duplex, duplex::translate(group, diagnostics)),
        KnownGroup::Resolution => {
            store(&mut descriptor.dpi, resolution::translate(group, ctx, diagnostics))
        }
    };

    match outcome {
        Stored::Nothing => diagnostics.push(
            Diagnostic::unrecognized("no option of the group could be translated")
                .at_line(group.line)
                .for_key(&group.key),
        ),
        Stored::Replaced => diagnostics.push(
            Diagnostic::structural("group declared more than once; the later group wins")
                .at_line(group.line)
                .for_key(&group.key),
        ),
        Stored::First => {}
    }
}

/// What happened to a descriptor field when a known group was translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stored {
    First,
    Replaced,
    Nothing,
}

fn store<T>(field: &mut Option<T>, translated: Option<T>) -> Stored {
    let Some(value) = translated else {
        return Stored::Nothing;
    };
    match field.replace(value) {
        Some(_) => Stored::Replaced,
        None => Stored::First,
    }
}

/// Locale for display labels, from `*LanguageVersion`.
fn document_locale(
    document: &PpdDocument,
    config: &TranslateConfig,
    diagnostics: &mut Diagnostics,
) -> String {
    let Some(statement) = document.attribute("LanguageVersion") else {
        return config.default_locale.clone();
    };
    match lookup_locale(statement.value.trim()) {
        Some(locale) => locale.to_string(),
        None => {
            diagnostics.push(
                Diagnostic::unrecognized(format!(
                    "language {} has no known locale",
                    statement.value.trim()
                ))
                .at_line(statement.line)
                .for_key("LanguageVersion"),
            );
            config.default_locale.clone()
        }
    }
}

/// Model name from `*NickName` (or `*ModelName`) without the manufacturer prefix.
fn printer_model(document: &PpdDocument, manufacturer: Option<&str>) -> Option<String> {
    let raw = document
        .attribute_value("NickName")
        .or_else(|| document.attribute_value("ModelName"))
        .filter(|n| !n.is_empty())?;

    let without_maker = manufacturer
        .and_then(|m| {
            let rest = raw.get(m.len()..)?;
            (raw[..m.len()].eq_ignore_ascii_case(m) && rest.starts_with(char::is_whitespace))
                .then(|| rest.trim_start())
        })
        .filter(|rest| !rest.is_empty())
        .unwrap_or(raw);

    Some(normalize_model(without_maker))
}
