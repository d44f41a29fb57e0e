// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `*PageSize` options. Standard names come from the media table; anything
// else becomes a custom size whose dimensions are recovered from an Adobe
// `w<pt>h<pt>` name, the label, or the matching `*PaperDimension`.

use std::sync::LazyLock;

use regex::Regex;

use cloudcap_core::cdd::{MediaSize, MediaSizeName, MediaSizeOption, localized};
use cloudcap_core::diagnostics::{Diagnostic, Diagnostics};

use super::Context;
use crate::parser::{OptionGroup, PpdOption};
use crate::tables::lookup_media;
use crate::units::{MICRONS_PER_CM, MICRONS_PER_INCH, MICRONS_PER_MM, MICRONS_PER_POINT, checked_microns};

/// `5.5x8.5`, `210 x 297 mm`, `10x15cm`, `4in x 6in`.
static DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(mm|cm|in)?\s*x\s*(\d+(?:\.\d+)?)\s*(mm|cm|in)?")
        .expect("dimension pattern is valid")
});

/// Adobe custom size names: `w288h432`, in points.
static POINT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^w(\d+(?:\.\d+)?)h(\d+(?:\.\d+)?)$").expect("point name pattern is valid"));

const TRANSVERSE: &str = "Transverse";

pub(super) fn translate(
    group: &OptionGroup,
    ctx: &Context<'_>,
    diagnostics: &mut Diagnostics,
) -> Option<MediaSize> {
    let mut options = Vec::with_capacity(group.options.len());
    for option in &group.options {
        if let Some(size) = media_option(option, ctx, group, diagnostics) {
            options.push(size);
        }
    }
    (!options.is_empty()).then_some(MediaSize { option: options })
}

fn media_option(
    option: &PpdOption,
    ctx: &Context<'_>,
    group: &OptionGroup,
    diagnostics: &mut Diagnostics,
) -> Option<MediaSizeOption> {
    let sized = |name: MediaSizeName, (width, height): (i32, i32), label: &str| MediaSizeOption {
        name,
        width_microns: width,
        height_microns: height,
        is_continuous_feed: false,
        is_default: option.default,
        custom_display_name: String::new(),
        vendor_id: option.name.clone(),
        custom_display_name_localized: localized(ctx.locale, label),
    };

    if let Some(entry) = lookup_media(&option.name) {
        return Some(sized(entry.name, entry.microns(), entry.label));
    }

    // Variants of a standard size: `A4.Transverse`, `Letter.Fullbleed`.
    let variant_of = option
        .name
        .split_once('.')
        .and_then(|(base, variant)| Some((lookup_media(base)?, variant)));
    if let Some((entry, variant)) = variant_of {
        let (width, height) = entry.microns();
        let dimensions = if variant == TRANSVERSE {
            (height, width)
        } else {
            (width, height)
        };
        return Some(sized(entry.name, dimensions, option.label()));
    }

    if !ctx.config.custom_media {
        diagnostics.push(
            Diagnostic::unrecognized(format!("page size {} is not a standard size", option.name))
                .at_line(option.line)
                .for_key(&group.key),
        );
        return None;
    }

    let dimensions = point_name_dimensions(&option.name)
        .or_else(|| option.translation.as_deref().and_then(labelled_dimensions))
        .or_else(|| labelled_dimensions(&option.name))
        .or_else(|| paper_dimension(option, ctx));

    match dimensions {
        Some(dimensions) => Some(sized(MediaSizeName::Custom, dimensions, option.label())),
        None => {
            diagnostics.push(
                Diagnostic::unrecognized(format!("page size {} has no recognizable dimensions", option.name))
                    .at_line(option.line)
                    .for_key(&group.key),
            );
            None
        }
    }
}

/// Dimensions written into a label; inches unless either side names a
/// metric unit.
fn labelled_dimensions(label: &str) -> Option<(i32, i32)> {
    let caps = DIMENSIONS.captures(label)?;
    let width: f64 = caps[1].parse().ok()?;
    let height: f64 = caps[3].parse().ok()?;
    let metric = [caps.get(2), caps.get(4)]
        .into_iter()
        .flatten()
        .map(|unit| unit.as_str().to_ascii_lowercase())
        .find(|unit| unit != "in");
    let per_unit = match metric.as_deref() {
        Some("mm") => MICRONS_PER_MM,
        Some("cm") => MICRONS_PER_CM,
        _ => MICRONS_PER_INCH,
    };
    Some((checked_microns(width, per_unit)?, checked_microns(height, per_unit)?))
}

fn point_name_dimensions(name: &str) -> Option<(i32, i32)> {
    let caps = POINT_NAME.captures(name)?;
    Some((
        checked_microns(caps[1].parse().ok()?, MICRONS_PER_POINT)?,
        checked_microns(caps[2].parse().ok()?, MICRONS_PER_POINT)?,
    ))
}

/// `*PaperDimension <name>: "<width> <height>"`, in points.
fn paper_dimension(option: &PpdOption, ctx: &Context<'_>) -> Option<(i32, i32)> {
    let statement = ctx.document.option_attribute("PaperDimension", &option.name)?;
    let mut parts = statement.value.split_whitespace().map(str::parse::<f64>);
    let width = parts.next()?.ok()?;
    let height = parts.next()?.ok()?;
    Some((
        checked_microns(width, MICRONS_PER_POINT)?,
        checked_microns(height, MICRONS_PER_POINT)?,
    ))
}
