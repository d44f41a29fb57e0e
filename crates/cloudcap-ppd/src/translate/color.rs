// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use cloudcap_core::cdd::{Color, ColorOption, localized};
use cloudcap_core::diagnostics::{Diagnostic, Diagnostics};

use super::Context;
use crate::parser::OptionGroup;
use crate::tables::classify_color;

/// Classify each option by its name, then by its translation.
pub(super) fn translate(group: &OptionGroup, ctx: &Context<'_>, diagnostics: &mut Diagnostics) -> Option<Color> {
    let mut options = Vec::with_capacity(group.options.len());
    for option in &group.options {
        let class = classify_color(&option.name)
            .or_else(|| option.translation.as_deref().and_then(classify_color));
        let Some(color_type) = class else {
            diagnostics.push(
                Diagnostic::unrecognized(format!("color model {} is neither color nor monochrome", option.name))
                    .at_line(option.line)
                    .for_key(&group.key),
            );
            continue;
        };
        options.push(ColorOption {
            vendor_id: format!("{}{}", group.key, option.name),
            color_type,
            custom_display_name: String::new(),
            is_default: option.default,
            custom_display_name_localized: localized(ctx.locale, option.label()),
        });
    }
    (!options.is_empty()).then_some(Color { option: options })
}
