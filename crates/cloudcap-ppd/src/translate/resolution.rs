// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use std::sync::LazyLock;

use regex::Regex;

use cloudcap_core::cdd::{Dpi, DpiOption, localized};
use cloudcap_core::diagnostics::{Diagnostic, Diagnostics};

use super::Context;
use crate::parser::{OptionGroup, PpdOption};

/// `600dpi` or `1200x600dpi`.
static DPI_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:x(\d+))?dpi$").expect("resolution pattern is valid"));

pub(super) fn translate(group: &OptionGroup, ctx: &Context<'_>, diagnostics: &mut Diagnostics) -> Option<Dpi> {
    let mut options = Vec::with_capacity(group.options.len());
    for option in &group.options {
        match parse_dpi(&option.name) {
            Some((horizontal_dpi, vertical_dpi)) => options.push(DpiOption {
                horizontal_dpi,
                vertical_dpi,
                is_default: option.default,
                custom_display_name: String::new(),
                vendor_id: option.name.clone(),
                custom_display_name_localized: localized(ctx.locale, option.label()),
            }),
            None => skip(group, option, diagnostics),
        }
    }
    (!options.is_empty()).then_some(Dpi { option: options })
}

/// (horizontal, vertical) resolution named by an option keyword.
fn parse_dpi(name: &str) -> Option<(i32, i32)> {
    let caps = DPI_NAME.captures(name)?;
    let horizontal: i32 = caps[1].parse().ok()?;
    let vertical = match caps.get(2) {
        Some(v) => v.as_str().parse().ok()?,
        None => horizontal,
    };
    (horizontal > 0 && vertical > 0).then_some((horizontal, vertical))
}

fn skip(group: &OptionGroup, option: &PpdOption, diagnostics: &mut Diagnostics) {
    diagnostics.push(
        Diagnostic::unrecognized(format!("resolution {} is not of the form <N>dpi or <N>x<M>dpi", option.name))
            .at_line(option.line)
            .for_key(&group.key),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudcap_core::config::TranslateConfig;
    use cloudcap_core::diagnostics::DiagnosticKind;

    use crate::parser::parse_ppd;

    #[test]
    fn bad_option_is_skipped_and_the_rest_translate() {
        let doc = parse_ppd(
            "*PPD-Adobe: \"4.3\"\n*OpenUI *Resolution: PickOne\n*DefaultResolution: 600dpi\n*Resolution 600dpi/600 dpi: \"\"\n*Resolution Best/Best: \"\"\n*Resolution 1200x600dpi/1200x600 dpi: \"\"\n*CloseUI: *Resolution",
        )
        .unwrap();
        let config = TranslateConfig::default();
        let ctx = Context {
            locale: "EN",
            config: &config,
            document: &doc,
        };
        let mut diagnostics = Diagnostics::new();
        let dpi = translate(doc.group("Resolution").unwrap(), &ctx, &mut diagnostics).unwrap();

        let pairs: Vec<_> = dpi
            .option
            .iter()
            .map(|o| (o.vendor_id.as_str(), o.horizontal_dpi, o.vertical_dpi, o.is_default))
            .collect();
        assert_eq!(pairs, [("600dpi", 600, 600, true), ("1200x600dpi", 1200, 600, false)]);

        assert_eq!(diagnostics.len(), 1);
        let diag = diagnostics.iter().next().unwrap();
        assert_eq!(diag.kind, DiagnosticKind::Unrecognized);
        assert_eq!(diag.line, Some(5));
        assert_eq!(diag.key.as_deref(), Some("Resolution"));
    }

    #[test]
    fn square_and_rectangular() {
        assert_eq!(parse_dpi("300dpi"), Some((300, 300)));
        assert_eq!(parse_dpi("1200x600dpi"), Some((1200, 600)));
    }

    #[test]
    fn rejects_other_spellings() {
        for name in ["600", "600 dpi", "600DPI", "x600dpi", "0dpi", "Best", "99999999999dpi"] {
            assert_eq!(parse_dpi(name), None, "{name}");
        }
    }
}
