// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Model name normalization.
//
// PPD nicknames carry driver and version noise after the actual model
// ("LaserJet 4250 PS v3010.107 cups-team Letter+Duplex"). Each cleanup rule
// recognizes one kind of trailer; the model is truncated at the leftmost
// position where any rule matches, and the pass repeats until no rule fires.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Rule names and patterns, in priority order. A match marks where the
/// model name ends.
const RULE_PATTERNS: &[(&str, &str)] = &[
    ("parenthetical", r"\s*\("),
    ("comma", r"\s*,"),
    ("dash_separator", r"\s+-(?:\s|$)"),
    ("pdl_tag", r"\s+(?:PS[23]?|PXL|PDF|PCL\d*|pcl\d*|PostScript|w/PS)\b"),
    ("br_script", r"\s+BR-Script[23][A-Z]?\b"),
    ("foomatic", r"\s+Foomatic/"),
    ("cups_plus", r"\s+CUPS\+"),
    ("hp_driver", r"\s+(?:hpijs|hpcups)\b"),
    ("cups_team", r"\s+cups-team\b"),
    ("recommended", r"\s+recommended\b"),
    ("version", r"\s+v?\d+(?:\.\d+)+\b"),
];

static RULES: LazyLock<Vec<CleanupRule>> = LazyLock::new(|| {
    RULE_PATTERNS
        .iter()
        .map(|&(name, pattern)| CleanupRule {
            name,
            regex: Regex::new(pattern).expect("model cleanup patterns are valid"),
        })
        .collect()
});

/// One truncation rule of the model name cleanup.
#[derive(Debug)]
pub struct CleanupRule {
    name: &'static str,
    regex: Regex,
}

impl CleanupRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Byte offset at which this rule would cut `model`.
    ///
    /// Matches that would leave nothing of the model behind are skipped.
    pub fn truncation_point(&self, model: &str) -> Option<usize> {
        self.regex
            .find_iter(model)
            .map(|m| m.start())
            .find(|&at| !trim_separators(&model[..at]).is_empty())
    }
}

/// The cleanup rules in priority order.
pub fn rules() -> &'static [CleanupRule] {
    &RULES
}

/// Reduce a noisy model or driver label to the bare model name.
///
/// Never fails: a label no rule matches is returned unchanged. Applying the
/// function to its own output is a no-op.
pub fn normalize_model(model: &str) -> String {
    let mut current = model;
    while let Some(shorter) = normalize_once(current) {
        current = shorter;
    }
    current.to_string()
}

/// One pass: cut at the leftmost rule match, earlier rules winning ties.
fn normalize_once(model: &str) -> Option<&str> {
    let mut cut: Option<(usize, &'static str)> = None;
    for rule in rules() {
        if let Some(at) = rule.truncation_point(model) {
            if cut.is_none_or(|(best, _)| at < best) {
                cut = Some((at, rule.name));
            }
        }
    }
    let (at, rule) = cut?;
    trace!(rule, at, model, "truncating model name");
    Some(trim_separators(&model[..at]))
}

fn trim_separators(s: &str) -> &str {
    s.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '-' | '/' | ';' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rule(name: &str) -> &'static CleanupRule {
        rules()
            .iter()
            .find(|r| r.name() == name)
            .unwrap_or_else(|| panic!("no rule named {name}"))
    }

    #[test]
    fn cleans_known_driver_labels() {
        let cases = [
            ("C451 PS(P)", "C451"),
            ("MD-1000 Foomatic/md2k", "MD-1000"),
            ("M24 Foomatic/epson (recommended)", "M24"),
            ("LaserJet 2 w/PS Foomatic/Postscript (recommended)", "LaserJet 2"),
            ("8445 PS2", "8445"),
            ("AL-2600 PS3 v3016.103", "AL-2600"),
            ("AR-163FG PS, 1.1", "AR-163FG"),
            ("3212 PXL", "3212"),
            ("Aficio SP C431DN PDF cups-team recommended", "Aficio SP C431DN"),
            ("PIXMA Pro9000 - CUPS+Gutenprint v5.2.8-pre1", "PIXMA Pro9000"),
            ("LaserJet M401dne PS A4 cups-team recommended", "LaserJet M401dne"),
            ("LaserJet 4250 PS v3010.107 cups-team Letter+Duplex", "LaserJet 4250"),
            ("Designjet Z5200 PostScript - PS", "Designjet Z5200"),
            ("DCP-7025 BR-Script3", "DCP-7025"),
            ("HL-5070DN BR-Script3J", "HL-5070DN"),
            ("HL-1450 BR-Script2", "HL-1450"),
            ("FS-600 (KPDL-2) Foomatic/Postscript (recommended)", "FS-600"),
            (
                "XP-750 Series, Epson Inkjet Printer Driver (ESC/P-R) for Linux",
                "XP-750 Series",
            ),
            ("C5700(PS)", "C5700"),
            (
                "OfficeJet 7400 Foomatic/hpijs (recommended) - HPLIP 0.9.7",
                "OfficeJet 7400",
            ),
            ("LaserJet p4015n, hpcups 3.13.9", "LaserJet p4015n"),
            (
                "Color LaserJet 3600 hpijs, 3.13.9, requires proprietary plugin",
                "Color LaserJet 3600",
            ),
            ("LaserJet 4250 pcl3, hpcups 3.13.9", "LaserJet 4250"),
            ("DesignJet T790 pcl, 1.0", "DesignJet T790"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_model(input), expected, "input: {input}");
        }
    }

    #[test]
    fn unmatched_labels_are_returned_unchanged() {
        assert_eq!(normalize_model("LaserJet 4250"), "LaserJet 4250");
        assert_eq!(normalize_model("XP-750 Series"), "XP-750 Series");
        assert_eq!(normalize_model("  padded  "), "  padded  ");
        assert_eq!(normalize_model(""), "");
    }

    #[test]
    fn never_truncates_to_nothing() {
        assert_eq!(normalize_model("(PS) C5700"), "(PS) C5700");
        assert_eq!(normalize_model(", trailing"), ", trailing");
    }

    #[test]
    fn each_rule_finds_its_trailer() {
        let cases = [
            ("parenthetical", "C5700(PS)", 5),
            ("comma", "XP-750 Series, Epson", 13),
            ("dash_separator", "PIXMA Pro9000 - CUPS+Gutenprint", 13),
            ("pdl_tag", "8445 PS2", 4),
            ("br_script", "HL-5070DN BR-Script3J", 9),
            ("foomatic", "MD-1000 Foomatic/md2k", 7),
            ("cups_plus", "Pro9000 CUPS+Gutenprint", 7),
            ("hp_driver", "Color LaserJet 3600 hpijs", 19),
            ("cups_team", "C431DN cups-team", 6),
            ("recommended", "M24 recommended", 3),
            ("version", "AL-2600 v3016.103", 7),
        ];
        for (name, input, at) in cases {
            assert_eq!(rule(name).truncation_point(input), Some(at), "rule {name}");
        }
    }

    #[test]
    fn rules_leave_model_identity_alone() {
        assert_eq!(rule("dash_separator").truncation_point("MD-1000"), None);
        assert_eq!(rule("pdl_tag").truncation_point("LaserJet PSX"), None);
        assert_eq!(rule("pdl_tag").truncation_point("Aficio SP C431DN"), None);
        assert_eq!(rule("version").truncation_point("LaserJet 4250"), None);
        for r in rules() {
            assert_eq!(r.truncation_point("XP-750 Series"), None, "rule {}", r.name());
        }
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(label in "\\PC{0,60}") {
            let once = normalize_model(&label);
            prop_assert_eq!(normalize_model(&once), once);
        }

        #[test]
        fn normalization_of_noisy_labels_is_idempotent(
            model in "[A-Za-z]{2,8}-?[0-9]{2,5}",
            noise in prop::sample::select(vec![
                " PS3", " BR-Script3J", " Foomatic/hpijs", ", 1.1", " (recommended)",
                " - CUPS+Gutenprint v5.2", " cups-team", " v3010.107",
            ]),
        ) {
            let label = format!("{model}{noise}");
            let once = normalize_model(&label);
            prop_assert_eq!(&once, &model);
            prop_assert_eq!(normalize_model(&once), once);
        }
    }
}
