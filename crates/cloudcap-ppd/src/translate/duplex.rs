// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use cloudcap_core::cdd::{Duplex, DuplexOption};
use cloudcap_core::diagnostics::{Diagnostic, Diagnostics};

use crate::parser::OptionGroup;
use crate::tables::lookup_duplex;

pub(super) fn translate(group: &OptionGroup, diagnostics: &mut Diagnostics) -> Option<Duplex> {
    let mut options = Vec::with_capacity(group.options.len());
    for option in &group.options {
        match lookup_duplex(&option.name) {
            Some(duplex_type) => options.push(DuplexOption {
                duplex_type,
                is_default: option.default,
            }),
            None => diagnostics.push(
                Diagnostic::unrecognized(format!("duplex mode {} is not known", option.name))
                    .at_line(option.line)
                    .for_key(&group.key),
            ),
        }
    }
    (!options.is_empty()).then_some(Duplex { option: options })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudcap_core::cdd::DuplexType;
    use cloudcap_core::diagnostics::DiagnosticKind;

    use crate::parser::parse_ppd;

    fn duplex(body: &str) -> (Option<Duplex>, Diagnostics) {
        let text = format!(
            "*PPD-Adobe: \"4.3\"\n*OpenUI *Duplex: PickOne\n*DefaultDuplex: DuplexTumble\n{body}\n*CloseUI: *Duplex"
        );
        let doc = parse_ppd(&text).unwrap();
        let mut diagnostics = Diagnostics::new();
        let translated = translate(doc.group("Duplex").unwrap(), &mut diagnostics);
        (translated, diagnostics)
    }

    #[test]
    fn unknown_mode_is_dropped_and_the_rest_translate() {
        let (translated, diagnostics) = duplex(
            "*Duplex None/Off: \"\"\n*Duplex Booklet/Booklet: \"\"\n*Duplex DuplexTumble/Short Edge: \"\"",
        );
        assert_eq!(
            translated.unwrap(),
            Duplex {
                option: vec![
                    DuplexOption {
                        duplex_type: DuplexType::NoDuplex,
                        is_default: false,
                    },
                    DuplexOption {
                        duplex_type: DuplexType::ShortEdge,
                        is_default: true,
                    },
                ],
            }
        );
        assert_eq!(diagnostics.len(), 1);
        let diag = diagnostics.iter().next().unwrap();
        assert_eq!(diag.kind, DiagnosticKind::Unrecognized);
        assert_eq!(diag.line, Some(5));
    }

    #[test]
    fn group_of_unknown_modes_yields_nothing() {
        let (translated, diagnostics) = duplex("*Duplex Booklet: \"\"\n*Duplex Simplex: \"\"");
        assert!(translated.is_none());
        assert_eq!(diagnostics.len(), 2);
    }
}
