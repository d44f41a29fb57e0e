// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use cloudcap_core::cdd::{PrintingSpeed, PrintingSpeedOption};
use cloudcap_core::diagnostics::{Diagnostic, Diagnostics};

use crate::parser::Statement;

/// `*Throughput: "<ppm>"` as a single-option printing speed.
pub(super) fn translate(statement: &Statement, diagnostics: &mut Diagnostics) -> Option<PrintingSpeed> {
    let raw = statement.value.trim();
    match raw.parse::<f32>() {
        Ok(ppm) if ppm.is_finite() && ppm > 0.0 => Some(PrintingSpeed {
            option: vec![PrintingSpeedOption { speed_ppm: ppm }],
        }),
        _ => {
            diagnostics.push(
                Diagnostic::structural(format!("throughput {raw:?} is not a positive number"))
                    .at_line(statement.line)
                    .for_key(&statement.key),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statement(value: &str) -> Statement {
        Statement {
            key: "Throughput".into(),
            option: None,
            translation: None,
            value: value.into(),
            line: 3,
        }
    }

    #[test]
    fn fractional_speed() {
        let mut diagnostics = Diagnostics::new();
        let speed = translate(&statement(" 12.5 "), &mut diagnostics).unwrap();
        assert_eq!(speed.option[0].speed_ppm, 12.5);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn rejects_garbage_and_non_positive() {
        for value in ["fast", "", "0", "-4", "NaN", "inf"] {
            let mut diagnostics = Diagnostics::new();
            assert!(translate(&statement(value), &mut diagnostics).is_none(), "{value}");
            assert_eq!(diagnostics.iter().next().unwrap().line, Some(3));
        }
    }
}
