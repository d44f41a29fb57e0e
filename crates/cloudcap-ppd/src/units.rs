// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Length conversions into microns, the descriptor's linear unit.

/// Microns per millimetre.
pub const MICRONS_PER_MM: f64 = 1_000.0;

/// Microns per centimetre.
pub const MICRONS_PER_CM: f64 = 10_000.0;

/// Microns per inch.
pub const MICRONS_PER_INCH: f64 = 25_400.0;

/// Microns per PostScript point (1/72 inch).
pub const MICRONS_PER_POINT: f64 = MICRONS_PER_INCH / 72.0;

/// Millimetres to whole microns, rounded to nearest.
pub fn mm_to_microns(mm: f64) -> i32 {
    (mm * MICRONS_PER_MM).round() as i32
}

/// Inches to whole microns, rounded to nearest.
pub fn inches_to_microns(inches: f64) -> i32 {
    (inches * MICRONS_PER_INCH).round() as i32
}

/// PostScript points to whole microns, rounded to nearest.
pub fn points_to_microns(points: f64) -> i32 {
    (points * MICRONS_PER_POINT).round() as i32
}

/// `value` in a unit of `microns_per_unit`, as whole microns.
///
/// `None` unless the result is at least one micron and fits an `i32`; the
/// plain conversions above saturate instead.
pub fn checked_microns(value: f64, microns_per_unit: f64) -> Option<i32> {
    let microns = (value * microns_per_unit).round();
    (microns >= 1.0 && microns <= f64::from(i32::MAX)).then_some(microns as i32)
}
