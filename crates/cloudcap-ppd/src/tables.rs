// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Static lookup tables: PPD media names, duplex keywords, and document
// languages.

use cloudcap_core::cdd::MediaSizeName::*;
use cloudcap_core::cdd::{ColorType, DuplexType, MediaSizeName};

use crate::units::{inches_to_microns, mm_to_microns};

/// Unit a table dimension is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Millimeters,
    Inches,
}

/// A standard PPD page size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaEntry {
    /// Option keyword used in `*PageSize <name>`.
    pub ppd_name: &'static str,
    pub name: MediaSizeName,
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
    /// Display label, independent of the PPD's translation string.
    pub label: &'static str,
}

impl MediaEntry {
    /// (width, height) in microns.
    pub fn microns(&self) -> (i32, i32) {
        match self.unit {
            Unit::Millimeters => (mm_to_microns(self.width), mm_to_microns(self.height)),
            Unit::Inches => (inches_to_microns(self.width), inches_to_microns(self.height)),
        }
    }
}

const fn mm(
    ppd_name: &'static str,
    name: MediaSizeName,
    width: f64,
    height: f64,
    label: &'static str,
) -> MediaEntry {
    MediaEntry {
        ppd_name,
        name,
        width,
        height,
        unit: Unit::Millimeters,
        label,
    }
}

const fn inches(
    ppd_name: &'static str,
    name: MediaSizeName,
    width: f64,
    height: f64,
    label: &'static str,
) -> MediaEntry {
    MediaEntry {
        ppd_name,
        name,
        width,
        height,
        unit: Unit::Inches,
        label,
    }
}

/// Standard page sizes of the Adobe PPD format. `B<n>` is JIS,
/// `ISOB<n>` is ISO.
pub static MEDIA_SIZES: &[MediaEntry] = &[
    mm("A0", IsoA0, 841.0, 1189.0, "A0"),
    mm("A1", IsoA1, 594.0, 841.0, "A1"),
    mm("A2", IsoA2, 420.0, 594.0, "A2"),
    mm("A3", IsoA3, 297.0, 420.0, "A3"),
    mm("A4", IsoA4, 210.0, 297.0, "A4"),
    mm("A4Small", IsoA4, 210.0, 297.0, "A4 (small)"),
    mm("A5", IsoA5, 148.0, 210.0, "A5"),
    mm("A6", IsoA6, 105.0, 148.0, "A6"),
    mm("A7", IsoA7, 74.0, 105.0, "A7"),
    mm("A8", IsoA8, 52.0, 74.0, "A8"),
    mm("A9", IsoA9, 37.0, 52.0, "A9"),
    mm("A10", IsoA10, 26.0, 37.0, "A10"),
    mm("ISOB0", IsoB0, 1000.0, 1414.0, "B0 (ISO)"),
    mm("ISOB1", IsoB1, 707.0, 1000.0, "B1 (ISO)"),
    mm("ISOB2", IsoB2, 500.0, 707.0, "B2 (ISO)"),
    mm("ISOB3", IsoB3, 353.0, 500.0, "B3 (ISO)"),
    mm("ISOB4", IsoB4, 250.0, 353.0, "B4 (ISO)"),
    mm("ISOB5", IsoB5, 176.0, 250.0, "B5 (ISO)"),
    mm("ISOB6", IsoB6, 125.0, 176.0, "B6 (ISO)"),
    mm("ISOB7", IsoB7, 88.0, 125.0, "B7 (ISO)"),
    mm("ISOB8", IsoB8, 62.0, 88.0, "B8 (ISO)"),
    mm("ISOB9", IsoB9, 44.0, 62.0, "B9 (ISO)"),
    mm("ISOB10", IsoB10, 31.0, 44.0, "B10 (ISO)"),
    mm("B0", JisB0, 1030.0, 1456.0, "B0 (JIS)"),
    mm("B1", JisB1, 728.0, 1030.0, "B1 (JIS)"),
    mm("B2", JisB2, 515.0, 728.0, "B2 (JIS)"),
    mm("B3", JisB3, 364.0, 515.0, "B3 (JIS)"),
    mm("B4", JisB4, 257.0, 364.0, "B4 (JIS)"),
    mm("B5", JisB5, 182.0, 257.0, "B5 (JIS)"),
    mm("B6", JisB6, 128.0, 182.0, "B6 (JIS)"),
    mm("B7", JisB7, 91.0, 128.0, "B7 (JIS)"),
    mm("B8", JisB8, 64.0, 91.0, "B8 (JIS)"),
    mm("B9", JisB9, 45.0, 64.0, "B9 (JIS)"),
    mm("B10", JisB10, 32.0, 45.0, "B10 (JIS)"),
    mm("EnvC4", IsoC4, 229.0, 324.0, "Envelope C4"),
    mm("EnvC5", IsoC5, 162.0, 229.0, "Envelope C5"),
    mm("EnvC6", IsoC6, 114.0, 162.0, "Envelope C6"),
    mm("EnvDL", IsoDl, 110.0, 220.0, "Envelope DL"),
    mm("Postcard", JpnHagaki, 100.0, 148.0, "Postcard"),
    mm("DoublePostcard", JpnOufuku, 148.0, 200.0, "Double Postcard"),
    inches("Letter", NaLetter, 8.5, 11.0, "Letter"),
    inches("LetterSmall", NaLetter, 8.5, 11.0, "Letter (small)"),
    inches("Legal", NaLegal, 8.5, 14.0, "Legal"),
    inches("LegalSmall", NaLegal, 8.5, 14.0, "Legal (small)"),
    inches("Tabloid", NaLedger, 11.0, 17.0, "Tabloid"),
    inches("11x17", NaLedger, 11.0, 17.0, "11x17"),
    inches("Ledger", NaLedger, 17.0, 11.0, "Ledger"),
    inches("Executive", NaExecutive, 7.25, 10.5, "Executive"),
    inches("Statement", NaInvoice, 5.5, 8.5, "Statement"),
    inches("Folio", NaFoolscap, 8.5, 13.0, "Folio"),
    inches("10x14", Na10x14, 10.0, 14.0, "10x14"),
    inches("Env9", NaNumber9, 3.875, 8.875, "Envelope #9"),
    inches("Env10", NaNumber10, 4.125, 9.5, "Envelope #10"),
    inches("EnvMonarch", NaMonarch, 3.875, 7.5, "Envelope Monarch"),
];

/// Look up a standard page size by its exact PPD option keyword.
pub fn lookup_media(ppd_name: &str) -> Option<&'static MediaEntry> {
    MEDIA_SIZES.iter().find(|e| e.ppd_name == ppd_name)
}

/// `*Duplex` option keywords.
pub static DUPLEX_TYPES: &[(&str, DuplexType)] = &[
    ("None", DuplexType::NoDuplex),
    ("DuplexNoTumble", DuplexType::LongEdge),
    ("DuplexTumble", DuplexType::ShortEdge),
];

pub fn lookup_duplex(ppd_name: &str) -> Option<DuplexType> {
    DUPLEX_TYPES
        .iter()
        .find(|(name, _)| *name == ppd_name)
        .map(|&(_, duplex)| duplex)
}

/// Keywords classifying a `*ColorModel` option, lowercase.
pub static COLOR_KEYWORDS: &[(&str, ColorType)] = &[
    ("gray", ColorType::StandardMonochrome),
    ("grey", ColorType::StandardMonochrome),
    ("black", ColorType::StandardMonochrome),
    ("mono", ColorType::StandardMonochrome),
    ("cmy", ColorType::StandardColor),
    ("rgb", ColorType::StandardColor),
    ("color", ColorType::StandardColor),
    ("colour", ColorType::StandardColor),
    ("auto", ColorType::Auto),
];

/// Classify a color option name or label.
///
/// A keyword at the start wins; otherwise the first keyword found anywhere,
/// monochrome keywords first ("KGray").
pub fn classify_color(word: &str) -> Option<ColorType> {
    let word = word.trim().to_ascii_lowercase();
    COLOR_KEYWORDS
        .iter()
        .find(|(keyword, _)| word.starts_with(keyword))
        .or_else(|| COLOR_KEYWORDS.iter().find(|(keyword, _)| word.contains(keyword)))
        .map(|&(_, class)| class)
}

/// `*LanguageVersion` values and the locale codes used for display labels.
pub static LANGUAGE_LOCALES: &[(&str, &str)] = &[
    ("English", "EN"),
    ("German", "DE"),
    ("French", "FR"),
    ("Spanish", "ES"),
    ("Italian", "IT"),
    ("Dutch", "NL"),
    ("Portuguese", "PT"),
    ("Swedish", "SV"),
    ("Danish", "DA"),
    ("Finnish", "FI"),
    ("Norwegian", "NO"),
    ("Polish", "PL"),
    ("Czech", "CS"),
    ("Russian", "RU"),
    ("Japanese", "JA"),
    ("Chinese", "ZH"),
    ("Korean", "KO"),
];

pub fn lookup_locale(language: &str) -> Option<&'static str> {
    LANGUAGE_LOCALES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(language))
        .map(|&(_, locale)| locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ppd_names_are_unique() {
        let mut seen = HashSet::new();
        for entry in MEDIA_SIZES {
            assert!(seen.insert(entry.ppd_name), "duplicate {}", entry.ppd_name);
        }
    }

    #[test]
    fn letter_and_a4_dimensions() {
        assert_eq!(lookup_media("Letter").unwrap().microns(), (215_900, 279_400));
        assert_eq!(lookup_media("A4").unwrap().microns(), (210_000, 297_000));
        assert_eq!(lookup_media("Env10").unwrap().microns(), (104_775, 241_300));
    }

    #[test]
    fn b_sizes_are_jis_unless_prefixed() {
        assert_eq!(lookup_media("B5").unwrap().name, MediaSizeName::JisB5);
        assert_eq!(lookup_media("ISOB5").unwrap().name, MediaSizeName::IsoB5);
        assert!(lookup_media("b5").is_none());
    }

    #[test]
    fn portrait_entries_except_ledger() {
        for entry in MEDIA_SIZES.iter().filter(|e| e.ppd_name != "Ledger") {
            assert!(entry.width <= entry.height, "{} is landscape", entry.ppd_name);
        }
    }

    #[test]
    fn duplex_and_locale_lookups() {
        assert_eq!(lookup_duplex("DuplexTumble"), Some(DuplexType::ShortEdge));
        assert_eq!(lookup_duplex("Simplex"), None);
        assert_eq!(lookup_locale("german"), Some("DE"));
        assert_eq!(lookup_locale("Klingon"), None);
    }

    #[test]
    fn color_keywords() {
        let cases = [
            ("CMYK", Some(ColorType::StandardColor)),
            ("RGB", Some(ColorType::StandardColor)),
            ("Colour", Some(ColorType::StandardColor)),
            ("Gray", Some(ColorType::StandardMonochrome)),
            ("Black and White", Some(ColorType::StandardMonochrome)),
            ("KGray", Some(ColorType::StandardMonochrome)),
            ("FullColor", Some(ColorType::StandardColor)),
            ("Auto", Some(ColorType::Auto)),
            ("Sepia", None),
        ];
        for (word, expected) in cases {
            assert_eq!(classify_color(word), expected, "{word}");
        }
    }
}
