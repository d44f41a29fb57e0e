// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cloud device description (CDD) printer capability types.
//
// These mirror the printer description section a cloud print service expects:
// one optional section per well-known capability plus a list of generic vendor
// capabilities. Field names serialize to the CDD JSON names.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Locale used when a document does not declare one.
pub const DEFAULT_LOCALE: &str = "EN";

/// A display string tagged with its locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    pub locale: String,
    pub value: String,
}

/// Build the one-element localized label list used throughout the descriptor.
pub fn localized(locale: &str, value: impl Into<String>) -> Vec<LocalizedString> {
    vec![LocalizedString {
        locale: locale.to_string(),
        value: value.into(),
    }]
}

/// The complete capability descriptor for one printer.
///
/// A present field means the PPD declared the capability and the translator
/// recognized it. Absent fields are omitted from the JSON form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapabilityDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printing_speed: Option<PrintingSpeed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_size: Option<MediaSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplex: Option<Duplex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpi: Option<Dpi>,
    /// Unrecognized PickOne groups, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vendor_capability: Vec<VendorCapability>,
}

impl CapabilityDescriptor {
    /// Whether no capability at all was recognized.
    pub fn is_empty(&self) -> bool {
        self.printing_speed.is_none()
            && self.media_size.is_none()
            && self.color.is_none()
            && self.duplex.is_none()
            && self.dpi.is_none()
            && self.vendor_capability.is_empty()
    }

    /// Serialize to the CDD JSON representation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a descriptor previously produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// -- Printing speed ---------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintingSpeed {
    pub option: Vec<PrintingSpeedOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintingSpeedOption {
    /// Pages per minute.
    pub speed_ppm: f32,
}

// -- Media size --------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSize {
    pub option: Vec<MediaSizeOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSizeOption {
    pub name: MediaSizeName,
    pub width_microns: i32,
    pub height_microns: i32,
    #[serde(default)]
    pub is_continuous_feed: bool,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom_display_name: String,
    /// The PPD option name this size was translated from.
    pub vendor_id: String,
    #[serde(default)]
    pub custom_display_name_localized: Vec<LocalizedString>,
}

/// Standard media size names known to the cloud service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaSizeName {
    /// Dimensions given explicitly rather than by a standard name.
    Custom,
    IsoA0,
    IsoA1,
    IsoA2,
    IsoA3,
    IsoA4,
    IsoA5,
    IsoA6,
    IsoA7,
    IsoA8,
    IsoA9,
    IsoA10,
    IsoB0,
    IsoB1,
    IsoB2,
    IsoB3,
    IsoB4,
    IsoB5,
    IsoB6,
    IsoB7,
    IsoB8,
    IsoB9,
    IsoB10,
    IsoC4,
    IsoC5,
    IsoC6,
    IsoDl,
    JisB0,
    JisB1,
    JisB2,
    JisB3,
    JisB4,
    JisB5,
    JisB6,
    JisB7,
    JisB8,
    JisB9,
    JisB10,
    NaLetter,
    NaLegal,
    NaLedger,
    NaExecutive,
    NaInvoice,
    NaFoolscap,
    #[serde(rename = "NA_10X14")]
    Na10x14,
    #[serde(rename = "NA_NUMBER_9")]
    NaNumber9,
    #[serde(rename = "NA_NUMBER_10")]
    NaNumber10,
    NaMonarch,
    JpnHagaki,
    JpnOufuku,
}

// -- Color -------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub option: Vec<ColorOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    /// Group key and option name concatenated, e.g. `ColorModelCMYK`.
    pub vendor_id: String,
    #[serde(rename = "type")]
    pub color_type: ColorType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom_display_name: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub custom_display_name_localized: Vec<LocalizedString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorType {
    StandardColor,
    StandardMonochrome,
    CustomColor,
    CustomMonochrome,
    Auto,
}

// -- Duplex ------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duplex {
    pub option: Vec<DuplexOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplexOption {
    #[serde(rename = "type")]
    pub duplex_type: DuplexType,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuplexType {
    NoDuplex,
    LongEdge,
    ShortEdge,
}

// -- Resolution --------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dpi {
    pub option: Vec<DpiOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpiOption {
    pub horizontal_dpi: i32,
    pub vertical_dpi: i32,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom_display_name: String,
    pub vendor_id: String,
    #[serde(default)]
    pub custom_display_name_localized: Vec<LocalizedString>,
}

// -- Vendor capabilities -----------------------------------------------------

/// Generic capability for an option group the translator does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorCapability {
    pub id: String,
    #[serde(rename = "type")]
    pub capability_type: VendorCapabilityType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default)]
    pub display_name_localized: Vec<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_cap: Option<SelectCapability>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VendorCapabilityType {
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectCapability {
    pub option: Vec<SelectCapabilityOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectCapabilityOption {
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub display_name_localized: Vec<LocalizedString>,
}
