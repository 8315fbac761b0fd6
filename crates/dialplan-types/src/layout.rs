//! Physical layout versions and the field-offset resolver.
//!
//! A country record is a positional array. The two layouts differ by exactly
//! one field: V2 inserts the country's possible lengths right after the
//! national-number pattern, which shifts every later field by one slot.
//!
//! Offsets are kept in two static tables indexed by [`Field`]. A store picks
//! its table once, at construction, through [`LayoutVersion::offsets`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical layout of a metadata table.
///
/// Derived once from the presence of the table's version marker and never
/// changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutVersion {
    /// Legacy layout: no version marker, no possible lengths.
    V1,
    /// Current layout: version marker present, possible lengths at slot 2.
    V2,
}

impl LayoutVersion {
    /// Detect the layout from the presence of a version marker.
    pub fn detect(marker_present: bool) -> Self {
        if marker_present {
            Self::V2
        } else {
            Self::V1
        }
    }

    /// The offset table for this layout.
    pub fn offsets(self) -> &'static FieldOffsets {
        match self {
            Self::V1 => &V1_OFFSETS,
            Self::V2 => &V2_OFFSETS,
        }
    }

    /// Position of `field` inside a country record, or `None` when the
    /// field does not exist in this layout.
    pub fn offset(self, field: Field) -> Option<usize> {
        self.offsets().get(field)
    }

    /// Whether number-type records carry their own possible lengths.
    ///
    /// In V1 a type record is a bare pattern; in V2 it is a
    /// `(pattern, possible lengths)` pair.
    pub fn has_possible_lengths(self) -> bool {
        self.offset(Field::PossibleLengths).is_some()
    }

    /// Name of the top-level key holding the calling-code mapping.
    pub fn calling_codes_key(self) -> &'static str {
        match self {
            Self::V1 => "country_phone_code_to_countries",
            Self::V2 => "country_calling_codes",
        }
    }
}

impl fmt::Display for LayoutVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}

/// Logical fields of a country record, in record order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CallingCode,
    NationalNumberPattern,
    PossibleLengths,
    Formats,
    NationalPrefix,
    NationalPrefixFormattingRule,
    NationalPrefixForParsing,
    NationalPrefixTransformRule,
    NationalPrefixIsOptionalWhenFormatting,
    LeadingDigits,
    Types,
}

impl Field {
    /// Number of logical fields.
    pub const COUNT: usize = 11;

    /// Every field, in record order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::CallingCode,
        Field::NationalNumberPattern,
        Field::PossibleLengths,
        Field::Formats,
        Field::NationalPrefix,
        Field::NationalPrefixFormattingRule,
        Field::NationalPrefixForParsing,
        Field::NationalPrefixTransformRule,
        Field::NationalPrefixIsOptionalWhenFormatting,
        Field::LeadingDigits,
        Field::Types,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// Static mapping from [`Field`] to record position for one layout.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldOffsets([Option<usize>; Field::COUNT]);

impl FieldOffsets {
    /// Position of `field`, or `None` if the layout lacks it.
    pub fn get(&self, field: Field) -> Option<usize> {
        self.0[field.slot()]
    }
}

static V1_OFFSETS: FieldOffsets = FieldOffsets([
    Some(0),
    Some(1),
    None,
    Some(2),
    Some(3),
    Some(4),
    Some(5),
    Some(6),
    Some(7),
    Some(8),
    Some(9),
]);

static V2_OFFSETS: FieldOffsets = FieldOffsets([
    Some(0),
    Some(1),
    Some(2),
    Some(3),
    Some(4),
    Some(5),
    Some(6),
    Some(7),
    Some(8),
    Some(9),
    Some(10),
]);

/// Fields of a format record. Format records look the same in both layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatField {
    Pattern,
    Format,
    LeadingDigitsPatterns,
    NationalPrefixFormattingRule,
    NationalPrefixIsOptionalWhenFormatting,
    InternationalFormat,
}

impl FormatField {
    /// Position inside a format record.
    pub fn offset(self) -> usize {
        self as usize
    }
}
