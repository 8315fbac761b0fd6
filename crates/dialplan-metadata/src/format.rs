//! Formatting-rule views and the national-prefix decision.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use serde_json::Value;

use dialplan_types::{resolve, FormatField};

use crate::country::CountryView;
use crate::record;

/// Placeholder for the first captured group in a formatting rule.
const FIRST_GROUP: &str = "$1";

/// One formatting rule of a country.
///
/// Fields the rule leaves out fall back to the owning country, one level
/// only.
#[derive(Clone, Copy)]
pub struct FormatView<'a> {
    record: &'a [Value],
    country: CountryView<'a>,
}

impl<'a> FormatView<'a> {
    pub(crate) fn new(entry: &'a Value, country: CountryView<'a>) -> Self {
        Self {
            record: record::as_slice(entry).unwrap_or(&[]),
            country,
        }
    }

    fn str_field(&self, field: FormatField) -> Option<&'a str> {
        record::str_at(self.record, field.offset())
    }

    /// An inheritable string field. Empty strings defer to the fallback.
    fn own_str(&self, field: FormatField) -> Option<&'a str> {
        self.str_field(field).filter(|s| !s.is_empty())
    }

    /// The country this rule belongs to.
    pub fn country(&self) -> CountryView<'a> {
        self.country
    }

    pub fn pattern(&self) -> Option<&'a str> {
        self.str_field(FormatField::Pattern)
    }

    /// National output template, e.g. `"$1 $2 $3"`.
    pub fn format(&self) -> Option<&'a str> {
        self.str_field(FormatField::Format)
    }

    pub fn leading_digits_patterns(&self) -> Vec<&'a str> {
        record::array_at(self.record, FormatField::LeadingDigitsPatterns.offset())
            .map(record::strings)
            .unwrap_or_default()
    }

    pub fn national_prefix_formatting_rule(&self) -> Option<&'a str> {
        resolve(
            self.own_str(FormatField::NationalPrefixFormattingRule),
            || self.country.national_prefix_formatting_rule(),
        )
    }

    /// An own `false` does not hide the country's `true`.
    pub fn national_prefix_is_optional_when_formatting(&self) -> Option<bool> {
        resolve(
            record::bool_at(
                self.record,
                FormatField::NationalPrefixIsOptionalWhenFormatting.offset(),
            )
            .filter(|optional| *optional),
            || self.country.national_prefix_is_optional_when_formatting(),
        )
    }

    /// Whether the formatting rule inserts actual national-prefix digits.
    ///
    /// `"$1"` is a pass-through and `"($1)"` only adds punctuation; neither
    /// counts. `"0$1"` or `"8 ($1)"` do.
    pub fn uses_national_prefix(&self) -> bool {
        self.national_prefix_formatting_rule()
            .is_some_and(rule_inserts_digits)
    }

    /// Whether national formatting must prepend the national prefix.
    ///
    /// Requires a rule that inserts digits and is not marked optional.
    pub fn national_prefix_is_mandatory_when_formatting(&self) -> bool {
        self.national_prefix_formatting_rule().is_some()
            && self.uses_national_prefix()
            && !self
                .national_prefix_is_optional_when_formatting()
                .unwrap_or(false)
    }

    /// International output template. Defaults to [`FormatView::format`].
    pub fn international_format(&self) -> Option<&'a str> {
        resolve(self.own_str(FormatField::InternationalFormat), || {
            self.format()
        })
    }
}

fn rule_inserts_digits(rule: &str) -> bool {
    rule != FIRST_GROUP
        && rule
            .replacen(FIRST_GROUP, "", 1)
            .chars()
            .any(|c| c.is_ascii_digit())
}

impl fmt::Debug for FormatView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatView")
            .field("country", &self.country.id())
            .field("pattern", &self.pattern())
            .field("format", &self.format())
            .finish()
    }
}

/// Iterator over a country's formatting rules.
///
/// A clone continues from the same position. Call [`CountryView::formats`]
/// again for a fresh pass.
#[derive(Clone)]
pub struct Formats<'a> {
    entries: slice::Iter<'a, Value>,
    country: CountryView<'a>,
}

impl<'a> Formats<'a> {
    pub(crate) fn new(entries: &'a [Value], country: CountryView<'a>) -> Self {
        Self {
            entries: entries.iter(),
            country,
        }
    }
}

impl<'a> Iterator for Formats<'a> {
    type Item = FormatView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let country = self.country;
        self.entries.next().map(|entry| FormatView::new(entry, country))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for Formats<'_> {}

impl FusedIterator for Formats<'_> {}

impl fmt::Debug for Formats<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formats")
            .field("country", &self.country.id())
            .field("remaining", &self.entries.len())
            .finish()
    }
}
