//! Read-only view over one country record.

use std::fmt;

use serde_json::Value;

use dialplan_types::{Field, FieldOffsets, LayoutVersion, NumberCategory};

use crate::error::{MetadataError, MetadataResult};
use crate::format::Formats;
use crate::number_type::TypeView;
use crate::record;

/// A country record, read through the offset table of its layout.
///
/// Views are cheap to copy and borrow the table; they never copy or change
/// the underlying record. Calling code and national-number pattern are
/// checked when the view is built. Every other field may be absent.
#[derive(Clone, Copy)]
pub struct CountryView<'a> {
    id: &'a str,
    record: &'a [Value],
    version: LayoutVersion,
    offsets: &'static FieldOffsets,
    calling_code: &'a str,
    national_number_pattern: &'a str,
}

impl<'a> CountryView<'a> {
    pub(crate) fn new(id: &'a str, record: &'a Value, version: LayoutVersion) -> MetadataResult<Self> {
        let record = record::as_slice(record).ok_or_else(|| {
            MetadataError::invalid(format!("country record for {id} is not an array"))
        })?;
        let offsets = version.offsets();
        let required = |field: Field| {
            offsets
                .get(field)
                .and_then(|idx| record::str_at(record, idx))
                .ok_or_else(|| MetadataError::invalid(format!("country {id} is missing {field:?}")))
        };
        let calling_code = required(Field::CallingCode)?;
        let national_number_pattern = required(Field::NationalNumberPattern)?;

        Ok(Self {
            id,
            record,
            version,
            offsets,
            calling_code,
            national_number_pattern,
        })
    }

    fn field(&self, field: Field) -> Option<&'a Value> {
        let idx = self.offsets.get(field)?;
        record::slot(self.record, idx)
    }

    fn str_field(&self, field: Field) -> Option<&'a str> {
        self.field(field).and_then(Value::as_str)
    }

    /// The country identifier this view was built for.
    pub fn id(&self) -> &'a str {
        self.id
    }

    /// Layout of the table the record came from.
    pub fn version(&self) -> LayoutVersion {
        self.version
    }

    pub fn country_calling_code(&self) -> &'a str {
        self.calling_code
    }

    pub fn national_number_pattern(&self) -> &'a str {
        self.national_number_pattern
    }

    /// Valid national-number lengths. Always `None` for V1 tables, where the
    /// field does not exist.
    pub fn possible_lengths(&self) -> Option<Vec<u8>> {
        self.field(Field::PossibleLengths).and_then(record::lengths)
    }

    /// Formatting rules, in table order. Empty when the country has none.
    pub fn formats(&self) -> Formats<'a> {
        let entries = self
            .field(Field::Formats)
            .and_then(record::as_slice)
            .unwrap_or(&[]);
        Formats::new(entries, *self)
    }

    pub fn national_prefix(&self) -> Option<&'a str> {
        self.str_field(Field::NationalPrefix)
    }

    pub fn national_prefix_formatting_rule(&self) -> Option<&'a str> {
        self.str_field(Field::NationalPrefixFormattingRule)
    }

    /// Prefix stripped when parsing. Defaults to the national prefix when
    /// absent or empty.
    pub fn national_prefix_for_parsing(&self) -> Option<&'a str> {
        let own = self
            .str_field(Field::NationalPrefixForParsing)
            .filter(|s| !s.is_empty());
        dialplan_types::resolve(own, || self.national_prefix())
    }

    pub fn national_prefix_transform_rule(&self) -> Option<&'a str> {
        self.str_field(Field::NationalPrefixTransformRule)
    }

    pub fn national_prefix_is_optional_when_formatting(&self) -> Option<bool> {
        self.field(Field::NationalPrefixIsOptionalWhenFormatting)
            .and_then(Value::as_bool)
    }

    pub fn leading_digits(&self) -> Option<&'a str> {
        self.str_field(Field::LeadingDigits)
    }

    /// The raw type table, if the record carries one.
    pub fn types(&self) -> Option<&'a [Value]> {
        self.field(Field::Types).and_then(record::as_slice)
    }

    pub fn has_types(&self) -> bool {
        self.types().is_some()
    }

    /// Look up a number type by category name (e.g. `"MOBILE"`).
    ///
    /// Unknown names and categories the country lacks both yield `None`.
    pub fn type_named(&self, name: &str) -> Option<TypeView<'a>> {
        NumberCategory::from_name(name).and_then(|category| self.number_type(category))
    }

    /// Look up a number type by category.
    pub fn number_type(&self, category: NumberCategory) -> Option<TypeView<'a>> {
        let types = self.types()?;
        let entry = record::slot(types, category.slot())?;
        Some(TypeView::new(category, entry, *self))
    }

    /// Every category present in the type table, in table order.
    pub fn number_types(&self) -> impl Iterator<Item = TypeView<'a>> + 'a {
        let country = *self;
        NumberCategory::ALL
            .into_iter()
            .filter_map(move |category| country.number_type(category))
    }
}

impl fmt::Debug for CountryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountryView")
            .field("id", &self.id)
            .field("version", &self.version)
            .field("calling_code", &self.calling_code)
            .finish()
    }
}
