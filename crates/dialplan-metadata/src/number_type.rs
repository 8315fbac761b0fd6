use std::fmt;

use serde_json::Value;

use dialplan_types::{resolve, NumberCategory};

use crate::country::CountryView;
use crate::record;

/// One number-category record of a country.
///
/// In V1 tables the record is the bare pattern. In V2 tables it is a
/// `[pattern, possible lengths]` pair whose lengths default to the country's.
#[derive(Clone, Copy)]
pub struct TypeView<'a> {
    category: NumberCategory,
    entry: &'a Value,
    country: CountryView<'a>,
}

impl<'a> TypeView<'a> {
    pub(crate) fn new(category: NumberCategory, entry: &'a Value, country: CountryView<'a>) -> Self {
        Self {
            category,
            entry,
            country,
        }
    }

    pub fn category(&self) -> NumberCategory {
        self.category
    }

    pub fn country(&self) -> CountryView<'a> {
        self.country
    }

    pub fn pattern(&self) -> Option<&'a str> {
        if self.country.version().has_possible_lengths() {
            record::as_slice(self.entry).and_then(|pair| record::str_at(pair, 0))
        } else {
            self.entry.as_str()
        }
    }

    /// Always `None` for V1 tables.
    pub fn possible_lengths(&self) -> Option<Vec<u8>> {
        if !self.country.version().has_possible_lengths() {
            return None;
        }
        let own = record::as_slice(self.entry)
            .and_then(|pair| record::slot(pair, 1))
            .and_then(record::lengths);
        resolve(own, || self.country.possible_lengths())
    }
}

impl fmt::Debug for TypeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeView")
            .field("country", &self.country.id())
            .field("category", &self.category)
            .field("pattern", &self.pattern())
            .finish()
    }
}
