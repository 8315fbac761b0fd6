//! The root metadata store.
//!
//! [`MetadataStore`] owns the raw table, its detected layout, and the
//! currently selected country. Views handed out by the store borrow from it
//! and can be held side by side; the selection is only a convenience for
//! callers that drive one country at a time.
//!
//! # Invariants
//!
//! - The layout is fixed at construction.
//! - The table is never modified after construction.
//! - The selection changes only on a successful select or an explicit clear.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use dialplan_types::LayoutVersion;

use crate::config::StoreConfig;
use crate::country::CountryView;
use crate::error::{MetadataError, MetadataResult};

const COUNTRIES_KEY: &str = "countries";
const VERSION_KEY: &str = "version";

/// Holds a numbering-plan metadata table and answers country lookups.
#[derive(Debug)]
pub struct MetadataStore {
    countries: Map<String, Value>,
    calling_codes: Option<Map<String, Value>>,
    marker: Option<Value>,
    version: LayoutVersion,
    config: StoreConfig,
    selected: Option<String>,
}

impl MetadataStore {
    /// Build a store from a raw table with the default configuration.
    ///
    /// Fails with `InvalidMetadata` when the table is `null`, not an
    /// object, or has no `countries` object.
    pub fn new(raw: Value) -> MetadataResult<Self> {
        Self::with_config(raw, StoreConfig::default())
    }

    /// Build a store from a raw table.
    pub fn with_config(raw: Value, config: StoreConfig) -> MetadataResult<Self> {
        let mut table = match raw {
            Value::Object(table) => table,
            Value::Null => return Err(MetadataError::invalid("metadata is required")),
            _ => return Err(MetadataError::invalid("metadata must be an object")),
        };

        let countries = match table.remove(COUNTRIES_KEY) {
            Some(Value::Object(countries)) => countries,
            _ => return Err(MetadataError::invalid("metadata has no country mapping")),
        };

        let marker = table.remove(VERSION_KEY).filter(marker_present);
        let version = config
            .layout
            .unwrap_or_else(|| LayoutVersion::detect(marker.is_some()));

        let calling_codes = match table.remove(version.calling_codes_key()) {
            Some(Value::Object(codes)) => Some(codes),
            _ => None,
        };

        debug!(
            %version,
            countries = countries.len(),
            calling_codes = calling_codes.as_ref().map_or(0, Map::len),
            "metadata store loaded"
        );

        Ok(Self {
            countries,
            calling_codes,
            marker,
            version,
            config,
            selected: None,
        })
    }

    /// Parse a JSON document and build a store from it.
    pub fn from_json_str(json: &str) -> MetadataResult<Self> {
        let raw: Value = serde_json::from_str(json)?;
        Self::new(raw)
    }

    /// The layout every record in this table is read with.
    pub fn version(&self) -> LayoutVersion {
        self.version
    }

    /// The raw version marker, when it is a string.
    pub fn version_marker(&self) -> Option<&str> {
        self.marker.as_ref().and_then(Value::as_str)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn has_country(&self, id: &str) -> bool {
        self.countries.contains_key(id)
    }

    /// All country identifiers in the table.
    pub fn country_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.countries.keys().map(String::as_str)
    }

    /// A view over one country, independent of the selection.
    pub fn country(&self, id: &str) -> MetadataResult<CountryView<'_>> {
        let (id, record) = self
            .countries
            .get_key_value(id)
            .ok_or_else(|| MetadataError::UnknownCountry { id: id.to_string() })?;
        CountryView::new(id, record, self.version)
    }

    // ---------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------

    /// Select a country and return its view.
    ///
    /// On failure the previous selection is kept.
    pub fn select_country(&mut self, id: &str) -> MetadataResult<CountryView<'_>> {
        self.country(id)?;
        debug!(country = id, "country selected");
        self.selected = Some(id.to_string());
        self.country(id)
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        if let Some(previous) = self.selected.take() {
            debug!(country = %previous, "country selection cleared");
        }
    }

    /// Identifier of the selected country, if any.
    pub fn selected_country(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// View over the selected country, if any.
    pub fn selected(&self) -> Option<CountryView<'_>> {
        self.selected_country().and_then(|id| self.country(id).ok())
    }

    // ---------------------------------------------------------------
    // Calling codes
    // ---------------------------------------------------------------

    /// The calling-code mapping, read from the key that matches the layout.
    pub fn country_calling_codes(&self) -> Option<&Map<String, Value>> {
        self.calling_codes.as_ref()
    }

    /// Countries sharing `code`, in table order.
    pub fn countries_for_calling_code(&self, code: u32) -> Option<Vec<&str>> {
        let ids = self.calling_codes.as_ref()?.get(&code.to_string())?.as_array()?;
        Some(ids.iter().filter_map(Value::as_str).collect())
    }

    /// Select the country that carries the formatting rules for `code`.
    ///
    /// Countries sharing a calling code keep their shared rules in the
    /// record of the country listed first. If that country is in the table
    /// it is selected exactly like [`select_country`]. If it is not (a
    /// reduced table), the selection is left unchanged and `Ok(None)` is
    /// returned, unless the store was built with
    /// [`StoreConfig::strict_calling_codes`].
    ///
    /// [`select_country`]: MetadataStore::select_country
    pub fn select_country_by_calling_code(
        &mut self,
        code: u32,
    ) -> MetadataResult<Option<CountryView<'_>>> {
        let first = self
            .countries_for_calling_code(code)
            .and_then(|ids| ids.first().map(|id| id.to_string()));

        match first {
            Some(id) if self.has_country(&id) => {
                debug!(code, country = %id, "calling code resolved");
                self.select_country(&id).map(Some)
            }
            _ if self.config.strict_calling_codes => {
                Err(MetadataError::UnknownCallingCode { code })
            }
            first => {
                warn!(
                    code,
                    first = first.as_deref().unwrap_or("<none>"),
                    "calling code has no known country; selection unchanged"
                );
                Ok(None)
            }
        }
    }
}

/// A version marker counts unless it is `null`, `false`, `0` or an empty
/// string.
fn marker_present(marker: &Value) -> bool {
    match marker {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
