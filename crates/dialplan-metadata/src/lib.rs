//! Layout-aware views over national numbering-plan metadata.
//!
//! A metadata table holds one positional record per country plus a mapping
//! from calling codes to the countries that share them. Tables come in two
//! physical layouts (see [`LayoutVersion`]); this crate resolves field
//! positions for whichever layout it is given so callers read a single
//! logical schema.
//!
//! # Architecture
//!
//! - [`MetadataStore`] owns the table and the optional "selected" country.
//! - [`CountryView`] reads one country record.
//! - [`FormatView`] reads one formatting rule and decides whether the
//!   national prefix is mandatory when formatting.
//! - [`TypeView`] reads one number-category record.
//!
//! Views borrow the store and are `Copy`. Fields a record omits are absent,
//! not errors; format and type records fall back to their country where the
//! schema says so.
//!
//! # Example
//!
//! ```
//! use dialplan_metadata::{MetadataStore, NumberCategory};
//! use serde_json::json;
//!
//! let mut store = MetadataStore::new(json!({
//!     "version": "1.0.18",
//!     "country_calling_codes": { "44": ["GB", "GG"] },
//!     "countries": {
//!         "GB": ["44", "\\d{10}", [10], [["(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3"]],
//!                "0", "0$1", null, null, null, null, [null, ["7\\d{9}"]]]
//!     }
//! }))
//! .unwrap();
//!
//! let gb = store.select_country_by_calling_code(44).unwrap().unwrap();
//! assert_eq!(gb.id(), "GB");
//!
//! let format = gb.formats().next().unwrap();
//! assert!(format.national_prefix_is_mandatory_when_formatting());
//!
//! let mobile = gb.number_type(NumberCategory::Mobile).unwrap();
//! assert_eq!(mobile.possible_lengths(), Some(vec![10]));
//! ```
//!
//! # Modules
//!
//! - [`error`] — [`MetadataError`] and the [`MetadataResult`] alias
//! - [`config`] — [`StoreConfig`]
//! - [`store`], [`country`], [`format`], [`number_type`] — the views

pub mod config;
pub mod country;
pub mod error;
pub mod format;
pub mod number_type;
pub mod store;

mod record;

#[cfg(test)]
mod fixtures;

pub use config::StoreConfig;
pub use country::CountryView;
pub use error::{MetadataError, MetadataResult};
pub use format::{FormatView, Formats};
pub use number_type::TypeView;
pub use store::MetadataStore;

pub use dialplan_types::{LayoutVersion, NumberCategory};
