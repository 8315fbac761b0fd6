//! Foundation types for dialplan metadata.
//!
//! This crate holds the pieces of the metadata schema that do not depend on
//! any particular table: how the two physical layouts place their fields,
//! the closed set of number categories, and the inheritance rule shared by
//! format and type records. `dialplan-metadata` builds its views on top.
//!
//! # Key Types
//!
//! - [`LayoutVersion`] — V1 or V2 record layout, detected once per table
//! - [`Field`] / [`FieldOffsets`] — country-record fields and their positions
//! - [`FormatField`] — format-record fields
//! - [`NumberCategory`] — the ten number categories and their type-table slots
//! - [`resolve`] — single-level fallback from a record to its owner

pub mod category;
pub mod error;
pub mod inherit;
pub mod layout;

pub use category::NumberCategory;
pub use error::TypeError;
pub use inherit::resolve;
pub use layout::{Field, FieldOffsets, FormatField, LayoutVersion};
