use serde::{Deserialize, Serialize};

use dialplan_types::LayoutVersion;

/// Options controlling how a [`MetadataStore`](crate::MetadataStore) reads
/// its table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Force a layout instead of detecting it from the version marker.
    pub layout: Option<LayoutVersion>,
    /// When `true`, choosing a country by calling code fails with
    /// `UnknownCallingCode` if the code is unlisted or its first country is
    /// not in the table. When `false` the selection is left unchanged, which
    /// is what reduced tables rely on.
    pub strict_calling_codes: bool,
}

impl StoreConfig {
    /// Configuration that rejects unresolvable calling codes.
    pub fn strict() -> Self {
        Self {
            strict_calling_codes: true,
            ..Default::default()
        }
    }
}
