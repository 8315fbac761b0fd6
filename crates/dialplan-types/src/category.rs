use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Service category of a phone number.
///
/// Each category sits at a fixed position in a country's type table. The set
/// is closed: adding a category means adding a variant and one arm in
/// [`NumberCategory::slot`] and [`NumberCategory::name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberCategory {
    FixedLine,
    Mobile,
    TollFree,
    PremiumRate,
    PersonalNumber,
    Voicemail,
    Uan,
    Pager,
    Voip,
    SharedCost,
}

impl NumberCategory {
    /// Every category, in type-table order.
    pub const ALL: [NumberCategory; 10] = [
        Self::FixedLine,
        Self::Mobile,
        Self::TollFree,
        Self::PremiumRate,
        Self::PersonalNumber,
        Self::Voicemail,
        Self::Uan,
        Self::Pager,
        Self::Voip,
        Self::SharedCost,
    ];

    /// Position of this category inside a country's type table.
    pub fn slot(self) -> usize {
        match self {
            Self::FixedLine => 0,
            Self::Mobile => 1,
            Self::TollFree => 2,
            Self::PremiumRate => 3,
            Self::PersonalNumber => 4,
            Self::Voicemail => 5,
            Self::Uan => 6,
            Self::Pager => 7,
            Self::Voip => 8,
            Self::SharedCost => 9,
        }
    }

    /// Canonical upper-snake name, e.g. `"FIXED_LINE"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::FixedLine => "FIXED_LINE",
            Self::Mobile => "MOBILE",
            Self::TollFree => "TOLL_FREE",
            Self::PremiumRate => "PREMIUM_RATE",
            Self::PersonalNumber => "PERSONAL_NUMBER",
            Self::Voicemail => "VOICEMAIL",
            Self::Uan => "UAN",
            Self::Pager => "PAGER",
            Self::Voip => "VOIP",
            Self::SharedCost => "SHARED_COST",
        }
    }

    /// Look up a category by its canonical name.
    ///
    /// Unknown names yield `None`; callers in the lookup path treat that the
    /// same as a category the country does not have.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for NumberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumberCategory {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TypeError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_table_order() {
        for (i, c) in NumberCategory::ALL.iter().enumerate() {
            assert_eq!(c.slot(), i);
        }
    }

    #[test]
    fn names_round_trip() {
        for c in NumberCategory::ALL {
            assert_eq!(NumberCategory::from_name(c.name()), Some(c));
            assert_eq!(c.name().parse::<NumberCategory>().unwrap(), c);
        }
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert_eq!(NumberCategory::from_name("SATELLITE"), None);
        assert_eq!(NumberCategory::from_name("mobile"), None);
        assert_eq!(NumberCategory::from_name(""), None);
    }

    #[test]
    fn from_str_reports_unknown() {
        let err = "SATELLITE".parse::<NumberCategory>().unwrap_err();
        assert_eq!(err, TypeError::UnknownCategory("SATELLITE".into()));
    }

    #[test]
    fn serde_uses_canonical_names() {
        for c in NumberCategory::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.name()));
            let parsed: NumberCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, c);
        }
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(format!("{}", NumberCategory::TollFree), "TOLL_FREE");
        assert_eq!(NumberCategory::Voip.to_string(), "VOIP");
    }
}
