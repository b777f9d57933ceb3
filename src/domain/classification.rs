//! Closed classifications of a tour: how hard it is and where it runs.
//!
//! Both enums are stored as text columns. `Difficulty` is stored by name,
//! `Region` by its human-readable label.

use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level of effort a tour requires.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Difficulty {
    #[sea_orm(string_value = "Easy")]
    Easy,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "Difficult")]
    Difficult,
    #[sea_orm(string_value = "Varies")]
    Varies,
}

impl Difficulty {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Difficult, Self::Varies];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Difficult => "Difficult",
            Self::Varies => "Varies",
        }
    }

    /// Case-insensitive lookup by name.
    #[must_use]
    pub fn find_by_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::find_by_name(s).ok_or_else(|| format!("Unknown difficulty: {s}"))
    }
}

/// Regions of California a tour can run in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Region {
    #[sea_orm(string_value = "Central Coast")]
    #[serde(rename = "Central Coast")]
    CentralCoast,
    #[sea_orm(string_value = "Southern California")]
    #[serde(rename = "Southern California")]
    SouthernCalifornia,
    #[sea_orm(string_value = "Northern California")]
    #[serde(rename = "Northern California")]
    NorthernCalifornia,
    #[sea_orm(string_value = "Varies")]
    Varies,
}

impl Region {
    pub const ALL: [Self; 4] = [
        Self::CentralCoast,
        Self::SouthernCalifornia,
        Self::NorthernCalifornia,
        Self::Varies,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CentralCoast => "Central Coast",
            Self::SouthernCalifornia => "Southern California",
            Self::NorthernCalifornia => "Northern California",
            Self::Varies => "Varies",
        }
    }

    /// Case-insensitive lookup by label.
    ///
    /// Underscores are read as spaces, so the older `Central_coast` spelling
    /// resolves to the same region as `Central Coast`.
    #[must_use]
    pub fn find_by_label(label: &str) -> Option<Self> {
        let normalized = label.trim().replace('_', " ");
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(&normalized))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::find_by_label(s).ok_or_else(|| format!("Unknown region: {s}"))
    }
}
