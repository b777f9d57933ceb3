use crate::domain::{Difficulty, Region, TourId};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourPackage {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    pub id: TourId,
    pub title: String,
    pub description: String,
    pub blurb: String,
    pub price: i32,
    pub duration: String,
    pub bullets: String,
    pub keywords: String,
    pub package_code: String,
    pub difficulty: Difficulty,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTour {
    pub title: String,
    pub description: String,
    pub blurb: String,
    pub price: i32,
    pub duration: String,
    pub bullets: String,
    pub keywords: String,
    pub package_code: String,
    pub difficulty: Difficulty,
    pub region: Region,
}

/// Optional criteria for narrowing a tour listing. Unset fields match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourFilter {
    pub package_code: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub region: Option<Region>,
    /// Inclusive upper bound.
    pub max_price: Option<i32>,
    /// Substring of the keywords column.
    pub keyword: Option<String>,
}

/// One entry of a tour catalogue file.
///
/// The catalogue names the package by its display name (`packageType`) and
/// writes prices either as numbers or as quoted strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourImportRecord {
    pub package_type: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: i32,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub bullets: String,
    #[serde(default)]
    pub keywords: String,
    pub difficulty: String,
    pub region: String,
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(i32),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid price: {s}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_record_accepts_string_price() {
        let json = r#"{
            "packageType": "Backpack Cal",
            "title": "Big Sur Retreat",
            "description": "desc",
            "blurb": "blurb",
            "price": "750",
            "length": "3 days",
            "bullets": "Accommodations at the historic Big Sur River Inn",
            "keywords": "Big Sur",
            "difficulty": "Medium",
            "region": "Central Coast"
        }"#;

        let record: TourImportRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.price, 750);
        assert_eq!(record.package_type, "Backpack Cal");
        assert_eq!(record.length, "3 days");
    }

    #[test]
    fn import_record_accepts_numeric_price() {
        let json = r#"{
            "packageType": "Kids California",
            "title": "Day Trip",
            "price": 120,
            "difficulty": "Easy",
            "region": "Varies"
        }"#;

        let record: TourImportRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.price, 120);
        assert!(record.description.is_empty());
    }

    #[test]
    fn import_record_rejects_bad_price() {
        let json = r#"{
            "packageType": "Kids California",
            "title": "Day Trip",
            "price": "cheap",
            "difficulty": "Easy",
            "region": "Varies"
        }"#;

        assert!(serde_json::from_str::<TourImportRecord>(json).is_err());
    }
}
