use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored ads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdId(pub u32);

impl fmt::Display for AdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier wrapper for pictures attached to ads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PictureId(pub u32);

/// Property category; selects which description and completion rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Typology {
    Flat,
    Chalet,
    Garage,
}

impl Typology {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Chalet => "Chalet",
            Self::Garage => "Garage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PictureQuality {
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "STANDARD", alias = "SD")]
    Standard,
}

/// Immutable picture owned by the ad that references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub id: PictureId,
    pub url: String,
    pub quality: PictureQuality,
}

/// Stored listing record. Only `score` and `irrelevant_since` ever change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: AdId,
    pub typology: Typology,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "pictures")]
    pub picture_ids: Vec<PictureId>,
    #[serde(default)]
    pub house_size: Option<u32>,
    #[serde(default)]
    pub garden_size: Option<u32>,
    /// `None` until the ad is scored for the first time.
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub irrelevant_since: Option<DateTime<Utc>>,
}

impl Ad {
    pub fn new(id: AdId, typology: Typology) -> Self {
        Self {
            id,
            typology,
            description: None,
            picture_ids: Vec::new(),
            house_size: None,
            garden_size: None,
            score: None,
            irrelevant_since: None,
        }
    }

    /// Trimmed description, or `None` when it is absent or blank.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn is_relevant(&self) -> bool {
        self.irrelevant_since.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_descriptions_count_as_missing() {
        let mut ad = Ad::new(AdId(1), Typology::Flat);
        assert_eq!(ad.description_text(), None);

        ad.description = Some("   \t ".to_string());
        assert_eq!(ad.description_text(), None);

        ad.description = Some("  Ático luminoso ".to_string());
        assert_eq!(ad.description_text(), Some("Ático luminoso"));
    }

    #[test]
    fn deserializes_fixture_shape() {
        let ad: Ad = serde_json::from_value(json!({
            "id": 8,
            "typology": "CHALET",
            "description": "Maravilloso chalet",
            "pictures": [1, 7],
            "houseSize": 300
        }))
        .expect("fixture ad parses");

        assert_eq!(ad.typology, Typology::Chalet);
        assert_eq!(ad.picture_ids, vec![PictureId(1), PictureId(7)]);
        assert_eq!(ad.house_size, Some(300));
        assert_eq!(ad.garden_size, None);
        assert!(ad.is_relevant());

        let picture: Picture = serde_json::from_value(json!({
            "id": 1,
            "url": "http://www.idealista.com/pictures/1",
            "quality": "SD"
        }))
        .expect("legacy quality parses");
        assert_eq!(picture.quality, PictureQuality::Standard);
    }
}
