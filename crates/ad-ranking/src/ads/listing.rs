use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{Ad, AdId, Picture, Typology};

/// Full projection served to the quality team for ads below the relevance threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAd {
    pub id: AdId,
    pub typology: Typology,
    pub description: Option<String>,
    pub picture_urls: Vec<String>,
    pub house_size: Option<u32>,
    pub garden_size: Option<u32>,
    pub score: Option<i32>,
    pub irrelevant_since: Option<DateTime<Utc>>,
}

/// Public projection; score and relevance bookkeeping stay internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAd {
    pub id: AdId,
    pub typology: Typology,
    pub description: Option<String>,
    pub picture_urls: Vec<String>,
    pub house_size: Option<u32>,
    pub garden_size: Option<u32>,
}

fn picture_urls(pictures: &[Picture]) -> Vec<String> {
    pictures.iter().map(|picture| picture.url.clone()).collect()
}

impl QualityAd {
    pub fn project(ad: &Ad, pictures: &[Picture]) -> Self {
        Self {
            id: ad.id,
            typology: ad.typology,
            description: ad.description.clone(),
            picture_urls: picture_urls(pictures),
            house_size: ad.house_size,
            garden_size: ad.garden_size,
            score: ad.score,
            irrelevant_since: ad.irrelevant_since,
        }
    }
}

impl PublicAd {
    pub fn project(ad: &Ad, pictures: &[Picture]) -> Self {
        Self {
            id: ad.id,
            typology: ad.typology,
            description: ad.description.clone(),
            picture_urls: picture_urls(pictures),
            house_size: ad.house_size,
            garden_size: ad.garden_size,
        }
    }
}
