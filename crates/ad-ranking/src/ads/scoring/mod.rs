mod config;
mod relevance;
mod rules;

pub use config::{KeywordBonus, ScoringRules, WordCountTier, RELEVANCE_THRESHOLD};
pub use relevance::RelevanceTransition;
pub use rules::count_words;

use super::domain::{Ad, AdId, Picture};
use chrono::{DateTime, Utc};
use relevance::next_irrelevant_since;
use serde::{Deserialize, Serialize};

/// Stateless calculator that applies the rule table to an ad snapshot.
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    rules: ScoringRules,
}

impl ScoreCalculator {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Scores `ad` with its `pictures`, using `now` if the ad drops below the threshold.
    pub fn score(&self, ad: &Ad, pictures: &[Picture], now: DateTime<Utc>) -> ScoreOutcome {
        let (components, score) = rules::score_ad(ad, pictures, &self.rules);
        let (irrelevant_since, transition) = next_irrelevant_since(
            score,
            self.rules.relevance_threshold,
            ad.irrelevant_since,
            now,
        );

        ScoreOutcome {
            ad_id: ad.id,
            score,
            irrelevant_since,
            transition,
            components,
        }
    }
}

/// Which rule produced a score contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    Picture,
    MissingPictures,
    Description,
    DescriptionLength,
    Keyword,
    Completion,
}

/// Discrete contribution to a score, kept for audits and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoreRule,
    pub points: i32,
    pub notes: String,
}

/// Result of one calculation. Components always sum to `score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub ad_id: AdId,
    pub score: i32,
    pub irrelevant_since: Option<DateTime<Utc>>,
    pub transition: RelevanceTransition,
    pub components: Vec<ScoreComponent>,
}

impl ScoreOutcome {
    pub fn is_relevant(&self) -> bool {
        self.irrelevant_since.is_none()
    }

    pub fn points_for(&self, rule: ScoreRule) -> i32 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .sum()
    }

    /// Copy of `ad` carrying the computed score and relevance timestamp.
    pub fn applied_to(&self, ad: &Ad) -> Ad {
        Ad {
            score: Some(self.score),
            irrelevant_since: self.irrelevant_since,
            ..ad.clone()
        }
    }
}
