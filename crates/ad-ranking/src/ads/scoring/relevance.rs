use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Edge crossed (or not) by a recomputed score relative to the relevance threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceTransition {
    BecameIrrelevant,
    BecameRelevant,
    Unchanged,
}

impl RelevanceTransition {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BecameIrrelevant => "became irrelevant",
            Self::BecameRelevant => "became relevant",
            Self::Unchanged => "unchanged",
        }
    }
}

/// Resolves the next `irrelevant_since` value.
///
/// The timestamp is only stamped on the relevant -> irrelevant edge, so an ad that stays below
/// the threshold keeps the instant it first dropped.
pub(crate) fn next_irrelevant_since(
    score: i32,
    threshold: i32,
    current: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> (Option<DateTime<Utc>>, RelevanceTransition) {
    match (score < threshold, current) {
        (true, None) => (Some(now), RelevanceTransition::BecameIrrelevant),
        (false, Some(_)) => (None, RelevanceTransition::BecameRelevant),
        (_, current) => (current, RelevanceTransition::Unchanged),
    }
}
