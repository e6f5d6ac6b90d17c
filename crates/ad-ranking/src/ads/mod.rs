//! Ad content-quality scoring, relevance bookkeeping and the listing projections built on it.

pub mod domain;
pub mod listing;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Ad, AdId, Picture, PictureId, PictureQuality, Typology};
pub use listing::{PublicAd, QualityAd};
pub use repository::{AdRepository, RepositoryError};
pub use router::ad_ranking_router;
pub use scoring::{
    RelevanceTransition, ScoreCalculator, ScoreComponent, ScoreOutcome, ScoreRule, ScoringRules,
    RELEVANCE_THRESHOLD,
};
pub use service::{AdRankingService, AdServiceError};
