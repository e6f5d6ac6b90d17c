use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use super::domain::{Ad, AdId, Picture};
use super::listing::{PublicAd, QualityAd};
use super::repository::{AdRepository, RepositoryError};
use super::scoring::{RelevanceTransition, ScoreCalculator, ScoreOutcome, ScoringRules};

/// Service composing the ad repository with the score calculator.
pub struct AdRankingService<R> {
    repository: Arc<R>,
    calculator: ScoreCalculator,
}

impl<R> AdRankingService<R>
where
    R: AdRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_rules(repository, ScoringRules::standard())
    }

    pub fn with_rules(repository: Arc<R>, rules: ScoringRules) -> Self {
        Self {
            repository,
            calculator: ScoreCalculator::new(rules),
        }
    }

    pub fn calculate_score(&self, id: AdId) -> Result<ScoreOutcome, AdServiceError> {
        self.calculate_score_at(id, Utc::now())
    }

    /// Recompute and persist the score of one ad, stamping `now` if it becomes irrelevant.
    pub fn calculate_score_at(
        &self,
        id: AdId,
        now: DateTime<Utc>,
    ) -> Result<ScoreOutcome, AdServiceError> {
        let Some(ad) = self.repository.fetch(id)? else {
            warn!(ad_id = %id, "score requested for unknown ad");
            return Err(AdServiceError::NotFound(id));
        };

        self.rescore(&ad, now)
    }

    /// Recompute every stored ad, one at a time.
    pub fn calculate_all_scores_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScoreOutcome>, AdServiceError> {
        let ads = self.repository.all()?;
        ads.iter().map(|ad| self.rescore(ad, now)).collect()
    }

    pub fn quality_listing(&self) -> Result<Vec<QualityAd>, AdServiceError> {
        let ads = self.repository.irrelevant()?;
        self.project(ads, QualityAd::project)
    }

    pub fn public_listing(&self) -> Result<Vec<PublicAd>, AdServiceError> {
        let ads = self.repository.relevant()?;
        self.project(ads, PublicAd::project)
    }

    fn rescore(&self, ad: &Ad, now: DateTime<Utc>) -> Result<ScoreOutcome, AdServiceError> {
        let pictures = self.repository.pictures_for(ad)?;
        let outcome = self.calculator.score(ad, &pictures, now);

        if let Err(err) = self.repository.save(outcome.applied_to(ad)) {
            error!(ad_id = %ad.id, error = %err, "failed to persist recomputed score");
            return Err(AdServiceError::Persistence(err));
        }

        match outcome.transition {
            RelevanceTransition::Unchanged => {
                info!(ad_id = %ad.id, score = outcome.score, "ad score recomputed")
            }
            transition => info!(
                ad_id = %ad.id,
                score = outcome.score,
                transition = transition.label(),
                "ad relevance changed"
            ),
        }

        Ok(outcome)
    }

    fn project<T>(
        &self,
        ads: Vec<Ad>,
        projection: fn(&Ad, &[Picture]) -> T,
    ) -> Result<Vec<T>, AdServiceError> {
        ads.iter()
            .map(|ad| -> Result<T, AdServiceError> {
                let pictures = self.repository.pictures_for(ad)?;
                Ok(projection(ad, &pictures))
            })
            .collect()
    }
}

/// Error raised by the ranking service.
#[derive(Debug, thiserror::Error)]
pub enum AdServiceError {
    #[error("ad {0} not found")]
    NotFound(AdId),
    #[error("could not persist recomputed score: {0}")]
    Persistence(RepositoryError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
