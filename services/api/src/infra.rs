use ad_ranking::ads::{Ad, AdId, AdRepository, Picture, PictureId, RepositoryError};
use ad_ranking::config::StorageConfig;
use ad_ranking::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

const CHALLENGE_SEED: &str = include_str!("../fixtures/ads.json");

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Initial ads and pictures for the in-memory store.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SeedData {
    pub(crate) ads: Vec<Ad>,
    pub(crate) pictures: Vec<Picture>,
}

impl SeedData {
    pub(crate) fn challenge() -> Result<Self, AppError> {
        Ok(serde_json::from_str(CHALLENGE_SEED)?)
    }

    pub(crate) fn load(config: &StorageConfig) -> Result<Self, AppError> {
        match &config.seed_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                let seed: Self = serde_json::from_str(&raw)?;
                info!(path = %path.display(), ads = seed.ads.len(), "loaded ad seed file");
                Ok(seed)
            }
            None => Self::challenge(),
        }
    }
}

/// Process-local ad store; ads are kept ordered by id.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAdRepository {
    ads: Arc<Mutex<BTreeMap<AdId, Ad>>>,
    pictures: Arc<HashMap<PictureId, Picture>>,
}

impl InMemoryAdRepository {
    pub(crate) fn from_seed(seed: SeedData) -> Self {
        let ads = seed.ads.into_iter().map(|ad| (ad.id, ad)).collect();
        let pictures = seed
            .pictures
            .into_iter()
            .map(|picture| (picture.id, picture))
            .collect();

        Self {
            ads: Arc::new(Mutex::new(ads)),
            pictures: Arc::new(pictures),
        }
    }

    fn select(&self, relevant: bool) -> Result<Vec<Ad>, RepositoryError> {
        let guard = self.ads.lock().expect("ad store mutex poisoned");
        Ok(guard
            .values()
            .filter(|ad| ad.is_relevant() == relevant)
            .cloned()
            .collect())
    }
}

impl AdRepository for InMemoryAdRepository {
    fn fetch(&self, id: AdId) -> Result<Option<Ad>, RepositoryError> {
        let guard = self.ads.lock().expect("ad store mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn all(&self) -> Result<Vec<Ad>, RepositoryError> {
        let guard = self.ads.lock().expect("ad store mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn irrelevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        self.select(false)
    }

    fn relevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        self.select(true)
    }

    fn pictures_for(&self, ad: &Ad) -> Result<Vec<Picture>, RepositoryError> {
        Ok(ad
            .picture_ids
            .iter()
            .filter_map(|id| self.pictures.get(id).cloned())
            .collect())
    }

    fn save(&self, ad: Ad) -> Result<(), RepositoryError> {
        let mut guard = self.ads.lock().expect("ad store mutex poisoned");
        match guard.get_mut(&ad.id) {
            Some(stored) => {
                *stored = ad;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(ad.id)),
        }
    }
}
