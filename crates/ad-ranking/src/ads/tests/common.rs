use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::ads::domain::{Ad, AdId, Picture, PictureId, PictureQuality, Typology};
use crate::ads::repository::{AdRepository, RepositoryError};
use crate::ads::scoring::ScoreCalculator;
use crate::ads::{ad_ranking_router, AdRankingService};

pub(super) fn instant(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 9, 30, 0)
        .single()
        .expect("valid instant")
}

pub(super) fn calculator() -> ScoreCalculator {
    ScoreCalculator::default()
}

pub(super) fn picture(id: u32, quality: PictureQuality) -> Picture {
    Picture {
        id: PictureId(id),
        url: format!("http://www.idealista.com/pictures/{id}"),
        quality,
    }
}

pub(super) fn hd(id: u32) -> Picture {
    picture(id, PictureQuality::Hd)
}

pub(super) fn standard(id: u32) -> Picture {
    picture(id, PictureQuality::Standard)
}

/// Ad with neither description nor sizes, relevant and never scored.
pub(super) fn bare_ad(id: u32, typology: Typology) -> Ad {
    Ad::new(AdId(id), typology)
}

pub(super) fn described_ad(id: u32, typology: Typology, description: &str) -> Ad {
    let mut ad = bare_ad(id, typology);
    ad.description = Some(description.to_string());
    ad
}

/// Description of exactly `count` neutral words.
pub(super) fn words(count: usize) -> String {
    vec!["casa"; count].join(" ")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) ads: Arc<Mutex<BTreeMap<AdId, Ad>>>,
    pub(super) pictures: Arc<Mutex<BTreeMap<PictureId, Picture>>>,
    pub(super) saves: Arc<Mutex<usize>>,
}

impl MemoryRepository {
    pub(super) fn with(ads: Vec<Ad>, pictures: Vec<Picture>) -> Self {
        let repository = Self::default();
        {
            let mut guard = repository.ads.lock().expect("ads mutex poisoned");
            for ad in ads {
                guard.insert(ad.id, ad);
            }
        }
        {
            let mut guard = repository.pictures.lock().expect("pictures mutex poisoned");
            for picture in pictures {
                guard.insert(picture.id, picture);
            }
        }
        repository
    }

    pub(super) fn stored(&self, id: u32) -> Ad {
        self.ads
            .lock()
            .expect("ads mutex poisoned")
            .get(&AdId(id))
            .cloned()
            .expect("ad stored")
    }

    pub(super) fn save_count(&self) -> usize {
        *self.saves.lock().expect("saves mutex poisoned")
    }

    fn filtered(&self, relevant: bool) -> Vec<Ad> {
        self.ads
            .lock()
            .expect("ads mutex poisoned")
            .values()
            .filter(|ad| ad.is_relevant() == relevant)
            .cloned()
            .collect()
    }
}

impl AdRepository for MemoryRepository {
    fn fetch(&self, id: AdId) -> Result<Option<Ad>, RepositoryError> {
        Ok(self.ads.lock().expect("ads mutex poisoned").get(&id).cloned())
    }

    fn all(&self) -> Result<Vec<Ad>, RepositoryError> {
        Ok(self
            .ads
            .lock()
            .expect("ads mutex poisoned")
            .values()
            .cloned()
            .collect())
    }

    fn irrelevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        Ok(self.filtered(false))
    }

    fn relevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        Ok(self.filtered(true))
    }

    fn pictures_for(&self, ad: &Ad) -> Result<Vec<Picture>, RepositoryError> {
        let guard = self.pictures.lock().expect("pictures mutex poisoned");
        Ok(ad
            .picture_ids
            .iter()
            .filter_map(|id| guard.get(id).cloned())
            .collect())
    }

    fn save(&self, ad: Ad) -> Result<(), RepositoryError> {
        *self.saves.lock().expect("saves mutex poisoned") += 1;
        self.ads.lock().expect("ads mutex poisoned").insert(ad.id, ad);
        Ok(())
    }
}

/// Serves reads from an inner repository but rejects every write.
pub(super) struct ReadOnlyRepository(pub(super) MemoryRepository);

impl AdRepository for ReadOnlyRepository {
    fn fetch(&self, id: AdId) -> Result<Option<Ad>, RepositoryError> {
        self.0.fetch(id)
    }

    fn all(&self) -> Result<Vec<Ad>, RepositoryError> {
        self.0.all()
    }

    fn irrelevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        self.0.irrelevant()
    }

    fn relevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        self.0.relevant()
    }

    fn pictures_for(&self, ad: &Ad) -> Result<Vec<Picture>, RepositoryError> {
        self.0.pictures_for(ad)
    }

    fn save(&self, _ad: Ad) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }
}

pub(super) struct UnavailableRepository;

impl AdRepository for UnavailableRepository {
    fn fetch(&self, _id: AdId) -> Result<Option<Ad>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<Ad>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn irrelevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn relevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pictures_for(&self, _ad: &Ad) -> Result<Vec<Picture>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn save(&self, _ad: Ad) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// A FLAT scoring 35: one HD picture, a short description with two keywords, no house size.
pub(super) fn borderline_flat() -> (Ad, Vec<Picture>) {
    let mut ad = described_ad(10, Typology::Flat, "Piso luminoso y reformado");
    ad.picture_ids = vec![PictureId(1)];
    (ad, vec![hd(1)])
}

pub(super) fn build_service(
    ads: Vec<Ad>,
    pictures: Vec<Picture>,
) -> (AdRankingService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::with(ads, pictures));
    let service = AdRankingService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_service(service: AdRankingService<MemoryRepository>) -> axum::Router {
    ad_ranking_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
