use super::domain::{Ad, AdId, Picture};

/// Storage abstraction so the service can be exercised without a real backend.
///
/// Implementations own read-modify-write atomicity; the service only ever reads a
/// snapshot and writes back a whole record.
pub trait AdRepository: Send + Sync {
    fn fetch(&self, id: AdId) -> Result<Option<Ad>, RepositoryError>;
    fn all(&self) -> Result<Vec<Ad>, RepositoryError>;
    /// Ads currently flagged with an `irrelevant_since` timestamp.
    fn irrelevant(&self) -> Result<Vec<Ad>, RepositoryError>;
    fn relevant(&self) -> Result<Vec<Ad>, RepositoryError>;
    /// Pictures in `ad.picture_ids` order; unknown ids are skipped.
    fn pictures_for(&self, ad: &Ad) -> Result<Vec<Picture>, RepositoryError>;
    fn save(&self, ad: Ad) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("ad {0} not found")]
    NotFound(AdId),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
