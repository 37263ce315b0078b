use std::{
    path::PathBuf,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use serde_json::{from_slice, to_vec};
use tokio::fs::{read, write};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::StudioError,
    service::SpeechBackend,
    voice::{VoiceCatalog, VoiceRecord},
};

/// Catalog, that was fetched at a known point in time.
struct CachedCatalog {
    fetched_at: SystemTime,
    catalog: Arc<VoiceCatalog>,
}

/// On-disk representation of a voice catalog.
#[derive(Serialize, Deserialize)]
struct PersistedCatalog {
    /// Fetch time in seconds since UNIX epoch.
    fetched_at: u64,
    /// Stored as a plain list, as the file may be edited or written by another version.
    voices: Vec<VoiceRecord>,
}

/// JSON file, that keeps voice catalog between process restarts.
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load previously stored catalog.
    ///
    /// Missing, unreadable or malformed files are treated as empty store.
    async fn load(&self) -> Option<CachedCatalog> {
        let bytes = match read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(path = %self.path.display(), inner = %e, "Voice catalog store is not readable");
                return None;
            }
        };

        match from_slice::<PersistedCatalog>(&bytes) {
            Ok(persisted) => Some(CachedCatalog {
                fetched_at: UNIX_EPOCH + Duration::from_secs(persisted.fetched_at),
                catalog: Arc::new(VoiceCatalog::from(persisted.voices)),
            }),
            Err(e) => {
                warn!(path = %self.path.display(), inner = %e, "Ignoring malformed voice catalog store");
                None
            }
        }
    }

    /// Replace stored catalog.
    ///
    /// Failing to persist catalog does not fail the current action.
    async fn save(&self, cached: &CachedCatalog) {
        let persisted = PersistedCatalog {
            fetched_at: cached
                .fetched_at
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
            voices: cached.catalog.voices().to_vec(),
        };

        let result = match to_vec(&persisted) {
            Ok(bytes) => write(&self.path, bytes).await,
            Err(e) => Err(e.into()),
        };

        if let Err(e) = result {
            warn!(path = %self.path.display(), inner = %e, "Unable to persist voice catalog");
        }
    }
}

/// Memoized voice catalog with time-based and manual invalidation.
///
/// Cache does not own speech backend. Instead, backend is provided on each access,
/// so the same backend can be used for speech synthesis in between.
pub struct VoiceCatalogCache {
    /// Catalog validity window. [`None`] keeps catalog for the lifetime of the cache.
    ttl: Option<Duration>,
    store: Option<CatalogStore>,
    /// Whether the store may be used to satisfy the next miss.
    ///
    /// Reset by [`VoiceCatalogCache::invalidate`].
    trust_store: bool,
    entry: Option<CachedCatalog>,
}

impl VoiceCatalogCache {
    /// Create new in-memory cache.
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            store: None,
            trust_store: true,
            entry: None,
        }
    }

    /// Keep fetched catalogs in provided store as well.
    pub fn with_store(mut self, store: CatalogStore) -> Self {
        self.store = Some(store);
        self
    }

    fn is_fresh(&self, fetched_at: SystemTime) -> bool {
        match self.ttl {
            None => true,
            // Clock going backwards makes catalog stale.
            Some(ttl) => fetched_at.elapsed().map(|age| age < ttl).unwrap_or(false),
        }
    }

    /// Get cached catalog, fetching it from backend if there is no fresh one.
    #[instrument(skip(self, backend), err)]
    pub async fn get_or_fetch<B>(&mut self, backend: &mut B) -> Result<Arc<VoiceCatalog>, StudioError>
    where
        B: SpeechBackend,
    {
        if let Some(entry) = self.entry.as_ref().filter(|e| self.is_fresh(e.fetched_at)) {
            debug!("Using cached voice catalog");
            return Ok(entry.catalog.clone());
        }

        // Catalog without expiry lives as long as the process, so stored ones are never reused.
        if self.entry.is_none() && self.trust_store && self.ttl.is_some() {
            if let Some(store) = &self.store {
                if let Some(persisted) = store.load().await {
                    if self.is_fresh(persisted.fetched_at) {
                        debug!(voices = persisted.catalog.len(), "Using stored voice catalog");

                        let catalog = persisted.catalog.clone();
                        self.entry = Some(persisted);

                        return Ok(catalog);
                    }
                }
            }
        }

        self.fetch(backend).await
    }

    /// Fetch catalog from backend, replacing the cached one.
    ///
    /// Previously cached catalog is dropped even if fetch fails.
    async fn fetch<B>(&mut self, backend: &mut B) -> Result<Arc<VoiceCatalog>, StudioError>
    where
        B: SpeechBackend,
    {
        self.entry = None;

        let voices = backend.list_voices().await.map_err(StudioError::backend)?;

        let entry = CachedCatalog {
            fetched_at: SystemTime::now(),
            catalog: Arc::new(VoiceCatalog::from(voices)),
        };

        info!(voices = entry.catalog.len(), "Fetched voice catalog");

        if let Some(store) = &self.store {
            store.save(&entry).await;
        }

        let catalog = entry.catalog.clone();
        self.entry = Some(entry);
        self.trust_store = true;

        Ok(catalog)
    }

    /// Drop cached catalog. Next access will fetch a new one from backend.
    pub fn invalidate(&mut self) {
        self.entry = None;
        self.trust_store = false;
    }
}

#[cfg(test)]
mod tests {
    use std::{
        env::temp_dir,
        fs::remove_file,
        path::PathBuf,
        time::{Duration, SystemTime, UNIX_EPOCH},
    };

    use tracing_test::traced_test;

    use super::{CatalogStore, VoiceCatalogCache};
    use crate::{
        error::StudioError,
        service::testing::FakeBackend,
        voice::tests::{test_catalog, voice},
        voice::VoiceGender,
    };

    const HOUR: Option<Duration> = Some(Duration::from_secs(60 * 60));

    fn store_path(test: &str) -> PathBuf {
        let path = temp_dir().join(format!("tts-studio-{}-{}.json", std::process::id(), test));
        remove_file(&path).ok();
        path
    }

    fn backend() -> FakeBackend {
        FakeBackend::new(test_catalog().voices().to_vec())
    }

    #[tokio::test]
    async fn fetches_once_within_ttl() {
        let mut backend = backend();
        let mut cache = VoiceCatalogCache::new(HOUR);

        let first = cache.get_or_fetch(&mut backend).await.unwrap();
        let second = cache.get_or_fetch(&mut backend).await.unwrap();

        assert_eq!(backend.list_calls, 1);
        assert_eq!(*first, test_catalog());
        assert!(std::sync::Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn never_expires_without_ttl() {
        let mut backend = backend();
        let mut cache = VoiceCatalogCache::new(None);

        for _ in 0..3 {
            cache.get_or_fetch(&mut backend).await.unwrap();
        }

        assert_eq!(backend.list_calls, 1);
    }

    #[tokio::test]
    async fn refetches_after_expiry() {
        let mut backend = backend();
        let mut cache = VoiceCatalogCache::new(Some(Duration::from_secs(0)));

        cache.get_or_fetch(&mut backend).await.unwrap();

        backend.voices.push(voice("ja-C", &["ja-JP"], VoiceGender::Neutral, 24000));

        let catalog = cache.get_or_fetch(&mut backend).await.unwrap();

        assert_eq!(backend.list_calls, 2);
        assert_eq!(catalog.len(), 3);
    }

    #[tokio::test]
    async fn refetches_after_invalidation() {
        let mut backend = backend();
        let mut cache = VoiceCatalogCache::new(HOUR);

        cache.get_or_fetch(&mut backend).await.unwrap();
        cache.invalidate();
        cache.get_or_fetch(&mut backend).await.unwrap();

        assert_eq!(backend.list_calls, 2);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let mut backend = backend();
        backend.offline = true;

        let mut cache = VoiceCatalogCache::new(HOUR);

        assert!(matches!(
            cache.get_or_fetch(&mut backend).await,
            Err(StudioError::BackendUnavailable(_))
        ));

        backend.offline = false;

        assert_eq!(*cache.get_or_fetch(&mut backend).await.unwrap(), test_catalog());
        assert_eq!(backend.list_calls, 2);
    }

    #[tokio::test]
    async fn reuses_stored_catalog() {
        let path = store_path("reuse");

        let mut backend = backend();
        VoiceCatalogCache::new(HOUR)
            .with_store(CatalogStore::new(path.clone()))
            .get_or_fetch(&mut backend)
            .await
            .unwrap();

        let mut offline = FakeBackend::default();
        offline.offline = true;

        let catalog = VoiceCatalogCache::new(HOUR)
            .with_store(CatalogStore::new(path.clone()))
            .get_or_fetch(&mut offline)
            .await
            .unwrap();

        assert_eq!(*catalog, test_catalog());
        assert_eq!(offline.list_calls, 0);

        remove_file(&path).ok();
    }

    #[tokio::test]
    async fn invalidation_skips_store() {
        let path = store_path("invalidate");

        let mut backend = backend();
        let mut cache = VoiceCatalogCache::new(HOUR).with_store(CatalogStore::new(path.clone()));

        cache.get_or_fetch(&mut backend).await.unwrap();
        cache.invalidate();
        cache.get_or_fetch(&mut backend).await.unwrap();

        assert_eq!(backend.list_calls, 2);

        remove_file(&path).ok();
    }

    #[tokio::test]
    async fn catalog_without_expiry_ignores_store() {
        let path = store_path("forever");
        std::fs::write(
            &path,
            br#"{"fetched_at":0,"voices":[{"name":"ancient","language_codes":["la"],"gender":"MALE","sample_rate_hz":8000}]}"#,
        )
        .unwrap();

        let mut backend = backend();
        let catalog = VoiceCatalogCache::new(None)
            .with_store(CatalogStore::new(path.clone()))
            .get_or_fetch(&mut backend)
            .await
            .unwrap();

        assert_eq!(*catalog, test_catalog());
        assert_eq!(backend.list_calls, 1);

        remove_file(&path).ok();
    }

    #[tokio::test]
    #[traced_test]
    async fn stored_duplicates_are_dropped() {
        let path = store_path("duplicates");
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        std::fs::write(
            &path,
            format!(
                r#"{{"fetched_at":{},"voices":[
                    {{"name":"dup","language_codes":["en-US"],"gender":"FEMALE","sample_rate_hz":24000}},
                    {{"name":"dup","language_codes":["en-GB"],"gender":"MALE","sample_rate_hz":16000}}
                ]}}"#,
                now
            ),
        )
        .unwrap();

        let mut offline = FakeBackend::default();
        offline.offline = true;

        let catalog = VoiceCatalogCache::new(HOUR)
            .with_store(CatalogStore::new(path.clone()))
            .get_or_fetch(&mut offline)
            .await
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.voices()[0].language_codes, vec!["en-US"]);
        assert_eq!(offline.list_calls, 0);
        assert!(logs_contain("Backend reported duplicate voice name"));

        remove_file(&path).ok();
    }

    #[tokio::test]
    #[traced_test]
    async fn ignores_malformed_store() {
        let path = store_path("malformed");
        std::fs::write(&path, b"{ not json").unwrap();

        let mut backend = backend();
        let catalog = VoiceCatalogCache::new(HOUR)
            .with_store(CatalogStore::new(path.clone()))
            .get_or_fetch(&mut backend)
            .await
            .unwrap();

        assert_eq!(*catalog, test_catalog());
        assert_eq!(backend.list_calls, 1);
        assert!(logs_contain("Ignoring malformed voice catalog store"));

        remove_file(&path).ok();
    }
}
