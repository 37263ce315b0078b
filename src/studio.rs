use std::{collections::BTreeSet, path::Path, sync::Arc};

use tracing::{info, instrument};

use crate::{
    catalog::VoiceCatalogCache,
    error::StudioError,
    selection::{filter_by_language, list_languages},
    service::SpeechBackend,
    synthesis::{build_request, SpeechSynthesisResponse},
    voice::{VoiceCatalog, VoiceRecord},
};

/// Single user session.
///
/// Owns speech backend, injected voice catalog cache, and the most recently synthesized audio.
pub struct Studio<B> {
    backend: B,
    cache: VoiceCatalogCache,
    last_audio: Option<SpeechSynthesisResponse>,
}

impl<B> Studio<B>
where
    B: SpeechBackend,
{
    pub fn new(backend: B, cache: VoiceCatalogCache) -> Self {
        Self {
            backend,
            cache,
            last_audio: None,
        }
    }

    /// Get voice catalog, fetching it only if cached one is missing or expired.
    pub async fn catalog(&mut self) -> Result<Arc<VoiceCatalog>, StudioError> {
        self.cache.get_or_fetch(&mut self.backend).await
    }

    /// Force next catalog access to hit the backend.
    pub fn refresh(&mut self) {
        info!("Voice catalog invalidated");
        self.cache.invalidate();
    }

    /// Get every selectable locale.
    ///
    /// Fails with [`StudioError::EmptyCatalog`] if there is nothing to select from.
    pub async fn languages(&mut self) -> Result<BTreeSet<String>, StudioError> {
        let languages = list_languages(self.catalog().await?.as_ref());

        if languages.is_empty() {
            Err(StudioError::EmptyCatalog)
        } else {
            Ok(languages)
        }
    }

    /// Get voices, that support provided locale, in catalog order.
    ///
    /// Locale, that isn't supported by any voice, is treated as a stale selection.
    pub async fn voices(&mut self, language: &str) -> Result<Vec<VoiceRecord>, StudioError> {
        let catalog = self.catalog().await?;

        if catalog.is_empty() {
            return Err(StudioError::EmptyCatalog);
        }

        let filtered: Vec<_> = filter_by_language(&catalog, language)
            .into_iter()
            .cloned()
            .collect();

        if filtered.is_empty() {
            Err(StudioError::SelectionNotFound(String::from(language)))
        } else {
            Ok(filtered)
        }
    }

    /// Synthesize text with a selected voice.
    ///
    /// Synthesized audio replaces the previous one, see [`Studio::save_last`].
    #[instrument(skip(self, text, voice), fields(voice = %voice.name), err)]
    pub async fn synthesize(
        &mut self,
        text: &str,
        language: &str,
        voice: &VoiceRecord,
    ) -> Result<&SpeechSynthesisResponse, StudioError> {
        let request = build_request(text, language, voice);

        let response = self
            .backend
            .synthesize(request)
            .await
            .map_err(StudioError::backend)?;

        info!(bytes = response.audio.len(), "Synthesized speech");

        Ok(self.last_audio.insert(response))
    }

    /// Write the most recently synthesized audio to provided file.
    ///
    /// Returns [`None`] if nothing was synthesized yet.
    pub async fn save_last<P>(&self, path: P) -> Option<Result<usize, StudioError>>
    where
        P: AsRef<Path>,
    {
        let audio = self.last_audio.as_ref()?;

        Some(
            audio
                .save(path)
                .await
                .map(|_| audio.audio.len())
                .map_err(StudioError::from),
        )
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }
}
