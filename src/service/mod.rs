use std::error::Error;

use crate::{
    synthesis::{SpeechSynthesisRequest, SpeechSynthesisResponse},
    voice::VoiceRecord,
};

/// FromConfig trait.
pub mod from_config;

/// A generic speech backend definition.
///
/// In terms of this application, speech backend is anything that is able to list its voices
/// and synthesize text with one of them. Both calls block the current action until backend responds.
pub trait SpeechBackend {
    /// An error, that may happen during any backend call.
    type Error: Error + Send + Sync + 'static;

    /// Fetch all available voices, converted to [`VoiceRecord`].
    async fn list_voices(&mut self) -> Result<Vec<VoiceRecord>, Self::Error>;

    /// Synthesize speech for provided request.
    async fn synthesize(
        &mut self,
        request: SpeechSynthesisRequest,
    ) -> Result<SpeechSynthesisResponse, Self::Error>;
}
