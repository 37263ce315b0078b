use std::{io::Error as IoError, path::Path};

use tokio::fs::write;
use tracing::{info, instrument};

use crate::voice::{VoiceGender, VoiceRecord};

/// Encoding of synthesized audio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioEncoding {
    /// MPEG Audio Layer III.
    Mp3,
}

impl AudioEncoding {
    /// MIME type of encoded audio.
    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "audio/mpeg",
        }
    }
}

/// Generic speech synthesis request, containing desirable text and voice parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeechSynthesisRequest {
    /// Text to synthesize.
    pub text: String,

    /// Locale, that was selected by user.
    pub language_code: String,

    /// Unique voice name from voice catalog.
    pub voice_name: String,

    pub gender: VoiceGender,

    pub encoding: AudioEncoding,
}

/// Package text and selected voice into a [`SpeechSynthesisRequest`].
///
/// Text is passed as-is, leaving length validation to speech backend.
pub fn build_request(text: &str, language: &str, voice: &VoiceRecord) -> SpeechSynthesisRequest {
    SpeechSynthesisRequest {
        text: String::from(text),
        language_code: String::from(language),
        voice_name: voice.name.clone(),
        gender: voice.gender,
        encoding: AudioEncoding::Mp3,
    }
}

/// Result of speech synthesis. Contains synthesized audio.
///
/// [`SpeechSynthesisResponse`] does not validate audio in any way,
/// so checking provided data validity is up to user of this struct.
#[derive(Debug)]
pub struct SpeechSynthesisResponse {
    /// Encoding of audio bytes.
    pub encoding: AudioEncoding,

    /// Result of speech synthesis process.
    pub audio: Vec<u8>,
}

impl SpeechSynthesisResponse {
    /// Write synthesized audio to provided file, replacing it if it exists.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()), err)]
    pub async fn save<P>(&self, path: P) -> Result<(), IoError>
    where
        P: AsRef<Path>,
    {
        write(path.as_ref(), &self.audio).await?;

        info!(bytes = self.audio.len(), mime = self.encoding.mime_type(), "Saved synthesized audio");

        Ok(())
    }
}
