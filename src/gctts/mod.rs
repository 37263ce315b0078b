use std::convert::TryFrom;

use crate::{
    google::codegen::{SsmlVoiceGender, Voice},
    voice::{VoiceGender, VoiceRecord},
};

/// GCTTS config
pub mod config;

/// Implementation of speech backend for Google Cloud Text-to-Speech.
pub mod driver;

impl From<VoiceGender> for SsmlVoiceGender {
    fn from(gender: VoiceGender) -> Self {
        match gender {
            VoiceGender::Unspecified => SsmlVoiceGender::Unspecified,
            VoiceGender::Male => SsmlVoiceGender::Male,
            VoiceGender::Female => SsmlVoiceGender::Female,
            VoiceGender::Neutral => SsmlVoiceGender::Neutral,
        }
    }
}

impl From<SsmlVoiceGender> for VoiceGender {
    fn from(gender: SsmlVoiceGender) -> Self {
        match gender {
            SsmlVoiceGender::Unspecified => VoiceGender::Unspecified,
            SsmlVoiceGender::Male => VoiceGender::Male,
            SsmlVoiceGender::Female => VoiceGender::Female,
            SsmlVoiceGender::Neutral => VoiceGender::Neutral,
        }
    }
}

impl From<Voice> for VoiceRecord {
    fn from(voice: Voice) -> Self {
        VoiceRecord {
            // Unknown enum values from newer API revisions are treated as unspecified.
            gender: SsmlVoiceGender::from_i32(voice.ssml_gender)
                .map(VoiceGender::from)
                .unwrap_or(VoiceGender::Unspecified),
            sample_rate_hz: u32::try_from(voice.natural_sample_rate_hertz).unwrap_or_default(),
            name: voice.name,
            language_codes: voice.language_codes,
        }
    }
}
