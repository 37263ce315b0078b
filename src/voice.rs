use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Gender of a synthesized voice, as reported by speech backend.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceGender {
    /// Backend did not specify voice gender.
    Unspecified,
    /// Male voice.
    Male,
    /// Female voice.
    Female,
    /// Gender-neutral voice.
    Neutral,
}

impl fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VoiceGender::Unspecified => "UNSPECIFIED",
            VoiceGender::Male => "MALE",
            VoiceGender::Female => "FEMALE",
            VoiceGender::Neutral => "NEUTRAL",
        })
    }
}

/// Single voice, reported by speech backend.
///
/// Unlike backend-specific voice structs, [`VoiceRecord`] contains only plain
/// serializable values, so it can be freely stored and cached.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VoiceRecord {
    /// Unique voice identifier, required for speech synthesis.
    pub name: String,

    /// Locales, that this voice supports (`en-US`, `fr-FR`, etc.)
    pub language_codes: Vec<String>,

    /// Voice gender, required by some backends along with voice name.
    pub gender: VoiceGender,

    /// Natural sample rate of this voice. Informational only.
    pub sample_rate_hz: u32,
}

impl VoiceRecord {
    /// Check if voice supports provided locale.
    pub fn supports(&self, language: &str) -> bool {
        self.language_codes.iter().any(|code| code == language)
    }
}

/// Immutable list of voices, obtained from a single backend fetch.
///
/// Voice names are unique inside of a catalog. Catalog is serialized as a plain list,
/// but can only be built from a list of voices, that is de-duplicated on the way in.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct VoiceCatalog {
    voices: Vec<VoiceRecord>,
}

impl VoiceCatalog {
    /// Get all voices in backend order.
    pub fn voices(&self) -> &[VoiceRecord] {
        &self.voices
    }

    /// Number of voices in catalog.
    pub fn len(&self) -> usize {
        self.voices.len()
    }

    /// Check if backend reported no voices.
    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

impl From<Vec<VoiceRecord>> for VoiceCatalog {
    /// Build a catalog, keeping only the first voice for each name.
    fn from(voices: Vec<VoiceRecord>) -> Self {
        let mut seen = HashSet::with_capacity(voices.len());

        let voices = voices
            .into_iter()
            .filter(|voice| {
                let unique = seen.insert(voice.name.clone());

                if !unique {
                    warn!(name = %voice.name, "Backend reported duplicate voice name, skipping");
                }

                unique
            })
            .collect();

        Self { voices }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::{from_str, to_string};
    use tracing_test::traced_test;

    use super::{VoiceCatalog, VoiceGender, VoiceRecord};

    pub(crate) fn voice(name: &str, languages: &[&str], gender: VoiceGender, rate: u32) -> VoiceRecord {
        VoiceRecord {
            name: String::from(name),
            language_codes: languages.iter().map(|l| String::from(*l)).collect(),
            gender,
            sample_rate_hz: rate,
        }
    }

    /// Two voice catalog, used across tests.
    pub(crate) fn test_catalog() -> VoiceCatalog {
        VoiceCatalog::from(vec![
            voice("en-A", &["en-US"], VoiceGender::Female, 24000),
            voice("fr-B", &["fr-FR"], VoiceGender::Male, 22050),
        ])
    }

    #[test]
    fn gender_serializes_as_backend_name() {
        assert_eq!(to_string(&VoiceGender::Female).unwrap(), r#""FEMALE""#);
        assert_eq!(
            from_str::<VoiceGender>(r#""UNSPECIFIED""#).unwrap(),
            VoiceGender::Unspecified
        );
        assert_eq!(VoiceGender::Neutral.to_string(), "NEUTRAL");
    }

    #[test]
    fn catalog_is_stored_as_plain_list() {
        let json = to_string(&test_catalog()).unwrap();

        assert!(json.starts_with('['));
        assert_eq!(
            VoiceCatalog::from(from_str::<Vec<VoiceRecord>>(&json).unwrap()),
            test_catalog()
        );
    }

    #[test]
    #[traced_test]
    fn catalog_keeps_first_duplicate() {
        let catalog = VoiceCatalog::from(vec![
            voice("en-A", &["en-US"], VoiceGender::Female, 24000),
            voice("en-A", &["en-GB"], VoiceGender::Male, 16000),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.voices()[0].language_codes, vec!["en-US"]);
        assert!(logs_contain("Backend reported duplicate voice name"));
    }

    #[test]
    fn supports_any_listed_locale() {
        let voice = voice("multi", &["en-US", "en-GB"], VoiceGender::Neutral, 24000);

        assert!(voice.supports("en-GB"));
        assert!(!voice.supports("en"));
    }
}
