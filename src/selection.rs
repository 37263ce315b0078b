use std::collections::BTreeSet;

use crate::{
    error::StudioError,
    voice::{VoiceCatalog, VoiceRecord},
};

/// Collect every locale supported by catalog voices, in ascending order.
///
/// Empty catalog produces an empty set.
pub fn list_languages(catalog: &VoiceCatalog) -> BTreeSet<String> {
    catalog
        .voices()
        .iter()
        .flat_map(|voice| voice.language_codes.iter().cloned())
        .collect()
}

/// Get all voices, that support provided locale, preserving catalog order.
pub fn filter_by_language<'c>(catalog: &'c VoiceCatalog, language: &str) -> Vec<&'c VoiceRecord> {
    catalog
        .voices()
        .iter()
        .filter(|voice| voice.supports(language))
        .collect()
}

/// Human-readable voice label, in `<name> (<gender>)` form.
pub fn voice_label(voice: &VoiceRecord) -> String {
    format!("{} ({})", voice.name, voice.gender)
}

/// Map a label, built with [`voice_label`], back to the voice it was built from.
pub fn resolve_selection<'v>(
    filtered: &[&'v VoiceRecord],
    label: &str,
) -> Result<&'v VoiceRecord, StudioError> {
    filtered
        .iter()
        .copied()
        .find(|voice| voice_label(voice) == label)
        .ok_or_else(|| StudioError::SelectionNotFound(String::from(label)))
}

/// Find a voice by its unique name.
pub fn resolve_by_name<'v>(
    filtered: &[&'v VoiceRecord],
    name: &str,
) -> Result<&'v VoiceRecord, StudioError> {
    filtered
        .iter()
        .copied()
        .find(|voice| voice.name == name)
        .ok_or_else(|| StudioError::SelectionNotFound(String::from(name)))
}

/// Resolve user input, that contains either voice name or voice label.
///
/// Names are preferred, as they are stable between catalog fetches.
pub fn resolve_voice<'v>(
    filtered: &[&'v VoiceRecord],
    input: &str,
) -> Result<&'v VoiceRecord, StudioError> {
    let input = input.trim();

    resolve_by_name(filtered, input).or_else(|_| resolve_selection(filtered, input))
}

#[cfg(test)]
mod tests {
    use super::{
        filter_by_language, list_languages, resolve_by_name, resolve_selection, resolve_voice,
        voice_label,
    };
    use crate::{
        error::StudioError,
        voice::{
            tests::{test_catalog, voice},
            VoiceCatalog, VoiceGender,
        },
    };

    fn mixed_catalog() -> VoiceCatalog {
        VoiceCatalog::from(vec![
            voice("fr-B", &["fr-FR"], VoiceGender::Male, 22050),
            voice("en-A", &["en-US", "en-GB"], VoiceGender::Female, 24000),
            voice("en-C", &["en-US"], VoiceGender::Neutral, 24000),
            voice("de-D", &["de-DE", "en-US"], VoiceGender::Unspecified, 16000),
        ])
    }

    #[test]
    fn languages_are_sorted_and_unique() {
        let languages: Vec<_> = list_languages(&mixed_catalog()).into_iter().collect();

        assert_eq!(languages, vec!["de-DE", "en-GB", "en-US", "fr-FR"]);
    }

    #[test]
    fn empty_catalog_has_no_languages() {
        assert!(list_languages(&VoiceCatalog::default()).is_empty());
    }

    #[test]
    fn filtered_voices_support_language() {
        let catalog = mixed_catalog();

        for language in list_languages(&catalog) {
            let filtered = filter_by_language(&catalog, &language);

            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|voice| voice.supports(&language)));
        }
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let catalog = mixed_catalog();

        let names: Vec<_> = filter_by_language(&catalog, "en-US")
            .into_iter()
            .map(|voice| voice.name.as_str())
            .collect();

        assert_eq!(names, vec!["en-A", "en-C", "de-D"]);
        assert!(filter_by_language(&catalog, "ja-JP").is_empty());
    }

    #[test]
    fn labels_round_trip() {
        let catalog = mixed_catalog();
        let filtered = filter_by_language(&catalog, "en-US");

        for voice in &filtered {
            assert_eq!(resolve_selection(&filtered, &voice_label(voice)).unwrap(), *voice);
        }
    }

    #[test]
    fn two_voice_scenario() {
        let catalog = test_catalog();

        let languages: Vec<_> = list_languages(&catalog).into_iter().collect();
        assert_eq!(languages, vec!["en-US", "fr-FR"]);

        let filtered = filter_by_language(&catalog, "en-US");
        assert_eq!(filtered, vec![&catalog.voices()[0]]);

        let selected = resolve_selection(&filtered, "en-A (FEMALE)").unwrap();
        assert_eq!(selected, &catalog.voices()[0]);
    }

    #[test]
    fn stale_label_is_not_found() {
        let catalog = test_catalog();
        let filtered = filter_by_language(&catalog, "en-US");

        assert!(matches!(
            resolve_selection(&filtered, "en-A (MALE)"),
            Err(StudioError::SelectionNotFound(label)) if label == "en-A (MALE)"
        ));
        assert!(matches!(
            resolve_selection(&filtered, "fr-B (MALE)"),
            Err(StudioError::SelectionNotFound(_))
        ));
    }

    #[test]
    fn resolves_by_name_or_label() {
        let catalog = mixed_catalog();
        let filtered = filter_by_language(&catalog, "en-US");

        assert_eq!(resolve_by_name(&filtered, "en-C").unwrap().name, "en-C");
        assert_eq!(resolve_voice(&filtered, " de-D ").unwrap().name, "de-D");
        assert_eq!(resolve_voice(&filtered, "en-A (FEMALE)").unwrap().name, "en-A");
        assert!(matches!(
            resolve_voice(&filtered, "fr-B"),
            Err(StudioError::SelectionNotFound(_))
        ));
    }
}
