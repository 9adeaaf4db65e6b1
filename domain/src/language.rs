//! Supported interface languages
//!
//! BCP-47 tags with native display names, matching the voices the speech
//! services are expected to offer. The tag travels with every dispatch as
//! `target_language` and selects the synthesis voice.

/// Default interface language.
pub const DEFAULT_LANGUAGE: &str = "en-IN";

const LANGUAGES: [(&str, &str); 11] = [
    ("en-IN", "English"),
    ("hi-IN", "हिन्दी"),
    ("gu-IN", "ગુજરાતી"),
    ("bn-IN", "বাংলা"),
    ("mr-IN", "मराठी"),
    ("ta-IN", "தமிழ்"),
    ("te-IN", "తెలుగు"),
    ("kn-IN", "ಕನ್ನಡ"),
    ("ml-IN", "മലയാളം"),
    ("pa-IN", "ਪੰਜਾਬੀ"),
    ("ur-IN", "اردو"),
];

/// All supported `(tag, native name)` pairs, in display order.
pub fn supported_languages() -> &'static [(&'static str, &'static str)] {
    &LANGUAGES
}

pub fn is_supported(tag: &str) -> bool {
    LANGUAGES.iter().any(|(t, _)| *t == tag)
}

/// Native display name for a tag, or a generic fallback for unknown tags
/// (used in user-facing notices, so it must never fail).
pub fn language_display_name(tag: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, name)| *name)
        .unwrap_or("the selected language")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_supported() {
        assert!(is_supported(DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(language_display_name("en-IN"), "English");
        assert_eq!(language_display_name("hi-IN"), "हिन्दी");
        assert_eq!(language_display_name("fr-FR"), "the selected language");
    }

    #[test]
    fn test_tags_are_unique() {
        for (i, (tag, _)) in LANGUAGES.iter().enumerate() {
            assert!(
                !LANGUAGES[i + 1..].iter().any(|(t, _)| t == tag),
                "duplicate tag {tag}"
            );
        }
    }
}
