//! Typo correction against a fixed domain dictionary
//!
//! Free-text submissions are corrected token by token before dispatch: a
//! token within one edit of a dictionary term is snapped to that term,
//! anything further away is left alone. The dictionary is scanned in
//! declaration order and the first entry achieving the minimum distance
//! wins ties, so the output is fully deterministic.

use super::distance::levenshtein;

/// Tokens shorter than this are never corrected; short valid words would
/// otherwise be within one edit of half the dictionary.
pub const MIN_TOKEN_LEN: usize = 4;

/// A candidate replacement is accepted only when its distance is strictly
/// below this, i.e. at distance 0 or 1.
pub const MAX_ACCEPTED_DISTANCE: usize = 2;

/// Domain terms the corrector snaps to, in scan order.
pub const DOMAIN_DICTIONARY: [&str; 16] = [
    "admission",
    "document",
    "fee",
    "structure",
    "ragging",
    "policy",
    "placement",
    "timing",
    "college",
    "semester",
    "exam",
    "timetable",
    "notice",
    "circular",
    "event",
    "information",
];

/// Edit-distance corrector over a fixed, lowercase dictionary.
///
/// Pure and immutable after construction; safe to share between any number
/// of concurrent corrections.
#[derive(Debug, Clone)]
pub struct TypoCorrector {
    dictionary: Vec<String>,
}

impl Default for TypoCorrector {
    fn default() -> Self {
        Self::new(DOMAIN_DICTIONARY.iter().map(|s| s.to_string()))
    }
}

impl TypoCorrector {
    pub fn new(dictionary: impl IntoIterator<Item = String>) -> Self {
        Self {
            dictionary: dictionary.into_iter().collect(),
        }
    }

    /// Correct a whole submission.
    ///
    /// The input is split on the space character and rejoined with single
    /// spaces, so token count and order are always preserved; no token is
    /// ever inserted or dropped.
    pub fn correct(&self, text: &str) -> String {
        text.split(' ')
            .map(|token| self.correct_token(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Correct a single token, or return it unchanged.
    pub fn correct_token(&self, token: &str) -> String {
        if token.chars().count() < MIN_TOKEN_LEN {
            return token.to_string();
        }

        let lowered = token.to_lowercase();
        let mut best = token;
        let mut best_distance = MAX_ACCEPTED_DISTANCE;
        for entry in &self.dictionary {
            let distance = levenshtein(&lowered, entry);
            // Strictly-smaller keeps the earliest entry on a tie.
            if distance < best_distance {
                best_distance = distance;
                best = entry;
            }
        }
        best.to_string()
    }
}

/// Whether a correction is worth announcing: the original and corrected
/// strings differ beyond letter case.
pub fn differs_ignoring_case(original: &str, corrected: &str) -> bool {
    original.to_lowercase() != corrected.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tokens_pass_through() {
        let corrector = TypoCorrector::default();
        // "fee" is in the dictionary but too short to be a correction target
        assert_eq!(corrector.correct_token("fee"), "fee");
        assert_eq!(corrector.correct_token("fe"), "fe");
        assert_eq!(corrector.correct_token("ok"), "ok");
    }

    #[test]
    fn test_exact_match_returns_dictionary_form() {
        let corrector = TypoCorrector::default();
        assert_eq!(corrector.correct_token("admission"), "admission");
        // Distance 0 against the lowercase entry snaps casing too
        assert_eq!(corrector.correct_token("Admission"), "admission");
    }

    #[test]
    fn test_single_edit_is_corrected() {
        let corrector = TypoCorrector::default();
        assert_eq!(corrector.correct_token("admision"), "admission");
        assert_eq!(corrector.correct_token("documant"), "document");
        assert_eq!(corrector.correct_token("semister"), "semester");
        assert_eq!(corrector.correct_token("collage"), "college");
    }

    #[test]
    fn test_two_edits_left_alone() {
        let corrector = TypoCorrector::default();
        assert_eq!(corrector.correct_token("admsion"), "admsion");
        assert_eq!(corrector.correct_token("xylophone"), "xylophone");
        // An adjacent transposition costs two edits here (no Damerau
        // extension), so "documnet" is out of reach of "document".
        assert_eq!(corrector.correct_token("documnet"), "documnet");
    }

    #[test]
    fn test_first_entry_wins_ties() {
        let corrector = TypoCorrector::new(vec!["cart".to_string(), "card".to_string()]);
        // "carp" is distance 1 from both; scan order decides
        assert_eq!(corrector.correct_token("carp"), "cart");
    }

    #[test]
    fn test_later_exact_match_beats_earlier_near_miss() {
        let corrector = TypoCorrector::new(vec!["cart".to_string(), "carp".to_string()]);
        assert_eq!(corrector.correct_token("carp"), "carp");
    }

    #[test]
    fn test_token_count_and_order_preserved() {
        let corrector = TypoCorrector::default();
        let inputs = [
            "what are the addmision documnet requirements",
            "one",
            "a  b", // double space: empty middle token survives
        ];
        for input in inputs {
            let corrected = corrector.correct(input);
            assert_eq!(
                corrected.split(' ').count(),
                input.split(' ').count(),
                "token count changed for {input:?}"
            );
        }
    }

    #[test]
    fn test_concrete_sentence() {
        let corrector = TypoCorrector::default();
        assert_eq!(corrector.correct("admision documant"), "admission document");
    }

    #[test]
    fn test_idempotent_on_dictionary_output() {
        let corrector = TypoCorrector::default();
        let once = corrector.correct("admision documant timetble");
        let twice = corrector.correct(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_numeric_tokens_go_through_distance_check() {
        let corrector = TypoCorrector::default();
        // No special-casing: digits are just chars far from every entry
        assert_eq!(corrector.correct_token("2024"), "2024");
    }

    #[test]
    fn test_differs_ignoring_case() {
        assert!(differs_ignoring_case("addmision", "admission"));
        assert!(!differs_ignoring_case("Admission", "admission"));
        assert!(!differs_ignoring_case("exam", "exam"));
    }
}
