//! Destination Suggestions
//!
//! Case-insensitive substring filtering over fixed destination lists.

/// Destinations offered by the itinerary form component
pub const POPULAR_DESTINATIONS: &[&str] = &[
    "Mumbai, India",
    "Delhi, India",
    "Bangalore, India",
    "Goa, India",
    "Kerala, India",
    "Rajasthan, India",
    "Himachal Pradesh, India",
    "Tamil Nadu, India",
    "Karnataka, India",
    "Punjab, India",
];

/// Destinations offered on server-rendered pages
pub const LEGACY_DESTINATIONS: &[&str] = &[
    "Goa", "Kerala", "Rajasthan", "Himachal Pradesh", "Uttarakhand",
    "Kashmir", "Tamil Nadu", "Karnataka", "Maharashtra", "Gujarat",
    "Delhi", "Mumbai", "Bangalore", "Chennai", "Kolkata",
    "Jaipur", "Udaipur", "Agra", "Varanasi", "Rishikesh",
    "Manali", "Shimla", "Dharamshala", "Leh Ladakh", "Andaman",
    "Ooty", "Munnar", "Coorg", "Hampi", "Khajuraho",
];

/// Maximum number of suggestions shown at once
pub const MAX_SUGGESTIONS: usize = 5;

/// When a query qualifies for suggestions, and how many to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionRule {
    /// Queries shorter than this (in chars) yield nothing
    pub min_query_chars: usize,
    pub limit: usize,
}

impl SuggestionRule {
    /// Component form: query must be longer than 2 characters
    pub const FORM: SuggestionRule = SuggestionRule { min_query_chars: 3, limit: MAX_SUGGESTIONS };
    /// Legacy pages: query of 2 characters is already enough
    pub const LEGACY: SuggestionRule = SuggestionRule { min_query_chars: 2, limit: MAX_SUGGESTIONS };

    pub fn qualifies(&self, query: &str) -> bool {
        query.chars().count() >= self.min_query_chars
    }
}

/// Filter `source` by case-insensitive substring, keeping source order
pub fn suggest<'a>(query: &str, source: &[&'a str], rule: SuggestionRule) -> Vec<&'a str> {
    if !rule.qualifies(query) {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    source
        .iter()
        .copied()
        .filter(|dest| dest.to_lowercase().contains(&needle))
        .take(rule.limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_queries_yield_nothing() {
        assert!(suggest("", POPULAR_DESTINATIONS, SuggestionRule::FORM).is_empty());
        assert!(suggest("in", POPULAR_DESTINATIONS, SuggestionRule::FORM).is_empty());
    }

    #[test]
    fn test_matches_case_insensitively_in_source_order() {
        let got = suggest("GOA", POPULAR_DESTINATIONS, SuggestionRule::FORM);
        assert_eq!(got, vec!["Goa, India"]);

        let got = suggest("nad", POPULAR_DESTINATIONS, SuggestionRule::FORM);
        assert_eq!(got, vec!["Tamil Nadu, India"]);
    }

    #[test]
    fn test_caps_at_five() {
        // Every popular destination contains "india"
        let got = suggest("india", POPULAR_DESTINATIONS, SuggestionRule::FORM);
        assert_eq!(got.len(), 5);
        assert_eq!(got[0], "Mumbai, India");
        assert_eq!(got[4], "Kerala, India");
    }

    #[test]
    fn test_legacy_rule_accepts_two_chars() {
        let got = suggest("ma", LEGACY_DESTINATIONS, SuggestionRule::LEGACY);
        assert_eq!(got, vec!["Himachal Pradesh", "Maharashtra", "Manali", "Andaman"]);
    }

    #[test]
    fn test_char_count_not_byte_count() {
        // Three chars, six bytes
        assert!(SuggestionRule::FORM.qualifies("äöü"));
        assert!(!SuggestionRule::FORM.qualifies("äö"));
    }
}
