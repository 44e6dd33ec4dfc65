//! Travel Interests
//!
//! Interest options offered by the itinerary form, with their icons.

/// Interest options (label, Font Awesome icon name)
pub const INTEREST_OPTIONS: &[(&str, &str)] = &[
    ("Adventure", "mountain"),
    ("Culture", "theater-masks"),
    ("Food", "utensils"),
    ("Nature", "leaf"),
    ("History", "landmark"),
    ("Shopping", "shopping-bag"),
    ("Nightlife", "moon"),
    ("Photography", "camera"),
    ("Spiritual", "om"),
    ("Beach", "umbrella-beach"),
];

const DEFAULT_ICON: &str = "star";

pub fn interest_icon(interest: &str) -> &'static str {
    INTEREST_OPTIONS
        .iter()
        .find(|(label, _)| *label == interest)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Add the interest if absent, remove it if present
pub fn toggle(selected: &mut Vec<String>, interest: &str) {
    if let Some(pos) = selected.iter().position(|i| i == interest) {
        selected.remove(pos);
    } else {
        selected.push(interest.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_icons() {
        assert_eq!(interest_icon("Beach"), "umbrella-beach");
        assert_eq!(interest_icon("beach"), "star");
        assert_eq!(interest_icon("Skiing"), "star");
        assert_eq!(INTEREST_OPTIONS.len(), 10);
    }
}
