//! Generic Input Rules
//!
//! Per-input checks for server-rendered forms: required, email and numeric range.

use std::sync::OnceLock;

use regex::Regex;

/// What kind of input is being checked, with its numeric bounds if any
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    Text,
    Email,
    Number { min: Option<String>, max: Option<String> },
}

impl InputKind {
    /// Build from an input's `type`, `min` and `max` attributes
    pub fn from_attrs(input_type: &str, min: Option<String>, max: Option<String>) -> Self {
        match input_type {
            "email" => InputKind::Email,
            "number" => InputKind::Number { min, max },
            _ => InputKind::Text,
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Check a single input value, returning the message to show on failure
pub fn check_input(kind: &InputKind, required: bool, raw: &str) -> Result<(), String> {
    let value = raw.trim();

    if required && value.is_empty() {
        return Err("This field is required".to_string());
    }
    if value.is_empty() {
        return Ok(());
    }

    match kind {
        InputKind::Text => Ok(()),
        InputKind::Email => {
            if is_valid_email(value) {
                Ok(())
            } else {
                Err("Please enter a valid email address".to_string())
            }
        }
        InputKind::Number { min, max } => {
            // A non-numeric value compares false against both bounds
            let Ok(num) = value.parse::<f64>() else { return Ok(()) };
            if let Some(min) = min.as_deref().filter(|m| !m.is_empty()) {
                if matches!(min.parse::<f64>(), Ok(bound) if num < bound) {
                    return Err(format!("Minimum value is {}", min));
                }
            }
            if let Some(max) = max.as_deref().filter(|m| !m.is_empty()) {
                if matches!(max.parse::<f64>(), Ok(bound) if num > bound) {
                    return Err(format!("Maximum value is {}", max));
                }
            }
            Ok(())
        }
    }
}

/// Keep only ASCII digits.
///
/// Applied to the legacy budget input on every keystroke. Bounds are not
/// re-checked here; that waits for blur or submit.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(min: Option<&str>, max: Option<&str>) -> InputKind {
        InputKind::Number { min: min.map(str::to_string), max: max.map(str::to_string) }
    }

    #[test]
    fn test_required_rejects_blank() {
        assert_eq!(check_input(&InputKind::Text, true, "  "), Err("This field is required".to_string()));
        assert_eq!(check_input(&InputKind::Text, false, ""), Ok(()));
        assert_eq!(check_input(&InputKind::Text, true, "x"), Ok(()));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(check_input(&InputKind::Email, false, "nope").is_err());
    }

    #[test]
    fn test_numeric_bounds() {
        let kind = number(Some("1000"), Some("100000"));
        assert_eq!(check_input(&kind, true, "999"), Err("Minimum value is 1000".to_string()));
        assert_eq!(check_input(&kind, true, "100001"), Err("Maximum value is 100000".to_string()));
        assert_eq!(check_input(&kind, true, "1000"), Ok(()));
        assert_eq!(check_input(&number(None, None), true, "-5"), Ok(()));
    }

    #[test]
    fn test_kind_from_attrs() {
        assert_eq!(InputKind::from_attrs("email", None, None), InputKind::Email);
        assert_eq!(InputKind::from_attrs("date", Some("x".into()), None), InputKind::Text);
        assert_eq!(InputKind::from_attrs("number", Some("1".into()), None), number(Some("1"), None));
    }

    #[test]
    fn test_digits_only_strips_everything_else() {
        assert_eq!(digits_only("₹1,50,000"), "150000");
        assert_eq!(digits_only("12.5"), "125");
        assert_eq!(digits_only(""), "");
    }
}
