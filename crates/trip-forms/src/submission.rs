//! Itinerary Submission
//!
//! Form-encoding of the trip form and interpretation of the backend's reply.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::validation::{Field, TripForm};

/// `application/x-www-form-urlencoded` reserved set (space handled separately)
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

const ITINERARY_PATH_MARKER: &str = "/itinerary/";

fn form_encode(value: &str) -> String {
    utf8_percent_encode(value, FORM_ENCODE_SET).to_string().replace("%20", "+")
}

/// Encode the form body. Each interest is sent as its own `interests` pair.
pub fn encode_form(form: &TripForm) -> String {
    let mut pairs: Vec<(&str, &str)> = vec![
        (Field::Destination.name(), form.destination.trim()),
        (Field::StartDate.name(), form.start_date.as_str()),
        (Field::EndDate.name(), form.end_date.as_str()),
        (Field::Budget.name(), form.budget.trim()),
    ];
    pairs.extend(form.interests.iter().map(|i| (Field::Interests.name(), i.as_str())));

    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// What the page should do once the backend answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Go to this URL or path
    Navigate(String),
    /// Reload the current page
    Reload,
    /// Show the generic failure alert
    Failed { status: u16 },
}

/// Decide the next step from the fetch response.
///
/// `final_url` is the response URL, meaningful only when `redirected`.
pub fn interpret_response(redirected: bool, final_url: &str, status: u16, body: &str) -> SubmitOutcome {
    if redirected && !final_url.is_empty() {
        return SubmitOutcome::Navigate(final_url.to_string());
    }
    if !(200..300).contains(&status) {
        return SubmitOutcome::Failed { status };
    }
    match extract_itinerary_path(body) {
        Some(path) => SubmitOutcome::Navigate(path),
        None => SubmitOutcome::Reload,
    }
}

/// Characters that never end a path inside a tag or sentence
fn ends_path(c: char) -> bool {
    c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '(' | ')')
}

/// The URL or path token around the first `/itinerary/` occurrence.
///
/// `=` only bounds the token on the left, so query strings survive. Trailing
/// sentence punctuation is dropped.
pub fn extract_itinerary_path(body: &str) -> Option<String> {
    let idx = body.find(ITINERARY_PATH_MARKER)?;

    let start = body[..idx]
        .char_indices()
        .rev()
        .find(|(_, c)| ends_path(*c) || *c == '=')
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let end = body[idx..]
        .char_indices()
        .find(|(_, c)| ends_path(*c))
        .map(|(i, _)| idx + i)
        .unwrap_or(body.len());

    let token = body[start..end].trim_end_matches(['.', ',', ';', ':', '!']);
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_interests_as_repeated_pairs() {
        let form = TripForm {
            destination: " Goa, India ".to_string(),
            start_date: "2025-01-05".to_string(),
            end_date: "2025-01-10".to_string(),
            budget: "5000".to_string(),
            interests: vec!["Beach".to_string(), "Food & Drink".to_string()],
        };
        assert_eq!(
            encode_form(&form),
            "destination=Goa%2C+India&start_date=2025-01-05&end_date=2025-01-10&budget=5000\
             &interests=Beach&interests=Food+%26+Drink"
        );
    }

    #[test]
    fn test_redirect_wins() {
        assert_eq!(
            interpret_response(true, "https://x.test/itinerary/7", 200, ""),
            SubmitOutcome::Navigate("https://x.test/itinerary/7".to_string())
        );
    }

    #[test]
    fn test_ok_body_with_itinerary_path_navigates() {
        assert_eq!(
            interpret_response(false, "", 200, "/itinerary/42\n"),
            SubmitOutcome::Navigate("/itinerary/42".to_string())
        );
        assert_eq!(
            interpret_response(false, "", 201, r#"<a href="/itinerary/42?tab=plan">open</a>"#),
            SubmitOutcome::Navigate("/itinerary/42?tab=plan".to_string())
        );
    }

    #[test]
    fn test_path_extraction_keeps_query_and_drops_punctuation() {
        assert_eq!(
            extract_itinerary_path(r#"<a href="/itinerary/42?tab=plan&day=2">"#).as_deref(),
            Some("/itinerary/42?tab=plan&day=2")
        );
        assert_eq!(
            extract_itinerary_path("Redirecting to /itinerary/42.").as_deref(),
            Some("/itinerary/42")
        );
        assert_eq!(
            extract_itinerary_path("Saved (see /itinerary/7), thanks!").as_deref(),
            Some("/itinerary/7")
        );
        assert_eq!(
            extract_itinerary_path("url=https://x.test/itinerary/9;").as_deref(),
            Some("https://x.test/itinerary/9")
        );
    }

    #[test]
    fn test_ok_body_without_path_reloads() {
        assert_eq!(interpret_response(false, "", 200, "<html>done</html>"), SubmitOutcome::Reload);
    }

    #[test]
    fn test_error_status_fails_even_with_path() {
        assert_eq!(
            interpret_response(false, "", 500, "/itinerary/42"),
            SubmitOutcome::Failed { status: 500 }
        );
    }
}
