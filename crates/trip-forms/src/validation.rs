//! Trip Form Validation
//!
//! The single validation routine used by both the itinerary form component and
//! the server-rendered itinerary form.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::dates::parse_iso_date;

/// Raw trip form values, as read from inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripForm {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: String,
    pub interests: Vec<String>,
}

impl TripForm {
    /// Toggle an interest on or off, keeping selection order
    pub fn toggle_interest(&mut self, interest: &str) {
        crate::interests::toggle(&mut self.interests, interest);
    }

    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }

    /// Budget as a number, if it parses
    pub fn budget_amount(&self) -> Option<f64> {
        self.budget.trim().parse::<f64>().ok().filter(|b| b.is_finite())
    }
}

/// Validated form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Destination,
    StartDate,
    EndDate,
    Budget,
    Interests,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Destination,
        Field::StartDate,
        Field::EndDate,
        Field::Budget,
        Field::Interests,
    ];

    /// HTML `name` attribute of the input backing this field
    pub fn name(self) -> &'static str {
        match self {
            Field::Destination => "destination",
            Field::StartDate => "start_date",
            Field::EndDate => "end_date",
            Field::Budget => "budget",
            Field::Interests => "interests",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field-level validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(field, msg)| format!("{}: {}", field, msg)).collect();
        f.write_str(&parts.join("; "))
    }
}

pub const DESTINATION_REQUIRED: &str = "Destination is required";
pub const START_DATE_REQUIRED: &str = "Start date is required";
pub const END_DATE_REQUIRED: &str = "End date is required";
pub const INVALID_DATE: &str = "Please enter a valid date";
pub const END_BEFORE_START: &str = "End date must be after start date";
pub const INVALID_BUDGET: &str = "Please enter a valid budget";
pub const INTERESTS_REQUIRED: &str = "Please select at least one interest";

/// Check every rule and collect one message per offending field
pub fn validate(form: &TripForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if form.destination.trim().is_empty() {
        errors.insert(Field::Destination, DESTINATION_REQUIRED);
    }

    let start = check_date(&form.start_date, Field::StartDate, START_DATE_REQUIRED, &mut errors);
    let end = check_date(&form.end_date, Field::EndDate, END_DATE_REQUIRED, &mut errors);
    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            errors.insert(Field::EndDate, END_BEFORE_START);
        }
    }

    match form.budget_amount() {
        Some(amount) if amount > 0.0 => {}
        _ => errors.insert(Field::Budget, INVALID_BUDGET),
    }

    if form.interests.is_empty() {
        errors.insert(Field::Interests, INTERESTS_REQUIRED);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_date(raw: &str, field: Field, missing: &str, errors: &mut ValidationErrors) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.insert(field, missing);
        return None;
    }
    let parsed = parse_iso_date(raw);
    if parsed.is_none() {
        errors.insert(field, INVALID_DATE);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> TripForm {
        TripForm {
            destination: "Goa".to_string(),
            start_date: "2025-01-05".to_string(),
            end_date: "2025-01-10".to_string(),
            budget: "5000".to_string(),
            interests: vec!["Beach".to_string()],
        }
    }

    fn flagged(form: &TripForm) -> Vec<Field> {
        validate(form).err().map(|e| e.fields().collect()).unwrap_or_default()
    }

    #[test]
    fn test_accepts_valid_form() {
        assert_eq!(validate(&valid_form()), Ok(()));
    }

    #[test]
    fn test_end_before_start_flags_end_date_only() {
        let form = TripForm {
            start_date: "2025-01-10".to_string(),
            end_date: "2025-01-05".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::EndDate]);
        assert_eq!(errors.get(Field::EndDate), Some(END_BEFORE_START));
    }

    #[test]
    fn test_same_day_trip_is_rejected() {
        let form = TripForm { end_date: "2025-01-05".to_string(), ..valid_form() };
        assert_eq!(flagged(&form), vec![Field::EndDate]);
    }

    #[test]
    fn test_empty_destination_flags_destination_only() {
        let form = TripForm { destination: "   ".to_string(), ..valid_form() };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Destination), Some(DESTINATION_REQUIRED));
    }

    #[test]
    fn test_budget_must_be_positive_number() {
        for budget in ["", "0", "-10", "abc", "NaN"] {
            let form = TripForm { budget: budget.to_string(), ..valid_form() };
            assert_eq!(flagged(&form), vec![Field::Budget], "budget {:?}", budget);
        }
        let form = TripForm { budget: "0.5".to_string(), ..valid_form() };
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_empty_form_flags_every_field() {
        let errors = validate(&TripForm::default()).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), Field::ALL.to_vec());
        assert_eq!(errors.get(Field::EndDate), Some(END_DATE_REQUIRED));
    }

    #[test]
    fn test_missing_start_skips_ordering_check() {
        let form = TripForm { start_date: String::new(), ..valid_form() };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::StartDate]);
    }

    #[test]
    fn test_garbage_date_is_invalid() {
        let form = TripForm { start_date: "next tuesday".to_string(), ..valid_form() };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(Field::StartDate), Some(INVALID_DATE));
        assert!(!errors.contains(Field::EndDate));
    }

    #[test]
    fn test_toggle_interest_adds_and_removes() {
        let mut form = TripForm::default();
        form.toggle_interest("Food");
        form.toggle_interest("Nature");
        assert_eq!(form.interests, vec!["Food", "Nature"]);
        form.toggle_interest("Food");
        assert_eq!(form.interests, vec!["Nature"]);
        assert!(form.has_interest("Nature"));
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("duration"), None);
    }
}
