//! Itinerary Generation

use trip_forms::submission::{encode_form, interpret_response};
use trip_forms::{SubmitOutcome, TripForm};

use super::post_form;
use crate::config::AppConfig;
use crate::error::ApiError;

pub const GENERATE_ITINERARY_PATH: &str = "/generate_itinerary";

/// Submit a validated trip form and decide where the page goes next
pub async fn generate_itinerary(config: &AppConfig, form: &TripForm) -> Result<SubmitOutcome, ApiError> {
    let url = config.api_url(GENERATE_ITINERARY_PATH);
    let response = post_form(&url, &encode_form(form)).await?;
    log::debug!(
        target: "api",
        "generate_itinerary -> status={} redirected={}",
        response.status,
        response.redirected
    );
    Ok(interpret_response(response.redirected, &response.url, response.status, &response.body))
}
