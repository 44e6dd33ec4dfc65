//! Checkpoint Tracking

use super::get_json;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::CheckpointsResponse;

pub fn checkpoints_path(itinerary_id: &str) -> String {
    format!("/api/itinerary/{}/checkpoints", itinerary_id)
}

pub async fn fetch_checkpoints(config: &AppConfig, itinerary_id: &str) -> Result<CheckpointsResponse, ApiError> {
    get_json(&config.api_url(&checkpoints_path(itinerary_id))).await
}
