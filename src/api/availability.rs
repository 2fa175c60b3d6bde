//! Availability CRUD endpoints
//!
//! Each freelancer has at most one availability row; the management
//! page creates it on first save and updates it afterwards.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{unwrap_data, unwrap_list, ApiClient};
use crate::normalize;
use crate::types::AvailabilityRecord;

/// Creation payload for `POST /availability`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewAvailability {
    #[serde(rename = "FreelancerID")]
    pub freelancer_id: i64,
    #[serde(rename = "ActivityStatus", skip_serializing_if = "Option::is_none")]
    pub activity_status: Option<String>,
    #[serde(rename = "CurrentProjectsCount", skip_serializing_if = "Option::is_none")]
    pub current_projects_count: Option<i64>,
    #[serde(rename = "WeeklyHoursAvailable", skip_serializing_if = "Option::is_none")]
    pub weekly_hours_available: Option<i64>,
    #[serde(rename = "NextAvailabilityDate", skip_serializing_if = "Option::is_none")]
    pub next_availability_date: Option<String>,
}

/// Partial update payload for `PUT /availability/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AvailabilityUpdate {
    #[serde(rename = "ActivityStatus", skip_serializing_if = "Option::is_none")]
    pub activity_status: Option<String>,
    #[serde(rename = "CurrentProjectsCount", skip_serializing_if = "Option::is_none")]
    pub current_projects_count: Option<i64>,
    #[serde(rename = "WeeklyHoursAvailable", skip_serializing_if = "Option::is_none")]
    pub weekly_hours_available: Option<i64>,
    #[serde(rename = "NextAvailabilityDate", skip_serializing_if = "Option::is_none")]
    pub next_availability_date: Option<String>,
}

pub async fn list(client: &ApiClient) -> Result<Vec<AvailabilityRecord>, ApiError> {
    let body = client.get("/availability").await?;
    Ok(unwrap_list(body)
        .iter()
        .map(normalize::availability)
        .collect())
}

pub async fn create(
    client: &ApiClient,
    payload: &NewAvailability,
) -> Result<AvailabilityRecord, ApiError> {
    let body = client
        .post("/availability", serde_json::to_value(payload)?)
        .await?;
    Ok(normalize::availability(&unwrap_data(body)))
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &AvailabilityUpdate,
) -> Result<AvailabilityRecord, ApiError> {
    let body = client
        .put(
            &format!("/availability/{}", id),
            serde_json::to_value(payload)?,
        )
        .await?;
    Ok(normalize::availability(&unwrap_data(body)))
}
