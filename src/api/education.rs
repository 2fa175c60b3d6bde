//! Education CRUD endpoints

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{unwrap_data, unwrap_list, ApiClient};
use crate::normalize;
use crate::types::EducationRecord;

/// Creation payload for `POST /education`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewEducation {
    #[serde(rename = "FreelancerID")]
    pub freelancer_id: i64,
    #[serde(rename = "Degree")]
    pub degree: String,
    #[serde(rename = "Major")]
    pub major: String,
    #[serde(rename = "InstitutionName")]
    pub institution_name: String,
    #[serde(rename = "GraduationYear")]
    pub graduation_year: i32,
    #[serde(rename = "GPA", skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
}

/// Partial update payload for `PUT /education/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EducationUpdate {
    #[serde(rename = "Degree", skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(rename = "Major", skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(rename = "InstitutionName", skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
    #[serde(rename = "GraduationYear", skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    #[serde(rename = "GPA", skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
}

pub async fn list(client: &ApiClient) -> Result<Vec<EducationRecord>, ApiError> {
    let body = client.get("/education").await?;
    Ok(unwrap_list(body).iter().map(normalize::education).collect())
}

pub async fn create(
    client: &ApiClient,
    payload: &NewEducation,
) -> Result<EducationRecord, ApiError> {
    let body = client
        .post("/education", serde_json::to_value(payload)?)
        .await?;
    Ok(normalize::education(&unwrap_data(body)))
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &EducationUpdate,
) -> Result<EducationRecord, ApiError> {
    let body = client
        .put(&format!("/education/{}", id), serde_json::to_value(payload)?)
        .await?;
    Ok(normalize::education(&unwrap_data(body)))
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/education/{}", id)).await?;
    Ok(())
}
