//! Project endpoints
//!
//! Projects are the one table that ships snake_case keys natively, so
//! payloads here are plain lowercase. Interest registration is the
//! optimistic hot path: the server answers with the authoritative count
//! and the caller reconciles its local one against it.

use serde::Serialize;
use serde_json::Value;

use crate::api::query_string;
use crate::error::ApiError;
use crate::http::{unwrap_data, unwrap_list, ApiClient};
use crate::normalize;
use crate::types::{Project, ProjectStatus};

/// Listing filters, serialized into the query string.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub status: Option<String>,
    pub employer_id: Option<i64>,
}

/// Creation payload. The server attaches `EmployerID` from the
/// authenticated account, so the caller never sends it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_needed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills_required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_needed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills_required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

pub async fn list(client: &ApiClient, filter: &ProjectFilter) -> Result<Vec<Project>, ApiError> {
    let query = query_string(&[
        ("status", filter.status.clone()),
        ("employer_id", filter.employer_id.map(|id| id.to_string())),
    ]);
    let body = client.get(&format!("/projects{}", query)).await?;
    Ok(unwrap_list(body).iter().map(normalize::project).collect())
}

pub async fn get(client: &ApiClient, id: i64) -> Result<Project, ApiError> {
    let body = client.get(&format!("/projects/{}", id)).await?;
    Ok(normalize::project(&unwrap_data(body)))
}

pub async fn create(client: &ApiClient, payload: &NewProject) -> Result<Project, ApiError> {
    let body = client
        .post("/projects", serde_json::to_value(payload)?)
        .await?;
    Ok(normalize::project(&unwrap_data(body)))
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &ProjectUpdate,
) -> Result<Project, ApiError> {
    let body = client
        .put(&format!("/projects/{}", id), serde_json::to_value(payload)?)
        .await?;
    Ok(normalize::project(&unwrap_data(body)))
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/projects/{}", id)).await?;
    Ok(())
}

/// Register the signed-in freelancer's interest in a project.
///
/// Returns the server's post-increment interest count. The payload is
/// normally `{ project_id, interest_count }`; a bare number is accepted
/// for older deployments.
pub async fn express_interest(client: &ApiClient, id: i64) -> Result<i64, ApiError> {
    let body = client.post_empty(&format!("/projects/{}/interest", id)).await?;
    let data = unwrap_data(body);
    let count = match &data {
        Value::Number(n) => n.as_i64(),
        _ => data.get("interest_count").and_then(Value::as_i64),
    };
    count.ok_or_else(|| ApiError::Parse("interest response carried no count".into()))
}
