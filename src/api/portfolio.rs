//! Portfolio work CRUD endpoints

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{unwrap_data, unwrap_list, ApiClient};
use crate::normalize;
use crate::types::PortfolioItem;

/// Creation payload for `POST /portfolio-work`. `TechnologiesUsed` is
/// stored server-side as delimited free text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewPortfolioItem {
    #[serde(rename = "FreelancerID")]
    pub freelancer_id: i64,
    #[serde(rename = "ProjectTitle")]
    pub project_title: String,
    #[serde(rename = "ProjectDescription", skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
    #[serde(rename = "TechnologiesUsed", skip_serializing_if = "Option::is_none")]
    pub technologies_used: Option<String>,
    #[serde(rename = "CompletionDate", skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(rename = "ProjectURL", skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(rename = "ProjectFile", skip_serializing_if = "Option::is_none")]
    pub project_file: Option<String>,
}

/// Partial update payload for `PUT /portfolio-work/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioUpdate {
    #[serde(rename = "ProjectTitle", skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,
    #[serde(rename = "ProjectDescription", skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
    #[serde(rename = "TechnologiesUsed", skip_serializing_if = "Option::is_none")]
    pub technologies_used: Option<String>,
    #[serde(rename = "CompletionDate", skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(rename = "ProjectURL", skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(rename = "ProjectFile", skip_serializing_if = "Option::is_none")]
    pub project_file: Option<String>,
}

pub async fn list(client: &ApiClient) -> Result<Vec<PortfolioItem>, ApiError> {
    let body = client.get("/portfolio-work").await?;
    Ok(unwrap_list(body)
        .iter()
        .map(normalize::portfolio_item)
        .collect())
}

pub async fn create(
    client: &ApiClient,
    payload: &NewPortfolioItem,
) -> Result<PortfolioItem, ApiError> {
    let body = client
        .post("/portfolio-work", serde_json::to_value(payload)?)
        .await?;
    Ok(normalize::portfolio_item(&unwrap_data(body)))
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &PortfolioUpdate,
) -> Result<PortfolioItem, ApiError> {
    let body = client
        .put(
            &format!("/portfolio-work/{}", id),
            serde_json::to_value(payload)?,
        )
        .await?;
    Ok(normalize::portfolio_item(&unwrap_data(body)))
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/portfolio-work/{}", id)).await?;
    Ok(())
}
