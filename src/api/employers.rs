//! Employer resource endpoints

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{unwrap_data, unwrap_list, ApiClient};
use crate::normalize;
use crate::types::{Bookmark, EmployerProfile};

use super::query_string;

/// List filters for `GET /employers`.
#[derive(Debug, Clone, Default)]
pub struct EmployerFilter {
    pub search: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
}

/// Creation payload. `CompanyName` and `Email` are required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewEmployer {
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "ContactPersonName", skip_serializing_if = "Option::is_none")]
    pub contact_person_name: Option<String>,
    #[serde(rename = "PhoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "IndustryType", skip_serializing_if = "Option::is_none")]
    pub industry_type: Option<String>,
}

/// Partial update payload for `PUT /employers/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployerUpdate {
    #[serde(rename = "CompanyName", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(rename = "ContactPersonName", skip_serializing_if = "Option::is_none")]
    pub contact_person_name: Option<String>,
    #[serde(rename = "PhoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(rename = "CompanyWebsite", skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "IndustryType", skip_serializing_if = "Option::is_none")]
    pub industry_type: Option<String>,
    #[serde(rename = "CompanyDescription", skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    #[serde(rename = "CompanySize", skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(rename = "Founded", skip_serializing_if = "Option::is_none")]
    pub founded: Option<String>,
    #[serde(rename = "TalentHeadline", skip_serializing_if = "Option::is_none")]
    pub talent_headline: Option<String>,
    #[serde(rename = "TalentAreas", skip_serializing_if = "Option::is_none")]
    pub talent_areas: Option<String>,
    #[serde(rename = "TalentWhyUs", skip_serializing_if = "Option::is_none")]
    pub talent_why_us: Option<String>,
}

pub async fn list(
    client: &ApiClient,
    filter: &EmployerFilter,
) -> Result<Vec<EmployerProfile>, ApiError> {
    let qs = query_string(&[
        ("search", filter.search.clone()),
        ("industry", filter.industry.clone()),
        ("location", filter.location.clone()),
    ]);
    let body = client.get(&format!("/employers{}", qs)).await?;
    Ok(unwrap_list(body).iter().map(normalize::employer).collect())
}

pub async fn get(client: &ApiClient, id: i64) -> Result<EmployerProfile, ApiError> {
    let body = client.get(&format!("/employers/{}", id)).await?;
    Ok(normalize::employer(&unwrap_data(body)))
}

pub async fn create(
    client: &ApiClient,
    payload: &NewEmployer,
) -> Result<EmployerProfile, ApiError> {
    let body = client
        .post("/employers", serde_json::to_value(payload)?)
        .await?;
    Ok(normalize::employer(&unwrap_data(body)))
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &EmployerUpdate,
) -> Result<EmployerProfile, ApiError> {
    let body = client
        .put(&format!("/employers/{}", id), serde_json::to_value(payload)?)
        .await?;
    Ok(normalize::employer(&unwrap_data(body)))
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/employers/{}", id)).await?;
    Ok(())
}

/// Bookmarks of one employer, with the bookmarked freelancers embedded
/// (`GET /employers/{id}/bookmarks`).
pub async fn bookmarks_of(client: &ApiClient, id: i64) -> Result<Vec<Bookmark>, ApiError> {
    let body = client.get(&format!("/employers/{}/bookmarks", id)).await?;
    Ok(unwrap_list(body).iter().map(normalize::bookmark).collect())
}

/// Upload a company logo; returns the updated profile.
pub async fn upload_company_logo(
    client: &ApiClient,
    id: i64,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<EmployerProfile, ApiError> {
    let body = client
        .upload(
            &format!("/employers/{}/company-logo", id),
            "image",
            file_name,
            bytes,
        )
        .await?;
    Ok(normalize::employer(&unwrap_data(body)))
}
