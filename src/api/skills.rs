//! Skill CRUD endpoints

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{unwrap_data, unwrap_list, ApiClient};
use crate::normalize;
use crate::types::Skill;

/// Creation payload for `POST /skills`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewSkill {
    #[serde(rename = "FreelancerID")]
    pub freelancer_id: i64,
    #[serde(rename = "SkillName")]
    pub skill_name: String,
    #[serde(rename = "ProficiencyLevel", skip_serializing_if = "Option::is_none")]
    pub proficiency_level: Option<String>,
    #[serde(rename = "YearsOfExperience", skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<i64>,
    #[serde(rename = "Certification", skip_serializing_if = "Option::is_none")]
    pub certification: Option<String>,
}

/// Partial update payload for `PUT /skills/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkillUpdate {
    #[serde(rename = "SkillName", skip_serializing_if = "Option::is_none")]
    pub skill_name: Option<String>,
    #[serde(rename = "ProficiencyLevel", skip_serializing_if = "Option::is_none")]
    pub proficiency_level: Option<String>,
    #[serde(rename = "YearsOfExperience", skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<i64>,
    #[serde(rename = "Certification", skip_serializing_if = "Option::is_none")]
    pub certification: Option<String>,
}

pub async fn list(client: &ApiClient) -> Result<Vec<Skill>, ApiError> {
    let body = client.get("/skills").await?;
    Ok(unwrap_list(body).iter().map(normalize::skill).collect())
}

pub async fn create(client: &ApiClient, payload: &NewSkill) -> Result<Skill, ApiError> {
    let body = client.post("/skills", serde_json::to_value(payload)?).await?;
    Ok(normalize::skill(&unwrap_data(body)))
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &SkillUpdate,
) -> Result<Skill, ApiError> {
    let body = client
        .put(&format!("/skills/{}", id), serde_json::to_value(payload)?)
        .await?;
    Ok(normalize::skill(&unwrap_data(body)))
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/skills/{}", id)).await?;
    Ok(())
}
