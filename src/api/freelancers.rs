//! Freelancer resource endpoints

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{unwrap_data, unwrap_list, ApiClient};
use crate::normalize;
use crate::types::{FreelancerProfile, PortfolioItem, Skill};

use super::query_string;

/// List filters for `GET /freelancers`. All server-side matching is
/// substring-based (`LIKE %term%`).
#[derive(Debug, Clone, Default)]
pub struct FreelancerFilter {
    pub search: Option<String>,
    pub location: Option<String>,
    pub sort_by: Option<String>,
}

/// Creation payload — the server validates these exact PascalCase
/// column names. `FirstName`, `LastName`, and `Email` are required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewFreelancer {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "PhoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(rename = "Bio", skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Partial update payload for `PUT /freelancers/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FreelancerUpdate {
    #[serde(rename = "FirstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "PhoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(rename = "Bio", skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

pub async fn list(
    client: &ApiClient,
    filter: &FreelancerFilter,
) -> Result<Vec<FreelancerProfile>, ApiError> {
    let qs = query_string(&[
        ("search", filter.search.clone()),
        ("location", filter.location.clone()),
        ("sort_by", filter.sort_by.clone()),
    ]);
    let body = client.get(&format!("/freelancers{}", qs)).await?;
    Ok(unwrap_list(body).iter().map(normalize::freelancer).collect())
}

pub async fn get(client: &ApiClient, id: i64) -> Result<FreelancerProfile, ApiError> {
    let body = client.get(&format!("/freelancers/{}", id)).await?;
    Ok(normalize::freelancer(&unwrap_data(body)))
}

pub async fn create(
    client: &ApiClient,
    payload: &NewFreelancer,
) -> Result<FreelancerProfile, ApiError> {
    let body = client
        .post("/freelancers", serde_json::to_value(payload)?)
        .await?;
    Ok(normalize::freelancer(&unwrap_data(body)))
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &FreelancerUpdate,
) -> Result<FreelancerProfile, ApiError> {
    let body = client
        .put(&format!("/freelancers/{}", id), serde_json::to_value(payload)?)
        .await?;
    Ok(normalize::freelancer(&unwrap_data(body)))
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/freelancers/{}", id)).await?;
    Ok(())
}

/// Skills belonging to one freelancer (`GET /freelancers/{id}/skills`).
pub async fn skills_of(client: &ApiClient, id: i64) -> Result<Vec<Skill>, ApiError> {
    let body = client.get(&format!("/freelancers/{}/skills", id)).await?;
    Ok(unwrap_list(body).iter().map(normalize::skill).collect())
}

/// Portfolio belonging to one freelancer (`GET /freelancers/{id}/portfolio`).
pub async fn portfolio_of(client: &ApiClient, id: i64) -> Result<Vec<PortfolioItem>, ApiError> {
    let body = client
        .get(&format!("/freelancers/{}/portfolio", id))
        .await?;
    Ok(unwrap_list(body)
        .iter()
        .map(normalize::portfolio_item)
        .collect())
}

/// Upload a profile picture; returns the updated profile with the new
/// storage-relative `profile_picture` path.
pub async fn upload_profile_picture(
    client: &ApiClient,
    id: i64,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<FreelancerProfile, ApiError> {
    let body = client
        .upload(
            &format!("/freelancers/{}/profile-picture", id),
            "image",
            file_name,
            bytes,
        )
        .await?;
    Ok(normalize::freelancer(&unwrap_data(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::fake_client;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_builds_query_and_normalizes() {
        let (client, transport) = fake_client();
        transport.push_data(json!([
            {"FreelancerID": 1, "FirstName": "Jane", "LastName": "Doe"},
            {"id": 2, "first_name": "Sam", "last_name": "Lee"},
        ]));

        let filter = FreelancerFilter {
            search: Some("a@x.com".to_string()),
            ..Default::default()
        };
        let results = list(&client, &filter).await.unwrap();

        assert_eq!(transport.calls()[0].path, "/freelancers?search=a%40x.com");
        assert_eq!(results.len(), 2);
        // Both naming conventions land in the same shape
        assert_eq!(results[0].first_name, "Jane");
        assert_eq!(results[1].first_name, "Sam");
        assert_eq!(results[1].id, 2);
    }

    #[tokio::test]
    async fn test_create_sends_pascal_case_payload() {
        let (client, transport) = fake_client();
        transport.push_data(json!({"FreelancerID": 9, "FirstName": "Jane",
                                   "LastName": "Doe", "Email": "a@x.com"}));

        let payload = NewFreelancer {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "a@x.com".to_string(),
            ..Default::default()
        };
        let created = create(&client, &payload).await.unwrap();

        let sent = transport.calls()[0].body.clone().unwrap();
        assert_eq!(sent["FirstName"], "Jane");
        assert_eq!(sent["Email"], "a@x.com");
        assert!(sent.get("Bio").is_none(), "absent optionals are omitted");
        assert_eq!(created.id, 9);
    }

    #[tokio::test]
    async fn test_get_not_found_propagates() {
        let (client, transport) = fake_client();
        transport.push_err(ApiError::NotFound("Freelancer not found".into()));

        let err = get(&client, 999).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_upload_targets_profile_picture_route() {
        let (client, transport) = fake_client();
        transport.push_data(json!({"FreelancerID": 1, "ProfilePicture": "/storage/p.png"}));

        let updated = upload_profile_picture(&client, 1, "p.png", vec![0xFF, 0xD8])
            .await
            .unwrap();

        assert_eq!(transport.calls()[0].method, "UPLOAD:image");
        assert_eq!(transport.calls()[0].path, "/freelancers/1/profile-picture");
        assert_eq!(updated.profile_picture.as_deref(), Some("/storage/p.png"));
    }
}
