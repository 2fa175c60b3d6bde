//! Bookmark endpoints and the bookmark toggle
//!
//! Bookmarks join an employer to a freelancer. The uniqueness
//! expectation (one bookmark per pair) is not enforced server-side, so
//! the toggle machine's pending-click suppression is what keeps a
//! double-click from creating duplicates.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{unwrap_data, unwrap_list, ApiClient};
use crate::normalize;
use crate::toggle::{self, Direction, ToggleState};
use crate::types::Bookmark;

/// Creation payload for `POST /saved-bookmarked`.
#[derive(Debug, Clone, Serialize)]
pub struct NewBookmark {
    #[serde(rename = "EmployerID")]
    pub employer_id: i64,
    #[serde(rename = "FreelancerID")]
    pub freelancer_id: i64,
}

pub async fn list(client: &ApiClient) -> Result<Vec<Bookmark>, ApiError> {
    let body = client.get("/saved-bookmarked").await?;
    Ok(unwrap_list(body).iter().map(normalize::bookmark).collect())
}

pub async fn create(client: &ApiClient, payload: &NewBookmark) -> Result<Bookmark, ApiError> {
    let body = client
        .post("/saved-bookmarked", serde_json::to_value(payload)?)
        .await?;
    Ok(normalize::bookmark(&unwrap_data(body)))
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/saved-bookmarked/{}", id)).await?;
    Ok(())
}

/// Optimistically toggle an employer's bookmark on a freelancer.
///
/// Returns the resulting visible membership. While a previous toggle on
/// the same machine is in flight the call is a no-op. On failure the
/// machine rolls back and the error propagates for the caller to toast.
pub async fn toggle(
    client: &ApiClient,
    state: &mut ToggleState,
    employer_id: i64,
    freelancer_id: i64,
) -> Result<bool, ApiError> {
    let row_id = state.id();
    toggle::drive(state, |direction| async move {
        match direction {
            Direction::Set => {
                let bookmark = create(
                    client,
                    &NewBookmark {
                        employer_id,
                        freelancer_id,
                    },
                )
                .await?;
                Ok(Some(bookmark.id))
            }
            Direction::Unset => {
                match row_id {
                    Some(id) => delete(client, id).await?,
                    // Hydration never saw a row id; nothing to delete.
                    None => tracing::warn!(freelancer_id, "bookmark unset with unknown row id"),
                }
                Ok(None)
            }
        }
    })
    .await
}
