//! Notification endpoints
//!
//! Notifications are read-mostly: the client lists them newest-first
//! and flips `read_at` optimistically through [`ReadState`] so the
//! unread badge updates before the server confirms.

use crate::error::ApiError;
use crate::http::{unwrap_list, ApiClient};
use crate::normalize;
use crate::toggle::{ReadOutcome, ReadState};
use crate::types::Notification;

pub async fn list(client: &ApiClient) -> Result<Vec<Notification>, ApiError> {
    let body = client.get("/notifications").await?;
    Ok(unwrap_list(body)
        .iter()
        .map(normalize::notification)
        .collect())
}

pub async fn mark_read(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .post_empty(&format!("/notifications/{}/read", id))
        .await?;
    Ok(())
}

pub async fn mark_all_read(client: &ApiClient) -> Result<(), ApiError> {
    client.post_empty("/notifications/read-all").await?;
    Ok(())
}

/// Optimistically mark one notification read.
///
/// Already-read and in-flight notifications are left alone without a
/// server call. On failure the state reverts to unread and the error
/// propagates.
pub async fn mark_read_optimistic(
    client: &ApiClient,
    state: &mut ReadState,
    id: i64,
) -> Result<(), ApiError> {
    match state.begin() {
        ReadOutcome::Busy | ReadOutcome::AlreadyRead => return Ok(()),
        ReadOutcome::Started => {}
    }
    match mark_read(client, id).await {
        Ok(()) => {
            state.commit_success();
            Ok(())
        }
        Err(err) => {
            state.commit_failure();
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::fake_client;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_orders_and_parses_read_at() {
        let (client, transport) = fake_client();
        transport.push_ok(json!({
            "success": true,
            "data": [
                {"id": 2, "user_id": 5, "title": "Interest received",
                 "message": "Someone is interested in your project",
                 "read_at": null, "created_at": "2026-08-29T10:00:00Z"},
                {"id": 1, "user_id": 5, "title": "Welcome",
                 "message": "Welcome to Freeport",
                 "read_at": "2026-08-28T09:00:00Z", "created_at": "2026-08-28T08:00:00Z"}
            ],
            "count": 2
        }));

        let items = list(&client).await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(!items[0].is_read());
        assert!(items[1].is_read());
    }

    #[tokio::test]
    async fn test_mark_read_optimistic_skips_read_items() {
        let (client, transport) = fake_client();

        let mut state = ReadState::Read;
        mark_read_optimistic(&client, &mut state, 2).await.unwrap();

        assert_eq!(transport.call_count(), 0);
        assert!(state.is_read());
    }

    #[tokio::test]
    async fn test_mark_read_optimistic_reverts_on_failure() {
        let (client, transport) = fake_client();
        transport.push_err(ApiError::Network("offline".into()));

        let mut state = ReadState::Unread;
        let err = mark_read_optimistic(&client, &mut state, 2).await.unwrap_err();

        assert!(err.is_retryable());
        assert_eq!(state, ReadState::Unread);
    }

    #[tokio::test]
    async fn test_mark_all_read_posts_once() {
        let (client, transport) = fake_client();
        transport.push_ok(json!({"success": true}));

        mark_all_read(&client).await.unwrap();

        assert_eq!(transport.calls()[0].path, "/notifications/read-all");
        assert_eq!(transport.calls()[0].method, "POST");
    }
}
