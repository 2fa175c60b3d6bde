//! Authentication endpoints
//!
//! Auth routes return their own top-level shape (`token`, `user_info`,
//! `user`) rather than the resource envelope. A successful login feeds
//! the shared [`crate::session::Session`]; logout clears it even when
//! the server call fails, so a dead server never traps the user in a
//! stale session.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{Account, Role};

/// Payload for `POST /auth/register`. Registration also pre-creates the
/// role-specific profile server-side.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub user_type: Role,
}

/// Register a new account. The server does not return a token;
/// callers follow up with [`login`].
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<(), ApiError> {
    client
        .post("/auth/register", serde_json::to_value(request)?)
        .await?;
    Ok(())
}

/// Login, store the bearer token + role in the session, and return the
/// authenticated account.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<Account, ApiError> {
    let body = client
        .post(
            "/auth/login",
            serde_json::json!({ "email": email, "password": password }),
        )
        .await?;

    let token = body
        .get("token")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Parse("login response missing token".to_string()))?
        .to_string();

    let account: Account = serde_json::from_value(
        body.get("user_info")
            .cloned()
            .ok_or_else(|| ApiError::Parse("login response missing user_info".to_string()))?,
    )?;

    client.session().login(token, account.user_type);
    tracing::debug!(role = %account.user_type, "logged in");

    Ok(account)
}

/// Fetch the authenticated account (`GET /auth/user`).
pub async fn current_user(client: &ApiClient) -> Result<Account, ApiError> {
    let body = client.get("/auth/user").await?;
    let user = body
        .get("user")
        .cloned()
        .ok_or_else(|| ApiError::Parse("user response missing user".to_string()))?;
    Ok(serde_json::from_value(user)?)
}

/// Revoke the server-side token and clear the local session. The local
/// session is cleared regardless of the server outcome.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    let result = client.post_empty("/auth/logout").await;
    client.session().clear();
    result.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::fake_client;
    use serde_json::json;

    fn login_body() -> Value {
        json!({
            "response_code": 200,
            "status": "success",
            "message": "Login successful",
            "user_info": {
                "id": 12,
                "name": "Jane Doe",
                "email": "a@x.com",
                "user_type": "freelancer",
            },
            "token": "1|secrettoken",
            "token_type": "Bearer",
        })
    }

    #[tokio::test]
    async fn test_login_stores_token_and_role() {
        let (client, transport) = fake_client();
        transport.push_ok(login_body());

        let account = login(&client, "a@x.com", "hunter22").await.unwrap();

        assert_eq!(account.id, 12);
        assert_eq!(account.user_type, Role::Freelancer);
        assert_eq!(client.session().token().as_deref(), Some("1|secrettoken"));
        assert_eq!(client.session().user_type(), Some(Role::Freelancer));
    }

    #[tokio::test]
    async fn test_login_without_token_is_parse_error() {
        let (client, transport) = fake_client();
        transport.push_ok(json!({"status": "error"}));

        let err = login(&client, "a@x.com", "nope").await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_on_server_error() {
        let (client, transport) = fake_client();
        client
            .session()
            .login("tok".to_string(), Role::Employer);
        transport.push_err(ApiError::Network("offline".into()));

        let result = logout(&client).await;
        assert!(result.is_err());
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_current_user_reads_user_key() {
        let (client, transport) = fake_client();
        transport.push_ok(json!({
            "response_code": 200,
            "user": {
                "id": 3,
                "name": "Acme",
                "email": "hr@acme.com",
                "user_type": "employer",
                "profile_picture": "/storage/logo.png",
            },
        }));

        let account = current_user(&client).await.unwrap();
        assert_eq!(account.user_type, Role::Employer);
        assert_eq!(account.avatar.as_deref(), Some("/storage/logo.png"));
    }
}
