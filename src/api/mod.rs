//! Typed endpoint services
//!
//! One module per API resource, written as free functions over an
//! [`crate::http::ApiClient`]. Responses come back as normalized view
//! models; request payloads are typed structs serialized with the field
//! names the server validates (PascalCase columns for profile-owned
//! entities, snake_case for projects).

pub mod auth;
pub mod availability;
pub mod bookmarks;
pub mod dashboard;
pub mod education;
pub mod employers;
pub mod freelancers;
pub mod notifications;
pub mod portfolio;
pub mod projects;
pub mod skills;

/// Build a `?a=b&c=d` query string, skipping absent params. Empty when
/// nothing is set, so it can be appended to a path unconditionally.
pub(crate) fn query_string(pairs: &[(&str, Option<String>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            any = true;
        }
    }
    if any {
        format!("?{}", serializer.finish())
    } else {
        String::new()
    }
}
