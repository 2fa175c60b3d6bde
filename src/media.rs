//! Media URL resolution
//!
//! Upload endpoints return storage-relative paths (`/storage/...`);
//! those resolve against the API origin — the base URL minus its
//! trailing `/api` segment. Absolute URLs pass through untouched.

/// Origin part of an API base URL: strips a trailing `/api` (with or
/// without a trailing slash).
pub fn api_origin(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    trimmed
        .strip_suffix("/api")
        .unwrap_or(trimmed)
        .to_string()
}

/// Resolve a media path from the backend into a loadable URL.
pub fn resolve_media_url(base_url: &str, path: Option<&str>) -> Option<String> {
    let path = path?.trim();
    if path.is_empty() {
        return None;
    }

    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }

    let normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    Some(format!("{}{}", api_origin(base_url), normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8000/api";

    #[test]
    fn test_absolute_url_passes_through() {
        assert_eq!(
            resolve_media_url(BASE, Some("https://cdn.example.com/x.png")).as_deref(),
            Some("https://cdn.example.com/x.png")
        );
    }

    #[test]
    fn test_storage_path_resolves_against_origin() {
        assert_eq!(
            resolve_media_url(BASE, Some("/storage/avatars/1.png")).as_deref(),
            Some("http://localhost:8000/storage/avatars/1.png")
        );
        // Missing leading slash is normalized
        assert_eq!(
            resolve_media_url(BASE, Some("storage/avatars/1.png")).as_deref(),
            Some("http://localhost:8000/storage/avatars/1.png")
        );
    }

    #[test]
    fn test_empty_and_none_resolve_to_none() {
        assert_eq!(resolve_media_url(BASE, None), None);
        assert_eq!(resolve_media_url(BASE, Some("")), None);
        assert_eq!(resolve_media_url(BASE, Some("   ")), None);
    }

    #[test]
    fn test_origin_handles_trailing_slash() {
        assert_eq!(api_origin("http://localhost:8000/api/"), "http://localhost:8000");
        assert_eq!(api_origin("http://localhost:8000"), "http://localhost:8000");
    }
}
