//! Identity resolution
//!
//! Auth accounts and marketplace profiles live in separate tables with
//! no foreign key between them. The only shared attribute is email, so
//! the resolver searches by email and creates a minimal profile when no
//! row matches. Reads always precede creation; a second resolution for
//! the same account is a pure lookup.

use tracing::{debug, info};

use crate::api::{employers, freelancers};
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{Account, EmployerProfile, FreelancerProfile};

/// Split a display name on the first whitespace run.
///
/// Single-token names land whole in the first slot. Empty names get the
/// caller's fallback so the server-required column is never blank.
fn split_name(name: &str, fallback: &str) -> (String, String) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return (fallback.to_string(), String::new());
    }
    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}

fn email_matches(candidate: &str, wanted: &str) -> bool {
    candidate.trim().eq_ignore_ascii_case(wanted)
}

fn require_email(account: &Account) -> Result<String, ApiError> {
    let email = account.email.trim();
    if email.is_empty() {
        return Err(ApiError::ProfileResolution("account has no email".into()));
    }
    Ok(email.to_string())
}

/// Wrap non-auth failures so callers see one resolution error. Auth
/// failures pass through untouched; they must keep forcing logout.
fn resolution_err(err: ApiError) -> ApiError {
    match err {
        ApiError::Auth(_) => err,
        other => ApiError::ProfileResolution(other.to_string()),
    }
}

/// Find the freelancer profile backing an auth account, creating a
/// minimal one on first resolution.
pub async fn resolve_freelancer(
    client: &ApiClient,
    account: &Account,
) -> Result<FreelancerProfile, ApiError> {
    let email = require_email(account)?;

    let filter = freelancers::FreelancerFilter {
        search: Some(email.clone()),
        ..Default::default()
    };
    let candidates = freelancers::list(client, &filter)
        .await
        .map_err(resolution_err)?;

    // Server search is substring-based; require an exact email match.
    // First match in server order wins.
    if let Some(found) = candidates.into_iter().find(|f| email_matches(&f.email, &email)) {
        debug!(freelancer_id = found.id, "resolved existing freelancer profile");
        return Ok(found);
    }

    let (first_name, last_name) = split_name(&account.name, "Freelancer");
    let created = freelancers::create(
        client,
        &freelancers::NewFreelancer {
            first_name,
            last_name,
            email,
            ..Default::default()
        },
    )
    .await
    .map_err(resolution_err)?;
    info!(freelancer_id = created.id, "created freelancer profile for account");
    Ok(created)
}

/// Find the employer profile backing an auth account, creating a
/// minimal one on first resolution.
pub async fn resolve_employer(
    client: &ApiClient,
    account: &Account,
) -> Result<EmployerProfile, ApiError> {
    let email = require_email(account)?;

    let filter = employers::EmployerFilter {
        search: Some(email.clone()),
        ..Default::default()
    };
    let candidates = employers::list(client, &filter)
        .await
        .map_err(resolution_err)?;

    if let Some(found) = candidates.into_iter().find(|e| email_matches(&e.email, &email)) {
        debug!(employer_id = found.id, "resolved existing employer profile");
        return Ok(found);
    }

    let name = account.name.trim();
    let created = employers::create(
        client,
        &employers::NewEmployer {
            company_name: if name.is_empty() {
                "Company".to_string()
            } else {
                name.to_string()
            },
            email,
            contact_person_name: None,
            phone_number: None,
            address: None,
            industry_type: None,
        },
    )
    .await
    .map_err(resolution_err)?;
    info!(employer_id = created.id, "created employer profile for account");
    Ok(created)
}
