//! Dashboard assembly
//!
//! One call per dashboard: resolve the profile, fan out the child
//! fetches concurrently, attach what came back, and score completeness.
//! A failed child degrades to empty with a warning so the dashboard
//! still renders; only a failed profile resolution fails the load.

use tokio::join;
use tracing::warn;

use crate::api::{availability, education, employers, freelancers, projects};
use crate::completion::{self, ProfileCompletion};
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::identity;
use crate::types::{
    Account, Bookmark, EmployerProfile, FreelancerProfile, Project, ProjectStatus,
};

/// Everything the freelancer dashboard renders in one pass.
#[derive(Debug, Clone)]
pub struct FreelancerDashboard {
    pub profile: FreelancerProfile,
    pub completion: ProfileCompletion,
}

/// Everything the employer dashboard renders in one pass.
#[derive(Debug, Clone)]
pub struct EmployerDashboard {
    pub profile: EmployerProfile,
    pub bookmarks: Vec<Bookmark>,
    pub projects: Vec<Project>,
    pub project_counts: ProjectCounts,
    pub completion: ProfileCompletion,
}

/// Project tallies by status for the employer's stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectCounts {
    pub open: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl ProjectCounts {
    fn tally(projects: &[Project]) -> Self {
        let mut counts = Self::default();
        for project in projects {
            match project.status {
                ProjectStatus::Open => counts.open += 1,
                ProjectStatus::InProgress => counts.in_progress += 1,
                ProjectStatus::Completed => counts.completed += 1,
                ProjectStatus::Closed => {}
            }
        }
        counts
    }
}

fn or_empty<T>(section: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            warn!(section, %err, "dashboard section failed, rendering empty");
            Vec::new()
        }
    }
}

/// Load the freelancer dashboard for a signed-in account.
pub async fn freelancer(
    client: &ApiClient,
    account: &Account,
) -> Result<FreelancerDashboard, ApiError> {
    let mut profile = identity::resolve_freelancer(client, account).await?;
    let id = profile.id;

    let (skills, portfolio, education, availability) = join!(
        freelancers::skills_of(client, id),
        freelancers::portfolio_of(client, id),
        education::list(client),
        availability::list(client),
    );

    profile.skills = or_empty("skills", skills);
    profile.portfolio = or_empty("portfolio", portfolio);
    profile.education = or_empty("education", education)
        .into_iter()
        .filter(|e| e.freelancer_id == id)
        .collect();
    profile.availability = or_empty("availability", availability)
        .into_iter()
        .find(|a| a.freelancer_id == id);

    let completion = completion::freelancer_completion(&profile);
    Ok(FreelancerDashboard {
        profile,
        completion,
    })
}

/// Load the employer dashboard for a signed-in account.
pub async fn employer(
    client: &ApiClient,
    account: &Account,
) -> Result<EmployerDashboard, ApiError> {
    let profile = identity::resolve_employer(client, account).await?;
    let id = profile.id;

    let filter = projects::ProjectFilter {
        employer_id: Some(id),
        ..Default::default()
    };
    let (bookmarks, project_rows) = join!(
        employers::bookmarks_of(client, id),
        projects::list(client, &filter),
    );

    let bookmarks = or_empty("bookmarks", bookmarks);
    let project_rows = or_empty("projects", project_rows);
    let project_counts = ProjectCounts::tally(&project_rows);
    let completion = completion::employer_completion(&profile);

    Ok(EmployerDashboard {
        profile,
        bookmarks,
        projects: project_rows,
        project_counts,
        completion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::fake_client;
    use crate::types::Role;
    use serde_json::json;

    fn account(email: &str) -> Account {
        Account {
            id: 5,
            name: "Jane Doe".to_string(),
            email: email.to_string(),
            user_type: Role::Freelancer,
            avatar: None,
        }
    }

    #[tokio::test]
    async fn test_freelancer_dashboard_attaches_children() {
        let (client, transport) = fake_client();
        // resolver lookup, then skills, portfolio, education, availability
        transport.push_data(json!([{"FreelancerID": 11, "FirstName": "Jane",
                                    "Email": "jane@x.com", "Bio": "Builder",
                                    "Location": "Berlin"}]));
        transport.push_data(json!([
            {"SkillID": 1, "FreelancerID": 11, "SkillName": "Rust"},
            {"SkillID": 2, "FreelancerID": 11, "SkillName": "React"},
            {"SkillID": 3, "FreelancerID": 11, "SkillName": "SQL"},
        ]));
        transport.push_data(json!([{"PortfolioID": 4, "FreelancerID": 11}]));
        transport.push_data(json!([
            {"EducationID": 5, "FreelancerID": 11},
            {"EducationID": 6, "FreelancerID": 99},
        ]));
        transport.push_data(json!([{"AvailabilityID": 7, "FreelancerID": 11,
                                    "ActivityStatus": "Active"}]));

        let dashboard = freelancer(&client, &account("jane@x.com")).await.unwrap();

        assert_eq!(dashboard.profile.skills.len(), 3);
        assert_eq!(dashboard.profile.education.len(), 1, "other rows filtered out");
        assert!(dashboard.profile.availability.is_some());
        assert!(dashboard.completion.is_complete());
    }

    #[tokio::test]
    async fn test_failed_child_degrades_to_empty() {
        let (client, transport) = fake_client();
        transport.push_data(json!([{"FreelancerID": 11, "Email": "jane@x.com"}]));
        transport.push_err(ApiError::Network("offline".into()));
        transport.push_data(json!([]));
        transport.push_data(json!([]));
        transport.push_data(json!([]));

        let dashboard = freelancer(&client, &account("jane@x.com")).await.unwrap();

        assert!(dashboard.profile.skills.is_empty());
        assert!(!dashboard.completion.is_complete());
    }

    #[tokio::test]
    async fn test_failed_resolution_fails_whole_load() {
        let (client, transport) = fake_client();
        transport.push_err(ApiError::Network("offline".into()));

        let err = freelancer(&client, &account("jane@x.com")).await.unwrap_err();
        assert!(matches!(err, ApiError::ProfileResolution(_)));
    }

    #[tokio::test]
    async fn test_employer_dashboard_tallies_projects() {
        let (client, transport) = fake_client();
        transport.push_data(json!([{"EmployerID": 7, "CompanyName": "Acme",
                                    "Email": "ops@acme.com",
                                    "ContactPersonName": "Ada",
                                    "Address": "1 Main St",
                                    "CompanyDescription": "We make anvils"}]));
        transport.push_data(json!([{"SavedID": 1, "EmployerID": 7, "FreelancerID": 3}]));
        transport.push_data(json!([
            {"id": 1, "employer_id": 7, "status": "open"},
            {"id": 2, "employer_id": 7, "status": "open"},
            {"id": 3, "employer_id": 7, "status": "in_progress"},
            {"id": 4, "employer_id": 7, "status": "completed"},
        ]));

        let dashboard = employer(&client, &account("ops@acme.com")).await.unwrap();

        assert_eq!(dashboard.bookmarks.len(), 1);
        assert_eq!(
            dashboard.project_counts,
            ProjectCounts {
                open: 2,
                in_progress: 1,
                completed: 1
            }
        );
        assert!(dashboard.completion.is_complete());
    }
}
