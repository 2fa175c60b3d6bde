//! Canonical domain types
//!
//! View models are the normalized in-memory shape consumers render from.
//! Every field is always present after normalization — string fields carry
//! documented defaults instead of `Option`, so pages render without
//! per-field null checks. Only genuinely-absent things (media paths,
//! dates, GPA, budget) stay optional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of the marketplace an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Freelancer,
    Employer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Freelancer => "freelancer",
            Role::Employer => "employer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity, as returned by `GET /auth/user`.
///
/// Immutable within a session. Distinct from the domain profile — the
/// identity resolver maps an `Account` to its `FreelancerProfile` or
/// `EmployerProfile` by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_role")]
    pub user_type: Role,
    /// Role-specific avatar the server attaches (profile picture or logo).
    #[serde(default, alias = "profile_picture")]
    pub avatar: Option<String>,
}

fn default_role() -> Role {
    Role::Freelancer
}

/// Project lifecycle status. Unknown values fall back to `Open`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Open,
    InProgress,
    Completed,
    Closed,
}

impl ProjectStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "in_progress" => ProjectStatus::InProgress,
            "completed" => ProjectStatus::Completed,
            "closed" => ProjectStatus::Closed,
            _ => ProjectStatus::Open,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Open => "open",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Closed => "closed",
        }
    }
}

/// Canonical freelancer profile, including any embedded child collections
/// the payload carried (absent relations normalize to empty).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FreelancerProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub profile_picture: Option<String>,
    pub bio: String,
    pub location: String,
    pub skills: Vec<Skill>,
    pub portfolio: Vec<PortfolioItem>,
    pub education: Vec<EducationRecord>,
    pub availability: Option<AvailabilityRecord>,
}

impl FreelancerProfile {
    /// Display name, for avatars and headers.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        name.trim().to_string()
    }
}

/// Canonical employer profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployerProfile {
    pub id: i64,
    pub company_name: String,
    pub contact_person_name: String,
    pub email: String,
    pub phone_number: String,
    pub company_logo: Option<String>,
    pub company_website: String,
    pub address: String,
    pub industry_type: String,
    pub company_description: String,
    pub company_size: String,
    pub founded: String,
    pub talent_headline: String,
    /// Free-text talent areas, split on commas/newlines.
    pub talent_areas: Vec<String>,
    pub talent_why_us: String,
}

/// A freelancer skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub freelancer_id: i64,
    pub skill_name: String,
    /// `Beginner` / `Intermediate` / `Expert`; defaults to `Beginner`.
    pub proficiency_level: String,
    pub years_of_experience: i64,
    /// `Yes` / `No`; defaults to `No`.
    pub certification: String,
}

/// A portfolio entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: i64,
    pub freelancer_id: i64,
    pub project_title: String,
    pub project_description: String,
    /// Comma/newline-delimited in the payload, split and trimmed here.
    pub technologies_used: Vec<String>,
    pub completion_date: Option<String>,
    pub project_url: String,
    pub project_file: Option<String>,
}

/// An education entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub id: i64,
    pub freelancer_id: i64,
    pub degree: String,
    pub major: String,
    pub institution_name: String,
    pub graduation_year: Option<i32>,
    /// Parsed from number or numeric string; never NaN.
    pub gpa: Option<f64>,
}

/// A freelancer's availability record (at most one per freelancer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub id: i64,
    pub freelancer_id: i64,
    /// Defaults to `Not set` when the freelancer never configured it.
    pub activity_status: String,
    pub current_projects_count: i64,
    pub weekly_hours_available: i64,
    pub next_availability_date: Option<String>,
}

/// An employer's project listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub budget: Option<f64>,
    pub duration: String,
    pub job_type: String,
    pub experience_needed: String,
    pub skills_required: Vec<String>,
    /// Monotonically non-decreasing; bumped by freelancer interest actions.
    pub interest_count: i64,
    pub status: ProjectStatus,
}

/// An employer→freelancer bookmark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub employer_id: i64,
    pub freelancer_id: i64,
    pub saved_date: Option<String>,
    /// Embedded freelancer record when the endpoint eager-loads it.
    pub freelancer: Option<FreelancerProfile>,
}

/// A notification owned by an account (not a profile).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    /// Opaque payload the server attaches (freelancer id, project id, ...).
    pub data: serde_json::Value,
    /// One-way unread → read transition.
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        let json = serde_json::to_string(&Role::Employer).unwrap();
        assert_eq!(json, "\"employer\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Employer);
    }

    #[test]
    fn test_project_status_parse_fallback() {
        assert_eq!(ProjectStatus::parse("in_progress"), ProjectStatus::InProgress);
        assert_eq!(ProjectStatus::parse("archived"), ProjectStatus::Open);
        assert_eq!(ProjectStatus::parse(""), ProjectStatus::Open);
    }

    #[test]
    fn test_account_accepts_profile_picture_alias() {
        let account: Account = serde_json::from_str(
            r#"{"id": 7, "name": "Jane Doe", "email": "a@x.com",
                "user_type": "freelancer", "profile_picture": "/storage/p.png"}"#,
        )
        .unwrap();
        assert_eq!(account.avatar.as_deref(), Some("/storage/p.png"));
    }

    #[test]
    fn test_full_name_trims_missing_last_name() {
        let profile = FreelancerProfile {
            first_name: "Prince".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.full_name(), "Prince");
    }
}
