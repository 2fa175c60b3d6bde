//! View-Model Normalizer
//!
//! The API emits the same logical record in two naming conventions:
//! PascalCase from the resource controllers (`FirstName`, `SkillName`)
//! and snake_case from nested relations and newer endpoints
//! (`first_name`, `skill_name`). Per canonical field we keep an ordered
//! list of accepted source keys; the first present, non-null value wins,
//! else the documented default. The output always has every canonical
//! field, so consumers render without per-field null checks.
//!
//! Numeric quirks handled here once: Laravel decimal casts serialize as
//! strings (`"3.80"`), so numeric fields accept numbers and numeric
//! strings, defaulting (never NaN) when unparsable. Delimited free text
//! (technologies, talent areas) splits on commas and newlines, trimmed,
//! empties dropped.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::types::{
    AvailabilityRecord, Bookmark, EducationRecord, EmployerProfile, FreelancerProfile,
    Notification, PortfolioItem, Project, ProjectStatus, Skill,
};

/// Entity kinds the normalizer recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Freelancer,
    Employer,
    Skill,
    PortfolioItem,
    EducationRecord,
    AvailabilityRecord,
    Project,
    Bookmark,
    Notification,
}

/// A normalized record of any kind. Pages that know their kind call the
/// per-kind functions directly; this enum serves generic consumers.
#[derive(Debug, Clone)]
pub enum ViewModel {
    Freelancer(Box<FreelancerProfile>),
    Employer(Box<EmployerProfile>),
    Skill(Skill),
    PortfolioItem(PortfolioItem),
    EducationRecord(EducationRecord),
    AvailabilityRecord(AvailabilityRecord),
    Project(Project),
    Bookmark(Box<Bookmark>),
    Notification(Notification),
}

/// Normalize a raw record of the given kind.
pub fn normalize(kind: EntityKind, raw: &Value) -> ViewModel {
    match kind {
        EntityKind::Freelancer => ViewModel::Freelancer(Box::new(freelancer(raw))),
        EntityKind::Employer => ViewModel::Employer(Box::new(employer(raw))),
        EntityKind::Skill => ViewModel::Skill(skill(raw)),
        EntityKind::PortfolioItem => ViewModel::PortfolioItem(portfolio_item(raw)),
        EntityKind::EducationRecord => ViewModel::EducationRecord(education(raw)),
        EntityKind::AvailabilityRecord => ViewModel::AvailabilityRecord(availability(raw)),
        EntityKind::Project => ViewModel::Project(project(raw)),
        EntityKind::Bookmark => ViewModel::Bookmark(Box::new(bookmark(raw))),
        EntityKind::Notification => ViewModel::Notification(notification(raw)),
    }
}

// ---------------------------------------------------------------------------
// Field pickers
// ---------------------------------------------------------------------------

/// First present, non-null value among the accepted source keys.
fn pick<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .find(|v| !v.is_null())
}

fn str_or(raw: &Value, keys: &[&str], default: &str) -> String {
    pick(raw, keys)
        .and_then(value_as_string)
        .unwrap_or_else(|| default.to_string())
}

/// Optional string; empty strings count as absent.
fn opt_str(raw: &Value, keys: &[&str]) -> Option<String> {
    pick(raw, keys)
        .and_then(value_as_string)
        .filter(|s| !s.is_empty())
}

fn int_or(raw: &Value, keys: &[&str], default: i64) -> i64 {
    pick(raw, keys).and_then(value_as_i64).unwrap_or(default)
}

fn opt_int(raw: &Value, keys: &[&str]) -> Option<i64> {
    pick(raw, keys).and_then(value_as_i64)
}

/// Optional float; unparsable values become `None`, never NaN.
fn opt_float(raw: &Value, keys: &[&str]) -> Option<f64> {
    pick(raw, keys)
        .and_then(value_as_f64)
        .filter(|f| f.is_finite())
}

fn opt_datetime(raw: &Value, keys: &[&str]) -> Option<DateTime<Utc>> {
    pick(raw, keys)
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<DateTime<Utc>>().ok())
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Split comma/newline-delimited free text, trimming and dropping empties.
pub fn split_delimited(text: &str) -> Vec<String> {
    text.split(|c| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A list field that may arrive as a JSON array or as delimited text.
fn string_list(raw: &Value, keys: &[&str]) -> Vec<String> {
    match pick(raw, keys) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(value_as_string)
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(text)) => split_delimited(text),
        _ => Vec::new(),
    }
}

fn record_list(raw: &Value, keys: &[&str]) -> Vec<Value> {
    match pick(raw, keys) {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Per-kind normalizers
// ---------------------------------------------------------------------------

/// Normalize a raw freelancer record, including embedded relations.
pub fn freelancer(raw: &Value) -> FreelancerProfile {
    let skills = record_list(raw, &["skills", "Skills"])
        .iter()
        .map(skill)
        .collect();
    let portfolio = record_list(raw, &["portfolio_work", "portfolioWork", "Portfolio"])
        .iter()
        .map(portfolio_item)
        .collect();
    let education_records = record_list(raw, &["education", "Education"])
        .iter()
        .map(education)
        .collect();
    let availability_record = pick(raw, &["availability", "Availability"])
        .filter(|v| v.is_object())
        .map(availability);

    FreelancerProfile {
        id: int_or(raw, &["FreelancerID", "freelancer_id", "id"], 0),
        first_name: str_or(raw, &["FirstName", "first_name"], ""),
        last_name: str_or(raw, &["LastName", "last_name"], ""),
        email: str_or(raw, &["Email", "email"], ""),
        phone_number: str_or(raw, &["PhoneNumber", "phone_number"], ""),
        profile_picture: opt_str(raw, &["ProfilePicture", "profile_picture"]),
        bio: str_or(raw, &["Bio", "bio"], ""),
        location: str_or(raw, &["Location", "location"], ""),
        skills,
        portfolio,
        education: education_records,
        availability: availability_record,
    }
}

/// Normalize a raw employer record. Descriptive fields the employer has
/// not filled in carry the `Not specified` sentinel the profile pages show.
pub fn employer(raw: &Value) -> EmployerProfile {
    EmployerProfile {
        id: int_or(raw, &["EmployerID", "employer_id", "id"], 0),
        company_name: str_or(raw, &["CompanyName", "company_name"], ""),
        contact_person_name: str_or(raw, &["ContactPersonName", "contact_person_name"], ""),
        email: str_or(raw, &["Email", "email"], ""),
        phone_number: str_or(raw, &["PhoneNumber", "phone_number"], ""),
        company_logo: opt_str(raw, &["CompanyLogo", "company_logo"]),
        company_website: str_or(raw, &["CompanyWebsite", "company_website"], ""),
        address: str_or(raw, &["Address", "address"], ""),
        industry_type: str_or(raw, &["IndustryType", "industry_type"], "Not specified"),
        company_description: str_or(
            raw,
            &["CompanyDescription", "company_description"],
            "Not specified",
        ),
        company_size: str_or(raw, &["CompanySize", "company_size"], "Not specified"),
        founded: str_or(raw, &["Founded", "founded"], "Not specified"),
        talent_headline: str_or(raw, &["TalentHeadline", "talent_headline"], ""),
        talent_areas: string_list(raw, &["TalentAreas", "talent_areas"]),
        talent_why_us: str_or(raw, &["TalentWhyUs", "talent_why_us"], ""),
    }
}

pub fn skill(raw: &Value) -> Skill {
    Skill {
        id: int_or(raw, &["SkillID", "skill_id", "id"], 0),
        freelancer_id: int_or(raw, &["FreelancerID", "freelancer_id"], 0),
        skill_name: str_or(raw, &["SkillName", "skill_name"], ""),
        proficiency_level: str_or(raw, &["ProficiencyLevel", "proficiency_level"], "Beginner"),
        years_of_experience: int_or(raw, &["YearsOfExperience", "years_of_experience"], 0),
        certification: str_or(raw, &["Certification", "certification"], "No"),
    }
}

pub fn portfolio_item(raw: &Value) -> PortfolioItem {
    PortfolioItem {
        id: int_or(raw, &["PortfolioID", "portfolio_id", "id"], 0),
        freelancer_id: int_or(raw, &["FreelancerID", "freelancer_id"], 0),
        project_title: str_or(raw, &["ProjectTitle", "project_title"], ""),
        project_description: str_or(raw, &["ProjectDescription", "project_description"], ""),
        technologies_used: string_list(raw, &["TechnologiesUsed", "technologies_used"]),
        completion_date: opt_str(raw, &["CompletionDate", "completion_date"]),
        project_url: str_or(raw, &["ProjectURL", "project_url"], ""),
        project_file: opt_str(raw, &["ProjectFile", "project_file"]),
    }
}

pub fn education(raw: &Value) -> EducationRecord {
    EducationRecord {
        id: int_or(raw, &["EducationID", "education_id", "id"], 0),
        freelancer_id: int_or(raw, &["FreelancerID", "freelancer_id"], 0),
        degree: str_or(raw, &["Degree", "degree"], ""),
        major: str_or(raw, &["Major", "major", "FieldOfStudy", "field_of_study"], ""),
        institution_name: str_or(raw, &["InstitutionName", "institution_name"], ""),
        graduation_year: opt_int(raw, &["GraduationYear", "graduation_year"])
            .map(|y| y as i32),
        gpa: opt_float(raw, &["GPA", "gpa"]),
    }
}

pub fn availability(raw: &Value) -> AvailabilityRecord {
    AvailabilityRecord {
        id: int_or(raw, &["AvailabilityID", "availability_id", "id"], 0),
        freelancer_id: int_or(raw, &["FreelancerID", "freelancer_id"], 0),
        activity_status: str_or(raw, &["ActivityStatus", "activity_status"], "Not set"),
        current_projects_count: int_or(
            raw,
            &["CurrentProjectsCount", "current_projects_count"],
            0,
        ),
        weekly_hours_available: int_or(
            raw,
            &["WeeklyHoursAvailable", "weekly_hours_available"],
            0,
        ),
        next_availability_date: opt_str(
            raw,
            &["NextAvailabilityDate", "next_availability_date"],
        ),
    }
}

/// Normalize a raw project listing. Project columns are snake_case at the
/// source; the PascalCase variants cover older payloads.
pub fn project(raw: &Value) -> Project {
    Project {
        id: int_or(raw, &["id", "ProjectID", "project_id"], 0),
        employer_id: int_or(raw, &["EmployerID", "employer_id"], 0),
        title: str_or(raw, &["title", "Title"], ""),
        description: str_or(raw, &["description", "Description"], ""),
        budget: opt_float(raw, &["budget", "Budget"]),
        duration: str_or(raw, &["duration", "Duration"], ""),
        job_type: str_or(raw, &["job_type", "JobType"], ""),
        experience_needed: str_or(raw, &["experience_needed", "ExperienceNeeded"], ""),
        skills_required: string_list(raw, &["skills_required", "SkillsRequired"]),
        interest_count: int_or(raw, &["interest_count", "InterestCount"], 0),
        status: ProjectStatus::parse(&str_or(raw, &["status", "Status"], "open")),
    }
}

pub fn bookmark(raw: &Value) -> Bookmark {
    let embedded = pick(raw, &["freelancer", "Freelancer"])
        .filter(|v| v.is_object())
        .map(freelancer);

    Bookmark {
        id: int_or(raw, &["SavedID", "SavedBookmarkedID", "saved_id", "id"], 0),
        employer_id: int_or(raw, &["EmployerID", "employer_id"], 0),
        freelancer_id: int_or(raw, &["FreelancerID", "freelancer_id"], 0),
        saved_date: opt_str(raw, &["SavedDate", "saved_date"]),
        freelancer: embedded,
    }
}

pub fn notification(raw: &Value) -> Notification {
    Notification {
        id: int_or(raw, &["id", "NotificationID"], 0),
        title: str_or(raw, &["title", "Title"], ""),
        message: str_or(raw, &["message", "Message"], ""),
        data: pick(raw, &["data"]).cloned().unwrap_or(Value::Null),
        read_at: opt_datetime(raw, &["read_at", "ReadAt"]),
        created_at: opt_datetime(raw, &["created_at", "CreatedAt"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skill_naming_convention_invariance() {
        let pascal = json!({"SkillID": 5, "SkillName": "React", "YearsOfExperience": 3});
        let snake = json!({"id": 5, "skill_name": "React", "years_of_experience": 3});
        assert_eq!(skill(&pascal), skill(&snake));
    }

    #[test]
    fn test_skill_defaults_applied() {
        let raw = json!({"SkillName": "React", "YearsOfExperience": 3});
        let vm = skill(&raw);
        assert_eq!(vm.skill_name, "React");
        assert_eq!(vm.proficiency_level, "Beginner");
        assert_eq!(vm.years_of_experience, 3);
        assert_eq!(vm.certification, "No");
    }

    #[test]
    fn test_null_source_value_falls_through() {
        // Null under the first key must not shadow the fallback key
        let raw = json!({"ProficiencyLevel": null, "proficiency_level": "Expert"});
        assert_eq!(skill(&raw).proficiency_level, "Expert");
    }

    #[test]
    fn test_freelancer_empty_record_is_complete() {
        let vm = freelancer(&json!({}));
        assert_eq!(vm.id, 0);
        assert_eq!(vm.first_name, "");
        assert_eq!(vm.bio, "");
        assert!(vm.skills.is_empty());
        assert!(vm.availability.is_none());
    }

    #[test]
    fn test_freelancer_embeds_relations_both_namings() {
        let raw = json!({
            "FreelancerID": 9,
            "FirstName": "Jane",
            "skills": [{"skill_name": "Rust"}],
            "portfolio_work": [{"ProjectTitle": "CLI tool"}],
            "education": [{"Degree": "BSc", "GPA": "3.80"}],
            "availability": {"activity_status": "Active", "weekly_hours_available": 20},
        });
        let vm = freelancer(&raw);
        assert_eq!(vm.skills[0].skill_name, "Rust");
        assert_eq!(vm.portfolio[0].project_title, "CLI tool");
        assert_eq!(vm.education[0].gpa, Some(3.8));
        let availability = vm.availability.unwrap();
        assert_eq!(availability.activity_status, "Active");
        assert_eq!(availability.weekly_hours_available, 20);
    }

    #[test]
    fn test_gpa_unparsable_is_none_not_nan() {
        assert_eq!(education(&json!({"GPA": "n/a"})).gpa, None);
        assert_eq!(education(&json!({"GPA": null})).gpa, None);
        assert_eq!(education(&json!({"gpa": 3.5})).gpa, Some(3.5));
    }

    #[test]
    fn test_budget_accepts_decimal_string() {
        // Laravel decimal:2 casts serialize as strings
        assert_eq!(project(&json!({"budget": "1500.50"})).budget, Some(1500.5));
        assert_eq!(project(&json!({"budget": "TBD"})).budget, None);
    }

    #[test]
    fn test_split_delimited_trims_and_drops_empties() {
        assert_eq!(
            split_delimited("React, TypeScript,,\n Rust ,"),
            vec!["React", "TypeScript", "Rust"]
        );
        assert!(split_delimited("  ").is_empty());
    }

    #[test]
    fn test_skills_required_accepts_array_or_string() {
        let from_array = project(&json!({"skills_required": ["React", "Rust"]}));
        let from_string = project(&json!({"skills_required": "React, Rust"}));
        assert_eq!(from_array.skills_required, from_string.skills_required);
    }

    #[test]
    fn test_project_status_fallback_to_open() {
        assert_eq!(project(&json!({"status": "weird"})).status, ProjectStatus::Open);
        assert_eq!(
            project(&json!({"status": "in_progress"})).status,
            ProjectStatus::InProgress
        );
    }

    #[test]
    fn test_employer_sentinels() {
        let vm = employer(&json!({"CompanyName": "Acme"}));
        assert_eq!(vm.company_name, "Acme");
        assert_eq!(vm.industry_type, "Not specified");
        assert_eq!(vm.company_size, "Not specified");
        assert_eq!(vm.talent_areas, Vec::<String>::new());
    }

    #[test]
    fn test_employer_talent_areas_split() {
        let vm = employer(&json!({"TalentAreas": "Design, Engineering\nData"}));
        assert_eq!(vm.talent_areas, vec!["Design", "Engineering", "Data"]);
    }

    #[test]
    fn test_bookmark_id_aliases() {
        assert_eq!(bookmark(&json!({"SavedID": 3})).id, 3);
        assert_eq!(bookmark(&json!({"SavedBookmarkedID": 4})).id, 4);
        assert_eq!(bookmark(&json!({"id": 5})).id, 5);
    }

    #[test]
    fn test_bookmark_embedded_freelancer() {
        let raw = json!({"SavedID": 1, "EmployerID": 2, "FreelancerID": 3,
                         "freelancer": {"FreelancerID": 3, "FirstName": "Jane"}});
        let vm = bookmark(&raw);
        assert_eq!(vm.freelancer.unwrap().first_name, "Jane");
    }

    #[test]
    fn test_notification_read_state() {
        let unread = notification(&json!({"id": 1, "title": "t", "read_at": null}));
        assert!(!unread.is_read());
        let read = notification(&json!({"id": 1, "read_at": "2026-01-05T10:00:00Z"}));
        assert!(read.is_read());
    }

    #[test]
    fn test_dispatcher_matches_direct_call() {
        let raw = json!({"SkillName": "React"});
        match normalize(EntityKind::Skill, &raw) {
            ViewModel::Skill(vm) => assert_eq!(vm, skill(&raw)),
            other => panic!("wrong kind: {:?}", other),
        }
    }
}
