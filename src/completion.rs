//! Profile-completion scoring
//!
//! Pure checklist over a resolved profile: which onboarding steps are
//! done, and the rounded percentage the dashboard progress bar shows.

use crate::types::{EmployerProfile, FreelancerProfile};

/// Freelancers need at least this many skills for the step to count.
const MIN_SKILLS: usize = 3;

/// One checklist step with its completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionStep {
    pub key: &'static str,
    pub label: &'static str,
    pub done: bool,
}

/// Checklist result for a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCompletion {
    pub steps: Vec<CompletionStep>,
    pub completed: usize,
    pub total: usize,
    /// Rounded to the nearest integer.
    pub percent: u8,
}

impl ProfileCompletion {
    fn from_steps(steps: Vec<CompletionStep>) -> Self {
        let total = steps.len();
        let completed = steps.iter().filter(|s| s.done).count();
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };
        Self {
            steps,
            completed,
            total,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.percent == 100
    }
}

/// Score a freelancer profile (children must already be attached —
/// the dashboard assembly does that).
pub fn freelancer_completion(profile: &FreelancerProfile) -> ProfileCompletion {
    let has_availability = profile
        .availability
        .as_ref()
        .is_some_and(|a| !a.activity_status.is_empty() && a.activity_status != "Not set");

    let steps = vec![
        CompletionStep {
            key: "basic_info",
            label: "Basic Information",
            done: !profile.first_name.is_empty() && !profile.email.is_empty(),
        },
        CompletionStep {
            key: "bio",
            label: "Professional Bio",
            done: !profile.bio.is_empty(),
        },
        CompletionStep {
            key: "location",
            label: "Location",
            done: !profile.location.is_empty(),
        },
        CompletionStep {
            key: "skills",
            label: "Skills",
            done: profile.skills.len() >= MIN_SKILLS,
        },
        CompletionStep {
            key: "portfolio",
            label: "Portfolio",
            done: !profile.portfolio.is_empty(),
        },
        CompletionStep {
            key: "education",
            label: "Education",
            done: !profile.education.is_empty(),
        },
        CompletionStep {
            key: "availability",
            label: "Availability",
            done: has_availability,
        },
    ];

    ProfileCompletion::from_steps(steps)
}

/// Score an employer profile.
pub fn employer_completion(profile: &EmployerProfile) -> ProfileCompletion {
    let steps = vec![
        CompletionStep {
            key: "basic_info",
            label: "Company Information",
            done: !profile.company_name.is_empty() && !profile.contact_person_name.is_empty(),
        },
        CompletionStep {
            key: "description",
            label: "Company Description",
            done: profile.company_description != "Not specified",
        },
        CompletionStep {
            key: "location",
            label: "Location",
            done: !profile.address.is_empty(),
        },
    ];

    ProfileCompletion::from_steps(steps)
}
