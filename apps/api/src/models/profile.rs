use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 99;
pub const MAX_EXPERIENCE_YEARS: i32 = 50;
pub const DEFAULT_AGE: i32 = 25;
pub const UNSPECIFIED_GOAL: &str = "Not specified";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    PreferNotToSay,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Undergraduate,
    #[default]
    Graduate,
    Postgraduate,
    Phd,
    Other,
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Graduate => "Graduate",
            EducationLevel::Postgraduate => "Postgraduate",
            EducationLevel::Phd => "PhD",
            EducationLevel::Other => "Other",
        })
    }
}

/// A user's profile for one advisory session. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Signed so out-of-range input reaches `validate` instead of failing to parse.
    pub age: i32,
    pub gender: Gender,
    pub education: EducationLevel,
    /// Years of professional experience.
    pub experience: i32,
    pub career_goal: String,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: DEFAULT_AGE,
            gender: Gender::default(),
            education: EducationLevel::default(),
            experience: 0,
            career_goal: UNSPECIFIED_GOAL.to_string(),
            interests: Vec::new(),
            skills: Vec::new(),
        }
    }
}

impl Profile {
    /// A default profile carrying only a name and a skill list, as produced by the extractors.
    pub fn with_skills(name: impl Into<String>, skills: Vec<String>) -> Self {
        Self {
            name: name.into(),
            skills,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(AppError::Validation(format!(
                "age must be between {MIN_AGE} and {MAX_AGE}"
            )));
        }
        if !(0..=MAX_EXPERIENCE_YEARS).contains(&self.experience) {
            return Err(AppError::Validation(format!(
                "experience must be between 0 and {MAX_EXPERIENCE_YEARS} years"
            )));
        }
        Ok(())
    }

    /// Label/value pairs in display order, lists comma-joined.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Age", self.age.to_string()),
            ("Gender", self.gender.to_string()),
            ("Education", self.education.to_string()),
            ("Experience", format!("{} years", self.experience)),
            ("Career Goal", self.career_goal.clone()),
            ("Interests", self.interests.join(", ")),
            ("Skills", self.skills.join(", ")),
        ]
    }
}

/// A ready-made profile for trying the advisor without typing one in.
#[derive(Debug, Clone, Serialize)]
pub struct SampleProfile {
    pub label: &'static str,
    pub profile: Profile,
}

pub fn sample_profiles() -> Vec<SampleProfile> {
    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    vec![
        SampleProfile {
            label: "Alice (Data Scientist)",
            profile: Profile {
                name: "Alice".to_string(),
                age: 24,
                gender: Gender::Female,
                education: EducationLevel::Graduate,
                experience: 1,
                career_goal: "Data Scientist".to_string(),
                interests: vec![],
                skills: skills(&["python", "sql", "statistics"]),
            },
        },
        SampleProfile {
            label: "Bob (AI Engineer)",
            profile: Profile {
                name: "Bob".to_string(),
                age: 28,
                gender: Gender::Male,
                education: EducationLevel::Postgraduate,
                experience: 4,
                career_goal: "AI Engineer".to_string(),
                interests: vec![],
                skills: skills(&["python", "deep learning", "tensorflow"]),
            },
        },
        SampleProfile {
            label: "Charlie (Career Switcher)",
            profile: Profile {
                name: "Charlie".to_string(),
                age: 35,
                gender: Gender::Male,
                education: EducationLevel::Postgraduate,
                experience: 10,
                career_goal: "Product Manager".to_string(),
                interests: vec![],
                skills: skills(&["communication", "excel", "strategy"]),
            },
        },
    ]
}
