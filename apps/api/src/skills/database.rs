//! Known-skills database and keyword detection over free text.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;
use tracing::info;

const BUNDLED_SKILLS: &str = include_str!("../../data/skills_database.json");

#[derive(Debug, Error)]
pub enum SkillsDbError {
    #[error("failed to read skills database {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("skills database is not a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to build matcher for skill '{skill}': {source}")]
    Pattern { skill: String, source: regex::Error },
}

struct SkillPattern {
    skill: String,
    pattern: Regex,
}

/// The list of skill tokens the extractors are allowed to report.
///
/// Tokens are stored lower-cased and de-duplicated, in file order.
pub struct SkillsDatabase {
    entries: Vec<SkillPattern>,
    index: HashSet<String>,
}

impl SkillsDatabase {
    pub fn from_skills<I, S>(skills: I) -> Result<Self, SkillsDbError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut index = HashSet::new();

        for skill in skills {
            let skill = skill.as_ref().trim().to_lowercase();
            if skill.is_empty() || !index.insert(skill.clone()) {
                continue;
            }
            let pattern = build_pattern(&skill).map_err(|source| SkillsDbError::Pattern {
                skill: skill.clone(),
                source,
            })?;
            entries.push(SkillPattern { skill, pattern });
        }

        Ok(Self { entries, index })
    }

    pub fn from_json(raw: &str) -> Result<Self, SkillsDbError> {
        let skills: Vec<String> = serde_json::from_str(raw)?;
        Self::from_skills(skills)
    }

    pub fn load(path: &Path) -> Result<Self, SkillsDbError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SkillsDbError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self::from_json(&raw)?;
        info!("Loaded {} skills from {}", db.len(), path.display());
        Ok(db)
    }

    /// The list shipped with the binary (`data/skills_database.json`).
    pub fn bundled() -> Result<Self, SkillsDbError> {
        Self::from_json(BUNDLED_SKILLS)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Case-insensitive exact membership check for a single token.
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains(&token.trim().to_lowercase())
    }

    /// Returns every known skill mentioned in `text`, in database order.
    pub fn detect_skills(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| e.pattern.is_match(text))
            .map(|e| e.skill.clone())
            .collect()
    }
}

/// A skill must be delimited by non-word characters (or the text edge) on both sides.
/// `\b` is not enough for tokens such as "c++" or "c#" that end in punctuation.
/// Inner spaces also accept a hyphen: "machine learning" matches "Machine-Learning".
fn build_pattern(skill: &str) -> Result<Regex, regex::Error> {
    let body = skill
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"(?:\s+|-)");
    Regex::new(&format!(r"(?i)(?:^|[^\w]){body}(?:$|[^\w])"))
}
