// Skill normalization and the known-skills database used by the extractors.

pub mod database;
pub mod normalize;

pub use database::SkillsDatabase;
pub use normalize::{clean_skills, dedup_skills, parse_skill_list};
