//! Combining a résumé profile with skills pulled from GitHub.

use crate::extract::resume::UNKNOWN_NAME;
use crate::models::Profile;
use crate::skills::dedup_skills;

/// Résumé + GitHub → the résumé profile with the union of both skill lists (résumé
/// skills first). GitHub alone → a default profile named `fallback_name`.
/// Returns `None` when neither source produced anything.
pub fn merge_profiles(
    resume: Option<Profile>,
    github_skills: Vec<String>,
    fallback_name: Option<&str>,
) -> Option<Profile> {
    match resume {
        Some(mut profile) => {
            let mut skills = std::mem::take(&mut profile.skills);
            skills.extend(github_skills);
            profile.skills = dedup_skills(skills);
            Some(profile)
        }
        None if !github_skills.is_empty() => {
            let name = fallback_name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or(UNKNOWN_NAME);
            Some(Profile::with_skills(name, dedup_skills(github_skills)))
        }
        None => None,
    }
}
