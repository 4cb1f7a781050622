//! Free-text skill normalization.

/// Trims and lower-cases every item, dropping the ones that end up empty.
///
/// Order and duplicates are preserved, so `clean_skills(clean_skills(x)) == clean_skills(x)`.
pub fn clean_skills<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Splits a comma-separated input line ("Python, SQL, Machine Learning") into clean skills.
pub fn parse_skill_list(input: &str) -> Vec<String> {
    clean_skills(input.split(','))
}

/// Removes repeated skills, keeping the first occurrence.
pub fn dedup_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    skills
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}
