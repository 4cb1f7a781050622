//! Career matching: set-overlap scoring of a skill list against the role catalog.
//!
//! For each role:
//!   match   = ⌊100 × |skills ∩ required| / |required|⌋
//!   missing = required − skills (catalog order)
//!
//! Results are stable-sorted by descending match, so ties keep catalog order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::catalog::Role;

/// How well a skill list covers one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub role: String,
    /// 0 – 100
    #[serde(rename = "match")]
    pub percent: u8,
    pub about: String,
    pub missing: Vec<String>,
}

/// Scores `skills` against every role in `catalog`.
pub fn match_careers<S: AsRef<str>>(skills: &[S], catalog: &[Role]) -> Vec<Match> {
    let user: HashSet<String> = skills
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .collect();

    let mut matches: Vec<Match> = catalog.iter().map(|role| score_role(&user, role)).collect();
    // sort_by is stable
    matches.sort_by(|a, b| b.percent.cmp(&a.percent));
    matches
}

fn score_role(user: &HashSet<String>, role: &Role) -> Match {
    let (have, missing): (Vec<&str>, Vec<&str>) = role
        .skills
        .iter()
        .copied()
        .partition(|s| user.contains(&s.to_lowercase()));

    Match {
        role: role.name.to_string(),
        percent: overlap_percent(have.len(), role.skills.len()),
        about: role.about.to_string(),
        missing: missing.into_iter().map(String::from).collect(),
    }
}

/// Integer percentage, rounded down. A role without requirements scores 0.
fn overlap_percent(have: usize, required: usize) -> u8 {
    if required == 0 {
        return 0;
    }
    ((have.min(required) * 100) / required) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::catalog::CATALOG;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn find<'a>(matches: &'a [Match], role: &str) -> &'a Match {
        matches.iter().find(|m| m.role == role).unwrap()
    }

    #[test]
    fn test_data_scientist_example() {
        let matches = match_careers(&skills(&["python", "sql", "statistics"]), CATALOG);
        let ds = find(&matches, "Data Scientist");
        assert_eq!(ds.percent, 75);
        assert_eq!(ds.missing, vec!["machine learning"]);
        assert_eq!(matches[0].role, "Data Scientist");
    }

    #[test]
    fn test_percentage_rounds_down() {
        // DevOps 2 of 5 = 40, Cloud Architect 1 of 5 = 20, Cybersecurity 1 of 4 = 25.
        let matches = match_careers(&skills(&["linux", "aws"]), CATALOG);
        assert_eq!(find(&matches, "DevOps Engineer").percent, 40);
        assert_eq!(find(&matches, "Cloud Architect").percent, 20);
        assert_eq!(find(&matches, "Cybersecurity Analyst").percent, 25);

        let roles = [Role {
            name: "Thirds",
            skills: &["a", "b", "c"],
            about: "",
        }];
        let matches = match_careers(&skills(&["a"]), &roles);
        assert_eq!(matches[0].percent, 33);
        let matches = match_careers(&skills(&["a", "b"]), &roles);
        assert_eq!(matches[0].percent, 66);
    }

    #[test]
    fn test_results_sorted_descending_and_stable() {
        let matches = match_careers(&skills(&["python"]), CATALOG);
        for pair in matches.windows(2) {
            assert!(pair[0].percent >= pair[1].percent);
        }
        // Ties keep catalog order: Data Scientist precedes Backend Developer (both 25).
        let ds = matches.iter().position(|m| m.role == "Data Scientist").unwrap();
        let be = matches.iter().position(|m| m.role == "Backend Developer").unwrap();
        assert!(ds < be);
    }

    #[test]
    fn test_missing_is_required_minus_skills() {
        let user = skills(&["react", "CSS", "rust"]);
        let matches = match_careers(&user, CATALOG);
        for role in CATALOG {
            let m = find(&matches, role.name);
            let expected: Vec<&str> = role
                .skills
                .iter()
                .copied()
                .filter(|s| !user.iter().any(|u| u.to_lowercase() == *s))
                .collect();
            assert_eq!(m.missing, expected, "{}", role.name);
            let have = role.skills.len() - expected.len();
            assert_eq!(m.percent as usize, have * 100 / role.skills.len());
        }
    }

    #[test]
    fn test_skills_compared_case_insensitively() {
        let matches = match_careers(&skills(&[" JavaScript", "REACT ", "css", "Html"]), CATALOG);
        assert_eq!(matches[0].role, "Frontend Developer");
        assert_eq!(matches[0].percent, 100);
        assert!(matches[0].missing.is_empty());
    }

    #[test]
    fn test_empty_skills_score_zero_everywhere() {
        let matches = match_careers::<String>(&[], CATALOG);
        assert_eq!(matches.len(), CATALOG.len());
        assert!(matches.iter().all(|m| m.percent == 0));
        assert_eq!(matches[0].role, CATALOG[0].name);
    }

    #[test]
    fn test_role_without_requirements_does_not_divide_by_zero() {
        let roles = [Role {
            name: "Empty",
            skills: &[],
            about: "",
        }];
        let matches = match_careers(&skills(&["python"]), &roles);
        assert_eq!(matches[0].percent, 0);
    }

    #[test]
    fn test_duplicate_user_skills_do_not_inflate_score() {
        let matches = match_careers(&skills(&["python", "python", "PYTHON"]), CATALOG);
        assert_eq!(find(&matches, "Data Scientist").percent, 25);
    }

    #[test]
    fn test_match_serializes_percent_as_match() {
        let m = Match {
            role: "X".into(),
            percent: 50,
            about: "".into(),
            missing: vec![],
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["match"], 50);
    }
}
