//! GitHub extraction: a user's public repositories → languages, topics and README
//! mentions, filtered through the skills database.
//!
//! Calls are sequential. A failing repository is logged and skipped; a user the API
//! does not know (any non-200 on the repo listing) yields no skills rather than an error.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::skills::SkillsDatabase;

const ACCEPT_V3: &str = "application/vnd.github.v3+json";
/// Topics are only returned under the preview media type.
const ACCEPT_TOPICS: &str = "application/vnd.github.mercy-preview+json";
const USER_AGENT: &str = concat!("advisor-api/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 20;
const MAX_USERNAME_LEN: usize = 39;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").expect("username pattern"));

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("'{0}' is not a valid GitHub username")]
    InvalidUsername(String),

    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct Repo {
    name: String,
    owner: Owner,
}

#[derive(Debug, Deserialize)]
struct Owner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct Topics {
    #[serde(default)]
    names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Readme {
    download_url: Option<String>,
}

/// 1–39 characters, alphanumerics separated by single hyphens.
pub fn validate_username(username: &str) -> Result<&str, GithubError> {
    let username = username.trim();
    if username.len() > MAX_USERNAME_LEN || !USERNAME_RE.is_match(username) {
        return Err(GithubError::InvalidUsername(username.to_string()));
    }
    Ok(username)
}

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, GithubError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Known skills found across all of `username`'s repositories, de-duplicated in
    /// discovery order.
    pub async fn extract_skills(
        &self,
        username: &str,
        skills_db: &SkillsDatabase,
    ) -> Result<Vec<String>, GithubError> {
        let username = validate_username(username)?;

        let response = self
            .get(&format!("{}/users/{username}/repos", self.base_url), ACCEPT_V3)
            .send()
            .await?;
        if response.status() != StatusCode::OK {
            info!(status = %response.status(), "GitHub user {username} has no readable repos");
            return Ok(Vec::new());
        }
        let repos: Vec<Repo> = response.json().await?;

        let mut found = Vec::new();
        for repo in &repos {
            if let Err(e) = self.scan_repo(repo, skills_db, &mut found).await {
                warn!("Skipping repo {}/{}: {e}", repo.owner.login, repo.name);
            }
        }

        info!(
            repos = repos.len(),
            skills = found.len(),
            "Extracted GitHub skills for {username}"
        );
        Ok(found)
    }

    async fn scan_repo(
        &self,
        repo: &Repo,
        skills_db: &SkillsDatabase,
        found: &mut Vec<String>,
    ) -> Result<(), GithubError> {
        let repo_url = format!("{}/repos/{}/{}", self.base_url, repo.owner.login, repo.name);

        let languages: BTreeMap<String, serde_json::Value> = self
            .get(&format!("{repo_url}/languages"), ACCEPT_V3)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        for language in languages.keys() {
            let token = match language.to_lowercase().as_str() {
                "jupyter notebook" => "python".to_string(),
                "go" => "golang".to_string(),
                other => other.to_string(),
            };
            keep_known(token, skills_db, found);
        }

        let topics: Topics = self
            .get(&format!("{repo_url}/topics"), ACCEPT_TOPICS)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        for topic in topics.names {
            let topic = topic.to_lowercase();
            // topics are slugs: "machine-learning"
            if skills_db.contains(&topic) {
                keep_known(topic, skills_db, found);
            } else {
                keep_known(topic.replace('-', " "), skills_db, found);
            }
        }

        let readme = self
            .get(&format!("{repo_url}/readme"), ACCEPT_V3)
            .send()
            .await?;
        if readme.status() == StatusCode::OK {
            let readme: Readme = readme.json().await?;
            if let Some(url) = readme.download_url {
                // raw content host; the API token is not sent there
                let text = self
                    .client
                    .get(&url)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?;
                for skill in skills_db.detect_skills(&text) {
                    keep_known(skill, skills_db, found);
                }
            }
        } else {
            debug!("No README for {}/{}", repo.owner.login, repo.name);
        }

        Ok(())
    }

    fn get(&self, url: &str, accept: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url).header(header::ACCEPT, accept);
        match &self.token {
            Some(token) => request.header(header::AUTHORIZATION, format!("token {token}")),
            None => request,
        }
    }
}

fn keep_known(token: String, skills_db: &SkillsDatabase, found: &mut Vec<String>) {
    if skills_db.contains(&token) && !found.contains(&token) {
        found.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, State},
        http::{HeaderMap, StatusCode as AxumStatus},
        response::IntoResponse,
        routing::get,
        Json, Router,
    };
    use serde_json::json;

    async fn repos(Path(user): Path<String>, headers: HeaderMap) -> axum::response::Response {
        match user.as_str() {
            "octocat" => Json(json!([
                {"name": "hello", "owner": {"login": "octocat"}},
                {"name": "broken", "owner": {"login": "octocat"}}
            ]))
            .into_response(),
            "private-dev"
                if headers.get("authorization").and_then(|v| v.to_str().ok())
                    == Some("token s3cret") =>
            {
                Json(json!([{"name": "hello", "owner": {"login": "private-dev"}}])).into_response()
            }
            _ => (AxumStatus::NOT_FOUND, Json(json!({"message": "Not Found"}))).into_response(),
        }
    }

    async fn languages(Path((_, repo)): Path<(String, String)>) -> axum::response::Response {
        if repo == "broken" {
            return (AxumStatus::INTERNAL_SERVER_ERROR, "boom").into_response();
        }
        Json(json!({"Rust": 200, "Jupyter Notebook": 100, "Go": 50, "Brainfuck": 1})).into_response()
    }

    async fn topics(headers: HeaderMap) -> Json<serde_json::Value> {
        let preview = headers.get("accept").and_then(|v| v.to_str().ok()) == Some(ACCEPT_TOPICS);
        if preview {
            Json(json!({"names": ["docker", "machine-learning", "hacktoberfest"]}))
        } else {
            Json(json!({"names": []}))
        }
    }

    async fn readme(
        State(base): State<String>,
        Path((owner, repo)): Path<(String, String)>,
    ) -> Json<serde_json::Value> {
        Json(json!({"download_url": format!("{base}/raw/{owner}/{repo}")}))
    }

    async fn raw(headers: HeaderMap) -> axum::response::Response {
        if headers.contains_key("authorization") {
            return (AxumStatus::FORBIDDEN, "credentials sent to raw host").into_response();
        }
        "# Hello\nBuilt with SQL and C++, deployed with Docker.".into_response()
    }

    async fn spawn_fake_github() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let app = Router::new()
            .route("/users/:user/repos", get(repos))
            .route("/repos/:owner/:repo/languages", get(languages))
            .route("/repos/:owner/:repo/topics", get(topics))
            .route("/repos/:owner/:repo/readme", get(readme))
            .route("/raw/:owner/:repo", get(raw))
            .with_state(base.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        base
    }

    fn db() -> SkillsDatabase {
        SkillsDatabase::from_skills([
            "python",
            "golang",
            "rust",
            "docker",
            "machine learning",
            "sql",
            "c++",
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_languages_topics_and_readme() {
        let base = spawn_fake_github().await;
        let client = GithubClient::new(base, None).unwrap();
        let skills = client.extract_skills("octocat", &db()).await.unwrap();
        assert_eq!(
            skills,
            vec!["golang", "python", "rust", "docker", "machine learning", "sql", "c++"]
        );
    }

    #[tokio::test]
    async fn test_unknown_user_yields_no_skills() {
        let base = spawn_fake_github().await;
        let client = GithubClient::new(base, None).unwrap();
        let skills = client.extract_skills("ghost", &db()).await.unwrap();
        assert!(skills.is_empty());
    }

    #[tokio::test]
    async fn test_token_is_sent_as_authorization() {
        let base = spawn_fake_github().await;
        let anonymous = GithubClient::new(base.clone(), None).unwrap();
        assert!(anonymous
            .extract_skills("private-dev", &db())
            .await
            .unwrap()
            .is_empty());

        let authed = GithubClient::new(base, Some("s3cret".to_string())).unwrap();
        let skills = authed.extract_skills("private-dev", &db()).await.unwrap();
        assert!(skills.contains(&"rust".to_string()));
        // README text is only served when no token reaches the raw host
        assert!(skills.contains(&"sql".to_string()), "{skills:?}");
    }

    #[tokio::test]
    async fn test_invalid_username_is_rejected_before_any_request() {
        let client = GithubClient::new("http://127.0.0.1:9", None).unwrap();
        let err = client.extract_skills("bad--name", &db()).await.unwrap_err();
        assert!(matches!(err, GithubError::InvalidUsername(_)));
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("octocat").is_ok());
        assert!(validate_username("a-b-c").is_ok());
        assert!(validate_username(&"a".repeat(39)).is_ok());
        assert!(validate_username(&"a".repeat(40)).is_err());
        assert!(validate_username("").is_err());
        assert!(validate_username("-lead").is_err());
        assert!(validate_username("trail-").is_err());
        assert!(validate_username("double--dash").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("../etc").is_err());
    }
}
