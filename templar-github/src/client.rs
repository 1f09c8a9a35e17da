//! Blocking GitHub REST v3 client over ureq.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

use crate::error::ApiError;
use crate::types::{FileWrite, RemoteFile, RepoHost, RepoInfo};

/// Production API root; tests substitute a local address.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("templar/", env!("CARGO_PKG_VERSION"));
const CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Token-authenticated client. Construct once and pass to every operation.
pub struct GitHubClient {
    agent: ureq::Agent,
    token: String,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Client against a non-default API root (e.g. GitHub Enterprise, or a
    /// local fixture server in tests).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(CALL_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        GitHubClient {
            agent,
            token: token.into(),
            base_url,
        }
    }

    fn repo_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}", self.base_url, owner, repo)
    }

    fn contents_url(&self, owner: &str, repo: &str, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url,
            owner,
            repo,
            encode_path(path)
        )
    }

    fn get(&self, url: &str) -> Result<ureq::Response, ureq::Error> {
        self.agent
            .get(url)
            .set("Authorization", &format!("token {}", self.token))
            .set("Accept", ACCEPT)
            .call()
    }
}

/// Percent-encode each segment of a repository-relative path, keeping the
/// slashes that separate directories.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Wire shape of `GET /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

/// GitHub wraps stored base64 at 60 columns; strip all whitespace before
/// decoding.
fn decode_content(path: &str, raw: &str) -> Result<Vec<u8>, ApiError> {
    let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    BASE64
        .decode(compact.as_bytes())
        .map_err(|e| ApiError::Content {
            path: path.to_string(),
            source: e,
        })
}

/// Request body for `PUT /repos/{owner}/{repo}/contents/{path}`.
///
/// The `sha` key is present only for updates; the Contents API treats a
/// sha-less request as a create.
fn write_payload(write: &FileWrite) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "message": write.message,
        "content": BASE64.encode(&write.content),
        "committer": &write.committer,
        "branch": write.branch,
    });
    if let Some(sha) = &write.sha {
        payload["sha"] = serde_json::Value::String(sha.clone());
    }
    payload
}

fn api_err(url: &str, err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(status, _) => ApiError::Status {
            status,
            url: url.to_string(),
        },
        ureq::Error::Transport(transport) => ApiError::Transport {
            url: url.to_string(),
            source: Box::new(transport),
        },
    }
}

impl RepoHost for GitHubClient {
    fn repo_info(&self, owner: &str, repo: &str) -> Result<RepoInfo, ApiError> {
        let url = self.repo_url(owner, repo);
        tracing::debug!("GET {url}");
        let response = self.get(&url).map_err(|e| api_err(&url, e))?;
        response
            .into_json::<RepoInfo>()
            .map_err(|e| ApiError::Body { url, source: e })
    }

    fn fetch_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<Option<RemoteFile>, ApiError> {
        let url = format!(
            "{}?ref={}",
            self.contents_url(owner, repo, path),
            urlencoding::encode(branch)
        );
        tracing::debug!("GET {url}");
        let response = match self.get(&url) {
            Ok(response) => response,
            Err(ureq::Error::Status(404, _)) => return Ok(None),
            Err(e) => return Err(api_err(&url, e)),
        };
        let body: ContentsResponse = response
            .into_json()
            .map_err(|e| ApiError::Body { url: url.clone(), source: e })?;
        let content = decode_content(path, &body.content)?;
        Ok(Some(RemoteFile {
            content,
            sha: body.sha,
        }))
    }

    fn put_file(&self, owner: &str, repo: &str, write: &FileWrite) -> Result<(), ApiError> {
        let url = self.contents_url(owner, repo, &write.path);
        tracing::debug!("PUT {url}");
        self.agent
            .put(&url)
            .set("Authorization", &format!("token {}", self.token))
            .set("Accept", ACCEPT)
            .send_json(write_payload(write))
            .map_err(|e| api_err(&url, e))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
