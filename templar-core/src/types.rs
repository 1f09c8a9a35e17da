//! Configuration types for the Templar sync pipeline.
//!
//! Field names match the JSON configuration document (camelCase on the wire).
//! Everything here is immutable once loaded; the pipeline never writes the
//! configuration back.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A target GitHub repository and whether it participates in syncing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
    /// Repositories with this flag unset are listed but never touched.
    pub update_template_files: bool,
}

impl RepoRef {
    /// `owner/repo`, the identity used in logs and reports.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Commit author identity used for every create/update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Committer {
    pub name: String,
    pub email: String,
}

impl Default for Committer {
    fn default() -> Self {
        Committer {
            name: "Templar Bot".to_string(),
            email: "no-reply@templar.dev".to_string(),
        }
    }
}

/// Root of the Templar JSON configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub repositories: Vec<RepoRef>,
    /// Relative paths naming both the local template source and the remote
    /// destination, e.g. `LICENSE.md`.
    #[serde(default)]
    pub template_files: Vec<String>,
    /// Branch that receives the synced files.
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default)]
    pub committer: Committer,
    /// Template source directory, resolved relative to the configuration file
    /// unless absolute. See [`crate::config::template_dir`].
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,
}

fn default_branch() -> String {
    "master".to_string()
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}

impl Config {
    /// Repositories that actually take part in syncing.
    pub fn enabled_repositories(&self) -> impl Iterator<Item = &RepoRef> {
        self.repositories.iter().filter(|r| r.update_template_files)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_slug() {
        let repo = RepoRef {
            owner: "atlauncher".to_string(),
            repo: "meta".to_string(),
            update_template_files: true,
        };
        assert_eq!(repo.slug(), "atlauncher/meta");
    }

    #[test]
    fn minimal_config_gets_defaults() {
        let config: Config = serde_json::from_str(r#"{"repositories": []}"#).expect("parse");
        assert_eq!(config.branch, "master");
        assert_eq!(config.template_dir, PathBuf::from("templates"));
        assert_eq!(config.committer.name, "Templar Bot");
        assert!(config.template_files.is_empty());
    }

    #[test]
    fn camel_case_fields_deserialize() {
        let config: Config = serde_json::from_str(
            r#"{
                "repositories": [
                    {"owner": "a", "repo": "one", "updateTemplateFiles": true},
                    {"owner": "a", "repo": "two", "updateTemplateFiles": false}
                ],
                "templateFiles": ["LICENSE.md"],
                "branch": "main"
            }"#,
        )
        .expect("parse");
        assert_eq!(config.repositories.len(), 2);
        assert_eq!(config.template_files, vec!["LICENSE.md".to_string()]);
        assert_eq!(config.branch, "main");
    }

    #[test]
    fn enabled_repositories_filters_flag() {
        let config: Config = serde_json::from_str(
            r#"{
                "repositories": [
                    {"owner": "a", "repo": "on", "updateTemplateFiles": true},
                    {"owner": "a", "repo": "off", "updateTemplateFiles": false}
                ]
            }"#,
        )
        .expect("parse");
        let enabled: Vec<_> = config.enabled_repositories().collect();
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].repo, "on");
    }

    #[test]
    fn config_serde_roundtrip() {
        let config = Config {
            repositories: vec![RepoRef {
                owner: "a".to_string(),
                repo: "b".to_string(),
                update_template_files: true,
            }],
            template_files: vec!["CONTRIBUTING.md".to_string()],
            branch: "master".to_string(),
            committer: Committer::default(),
            template_dir: PathBuf::from("templates"),
        };
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("updateTemplateFiles"), "wire format is camelCase");
        let back: Config = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
