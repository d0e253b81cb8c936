//! Form populator
//!
//! Maps repository metadata onto the metadata form and hands the result to
//! a [`FormRenderer`].

use crate::error::{Error, Result};
use crate::import::RepositoryInfo;
use crate::types::{FormData, LanguageBreakdown, RepositoryMetadata};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Repository visibility as shown on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Publicly visible repository
    Public,
    /// Private repository
    Private,
}

/// A license entry on the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseEntry {
    /// SPDX identifier
    pub name: String,
    /// Link to the license file
    #[serde(rename = "URL")]
    pub url: String,
}

/// Usage permissions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Licenses the code is released under
    pub licenses: Vec<LicenseEntry>,
}

/// Reuse statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReuseFrequency {
    /// Fork count
    pub forks: u64,
}

/// Dates tracked by the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dates {
    /// Repository creation time
    pub created: String,
    /// Repository last update time
    pub last_modified: String,
    /// When this metadata was generated
    pub meta_data_last_updated: String,
}

/// Form fields pre-filled from GitHub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    /// Project name
    pub name: String,
    /// Project description
    pub description: String,
    /// Repository web URL
    #[serde(rename = "repositoryURL")]
    pub repository_url: String,
    /// Public or private
    pub repository_visibility: Visibility,
    /// Version control system
    pub vcs: String,
    /// Licensing
    pub permissions: Permissions,
    /// Reuse statistics
    pub reuse_frequency: ReuseFrequency,
    /// Languages used, in GitHub's order
    pub languages: Vec<String>,
    /// Dates
    pub date: Dates,
    /// Topics
    pub tags: Vec<String>,
    /// Where to send feedback
    pub feedback_mechanisms: Vec<String>,
}

/// A submission for the form collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    /// Field values
    pub data: FormFields,
}

/// Form collaborator receiving pre-filled submissions
pub trait FormRenderer {
    /// Replace the form's current values with `submission`
    fn set_submission(&mut self, submission: &FormSubmission) -> Result<()>;
}

/// Build the form submission for a repository
pub fn populate_form(
    metadata: &RepositoryMetadata,
    languages: &LanguageBreakdown,
    now: DateTime<Utc>,
) -> FormSubmission {
    let repository_url = metadata.html_url.clone().unwrap_or_default();

    let licenses = metadata
        .license_id()
        .map(|id| LicenseEntry {
            name: id.to_string(),
            url: format!("{repository_url}/blob/main/LICENSE"),
        })
        .into_iter()
        .collect();

    let repository_visibility = if metadata.private {
        Visibility::Private
    } else {
        Visibility::Public
    };

    FormSubmission {
        data: FormFields {
            name: metadata.name.clone().unwrap_or_default(),
            description: metadata.description.clone().unwrap_or_default(),
            repository_visibility,
            vcs: "git".to_string(),
            permissions: Permissions { licenses },
            reuse_frequency: ReuseFrequency {
                forks: metadata.forks_count.unwrap_or(0),
            },
            languages: languages.names(),
            date: Dates {
                created: metadata.created_at.clone().unwrap_or_default(),
                last_modified: metadata.updated_at.clone().unwrap_or_default(),
                meta_data_last_updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
            tags: metadata.topics.clone().unwrap_or_default(),
            feedback_mechanisms: vec![format!("{repository_url}/issues")],
            repository_url,
        },
    }
}

/// Populate the form from fetched info and hand it to `renderer`
pub fn prefill_form(
    renderer: &mut dyn FormRenderer,
    info: &RepositoryInfo,
) -> Result<FormSubmission> {
    let submission = populate_form(&info.metadata, &info.languages, Utc::now());
    renderer.set_submission(&submission)?;
    Ok(submission)
}

/// Form backed by a JSON file holding the flat form data
#[derive(Debug, Clone)]
pub struct FormFile {
    path: PathBuf,
}

impl FormFile {
    /// Open a form file, which need not exist yet
    ///
    /// Fails with [`Error::FormNotInitialized`] when its directory is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        if !dir.is_dir() {
            return Err(Error::FormNotInitialized(format!(
                "directory {} does not exist",
                dir.display()
            )));
        }

        Ok(Self { path })
    }

    /// Path of the form file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current form data
    pub fn read_data(&self) -> Result<FormData> {
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl FormRenderer for FormFile {
    fn set_submission(&mut self, submission: &FormSubmission) -> Result<()> {
        let mut text = serde_json::to_string_pretty(&submission.data)
            .map_err(|e| Error::FormFill(e.to_string()))?;
        text.push('\n');

        fs::write(&self.path, text).map_err(|e| Error::FormFill(e.to_string()))?;
        debug!(path = %self.path.display(), "form data written");
        Ok(())
    }
}
