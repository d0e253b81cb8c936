//! Mock hosting service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use codejson::error::{Error, Result};
use codejson::platform::{FileCommit, HostingService, PullRequestRequest};
use codejson::types::{LanguageBreakdown, PullRequest, RepositoryMetadata, RepositoryReference};
use std::sync::Mutex;

/// A call made against the mock, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetRepository,
    GetLanguages,
    GetBranchSha { branch: String },
    CreateBranch { branch: String, sha: String },
    FindFileSha { path: String, branch: String },
    PutFile(FileCommit),
    CreatePullRequest(PullRequestRequest),
}

/// Which operation should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    GetRepository,
    GetLanguages,
    GetBranchSha,
    CreateBranch,
    FindFileSha,
    PutFile,
    CreatePullRequest,
}

/// Simple mock hosting service
///
/// This manually implements `HostingService` rather than using mockall.
///
/// Features:
/// - Call tracking for verification
/// - Configurable repository responses
/// - Error injection (API status or transport failure) per operation
pub struct MockHostingService {
    metadata: Mutex<RepositoryMetadata>,
    languages: Mutex<LanguageBreakdown>,
    main_sha: String,
    existing_file_sha: Mutex<Option<String>>,
    calls: Mutex<Vec<Call>>,
    failures: Mutex<Vec<(FailOn, Failure)>>,
}

#[derive(Debug, Clone)]
enum Failure {
    Status(u16, &'static str),
    Transport,
}

impl MockHostingService {
    pub fn new() -> Self {
        Self {
            metadata: Mutex::new(RepositoryMetadata::default()),
            languages: Mutex::new(LanguageBreakdown::default()),
            main_sha: "abc123def456".to_string(),
            existing_file_sha: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(Vec::new()),
        }
    }

    pub fn with_repository(metadata: RepositoryMetadata, languages: LanguageBreakdown) -> Self {
        let mock = Self::new();
        *mock.metadata.lock().unwrap() = metadata;
        *mock.languages.lock().unwrap() = languages;
        mock
    }

    pub fn main_sha(&self) -> &str {
        &self.main_sha
    }

    /// Pretend code.json already exists on main
    pub fn set_existing_file_sha(&self, sha: &str) {
        *self.existing_file_sha.lock().unwrap() = Some(sha.to_string());
    }

    // === Error injection methods ===

    /// Make `op` fail with an HTTP status
    pub fn fail_with_status(&self, op: FailOn, status: u16, reason: &'static str) {
        self.failures
            .lock()
            .unwrap()
            .push((op, Failure::Status(status, reason)));
    }

    /// Make `op` fail as if the request never completed
    pub fn fail_transport(&self, op: FailOn) {
        self.failures.lock().unwrap().push((op, Failure::Transport));
    }

    // === Call verification methods ===

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn put_file_calls(&self) -> Vec<FileCommit> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::PutFile(commit) => Some(commit),
                _ => None,
            })
            .collect()
    }

    pub fn pull_request_calls(&self) -> Vec<PullRequestRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreatePullRequest(req) => Some(req),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call, op: FailOn) -> Result<()> {
        self.calls.lock().unwrap().push(call);

        let failures = self.failures.lock().unwrap();
        match failures.iter().find(|(o, _)| *o == op) {
            Some((_, Failure::Status(status, reason))) => Err(Error::Api {
                status: *status,
                status_text: (*reason).to_string(),
            }),
            Some((_, Failure::Transport)) => {
                Err(Error::Transport("connection refused".to_string()))
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl HostingService for MockHostingService {
    async fn get_repository(&self, _repo: &RepositoryReference) -> Result<RepositoryMetadata> {
        self.record(Call::GetRepository, FailOn::GetRepository)?;
        Ok(self.metadata.lock().unwrap().clone())
    }

    async fn get_languages(&self, _repo: &RepositoryReference) -> Result<LanguageBreakdown> {
        self.record(Call::GetLanguages, FailOn::GetLanguages)?;
        Ok(self.languages.lock().unwrap().clone())
    }

    async fn get_branch_sha(&self, _repo: &RepositoryReference, branch: &str) -> Result<String> {
        self.record(
            Call::GetBranchSha {
                branch: branch.to_string(),
            },
            FailOn::GetBranchSha,
        )?;
        Ok(self.main_sha.clone())
    }

    async fn create_branch(
        &self,
        _repo: &RepositoryReference,
        branch: &str,
        sha: &str,
    ) -> Result<()> {
        self.record(
            Call::CreateBranch {
                branch: branch.to_string(),
                sha: sha.to_string(),
            },
            FailOn::CreateBranch,
        )
    }

    async fn find_file_sha(
        &self,
        _repo: &RepositoryReference,
        path: &str,
        branch: &str,
    ) -> Result<Option<String>> {
        self.record(
            Call::FindFileSha {
                path: path.to_string(),
                branch: branch.to_string(),
            },
            FailOn::FindFileSha,
        )?;
        Ok(self.existing_file_sha.lock().unwrap().clone())
    }

    async fn put_file(&self, _repo: &RepositoryReference, commit: &FileCommit) -> Result<()> {
        self.record(Call::PutFile(commit.clone()), FailOn::PutFile)
    }

    async fn create_pull_request(
        &self,
        repo: &RepositoryReference,
        request: &PullRequestRequest,
    ) -> Result<PullRequest> {
        self.record(
            Call::CreatePullRequest(request.clone()),
            FailOn::CreatePullRequest,
        )?;
        Ok(PullRequest {
            number: 42,
            html_url: format!("https://github.com/{}/pull/42", repo.slug()),
            base_ref: request.base.clone(),
            head_ref: request.head.clone(),
            title: request.title.clone(),
        })
    }
}
