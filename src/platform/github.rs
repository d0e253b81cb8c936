//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::{FileCommit, HostingService, PullRequestRequest};
use crate::types::{LanguageBreakdown, PullRequest, RepositoryMetadata, RepositoryReference};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

const USER_AGENT: &str = concat!("codejson/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

/// GitHub service using reqwest
///
/// Reads are sent without credentials; writes carry the token as a bearer
/// header. Requests are one-shot: no retries, no timeout.
pub struct GitHubService {
    client: Client,
    api_url: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct GitRef {
    object: GitObject,
}

#[derive(Deserialize)]
struct GitObject {
    sha: String,
}

#[derive(Serialize)]
struct CreateRefPayload<'a> {
    #[serde(rename = "ref")]
    ref_name: String,
    sha: &'a str,
}

#[derive(Deserialize)]
struct ContentEntry {
    sha: String,
}

#[derive(Serialize)]
struct PutContentPayload<'a> {
    message: &'a str,
    committer: &'a crate::platform::Committer,
    content: &'a str,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Deserialize)]
struct PullResponse {
    number: u64,
    html_url: String,
    title: String,
    head: PullBranch,
    base: PullBranch,
}

#[derive(Deserialize)]
struct PullBranch {
    #[serde(rename = "ref")]
    ref_field: String,
}

impl GitHubService {
    /// Create a new GitHub service against `api_url`
    pub fn new(api_url: &str, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn repo_url(&self, repo: &RepositoryReference, path: &str) -> String {
        format!("{}/repos/{}{}", self.api_url, repo.slug(), path)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.token.as_deref().ok_or(Error::MissingToken)?;
        Ok(request.bearer_auth(token))
    }
}

/// Turn a non-success status into [`Error::Api`]
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(api_error(status))
    }
}

fn api_error(status: StatusCode) -> Error {
    Error::Api {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

#[async_trait]
impl HostingService for GitHubService {
    async fn get_repository(&self, repo: &RepositoryReference) -> Result<RepositoryMetadata> {
        let url = self.repo_url(repo, "");
        debug!(%url, "fetching repository metadata");

        let response = self.client.get(&url).header("Accept", ACCEPT).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn get_languages(&self, repo: &RepositoryReference) -> Result<LanguageBreakdown> {
        let url = self.repo_url(repo, "/languages");
        debug!(%url, "fetching repository languages");

        let response = self.client.get(&url).header("Accept", ACCEPT).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn get_branch_sha(&self, repo: &RepositoryReference, branch: &str) -> Result<String> {
        let url = self.repo_url(repo, &format!("/git/refs/heads/{branch}"));
        debug!(%url, "reading branch head");

        let request = self.authorized(self.client.get(&url).header("Accept", ACCEPT))?;
        let git_ref: GitRef = check_status(request.send().await?)?.json().await?;
        Ok(git_ref.object.sha)
    }

    async fn create_branch(
        &self,
        repo: &RepositoryReference,
        branch: &str,
        sha: &str,
    ) -> Result<()> {
        let url = self.repo_url(repo, "/git/refs");
        debug!(%url, branch, sha, "creating branch");

        let payload = CreateRefPayload {
            ref_name: format!("refs/heads/{branch}"),
            sha,
        };
        let request = self.authorized(self.client.post(&url).header("Accept", ACCEPT))?;
        check_status(request.json(&payload).send().await?)?;
        Ok(())
    }

    async fn find_file_sha(
        &self,
        repo: &RepositoryReference,
        path: &str,
        branch: &str,
    ) -> Result<Option<String>> {
        let url = self.repo_url(repo, &format!("/contents/{path}"));
        debug!(%url, branch, "looking up existing file");

        let request = self.authorized(self.client.get(&url).header("Accept", ACCEPT))?;
        let response = request.query(&[("ref", branch)]).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let entry: ContentEntry = check_status(response)?.json().await?;
        Ok(Some(entry.sha))
    }

    async fn put_file(&self, repo: &RepositoryReference, commit: &FileCommit) -> Result<()> {
        let url = self.repo_url(repo, &format!("/contents/{}", commit.path));
        debug!(%url, branch = %commit.branch, "committing file");

        let payload = PutContentPayload {
            message: &commit.message,
            committer: &commit.committer,
            content: &commit.content,
            branch: &commit.branch,
            sha: commit.sha.as_deref(),
        };
        let request = self.authorized(self.client.put(&url).header("Accept", ACCEPT))?;
        check_status(request.json(&payload).send().await?)?;
        Ok(())
    }

    async fn create_pull_request(
        &self,
        repo: &RepositoryReference,
        request: &PullRequestRequest,
    ) -> Result<PullRequest> {
        let url = self.repo_url(repo, "/pulls");
        debug!(%url, head = %request.head, base = %request.base, "opening pull request");

        let builder = self.authorized(self.client.post(&url).header("Accept", ACCEPT))?;
        let pr: PullResponse = check_status(builder.json(request).send().await?)?
            .json()
            .await?;

        Ok(PullRequest {
            number: pr.number,
            html_url: pr.html_url,
            base_ref: pr.base.ref_field,
            head_ref: pr.head.ref_field,
            title: pr.title,
        })
    }
}
