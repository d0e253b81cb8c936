//! Repository info fetcher
//!
//! Both reads are one-shot. API and transport failures are collapsed into
//! "no data" after being logged.

use crate::error::{Error, Result};
use crate::platform::HostingService;
use crate::types::{LanguageBreakdown, RepositoryMetadata, RepositoryReference};
use tracing::warn;

/// Everything the form populator needs about a repository
#[derive(Debug, Clone, Default)]
pub struct RepositoryInfo {
    /// Repository metadata
    pub metadata: RepositoryMetadata,
    /// Language breakdown (empty when unavailable)
    pub languages: LanguageBreakdown,
}

/// Fetch repository metadata, `None` on any failure
pub async fn fetch_repository_metadata(
    service: &dyn HostingService,
    repo: &RepositoryReference,
) -> Option<RepositoryMetadata> {
    match service.get_repository(repo).await {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            warn!(repo = %repo.slug(), error = %e, "repository fetch failed");
            None
        }
    }
}

/// Fetch the language breakdown, `None` on any failure
pub async fn fetch_languages(
    service: &dyn HostingService,
    repo: &RepositoryReference,
) -> Option<LanguageBreakdown> {
    match service.get_languages(repo).await {
        Ok(languages) => Some(languages),
        Err(e) => {
            warn!(repo = %repo.slug(), error = %e, "languages fetch failed");
            None
        }
    }
}

/// Fetch metadata then languages
///
/// Missing metadata is [`Error::RepositoryUnavailable`]; missing languages
/// degrade to an empty breakdown.
pub async fn fetch_repository_info(
    service: &dyn HostingService,
    repo: &RepositoryReference,
) -> Result<RepositoryInfo> {
    let metadata = fetch_repository_metadata(service, repo).await;
    let languages = fetch_languages(service, repo).await;

    let metadata = metadata.ok_or(Error::RepositoryUnavailable)?;
    Ok(RepositoryInfo {
        metadata,
        languages: languages.unwrap_or_default(),
    })
}
