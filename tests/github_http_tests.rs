//! HTTP-level tests of `GitHubService` against a mockito server

mod common;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use codejson::error::Error;
use codejson::platform::{Committer, FileCommit, GitHubService, HostingService, PullRequestRequest};
use common::fixtures::{widgets_metadata_json, widgets_ref};
use mockito::Matcher;
use serde_json::json;

fn service(server: &mockito::ServerGuard, token: Option<&str>) -> GitHubService {
    GitHubService::new(&server.url(), token.map(ToString::to_string)).unwrap()
}

#[tokio::test]
async fn test_repository_read_is_unauthenticated() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/acme/widgets")
        .match_header("authorization", Matcher::Missing)
        .match_header("user-agent", Matcher::Regex("^codejson/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(widgets_metadata_json())
        .create_async()
        .await;

    // A token is configured, but reads never send it
    let meta = service(&server, Some("ghp_test"))
        .get_repository(&widgets_ref())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(meta.name.as_deref(), Some("widgets"));
    assert_eq!(meta.forks_count, Some(3));
    assert_eq!(meta.license_id(), Some("MIT"));
}

#[tokio::test]
async fn test_repository_404_reports_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/acme/widgets")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;

    let err = service(&server, None)
        .get_repository(&widgets_ref())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api { status: 404, .. }));
    let msg = err.to_string();
    assert!(msg.contains("404"), "{msg}");
    assert!(msg.contains("Not Found"), "{msg}");
}

#[tokio::test]
async fn test_languages_keep_order() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/acme/widgets/languages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Shell": 5, "Go": 100}"#)
        .create_async()
        .await;

    let langs = service(&server, None)
        .get_languages(&widgets_ref())
        .await
        .unwrap();
    assert_eq!(langs.names(), vec!["Shell", "Go"]);
}

#[tokio::test]
async fn test_transport_failure() {
    // Nothing listens on the discard port
    let service = GitHubService::new("http://127.0.0.1:9", None).unwrap();
    let err = service.get_repository(&widgets_ref()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn test_branch_sha_and_create_ref() {
    let mut server = mockito::Server::new_async().await;
    let head = server
        .mock("GET", "/repos/acme/widgets/git/refs/heads/main")
        .match_header("authorization", "Bearer ghp_test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ref": "refs/heads/main", "object": {"sha": "abc123", "type": "commit"}}"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/repos/acme/widgets/git/refs")
        .match_header("authorization", "Bearer ghp_test")
        .match_body(Matcher::Json(json!({
            "ref": "refs/heads/code-json-branchabc",
            "sha": "abc123",
        })))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let service = service(&server, Some("ghp_test"));
    let sha = service.get_branch_sha(&widgets_ref(), "main").await.unwrap();
    service
        .create_branch(&widgets_ref(), "code-json-branchabc", &sha)
        .await
        .unwrap();

    head.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_create_ref_conflict() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/repos/acme/widgets/git/refs")
        .with_status(422)
        .with_body(r#"{"message": "Reference already exists"}"#)
        .create_async()
        .await;

    let err = service(&server, Some("ghp_test"))
        .create_branch(&widgets_ref(), "code-json-branchabc", "abc123")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "GitHub API error (422): Unprocessable Entity");
}

#[tokio::test]
async fn test_find_file_sha() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/acme/widgets/contents/code.json")
        .match_query(Matcher::UrlEncoded("ref".into(), "missing".into()))
        .with_status(404)
        .create_async()
        .await;
    server
        .mock("GET", "/repos/acme/widgets/contents/code.json")
        .match_query(Matcher::UrlEncoded("ref".into(), "present".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name": "code.json", "path": "code.json", "sha": "blob789"}"#)
        .create_async()
        .await;

    let service = service(&server, Some("ghp_test"));
    assert_eq!(
        service
            .find_file_sha(&widgets_ref(), "code.json", "missing")
            .await
            .unwrap(),
        None
    );
    assert_eq!(
        service
            .find_file_sha(&widgets_ref(), "code.json", "present")
            .await
            .unwrap()
            .as_deref(),
        Some("blob789")
    );
}

#[tokio::test]
async fn test_put_file_body() {
    let text = "{\n  \"name\": \"widgets\"\n}";
    let mut server = mockito::Server::new_async().await;
    let put = server
        .mock("PUT", "/repos/acme/widgets/contents/code.json")
        .match_header("authorization", "Bearer ghp_test")
        .match_body(Matcher::Json(json!({
            "message": "Add code.json metadata file",
            "committer": {"name": "bot", "email": "bot@example.com"},
            "content": BASE64.encode(text),
            "branch": "code-json-branchabc",
        })))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let commit = FileCommit {
        path: "code.json".to_string(),
        message: "Add code.json metadata file".to_string(),
        committer: Committer {
            name: "bot".to_string(),
            email: "bot@example.com".to_string(),
        },
        content: BASE64.encode(text),
        branch: "code-json-branchabc".to_string(),
        sha: None,
    };
    service(&server, Some("ghp_test"))
        .put_file(&widgets_ref(), &commit)
        .await
        .unwrap();

    put.assert_async().await;
}

#[tokio::test]
async fn test_create_pull_request() {
    let mut server = mockito::Server::new_async().await;
    let pulls = server
        .mock("POST", "/repos/acme/widgets/pulls")
        .match_header("authorization", "Bearer ghp_test")
        .match_body(Matcher::Json(json!({
            "title": "Add code.json",
            "body": "Generated",
            "head": "code-json-branchabc",
            "base": "main",
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "number": 7,
                "html_url": "https://github.com/acme/widgets/pull/7",
                "title": "Add code.json",
                "head": {"ref": "code-json-branchabc"},
                "base": {"ref": "main"},
            })
            .to_string(),
        )
        .create_async()
        .await;

    let request = PullRequestRequest {
        title: "Add code.json".to_string(),
        body: "Generated".to_string(),
        head: "code-json-branchabc".to_string(),
        base: "main".to_string(),
    };
    let pr = service(&server, Some("ghp_test"))
        .create_pull_request(&widgets_ref(), &request)
        .await
        .unwrap();

    pulls.assert_async().await;
    assert_eq!(pr.number, 7);
    assert_eq!(pr.head_ref, "code-json-branchabc");
    assert_eq!(pr.base_ref, "main");
}
