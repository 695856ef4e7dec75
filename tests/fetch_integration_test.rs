use httpmock::prelude::*;
use truth_fetch::{FetchError, Fetcher, FetcherConfig, ReqwestTransport};

const STATUSES_PATH: &str = "/api/v1/accounts/107780257626128497/statuses";

/// Fetcher on the plain reqwest transport, pointed at `base_url`.
fn fetcher_for(base_url: impl Into<String>) -> Fetcher<ReqwestTransport, FetcherConfig> {
    let config = FetcherConfig::with_base_url(base_url);
    let transport = ReqwestTransport::new(&config).unwrap();
    Fetcher::with_transport(transport, config)
}

#[tokio::test]
async fn test_end_to_end_prints_empty_listing() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(STATUSES_PATH)
                .query_param("exclude_replies", "true")
                .query_param("only_replies", "false")
                .query_param("with_muted", "true");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("[]");
        })
        .await;

    let fetcher = fetcher_for(server.base_url());
    let mut out = Vec::new();
    fetcher.run(&mut out).await?;

    api_mock.assert_async().await;
    assert_eq!(String::from_utf8(out)?, "200\n[]\n");
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_prints_forbidden_body() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path(STATUSES_PATH);
            then.status(403)
                .header("Content-Type", "application/json")
                .body(r#"{"error":"Forbidden"}"#);
        })
        .await;

    let fetcher = fetcher_for(server.base_url());
    let mut out = Vec::new();
    let outcome = fetcher.run(&mut out).await.unwrap();

    api_mock.assert_async().await;
    assert_eq!(outcome.status, 403);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "403\n{\"error\":\"Forbidden\"}\n"
    );
}

#[tokio::test]
async fn test_output_is_exactly_two_lines() {
    let server = MockServer::start_async().await;
    let body = serde_json::json!([
        {"id": "115000000000000001", "content": "<p>first</p>"},
        {"id": "115000000000000000", "content": "<p>second</p>"}
    ])
    .to_string();
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path(STATUSES_PATH);
            then.status(200)
                .header("Content-Type", "application/json")
                .body(body.clone());
        })
        .await;

    let fetcher = fetcher_for(server.base_url());
    let mut out = Vec::new();
    fetcher.run(&mut out).await.unwrap();

    api_mock.assert_async().await;
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].parse::<u16>().unwrap(), 200);
    assert!(!lines[1].is_empty());
    assert_eq!(lines[1], body);
}

#[tokio::test]
async fn test_unreachable_host_fails_without_output() {
    // Port 1 is reserved and refuses connections on loopback.
    let fetcher = fetcher_for("http://127.0.0.1:1");
    let mut out = Vec::new();

    let result = fetcher.run(&mut out).await;

    assert!(matches!(result, Err(FetchError::Http(_))));
    assert_eq!(result.unwrap_err().exit_code(), 1);
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_lookup_account_resolves_id() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/accounts/lookup")
                .query_param("acct", "FoxNews");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": "107780257626128000",
                    "username": "FoxNews",
                    "acct": "FoxNews",
                    "display_name": "Fox News",
                    "url": "https://truthsocial.com/@FoxNews"
                }));
        })
        .await;

    let fetcher = fetcher_for(server.base_url());
    let account = fetcher.lookup_account("FoxNews").await.unwrap();

    api_mock.assert_async().await;
    assert_eq!(account.id, "107780257626128000");
    assert_eq!(account.display_name, "Fox News");
    assert_eq!(
        account.url.as_deref(),
        Some("https://truthsocial.com/@FoxNews")
    );
}

#[tokio::test]
async fn test_lookup_unknown_account_is_an_error() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/accounts/lookup");
            then.status(404).body(r#"{"error":"Record not found"}"#);
        })
        .await;

    let fetcher = fetcher_for(server.base_url());
    let result = fetcher.lookup_account("nobody_here").await;

    api_mock.assert_async().await;
    match result {
        Err(FetchError::Lookup { acct, status }) => {
            assert_eq!(acct, "nobody_here");
            assert_eq!(status, 404);
        }
        other => panic!("expected lookup error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_clearance_cookie_is_replayed_within_session() {
    let server = MockServer::start_async().await;
    let lookup_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/accounts/lookup")
                .query_param("acct", "realDonaldTrump");
            then.status(200)
                .header("Content-Type", "application/json")
                .header("Set-Cookie", "__cf_bm=clearance-token; Path=/; HttpOnly")
                .json_body(serde_json::json!({
                    "id": "107780257626128497",
                    "username": "realDonaldTrump",
                    "acct": "realDonaldTrump"
                }));
        })
        .await;
    let statuses_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(STATUSES_PATH)
                .header("cookie", "__cf_bm=clearance-token");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("[]");
        })
        .await;

    let fetcher = fetcher_for(server.base_url());
    let account = fetcher.lookup_account("realDonaldTrump").await.unwrap();
    let outcome = fetcher.fetch().await.unwrap();

    lookup_mock.assert_async().await;
    statuses_mock.assert_async().await;
    assert_eq!(account.id, "107780257626128497");
    assert_eq!(outcome.status, 200);
    assert_eq!(outcome.body, "[]");
}
