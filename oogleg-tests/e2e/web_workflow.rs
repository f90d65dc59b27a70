//! Browser-style workflow against the web host, backed by a real search API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use futures::future;
use oogleg_core::HttpSearchApi;
use oogleg_core::config::ApiConfig;
use oogleg_web::{AppState, router};

use super::{ApiReply, ScriptedApi, cats_response, spawn_server};

/// Starts the search API and a web host pointed at it.
async fn spawn_stack(api: &ScriptedApi) -> SocketAddr {
    let api_address = spawn_server(api.router()).await;
    let config = ApiConfig::with_base_url(&format!("http://{api_address}")).unwrap();
    let client = Arc::new(HttpSearchApi::new(&config).unwrap());
    spawn_server(router(AppState::new(client))).await
}

/// Extracts the session path (`/session/<uuid>`) from a rendered page.
fn session_path(html: &str) -> String {
    let start = html.find("/session/").expect("page links to its session");
    let id: String = html[start + "/session/".len()..]
        .chars()
        .take_while(|c| c.is_ascii_hexdigit() || *c == '-')
        .collect();
    format!("/session/{id}")
}

#[tokio::test]
async fn test_landing_search_and_reset() {
    let api = ScriptedApi::new(ApiReply::Json(StatusCode::OK, cats_response()));
    let host = spawn_stack(&api).await;
    let http = reqwest::Client::new();
    let base = format!("http://{host}");

    let landing = http.get(&base).send().await.unwrap().text().await.unwrap();
    assert!(landing.contains("I'm Feeling Lucky"));
    let session = session_path(&landing);

    let results = http
        .post(format!("{base}{session}/search"))
        .form(&[("query", "cats")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(results.contains("About 1,234 results for \"cats\""));
    assert!(results.contains("wikipedia.org › https://wikipedia.org/wiki/Cat-facts"));
    assert!(results.contains(">Cat Facts</a>"));
    assert!(!results.contains("I'm Feeling Lucky"));
    assert_eq!(api.queries(), vec!["cats".to_string()]);

    let reset = http
        .post(format!("{base}{session}/reset"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(reset.contains("I'm Feeling Lucky"));
    assert!(reset.contains(r#"value="""#));
}

#[tokio::test]
async fn test_failed_search_keeps_results_on_screen() {
    let api = ScriptedApi::new(ApiReply::Json(StatusCode::OK, cats_response()));
    let host = spawn_stack(&api).await;
    let http = reqwest::Client::new();
    let base = format!("http://{host}");

    let landing = http.get(&base).send().await.unwrap().text().await.unwrap();
    let session = session_path(&landing);
    http.post(format!("{base}{session}/search"))
        .form(&[("query", "cats")])
        .send()
        .await
        .unwrap();

    api.set_reply(ApiReply::Text(StatusCode::BAD_GATEWAY, "upstream down"));
    let response = http
        .post(format!("{base}{session}/search"))
        .form(&[("query", "dogs")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains("Cat Facts"));
    assert!(html.contains(r#"value="dogs""#));
    assert!(!html.contains("upstream down"));
}

#[tokio::test]
async fn test_lucky_rotation_through_web_host() {
    let api = ScriptedApi::new(ApiReply::Json(StatusCode::OK, cats_response()));
    let host = spawn_stack(&api).await;
    let http = reqwest::Client::new();
    let base = format!("http://{host}");

    let landing = http.get(&base).send().await.unwrap().text().await.unwrap();
    let session = session_path(&landing);

    let mut filled = Vec::new();
    for _ in 0..5 {
        let html = http
            .post(format!("{base}{session}/lucky"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        let start = html.find(r#"value=""#).unwrap() + r#"value=""#.len();
        let end = start + html[start..].find('"').unwrap();
        filled.push(html[start..end].to_string());
    }

    assert_eq!(
        filled,
        vec![
            "cristina lopes",
            "machine learning",
            "ACM",
            "master of software engineering",
            "cristina lopes",
        ]
    );
    assert!(api.queries().is_empty());
}

#[tokio::test]
async fn test_unknown_session_over_http() {
    let api = ScriptedApi::new(ApiReply::Json(StatusCode::OK, cats_response()));
    let host = spawn_stack(&api).await;

    let response = reqwest::Client::new()
        .post(format!(
            "http://{host}/session/00000000-0000-0000-0000-000000000000/clear"
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_sessions_are_independent() {
    let api = ScriptedApi::new(ApiReply::Json(StatusCode::OK, cats_response()));
    let host = spawn_stack(&api).await;
    let http = reqwest::Client::new();
    let base = format!("http://{host}");

    let landings = future::join_all((0..3).map(|_| {
        let http = http.clone();
        let base = base.clone();
        async move { http.get(&base).send().await.unwrap().text().await.unwrap() }
    }))
    .await;
    let sessions: Vec<String> = landings.iter().map(|html| session_path(html)).collect();
    assert_ne!(sessions[0], sessions[1]);
    assert_ne!(sessions[1], sessions[2]);

    let queries = ["alpha", "beta", "gamma"];
    let pages = future::join_all(sessions.iter().zip(queries).map(|(session, query)| {
        let http = http.clone();
        let url = format!("{base}{session}/search");
        async move {
            http.post(url)
                .form(&[("query", query)])
                .send()
                .await
                .unwrap()
                .text()
                .await
                .unwrap()
        }
    }))
    .await;

    for (html, query) in pages.iter().zip(queries) {
        assert!(html.contains(&format!(r#"value="{query}""#)));
    }
    let mut received = api.queries();
    received.sort();
    assert_eq!(received, queries);
}
