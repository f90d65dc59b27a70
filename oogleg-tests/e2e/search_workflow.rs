//! Search page against a real HTTP search API.

use axum::http::StatusCode;
use oogleg_core::{Layout, ResultsBody, SearchOutcome};

use super::{ApiReply, ScriptedApi, cats_response, page_for, spawn_server};

#[tokio::test]
async fn test_search_renders_results_from_api() {
    let api = ScriptedApi::new(ApiReply::Json(StatusCode::OK, cats_response()));
    let address = spawn_server(api.router()).await;
    let page = page_for(address);

    page.set_query("cats");
    assert_eq!(page.search().await, SearchOutcome::Applied);

    let view = page.view();
    let Layout::Results(ResultsBody::Listing { summary, entries }) = view.layout else {
        panic!("expected results listing, got {:?}", view.layout);
    };
    assert!(summary.contains("1,234"));
    assert!(summary.contains("\"cats\""));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].domain, "wikipedia.org");
    assert_eq!(entries[0].title, "Cat Facts");
}

#[tokio::test]
async fn test_query_parameter_decodes_to_raw_query() {
    let api = ScriptedApi::new(ApiReply::Json(StatusCode::OK, cats_response()));
    let address = spawn_server(api.router()).await;
    let page = page_for(address);

    for query in ["  master of software engineering ", "c++ & rust?", "naïve #1"] {
        page.set_query(query);
        page.search().await;
    }

    assert_eq!(
        api.queries(),
        vec![
            "  master of software engineering ".to_string(),
            "c++ & rust?".to_string(),
            "naïve #1".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_blank_query_sends_no_request() {
    let api = ScriptedApi::new(ApiReply::Json(StatusCode::OK, cats_response()));
    let address = spawn_server(api.router()).await;
    let page = page_for(address);

    page.set_query("   ");
    assert_eq!(page.search().await, SearchOutcome::Skipped);
    assert!(api.queries().is_empty());
}

#[tokio::test]
async fn test_non_json_response_keeps_previous_results() {
    let api = ScriptedApi::new(ApiReply::Json(StatusCode::OK, cats_response()));
    let address = spawn_server(api.router()).await;
    let page = page_for(address);

    page.set_query("cats");
    page.search().await;
    let before = page.snapshot();

    api.set_reply(ApiReply::Text(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
    ));
    page.set_query("dogs");
    assert_eq!(page.search().await, SearchOutcome::Failed);

    let after = page.snapshot();
    assert!(!after.loading);
    assert!(after.has_searched);
    assert_eq!(after.search_results, before.search_results);
    assert_eq!(after.query, "dogs");
    assert_eq!(api.queries(), vec!["cats".to_string(), "dogs".to_string()]);
}

#[tokio::test]
async fn test_failed_first_search_stays_on_landing() {
    let api = ScriptedApi::new(ApiReply::Json(
        StatusCode::OK,
        serde_json::json!({"count": "many", "query": "cats"}),
    ));
    let address = spawn_server(api.router()).await;
    let page = page_for(address);

    page.set_query("cats");
    assert_eq!(page.search().await, SearchOutcome::Failed);
    assert_eq!(page.view().layout, Layout::Landing);
}

#[tokio::test]
async fn test_json_error_status_is_still_rendered() {
    let api = ScriptedApi::new(ApiReply::Json(StatusCode::SERVICE_UNAVAILABLE, serde_json::json!({
        "count": 0,
        "query": "cats",
        "results": []
    })));
    let address = spawn_server(api.router()).await;
    let page = page_for(address);

    page.set_query("cats");
    assert_eq!(page.search().await, SearchOutcome::Applied);
    assert!(page.snapshot().has_searched);
}

#[tokio::test]
async fn test_demo_api_answers_lucky_queries() {
    let address = spawn_server(oogleg_web::demo::router()).await;
    let page = page_for(address);

    let lucky = page.advance_lucky();
    assert_eq!(page.search().await, SearchOutcome::Applied);

    let results = page.snapshot().search_results.unwrap();
    assert_eq!(results.query, lucky);
    assert!(results.count > 0);
}

#[tokio::test]
async fn test_unreachable_api_is_swallowed() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let page = page_for(address);
    page.set_query("cats");

    assert_eq!(page.search().await, SearchOutcome::Failed);
    assert!(!page.snapshot().loading);
}
