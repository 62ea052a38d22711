//! Integration tests for `FetchUsersCommand` against a mock users endpoint.

#![cfg(not(target_arch = "wasm32"))]

use std::time::Duration;

use userview_business::{
    BusinessConfig, DerivedViewCompute, FetchError, FetchUsersCommand, UsersCompute,
    register_user_view,
};
use userview_states::StateCtx;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn setup(users_url: String) -> StateCtx {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut ctx = StateCtx::new();
    register_user_view(&mut ctx, BusinessConfig::new(users_url));
    ctx.settle();
    ctx
}

/// Dispatch the fetch and keep syncing until the background request reported back.
async fn fetch_and_wait(ctx: &mut StateCtx) {
    ctx.dispatch::<FetchUsersCommand>();
    ctx.settle();

    for _ in 0..100 {
        ctx.settle();
        let pending = ctx
            .cached::<UsersCompute>()
            .is_none_or(UsersCompute::is_pending);
        if !pending {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("fetch did not complete in time");
}

fn users(ctx: &StateCtx) -> &UsersCompute {
    ctx.cached::<UsersCompute>().expect("UsersCompute recorded")
}

#[tokio::test]
async fn fetch_loads_records_into_the_view() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "name": "Bob", "email": "b@x.com", "address": { "city": "NYC" } },
            { "id": 2, "name": "Amy", "email": "a@x.com", "address": { "city": "LA" } },
            { "id": 3, "name": "Cal", "email": "c@x.com" }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctx = setup(format!("{}/users", mock_server.uri()));
    fetch_and_wait(&mut ctx).await;

    let compute = users(&ctx);
    assert!(compute.is_loaded());
    assert_eq!(compute.records().len(), 3);
    assert_eq!(compute.records()[2].city(), "");

    let view = &ctx
        .cached::<DerivedViewCompute>()
        .expect("view compute recorded")
        .view;
    assert_eq!(view.total_pages, 1);
    let names: Vec<&str> = view.page.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Amy", "Cal"]);
}

#[tokio::test]
async fn server_error_leaves_records_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut ctx = setup(format!("{}/users", mock_server.uri()));
    fetch_and_wait(&mut ctx).await;

    assert_eq!(users(&ctx).error(), Some(&FetchError::Status(500)));
    assert!(users(&ctx).records().is_empty());
}

#[tokio::test]
async fn non_json_body_leaves_records_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let mut ctx = setup(format!("{}/users", mock_server.uri()));
    fetch_and_wait(&mut ctx).await;

    assert!(matches!(users(&ctx).error(), Some(FetchError::Decode(_))));
    assert!(users(&ctx).records().is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_is_a_request_error() {
    // bind then release a port so nothing is listening on it
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("bind ephemeral port")
        .port();

    let mut ctx = setup(format!("http://127.0.0.1:{port}/users"));
    fetch_and_wait(&mut ctx).await;

    assert!(matches!(users(&ctx).error(), Some(FetchError::Request(_))));
    assert!(users(&ctx).records().is_empty());
}

#[tokio::test]
async fn failed_refetch_keeps_the_previous_records() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "name": "Bob", "email": "b@x.com" },
            { "id": 2, "name": "Amy", "email": "a@x.com" }
        ])))
        .mount(&mock_server)
        .await;

    let mut ctx = setup(format!("{}/users", mock_server.uri()));
    fetch_and_wait(&mut ctx).await;
    assert!(users(&ctx).is_loaded());
    let fetched_at = users(&ctx).fetched_at();

    mock_server.reset().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    fetch_and_wait(&mut ctx).await;

    assert_eq!(users(&ctx).error(), Some(&FetchError::Status(503)));
    assert_eq!(users(&ctx).records().len(), 2);
    assert_eq!(users(&ctx).fetched_at(), fetched_at);

    let view = &ctx
        .cached::<DerivedViewCompute>()
        .expect("view compute recorded")
        .view;
    assert_eq!(view.page.len(), 2);
}
