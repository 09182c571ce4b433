//! Integration tests for the public client API against a mocked server

use fpl_api::{
    Endpoint, EventId, FixturesParams, FplClient, FplError, LeagueId, ManagerId, StandingsParams,
};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn serve(route: &str, body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

async fn single_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one round trip");
    requests.remove(0)
}

#[tokio::test]
async fn test_fixtures_event_and_future_query() {
    let server = serve("/fixtures", json!([])).await;
    let client = FplClient::with_base_url(&server.uri()).unwrap();

    client
        .fixtures(
            &FixturesParams::new()
                .with_event(EventId::new(5))
                .with_future(false),
        )
        .await
        .unwrap();

    let request = single_request(&server).await;
    let pairs: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("event".to_string(), "5".to_string()),
            ("future".to_string(), "false".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_fixtures_without_arguments_has_empty_query() {
    let server = serve("/fixtures", json!([])).await;
    let client = FplClient::with_base_url(&server.uri()).unwrap();

    client.fixtures(&FixturesParams::default()).await.unwrap();

    let request = single_request(&server).await;
    assert_eq!(request.url.query_pairs().count(), 0);
}

#[tokio::test]
async fn test_manager_gameweek_path() {
    let server = serve("/entry/12345/event/10/picks", json!({ "picks": [] })).await;
    let client = FplClient::with_base_url(&server.uri()).unwrap();

    client
        .manager_gameweek_data(ManagerId::new(12345), EventId::new(10))
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert_eq!(request.url.path(), "/entry/12345/event/10/picks");
}

#[tokio::test]
async fn test_error_body_returned_verbatim() {
    let server = serve("/entry/404", json!({ "error": "not found" })).await;
    let client = FplClient::with_base_url(&server.uri()).unwrap();

    let value = client.manager_data(ManagerId::new(404)).await.unwrap();

    let map = value.as_object().expect("mapping response");
    assert_eq!(map.len(), 1);
    assert_eq!(map["error"], json!("not found"));
}

#[tokio::test]
async fn test_classic_standings_without_page() {
    let server = serve("/leagues-classic/999/standings", json!({ "standings": {} })).await;
    let client = FplClient::with_base_url(&server.uri()).unwrap();

    client
        .league_standing_classic(LeagueId::new(999), &StandingsParams::new())
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert_eq!(request.url.path(), "/leagues-classic/999/standings");
    assert_eq!(request.url.query_pairs().count(), 0);
}

#[tokio::test]
async fn test_mapping_round_trip() {
    let body = json!({
        "id": 12345,
        "player_first_name": "Alex",
        "summary_overall_points": 1834,
        "leagues": { "classic": [{ "id": 999, "entry_rank": 3 }], "h2h": [] },
        "favourite_team": null,
        "kit": null
    });
    let server = serve("/entry/12345", body.clone()).await;
    let client = FplClient::with_base_url(&server.uri()).unwrap();

    let value = client.manager_data(ManagerId::new(12345)).await.unwrap();

    assert_eq!(value, body);
}

#[tokio::test]
async fn test_array_round_trip() {
    let body = json!([
        { "id": 1, "event": 1, "team_h": 1, "team_a": 2, "finished": true },
        { "id": 2, "event": 1, "team_h": 3, "team_a": 4, "finished": false },
        { "id": 3, "event": null, "team_h": 5, "team_a": 6, "finished": false }
    ]);
    let server = serve("/fixtures", body.clone()).await;
    let client = FplClient::with_base_url(&server.uri()).unwrap();

    let value = client.fixtures(&FixturesParams::new()).await.unwrap();

    assert_eq!(value, body);
}

#[tokio::test]
async fn test_fetch_endpoint_directly() {
    let server = serve("/event/1/live", json!({ "elements": [] })).await;
    let client = FplClient::with_base_url(&server.uri()).unwrap();

    let value = client
        .fetch(Endpoint::EventLive(EventId::new(1)))
        .await
        .unwrap();

    assert_eq!(value, json!({ "elements": [] }));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    let client = FplClient::with_base_url(&server.uri()).unwrap();

    let err = client.status().await.unwrap_err();
    assert!(matches!(err, FplError::Json(_)));
}
