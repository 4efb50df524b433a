//! End-to-end tests for the HTTP surface.
//!
//! Each test builds the real router over a temporary copy of the fixture
//! dataset and drives it through `axum_test::TestServer`.

use axum_test::TestServer;
use exoplanet_lib::{Dataset, DatasetStore};
use exoplanet_service_shared::test_utils::{fixture_planets, unwritable_state, FixtureState};
use exoplanet_service_shared::{build_router, AppState, LIVENESS_MESSAGE};
use serde_json::{json, Value};

fn server(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).expect("build test server")
}

async fn rpc(server: &TestServer, body: Value) -> Value {
    let response = server.post("/rpc").json(&body).await;
    response.assert_status_ok();
    response.json::<Value>()
}

#[tokio::test]
async fn liveness_returns_plain_text() {
    let fixture = FixtureState::new().await;
    let server = server(fixture.state());

    let response = server.get("/").await;
    response.assert_status_ok();
    assert_eq!(response.text(), LIVENESS_MESSAGE);
}

#[tokio::test]
async fn get_all_planets_returns_fixture() {
    let fixture = FixtureState::new().await;
    let server = server(fixture.state());

    let body = rpc(
        &server,
        json!({"jsonrpc": "2.0", "method": "getAllPlanets", "params": [], "id": 1}),
    )
    .await;

    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);
    assert!(body.get("error").is_none());
    assert_eq!(
        body["result"].as_array().map(Vec::len),
        Some(fixture_planets::COUNT)
    );
}

#[tokio::test]
async fn get_all_planets_on_empty_dataset_is_empty_list() {
    let server = server(unwritable_state(Dataset::default()));

    let body = rpc(&server, json!({"jsonrpc": "2.0", "method": "getAllPlanets", "id": "x"})).await;

    assert_eq!(body, json!({"jsonrpc": "2.0", "result": [], "id": "x"}));
}

#[tokio::test]
async fn get_planet_by_name_returns_exact_matches_in_order() {
    let fixture = FixtureState::new().await;
    let server = server(fixture.state());

    let body = rpc(
        &server,
        json!({"jsonrpc": "2.0", "method": "getPlanetByName", "params": ["Kepler-22 b"], "id": 2}),
    )
    .await;
    let result = body["result"].as_array().expect("result array");
    assert_eq!(result.len(), 2);
    assert_eq!(result[0]["pl_orbper"], json!(289.8623));
    assert_eq!(result[1]["pl_orbper"], json!(289.86));

    let body = rpc(
        &server,
        json!({"jsonrpc": "2.0", "method": "getPlanetByName", "params": ["kepler-22 b"], "id": 3}),
    )
    .await;
    assert_eq!(body["result"], json!([]));
}

#[tokio::test]
async fn get_planets_by_disc_year_and_hostname() {
    let fixture = FixtureState::new().await;
    let server = server(fixture.state());

    let body = rpc(
        &server,
        json!({"jsonrpc": "2.0", "method": "getPlanetsByDiscYear", "params": [2009], "id": 4}),
    )
    .await;
    let names: Vec<&str> = body["result"]
        .as_array()
        .expect("result array")
        .iter()
        .filter_map(|p| p["pl_name"].as_str())
        .collect();
    assert_eq!(names, vec!["WASP-17 b", "CoRoT-7 b", "GJ 1214 b"]);

    let body = rpc(
        &server,
        json!({"jsonrpc": "2.0", "method": "getPlanetsByHostname", "params": ["GJ 581"], "id": 5}),
    )
    .await;
    assert_eq!(body["result"][0]["pl_name"], "Gliese 581 c");
}

#[tokio::test]
async fn invalid_envelopes_are_rejected_with_32600() {
    let fixture = FixtureState::new().await;
    let server = server(fixture.state());

    let cases = [
        (json!({"method": "getAllPlanets", "id": 9}), json!(9)),
        (json!({"jsonrpc": "1.0", "method": "getAllPlanets", "id": 10}), json!(10)),
        (json!({"jsonrpc": "2.0", "id": 11}), json!(11)),
        (json!({"jsonrpc": "2.0", "params": []}), Value::Null),
        (json!({"jsonrpc": "2.0", "method": "", "id": 13}), json!(13)),
        (json!({"jsonrpc": "2.0", "method": false, "id": 14}), json!(14)),
    ];

    for (request, expected_id) in cases {
        let body = rpc(&server, request).await;
        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["error"]["code"], -32600);
        assert_eq!(body["error"]["message"], "Invalid Request");
        assert_eq!(body["id"], expected_id);
        assert!(body.get("result").is_none());
    }
}

#[tokio::test]
async fn unknown_method_is_rejected_with_32601() {
    let fixture = FixtureState::new().await;
    let server = server(fixture.state());

    let body = rpc(
        &server,
        json!({"jsonrpc": "2.0", "method": "deletePlanet", "params": ["Kepler-22 b"], "id": 12}),
    )
    .await;

    assert_eq!(body["error"]["code"], -32601);
    assert_eq!(body["id"], 12);
}

#[tokio::test]
async fn non_string_method_is_not_found() {
    let fixture = FixtureState::new().await;
    let server = server(fixture.state());

    for (method, id) in [(json!(123), 1), (json!(true), 2), (json!(["getAllPlanets"]), 3)] {
        let body = rpc(&server, json!({"jsonrpc": "2.0", "method": method, "id": id})).await;
        assert_eq!(body["error"]["code"], -32601);
        assert_eq!(body["error"]["message"], "Method not found");
        assert_eq!(body["id"], id);
    }
}

#[tokio::test]
async fn empty_params_count_as_no_arguments() {
    let fixture = FixtureState::new().await;
    let server = server(fixture.state());

    for params in [json!(false), json!(0), json!("")] {
        let body = rpc(
            &server,
            json!({"jsonrpc": "2.0", "method": "getAllPlanets", "params": params, "id": 1}),
        )
        .await;
        assert_eq!(
            body["result"].as_array().map(Vec::len),
            Some(fixture_planets::COUNT)
        );
    }
}

#[tokio::test]
async fn unparsable_body_is_a_parse_error() {
    let fixture = FixtureState::new().await;
    let server = server(fixture.state());

    let response = server.post("/rpc").text("{\"jsonrpc\": \"2.0\",").await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["error"]["code"], -32700);
    assert_eq!(body["id"], Value::Null);
}

#[tokio::test]
async fn update_then_reload_round_trips() {
    let fixture = FixtureState::new().await;
    let server = server(fixture.state());

    let payload = json!([
        {"pl_name": "TRAPPIST-1 e", "hostname": "TRAPPIST-1", "disc_year": 2017, "pl_eqt": 251.3},
        {"pl_name": "TRAPPIST-1 f", "hostname": "TRAPPIST-1", "disc_year": 2017, "notes": null}
    ]);

    let response = server.post("/update-local-data").json(&payload).await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert!(body["message"].is_string());

    // Served from memory immediately
    let body = rpc(
        &server,
        json!({"jsonrpc": "2.0", "method": "getPlanetsByHostname", "params": ["TRAPPIST-1"], "id": 1}),
    )
    .await;
    assert_eq!(body["result"], payload);

    // And survives a restart
    let reloaded = DatasetStore::open(fixture.data_path()).await;
    assert_eq!(
        reloaded.snapshot().await.to_value().expect("serialize dataset"),
        payload
    );
}

#[tokio::test]
async fn update_keeps_client_field_order() {
    let fixture = FixtureState::new().await;
    let server = server(fixture.state());
    let record = r#"{"pl_name":"Z","hostname":"H","disc_year":2000}"#;

    server
        .post("/update-local-data")
        .content_type("application/json")
        .bytes(format!("[{record}]").into())
        .await
        .assert_status_ok();

    let response = server
        .post("/rpc")
        .json(&json!({"jsonrpc": "2.0", "method": "getAllPlanets", "id": 1}))
        .await;
    assert!(response.text().contains(record));

    let written = std::fs::read_to_string(fixture.data_path()).expect("read dataset file");
    let name = written.find("\"pl_name\"").expect("pl_name written");
    let host = written.find("\"hostname\"").expect("hostname written");
    let year = written.find("\"disc_year\"").expect("disc_year written");
    assert!(name < host && host < year);
}

#[tokio::test]
async fn failed_update_returns_500_and_keeps_dataset() {
    let original = json!([{"pl_name": "51 Peg b", "hostname": "51 Peg", "disc_year": 1995}]);
    let server = server(unwritable_state(Dataset::from_value(original.clone())));

    let response = server
        .post("/update-local-data")
        .json(&json!([{"pl_name": "replacement"}]))
        .await;

    response.assert_status_internal_server_error();
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));

    let body = rpc(&server, json!({"jsonrpc": "2.0", "method": "getAllPlanets", "id": 1})).await;
    assert_eq!(body["result"], original);
}

#[tokio::test]
async fn opaque_dataset_filters_report_internal_error() {
    let fixture = FixtureState::new().await;
    let server = server(fixture.state());

    server
        .post("/update-local-data")
        .json(&json!({"planets": "coming soon"}))
        .await
        .assert_status_ok();

    let body = rpc(
        &server,
        json!({"jsonrpc": "2.0", "method": "getPlanetByName", "params": ["x"], "id": 6}),
    )
    .await;
    assert_eq!(body["error"]["code"], -32603);
    assert_eq!(body["id"], 6);

    let body = rpc(&server, json!({"jsonrpc": "2.0", "method": "getAllPlanets", "id": 7})).await;
    assert_eq!(body["result"], json!({"planets": "coming soon"}));
}
