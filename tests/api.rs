use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use campus_nav::{AppState, ServerConfig, router};
use campus_nav_core::loading::builtin_campus;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let config = ServerConfig::default();
    let campus = builtin_campus().unwrap();
    router(AppState::new(campus, &config), &config)
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_session(body: Value) -> (StatusCode, Value) {
    send(
        Request::post("/api/session")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn campus_info_describes_builtin_dataset() {
    let (status, body) = get("/api/campus").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Louisiana State University Shreveport");
    assert_eq!(body["building_count"], 15);
    assert_eq!(body["default_zoom"], 17);
    assert_eq!(body["center"], json!([32.4518, -93.7275]));
}

#[tokio::test]
async fn categories_include_counts() {
    let (_, body) = get("/api/categories").await;
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 9);

    let academic = categories.iter().find(|c| c["id"] == "academic").unwrap();
    assert_eq!(academic["count"], 5);
    assert_eq!(academic["label"], "Academic");

    let residence = categories.iter().find(|c| c["id"] == "residence").unwrap();
    assert_eq!(residence["count"], 0);
}

#[tokio::test]
async fn buildings_filter_by_category() {
    let (_, all) = get("/api/buildings").await;
    assert_eq!(all.as_array().unwrap().len(), 15);
    assert_eq!(all[0]["id"], "administration");

    let (status, parking) = get("/api/buildings?category=parking").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = parking
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["lot-a", "lot-b"]);

    let (status, body) = get("/api/buildings?category=spaceport").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("spaceport"));
}

#[tokio::test]
async fn building_detail_with_and_without_position() {
    let (status, body) = get("/api/buildings/noel-memorial-library").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["building"]["id"], "noel-memorial-library");
    assert_eq!(body["quick_hours"], "Mon-Thu: 7:30 AM - 11:00 PM");
    assert!(body["estimate"].is_null());
    assert!(body["open_now"].is_boolean());

    let (_, body) = get("/api/buildings/noel-memorial-library?lat=32.4518&lon=-93.7275").await;
    assert_eq!(body["estimate"]["distance"], "146 ft");
    assert_eq!(body["estimate"]["duration"], "1 min");

    let (_, lot) = get("/api/buildings/lot-a").await;
    assert!(lot["opening_hours"].is_null());
    assert!(lot["open_now"].is_null());
}

#[tokio::test]
async fn unknown_building_is_not_found() {
    let (status, body) = get("/api/buildings/east-wing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Building 'east-wing' not found");

    let (status, _) = get("/api/directions?to=east-wing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bad_coordinates_are_rejected() {
    let (status, body) = get("/api/buildings/bronson-hall?lat=32.45").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("lon"));

    let (status, _) = get("/api/nearest?lat=120&lon=-93.7").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get("/api/directions?to=bronson-hall&lat=32.45&lon=200").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_requires_minimum_length() {
    let (_, short) = get("/api/search?q=c").await;
    assert_eq!(short, json!([]));

    let (_, blank) = get("/api/search?q=%20%20%20").await;
    assert_eq!(blank, json!([]));

    let (status, hits) = get("/api/search?q=chemistry").await;
    assert_eq!(status, StatusCode::OK);
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["id"], "bronson-hall");
    assert!(hits[0]["subtitle"].as_str().unwrap().starts_with("Academic"));
}

#[tokio::test]
async fn search_trims_and_ignores_case() {
    let (_, hits) = get("/api/search?q=%20ATM%20").await;
    let ids: Vec<_> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["administration", "university-center"]);
}

#[tokio::test]
async fn nearest_building_to_campus_center() {
    let (status, body) = get("/api/nearest?lat=32.4518&lon=-93.7275").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["building"]["id"], "noel-memorial-library");
    assert_eq!(body["estimate"]["distance"], "146 ft");
}

#[tokio::test]
async fn directions_fall_back_to_campus_center() {
    let (status, body) = get("/api/directions?to=noel-memorial-library").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["from"], "Campus Center");
    assert_eq!(body["route"]["origin"]["kind"], "campus-center");
    assert_eq!(body["route"]["estimate"]["distance"], "146 ft");
    assert_eq!(body["route"]["estimate"]["minutes"], 1);
}

#[tokio::test]
async fn directions_from_user_location() {
    let (_, body) = get("/api/directions?to=pilot-field&lat=32.4525&lon=-93.7268").await;
    assert_eq!(body["from"], "Your Location");
    assert_eq!(body["route"]["origin"]["coordinates"], json!([32.4525, -93.7268]));
    assert_eq!(body["route"]["destination"]["id"], "pilot-field");
}

#[tokio::test]
async fn geojson_layers() {
    let response = app()
        .oneshot(
            Request::get("/api/directions/geojson?to=bronson-hall")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/geo+json"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let route: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(route["type"], "FeatureCollection");
    assert_eq!(route["features"][0]["geometry"]["type"], "LineString");

    let (_, markers) = get("/api/map/buildings?category=dining").await;
    assert_eq!(markers["features"].as_array().unwrap().len(), 1);
    assert_eq!(markers["features"][0]["properties"]["id"], "pilots-cafe");

    let (_, walkways) = get("/api/map/walkways").await;
    assert_eq!(
        walkways["features"][0]["geometry"]["type"],
        "MultiLineString"
    );
}

#[tokio::test]
async fn session_select_then_directions() {
    let (status, first) = post_session(json!({
        "action": { "type": "select_building", "id": "bronson-hall" }
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["state"]["selected_building"], "bronson-hall");
    assert_eq!(first["view"]["detail"]["building"]["id"], "bronson-hall");

    let (_, second) = post_session(json!({
        "state": first["state"],
        "action": { "type": "get_directions", "id": "bronson-hall" }
    }))
    .await;
    assert!(second["view"]["detail"].is_null());
    assert_eq!(
        second["view"]["directions"]["destination"]["id"],
        "bronson-hall"
    );
    assert_eq!(
        second["view"]["directions"]["origin"]["kind"],
        "campus-center"
    );
}

#[tokio::test]
async fn session_category_filter_and_location_request() {
    let (_, filtered) = post_session(json!({
        "action": { "type": "select_category", "category": "parking" }
    }))
    .await;
    assert_eq!(filtered["view"]["list_title"], "Parking");
    assert_eq!(filtered["view"]["visible"].as_array().unwrap().len(), 2);

    let (_, locating) = post_session(json!({
        "state": filtered["state"],
        "action": { "type": "request_location" }
    }))
    .await;
    assert!(locating["view"]["pending_location_request"].is_u64());
}

#[tokio::test]
async fn session_rejects_unknown_action() {
    let (status, body) = post_session(json!({ "action": { "type": "teleport" } })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_queries_get_json_errors() {
    let response = app()
        .oneshot(Request::get("/api/nearest?lat=32.45").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().unwrap().contains("lon"));

    let (status, body) = get("/api/directions?to=bronson-hall&lat=north&lon=-93.7").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn session_rejects_forged_location_fix() {
    let (status, body) = post_session(json!({
        "state": {
            "directions_to": "noel-memorial-library",
            "location": {
                "last_fix": {
                    "coordinates": [500.0, -93.7275],
                    "acquired_at": "2026-01-01T00:00:00Z"
                }
            }
        },
        "action": { "type": "tick" }
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid session state"));

    let (status, _) = post_session(json!({
        "state": {
            "location": {
                "last_fix": {
                    "coordinates": [32.4525, -93.7268],
                    "acquired_at": "2099-01-01T00:00:00Z"
                }
            }
        },
        "action": { "type": "tick" }
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn session_rejects_exhausted_request_ids() {
    let (status, body) = post_session(json!({
        "state": { "location": { "next_id": u64::MAX } },
        "action": { "type": "request_location" }
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("exhausted"));
}

#[tokio::test]
async fn session_accepts_its_own_location_fix() {
    let (_, locating) = post_session(json!({ "action": { "type": "request_location" } })).await;
    let request_id = locating["view"]["pending_location_request"].as_u64().unwrap();

    let (status, found) = post_session(json!({
        "state": locating["state"],
        "action": {
            "type": "location_found",
            "request_id": request_id,
            "coordinates": [32.4525, -93.7268]
        }
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["view"]["notice"]["message"], "Location found!");

    let (status, directions) = post_session(json!({
        "state": found["state"],
        "action": { "type": "get_directions", "id": "bronson-hall" }
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        directions["view"]["directions"]["origin"]["kind"],
        "user-location"
    );
}

#[tokio::test]
async fn campus_lists_present_categories() {
    let (_, body) = get("/api/campus").await;
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories[0], "administrative");
    assert!(!categories.contains(&json!("residence")));
}
