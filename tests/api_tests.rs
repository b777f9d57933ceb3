use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use booktour::config::Config;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let db_path =
        std::env::temp_dir().join(format!("booktour-api-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    config.paging.default_page_size = 2;

    let state = booktour::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    booktour::api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("Content-Type", mime::APPLICATION_JSON.as_ref())
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn create_tour(app: &Router) -> i64 {
    let (status, body) = send_json(
        app,
        "POST",
        "/tours",
        Some(json!({
            "title": "Big Sur Retreat",
            "description": "Hike the coast",
            "blurb": "Coast",
            "price": 750,
            "duration": "3 days",
            "bullets": "Ocean views",
            "keywords": "Big Sur, Hiking",
            "packageCode": "BC",
            "difficulty": "Medium",
            "region": "Central Coast"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("tour id")
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;
    let (status, body) = send_json(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], true);
}

#[tokio::test]
async fn test_rating_lifecycle() {
    let app = spawn_app().await;
    let tour_id = create_tour(&app).await;
    let ratings_uri = format!("/tours/{tour_id}/ratings");

    let (status, body) = send_json(
        &app,
        "POST",
        &ratings_uri,
        Some(json!({"score": 5, "customerId": 100})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["comment"], "Great");
    assert_eq!(body["customerId"], 100);
    assert_eq!(
        body["_links"]["tour"]["href"],
        format!("http://localhost:8080/tours/{tour_id}")
    );

    let self_href = body["_links"]["self"]["href"].as_str().unwrap().to_string();
    let rating_path = self_href.trim_start_matches("http://localhost:8080").to_string();

    let (status, body) = send_json(&app, "GET", &rating_path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 5);

    let (status, body) = send_json(
        &app,
        "PUT",
        &ratings_uri,
        Some(json!({"score": 3, "customerId": 100})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 3);
    assert_eq!(body["comment"], "Fair");

    let (status, body) = send_json(
        &app,
        "PATCH",
        &ratings_uri,
        Some(json!({"comment": "Windy", "customerId": 100})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 3);
    assert_eq!(body["comment"], "Windy");

    let (status, _) = send(&app, "DELETE", &format!("{ratings_uri}/100"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &rating_path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(String::from_utf8(body).unwrap().ends_with("not found"));
}

#[tokio::test]
async fn test_not_found_bodies_are_plain_text() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/ratings/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(String::from_utf8(body).unwrap(), "Rating 999 not found");

    let (status, body) = send(
        &app,
        "POST",
        "/tours/999/ratings",
        Some(json!({"score": 4, "customerId": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(String::from_utf8(body).unwrap(), "Tour does not exist 999");

    let tour_id = create_tour(&app).await;
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/tours/{tour_id}/ratings"),
        Some(json!({"score": 4, "customerId": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        format!("Tour-Rating pair for request({tour_id} for customer 42)")
    );

    let (status, _) = send(&app, "GET", "/tours/999/ratings/average", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_average() {
    let app = spawn_app().await;
    let tour_id = create_tour(&app).await;
    let average_uri = format!("/tours/{tour_id}/ratings/average");

    let (status, body) = send_json(&app, "GET", &average_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["average"].is_null());

    let (status, _) = send(
        &app,
        "POST",
        &format!("/tours/{tour_id}/ratings/4?customers=1,2"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/tours/{tour_id}/ratings"),
        Some(json!({"score": 5, "customerId": 3, "comment": "Superb"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send_json(&app, "GET", &average_uri, None).await;
    let average = body["average"].as_f64().unwrap();
    assert!((average - 13.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_rate_many_and_duplicate() {
    let app = spawn_app().await;
    let tour_id = create_tour(&app).await;

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/tours/{tour_id}/ratings/5?customers=100,101,102"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.as_array().map(Vec::len), Some(3));

    let (status, _) = send(
        &app,
        "POST",
        &format!("/tours/{tour_id}/ratings/1?customers=200,101"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = send_json(&app, "GET", "/ratings", None).await;
    assert_eq!(status, StatusCode::OK);
    let ratings = body["_embedded"]["ratings"].as_array().unwrap();
    assert_eq!(ratings.len(), 3);
    assert!(ratings.iter().all(|r| r["score"] == 5));

    let (status, _) = send(
        &app,
        "POST",
        &format!("/tours/{tour_id}/ratings"),
        Some(json!({"score": 2, "customerId": 100})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_ratings_page() {
    let app = spawn_app().await;
    let tour_id = create_tour(&app).await;

    send(
        &app,
        "POST",
        &format!("/tours/{tour_id}/ratings/3?customers=1,2,3"),
        None,
    )
    .await;

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/tours/{tour_id}/ratings?sort=customerId,desc"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"]["size"], 2);
    assert_eq!(body["page"]["totalElements"], 3);
    assert_eq!(body["page"]["totalPages"], 2);
    assert_eq!(body["content"][0]["customerId"], 3);
    assert_eq!(body["content"][1]["customerId"], 2);
    assert!(body["_links"]["next"]["href"].is_string());
    assert!(body["_links"].get("prev").is_none());

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/tours/{tour_id}/ratings?page=1&size=2&sort=customerId,desc"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["content"][0]["customerId"], 1);
}

#[tokio::test]
async fn test_validation_errors() {
    let app = spawn_app().await;
    let tour_id = create_tour(&app).await;
    let ratings_uri = format!("/tours/{tour_id}/ratings");

    let (status, _) = send(
        &app,
        "POST",
        &ratings_uri,
        Some(json!({"score": 7, "customerId": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", &ratings_uri, Some(json!({"score": 3}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        &ratings_uri,
        Some(json!({"score": 3, "customerId": 1, "comment": "x".repeat(256)})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", &format!("{ratings_uri}?sort=tour"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", &format!("{ratings_uri}?size=1000"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/tours/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/tours?region=Atlantis", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_out_of_range_page_numbers() {
    let app = spawn_app().await;
    let tour_id = create_tour(&app).await;

    for uri in [
        format!("/tours/{tour_id}/ratings?page=18446744073709551615&size=2"),
        format!("/tours/{tour_id}/ratings?page=9223372036854775807&size=2"),
        "/tours?page=18446744073709551615".to_string(),
        "/tours?page=9223372036854775807&size=2".to_string(),
    ] {
        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(String::from_utf8_lossy(&body).contains("Invalid page number"));
    }

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/tours/{tour_id}/ratings?page=9223372036854775807&size=1"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"].as_array().map(Vec::len), Some(0));
    assert!(body["_links"].get("next").is_none());
}

#[tokio::test]
async fn test_sort_links_use_canonical_field_names() {
    let app = spawn_app().await;
    let tour_id = create_tour(&app).await;

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/tours/{tour_id}/ratings?sort=customer_id"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let self_href = body["_links"]["self"]["href"].as_str().unwrap();
    assert!(self_href.ends_with("sort=customerId%2Casc"), "{self_href}");
}

#[tokio::test]
async fn test_tours_and_packages() {
    let app = spawn_app().await;
    let tour_id = create_tour(&app).await;

    let (status, body) = send_json(&app, "GET", &format!("/tours/{tour_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["region"], "Central Coast");
    assert_eq!(body["difficulty"], "Medium");
    assert_eq!(
        body["_links"]["package"]["href"],
        "http://localhost:8080/packages/BC"
    );

    let (status, body) = send_json(
        &app,
        "GET",
        "/tours?package=BC&region=Central%20Coast&maxPrice=800",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"]["totalElements"], 1);

    let (_, body) = send_json(&app, "GET", "/tours?maxPrice=100", None).await;
    assert_eq!(body["page"]["totalElements"], 0);

    let (status, body) = send_json(&app, "GET", "/packages", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["_embedded"]["packages"].as_array().map(Vec::len), Some(9));

    let (status, body) = send_json(&app, "GET", "/packages/search?name=Nature%20Watch", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "NW");

    let (status, _) = send(&app, "GET", "/packages/ZZ", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/tours/{tour_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &format!("/tours/{tour_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        format!("Tour {tour_id} not found")
    );
}

#[tokio::test]
async fn test_metrics_disabled_without_handle() {
    let app = spawn_app().await;
    let (status, _) = send(&app, "GET", "/metrics", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
