use actix_web::{http::StatusCode, test as actix_test, web, App};
use nexus_core::Dataset;
use nexus_server::server::{configure, cors, AppState};
use serde_json::{json, Value};

const DATASET: &str = r#"[
    {"id": 1, "name": "A", "city": "Austin", "state": "TX", "lat": 30.0, "lng": -97.0,
     "beds": {"er": 2, "pediatric": 0, "maternity": 4, "total": 50},
     "availableBeds": 3, "waitTime": 10, "emergency_services": true, "rating": 4.0,
     "specialties": ["Cardiology"], "phone": "555-0001"},
    {"id": 2, "name": "B", "city": "Austin", "state": "TX", "lat": 30.1, "lng": -97.0,
     "beds": {"er": 0, "pediatric": 5, "maternity": 0, "total": 30},
     "availableBeds": 7, "waitTime": 25, "emergency_services": false, "rating": 4.5,
     "specialties": []},
    {"id": 3, "name": "C", "city": "Dallas", "state": "TX", "lat": 32.8, "lng": -96.8,
     "beds": {"er": 6, "pediatric": 1, "maternity": 0, "total": 80},
     "availableBeds": 0, "waitTime": 40, "emergency_services": true, "rating": 3.5,
     "specialties": ["Trauma"]}
]"#;

fn app_state(json: &str) -> web::Data<AppState> {
    web::Data::new(AppState::new(Dataset::from_json(json).unwrap()))
}

/// Issue a GET against a fresh app and decode the JSON body.
async fn get_json(state: web::Data<AppState>, uri: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(App::new().app_data(state).configure(configure)).await;
    let req = actix_test::TestRequest::get().uri(uri).to_request();
    let resp = actix_test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = actix_test::read_body_json(resp).await;
    (status, body)
}

async fn post_chat(state: web::Data<AppState>, body: Value) -> (StatusCode, Value) {
    let app = actix_test::init_service(App::new().app_data(state).configure(configure)).await;
    let req = actix_test::TestRequest::post()
        .uri("/api/chat")
        .set_json(body)
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = actix_test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn test_root() {
    let (status, body) = get_json(app_state(DATASET), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "NEXUS Hospital API", "status": "running", "total_hospitals": 3})
    );
}

#[actix_web::test]
async fn test_list_hospitals_in_order() {
    let (status, body) = get_json(app_state(DATASET), "/api/hospitals").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    let ids: Vec<i64> = body["hospitals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    // Unmodelled attributes pass through
    assert_eq!(body["hospitals"][0]["phone"], "555-0001");
    assert_eq!(body["hospitals"][0]["availableBeds"], 3);
}

#[actix_web::test]
async fn test_get_hospital() {
    let (status, body) = get_json(app_state(DATASET), "/api/hospitals/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "B");

    let (status, body) = get_json(app_state(DATASET), "/api/hospitals/42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "Hospital not found"}));
}

#[actix_web::test]
async fn test_nearby() {
    let (status, body) = get_json(
        app_state(DATASET),
        "/api/hospitals/nearby?lat=30.1&lng=-97.0",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["hospitals"][0]["id"], 2);
    assert_eq!(body["hospitals"][0]["distance"], 0.0);
    assert_eq!(body["hospitals"][1]["id"], 1);
    assert_eq!(body["hospitals"][1]["distance"], 6.9);
}

#[actix_web::test]
async fn test_nearby_zero_radius_exact_match() {
    let (status, body) = get_json(
        app_state(DATASET),
        "/api/hospitals/nearby?lat=32.8&lng=-96.8&radius=0",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["hospitals"][0]["id"], 3);
    assert_eq!(body["hospitals"][0]["distance"], 0.0);
}

#[actix_web::test]
async fn test_nearby_requires_coordinates() {
    let state = app_state(DATASET);
    let app = actix_test::init_service(App::new().app_data(state).configure(configure)).await;
    let req = actix_test::TestRequest::get()
        .uri("/api/hospitals/nearby?lat=30.1")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_filter() {
    let (_, body) = get_json(app_state(DATASET), "/api/hospitals/filter").await;
    assert_eq!(body["count"], 3);

    let (_, body) = get_json(app_state(DATASET), "/api/hospitals/filter?bedType=er").await;
    assert_eq!(body["count"], 2);

    let (_, body) = get_json(app_state(DATASET), "/api/hospitals/filter?bedType=all").await;
    assert_eq!(body["count"], 3);

    let (_, body) = get_json(
        app_state(DATASET),
        "/api/hospitals/filter?bedType=er&available=true&emergency=true",
    )
    .await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["hospitals"][0]["id"], 1);

    let (_, body) = get_json(app_state(DATASET), "/api/hospitals/filter?emergency=false").await;
    assert_eq!(body["count"], 3);
}

#[actix_web::test]
async fn test_stats() {
    let (status, body) = get_json(app_state(DATASET), "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "total_hospitals": 3,
            "total_available_beds": 10,
            "average_wait_time": 25.0,
            "emergency_services": 2
        })
    );
}

#[actix_web::test]
async fn test_stats_empty_dataset() {
    let (status, body) = get_json(app_state("[]"), "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_hospitals"], 0);
    assert_eq!(body["average_wait_time"], 0.0);
}

#[actix_web::test]
async fn test_chat_critical() {
    let (status, body) = post_chat(app_state(DATASET), json!({"message": "I have chest pain"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["urgency"], "critical");
    // 6*10-40 = 20 beats 2*10-10 = 10
    assert_eq!(body["hospital"]["id"], 3);
    assert!(body["reasoning"]
        .as_str()
        .unwrap()
        .contains("Has emergency services."));
}

#[actix_web::test]
async fn test_chat_single_record_scenario() {
    let state = app_state(
        r#"[{"id": 1, "name": "A", "beds": {"er": 2}, "availableBeds": 3,
             "waitTime": 10, "emergency_services": true}]"#,
    );
    let (_, body) = post_chat(state, json!({"message": "I have chest pain"})).await;

    assert_eq!(body["hospital"]["name"], "A");
    assert_eq!(body["urgency"], "critical");
    assert!(body["reasoning"]
        .as_str()
        .unwrap()
        .contains("emergency services"));
}

#[actix_web::test]
async fn test_chat_pediatric() {
    let (_, body) = post_chat(app_state(DATASET), json!({"message": "my kid has a rash"})).await;

    assert_eq!(body["urgency"], "urgent");
    assert_eq!(body["hospital"]["id"], 2);
}

#[actix_web::test]
async fn test_chat_no_match() {
    let (status, body) = post_chat(app_state("[]"), json!({"message": "checkup"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hospital"], json!({}));
    assert_eq!(body["urgency"], "routine");
    assert_eq!(
        body["reasoning"],
        "No hospitals found matching your symptoms and urgency. Please call 911 if this is an emergency."
    );
}

#[actix_web::test]
async fn test_chat_missing_message_is_routine() {
    let (status, body) = post_chat(app_state(DATASET), json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["urgency"], "routine");
    // Most available beds wins for routine care
    assert_eq!(body["hospital"]["id"], 2);
}

const FRONTEND_ORIGIN: &str = "http://localhost:5173";

#[actix_web::test]
async fn test_cors_preflight() {
    let state = app_state(DATASET);
    let app = actix_test::init_service(
        App::new()
            .wrap(cors())
            .app_data(state)
            .configure(configure),
    )
    .await;

    let req = actix_test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/chat")
        .insert_header(("Origin", FRONTEND_ORIGIN))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .insert_header(("Access-Control-Request-Headers", "content-type"))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let headers = resp.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        FRONTEND_ORIGIN
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
    assert!(headers.contains_key("access-control-allow-methods"));
}

#[actix_web::test]
async fn test_cors_allows_credentials_on_responses() {
    let state = app_state(DATASET);
    let app = actix_test::init_service(
        App::new()
            .wrap(cors())
            .app_data(state)
            .configure(configure),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/stats")
        .insert_header(("Origin", FRONTEND_ORIGIN))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        FRONTEND_ORIGIN
    );
    assert_eq!(
        resp.headers().get("access-control-allow-credentials").unwrap(),
        "true"
    );
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let state = app_state(DATASET);
    let app = actix_test::init_service(App::new().app_data(state).configure(configure)).await;
    let req = actix_test::TestRequest::get().uri("/api/unknown").to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
