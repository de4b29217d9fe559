use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use db::{
    DBService,
    models::{affirmation::IAffirmation, category::Category, quote::{CreateQuote, Quote}},
};
use serde_json::{Value, json};
use server::{AppState, build_router};
use services::services::sampler::shuffle_with_seed;
use tower::ServiceExt;

async fn app_with_quotes(count: usize) -> (Router, DBService) {
    let db = DBService::new_in_memory().await.expect("in-memory db");
    for i in 1..=count {
        let data = CreateQuote {
            quotetext: format!("Keep going, step {i}"),
            author: Some(if i % 2 == 0 { "Ada" } else { "Grace" }.to_string()),
            categoryid: None,
            qcategory: Some(if i % 4 == 0 { "growth" } else { "calm" }.to_string()),
            tags: None,
            is_active: true,
        };
        Quote::create(&db.pool, &data).await.expect("insert quote");
    }
    (build_router(AppState::new(db.clone())), db)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn quote_ids(body: &Value) -> Vec<i64> {
    body["quotes"]
        .as_array()
        .expect("quotes array")
        .iter()
        .map(|q| q["quoteid"].as_i64().expect("quoteid"))
        .collect()
}

#[tokio::test]
async fn quotes_newest_first_by_default() {
    let (app, _db) = app_with_quotes(30).await;
    let (status, body) = get(&app, "/api/quotes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote_ids(&body), (6..=30).rev().collect::<Vec<_>>());
    assert_eq!(body["hasMore"], true);
    assert_eq!(body["total"], 30);
    assert!(body.get("randomSeed").is_none());
}

#[tokio::test]
async fn quotes_random_with_seed_is_reproducible() {
    let (app, _db) = app_with_quotes(12).await;
    let uri = "/api/quotes?random=true&randomSeed=42&limit=5&offset=5";

    let (status, first) = get(&app, uri).await;
    let (_, second) = get(&app, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);

    let all: Vec<i64> = (1..=12).collect();
    let expected = shuffle_with_seed(&all, 42)[5..10].to_vec();
    assert_eq!(quote_ids(&first), expected);
    assert_eq!(first["hasMore"], true);
    assert_eq!(first["total"], 12);
    assert_eq!(first["randomSeed"], 42);
}

#[tokio::test]
async fn quotes_random_without_seed_echoes_generated_seed() {
    let (app, _db) = app_with_quotes(8).await;
    let (_, body) = get(&app, "/api/quotes?random=true&limit=8").await;

    let seed = body["randomSeed"].as_u64().expect("seed echoed") as u32;
    let all: Vec<i64> = (1..=8).collect();
    assert_eq!(quote_ids(&body), shuffle_with_seed(&all, seed));

    let replay = format!("/api/quotes?random=true&limit=8&randomSeed={seed}");
    let (_, replayed) = get(&app, &replay).await;
    assert_eq!(quote_ids(&replayed), quote_ids(&body));
}

#[tokio::test]
async fn quotes_random_past_the_end_is_empty() {
    let (app, _db) = app_with_quotes(3).await;
    let (status, body) = get(&app, "/api/quotes?random=true&randomSeed=1&offset=50").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quotes"], json!([]));
    assert_eq!(body["hasMore"], false);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn quotes_filters_by_search_and_qcategory() {
    let (app, _db) = app_with_quotes(12).await;

    let (_, body) = get(&app, "/api/quotes?qcategory=%20growth%20").await;
    assert_eq!(quote_ids(&body), vec![12, 8, 4]);

    let (_, body) = get(&app, "/api/quotes?search=ada&qcategory=calm&random=true&randomSeed=3").await;
    let mut ids = quote_ids(&body);
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 6, 10]);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn quotes_ignore_non_numeric_category_id() {
    let (app, _db) = app_with_quotes(4).await;
    let (status, body) = get(&app, "/api/quotes?categoryId=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);

    let (_, body) = get(&app, "/api/quotes?categoryId=7").await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["hasMore"], false);
}

#[tokio::test]
async fn invalid_paging_is_a_bad_request() {
    let (app, _db) = app_with_quotes(2).await;

    let (status, body) = get(&app, "/api/quotes?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "limit must be a positive integer");

    let (status, body) = get(&app, "/api/affirmations?offset=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "offset must be a non-negative integer");
}

#[tokio::test]
async fn affirmations_filter_by_category() {
    let db = DBService::new_in_memory().await.unwrap();
    IAffirmation::create(&db.pool, "I am steady", Some("Calm")).await.unwrap();
    IAffirmation::create(&db.pool, "I am bold", Some("Courage")).await.unwrap();
    IAffirmation::create(&db.pool, "I breathe slowly", Some("Calm")).await.unwrap();
    let app = build_router(AppState::new(db));

    let (status, body) = get(&app, "/api/affirmations?icategory=Calm").await;
    assert_eq!(status, StatusCode::OK);
    let texts: Vec<&str> = body["affirmations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["quotetext"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["I breathe slowly", "I am steady"]);
    assert_eq!(body["total"], 2);

    let (_, body) = get(&app, "/api/you-affirmations?random=true&randomSeed=9").await;
    assert_eq!(body["affirmations"], json!([]));
    assert_eq!(body["total"], 0);
    assert_eq!(body["hasMore"], false);
}

#[tokio::test]
async fn categories_are_listed_in_id_order() {
    let db = DBService::new_in_memory().await.unwrap();
    Category::create(&db.pool, "Growth", None).await.unwrap();
    Category::create(&db.pool, "Love", None).await.unwrap();
    let app = build_router(AppState::new(db));

    let (status, body) = get(&app, "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["categoryname"], "Growth");
    assert_eq!(body[1]["categoryname"], "Love");
}

#[tokio::test]
async fn journal_crud_and_stats() {
    let db = DBService::new_in_memory().await.unwrap();
    let app = build_router(AppState::new(db));

    for (date, mood) in [("2025-11-30", "good"), ("2025-11-29", "amazing"), ("2025-11-27", "good")] {
        let (status, _) = send_json(
            &app,
            "POST",
            "/api/journal",
            json!({ "date": date, "mood": mood, "gratitude": ["tea"] }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, entries) = get(&app, "/api/journal").await;
    let entries = entries.as_array().unwrap().clone();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["date"], "2025-11-30");

    let (_, stats) = get(&app, "/api/journal/stats").await;
    assert_eq!(stats, json!({ "totalEntries": 3, "streak": 2, "mostCommonMood": "good" }));

    let oldest_id = entries[2]["id"].as_str().unwrap().to_string();
    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/api/journal/{oldest_id}"),
        json!({ "date": "2025-11-28", "mood": "okay" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["mood"], "okay");
    assert_eq!(updated["gratitude"], json!([]));

    let (_, stats) = get(&app, "/api/journal/stats").await;
    assert_eq!(stats["streak"], 3);

    let delete = Request::delete(format!("/api/journal/{oldest_id}"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let again = Request::delete(format!("/api/journal/{oldest_id}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, again).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn inspirations_crud() {
    let db = DBService::new_in_memory().await.unwrap();
    let app = build_router(AppState::new(db));

    let (status, first) = send_json(
        &app,
        "POST",
        "/api/inspirations",
        json!({ "think": "Small sparks become bonfires.", "author": "Studio mantra", "do": "Ten focused minutes." }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["do"], "Ten focused minutes.");

    let (_, second) = send_json(
        &app,
        "POST",
        "/api/inspirations",
        json!({ "think": "Lead with generosity.", "do": "Send one kind message." }),
    )
    .await;

    let (status, body) = send_json(&app, "POST", "/api/inspirations", json!({ "think": " ", "do": "x" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "think is required");

    let (_, listed) = get(&app, "/api/inspirations").await;
    let ids: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![second["id"].as_str().unwrap(), first["id"].as_str().unwrap()]);

    let first_id = first["id"].as_str().unwrap();
    let (status, updated) = send_json(
        &app,
        "PATCH",
        &format!("/api/inspirations/{first_id}"),
        json!({ "feel": "Grounded, steady." }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["feel"], "Grounded, steady.");
    assert_eq!(updated["think"], "Small sparks become bonfires.");
    assert_eq!(updated["author"], "Studio mantra");

    let missing = uuid::Uuid::new_v4();
    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/inspirations/{missing}"),
        json!({ "feel": "x" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));

    for _ in 0..2 {
        let delete = Request::delete(format!("/api/inspirations/{first_id}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, delete).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
    let (_, listed) = get(&app, "/api/inspirations").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn health_reports_schema() {
    let db = DBService::new_in_memory().await.unwrap();
    let app = build_router(AppState::new(db));

    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isInitialized"], true);
    assert_eq!(body["missingObjects"], json!([]));
}
