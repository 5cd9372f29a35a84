//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: course files → normalization → batch upload

use course_indexer::index::SearchIndex;
use course_indexer::{AlgoliaIndex, IndexConfig, InputSource, LookupTables, UploadDriver};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

// ============================================================================
// Fixtures
// ============================================================================

fn section(component: &str, current: &str, max: &str) -> Value {
    json!({
        "component": component,
        "currentClassSize": current,
        "maxClassSize": max,
        "notes": "See department for details",
        "instructors": ["Sahami, M."],
        "schedules": [
            {
                "startTime": "1:30:00 PM",
                "endTime": "2:20:00 PM",
                "days": "Monday Wednesday Friday",
                "location": "NVIDIA Auditorium"
            }
        ]
    })
}

fn cs106a() -> Value {
    json!({
        "objectID": "105750",
        "code": "106A",
        "subject": "CS",
        "title": "Programming Methodology",
        "sections": [
            section("LEC", "310", "400"),
            section("DIS", "12", "15"),
            section("DIS", "14", "15"),
            section("CLK", "0", "0")
        ],
        "totalSections": 6,
        "gers": ["way_ce", "WAY-FR"]
    })
}

fn math51() -> Value {
    json!({
        "objectID": "200117",
        "code": "51",
        "subject": "MATH",
        "title": "Linear Algebra, Multivariable Calculus, and Modern Applications",
        "sections": [section("LEC", "201", "250")],
        "totalSections": 1,
        "gers": ["WAY-FR"]
    })
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> InputSource {
    let path = dir.path().join(name);
    fs::write(&path, value.to_string()).unwrap();
    InputSource::Path(path)
}

fn tables(dir: &Path) -> LookupTables {
    let counts = dir.join("counts.json");
    let ratings = dir.join("ratings.json");
    fs::write(&counts, json!({"105750": 412, "200117": 87}).to_string()).unwrap();
    fs::write(
        &ratings,
        json!({
            "105750": {
                "current_score": 4.42,
                "current_score_normalized": 0.88,
                "current_score_count": 133,
                "scores": [4.1, 4.3, 4.42]
            }
        })
        .to_string(),
    )
    .unwrap();

    LookupTables::load(&counts, &ratings).unwrap()
}

fn index_for(server: &MockServer) -> AlgoliaIndex {
    let config = IndexConfig::new("APP123", "admin-key", "courses").with_host(server.uri());
    AlgoliaIndex::new(&config).unwrap()
}

async fn mount_batch(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/1/indexes/courses/batch"))
        .and(header("X-Algolia-Application-Id", "APP123"))
        .and(header("X-Algolia-API-Key", "admin-key"))
        .respond_with(|req: &Request| {
            let body: Value = serde_json::from_slice(&req.body).unwrap();
            let ids: Vec<Value> = body["requests"]
                .as_array()
                .unwrap()
                .iter()
                .map(|r| r["body"]["objectID"].clone())
                .collect();
            ResponseTemplate::new(200).set_body_json(json!({"taskID": 9001, "objectIDs": ids}))
        })
        .mount(server)
        .await;
}

async fn uploaded_bodies(server: &MockServer) -> Vec<Vec<Value>> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|req| {
            let body: Value = serde_json::from_slice(&req.body).unwrap();
            body["requests"]
                .as_array()
                .unwrap()
                .iter()
                .map(|r| {
                    assert_eq!(r["action"], "updateObject");
                    r["body"].clone()
                })
                .collect()
        })
        .collect()
}

// ============================================================================
// End-to-End Tests
// ============================================================================

#[tokio::test]
async fn test_upload_normalized_courses() {
    let mock_server = MockServer::start().await;
    mount_batch(&mock_server).await;

    let dir = tempfile::tempdir().unwrap();
    let source = write_json(&dir, "courses.json", &json!([cs106a(), math51()]));

    let driver = UploadDriver::new(index_for(&mock_server), tables(dir.path()));
    let summary = driver.run(&[source]).await;

    assert!(!summary.has_failures());
    assert_eq!(summary.records, 2);

    let bodies = uploaded_bodies(&mock_server).await;
    assert_eq!(bodies.len(), 1);

    let cs = &bodies[0][0];
    assert_eq!(cs["objectID"], "105750");
    assert_eq!(cs["numberInt"], 106);
    assert_eq!(cs["numberSuffix"], "A");
    assert_eq!(cs["numReviews"], 412);
    assert_eq!(cs["currentScore"], 4.42);
    assert_eq!(cs["currentScoreNormalized"], 0.88);
    assert_eq!(cs["currentScoreCount"], 133);
    assert_eq!(cs["scoreHistory"], json!([4.1, 4.3, 4.42]));
    assert_eq!(cs["tooManySections"], true);
    assert_eq!(cs["filterLectureOnly"], true);
    assert_eq!(cs["gers"], json!(["WAY-CE", "WAY-FR"]));
    assert_eq!(cs["title"], "Programming Methodology");
    assert_eq!(
        cs["sections"],
        json!([
            {
                "component": "LEC",
                "currentClassSize": 310,
                "maxClassSize": 400,
                "instructors": ["Sahami, M."],
                "schedules": [
                    {"days": "Monday Wednesday Friday", "location": "NVIDIA Auditorium"}
                ]
            }
        ])
    );

    let math = &bodies[0][1];
    assert_eq!(math["numberInt"], 51);
    assert_eq!(math["numberSuffix"], "");
    assert_eq!(math["numReviews"], 87);
    assert!(math.get("currentScore").is_none());
    assert!(math.get("scoreHistory").is_none());
    assert!(math.get("tooManySections").is_none());
    assert!(math.get("filterLectureOnly").is_none());
}

#[tokio::test]
async fn test_bad_file_skipped_next_file_uploaded() {
    let mock_server = MockServer::start().await;
    mount_batch(&mock_server).await;

    let dir = tempfile::tempdir().unwrap();
    let mut malformed = math51();
    malformed["code"] = json!("MATH");
    let mut other = cs106a();
    other["objectID"] = json!("105751");

    let bad = write_json(&dir, "a.json", &json!([cs106a(), malformed, math51()]));
    let good = write_json(&dir, "b.json", &json!([other, math51()]));

    let driver = UploadDriver::new(index_for(&mock_server), tables(dir.path()));
    let summary = driver.run(&[bad, good]).await;

    let bodies = uploaded_bodies(&mock_server).await;
    assert_eq!(bodies.len(), 1);
    let ids: Vec<&Value> = bodies[0].iter().map(|b| &b["objectID"]).collect();
    assert_eq!(ids, vec!["105751", "200117"]);

    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.uploaded.len(), 1);
    assert_eq!(summary.records, 2);
}

#[tokio::test]
async fn test_rejected_batch_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/indexes/courses/batch"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "Method not allowed with this API key",
            "status": 403
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let first = write_json(&dir, "a.json", &json!([cs106a()]));
    let second = write_json(&dir, "b.json", &json!([math51()]));

    let index = index_for(&mock_server);
    assert_eq!(index.name(), "courses");

    let driver = UploadDriver::new(index, tables(dir.path()));
    let summary = driver.run(&[first, second]).await;

    assert!(summary.uploaded.is_empty());
    assert_eq!(summary.failed.len(), 2);
    assert!(summary.failed[0].error.to_string().contains("HTTP 403"));
}

#[tokio::test]
async fn test_glob_sources_uploaded_in_order() {
    let mock_server = MockServer::start().await;
    mount_batch(&mock_server).await;

    let dir = tempfile::tempdir().unwrap();
    write_json(&dir, "2-math.json", &json!([math51()]));
    write_json(&dir, "1-cs.json", &json!([cs106a()]));

    let pattern = format!("{}/*-*.json", dir.path().display());
    let sources = InputSource::resolve(&[], Some(&pattern)).unwrap();
    assert_eq!(sources.len(), 2);

    let driver = UploadDriver::new(index_for(&mock_server), tables(dir.path()));
    let summary = driver.run(&sources).await;
    assert_eq!(summary.uploaded.len(), 2);

    let bodies = uploaded_bodies(&mock_server).await;
    assert_eq!(bodies[0][0]["objectID"], "105750");
    assert_eq!(bodies[1][0]["objectID"], "200117");
}
