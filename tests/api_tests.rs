// tests/api_tests.rs

use trivia_backend::{config::Config, routes, state::AppState};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
///
/// The trivia source URL points at a closed local port so the refresh path
/// deterministically falls back to the bundled question bank.
async fn spawn_app() -> String {
    let config = Config {
        rust_log: "error".to_string(),
        trivia_api_url: "http://127.0.0.1:1/api.php".to_string(),
        question_count: 10,
        trivia_category: None,
        trivia_difficulty: None,
        fetch_timeout_secs: 2,
        port: 0,
    };

    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.fetch_timeout_secs))
        .build()
        .expect("Failed to build HTTP client");

    let state = AppState::new(config, http);
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

fn submission(name: &str, score: u32, total: u32, average_time: f64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "score": score,
        "totalQuestions": total,
        "percentage": (100.0 * score as f64 / total as f64).round() as u32,
        "averageTime": average_time,
    })
}

#[tokio::test]
async fn health_check_404() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn questions_fall_back_when_source_unreachable() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/api/quiz/questions", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert: the fallback bank is served, never an error.
    assert_eq!(response.status().as_u16(), 200);
    let questions: Vec<serde_json::Value> = response.json().await.unwrap();
    assert_eq!(questions.len(), 10);

    for q in &questions {
        let correct = q["correctAnswer"].as_str().unwrap();
        let options: Vec<&str> = q["options"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o.as_str().unwrap())
            .collect();
        assert_eq!(options.iter().filter(|o| **o == correct).count(), 1);
    }
}

#[tokio::test]
async fn questions_are_cached_for_the_day() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act: two reads on the same day must serve the identical set.
    let first: Vec<serde_json::Value> = client
        .get(&format!("{}/api/quiz/questions", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let second: Vec<serde_json::Value> = client
        .get(&format!("{}/api/quiz/questions", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Assert
    assert_eq!(first, second);
}

#[tokio::test]
async fn leaderboard_starts_empty() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/api/quiz/leaderboard", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert: empty sequence, not an error.
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["entries"].as_array().unwrap().len(), 0);
    assert!(body["userId"].is_null());
}

#[tokio::test]
async fn submissions_rank_by_percentage_then_speed() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    for payload in [
        submission("Ann", 9, 10, 5.0),
        submission("Bo", 8, 10, 3.0),
        submission("Cy", 9, 10, 4.0),
    ] {
        let response = client
            .post(&format!("{}/api/quiz/leaderboard", address))
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status().as_u16(), 201);
    }

    let body: serde_json::Value = client
        .get(&format!("{}/api/quiz/leaderboard", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Assert: Cy (90%, 4.0s) beats Ann (90%, 5.0s) beats Bo (80%, 3.0s).
    let names: Vec<&str> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Cy", "Ann", "Bo"]);
}

#[tokio::test]
async fn submit_binds_visitor_via_cookie() {
    // Arrange: a client with a cookie store, like a browser.
    let address = spawn_app().await;
    let client = reqwest::Client::builder().cookie_store(true).build().unwrap();

    // Act
    let response = client
        .post(&format!("{}/api/quiz/leaderboard", address))
        .json(&submission("Ann", 9, 10, 5.0))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("Set-Cookie header missing")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("quizUserId="));

    let entry: serde_json::Value = response.json().await.unwrap();
    let entry_id = entry["id"].as_str().unwrap();

    // Assert: a later read by the same visitor reports their own entry id.
    let body: serde_json::Value = client
        .get(&format!("{}/api/quiz/leaderboard", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["userId"].as_str().unwrap(), entry_id);
}

#[tokio::test]
async fn submit_fails_validation() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let invalid = [
        // Empty name.
        submission("", 9, 10, 5.0),
        // Whitespace-only name (empty after trimming).
        submission("   ", 9, 10, 5.0),
        // 21-character name.
        submission(&"x".repeat(21), 9, 10, 5.0),
        // Score exceeds total questions.
        submission("Ann", 11, 10, 5.0),
    ];

    // Act / Assert
    for payload in invalid {
        let response = client
            .post(&format!("{}/api/quiz/leaderboard", address))
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status().as_u16(), 400);
    }

    // Rejected submissions must not mutate the store.
    let body: serde_json::Value = client
        .get(&format!("{}/api/quiz/leaderboard", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["entries"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn submit_accepts_padded_name_within_trimmed_limit() {
    // Arrange: 20 characters after trimming, padded with whitespace.
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let padded = format!("  {}  ", "x".repeat(20));

    // Act
    let response = client
        .post(&format!("{}/api/quiz/leaderboard", address))
        .json(&submission(&padded, 9, 10, 5.0))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert: the length limit applies to the trimmed name.
    assert_eq!(response.status().as_u16(), 201);
    let entry: serde_json::Value = response.json().await.unwrap();
    assert_eq!(entry["name"].as_str().unwrap(), "x".repeat(20));
}

#[tokio::test]
async fn submitted_entry_echoes_score_fields() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let entry: serde_json::Value = client
        .post(&format!("{}/api/quiz/leaderboard", address))
        .json(&submission("  Ann  ", 9, 10, 5.0))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Assert: name is trimmed, fields echoed, id and date stamped.
    assert_eq!(entry["name"], "Ann");
    assert_eq!(entry["score"], 9);
    assert_eq!(entry["totalQuestions"], 10);
    assert_eq!(entry["percentage"], 90);
    assert!(!entry["id"].as_str().unwrap().is_empty());
    assert_eq!(entry["date"].as_str().unwrap().len(), 10);
}
