//! API Integration Tests
//!
//! Each test starts its own server on an ephemeral port, backed by a freshly
//! seeded in-memory store.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use dofus_common::RosterConfig;
use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

/// Create an event through the API and return its details
async fn create_event(
    server: &TestServer,
    max_players: i32,
    team: &[dofus_core::CharacterId],
) -> EventDetailsBody {
    let body = server.world.create_event(max_players, team);
    let response = server
        .post_as("/api/v1/events", server.world.organizer, &body)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn team_of(server: &TestServer, event_id: &str) -> Vec<CharacterBody> {
    let response = server
        .get(&format!("/api/v1/events/{event_id}/characters"))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_create_event() {
    let server = TestServer::start().await.unwrap();
    let a = server.world.character("Alpha");
    let b = server.world.character("Beta");

    let details = create_event(&server, 4, &[a, b, a]).await;

    assert_eq!(details.max_players, 4);
    assert_eq!(details.team_size, 2);
    assert_eq!(details.member_ids(), ids(&[a, b]));
    assert_eq!(details.organizer.id, server.world.organizer.to_string());
    assert_eq!(details.server.id, server.world.server.to_string());
    assert_eq!(details.tag.name, "Dungeon");
    assert_eq!(details.team[0].owner.username, "organizer");
    assert!(details.comments.is_empty());

    let response = server
        .get(&format!("/api/v1/events/{}", details.id))
        .await
        .unwrap();
    let event: EventBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(event.title, details.title);
    assert_eq!(event.status, "public");
    assert_eq!(event.user_id, server.world.organizer.to_string());
}

#[tokio::test]
async fn test_create_event_requires_user() {
    let server = TestServer::start().await.unwrap();
    let a = server.world.character("Alpha");

    let body = server.world.create_event(2, &[a]);
    let response = server.post("/api/v1/events", &body).await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(err.error.code, "MISSING_USER");
}

#[tokio::test]
async fn test_create_event_validation() {
    let server = TestServer::start().await.unwrap();
    let a = server.world.character("Alpha");

    let mut body = server.world.create_event(2, &[a]);
    body.title = String::new();
    let response = server
        .post_as("/api/v1/events", server.world.organizer, &body)
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "VALIDATION_ERROR");
    assert!(err.error.details.is_some_and(|d| d.get("title").is_some()));
}

#[tokio::test]
async fn test_create_event_with_cross_server_team() {
    let server = TestServer::start().await.unwrap();
    let a = server.world.character("Alpha");
    let stranger = server.world.foreign_character("Stranger");

    let body = server.world.create_event(4, &[a, stranger]);
    let response = server
        .post_as("/api/v1/events", server.world.organizer, &body)
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "CROSS_SERVER_CHARACTER");

    let response = server.get("/api/v1/events").await.unwrap();
    let events: Vec<EventBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_event_listings_and_delete() {
    let server = TestServer::start().await.unwrap();
    let a = server.world.character("Alpha");
    let b = server.world.character("Beta");
    let details = create_event(&server, 3, &[a, b]).await;

    let response = server.get("/api/v1/events/summaries").await.unwrap();
    let summaries: Vec<EventSummaryBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, details.id);
    assert_eq!(summaries[0].team_size, 2);

    let response = server.get("/api/v1/events/details").await.unwrap();
    let all: Vec<EventDetailsBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all[0].team_size, 2);

    let path = format!("/api/v1/events/{}", details.id);
    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_EVENT");

    let response = server.get(&format!("{path}/details")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_malformed_event_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/events/not-a-number").await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Roster Tests
// ============================================================================

#[tokio::test]
async fn test_add_over_capacity_is_rejected_whole() {
    let server = TestServer::start().await.unwrap();
    let a = server.world.character("A");
    let b = server.world.character("B");
    let c = server.world.character("C");
    let details = create_event(&server, 2, &[a]).await;

    let response = server
        .post(
            &format!("/api/v1/events/{}/characters", details.id),
            &AddCharactersBody::new(&[b, c]),
        )
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "CAPACITY_EXCEEDED");
    assert_eq!(
        err.error.details,
        Some(json!({ "max_players": 2, "requested": 3 }))
    );

    let team = team_of(&server, &details.id).await;
    assert_eq!(team.len(), 1);
    assert_eq!(team[0].name, "A");
}

#[tokio::test]
async fn test_add_cross_server_names_offenders() {
    let server = TestServer::start().await.unwrap();
    let leader = server.world.character("Leader");
    let a = server.world.character("charA");
    let b = server.world.foreign_character("charB");
    let details = create_event(&server, 3, &[leader]).await;

    let response = server
        .post(
            &format!("/api/v1/events/{}/characters", details.id),
            &AddCharactersBody::new(&[a, b]),
        )
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "CROSS_SERVER_CHARACTER");
    assert_eq!(err.error.details, Some(json!({ "characters": ["charB"] })));
    assert!(err.error.message.contains("charB"));

    // charA was valid but is rejected with the batch
    assert_eq!(team_of(&server, &details.id).await.len(), 1);
}

#[tokio::test]
async fn test_add_characters() {
    let server = TestServer::start().await.unwrap();
    let a = server.world.character("charA");
    let b = server.world.character("charB");
    let details = create_event(&server, 5, &[a]).await;

    // Ids may also be sent as JSON numbers
    let response = server
        .post(
            &format!("/api/v1/events/{}/characters", details.id),
            &json!({ "character_ids": [a.into_inner(), b.into_inner()] }),
        )
        .await
        .unwrap();
    let updated: EventDetailsBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.team_size, 2);
    assert_eq!(updated.member_ids(), ids(&[a, b]));
    assert_eq!(updated.team[1].server.name, "Draconiros");
}

#[tokio::test]
async fn test_add_existing_members_changes_nothing() {
    let server = TestServer::start().await.unwrap();
    let a = server.world.character("charA");
    let b = server.world.character("charB");
    let details = create_event(&server, 2, &[a, b]).await;

    let response = server
        .post(
            &format!("/api/v1/events/{}/characters", details.id),
            &AddCharactersBody::new(&[a, b]),
        )
        .await
        .unwrap();
    let updated: EventDetailsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.team_size, 2);
}

#[tokio::test]
async fn test_add_to_unknown_event() {
    let server = TestServer::start().await.unwrap();
    let a = server.world.character("charA");

    let response = server
        .post("/api/v1/events/9999/characters", &AddCharactersBody::new(&[a]))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_EVENT");
}

#[tokio::test]
async fn test_add_batch_over_configured_size() {
    let server = TestServer::start_with_config(RosterConfig {
        max_players_limit: 8,
        max_batch_size: 2,
    })
    .await
    .unwrap();
    let leader = server.world.character("Leader");
    let batch: Vec<_> = ["x", "y", "z"]
        .iter()
        .map(|n| server.world.character(n))
        .collect();
    let details = create_event(&server, 8, &[leader]).await;

    let response = server
        .post(
            &format!("/api/v1/events/{}/characters", details.id),
            &AddCharactersBody::new(&batch),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_adds_respect_capacity() {
    let server = TestServer::start().await.unwrap();
    let leader = server.world.character("Leader");
    let details = create_event(&server, 3, &[leader]).await;
    let url = format!("{}/api/v1/events/{}/characters", server.base_url(), details.id);

    let mut handles = Vec::new();
    for i in 0..6 {
        let body = AddCharactersBody::new(&[server.world.character(&format!("racer{i}"))]);
        let client = server.client.clone();
        let url = url.clone();
        handles.push(tokio::spawn(async move {
            client.post(url).json(&body).send().await.unwrap().status()
        }));
    }

    let mut accepted = 0;
    for handle in handles {
        let status = handle.await.unwrap();
        if status == StatusCode::OK {
            accepted += 1;
        } else {
            assert_eq!(status, StatusCode::CONFLICT);
        }
    }

    assert_eq!(accepted, 2);
    assert_eq!(team_of(&server, &details.id).await.len(), 3);
}

#[tokio::test]
async fn test_remove_character() {
    let server = TestServer::start().await.unwrap();
    let a = server.world.character("charA");
    let b = server.world.character("charB");
    let details = create_event(&server, 3, &[a, b]).await;

    let response = server
        .delete(&format!("/api/v1/events/{}/characters/{a}", details.id))
        .await
        .unwrap();
    let updated: EventDetailsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.member_ids(), ids(&[b]));
}

#[tokio::test]
async fn test_remove_last_member_is_refused() {
    let server = TestServer::start().await.unwrap();
    let a = server.world.character("charA");
    let details = create_event(&server, 3, &[a]).await;

    let response = server
        .delete(&format!("/api/v1/events/{}/characters/{a}", details.id))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "TEAM_WOULD_BE_EMPTY");
    assert_eq!(team_of(&server, &details.id).await.len(), 1);
}

#[tokio::test]
async fn test_remove_non_member_and_unknown_character() {
    let server = TestServer::start().await.unwrap();
    let a = server.world.character("charA");
    let b = server.world.character("charB");
    let c = server.world.character("charC");
    let details = create_event(&server, 3, &[a, b]).await;

    let response = server
        .delete(&format!("/api/v1/events/{}/characters/{c}", details.id))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "NOT_IN_TEAM");

    let response = server
        .delete(&format!("/api/v1/events/{}/characters/424242", details.id))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_CHARACTER");

    assert_eq!(team_of(&server, &details.id).await.len(), 2);
}
