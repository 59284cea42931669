//! Interrupted Game Write Tests
//!
//! Game updates land one column at a time. These tests fail the store at
//! every column of an update and check that the game left behind still has
//! disjoint availability lists and a roster within its team size.
//!
//! Run with: cargo test -p integration-tests --test write_failure_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

async fn create_game(server: &TestServer, token: &str, team_size: i32) -> GameResponse {
    let request = CreateGameRequest::vs("Red Fox").with_team_size(team_size);
    let response = server.post_auth("/api/games", token, &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn get_game(server: &TestServer, id: &str) -> GameResponse {
    let response = server.get(&format!("/api/games/{id}")).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn assign(server: &TestServer, token: &str, id: &str, roster: &[&str]) {
    let response = server
        .put_auth(
            &format!("/api/games/{id}/roster"),
            token,
            &json!({ "roster": roster }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

async fn set_available(server: &TestServer, id: &str, player_id: &str, available: bool) -> reqwest::Response {
    server
        .post(
            &format!("/api/games/{id}/availability"),
            &json!({ "playerId": player_id, "isAvailable": available }),
        )
        .await
        .unwrap()
}

fn assert_consistent(game: &GameResponse, context: &str) {
    for p in &game.available {
        assert!(
            !game.unavailable.contains(p),
            "{p} both available and unavailable after {context}"
        );
    }
    assert!(
        game.roster.len() <= usize::try_from(game.team_size).unwrap(),
        "roster of {} over team size {} after {context}",
        game.roster.len(),
        game.team_size
    );
}

#[tokio::test]
async fn test_interrupted_availability_toggle() {
    let server = TestServer::start().await.unwrap();
    let token = server.manager_token().await.unwrap();

    for is_available in [true, false] {
        for failing_write in 1..=2 {
            let game = create_game(&server, &token, 5).await;
            let response = set_available(&server, &game.id, "p1", !is_available).await;
            assert_status(response, StatusCode::OK).await.unwrap();

            server.stores.games.fail_on_write(failing_write);
            let response = set_available(&server, &game.id, "p1", is_available).await;
            assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
                .await
                .unwrap();

            let stored = get_game(&server, &game.id).await;
            assert_consistent(
                &stored,
                &format!("toggle to {is_available} failing write {failing_write}"),
            );

            // Retrying converges on the requested state
            let response = set_available(&server, &game.id, "p1", is_available).await;
            let retried: GameResponse = assert_json(response, StatusCode::OK).await.unwrap();
            let (joined, left) = if is_available {
                (&retried.available, &retried.unavailable)
            } else {
                (&retried.unavailable, &retried.available)
            };
            assert_eq!(joined, &vec!["p1".to_string()]);
            assert!(left.is_empty());
        }
    }
}

#[tokio::test]
async fn test_interrupted_withdraw() {
    let server = TestServer::start().await.unwrap();
    let token = server.manager_token().await.unwrap();

    for failing_write in 1..=4 {
        let game = create_game(&server, &token, 5).await;
        assign(&server, &token, &game.id, &["p1", "p2", "p3"]).await;
        let response = set_available(&server, &game.id, "p3", true).await;
        assert_status(response, StatusCode::OK).await.unwrap();

        server.stores.games.fail_on_write(failing_write);
        let response = server
            .post(
                &format!("/api/games/{}/withdraw", game.id),
                &json!({ "playerId": "p3" }),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
            .await
            .unwrap();

        let stored = get_game(&server, &game.id).await;
        assert_consistent(&stored, &format!("withdraw failing write {failing_write}"));
    }
}

#[tokio::test]
async fn test_interrupted_shrinking_edit() {
    let server = TestServer::start().await.unwrap();
    let token = server.manager_token().await.unwrap();

    for failing_write in 1..=2 {
        let game = create_game(&server, &token, 5).await;
        assign(&server, &token, &game.id, &["p1", "p2", "p3", "p4", "p5"]).await;

        server.stores.games.fail_on_write(failing_write);
        let response = server
            .patch_auth(
                &format!("/api/games/{}", game.id),
                &token,
                &json!({ "teamSize": 3, "roster": ["p1", "p2", "p3"] }),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
            .await
            .unwrap();

        let stored = get_game(&server, &game.id).await;
        assert_consistent(&stored, &format!("shrink failing write {failing_write}"));
    }
}

#[tokio::test]
async fn test_interrupted_growing_edit() {
    let server = TestServer::start().await.unwrap();
    let token = server.manager_token().await.unwrap();

    for failing_write in 1..=2 {
        let game = create_game(&server, &token, 2).await;
        assign(&server, &token, &game.id, &["p1", "p2"]).await;

        server.stores.games.fail_on_write(failing_write);
        let response = server
            .patch_auth(
                &format!("/api/games/{}", game.id),
                &token,
                &json!({ "teamSize": 4, "roster": ["p1", "p2", "p3", "p4"] }),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
            .await
            .unwrap();

        let stored = get_game(&server, &game.id).await;
        assert_consistent(&stored, &format!("grow failing write {failing_write}"));
    }
}
