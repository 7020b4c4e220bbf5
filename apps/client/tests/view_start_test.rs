mod common;
mod support;

use client::prelude::*;
use client::StatusCode;
use client::view::game_view::{BATTING_FAILED, BATTING_STARTED, BOWLING_FAILED};
use support::{network_down, numbers, rejected, scripted_view, Call};

#[tokio::test]
async fn fresh_view_shows_welcome_and_start_controls() {
    let (server, view) = scripted_view();

    assert_eq!(view.message(), WELCOME_MESSAGE);
    assert_eq!(numbers(&view), (Mode::Unset, 0, STARTING_WICKETS, None, false));
    assert!(matches!(view.render().panel, Panel::Start));
    assert!(server.calls().is_empty());
}

#[tokio::test]
async fn start_batting_enters_batting_mode() {
    let (server, mut view) = scripted_view();

    let mode = view.start_batting().await.expect("start batting");

    assert_eq!(mode, Mode::Batting);
    assert_eq!(view.message(), BATTING_STARTED);
    assert_eq!(numbers(&view), (Mode::Batting, 0, STARTING_WICKETS, None, true));
    assert_eq!(server.calls(), vec![Call::StartBatting]);
    assert!(matches!(view.render().panel, Panel::Playing(_)));
}

#[tokio::test]
async fn start_batting_ignores_server_message_text() {
    let (server, mut view) = scripted_view();
    server.push_start(Ok(MessageResponse {
        message: Some("Game started in batting mode".into()),
    }));

    view.start_batting().await.expect("start batting");

    assert_eq!(view.message(), BATTING_STARTED);
}

#[tokio::test]
async fn start_batting_failure_keeps_session_unset() {
    let (server, mut view) = scripted_view();
    server.push_start(Err(network_down()));

    let err = view.start_batting().await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::TransportError);
    assert_eq!(view.message(), BATTING_FAILED);
    assert_eq!(numbers(&view), (Mode::Unset, 0, STARTING_WICKETS, None, false));
}

#[tokio::test]
async fn start_bowling_records_target() {
    let (server, mut view) = scripted_view();

    let mode = view.start_bowling(30).await.expect("start bowling");

    assert_eq!(mode, Mode::Bowling);
    assert_eq!(view.message(), "Game started in bowling mode (target = 30).");
    assert_eq!(
        numbers(&view),
        (Mode::Bowling, 0, STARTING_WICKETS, Some(30), true)
    );
    assert_eq!(server.calls(), vec![Call::StartBowling(30)]);
}

#[tokio::test]
async fn invalid_target_is_rejected_without_a_request() {
    for target in [0, -5] {
        let (server, mut view) = scripted_view();

        let err = view.start_bowling(target).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidTargetScore);
        assert_eq!(view.message(), "Please enter a valid target score.");
        assert_eq!(numbers(&view), (Mode::Unset, 0, STARTING_WICKETS, None, false));
        assert_eq!(server.call_count(), 0, "target {target} reached the server");
    }
}

#[tokio::test]
async fn start_bowling_surfaces_server_detail() {
    let (server, mut view) = scripted_view();
    server.push_start(Err(rejected("Target score must be positive")));

    let err = view.start_bowling(12).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::ServerRejected);
    assert_eq!(view.message(), "Target score must be positive");
    assert_eq!(view.session().mode(), Mode::Unset);
    assert_eq!(view.session().target(), None);
}

#[tokio::test]
async fn start_bowling_transport_failure_keeps_session_unset() {
    let (server, mut view) = scripted_view();
    server.push_start(Err(network_down()));

    let err = view.start_bowling(25).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::TransportError);
    assert_eq!(view.message(), BOWLING_FAILED);
    assert_eq!(numbers(&view), (Mode::Unset, 0, STARTING_WICKETS, None, false));
    assert_eq!(server.calls(), vec![Call::StartBowling(25)]);
}

#[tokio::test]
async fn start_bowling_without_detail_uses_generic_message() {
    let (server, mut view) = scripted_view();
    server.push_start(Err(ClientError::server(
        StatusCode::INTERNAL_SERVER_ERROR,
        None,
    )));

    view.start_bowling(12).await.unwrap_err();

    assert_eq!(view.message(), BOWLING_FAILED);
}

#[tokio::test]
async fn second_start_is_rejected_while_playing() {
    let (server, mut view) = scripted_view();
    view.start_batting().await.expect("start batting");

    let err = view.start_bowling(20).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::GameInProgress);
    assert_eq!(view.session().mode(), Mode::Batting);
    assert_eq!(server.calls(), vec![Call::StartBatting]);
}

#[tokio::test]
async fn finished_session_cannot_restart() {
    let (server, mut view) = scripted_view();
    server.push_moves([MoveOutcome::Won]);
    view.start_bowling(3).await.expect("start bowling");
    view.make_move(2).await.expect("move");

    let err = view.start_batting().await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::GameFinished);
    assert_eq!(view.session().mode(), Mode::GameOver);
    assert_eq!(server.call_count(), 2);
}
