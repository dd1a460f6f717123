//! End-to-end tests for the session state machine, driven by hand.

use std::time::Duration;
use tictactoe_timeline::{
    Effect, Event, GameConfig, GameMode, Mark, Orchestrator, Phase, Position, Square,
};

fn pvp() -> Orchestrator {
    let mut game = Orchestrator::new(&GameConfig::default());
    game.select_mode(GameMode::PlayerVsPlayer);
    game
}

fn scheduled(effects: &[Effect]) -> Option<tictactoe_timeline::Ticket> {
    effects.iter().find_map(|effect| match effect {
        Effect::ScheduleOpponent { ticket, .. } => Some(*ticket),
        Effect::CancelOpponent { .. } => None,
    })
}

#[test]
fn test_pvp_top_row_win() {
    let mut game = pvp();
    for index in [0, 4, 1, 7, 2] {
        assert!(game.click_cell(index).is_empty());
    }

    assert_eq!(game.status().to_string(), "Winner: X");
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.history().len(), 6);

    game.click_cell(8);
    assert_eq!(game.history().len(), 6, "won board ignores clicks");
    assert_eq!(game.current_board().get(Position::BottomRight), Square::Empty);
}

#[test]
fn test_won_board_can_be_left_through_history() {
    let mut game = pvp();
    for index in [0, 4, 1, 7, 2] {
        game.click_cell(index);
    }
    assert_eq!(game.phase(), Phase::GameOver);

    game.jump_to(4);
    assert_eq!(game.phase(), Phase::HumanTurn);
    assert_eq!(game.status().to_string(), "Next player: X");

    game.click_cell(8);
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.current_index(), 5);
    assert_eq!(game.latest_index(), 5);
    assert_eq!(game.current_board().get(Position::BottomRight), Square::Occupied(Mark::X));
    assert_eq!(game.current_board().get(Position::TopRight), Square::Empty);
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn test_history_labels_follow_moves() {
    let mut game = pvp();
    game.click_cell(4);
    game.click_cell(0);

    let snapshot = game.snapshot();
    assert_eq!(
        snapshot.move_labels(),
        &vec![
            "Go to game start".to_string(),
            "Go to move #1".to_string(),
            "Go to move #2".to_string(),
        ]
    );
    assert_eq!(snapshot.status(), "Next player: X");
}

#[test]
fn test_time_travel_branch_discards_future() {
    let mut game = pvp();
    for index in [0, 4, 1] {
        game.click_cell(index);
    }

    game.jump_to(1);
    assert_eq!(game.turn(), Mark::O);
    assert_eq!(game.history().len(), 4);

    game.click_cell(8);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_index(), 2);
    assert_eq!(game.current_board().get(Position::BottomRight), Square::Occupied(Mark::O));
    assert_eq!(game.current_board().get(Position::Center), Square::Empty);
}

#[test]
fn test_occupied_and_out_of_range_clicks_are_ignored() {
    let mut game = pvp();
    game.click_cell(4);
    let before = game.snapshot();

    game.click_cell(4);
    game.click_cell(9);
    game.jump_to(5);

    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_draw_has_no_message() {
    let mut game = pvp();
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.click_cell(index);
    }
    assert_eq!(game.history().len(), 10);
    assert_eq!(game.status().to_string(), "Next player: O");
    assert_eq!(game.phase(), Phase::HumanTurn);
}

#[test]
fn test_ai_schedules_once_per_turn() {
    let mut game = Orchestrator::new(&GameConfig::default());
    game.select_mode(GameMode::PlayerVsAi);

    let effects = game.click_cell(0);
    let ticket = scheduled(&effects).expect("opponent scheduled");
    assert_eq!(
        effects,
        vec![Effect::ScheduleOpponent {
            ticket,
            delay: Duration::from_millis(500),
        }]
    );
    assert_eq!(game.phase(), Phase::OpponentPending);

    // Input is disabled while pending.
    assert!(game.click_cell(1).is_empty());
    assert_eq!(game.history().len(), 2);

    let effects = game.handle(Event::OpponentTimerFired(ticket));
    assert!(effects.is_empty());
    assert_eq!(game.current_board().get(Position::TopCenter), Square::Occupied(Mark::O));
    assert_eq!(game.turn(), Mark::X);
    assert!(!game.is_opponent_pending());
}

#[test]
fn test_jump_cancels_and_stale_ticket_is_ignored() {
    let mut game = Orchestrator::new(&GameConfig::default());
    game.select_mode(GameMode::PlayerVsAi);
    let first = scheduled(&game.click_cell(0)).expect("opponent scheduled");

    let effects = game.jump_to(0);
    assert_eq!(effects, vec![Effect::CancelOpponent { ticket: first }]);
    assert!(!game.is_opponent_pending());

    assert!(game.opponent_timer_fired(first).is_empty());
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.current_index(), 0);
}

#[test]
fn test_full_board_opponent_passes_once() {
    let mut game = Orchestrator::new(&GameConfig::default());
    game.select_mode(GameMode::PlayerVsAi);

    // O always takes the first empty square: 0, 2, 5, 7.
    for index in [1, 3, 4, 6, 8] {
        let ticket = scheduled(&game.click_cell(index)).expect("opponent scheduled");
        game.opponent_timer_fired(ticket);
    }

    assert_eq!(game.history().len(), 10);
    assert!(game.current_board().squares().iter().all(|s| *s != Square::Empty));
    assert_eq!(game.status().to_string(), "Next player: O");
    assert!(!game.is_opponent_pending());
    assert_eq!(game.phase(), Phase::HumanTurn);
}
