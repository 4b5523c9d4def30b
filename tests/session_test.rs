//! Scenario tests for the game session.

use tictactoe_rounds::{
    CpuPlayer, GameMode, GameSession, Mark, MoveError, PlayerSlot, RoundResult, Score,
    SessionEvent,
};
use tokio::sync::mpsc;

fn session(human_mark: Mark, mode: GameMode) -> (GameSession, mpsc::UnboundedReceiver<SessionEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut session = GameSession::with_cpu_player(tx, CpuPlayer::with_seed(99));
    session.configure(human_mark, mode).expect("pre-start configure");
    session.start();
    (session, rx)
}

#[test]
fn occupied_cell_is_rejected_without_mutation() {
    let (mut session, _rx) = session(Mark::X, GameMode::Multiplayer);

    session.submit_move(4, PlayerSlot::One).unwrap();
    let board_before = session.board().clone();

    let err = session.submit_move(4, PlayerSlot::Two).unwrap_err();
    assert_eq!(err, MoveError::Occupied { position: 4 });
    assert_eq!(session.board(), &board_before);
    assert_eq!(session.current_turn(), Mark::O);
}

#[test]
fn out_of_range_is_rejected() {
    let (mut session, _rx) = session(Mark::X, GameMode::Multiplayer);
    let err = session.submit_move(9, PlayerSlot::One).unwrap_err();
    assert_eq!(err, MoveError::OutOfRange { position: 9, cells: 9 });
}

#[test]
fn clicks_are_rejected_on_the_cpu_turn() {
    // Human picked O, so the CPU opens with X.
    let (mut session, _rx) = session(Mark::O, GameMode::Cpu);

    let err = session.handle_cell_click(0).unwrap_err();
    assert_eq!(err, MoveError::OutOfTurn);
    assert!(session.board().empty_positions().len() == 9);
}

#[test]
fn configure_is_rejected_after_start() {
    let (mut session, _rx) = session(Mark::X, GameMode::Cpu);
    assert!(session.configure(Mark::O, GameMode::Multiplayer).is_err());
    assert!(session.set_board_size(4).is_err());
}

#[test]
fn alternating_moves_with_no_line_end_in_a_tie() {
    let (mut session, _rx) = session(Mark::X, GameMode::Multiplayer);

    // X X O / O O X / X O X - full, no three in a row.
    for (position, seat) in [
        (0, PlayerSlot::One),
        (2, PlayerSlot::Two),
        (1, PlayerSlot::One),
        (3, PlayerSlot::Two),
        (5, PlayerSlot::One),
        (4, PlayerSlot::Two),
        (6, PlayerSlot::One),
        (7, PlayerSlot::Two),
        (8, PlayerSlot::One),
    ] {
        session.submit_move(position, seat).unwrap();
    }

    assert!(session.board().is_full());
    assert_eq!(session.result(), Some(RoundResult::Tie));
    assert!(!session.is_active());
    assert_eq!(session.score(), Score { player_one: 0, player_two: 0, ties: 1 });
}

#[test]
fn win_takes_priority_over_tie_on_a_full_board() {
    let (mut session, _rx) = session(Mark::X, GameMode::Multiplayer);

    // The ninth move fills the board and completes the 2-5-8 column.
    for (position, seat) in [
        (2, PlayerSlot::One),
        (1, PlayerSlot::Two),
        (5, PlayerSlot::One),
        (3, PlayerSlot::Two),
        (0, PlayerSlot::One),
        (4, PlayerSlot::Two),
        (7, PlayerSlot::One),
        (6, PlayerSlot::Two),
        (8, PlayerSlot::One),
    ] {
        session.submit_move(position, seat).unwrap();
    }

    assert!(session.board().is_full());
    assert_eq!(session.result(), Some(RoundResult::Win(Mark::X)));
    assert_eq!(session.score(), Score { player_one: 1, player_two: 0, ties: 0 });
}

#[test]
fn human_top_row_beats_cpu() {
    // Human plays X across the top; the CPU seat is steered elsewhere.
    let (mut session, _rx) = session(Mark::X, GameMode::Cpu);

    session.submit_move(0, PlayerSlot::One).unwrap();
    session.submit_move(3, PlayerSlot::Two).unwrap();
    session.submit_move(1, PlayerSlot::One).unwrap();
    session.submit_move(4, PlayerSlot::Two).unwrap();
    session.submit_move(2, PlayerSlot::One).unwrap();

    assert_eq!(session.result(), Some(RoundResult::Win(Mark::X)));
    assert_eq!(session.score().player_one, 1);
}

#[test]
fn second_mover_win_swaps_marks_for_the_next_round() {
    let (mut session, _rx) = session(Mark::X, GameMode::Multiplayer);
    assert_eq!(session.seats().mark_of(PlayerSlot::One), Mark::X);

    // Seat two (O) wins the middle row while seat one scatters.
    for (position, seat) in [
        (0, PlayerSlot::One),
        (3, PlayerSlot::Two),
        (1, PlayerSlot::One),
        (4, PlayerSlot::Two),
        (8, PlayerSlot::One),
        (5, PlayerSlot::Two),
    ] {
        session.submit_move(position, seat).unwrap();
    }
    assert_eq!(session.result(), Some(RoundResult::Win(Mark::O)));
    assert_eq!(session.score().player_two, 1);

    session.confirm_next_round();

    // The winner leads round two: seat two now holds X.
    assert_eq!(session.seats().mark_of(PlayerSlot::Two), Mark::X);
    assert_eq!(session.seats().first_mover(), PlayerSlot::Two);
    assert!(session.is_active());
    assert_eq!(session.current_turn(), Mark::X);
}

#[test]
fn tie_keeps_the_seat_assignment() {
    let (mut session, _rx) = session(Mark::O, GameMode::Multiplayer);
    let seats_before = session.seats();

    for (position, seat) in [
        (0, PlayerSlot::Two),
        (2, PlayerSlot::One),
        (1, PlayerSlot::Two),
        (3, PlayerSlot::One),
        (5, PlayerSlot::Two),
        (4, PlayerSlot::One),
        (6, PlayerSlot::Two),
        (7, PlayerSlot::One),
        (8, PlayerSlot::Two),
    ] {
        session.submit_move(position, seat).unwrap();
    }
    assert_eq!(session.result(), Some(RoundResult::Tie));

    session.confirm_next_round();
    assert_eq!(session.seats(), seats_before);
}

#[test]
fn reset_keeps_scores_and_seats() {
    let (mut session, _rx) = session(Mark::X, GameMode::Multiplayer);
    session.submit_move(0, PlayerSlot::One).unwrap();
    session.submit_move(3, PlayerSlot::Two).unwrap();

    session.confirm_reset();

    assert!(session.is_active());
    assert_eq!(session.current_turn(), Mark::X);
    assert_eq!(session.board().empty_positions().len(), 9);
    assert_eq!(session.seats().mark_of(PlayerSlot::One), Mark::X);
}

#[test]
fn quit_zeroes_scores_and_clears_the_board() {
    let (mut session, _rx) = session(Mark::X, GameMode::Cpu);

    session.submit_move(0, PlayerSlot::One).unwrap();
    session.submit_move(3, PlayerSlot::Two).unwrap();
    session.submit_move(1, PlayerSlot::One).unwrap();
    session.submit_move(4, PlayerSlot::Two).unwrap();
    session.submit_move(2, PlayerSlot::One).unwrap();
    assert_eq!(session.score().player_one, 1);

    session.quit();

    assert_eq!(session.score(), Score::default());
    assert!(session.board().empty_positions().len() == 9);
    assert!(!session.is_active());
    // The menu accepts configuration again.
    assert!(session.configure(Mark::O, GameMode::Multiplayer).is_ok());
}

#[test]
fn stale_cpu_move_is_discarded() {
    let (mut session, _rx) = session(Mark::O, GameMode::Cpu);
    let stale_round = session.cpu_turn_pending().expect("CPU opens");

    session.confirm_reset();
    assert_ne!(session.round_id(), stale_round);

    session.apply_cpu_move(stale_round);
    assert_eq!(session.board().empty_positions().len(), 9);

    // The live round id still applies.
    let live_round = session.cpu_turn_pending().expect("CPU still opens");
    session.apply_cpu_move(live_round);
    assert_eq!(session.board().empty_positions().len(), 8);
}

#[test]
fn moves_are_rejected_after_the_round_ends() {
    let (mut session, _rx) = session(Mark::X, GameMode::Multiplayer);
    for (position, seat) in [
        (0, PlayerSlot::One),
        (3, PlayerSlot::Two),
        (1, PlayerSlot::One),
        (4, PlayerSlot::Two),
        (2, PlayerSlot::One),
    ] {
        session.submit_move(position, seat).unwrap();
    }
    assert_eq!(session.result(), Some(RoundResult::Win(Mark::X)));

    let err = session.submit_move(5, PlayerSlot::Two).unwrap_err();
    assert_eq!(err, MoveError::Inactive);
}

#[test]
fn events_follow_a_winning_move() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = GameSession::with_cpu_player(tx, CpuPlayer::with_seed(1));
    session.configure(Mark::X, GameMode::Multiplayer).unwrap();
    session.start();

    for (position, seat) in [
        (0, PlayerSlot::One),
        (3, PlayerSlot::Two),
        (1, PlayerSlot::One),
        (4, PlayerSlot::Two),
        (2, PlayerSlot::One),
    ] {
        session.submit_move(position, seat).unwrap();
    }

    let mut saw_round_end = false;
    let mut final_score = None;
    while let Ok(event) = rx.try_recv() {
        match event {
            SessionEvent::RoundEnded { result } => {
                assert_eq!(result, RoundResult::Win(Mark::X));
                saw_round_end = true;
            }
            SessionEvent::ScoreChanged { score } => final_score = Some(score),
            _ => {}
        }
    }
    assert!(saw_round_end);
    assert_eq!(
        final_score,
        Some(Score { player_one: 1, player_two: 0, ties: 0 })
    );
}
