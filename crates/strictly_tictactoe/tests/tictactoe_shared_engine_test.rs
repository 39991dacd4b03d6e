//! Tests for sharing one engine between threads.

use std::thread;
use strictly_tictactoe::{GameEngine, Mark, Phase, Seat, SharedEngine, invariants::check_state};

fn started_shared() -> SharedEngine {
    let shared = SharedEngine::new(GameEngine::new());
    shared.with(|engine| {
        engine.set_player_name(Seat::One, "Amy");
        engine.set_player_name(Seat::Two, "Bob");
        engine.start_game()
    })
    .expect("valid names");
    shared
}

#[test]
fn test_concurrent_moves_never_corrupt_board() {
    let shared = started_shared();

    let handles: Vec<_> = (0..9)
        .map(|index| {
            let shared = shared.clone();
            thread::spawn(move || {
                shared.with(|engine| {
                    engine.make_move(index);
                });
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread finished");
    }

    let state = shared.snapshot();
    assert!(check_state(&state).is_ok());
    let xs = state.board().count(Mark::X);
    let os = state.board().count(Mark::O);
    assert!(xs == os || xs == os + 1);
    assert_eq!(state.history().len(), state.board().occupied());
}

#[test]
fn test_same_square_from_many_threads_placed_once() {
    let shared = started_shared();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || shared.with(|engine| engine.make_move(4).is_applied()))
        })
        .collect();
    let applied = handles
        .into_iter()
        .map(|h| h.join().expect("thread finished"))
        .filter(|applied| *applied)
        .count();

    assert_eq!(applied, 1);
    assert_eq!(shared.snapshot().board().occupied(), 1);
}

#[test]
fn test_subscriber_on_other_thread_sees_final_state() {
    let shared = started_shared();
    let mut rx = shared.subscribe();

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for index in [0, 3, 1, 4, 2] {
                shared.with(|engine| engine.make_move(index));
            }
        })
    };
    writer.join().expect("writer finished");

    assert!(rx.has_changed().expect("sender alive"));
    let state = rx.borrow_and_update().clone();
    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(state.winner().map(|p| p.name()), Some("Amy"));
}
