//! Multi-threaded use of a shared scoreboard
//!
//! Boards are shared through `Arc` and driven from plain OS threads.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use scoreboard::Scoreboard;

#[test]
fn concurrent_starts_lose_nothing() {
    let board = Arc::new(Scoreboard::new());
    let num_threads = 16;
    let per_thread = 50;

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_index| {
            let board = Arc::clone(&board);
            thread::spawn(move || {
                (0..per_thread)
                    .map(|i| {
                        board
                            .start_match(
                                &format!("Home-{}-{}", thread_index, i),
                                &format!("Away-{}-{}", thread_index, i),
                            )
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "Duplicate match id: {}", id);
        }
    }

    assert_eq!(ids.len(), num_threads * per_thread);
    assert_eq!(board.len(), num_threads * per_thread);
    assert!(ids.iter().all(|id| board.contains(*id)));
}

#[test]
fn concurrent_starts_across_boards_never_collide() {
    let boards: Vec<_> = (0..4).map(|_| Arc::new(Scoreboard::new())).collect();

    let handles: Vec<_> = boards
        .iter()
        .enumerate()
        .map(|(index, board)| {
            let board = Arc::clone(board);
            thread::spawn(move || {
                (0..100)
                    .map(|i| {
                        board
                            .start_match(&format!("H{}-{}", index, i), "Visitors")
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "Duplicate match id across boards: {}", id);
        }
    }
    assert_eq!(ids.len(), 400);
}

#[test]
fn readers_never_see_half_an_update() {
    let board = Arc::new(Scoreboard::new());
    let id = board.start_match("Home", "Away").unwrap();

    let writer = {
        let board = Arc::clone(&board);
        thread::spawn(move || {
            for goals in 0..2_000i64 {
                board.update_score(id, goals, goals).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let board = Arc::clone(&board);
            thread::spawn(move || {
                for _ in 0..500 {
                    for game in board.snapshot() {
                        assert_eq!(
                            game.home_score, game.away_score,
                            "observed a partially applied update"
                        );
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(board.summary(), "Home 1999 - Away 1999");
}

#[test]
fn concurrent_terminations_succeed_exactly_once() {
    let board = Arc::new(Scoreboard::new());
    let ids: Vec<_> = (0..100)
        .map(|i| board.start_match(&format!("Home{}", i), "Away").unwrap())
        .collect();
    let ids = Arc::new(ids);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let board = Arc::clone(&board);
            let ids = Arc::clone(&ids);
            thread::spawn(move || {
                ids.iter()
                    .filter(|id| board.terminate_match(**id).is_ok())
                    .count()
            })
        })
        .collect();

    let terminated: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(terminated, 100);
    assert!(board.is_empty());
    assert_eq!(board.metrics().matches_terminated, 100);
}
