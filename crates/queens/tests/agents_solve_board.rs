//! End-to-end run: agents register, walk the board to a solution, and a
//! viewer polls snapshots throughout without perturbing the count.

use std::thread;

use queens::prelude::*;
use queens_test_utils::CANONICAL_FOUR;

fn solve_four(adapter: &AgentAdapter, names: [&str; 4]) {
    // Each agent descends to its target row in the canonical solution.
    for (name, &target) in names.iter().zip(CANONICAL_FOUR.iter()) {
        for _ in 0..target {
            adapter.act(name, "down").unwrap();
        }
    }
}

#[test]
fn four_agents_reach_the_canonical_solution() {
    let engine = SharedEngine::new(EngineConfig::new(4)).unwrap();
    let mut adapter = AgentAdapter::new(engine.clone());
    let names = ["a0", "a1", "a2", "a3"];
    for name in names {
        adapter.register(name).unwrap();
    }

    assert_eq!(adapter.finished("a0"), Ok(false));
    solve_four(&adapter, names);

    assert_eq!(engine.snapshot().unwrap().rows(), &CANONICAL_FOUR);
    assert_eq!(adapter.finished("a0"), Ok(true));
    // Asking again counts again: the counter is per-observation.
    assert_eq!(adapter.finished("a3"), Ok(true));
    assert_eq!(engine.solution_count(), Ok(2));
}

#[test]
fn viewer_polls_while_agents_act() {
    let engine = SharedEngine::new(EngineConfig::new(4)).unwrap();
    let mut adapter = AgentAdapter::new(engine.clone());
    let names = ["a0", "a1", "a2", "a3"];
    for name in names {
        adapter.register(name).unwrap();
    }

    // The viewer reads N once to size its grid, then polls snapshots.
    let viewer_engine = engine.clone();
    let grid = viewer_engine.queens();
    let viewer = thread::spawn(move || {
        let mut last_revision = Revision::default();
        for _ in 0..500 {
            let snap = viewer_engine.snapshot().unwrap();
            assert_eq!(snap.queens(), grid);
            // Never a partially-applied move: every row is in range.
            assert!(snap.rows().iter().all(|&r| r < grid));
            // Revisions only move forward.
            assert!(snap.revision() >= last_revision);
            last_revision = snap.revision();
        }
    });

    solve_four(&adapter, names);
    viewer.join().unwrap();

    // Polling never touched the counter; only finished() counts.
    assert_eq!(engine.solution_count(), Ok(0));
    assert!(engine.peek_solution().unwrap());
    assert_eq!(adapter.finished("a1"), Ok(true));
    assert_eq!(engine.solution_count(), Ok(1));
}

#[test]
fn reset_starts_a_fresh_puzzle_with_the_same_agents() {
    let engine = SharedEngine::new(EngineConfig::new(4)).unwrap();
    let mut adapter = AgentAdapter::new(engine.clone());
    let names = ["a0", "a1", "a2", "a3"];
    for name in names {
        adapter.register(name).unwrap();
    }
    solve_four(&adapter, names);
    assert_eq!(adapter.finished("a0"), Ok(true));

    engine.reset().unwrap();
    assert_eq!(engine.snapshot().unwrap().rows(), &[0, 0, 0, 0]);
    assert_eq!(engine.solution_count(), Ok(0));
    // Columns are permanent identity: the same agents keep acting.
    assert_eq!(adapter.finished("a0"), Ok(false));
    solve_four(&adapter, names);
    assert_eq!(adapter.finished("a0"), Ok(true));
}
