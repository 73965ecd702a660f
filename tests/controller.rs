//! Validates the execution controller contract and the emitted event guarantees

use roomwave::algorithm::controller::ExecutionController;
use roomwave::algorithm::events::{EventLog, GenerationEvent};
use roomwave::algorithm::process::{ContradictionPolicy, GenerationProcess, ProcessState};
use roomwave::spatial::tiles::{ExitType, TileCatalog, TileDefinition, demo_rooms};
use std::collections::HashSet;

fn demo_controller(width: usize, height: usize, seed: u64) -> ExecutionController {
    let catalog = TileCatalog::build(demo_rooms(), false).unwrap();
    let process =
        GenerationProcess::new(catalog, width, height, ContradictionPolicy::Placeholder, seed)
            .unwrap();
    ExecutionController::new(process)
}

fn unsatisfiable_controller(policy: ContradictionPolicy) -> ExecutionController {
    let cross = TileDefinition::new(
        "cross",
        ExitType::Door,
        ExitType::Door,
        ExitType::Door,
        ExitType::Door,
    );
    let catalog = TileCatalog::build(vec![cross], false).unwrap();
    let process = GenerationProcess::new(catalog, 1, 1, policy, 0).unwrap();
    ExecutionController::new(process)
}

#[test]
fn test_step_auto_initializes() {
    let mut controller = demo_controller(3, 2, 11);
    let mut log = EventLog::new();

    assert_eq!(controller.process().state(), ProcessState::Uninitialized);
    controller.step(&mut log);

    assert_eq!(controller.process().state(), ProcessState::Looping);
    assert!(!controller.is_running());
    // Initialization narrowed every cell, then the single step placed one tile
    let narrowings = log
        .events()
        .iter()
        .filter(|event| matches!(event, GenerationEvent::CandidatesChanged { .. }))
        .count();
    assert!(narrowings >= 3 * 2);
    assert_eq!(log.placements().count(), 1);
}

#[test]
fn test_tick_ignored_while_paused() {
    let mut controller = demo_controller(3, 2, 11);
    let mut log = EventLog::new();

    controller.tick(&mut log);
    assert!(log.is_empty());
    assert_eq!(controller.process().state(), ProcessState::Uninitialized);

    controller.run_continuously(&mut log);
    controller.pause();
    let before = log.len();
    controller.tick(&mut log);
    assert_eq!(log.len(), before);
}

#[test]
fn test_continuous_run_stops_at_finish() {
    let mut controller = demo_controller(4, 3, 21);
    let mut log = EventLog::new();

    controller.run_continuously(&mut log);
    assert!(controller.is_running());

    for _ in 0..4 * 3 + 1 {
        controller.tick(&mut log);
    }

    assert_eq!(controller.process().state(), ProcessState::Finished);
    assert!(!controller.is_running());
    assert_eq!(
        log.events()
            .iter()
            .filter(|event| matches!(event, GenerationEvent::GenerationFinished { .. }))
            .count(),
        1
    );

    // Extra ticks after finishing change nothing
    let before = log.len();
    controller.tick(&mut log);
    assert_eq!(log.len(), before);
}

#[test]
fn test_reset_leaves_continuous_mode() {
    let mut controller = demo_controller(3, 3, 5);
    let mut log = EventLog::new();

    controller.run_continuously(&mut log);
    controller.tick(&mut log);
    controller.reset(&mut log);

    assert!(!controller.is_running());
    assert_eq!(controller.process().state(), ProcessState::Looping);
    assert_eq!(controller.process().grid().unwrap().resolved_count(), 0);

    let before = log.len();
    controller.tick(&mut log);
    assert_eq!(log.len(), before);
}

#[test]
fn test_policy_swap_applies_to_next_scan() {
    let mut controller = unsatisfiable_controller(ContradictionPolicy::Restart);
    let mut log = EventLog::new();

    // Restart policy keeps rebuilding the unsatisfiable grid
    controller.step(&mut log);
    assert_eq!(controller.process().state(), ProcessState::Looping);
    assert!(
        !log.events()
            .iter()
            .any(|event| matches!(event, GenerationEvent::Contradiction { .. }))
    );

    // Switching to placeholder lets the same cell be reported and finished
    controller.set_contradiction_policy(ContradictionPolicy::Placeholder);
    controller.step(&mut log);
    assert_eq!(controller.process().state(), ProcessState::Finished);
    assert!(
        log.events()
            .contains(&GenerationEvent::Contradiction { x: 0, y: 0 })
    );
    assert!(
        log.events()
            .contains(&GenerationEvent::GenerationFinished { success: true })
    );
}

#[test]
fn test_tile_placed_exactly_once_per_cell() {
    let mut controller = demo_controller(7, 5, 42);
    let mut log = EventLog::new();

    controller.run_continuously(&mut log);
    for _ in 0..7 * 5 + 1 {
        controller.tick(&mut log);
    }
    assert_eq!(controller.process().state(), ProcessState::Finished);

    let grid = controller.process().grid().unwrap();
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    for (x, y, tile) in log.placements() {
        assert!(seen.insert((x, y)), "cell ({x}, {y}) placed twice");
        assert_eq!(grid.resolved_tile(x, y), Some(tile));
    }
    assert_eq!(seen.len(), grid.resolved_count());
    assert_eq!(
        grid.resolved_count() + grid.contradiction_count(),
        7 * 5,
        "every cell ends resolved or reported"
    );
}

#[test]
fn test_contradictions_reported_once() {
    let mut controller = unsatisfiable_controller(ContradictionPolicy::Placeholder);
    let mut log = EventLog::new();

    controller.run_continuously(&mut log);
    for _ in 0..5 {
        controller.tick(&mut log);
    }

    let contradictions = log
        .events()
        .iter()
        .filter(|event| matches!(event, GenerationEvent::Contradiction { .. }))
        .count();
    assert_eq!(contradictions, 1);
}
