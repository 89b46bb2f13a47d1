//! Effect window tests: timing gates, flash phases, particle lifecycle

use blockfall::core::{effects, GameState, Particle, PieceKind};
use blockfall::types::{
    BlockColor, GameAction, GRID_WIDTH, HARD_DROP_DURATION, LINE_CLEAR_DURATION,
};

fn started_game(seed: u32) -> GameState {
    let mut state = GameState::new(seed);
    state.start(0.0);
    state
}

fn fill_row_except(state: &mut GameState, y: usize, gaps: &[usize]) {
    for x in 0..GRID_WIDTH {
        if !gaps.contains(&x) {
            state.set_cell(x, y, Some(BlockColor::Green));
        }
    }
}

#[test]
fn test_hard_drop_projects_to_floor_and_locks_on_time() {
    let mut state = started_game(1);
    state.set_current_piece_for_test(PieceKind::O, 4, 0);

    state.apply(GameAction::HardDrop, 5.0);
    let anim = state.hard_drop_anim().expect("animation not started");
    // end_y = H - piece height for an unobstructed drop.
    assert_eq!(anim.end_y, 18);
    assert_eq!(anim.start_y, 0);

    // Not before the duration...
    state.update(5.0 + HARD_DROP_DURATION - 0.01);
    assert!(state.is_hard_drop_active());
    assert_eq!(state.grid().occupied_count(), 0);

    // ...exactly at it: locked at the projected row.
    state.update(5.0 + HARD_DROP_DURATION);
    assert!(!state.is_hard_drop_active());
    assert!(state.grid().is_occupied(4, 18));
    assert!(state.grid().is_occupied(5, 18));
    assert!(state.grid().is_occupied(4, 19));
    assert!(state.grid().is_occupied(5, 19));
}

#[test]
fn test_hard_drop_suspends_gameplay() {
    let mut state = started_game(1);
    state.set_current_piece_for_test(PieceKind::O, 4, 0);
    state.apply(GameAction::HardDrop, 5.0);

    // Input is ignored and gravity does not run mid-animation, even though
    // several gravity intervals elapse on the clock.
    assert!(!state.apply(GameAction::MoveLeft, 5.05));
    assert!(!state.apply(GameAction::Rotate, 5.05));
    state.update(5.0 + HARD_DROP_DURATION - 0.001);
    assert_eq!(state.grid().occupied_count(), 0);
    assert_eq!(state.current_piece().y, 0);
}

#[test]
fn test_line_clear_gates_input_until_done() {
    let mut state = started_game(1);
    fill_row_except(&mut state, 19, &[4, 5]);
    state.set_current_piece_for_test(PieceKind::O, 4, 18);
    state.update(0.51);
    assert!(state.is_line_clear_active());

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Restart,
    ] {
        assert!(!state.apply(action, 1.0), "{:?} accepted mid-effect", action);
    }

    // Effects always run to completion; the grid compacts only then.
    state.update(0.51 + LINE_CLEAR_DURATION);
    assert!(!state.is_line_clear_active());
    assert!(!state.grid().is_row_full(19));
}

#[test]
fn test_burst_size_per_occupied_cell() {
    let mut state = started_game(1);
    fill_row_except(&mut state, 19, &[4, 5]);
    state.set_current_piece_for_test(PieceKind::O, 4, 18);
    state.update(0.51);

    // One full row of ten cells, ten particles each.
    assert_eq!(state.particles().len(), 100);
}

#[test]
fn test_particle_decay_lifecycle() {
    // life 1.0 at decay 0.02 survives 49 updates and dies on the 50th.
    let mut particle = Particle::with_decay(10.0, 10.0, BlockColor::Red, 0.02);
    for _ in 0..49 {
        assert!(particle.update());
    }
    assert!(!particle.update());
}

#[test]
fn test_flash_phases_alternate_and_finish() {
    let progress_samples = 1000;
    let mut transitions = 0;
    let mut prev = effects::flash_highlight(0.0);
    for i in 1..=progress_samples {
        let state = effects::flash_highlight(i as f32 / progress_samples as f32);
        if state != prev {
            transitions += 1;
            prev = state;
        }
    }
    // At least three full highlight/solid cycles over the window.
    assert!(transitions >= 6);

    // The expansion envelope is zero at both ends of the effect.
    assert!(effects::flash_expansion(0.0).abs() < 1e-6);
    assert!(effects::flash_expansion(1.0).abs() < 1e-6);
}

#[test]
fn test_snapshot_exposes_effect_progress() {
    let mut state = started_game(1);
    fill_row_except(&mut state, 19, &[4, 5]);
    state.set_current_piece_for_test(PieceKind::O, 4, 18);
    state.update(0.51);

    let snap = state.snapshot(0.51 + 0.5);
    match snap.effect {
        blockfall::core::EffectView::LineClear { progress, ref rows, .. } => {
            assert!((progress - 0.5).abs() < 1e-6);
            assert_eq!(rows.as_slice(), &[19]);
        }
        ref other => panic!("expected line-clear effect, got {:?}", other),
    }
}
