//! Effects module - time-boxed presentational sequences
//!
//! Both effects are pure functions of elapsed time against a stored start
//! timestamp: the line-clear flash (highlight/solid alternation plus a block
//! expansion factor) and the hard-drop linear interpolation. The state
//! machine resolves each effect from the same clock the renderer reads, so
//! presentation ends exactly when gameplay resumes.

use crate::types::{FLASH_CYCLES, HARD_DROP_DURATION, LINE_CLEAR_DURATION};

/// Elapsed time normalized to [0, 1] over `duration`
pub fn progress(now: f64, started_at: f64, duration: f64) -> f32 {
    ((now - started_at) / duration).clamp(0.0, 1.0) as f32
}

/// Normalized progress of a line-clear flash started at `started_at`
pub fn line_clear_progress(now: f64, started_at: f64) -> f32 {
    progress(now, started_at, LINE_CLEAR_DURATION)
}

/// Whether the line-clear flash has run its full duration
pub fn line_clear_elapsed(now: f64, started_at: f64) -> bool {
    now - started_at >= LINE_CLEAR_DURATION
}

/// Whether the flash is in a highlight sub-phase (expanded colored blocks)
/// as opposed to a solid-white sub-phase. Alternates `FLASH_CYCLES` times
/// over the effect.
pub fn flash_highlight(progress: f32) -> bool {
    (progress * FLASH_CYCLES as f32 * 2.0) as u32 % 2 == 0
}

/// Block expansion factor for the highlight sub-phase, as a fraction of a
/// cell: swells to 0.2 mid-effect and back to zero at both ends.
pub fn flash_expansion(progress: f32) -> f32 {
    0.2 * (std::f32::consts::PI * progress).sin()
}

/// Normalized progress of a hard-drop animation started at `started_at`
pub fn hard_drop_progress(now: f64, started_at: f64) -> f32 {
    progress(now, started_at, HARD_DROP_DURATION)
}

/// Whether the hard-drop animation has run its full duration
pub fn hard_drop_elapsed(now: f64, started_at: f64) -> bool {
    now - started_at >= HARD_DROP_DURATION
}

/// Interpolated vertical position of the falling piece during a hard drop
pub fn hard_drop_display_y(start_y: i8, end_y: i8, progress: f32) -> f32 {
    start_y as f32 + (end_y - start_y) as f32 * progress
}
