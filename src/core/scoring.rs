//! Scoring module - line bonuses, level progression, gravity schedule

use crate::types::{
    BASE_FALL_INTERVAL, FALL_INTERVAL_STEP, LINE_BONUS, MIN_FALL_INTERVAL,
};

/// Bonus for clearing `lines` rows in one lock, before the level multiplier.
/// Five or more rows score like four (not reachable with tetromino shapes,
/// but the table clamps anyway).
pub fn line_bonus(lines: usize) -> u32 {
    LINE_BONUS[lines.min(4)]
}

/// Score awarded for a clear of `lines` rows at the given level.
///
/// The multiplier is the level in effect when the clear resolves, before
/// the clear's own lines recompute it.
pub fn clear_score(lines: usize, level: u32) -> u32 {
    line_bonus(lines) * level
}

/// Level for a cumulative line count: one level per 10 lines, starting at 1
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / 10 + 1
}

/// Seconds between gravity ticks at the given level.
///
/// Shrinks linearly from the base interval and bottoms out at the floor.
pub fn fall_interval(level: u32) -> f64 {
    let interval = BASE_FALL_INTERVAL - (level.saturating_sub(1)) as f64 * FALL_INTERVAL_STEP;
    interval.max(MIN_FALL_INTERVAL)
}
