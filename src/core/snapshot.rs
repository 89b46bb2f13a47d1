//! Snapshot module - the read-only per-frame view
//!
//! The renderer never touches `GameState` directly: once per frame, after
//! input and update, a `GameSnapshot` is captured and handed over. The grid
//! is a plain copy (bounded 10x20), pieces and effects are small value
//! views, and particles are flattened to position/color/life.

use arrayvec::ArrayVec;

use crate::core::effects;
use crate::core::game_state::{GameState, Piece};
use crate::core::pieces::ShapeMatrix;
use crate::types::{BlockColor, Cell, GRID_HEIGHT, GRID_WIDTH};

/// View of a piece (falling, queued, or frozen in a drop animation)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceView {
    pub shape: ShapeMatrix,
    pub color: BlockColor,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceView {
    fn from(piece: Piece) -> Self {
        Self {
            shape: piece.shape,
            color: piece.color,
            x: piece.x,
            y: piece.y,
        }
    }
}

/// The active effect, if any, with its normalized progress
#[derive(Debug, Clone, PartialEq)]
pub enum EffectView {
    None,
    LineClear {
        rows: ArrayVec<u8, 4>,
        progress: f32,
        /// Whether the flash is in a highlight (expanded) sub-phase as
        /// opposed to solid white
        highlight: bool,
        /// Cell-expansion fraction for the highlight rendering
        expansion: f32,
    },
    HardDrop {
        piece: PieceView,
        /// Interpolated vertical position, fractional during the animation
        display_y: f32,
        progress: f32,
    },
}

/// One particle, in world units (see `particles::UNITS_PER_CELL`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub x: f64,
    pub y: f64,
    pub color: BlockColor,
    pub size: f64,
    /// Remaining life fraction in (0, 1]
    pub life: f64,
}

/// Everything the presentation layer may read for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: [[Cell; GRID_WIDTH]; GRID_HEIGHT],
    /// The falling piece; absent while an effect runs or the game is over
    pub piece: Option<PieceView>,
    pub next: PieceView,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub effect: EffectView,
    pub particles: Vec<ParticleView>,
    pub game_over: bool,
    pub started: bool,
}

impl GameSnapshot {
    /// Capture the state at clock reading `now`
    pub fn capture(state: &GameState, now: f64) -> Self {
        let effect = if let Some(anim) = state.hard_drop_anim() {
            let progress = effects::hard_drop_progress(now, anim.started_at);
            EffectView::HardDrop {
                piece: PieceView::from(anim.piece),
                display_y: effects::hard_drop_display_y(anim.start_y, anim.end_y, progress),
                progress,
            }
        } else if state.is_line_clear_active() {
            let progress = state.line_clear_progress(now);
            EffectView::LineClear {
                rows: state.clearing_rows().iter().copied().collect(),
                progress,
                highlight: effects::flash_highlight(progress),
                expansion: effects::flash_expansion(progress),
            }
        } else {
            EffectView::None
        };

        let falling = !state.is_game_over()
            && !state.is_line_clear_active()
            && !state.is_hard_drop_active();

        Self {
            board: state.grid().to_rows(),
            piece: falling.then(|| PieceView::from(state.current_piece())),
            next: PieceView::from(state.next_piece()),
            score: state.score(),
            level: state.level(),
            lines_cleared: state.lines_cleared(),
            effect,
            particles: state
                .particles()
                .iter()
                .map(|p| ParticleView {
                    x: p.x,
                    y: p.y,
                    color: p.color,
                    size: p.size,
                    life: p.life,
                })
                .collect(),
            game_over: state.is_game_over(),
            started: state.started(),
        }
    }
}

impl GameState {
    /// Capture the per-frame read-only snapshot
    pub fn snapshot(&self, now: f64) -> GameSnapshot {
        GameSnapshot::capture(self, now)
    }
}
