//! Game state module - the simulation state machine
//!
//! Owns the grid, the falling and queued pieces, progress counters, the
//! effect timers and the particle field. Driven once per frame with a
//! monotonic seconds clock: decoded input is applied first, then
//! `update(now)` runs phase transitions, the active effect's completion
//! check, and particle advancement, in that order, so a lock triggered this
//! frame is visible in the same frame's snapshot.

use arrayvec::ArrayVec;

use crate::core::board::Grid;
use crate::core::effects;
use crate::core::particles::ParticleField;
use crate::core::pieces::{PieceKind, ShapeMatrix};
use crate::core::placement::{drop_distance, shape_fits};
use crate::core::rng::SimpleRng;
use crate::core::scoring;
use crate::types::{
    Cell, GameAction, FLASH_PARTICLE_CHANCE, GRID_HEIGHT, GRID_WIDTH, PARTICLES_PER_CELL,
};

/// The falling piece: a shape matrix, its color token and its grid anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub shape: ShapeMatrix,
    pub color: crate::types::BlockColor,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of the given kind at its spawn position: horizontally
    /// centered, anchored at the top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = kind.base_shape();
        Self {
            shape,
            color: kind.color(),
            x: (GRID_WIDTH / 2 - shape.cols() / 2) as i8,
            y: 0,
        }
    }

    /// Whether this piece, offset by (dx, dy), fits the grid
    pub fn fits(&self, grid: &Grid, dx: i8, dy: i8) -> bool {
        shape_fits(grid, &self.shape, self.x + dx, self.y + dy)
    }
}

/// Frozen state of an in-flight hard-drop animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardDropAnim {
    pub started_at: f64,
    pub start_y: i8,
    pub end_y: i8,
    /// Copy of the piece as it was at the trigger; the live piece is left
    /// untouched until the animation completes and locks it.
    pub piece: Piece,
}

/// Gameplay phases. `LineClear` and `HardDrop` gate gravity, locking and
/// player input until their timer elapses.
#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Falling,
    LineClear {
        rows: ArrayVec<u8, 4>,
        started_at: f64,
    },
    HardDrop(HardDropAnim),
    GameOver,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    current: Piece,
    next: Piece,
    phase: Phase,
    particles: ParticleField,
    rng: SimpleRng,
    score: u32,
    lines_cleared: u32,
    level: u32,
    /// Seconds between gravity ticks at the current level
    fall_interval: f64,
    /// Clock reading of the last gravity tick
    last_fall: f64,
    started: bool,
}

impl GameState {
    /// Create a fresh game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = Piece::spawn(random_kind(&mut rng));
        let next = Piece::spawn(random_kind(&mut rng));

        Self {
            grid: Grid::new(),
            current,
            next,
            phase: Phase::Falling,
            particles: ParticleField::new(),
            rng,
            score: 0,
            lines_cleared: 0,
            level: 1,
            fall_interval: scoring::fall_interval(1),
            last_fall: 0.0,
            started: false,
        }
    }

    /// Leave the start screen and anchor the gravity timer at `now`
    pub fn start(&mut self, now: f64) {
        if self.started {
            return;
        }
        self.started = true;
        self.last_fall = now;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn fall_interval(&self) -> f64 {
        self.fall_interval
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_piece(&self) -> Piece {
        self.current
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    pub fn is_line_clear_active(&self) -> bool {
        matches!(self.phase, Phase::LineClear { .. })
    }

    pub fn is_hard_drop_active(&self) -> bool {
        matches!(self.phase, Phase::HardDrop(_))
    }

    /// Rows scheduled for removal by the active line-clear effect
    pub fn clearing_rows(&self) -> &[u8] {
        match &self.phase {
            Phase::LineClear { rows, .. } => rows,
            _ => &[],
        }
    }

    /// Normalized progress of the active line-clear effect (0 when idle)
    pub fn line_clear_progress(&self, now: f64) -> f32 {
        match &self.phase {
            Phase::LineClear { started_at, .. } => effects::line_clear_progress(now, *started_at),
            _ => 0.0,
        }
    }

    /// The in-flight hard-drop animation, if any
    pub fn hard_drop_anim(&self) -> Option<&HardDropAnim> {
        match &self.phase {
            Phase::HardDrop(anim) => Some(anim),
            _ => None,
        }
    }

    /// Overwrite a grid cell (scenario setup in tests and tools)
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.grid.set_cell(x, y, cell);
    }

    /// Replace the falling piece (scenario setup in tests)
    pub fn set_current_piece_for_test(&mut self, kind: PieceKind, x: i8, y: i8) {
        self.current = Piece {
            x,
            y,
            ..Piece::spawn(kind)
        };
        self.phase = Phase::Falling;
    }

    /// Apply a decoded player action. Movement is accepted only while
    /// falling; game over accepts only restart; effects accept nothing.
    /// Returns whether the action changed anything.
    pub fn apply(&mut self, action: GameAction, now: f64) -> bool {
        if !self.started {
            return false;
        }

        match &self.phase {
            Phase::Falling => match action {
                GameAction::MoveLeft => self.try_shift(-1, 0),
                GameAction::MoveRight => self.try_shift(1, 0),
                GameAction::SoftDrop => self.try_shift(0, 1),
                GameAction::Rotate => self.try_rotate(),
                GameAction::HardDrop => {
                    self.start_hard_drop(now);
                    true
                }
                GameAction::Restart => false,
            },
            Phase::GameOver => match action {
                GameAction::Restart => {
                    self.restart(now);
                    true
                }
                _ => false,
            },
            Phase::LineClear { .. } | Phase::HardDrop(_) => false,
        }
    }

    /// Advance the simulation one frame at clock reading `now`
    pub fn update(&mut self, now: f64) {
        if self.started {
            match &self.phase {
                Phase::Falling => self.gravity_step(now),
                Phase::LineClear { rows, started_at } => {
                    let rows = rows.clone();
                    let started_at = *started_at;
                    if effects::line_clear_elapsed(now, started_at) {
                        self.resolve_line_clear(&rows);
                    } else {
                        let progress = effects::line_clear_progress(now, started_at);
                        if effects::flash_highlight(progress) {
                            self.sprinkle_flash_particles(&rows);
                        }
                    }
                }
                Phase::HardDrop(anim) => {
                    let anim = *anim;
                    if effects::hard_drop_elapsed(now, anim.started_at) {
                        self.current.y = anim.end_y;
                        self.lock_current(now);
                    }
                }
                Phase::GameOver => {}
            }
        }

        self.particles.update();
    }

    /// Try to shift the falling piece; invalid moves are silently rejected
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        if self.current.fits(&self.grid, dx, dy) {
            self.current.x += dx;
            self.current.y += dy;
            true
        } else {
            false
        }
    }

    /// Try to rotate the falling piece clockwise. No wall kicks: a rotation
    /// that collides is discarded and the piece is unchanged.
    fn try_rotate(&mut self) -> bool {
        let rotated = self.current.shape.rotated_cw();
        if shape_fits(&self.grid, &rotated, self.current.x, self.current.y) {
            self.current.shape = rotated;
            true
        } else {
            false
        }
    }

    /// Project the piece to its landing row and enter the drop animation.
    /// The live piece keeps its position until the animation completes.
    fn start_hard_drop(&mut self, now: f64) {
        let dist = drop_distance(&self.grid, &self.current.shape, self.current.x, self.current.y);
        self.phase = Phase::HardDrop(HardDropAnim {
            started_at: now,
            start_y: self.current.y,
            end_y: self.current.y + dist,
            piece: self.current,
        });
    }

    /// One gravity tick: descend if possible, otherwise lock
    fn gravity_step(&mut self, now: f64) {
        if now - self.last_fall <= self.fall_interval {
            return;
        }
        if self.current.fits(&self.grid, 0, 1) {
            self.current.y += 1;
        } else {
            self.lock_current(now);
        }
        self.last_fall = now;
    }

    /// Bake the falling piece into the grid, then either start the
    /// line-clear effect or promote the next piece.
    fn lock_current(&mut self, now: f64) {
        for (row, col) in self.current.shape.filled_cells() {
            let x = self.current.x as i16 + col as i16;
            let y = self.current.y as i16 + row as i16;
            if (0..GRID_WIDTH as i16).contains(&x) && (0..GRID_HEIGHT as i16).contains(&y) {
                self.grid.set_cell(x as usize, y as usize, Some(self.current.color));
            }
        }

        let mut rows = ArrayVec::<u8, 4>::new();
        for y in 0..GRID_HEIGHT {
            if self.grid.is_row_full(y) {
                rows.push(y as u8);
            }
        }

        if rows.is_empty() {
            self.promote_next();
        } else {
            for &y in &rows {
                for x in 0..GRID_WIDTH {
                    if let Some(color) = self.grid.cell(x, y as usize) {
                        self.particles
                            .spawn_burst(x, y as usize, color, PARTICLES_PER_CELL, &mut self.rng);
                    }
                }
            }
            self.phase = Phase::LineClear {
                rows,
                started_at: now,
            };
        }
    }

    /// Compact the cleared rows, award score, advance level/speed, and
    /// bring in the next piece.
    fn resolve_line_clear(&mut self, rows: &[u8]) {
        self.grid.clear_rows(rows);

        // The multiplier is the level in effect before this clear's recompute.
        self.score += scoring::clear_score(rows.len(), self.level);
        self.lines_cleared += rows.len() as u32;
        self.level = scoring::level_for_lines(self.lines_cleared);
        self.fall_interval = scoring::fall_interval(self.level);

        self.promote_next();
    }

    /// Promote the queued piece and draw a new one; a blocked spawn ends
    /// the game immediately.
    fn promote_next(&mut self) {
        self.current = self.next;
        self.next = Piece::spawn(random_kind(&mut self.rng));

        if self.current.fits(&self.grid, 0, 0) {
            self.phase = Phase::Falling;
        } else {
            self.phase = Phase::GameOver;
        }
    }

    /// During highlight sub-phases, cells awaiting removal shed an extra
    /// particle now and then.
    fn sprinkle_flash_particles(&mut self, rows: &[u8]) {
        for &y in rows {
            for x in 0..GRID_WIDTH {
                if let Some(color) = self.grid.cell(x, y as usize) {
                    if self.rng.next_f64() < FLASH_PARTICLE_CHANCE {
                        self.particles.spawn_at_cell(x, y as usize, color, &mut self.rng);
                    }
                }
            }
        }
    }

    /// Full reset to a fresh falling game, reseeded from the live RNG so
    /// successive games differ. Discards grid, particles and effects.
    fn restart(&mut self, now: f64) {
        let seed = self.rng.state();
        *self = Self::new(seed);
        self.start(now);
    }
}

fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}
