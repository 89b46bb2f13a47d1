//! Particles module - decaying debris from line clears
//!
//! Particles live in a world space of 30 units per grid cell (the space the
//! velocity and size constants were tuned in). Each particle is a small
//! projectile under constant gravity with a linearly decaying life; there is
//! no collision with the grid or between particles.

use crate::core::rng::SimpleRng;
use crate::types::{BlockColor, PARTICLE_GRAVITY};

/// World units per grid cell
pub const UNITS_PER_CELL: f64 = 30.0;

/// A single debris particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: BlockColor,
    pub size: f64,
    /// Remaining life fraction in (0, 1]
    pub life: f64,
    pub decay: f64,
}

impl Particle {
    /// Spawn a jittered particle at a world position
    pub fn spawn(x: f64, y: f64, color: BlockColor, rng: &mut SimpleRng) -> Self {
        Self {
            x,
            y,
            vx: rng.next_f64_range(-2.0, 2.0),
            vy: rng.next_f64_range(-5.0, -1.0),
            color,
            size: rng.next_f64_range(2.0, 5.0),
            life: 1.0,
            decay: rng.next_f64_range(0.01, 0.03),
        }
    }

    /// A motionless particle with a fixed decay rate (deterministic tests)
    pub fn with_decay(x: f64, y: f64, color: BlockColor, decay: f64) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            color,
            size: 3.0,
            life: 1.0,
            decay,
        }
    }

    /// Advance one frame. Returns false once the particle has expired.
    pub fn update(&mut self) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += PARTICLE_GRAVITY;
        self.life -= self.decay;
        self.life > 0.0
    }
}

/// All live particles, advanced once per frame
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Spawn one particle at the center of a grid cell
    pub fn spawn_at_cell(&mut self, cell_x: usize, cell_y: usize, color: BlockColor, rng: &mut SimpleRng) {
        let x = (cell_x as f64 + 0.5) * UNITS_PER_CELL;
        let y = (cell_y as f64 + 0.5) * UNITS_PER_CELL;
        self.particles.push(Particle::spawn(x, y, color, rng));
    }

    /// Spawn a burst of `count` particles at the center of a grid cell
    pub fn spawn_burst(
        &mut self,
        cell_x: usize,
        cell_y: usize,
        color: BlockColor,
        count: usize,
        rng: &mut SimpleRng,
    ) {
        for _ in 0..count {
            self.spawn_at_cell(cell_x, cell_y, color, rng);
        }
    }

    /// Advance every particle one frame and drop the expired ones
    pub fn update(&mut self) {
        self.particles.retain_mut(|p| p.update());
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
