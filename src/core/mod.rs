//! Core module - the simulation, free of I/O
//!
//! Everything here is pure game logic driven by a monotonic seconds clock
//! and decoded actions; the terminal shell only sees [`GameSnapshot`].

pub mod board;
pub mod effects;
pub mod game_state;
pub mod particles;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use board::Grid;
pub use game_state::{GameState, HardDropAnim, Piece};
pub use particles::{Particle, ParticleField};
pub use pieces::{PieceKind, ShapeMatrix};
pub use placement::{drop_distance, shape_fits};
pub use rng::SimpleRng;
pub use snapshot::{EffectView, GameSnapshot, ParticleView, PieceView};
