//! Terminal rendering module.
//!
//! A small game-oriented render layer: the view draws a [`GameSnapshot`]
//! into a styled character framebuffer, and the renderer flushes that
//! buffer to a raw-mode terminal. No gameplay logic lives here.
//!
//! [`GameSnapshot`]: crate::core::GameSnapshot

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
