//! Terminal falling-block puzzle.
//!
//! The simulation lives in [`core`] and is driven by a monotonic seconds
//! clock plus decoded [`types::GameAction`] events; it exposes a read-only
//! [`core::GameSnapshot`] per frame. The [`input`] and [`term`] modules are
//! the thin crossterm shell around it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
