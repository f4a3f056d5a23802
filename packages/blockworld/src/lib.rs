//! Physics and authoring core of a first person block-world game.
//!
//! Axis-aligned boxes only: a single player, AI-driven enemies, and immovable
//! world blocks. Rendering, camera math, and key capture live in external
//! collaborators; this crate owns collision, movement, and the editor.

#[macro_use]
extern crate tracing;

pub mod logging;
pub mod physics;
pub mod game;
pub mod level;
pub mod render;
