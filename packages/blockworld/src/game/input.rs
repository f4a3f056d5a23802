//! Per-frame input flags.

use std::collections::HashSet;


/// A discrete input signal recognized by the game.
///
/// Held signals are re-asserted every frame the key is down. Edge-triggered signals fire once
/// per physical key press; that edge-vs-level tracking belongs to the external input
/// collaborator, not to this crate. The camera signals are recognized here but consumed by the
/// external camera collaborator.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameInput {
    /// Move the player forward (held).
    MoveForward,
    /// Move the player back (held).
    MoveBack,
    /// Move the player left (held).
    MoveLeft,
    /// Move the player right (held).
    MoveRight,
    /// Zoom the camera in (held, camera collaborator).
    CameraZoomIn,
    /// Zoom the camera out (held, camera collaborator).
    CameraZoomOut,
    /// Rotate the camera left around its look-at point (held, camera collaborator).
    CameraRotateLeft,
    /// Rotate the camera right around its look-at point (held, camera collaborator).
    CameraRotateRight,
    /// Toggle edit mode (edge-triggered).
    EditModeToggle,
    /// Move the player up, edit mode only (held).
    EditMoveUp,
    /// Move the player down, edit mode only (held).
    EditMoveDown,
    /// Start or commit a world block draft (edge-triggered, debounced).
    EditCreateWorldBlock,
    /// Start or commit an enemy draft (edge-triggered, debounced).
    EditCreateEnemy,
    /// Delete every body overlapping the player (edge-triggered, debounced).
    EditDelete,
}

/// The set of input signals active this frame. An absent signal is inactive.
#[derive(Debug, Clone, Default)]
pub struct Inputs(HashSet<GameInput>);

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an input active for this frame.
    pub fn press(&mut self, input: GameInput) {
        self.0.insert(input);
    }

    pub fn active(&self, input: GameInput) -> bool {
        self.0.contains(&input)
    }
}

impl FromIterator<GameInput> for Inputs {
    fn from_iter<I: IntoIterator<Item = GameInput>>(iter: I) -> Self {
        Inputs(iter.into_iter().collect())
    }
}
