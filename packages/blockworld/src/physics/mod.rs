//! Box physics: geometry, overlap testing, swept collision, and movement.

pub mod aa_box;
pub mod swept;
pub mod movement;
