//! Level import/export as plain JSON records.
//!
//! Each body is a `{ position, dimensions, color }` record, where `position` is the minimum
//! corner and `dimensions` the full extents (the editor-panel convention, not center plus half
//! extent). Import fully replaces the enemy and world block collections before updates resume;
//! export reflects the exact current body set.

use crate::{
    physics::aa_box::AaBox,
    game::{
        Game,
        enemy::Enemy,
        world_block::WorldBlock,
    },
};
use std::{
    path::Path,
    fs::File,
    io::{
        BufReader,
        BufWriter,
    },
};
use slab::Slab;
use serde::{Serialize, Deserialize};
use anyhow::Result;
use vek::*;


/// One body's persisted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Minimum corner.
    pub position: [f32; 3],
    /// Full width, height, and length.
    pub dimensions: [f32; 3],
    /// RGB color.
    pub color: [f32; 3],
}

/// A whole persisted level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub player: BlockRecord,
    pub world: Vec<BlockRecord>,
    pub enemies: Vec<BlockRecord>,
}

impl BlockRecord {
    fn new(boks: AaBox, color: Rgba<f32>) -> Self {
        BlockRecord {
            position: boks.min_corner().into_array(),
            dimensions: boks.dimensions().into_array(),
            color: [color.r, color.g, color.b],
        }
    }

    fn aa_box(&self) -> AaBox {
        AaBox::from_min_corner(Vec3::from(self.position), Vec3::from(self.dimensions))
    }

    fn rgba(&self) -> Rgba<f32> {
        Rgba::new(self.color[0], self.color[1], self.color[2], 1.0)
    }
}

impl Level {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), self)?;
        Ok(())
    }
}

impl Game {
    /// Snapshot the current body set.
    pub fn export_level(&self) -> Level {
        Level {
            player: BlockRecord::new(self.player.aa_box(), self.player.color),
            world: self
                .world_blocks
                .iter()
                .map(|(_, block)| BlockRecord::new(block.aa_box(), block.color))
                .collect(),
            enemies: self
                .enemies
                .iter()
                .map(|(_, enemy)| BlockRecord::new(enemy.aa_box(), enemy.color))
                .collect(),
        }
    }

    /// Replace the current world block and enemy collections with the level's, and move the
    /// player to its recorded position. Body ids restart; an imported enemy's home is its
    /// imported position.
    pub fn import_level(&mut self, level: &Level) {
        let player_box = level.player.aa_box();
        self.player.pos = player_box.pos;
        self.player.vel = Vec3::zero();

        self.world_blocks = Slab::with_capacity(level.world.len());
        for record in &level.world {
            let boks = record.aa_box();
            self.world_blocks
                .insert(WorldBlock::new(boks.pos, boks.half_ext, record.rgba()));
        }

        self.enemies = Slab::with_capacity(level.enemies.len());
        for record in &level.enemies {
            let boks = record.aa_box();
            self.enemies
                .insert(Enemy::new(boks.pos, boks.half_ext, record.rgba()));
        }

        info!(
            world_blocks = self.world_blocks.len(),
            enemies = self.enemies.len(),
            "imported level",
        );
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < TOLERANCE, "{:?} != {:?}", a, b);
        }
    }

    fn assert_records_close(a: &BlockRecord, b: &BlockRecord) {
        assert_close(a.position, b.position);
        assert_close(a.dimensions, b.dimensions);
        assert_close(a.color, b.color);
    }

    #[test]
    fn export_import_round_trip() {
        let mut game = Game::new();
        game.player.pos = Vec3::new(1.25, 3.5, -2.0);
        game.create_world_block([-5.0, -2.0, -5.0], [10.0, 1.0, 10.0], [0.7, 0.7, 0.7]);
        game.create_world_block([2.5, 0.0, 1.0], [1.0, 2.0, 3.0], [0.1, 0.9, 0.4]);
        game.create_enemy([4.0, 0.5, 4.0], [1.0, 1.0, 1.0], [1.0, 0.3, 0.3]);

        let exported = game.export_level();
        let json = exported.to_json().unwrap();

        let mut other = Game::new();
        other.import_level(&Level::from_json(&json).unwrap());
        let reexported = other.export_level();

        assert_records_close(&exported.player, &reexported.player);
        assert_eq!(exported.world.len(), reexported.world.len());
        for (a, b) in exported.world.iter().zip(&reexported.world) {
            assert_records_close(a, b);
        }
        assert_eq!(exported.enemies.len(), reexported.enemies.len());
        for (a, b) in exported.enemies.iter().zip(&reexported.enemies) {
            assert_records_close(a, b);
        }
    }

    #[test]
    fn import_fully_replaces_collections() {
        let mut game = Game::new();
        game.create_world_block([0.0, 0.0, 0.0], [1.0; 3], [0.7; 3]);
        game.create_enemy([2.0, 0.0, 0.0], [1.0; 3], [1.0, 0.3, 0.3]);

        let level = Level {
            player: BlockRecord {
                position: [-0.5, -0.5, -0.5],
                dimensions: [1.0; 3],
                color: [0.3, 0.5, 1.0],
            },
            world: vec![BlockRecord {
                position: [5.0, 0.0, 0.0],
                dimensions: [2.0; 3],
                color: [0.7; 3],
            }],
            enemies: vec![],
        };
        game.import_level(&level);

        assert_eq!(game.world_blocks.len(), 1);
        assert_eq!(game.enemies.len(), 0);
        assert_eq!(game.world_block_position(0), Some([5.0, 0.0, 0.0]));
        assert_eq!(game.player.pos, Vec3::zero());
    }

    #[test]
    fn imported_enemy_homes_at_imported_position() {
        let mut game = Game::new();
        let level = Level {
            player: BlockRecord {
                position: [-0.5, -0.5, -0.5],
                dimensions: [1.0; 3],
                color: [0.3, 0.5, 1.0],
            },
            world: vec![],
            enemies: vec![BlockRecord {
                position: [3.0, 0.0, 3.0],
                dimensions: [1.0; 3],
                color: [1.0, 0.3, 0.3],
            }],
        };
        game.import_level(&level);

        let (_, enemy) = game.enemies.iter().next().unwrap();
        assert_eq!(enemy.home, enemy.pos);
        assert_eq!(enemy.pos, Vec3::new(3.5, 0.5, 3.5));
    }
}
