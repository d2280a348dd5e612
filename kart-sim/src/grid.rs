//! Tile-grid track read from text rows.
//!
//! One character per tile:
//!
//! ```text
//! #  wall     .  road     ,  grass    >  boost
//! ~  mud      b  banana   o  oil      *  ice
//! ```
//!
//! Anything outside the grid is wall.

use anyhow::{bail, Context};
use kart_core::{Rect, Terrain, Track, Vec2};

#[derive(Debug, Clone)]
pub struct GridTrack {
    tile_size: u32,
    width: usize,
    tiles: Vec<Terrain>,
    checkpoints: Vec<Rect>,
    start: Vec2,
}

fn terrain_for(symbol: char) -> Option<Terrain> {
    Some(match symbol {
        '#' => Terrain::Wall,
        '.' => Terrain::Road,
        ',' => Terrain::Grass,
        '>' => Terrain::Boost,
        '~' => Terrain::Mud,
        'b' => Terrain::Banana,
        'o' => Terrain::Oil,
        '*' => Terrain::Ice,
        _ => return None,
    })
}

impl GridTrack {
    pub fn parse<S: AsRef<str>>(
        rows: &[S],
        tile_size: u32,
        start: Vec2,
        checkpoints: Vec<Rect>,
    ) -> anyhow::Result<Self> {
        if tile_size == 0 {
            bail!("tile size must be positive");
        }
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if width == 0 {
            bail!("track has no tiles");
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                bail!("row {} is {} tiles wide, expected {}", y, row.chars().count(), width);
            }
            for (x, symbol) in row.chars().enumerate() {
                let terrain = terrain_for(symbol)
                    .with_context(|| format!("unknown tile {:?} at column {}, row {}", symbol, x, y))?;
                tiles.push(terrain);
            }
        }

        Ok(Self {
            tile_size,
            width,
            tiles,
            checkpoints,
            start,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.tiles.len() / self.width
    }

    /// Checkpoints per lap.
    pub fn checkpoint_count(&self) -> usize {
        self.checkpoints.len()
    }

    /// Whole laps completed for a `tiles_passed` counter.
    pub fn laps(&self, tiles_passed: u32) -> u32 {
        match self.checkpoints.len() {
            0 => 0,
            n => tiles_passed / n as u32,
        }
    }
}

impl Track for GridTrack {
    fn surface_at(&self, point: Vec2) -> Terrain {
        if point.x < 0.0 || point.y < 0.0 {
            return Terrain::Wall;
        }
        let column = (point.x / self.tile_size as f64) as usize;
        let row = (point.y / self.tile_size as f64) as usize;
        if column >= self.width || row >= self.height() {
            return Terrain::Wall;
        }
        self.tiles[row * self.width + column]
    }

    fn check_tile_passed(&self, tiles_passed: &mut u32, position: Vec2) {
        if self.checkpoints.is_empty() {
            return;
        }
        let next = self.checkpoints[*tiles_passed as usize % self.checkpoints.len()];
        if next.intersects(&Rect::new(position.x, position.y, 1, 1)) {
            *tiles_passed += 1;
            log::trace!("checkpoint {} passed", *tiles_passed);
        }
    }

    fn starting_position(&self) -> Vec2 {
        self.start
    }
}
