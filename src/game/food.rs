use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::config::GameConfig;
use super::error::GameError;
use super::snake::Coordinate;

/// Places food on free grid cells
#[derive(Debug, Clone, PartialEq)]
pub struct FoodManager {
    grid_width: i32,
    grid_height: i32,
    position: Option<Coordinate>,
}

impl FoodManager {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grid_width: config.grid_width(),
            grid_height: config.grid_height(),
            position: None,
        }
    }

    /// Current food cell, if any
    pub fn position(&self) -> Option<Coordinate> {
        self.position
    }

    /// Put the food on a given cell
    pub fn place(&mut self, position: Coordinate) {
        self.position = Some(position);
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    /// Pick a uniformly random free cell and move the food there.
    ///
    /// Cells are enumerated column by column, so a seeded `rng` always picks
    /// the same cell for the same occupied set.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        occupied: &HashSet<Coordinate>,
        rng: &mut R,
    ) -> Result<Coordinate, GameError> {
        let free: Vec<Coordinate> = (0..self.grid_width)
            .flat_map(|x| (0..self.grid_height).map(move |y| Coordinate::new(x, y)))
            .filter(|cell| !occupied.contains(cell))
            .collect();

        let position = *free.choose(rng).ok_or(GameError::NoFreeSpace)?;
        self.position = Some(position);
        Ok(position)
    }
}
