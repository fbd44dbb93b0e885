use miette::*;

use crate::error::InputError;
use crate::grid::{Grid, Tile};

/// Owns a parsed board, the danger overlay and the gold counter for one run.
#[derive(Debug)]
pub struct GridExplorer {
    grid: Grid,
    danger: Vec<bool>,
    gold: u32,
}

impl GridExplorer {
    pub fn new(grid: Grid) -> Self {
        let danger = vec![false; grid.cells.len()];
        Self {
            grid,
            danger,
            gold: 0,
        }
    }

    pub fn from_input(input: &str) -> Result<Self, InputError> {
        Ok(Self::new(Grid::parse(input)?))
    }

    /// Flood-fills 4-directionally from the player start and returns the
    /// number of gold tiles reached.
    ///
    /// Visited cells are overwritten with [`Tile::Wall`] before their
    /// neighbors are expanded, so no cell is ever expanded twice and the
    /// traversal terminates on any board. An explicit stack keeps the memory
    /// use proportional to the open area instead of the call stack depth.
    pub fn explore(&mut self) -> u32 {
        let width = self.grid.width;
        let height = self.grid.height;

        let mut stack = vec![self.grid.start];
        while let Some((x, y)) = stack.pop() {
            let cell = &mut self.grid.cells[y * width + x];
            if *cell == Tile::Wall {
                continue;
            }
            if *cell == Tile::Gold {
                self.gold += 1;
            }
            *cell = Tile::Wall;

            // East, west, south, north.
            if x + 1 < width {
                stack.push((x + 1, y));
            }
            if x > 0 {
                stack.push((x - 1, y));
            }
            if y + 1 < height {
                stack.push((x, y + 1));
            }
            if y > 0 {
                stack.push((x, y - 1));
            }
        }
        self.gold
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// The trap-adjacency overlay. Currently never marked, see the trap
    /// branch in [`Grid::parse`].
    pub fn danger(&self) -> &[bool] {
        &self.danger
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut explorer = GridExplorer::from_input(input)?;
    tracing::debug!(
        width = explorer.grid.width,
        height = explorer.grid.height,
        "parsed board"
    );
    let gold = explorer.explore();
    tracing::debug!(gold, "exploration finished");
    Ok(gold.to_string())
}
