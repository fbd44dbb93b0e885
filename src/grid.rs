use itertools::Itertools;

use crate::error::InputError;

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Wall,
    Start,
    Gold,
    Trap,
}

impl Tile {
    /// Maps an input symbol to a tile.
    ///
    /// `#`, `P`, `G` and `T` are reserved; any other printable character,
    /// ASCII or not, is open floor. Control characters are rejected.
    fn from_symbol(c: char) -> Option<Tile> {
        match c {
            '#' => Some(Tile::Wall),
            'P' => Some(Tile::Start),
            'G' => Some(Tile::Gold),
            'T' => Some(Tile::Trap),
            c if !c.is_whitespace() && !c.is_control() => Some(Tile::Floor),
            _ => None,
        }
    }
}

/// A rectangular board, stored row-major as a flat vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Tile>,
    pub start: (usize, usize),
}

impl Grid {
    /// Parses a board from a whitespace-delimited token stream: two integers
    /// (column count, then row count) followed by `rows * cols` tile symbols.
    ///
    /// Whitespace between tile symbols is permitted and ignored, so both
    /// `P.G` and `P . G` describe the same row. Anything after the declared
    /// board is ignored.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let mut tokens = input.split_whitespace();
        let cols = dimension(tokens.next(), "column count")?;
        let rows = dimension(tokens.next(), "row count")?;
        if cols <= 0 || rows <= 0 {
            return Err(InputError::NonPositiveDimensions { cols, rows });
        }
        let width = cols as usize;
        let height = rows as usize;
        let expected = width.saturating_mul(height);

        let mut cells = Vec::new();
        let mut symbols = tokens.flat_map(|token| token.chars());
        for (y, x) in (0..height).cartesian_product(0..width) {
            let Some(symbol) = symbols.next() else {
                return Err(InputError::TruncatedGrid {
                    expected,
                    found: cells.len(),
                });
            };
            let tile = Tile::from_symbol(symbol).ok_or(InputError::UnrecognizedSymbol {
                symbol,
                row: y,
                col: x,
            })?;
            cells.push(tile);
        }

        // Scan for the player start; trap cells are recognized here too.
        let mut start = None;
        for (y, x) in (0..height).cartesian_product(0..width) {
            match cells[y * width + x] {
                Tile::Start => {
                    if start.replace((x, y)).is_some() {
                        return Err(InputError::DuplicateStart { row: y, col: x });
                    }
                }
                Tile::Trap => {
                    // TODO: mark the trap's orthogonal neighbors in the danger
                    // map once it is settled whether dangerous cells block
                    // traversal or are only reported.
                }
                _ => {}
            }
        }
        let start = start.ok_or(InputError::MissingStart)?;

        Ok(Grid {
            width,
            height,
            cells,
            start,
        })
    }
}

fn dimension(token: Option<&str>, name: &'static str) -> Result<i64, InputError> {
    let token = token.ok_or(InputError::MissingDimension { name })?;
    token
        .parse()
        .map_err(|_| InputError::BadDimensionToken {
            name,
            token: token.to_owned(),
        })
}
