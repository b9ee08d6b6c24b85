//! Game board representation: a fixed hexagon of cells holding letter tiles.
//!
//! This module contains:
//! - The two players and the tiles they place
//! - The board grid with its fixed coordinate set
//! - Placement and query methods used by the scanner, scorer and bot

use crate::game::GameError;
use crate::hex::HexCoord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Default board radius (91 cells)
pub const DEFAULT_RADIUS: i32 = 5;

/// The two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The person at the keyboard
    Human,
    /// The built-in opponent
    Ai,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Player"),
            Player::Ai => write!(f, "AI"),
        }
    }
}

/// A letter placed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Uppercase letter A-Z
    pub letter: char,
    /// Who placed it
    pub owner: Player,
}

impl Tile {
    /// Create a tile, normalizing the letter to uppercase.
    ///
    /// Returns `None` for anything other than an ASCII letter.
    pub fn new(letter: char, owner: Player) -> Option<Self> {
        letter.is_ascii_alphabetic().then(|| Self {
            letter: letter.to_ascii_uppercase(),
            owner,
        })
    }
}

/// The complete game board.
///
/// The set of coordinates is fixed at construction. Cells only ever go from
/// empty to occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Distance from the center to the edge
    radius: i32,
    /// Every cell on the board, ordered by coordinate
    #[serde(with = "cell_list")]
    cells: BTreeMap<HexCoord, Option<Tile>>,
}

impl Board {
    /// Create an empty board of the given radius
    pub fn new(radius: i32) -> Self {
        let cells = HexCoord::all_within(radius)
            .into_iter()
            .map(|coord| (coord, None))
            .collect();
        Self {
            radius: radius.max(0),
            cells,
        }
    }

    /// Create an empty board of the default radius
    pub fn standard() -> Self {
        Self::new(DEFAULT_RADIUS)
    }

    /// Board radius
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Whether the coordinate is part of the board
    pub fn contains(&self, coord: HexCoord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// The tile at a coordinate, if the cell exists and is occupied
    pub fn tile(&self, coord: HexCoord) -> Option<&Tile> {
        self.cells.get(&coord).and_then(Option::as_ref)
    }

    /// Whether the coordinate is on the board and still empty
    pub fn is_empty_cell(&self, coord: HexCoord) -> bool {
        matches!(self.cells.get(&coord), Some(None))
    }

    /// Place a letter for a player.
    ///
    /// Fails without touching the board when the cell is off the board,
    /// already occupied, or the letter is not A-Z.
    pub fn place(&mut self, coord: HexCoord, letter: char, owner: Player) -> Result<Tile, GameError> {
        let tile = Tile::new(letter, owner).ok_or(GameError::InvalidLetter(letter))?;
        match self.cells.get_mut(&coord) {
            None => Err(GameError::OutOfBoard(coord)),
            Some(slot) if slot.is_some() => Err(GameError::CellOccupied(coord)),
            Some(slot) => {
                *slot = Some(tile);
                Ok(tile)
            }
        }
    }

    /// Place a letter, reporting only whether it succeeded
    pub fn place_letter(&mut self, coord: HexCoord, letter: char, owner: Player) -> bool {
        self.place(coord, letter, owner).is_ok()
    }

    /// Occupied cells in board order
    pub fn tiles(&self) -> impl Iterator<Item = (HexCoord, &Tile)> {
        self.cells
            .iter()
            .filter_map(|(coord, tile)| tile.as_ref().map(|t| (*coord, t)))
    }

    /// Empty cells in board order
    pub fn empty_cells(&self) -> Vec<HexCoord> {
        self.cells
            .iter()
            .filter(|(_, tile)| tile.is_none())
            .map(|(coord, _)| *coord)
            .collect()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.values().filter(|tile| tile.is_some()).count()
    }

    /// Whether every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.values().all(Option::is_some)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Cells serialize as a list of `[coord, tile]` pairs so that the board
/// round-trips through formats whose map keys must be strings.
mod cell_list {
    use super::{HexCoord, Tile};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(cells: &BTreeMap<HexCoord, Option<Tile>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(cells.iter())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<HexCoord, Option<Tile>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<(HexCoord, Option<Tile>)>::deserialize(deserializer)?;
        Ok(list.into_iter().collect())
    }
}
