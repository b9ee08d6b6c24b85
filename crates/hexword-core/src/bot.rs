//! The computer opponent.
//!
//! The bot plays greedily and stops at the first move that completes a word:
//! - Walk outward from each human tile along all six lines
//! - At the first empty cell of a run, try every letter A-Z
//! - If nothing completes a word anywhere, play a random letter on a random
//!   empty cell

use crate::board::{Board, Player};
use crate::dictionary::{Dictionary, MIN_WORD_LENGTH};
use crate::hex::{Direction, HexCoord};
use crate::rack::{random_letter, ALPHABET};
use crate::scanner::MAX_RUN_STEPS;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A letter the bot wants to place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub coord: HexCoord,
    pub letter: char,
}

/// How the bot arrived at a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Extends a run from a human tile into a dictionary word
    WordExtension,
    /// No extension was found
    Random,
}

/// A bot player
pub struct Bot {
    rng: StdRng,
}

impl Bot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a bot whose random fallback is reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose the next placement. Returns `None` only when the board is full.
    pub fn plan_move<D: Dictionary + ?Sized>(
        &mut self,
        board: &Board,
        dictionary: &D,
    ) -> Option<(Placement, MoveKind)> {
        if let Some(placement) = find_extension(board, dictionary) {
            return Some((placement, MoveKind::WordExtension));
        }
        self.random_placement(board)
            .map(|placement| (placement, MoveKind::Random))
    }

    fn random_placement(&mut self, board: &Board) -> Option<Placement> {
        let empty = board.empty_cells();
        let coord = *empty.choose(&mut self.rng)?;
        Some(Placement {
            coord,
            letter: random_letter(&mut self.rng),
        })
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new()
    }
}

/// First placement, in board order, that turns a run starting on a human
/// tile into a dictionary word.
pub fn find_extension<D: Dictionary + ?Sized>(board: &Board, dictionary: &D) -> Option<Placement> {
    let empty: HashSet<HexCoord> = board.empty_cells().into_iter().collect();

    for (origin, tile) in board.tiles() {
        if tile.owner != Player::Human {
            continue;
        }
        for direction in Direction::ALL {
            let mut word = String::from(tile.letter);

            for step in 1..=MAX_RUN_STEPS {
                let pos = origin.offset(direction, step);
                if !board.contains(pos) {
                    break;
                }
                if let Some(next) = board.tile(pos) {
                    word.push(next.letter);
                    continue;
                }
                if empty.contains(&pos) {
                    if let Some(letter) = completing_letter(&word, dictionary) {
                        return Some(Placement { coord: pos, letter });
                    }
                }
                break;
            }
        }
    }
    None
}

/// First letter A-Z that, appended to `prefix`, spells a word
fn completing_letter<D: Dictionary + ?Sized>(prefix: &str, dictionary: &D) -> Option<char> {
    if prefix.chars().count() + 1 < MIN_WORD_LENGTH {
        return None;
    }
    let mut candidate = prefix.to_lowercase();
    ALPHABET.into_iter().find(|letter| {
        candidate.push(letter.to_ascii_lowercase());
        let hit = dictionary.contains(&candidate);
        candidate.pop();
        hit
    })
}
