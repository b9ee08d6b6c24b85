//! Scoring: turns words found on the board into points.
//!
//! Each word string scores at most once per game, for anyone. A word is
//! attributed to the owner of the last cell of the path it was read along,
//! and only pays out if that owner is the player whose move triggered the
//! scoring pass. Otherwise the word is spent and nobody gets the points.

use crate::board::{Board, Player};
use crate::dictionary::Dictionary;
use crate::hex::HexCoord;
use crate::scanner;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Points awarded per new word
pub const POINTS_PER_WORD: u32 = 5;

/// Running totals for both players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub human: u32,
    pub ai: u32,
}

impl Scores {
    /// Score for a player
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Human => self.human,
            Player::Ai => self.ai,
        }
    }

    fn add(&mut self, player: Player, points: u32) {
        match player {
            Player::Human => self.human += points,
            Player::Ai => self.ai += points,
        }
    }
}

/// A word that scored, with the cells to highlight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPath {
    pub word: String,
    pub path: Vec<HexCoord>,
    pub owner: Player,
}

/// Result of one scoring pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreUpdate {
    /// Points gained by the acting player
    pub delta: u32,
    /// Words that scored this pass
    pub scored: Vec<ScoredPath>,
    /// New words that were consumed without scoring
    pub spent: Vec<String>,
    /// Totals after the pass
    pub scores: Scores,
}

/// Scores plus the set of words already used up
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreState {
    scores: Scores,
    /// Every word ever consumed, by either player
    validated: BTreeSet<String>,
    /// Paths scored by the most recent pass
    last_scored: Vec<ScoredPath>,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current totals
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Whether a word has already been consumed
    pub fn is_validated(&self, word: &str) -> bool {
        self.validated.contains(word)
    }

    /// All consumed words, alphabetically
    pub fn validated_words(&self) -> impl Iterator<Item = &str> {
        self.validated.iter().map(String::as_str)
    }

    /// Paths scored by the most recent pass
    pub fn last_scored(&self) -> &[ScoredPath] {
        &self.last_scored
    }

    /// Run a scoring pass after `actor` has moved.
    ///
    /// Every word found that has not been seen before is consumed. Those whose
    /// terminal cell belongs to `actor` earn `points` each.
    pub fn update<D: Dictionary + ?Sized>(
        &mut self,
        board: &Board,
        dictionary: &D,
        actor: Player,
        points: u32,
    ) -> ScoreUpdate {
        let found = scanner::scan(board, dictionary);
        self.last_scored.clear();

        let mut update = ScoreUpdate::default();
        for candidate in found {
            if self.validated.contains(&candidate.word) {
                continue;
            }
            self.validated.insert(candidate.word.clone());

            let Some(owner) = board.tile(candidate.terminal()).map(|tile| tile.owner) else {
                continue;
            };
            if owner == actor {
                self.scores.add(actor, points);
                update.delta += points;
                self.last_scored.push(ScoredPath {
                    word: candidate.word,
                    path: candidate.path,
                    owner,
                });
            } else {
                update.spent.push(candidate.word);
            }
        }

        update.scored = self.last_scored.clone();
        update.scores = self.scores;
        update
    }
}
