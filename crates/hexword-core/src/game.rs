//! Core game state.
//!
//! This module contains the `GameState` struct that ties the board, rack,
//! scorer and bot together, and the turn transaction front ends drive.

use crate::actions::{score_events, GameEvent, Outcome, WIN_THRESHOLD};
use crate::board::{Board, Player, Tile, DEFAULT_RADIUS};
use crate::bot::{Bot, MoveKind, Placement};
use crate::dictionary::Dictionary;
use crate::hex::HexCoord;
use crate::rack::{Rack, RACK_CAPACITY};
use crate::score::{ScoreState, ScoreUpdate, ScoredPath, Scores, POINTS_PER_WORD};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when making a move
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Cell {0} is not on the board")]
    OutOfBoard(HexCoord),

    #[error("Cell {0} is already occupied")]
    CellOccupied(HexCoord),

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    #[error("Letter {0} is not in your rack")]
    LetterNotInRack(char),

    #[error("The board is full")]
    BoardFull,

    #[error("Game is over")]
    GameOver,
}

/// Rule settings that cannot produce a playable game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Board radius must not be negative, got {0}")]
    NegativeRadius(i32),

    #[error("Rack must hold at least one letter")]
    EmptyRack,

    #[error("Winning score must be at least 1")]
    ZeroThreshold,

    #[error("Words must be worth at least 1 point")]
    ZeroPoints,
}

/// Tunable rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distance from the center cell to the rim
    pub board_radius: i32,
    /// Letters held by the human player
    pub rack_capacity: usize,
    /// Score that ends the game
    pub win_threshold: u32,
    /// Points per new word
    pub points_per_word: u32,
}

impl GameConfig {
    /// Check that a game played with these rules can be won
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_radius < 0 {
            return Err(ConfigError::NegativeRadius(self.board_radius));
        }
        if self.rack_capacity == 0 {
            return Err(ConfigError::EmptyRack);
        }
        if self.win_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.points_per_word == 0 {
            return Err(ConfigError::ZeroPoints);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_radius: DEFAULT_RADIUS,
            rack_capacity: RACK_CAPACITY,
            win_threshold: WIN_THRESHOLD,
            points_per_word: POINTS_PER_WORD,
        }
    }
}

/// The bot's half of a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTurn {
    pub placement: Placement,
    pub kind: MoveKind,
    pub update: ScoreUpdate,
}

/// Everything that happened during one call to [`GameState::play_turn`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Scoring pass after the human's placement
    pub human: ScoreUpdate,
    /// The bot's reply, unless the game ended first
    pub ai: Option<AiTurn>,
    /// Set when this turn ended the game
    pub outcome: Option<Outcome>,
    pub events: Vec<GameEvent>,
}

/// The complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// The game board
    pub board: Board,
    /// The human player's letters
    pub rack: Rack,
    /// Scores and consumed words
    score: ScoreState,
    /// Completed human turns
    pub turn_number: u32,
    /// Set once the game has ended
    pub outcome: Option<Outcome>,
    /// Source of rack letters
    #[serde(skip, default = "entropy_rng")]
    rng: StdRng,
}

fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

impl GameState {
    /// Start a new game
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, entropy_rng())
    }

    /// Start a new game whose rack draws are reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let rack = Rack::filled(config.rack_capacity, &mut rng);
        Self {
            board: Board::new(config.board_radius),
            rack,
            score: ScoreState::new(),
            turn_number: 0,
            outcome: None,
            rng,
            config,
        }
    }

    /// Current totals
    pub fn scores(&self) -> Scores {
        self.score.scores()
    }

    /// Words consumed so far, alphabetically
    pub fn validated_words(&self) -> impl Iterator<Item = &str> {
        self.score.validated_words()
    }

    /// Paths scored by the most recent pass, for highlighting
    pub fn last_scored(&self) -> &[ScoredPath] {
        self.score.last_scored()
    }

    /// Check if the game is finished
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Place a tile, with the reason on failure
    pub fn try_place(&mut self, coord: HexCoord, letter: char, player: Player) -> Result<Tile, GameError> {
        self.board.place(coord, letter, player)
    }

    /// Place a tile. False if the cell is occupied, off the board, or the
    /// letter is not A-Z; the board is left unchanged in that case.
    pub fn place_letter(&mut self, coord: HexCoord, letter: char, player: Player) -> bool {
        self.try_place(coord, letter, player).is_ok()
    }

    /// Scoring pass for the player who just moved
    pub fn update_scores<D: Dictionary + ?Sized>(&mut self, dictionary: &D, actor: Player) -> ScoreUpdate {
        self.score
            .update(&self.board, dictionary, actor, self.config.points_per_word)
    }

    /// Let the bot place a letter, then score for it
    pub fn ai_play<D: Dictionary + ?Sized>(&mut self, bot: &mut Bot, dictionary: &D) -> Result<AiTurn, GameError> {
        let (placement, kind) = bot
            .plan_move(&self.board, dictionary)
            .ok_or(GameError::BoardFull)?;
        self.board.place(placement.coord, placement.letter, Player::Ai)?;
        let update = self.update_scores(dictionary, Player::Ai);
        Ok(AiTurn {
            placement,
            kind,
            update,
        })
    }

    /// Whether either player has reached the winning score
    pub fn check_winner(&self) -> Option<Outcome> {
        Outcome::from_scores(self.scores(), self.config.win_threshold)
    }

    /// Play a full turn: the human places `letter` from the rack at `coord`,
    /// then the bot replies.
    ///
    /// Nothing changes if the move is rejected. Once the placement succeeds
    /// the rest of the turn always completes.
    pub fn play_turn<D: Dictionary + ?Sized>(
        &mut self,
        coord: HexCoord,
        letter: char,
        bot: &mut Bot,
        dictionary: &D,
    ) -> Result<TurnOutcome, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(letter));
        }
        let letter = letter.to_ascii_uppercase();
        if !self.rack.contains(letter) {
            return Err(GameError::LetterNotInRack(letter));
        }

        let tile = self.board.place(coord, letter, Player::Human)?;
        let removed = self.rack.take(letter);
        debug_assert!(removed, "rack lost a letter it reported holding");
        self.rack.refill(&mut self.rng);
        self.turn_number += 1;

        let points = self.config.points_per_word;
        let mut events = vec![GameEvent::TilePlaced {
            player: Player::Human,
            coord,
            letter: tile.letter,
        }];

        let human = self.update_scores(dictionary, Player::Human);
        events.extend(score_events(Player::Human, &human, points));

        let mut outcome = self.check_winner();
        let mut ai = None;
        if outcome.is_none() && !self.board.is_full() {
            let turn = self.ai_play(bot, dictionary)?;
            events.push(GameEvent::TilePlaced {
                player: Player::Ai,
                coord: turn.placement.coord,
                letter: turn.placement.letter,
            });
            events.push(GameEvent::BotMoved { kind: turn.kind });
            events.extend(score_events(Player::Ai, &turn.update, points));
            outcome = self.check_winner();
            ai = Some(turn);
        }

        if outcome.is_none() && self.board.is_full() {
            outcome = Some(Outcome::by_points(self.scores()));
        }
        if let Some(outcome) = outcome {
            self.outcome = Some(outcome);
            events.push(GameEvent::GameOver {
                outcome,
                scores: self.scores(),
            });
        }

        Ok(TurnOutcome {
            human,
            ai,
            outcome,
            events,
        })
    }

    /// Flat, serializable view of the game for front ends
    pub fn snapshot(&self) -> GameStateJson {
        GameStateJson {
            radius: self.board.radius(),
            tiles: self
                .board
                .tiles()
                .map(|(coord, tile)| PlacedTile {
                    coord,
                    letter: tile.letter,
                    owner: tile.owner,
                })
                .collect(),
            scores: self.scores(),
            rack: self.rack.letters().to_vec(),
            validated_words: self.validated_words().map(str::to_string).collect(),
            last_scored: self.last_scored().to_vec(),
            turn_number: self.turn_number,
            outcome: self.outcome,
        }
    }
}

/// A tile as it appears in a [`GameStateJson`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub coord: HexCoord,
    pub letter: char,
    pub owner: Player,
}

/// JSON-friendly view of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateJson {
    pub radius: i32,
    pub tiles: Vec<PlacedTile>,
    pub scores: Scores,
    pub rack: Vec<char>,
    pub validated_words: Vec<String>,
    pub last_scored: Vec<ScoredPath>,
    pub turn_number: u32,
    pub outcome: Option<Outcome>,
}

impl GameStateJson {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
