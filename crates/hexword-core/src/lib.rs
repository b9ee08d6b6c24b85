//! Hexword - a Scrabble-style word game on a hexagonal grid
//!
//! This crate provides the core game logic for Hexword, including:
//! - Hex coordinate system and the fixed hexagonal board
//! - Word discovery along the six straight lines through every cell
//! - Scoring with a game-wide set of already used words
//! - A greedy computer opponent
//! - The human player's letter rack
//!
//! # Architecture
//!
//! The engine is synchronous and does no I/O beyond loading word lists.
//! Front ends own the dictionary and a [`Bot`], and drive the game through
//! [`GameState::play_turn`], which runs the human move, its scoring pass, the
//! bot's reply and its scoring pass as one step.
//!
//! # Modules
//!
//! - [`hex`]: Axial coordinates and line directions
//! - [`board`]: Cells, tiles and players
//! - [`dictionary`]: The `Dictionary` trait and an in-memory word list
//! - [`scanner`]: Finds words on the board
//! - [`score`]: Turns found words into points
//! - [`bot`]: Move selection for the computer player
//! - [`rack`]: Letters available to the human player
//! - [`game`]: Game state and turn handling

pub mod actions;
pub mod board;
pub mod bot;
pub mod dictionary;
pub mod game;
pub mod hex;
pub mod rack;
pub mod scanner;
pub mod score;

// Re-export commonly used types
pub use actions::{GameEvent, Outcome, WIN_THRESHOLD};
pub use board::{Board, Player, Tile};
pub use bot::{Bot, MoveKind, Placement};
pub use dictionary::{Dictionary, DictionaryError, WordList};
pub use game::{AiTurn, ConfigError, GameConfig, GameError, GameState, GameStateJson, PlacedTile, TurnOutcome};
pub use hex::{Direction, HexCoord};
pub use rack::Rack;
pub use scanner::FoundWord;
pub use score::{ScoreState, ScoreUpdate, ScoredPath, Scores};
