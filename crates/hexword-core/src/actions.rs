//! Events produced by turns, and how a game ends.

use crate::board::Player;
use crate::bot::MoveKind;
use crate::hex::HexCoord;
use crate::score::{ScoreUpdate, Scores};
use serde::{Deserialize, Serialize};

/// Score either player needs to reach to win
pub const WIN_THRESHOLD: u32 = 150;

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    HumanWins,
    AiWins,
    Tie,
}

impl Outcome {
    /// Result once scores are known, or `None` while nobody has reached
    /// `threshold`. Both reaching it at once is a tie.
    pub fn from_scores(scores: Scores, threshold: u32) -> Option<Outcome> {
        match (scores.human >= threshold, scores.ai >= threshold) {
            (true, true) => Some(Outcome::Tie),
            (true, false) => Some(Outcome::HumanWins),
            (false, true) => Some(Outcome::AiWins),
            (false, false) => None,
        }
    }

    /// Result decided on points alone, used when the board fills up
    pub fn by_points(scores: Scores) -> Outcome {
        match scores.human.cmp(&scores.ai) {
            std::cmp::Ordering::Greater => Outcome::HumanWins,
            std::cmp::Ordering::Less => Outcome::AiWins,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Announcement shown at the end of the game
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::HumanWins => "Player wins!",
            Outcome::AiWins => "AI wins!",
            Outcome::Tie => "It's a tie!",
        }
    }
}

/// Events that occur as a result of a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A letter was placed
    TilePlaced {
        player: Player,
        coord: HexCoord,
        letter: char,
    },

    /// The bot explained how it chose its move
    BotMoved { kind: MoveKind },

    /// A new word earned points
    WordScored {
        player: Player,
        word: String,
        path: Vec<HexCoord>,
        points: u32,
    },

    /// A new word was used up without scoring because its terminal tile
    /// belongs to the player who did not move
    WordSpent { actor: Player, word: String },

    /// The game ended
    GameOver { outcome: Outcome, scores: Scores },
}

/// Events describing one scoring pass
pub fn score_events(actor: Player, update: &ScoreUpdate, points: u32) -> Vec<GameEvent> {
    let scored = update.scored.iter().map(|scored| GameEvent::WordScored {
        player: scored.owner,
        word: scored.word.clone(),
        path: scored.path.clone(),
        points,
    });
    let spent = update.spent.iter().map(|word| GameEvent::WordSpent {
        actor,
        word: word.clone(),
    });
    scored.chain(spent).collect()
}
