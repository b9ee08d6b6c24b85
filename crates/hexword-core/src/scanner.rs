//! Finds dictionary words spelled in straight lines across the board.
//!
//! Every occupied cell is treated as the start of a run in each of the six
//! directions. A line is therefore read once from each end, and the same word
//! can be reported twice. Duplicates are left for the scorer to discard.

use crate::board::Board;
use crate::dictionary::{Dictionary, MIN_WORD_LENGTH};
use crate::hex::{Direction, HexCoord};
use serde::{Deserialize, Serialize};

/// Furthest a run extends past its starting cell
pub const MAX_RUN_STEPS: i32 = 5;

/// A dictionary word found on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWord {
    /// Lowercase word
    pub word: String,
    /// Cells spelling the word, starting at the scan origin
    pub path: Vec<HexCoord>,
}

impl FoundWord {
    /// The last cell of the path, whose owner the word is attributed to
    pub fn terminal(&self) -> HexCoord {
        *self
            .path
            .last()
            .expect("a found word always covers at least its origin cell")
    }
}

/// Scan the whole board for words.
///
/// Results come in board order, then direction order, then by run length.
/// Every prefix of a run that is a word is reported on its own.
pub fn scan<D: Dictionary + ?Sized>(board: &Board, dictionary: &D) -> Vec<FoundWord> {
    let mut found = Vec::new();
    for (origin, _) in board.tiles() {
        for direction in Direction::ALL {
            scan_run(board, dictionary, origin, direction, &mut found);
        }
    }
    found
}

fn scan_run<D: Dictionary + ?Sized>(
    board: &Board,
    dictionary: &D,
    origin: HexCoord,
    direction: Direction,
    found: &mut Vec<FoundWord>,
) {
    let Some(start) = board.tile(origin) else {
        return;
    };
    let mut word = String::from(start.letter);
    let mut path = vec![origin];

    for step in 1..=MAX_RUN_STEPS {
        let pos = origin.offset(direction, step);
        let Some(tile) = board.tile(pos) else {
            break;
        };
        word.push(tile.letter);
        path.push(pos);

        if path.len() >= MIN_WORD_LENGTH {
            let lower = word.to_lowercase();
            if dictionary.contains(&lower) {
                found.push(FoundWord {
                    word: lower,
                    path: path.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::dictionary::WordList;

    fn place_word(board: &mut Board, start: HexCoord, direction: Direction, letters: &str, owner: Player) {
        for (i, letter) in letters.chars().enumerate() {
            assert!(board.place_letter(start.offset(direction, i as i32), letter, owner));
        }
    }

    #[test]
    fn test_empty_board_has_no_words() {
        let dict = WordList::from_words(["cat"]);
        assert!(scan(&Board::standard(), &dict).is_empty());
    }

    #[test]
    fn test_single_letters_never_count() {
        let dict = WordList::from_words(["cat"]);
        let mut board = Board::standard();
        board.place_letter(HexCoord::new(0, 0), 'C', Player::Human);
        board.place_letter(HexCoord::new(3, 0), 'A', Player::Human);
        assert!(scan(&board, &dict).is_empty());
    }

    #[test]
    fn test_finds_word_with_path() {
        let dict = WordList::from_words(["cat"]);
        let mut board = Board::standard();
        place_word(&mut board, HexCoord::new(0, 0), Direction::East, "CAT", Player::Human);

        let found = scan(&board, &dict);
        assert_eq!(
            found,
            vec![FoundWord {
                word: "cat".into(),
                path: vec![HexCoord::new(0, 0), HexCoord::new(1, 0), HexCoord::new(2, 0)],
            }]
        );
        assert_eq!(found[0].terminal(), HexCoord::new(2, 0));
    }

    #[test]
    fn test_reports_every_word_prefix() {
        let dict = WordList::from_words(["cat", "cats"]);
        let mut board = Board::standard();
        place_word(&mut board, HexCoord::new(0, 0), Direction::SouthEast, "CATS", Player::Human);

        let words: Vec<_> = scan(&board, &dict).into_iter().map(|f| f.word).collect();
        assert_eq!(words, vec!["cat", "cats"]);
    }

    #[test]
    fn test_palindrome_found_from_both_ends() {
        let dict = WordList::from_words(["pop"]);
        let mut board = Board::standard();
        place_word(&mut board, HexCoord::new(-1, 1), Direction::NorthEast, "POP", Player::Ai);

        let found = scan(&board, &dict);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].path.first(), found[1].path.last());
        assert_eq!(found[0].path.last(), found[1].path.first());
    }

    #[test]
    fn test_runs_stop_at_gaps_and_edges() {
        let dict = WordList::from_words(["cat", "ca"]);
        let mut board = Board::standard();
        // "CA" sits against the rim, "CA_T" is broken by an empty cell
        place_word(&mut board, HexCoord::new(4, 0), Direction::East, "CA", Player::Human);
        board.place_letter(HexCoord::new(-2, 0), 'C', Player::Human);
        board.place_letter(HexCoord::new(-1, 0), 'A', Player::Human);
        board.place_letter(HexCoord::new(1, 0), 'T', Player::Human);

        assert!(scan(&board, &dict).is_empty());
    }

    #[test]
    fn test_runs_are_bounded() {
        // Seven letters in a row: only runs of up to six cells are read
        let dict = WordList::from_words(["abcdef", "abcdefg"]);
        let mut board = Board::standard();
        place_word(&mut board, HexCoord::new(-3, 0), Direction::East, "ABCDEFG", Player::Human);

        let words: Vec<_> = scan(&board, &dict).into_iter().map(|f| f.word).collect();
        assert_eq!(words, vec!["abcdef"]);
    }

    #[test]
    fn test_lookup_is_lowercase() {
        let dict = WordList::from_words(["HEX"]);
        let mut board = Board::standard();
        place_word(&mut board, HexCoord::new(0, -2), Direction::SouthEast, "hex", Player::Human);

        let found = scan(&board, &dict);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word, "hex");
    }
}
