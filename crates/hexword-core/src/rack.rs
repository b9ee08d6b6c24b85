//! The human player's letter rack.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Letters tiles are drawn from
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Default number of letters held
pub const RACK_CAPACITY: usize = 8;

/// Draw a uniformly random uppercase letter
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    ALPHABET[rng.gen_range(0..ALPHABET.len())]
}

/// An ordered hand of uppercase letters with a fixed capacity.
///
/// Duplicates are allowed; removing a letter takes out a single copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    letters: Vec<char>,
    capacity: usize,
}

impl Rack {
    /// Create an empty rack
    pub fn new(capacity: usize) -> Self {
        Self {
            letters: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a rack filled with random letters
    pub fn filled<R: Rng + ?Sized>(capacity: usize, rng: &mut R) -> Self {
        let mut rack = Self::new(capacity);
        rack.refill(rng);
        rack
    }

    /// Create a rack holding specific letters.
    ///
    /// # Panics
    /// If more letters than `capacity` are given or any is not A-Z.
    pub fn with_letters(capacity: usize, letters: &[char]) -> Self {
        let mut rack = Self::new(capacity);
        for &letter in letters {
            rack.push(letter);
        }
        rack
    }

    fn push(&mut self, letter: char) {
        assert!(
            self.letters.len() < self.capacity,
            "rack already holds {} letters",
            self.capacity
        );
        assert!(letter.is_ascii_alphabetic(), "rack letters must be A-Z, got {letter:?}");
        self.letters.push(letter.to_ascii_uppercase());
    }

    /// Top the rack back up to capacity with random letters
    pub fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        while self.letters.len() < self.capacity {
            self.push(random_letter(rng));
        }
    }

    /// Whether the rack holds `letter` (case-insensitive)
    pub fn contains(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.letters.contains(&letter)
    }

    /// Remove one copy of `letter`. Returns false if it isn't held.
    pub fn take(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        match self.letters.iter().position(|&held| held == letter) {
            Some(index) => {
                self.letters.remove(index);
                true
            }
            None => false,
        }
    }

    /// Letters in the order they were drawn
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
