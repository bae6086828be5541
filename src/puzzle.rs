//! The letter-ring puzzle model: walls of letters and the adjacency rule.
//!
//! A puzzle is built from a string of letters typed wall by wall. The letters
//! are split into equal contiguous chunks, one per wall, and two letters on
//! the same wall may never appear adjacent within a single word.
//!
//! The model is immutable after construction; every query is pure and safe to
//! call concurrently from parallel search branches without synchronization.
//!
//! We assume each letter appears at most once across the puzzle. This is a
//! hard precondition, not re-validated at runtime: a repeated letter keeps the
//! wall of its first occurrence and the behavior of the solver is unspecified.
//!
//! # Examples
//!
//! ```
//! use ringbox::puzzle::Puzzle;
//!
//! let puzzle = Puzzle::new("abcdefghijkl")?;
//! assert!(puzzle.is_valid_word("adg"));
//! assert!(!puzzle.is_valid_word("abd")); // 'a' and 'b' share a wall
//! assert!(!puzzle.is_valid_word("adz")); // 'z' is not in the puzzle
//! assert!(!puzzle.is_valid_word("ad")); // too short
//! # Ok::<(), ringbox::errors::PuzzleError>(())
//! ```

use crate::errors::PuzzleError;
use std::collections::{HashMap, HashSet};

/// Index of a wall within the puzzle's wall arena.
pub type WallId = usize;

/// Tunable parameters of the puzzle geometry.
///
/// The defaults (4 walls, 3-letter minimum) match the published puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Number of walls the letter sequence is partitioned into.
    pub wall_count: usize,
    /// Shortest admissible word length.
    pub min_word_length: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            wall_count: 4,
            min_word_length: 3,
        }
    }
}

/// An immutable letter-ring puzzle.
///
/// Owns the partition of letters into walls and a reverse lookup from letter
/// to the index of its wall. Invariant: every puzzle letter maps to exactly
/// one wall, and the walls partition the letter set.
#[derive(Debug, Clone)]
pub struct Puzzle {
    // Wall arena, in input order. The lookup below stores indices into this.
    walls: Vec<Vec<char>>,
    wall_of: HashMap<char, WallId>,
    letters: HashSet<char>,
    config: PuzzleConfig,
}

impl Puzzle {
    /// Creates a puzzle from a string of letters with the default geometry
    /// (4 walls, minimum word length 3).
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidLetterCount`] if the letter count is not
    /// a positive multiple of the wall count.
    pub fn new(letters: &str) -> Result<Self, PuzzleError> {
        Self::with_config(letters, PuzzleConfig::default())
    }

    /// Creates a puzzle with an explicit [`PuzzleConfig`].
    ///
    /// Letters are ASCII-lowercased and split into `wall_count` equal
    /// contiguous walls in input order.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::ZeroWallCount`] or
    /// [`PuzzleError::ZeroMinWordLength`] for a degenerate configuration, and
    /// [`PuzzleError::InvalidLetterCount`] if the letter count is not a
    /// positive multiple of `wall_count`.
    pub fn with_config(letters: &str, config: PuzzleConfig) -> Result<Self, PuzzleError> {
        if config.wall_count == 0 {
            return Err(PuzzleError::ZeroWallCount);
        }
        if config.min_word_length == 0 {
            return Err(PuzzleError::ZeroMinWordLength);
        }

        let chars: Vec<char> = letters.chars().map(|c| c.to_ascii_lowercase()).collect();
        if chars.is_empty() || chars.len() % config.wall_count != 0 {
            return Err(PuzzleError::InvalidLetterCount {
                len: chars.len(),
                walls: config.wall_count,
            });
        }

        let letters_per_wall = chars.len() / config.wall_count;
        let mut walls: Vec<Vec<char>> = Vec::with_capacity(config.wall_count);
        let mut wall_of: HashMap<char, WallId> = HashMap::with_capacity(chars.len());
        let mut letter_set: HashSet<char> = HashSet::with_capacity(chars.len());

        for (wall_id, chunk) in chars.chunks(letters_per_wall).enumerate() {
            for &ch in chunk {
                letter_set.insert(ch);
                // First occurrence wins for repeated letters.
                wall_of.entry(ch).or_insert(wall_id);
            }
            walls.push(chunk.to_vec());
        }

        debug_assert_eq!(walls.len(), config.wall_count);
        debug_assert!(
            letter_set.iter().all(|ch| wall_of.contains_key(ch)),
            "every puzzle letter must map to a wall"
        );

        Ok(Self {
            walls,
            wall_of,
            letters: letter_set,
            config,
        })
    }

    /// The wall a letter belongs to, or `None` if the letter is not part of
    /// the puzzle.
    #[must_use]
    pub fn wall_of(&self, letter: char) -> Option<WallId> {
        self.wall_of.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Returns true if both letters are on the same wall.
    ///
    /// `false` if either letter is not part of the puzzle; never panics.
    #[must_use]
    pub fn same_wall(&self, a: char, b: char) -> bool {
        match (self.wall_of(a), self.wall_of(b)) {
            (Some(wa), Some(wb)) => wa == wb,
            _ => false,
        }
    }

    /// Returns true if the letter is contained in the puzzle.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_lowercase())
    }

    /// Returns true if the word can be played within the puzzle:
    /// at least `min_word_length` characters, every character a puzzle letter,
    /// and no two adjacent characters on the same wall.
    ///
    /// Input is case-normalized before checking.
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        let mut length = 0;
        let mut prev: Option<char> = None;

        for ch in word.chars().map(|c| c.to_ascii_lowercase()) {
            if !self.contains(ch) {
                return false;
            }
            if let Some(prev_ch) = prev {
                if self.same_wall(prev_ch, ch) {
                    return false;
                }
            }
            prev = Some(ch);
            length += 1;
        }

        length >= self.config.min_word_length
    }

    /// Number of distinct letters in the puzzle.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    /// The full set of puzzle letters. A valid solution must cover exactly
    /// this set.
    #[must_use]
    pub fn letters(&self) -> &HashSet<char> {
        &self.letters
    }

    /// The wall arena, in input order.
    #[must_use]
    pub fn walls(&self) -> &[Vec<char>] {
        &self.walls
    }

    /// The configuration this puzzle was built with.
    #[must_use]
    pub fn config(&self) -> PuzzleConfig {
        self.config
    }

    /// Largest admissible solution word count: no solution can hold more
    /// words than `letter_count / min_word_length`, since every word consumes
    /// at least `min_word_length` letters of the puzzle.
    #[must_use]
    pub fn max_words(&self) -> usize {
        self.letter_count() / self.config.min_word_length
    }
}
