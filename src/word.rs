//! The [`Word`] value type: a dictionary word plus its distinct-letter count.
//!
//! The distinct-letter count is computed once at construction and drives the
//! last-word pruning rule in the solver. Equality, ordering, and hashing are
//! defined by the word text alone.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A character position outside the word's bounds was requested.
///
/// This indicates a programming error in the caller; it is reported as a
/// regular error value rather than terminating the process.
#[derive(Debug, thiserror::Error)]
#[error("character index {index} out of bounds for word \"{word}\" of length {len}")]
pub struct IndexOutOfBounds {
    pub word: String,
    pub index: usize,
    pub len: usize,
}

/// An immutable dictionary word.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    distinct_letters: usize,
}

impl Word {
    /// Wraps a word string, counting its distinct letters once.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let distinct: HashSet<char> = text.chars().collect();
        Self {
            text: text.to_string(),
            distinct_letters: distinct.len(),
        }
    }

    /// The literal word text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Word length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of distinct letters in the word.
    ///
    /// A word cannot cover more puzzle letters than this, which is what makes
    /// it useful for pruning.
    #[must_use]
    pub fn distinct_letter_count(&self) -> usize {
        self.distinct_letters
    }

    /// The letters of the word, in order, repeats included.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// The character at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] if `index` is past the end of the word.
    pub fn char_at(&self, index: usize) -> Result<char, IndexOutOfBounds> {
        self.text
            .chars()
            .nth(index)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// The first character of the word.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] if the word is empty.
    pub fn first_char(&self) -> Result<char, IndexOutOfBounds> {
        self.text.chars().next().ok_or_else(|| self.out_of_bounds(0))
    }

    /// The last character of the word.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] if the word is empty.
    pub fn last_char(&self) -> Result<char, IndexOutOfBounds> {
        self.text
            .chars()
            .next_back()
            .ok_or_else(|| self.out_of_bounds(0))
    }

    fn out_of_bounds(&self, index: usize) -> IndexOutOfBounds {
        IndexOutOfBounds {
            word: self.text.clone(),
            index,
            len: self.len(),
        }
    }
}

// Identity is the text alone; the distinct-letter count is derived from it.

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
