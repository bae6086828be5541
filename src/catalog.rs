//! The word catalog: admissible dictionary words grouped by starting letter.
//!
//! [`WordCatalog::filter_and_group`] runs every raw candidate word through
//! [`Puzzle::is_valid_word`] once, up front. The solver then trusts the
//! catalog completely and never re-checks adjacency during the search.
//!
//! Words under each starting letter are kept in an ordered set, deduplicated
//! by exact text. The fixed iteration order is what makes repeated runs
//! produce the same *set* of solutions.
//!
//! # Examples
//!
//! ```
//! use ringbox::catalog::WordCatalog;
//! use ringbox::puzzle::Puzzle;
//!
//! let puzzle = Puzzle::new("abcdefghijkl")?;
//! let catalog = WordCatalog::filter_and_group(["adg", "abd", "dgj", "cat"], &puzzle);
//!
//! // "abd" fails adjacency, "cat" uses letters outside the puzzle.
//! assert_eq!(catalog.len(), 2);
//! assert!(catalog.words_starting_with('a').is_some());
//! assert!(catalog.words_starting_with('c').is_none());
//! # Ok::<(), ringbox::errors::PuzzleError>(())
//! ```

use crate::puzzle::Puzzle;
use crate::word::Word;
use log::debug;
use std::collections::{BTreeSet, HashMap};

/// Mapping from starting letter to the admissible words that begin with it.
///
/// Built once per puzzle; read-only during the search.
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    by_first_letter: HashMap<char, BTreeSet<Word>>,
}

impl WordCatalog {
    /// Filters raw candidate words against the puzzle rules and groups the
    /// survivors by their first letter, deduplicating by exact text.
    pub fn filter_and_group<I, S>(raw_words: I, puzzle: &Puzzle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_first_letter: HashMap<char, BTreeSet<Word>> = HashMap::new();
        let mut candidates = 0usize;
        let mut kept = 0usize;

        for raw in raw_words {
            candidates += 1;
            let word = raw.as_ref().trim().to_lowercase();
            if !puzzle.is_valid_word(&word) {
                continue;
            }
            // Valid words are non-empty (the length check guarantees it).
            let Some(first) = word.chars().next() else {
                continue;
            };
            if by_first_letter
                .entry(first)
                .or_default()
                .insert(Word::new(&word))
            {
                kept += 1;
            }
        }

        debug!("catalog kept {kept} of {candidates} candidate words");

        Self { by_first_letter }
    }

    /// The admissible words starting with `letter`, or `None` if there are
    /// none. An absent letter is a normal empty-branch outcome for the
    /// solver, not an error.
    #[must_use]
    pub fn words_starting_with(&self, letter: char) -> Option<&BTreeSet<Word>> {
        self.by_first_letter.get(&letter)
    }

    /// Total number of words in the catalog, across all starting letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_first_letter.values().map(BTreeSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_first_letter.is_empty()
    }

    /// The starting letters that have at least one admissible word.
    pub fn starting_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.by_first_letter.keys().copied()
    }
}
