//! The solver: exhaustive enumeration of word-chain solutions.
//!
//! A solution is an ordered sequence of exactly `n_words` catalog words in
//! which each word begins with the letter that ended the previous word, and
//! whose letters together cover every puzzle letter at least once (set-cover:
//! a letter may be reused, it just has to appear somewhere).
//!
//! The search space is partitioned by the first word's starting letter. One
//! independent branch runs per puzzle letter, in parallel; each branch owns
//! its search state and a private result buffer, and the buffers are
//! concatenated once every branch has finished. No state is shared between
//! branches, so there is nothing to lock.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with two variants:
//!
//! - S001: `InvalidWordCount` (Requested word count outside the valid range)
//! - S002: `WordIndex` (Out-of-range word character access inside the search)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()`
//! method.
//!
//! # Examples
//!
//! ```
//! use ringbox::catalog::WordCatalog;
//! use ringbox::puzzle::Puzzle;
//! use ringbox::solver;
//!
//! let puzzle = Puzzle::new("abcdefghijkl")?;
//! let catalog = WordCatalog::filter_and_group(["adgjbehk", "kcfil"], &puzzle);
//!
//! let solutions = solver::solve_puzzle(&puzzle, &catalog, 2)?;
//! assert_eq!(solutions.len(), 1);
//! assert_eq!(solutions[0].to_string(), "adgjbehk kcfil");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The order in which solutions are discovered is not specified and may vary
//! run to run; callers needing deterministic output must sort the returned
//! set themselves.

use crate::catalog::WordCatalog;
use crate::puzzle::Puzzle;
use crate::word::{IndexOutOfBounds, Word};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fmt;

/// One complete word chain covering the puzzle.
///
/// `Ord`/`Eq` follow the word sequence, so a `Vec<Solution>` can be sorted
/// for stable presentation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution {
    words: Vec<Word>,
}

impl Solution {
    fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The words of the chain, in play order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Unified error type for the solver.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The requested solution word count lies outside `[1, max]`, where
    /// `max` is `letter_count / min_word_length`.
    #[error("requested {requested} words per solution, but the valid range is 1 to {max}")]
    InvalidWordCount { requested: usize, max: usize },

    /// A word character was accessed out of bounds during the search.
    ///
    /// This indicates a solver bug; it is propagated rather than allowed to
    /// corrupt the result set.
    #[error("word access error: {0}")]
    WordIndex(#[from] IndexOutOfBounds),
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::InvalidWordCount { .. } => "S001",
            SolverError::WordIndex(_) => "S002",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::InvalidWordCount { .. } => Some(
                "Every word uses at least min-word-length puzzle letters, so a solution \
                 can hold at most letter-count / min-word-length words",
            ),
            SolverError::WordIndex(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Enumerates every `n_words`-word solution of the puzzle.
///
/// The search is partitioned by the first word's starting letter: each puzzle
/// letter seeds one independent branch, and the branches run in parallel.
/// Within a branch the traversal is a plain synchronous depth-first walk that
/// runs to completion; there is no early exit, timeout, or partial delivery.
///
/// Returns the merged, unordered set of solutions from all branches.
///
/// # Errors
///
/// Returns [`SolverError::InvalidWordCount`] if `n_words` is zero or exceeds
/// [`Puzzle::max_words`], checked before any search work begins, and
/// [`SolverError::WordIndex`] if a word is indexed out of bounds during the
/// search.
pub fn solve_puzzle(
    puzzle: &Puzzle,
    catalog: &WordCatalog,
    n_words: usize,
) -> Result<Vec<Solution>, SolverError> {
    let max = puzzle.max_words();
    if n_words == 0 || n_words > max {
        return Err(SolverError::InvalidWordCount {
            requested: n_words,
            max,
        });
    }

    info!(
        "searching for {n_words}-word solutions across {} starting letters ({} catalog words)",
        puzzle.letter_count(),
        catalog.len()
    );

    let starting_letters: Vec<char> = puzzle.letters().iter().copied().collect();

    // One branch per starting letter. Each branch fills a private buffer;
    // flattening after the join merges them without any shared sink.
    let branch_results: Vec<Vec<Solution>> = starting_letters
        .into_par_iter()
        .map(|first_letter| {
            let mut found = Vec::new();
            extend_chain(
                catalog,
                n_words,
                first_letter,
                puzzle.letters().clone(),
                Vec::with_capacity(n_words),
                &mut found,
            )?;
            debug!(
                "branch '{first_letter}' finished with {} solution(s)",
                found.len()
            );
            Ok(found)
        })
        .collect::<Result<_, SolverError>>()?;

    let solutions: Vec<Solution> = branch_results.into_iter().flatten().collect();

    debug_assert!(
        solutions.iter().all(|s| s.len() == n_words),
        "every solution must contain exactly {n_words} words"
    );

    info!("{} solution(s) found", solutions.len());
    Ok(solutions)
}

/// Depth-first extension of a partial word chain.
///
/// `uncovered` holds the puzzle letters no chosen word has touched yet, and
/// `chain` the words chosen so far. Both are owned by this call frame and
/// copied, never aliased, when branching into candidate words, so sibling
/// branches cannot observe each other's state.
///
/// Dead ends (no catalog entry for `must_start_with`, or no candidate
/// surviving the prune) simply contribute nothing.
fn extend_chain(
    catalog: &WordCatalog,
    words_remaining: usize,
    must_start_with: char,
    uncovered: HashSet<char>,
    chain: Vec<Word>,
    found: &mut Vec<Solution>,
) -> Result<(), SolverError> {
    if words_remaining == 0 {
        // The chain is complete; it is a solution exactly when it covered
        // every puzzle letter.
        if uncovered.is_empty() {
            found.push(Solution::new(chain));
        }
        return Ok(());
    }

    let Some(candidates) = catalog.words_starting_with(must_start_with) else {
        return Ok(());
    };

    for word in candidates {
        // A final word with fewer distinct letters than remain uncovered can
        // never complete the cover. This is an optimization only; the
        // terminal check above stays authoritative.
        if words_remaining == 1 && uncovered.len() > word.distinct_letter_count() {
            continue;
        }

        let mut next_uncovered = uncovered.clone();
        for ch in word.letters() {
            next_uncovered.remove(&ch);
        }

        let mut next_chain = chain.clone();
        next_chain.push(word.clone());

        extend_chain(
            catalog,
            words_remaining - 1,
            word.last_char()?,
            next_uncovered,
            next_chain,
            found,
        )?;
    }

    Ok(())
}
