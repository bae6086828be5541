//! `word_list` — load and preprocess the raw candidate word list.
//!
//! This module reads a dictionary-like source (a file, or an in-memory string)
//! with one candidate word per line and produces a flat `Vec<String>` of
//! lowercase words. It knows nothing about the puzzle; filtering against the
//! puzzle's rules happens later, in [`crate::catalog`].
//!
//! The parsing logic:
//! - Each line holds one candidate word.
//! - Lines are trimmed; empty lines are skipped silently.
//! - All words are normalized to lowercase.
//! - The final list is deduplicated and sorted by length first, then
//!   alphabetically.

/// Struct representing a processed, ready-to-use word list.
///
/// The `words` vector contains all candidate words (normalized, deduplicated),
/// already sorted by (length, alphabetical). Scoring or frequency metadata is
/// intentionally not modeled; the solver only needs the words themselves.
#[derive(Debug, Clone)]
pub struct WordList {
    /// List of lowercase candidate words.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// Useful for tests and for callers that already hold the dictionary
    /// contents in memory.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    None
                } else {
                    Some(line.to_lowercase())
                }
            })
            .collect();

        // Deduplicate with sort + dedup: dedup() only removes *adjacent*
        // duplicates, so sort alphabetically first.
        words.sort();
        words.dedup();

        // Then the presentation order: by length, then alphabetically.
        words.sort_by(|a, b| match a.len().cmp(&b.len()) {
            std::cmp::Ordering::Equal => a.cmp(b),
            other => other,
        });

        WordList { words }
    }

    /// Read a word list from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!(
                    "failed to read word list from '{}': {}",
                    path_ref.display(),
                    e
                ),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }
}
