//! Integration tests for the Ringbox letter-ring solver.
//!
//! These tests verify the complete pipeline from dictionary loading through
//! catalog filtering to solution enumeration, using a fixture word list and
//! the 12-letter puzzle "abcdefghijkl" (walls abc / def / ghi / jkl).

use std::collections::HashSet;

use ringbox::catalog::WordCatalog;
use ringbox::errors::PuzzleError;
use ringbox::puzzle::{Puzzle, PuzzleConfig};
use ringbox::solver::{self, Solution, SolverError};
use ringbox::word::Word;
use ringbox::word_list::WordList;

/// Load the fixture word list from disk.
fn load_fixture_words() -> WordList {
    WordList::load_from_path("tests/fixtures/words_small.txt")
        .expect("Failed to read fixture word list")
}

fn twelve_letter_puzzle() -> Puzzle {
    Puzzle::new("abcdefghijkl").expect("fixture puzzle must construct")
}

/// Helper to extract just the word texts from a solution.
fn solution_texts(solution: &Solution) -> Vec<String> {
    solution
        .words()
        .iter()
        .map(|w| w.text().to_string())
        .collect()
}

mod pipeline {
    use super::*;

    #[test]
    fn test_loader_normalizes_and_deduplicates() {
        let word_list = load_fixture_words();

        // "ADGJBEHK" collapses into "adgjbehk", and the indented duplicate
        // "kcfil" line collapses too.
        let occurrences = |w: &str| {
            word_list
                .words
                .iter()
                .filter(|candidate| candidate.as_str() == w)
                .count()
        };
        assert_eq!(occurrences("adgjbehk"), 1);
        assert_eq!(occurrences("kcfil"), 1);
        assert!(word_list.words.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn test_catalog_filters_fixture_words() {
        let puzzle = twelve_letter_puzzle();
        let word_list = load_fixture_words();
        let catalog =
            WordCatalog::filter_and_group(word_list.words.iter().map(String::as_str), &puzzle);

        // Rejected: "abd" (same-wall adjacency), "ab" (too short),
        // "cat"/"xyz" (letters outside the puzzle).
        assert!(catalog.words_starting_with('x').is_none());
        let a_words: Vec<&str> = catalog
            .words_starting_with('a')
            .unwrap()
            .iter()
            .map(Word::text)
            .collect();
        assert_eq!(
            a_words,
            vec!["adg", "adgjbehk", "adgjbehkcfil", "adgjcfil"]
        );

        // Kept: 8 distinct admissible words.
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_two_word_solutions_from_fixture() {
        let puzzle = twelve_letter_puzzle();
        let word_list = load_fixture_words();
        let catalog =
            WordCatalog::filter_and_group(word_list.words.iter().map(String::as_str), &puzzle);

        let mut solutions = solver::solve_puzzle(&puzzle, &catalog, 2).unwrap();
        solutions.sort_unstable();

        // Note that a first word covering the whole puzzle still extends to
        // a two-word solution; coverage is a set union, not a budget.
        let texts: Vec<Vec<String>> = solutions.iter().map(solution_texts).collect();
        assert_eq!(
            texts,
            vec![
                vec!["adgjbehk".to_string(), "kcfil".to_string()],
                vec!["adgjbehkcfil".to_string(), "lbehk".to_string()],
                vec!["adgjcfil".to_string(), "lbehk".to_string()],
            ]
        );
    }

    #[test]
    fn test_single_word_solution_from_fixture() {
        let puzzle = twelve_letter_puzzle();
        let word_list = load_fixture_words();
        let catalog =
            WordCatalog::filter_and_group(word_list.words.iter().map(String::as_str), &puzzle);

        let solutions = solver::solve_puzzle(&puzzle, &catalog, 1).unwrap();

        assert_eq!(solutions.len(), 1);
        assert_eq!(solution_texts(&solutions[0]), vec!["adgjbehkcfil"]);
    }

    #[test]
    fn test_every_solution_chains_and_covers() {
        let puzzle = twelve_letter_puzzle();
        let word_list = load_fixture_words();
        let catalog =
            WordCatalog::filter_and_group(word_list.words.iter().map(String::as_str), &puzzle);

        for n_words in 1..=puzzle.max_words() {
            for solution in solver::solve_puzzle(&puzzle, &catalog, n_words).unwrap() {
                assert_eq!(solution.len(), n_words);

                for pair in solution.words().windows(2) {
                    assert_eq!(
                        pair[0].last_char().unwrap(),
                        pair[1].first_char().unwrap(),
                        "consecutive words must chain in {solution}"
                    );
                }

                let covered: HashSet<char> =
                    solution.words().iter().flat_map(Word::letters).collect();
                assert_eq!(
                    covered,
                    *puzzle.letters(),
                    "solution {solution} must cover the full letter set"
                );
            }
        }
    }
}

mod coverage_scenarios {
    use super::*;

    /// Three chaining words whose letters cannot cover the puzzle: the
    /// search must return exactly the empty set, not a near miss.
    #[test]
    fn test_undercovering_catalog_yields_empty_set() {
        let puzzle = twelve_letter_puzzle();
        let catalog = WordCatalog::filter_and_group(["abd", "dgj", "jck"], &puzzle);

        let solutions = solver::solve_puzzle(&puzzle, &catalog, 2).unwrap();
        assert_eq!(solutions, Vec::<Solution>::new());
    }

    #[test]
    fn test_set_cover_allows_reused_letters() {
        let puzzle = twelve_letter_puzzle();
        // The two words overlap on 'c' and 'f'; coverage counts letters, not
        // uses.
        let catalog = WordCatalog::filter_and_group(["adgjbehkcf", "fcil"], &puzzle);

        let solutions = solver::solve_puzzle(&puzzle, &catalog, 2).unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solution_texts(&solutions[0]), vec!["adgjbehkcf", "fcil"]);
    }
}

mod word_count_bounds {
    use super::*;

    #[test]
    fn test_max_word_count_is_accepted() {
        let puzzle = twelve_letter_puzzle();
        let catalog = WordCatalog::filter_and_group(["adg"], &puzzle);

        // 12 letters / minimum word length 3 = 4.
        assert!(solver::solve_puzzle(&puzzle, &catalog, 4).is_ok());
    }

    #[test]
    fn test_word_count_above_max_is_rejected() {
        let puzzle = twelve_letter_puzzle();
        let catalog = WordCatalog::filter_and_group(["adg"], &puzzle);

        let err = solver::solve_puzzle(&puzzle, &catalog, 5).unwrap_err();
        assert!(matches!(
            err,
            SolverError::InvalidWordCount {
                requested: 5,
                max: 4
            }
        ));
        assert!(err.display_detailed().contains("S001"));
    }

    #[test]
    fn test_zero_word_count_is_rejected() {
        let puzzle = twelve_letter_puzzle();
        let catalog = WordCatalog::filter_and_group(["adg"], &puzzle);

        assert!(matches!(
            solver::solve_puzzle(&puzzle, &catalog, 0),
            Err(SolverError::InvalidWordCount { .. })
        ));
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_repeated_runs_agree_as_sets() {
        let puzzle = twelve_letter_puzzle();
        let word_list = load_fixture_words();
        let catalog =
            WordCatalog::filter_and_group(word_list.words.iter().map(String::as_str), &puzzle);

        let mut first = solver::solve_puzzle(&puzzle, &catalog, 2).unwrap();
        let mut second = solver::solve_puzzle(&puzzle, &catalog, 2).unwrap();

        // Branch completion order is unspecified, so compare sorted.
        first.sort_unstable();
        second.sort_unstable();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_dictionary_lines_do_not_duplicate_solutions() {
        let puzzle = twelve_letter_puzzle();
        let contents = "adgjbehk\nkcfil\nadgjbehk\nKCFIL\n";
        let word_list = WordList::parse_from_str(contents);
        let catalog =
            WordCatalog::filter_and_group(word_list.words.iter().map(String::as_str), &puzzle);

        let solutions = solver::solve_puzzle(&puzzle, &catalog, 2).unwrap();
        assert_eq!(solutions.len(), 1);
    }
}

mod configuration {
    use super::*;

    #[test]
    fn test_three_wall_puzzle() {
        let config = PuzzleConfig {
            wall_count: 3,
            min_word_length: 3,
        };
        let puzzle = Puzzle::with_config("abcdef", config).unwrap();
        // Walls: ab / cd / ef. "aceb" ends where "bdf" starts, and together
        // they cover all six letters.
        let catalog = WordCatalog::filter_and_group(["aceb", "bdf", "acbd"], &puzzle);

        let solutions = solver::solve_puzzle(&puzzle, &catalog, 2).unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solution_texts(&solutions[0]), vec!["aceb", "bdf"]);
    }

    #[test]
    fn test_invalid_letter_count_surfaces_before_search() {
        let err = Puzzle::new("abcde").unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::InvalidLetterCount { len: 5, walls: 4 }
        ));
        assert!(err.display_detailed().contains("P001"));
    }
}
