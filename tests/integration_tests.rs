//! Integration tests for the crossfill solver.
//!
//! These tests run the complete pipeline: loading a grid description and a word list
//! from fixture files, solving, and rendering the filled grid.

use crossfill::errors::LoadError;
use crossfill::render::render_grid;
use crossfill::solver::{solve, SolveOptions, SolveOutcome, Solver};
use crossfill::structure::{Direction, Slot, Structure};
use crossfill::word_list::WordList;
use crossfill::Assignment;

/// Load a grid and a word list from `tests/fixtures`
fn load_fixture(structure: &str, words: &str) -> (Structure, WordList) {
    let structure = Structure::load_from_path(format!("tests/fixtures/{structure}"))
        .expect("Failed to read test structure");
    let words = WordList::load_from_path(format!("tests/fixtures/{words}"))
        .expect("Failed to read test word list");
    (structure, words)
}

fn solve_with(structure: &Structure, words: &WordList, options: SolveOptions) -> SolveOutcome {
    Solver::new(structure, words.words.iter().cloned())
        .with_options(options)
        .run()
        .outcome
}

fn assert_valid_fill(structure: &Structure, words: &WordList, assignment: &Assignment) {
    assert!(assignment.is_complete(structure), "every slot must have a word");
    assert!(assignment.is_consistent(structure), "crossings must agree");
    for (_, word) in assignment {
        assert!(words.words.contains(word), "{word} is not in the word list");
    }
}

#[cfg(test)]
mod fixtures {
    use super::*;

    #[test]
    fn test_structure0_has_unique_fill() {
        let (structure, words) = load_fixture("structure0.txt", "words0.txt");
        assert_eq!(structure.slots().len(), 4);

        let solution = solve(&structure, words.words.iter().cloned()).expect("structure0 is solvable");
        assert_valid_fill(&structure, &words, &solution);
        assert_eq!(render_grid(&structure, &solution), "█SIX█\n█E██F\n█V██I\n█E██V\n█NINE\n");
    }

    #[test]
    fn test_structure1_frame() {
        let (structure, words) = load_fixture("structure1.txt", "words1.txt");
        assert_eq!(structure.slots().len(), 4);

        let SolveOutcome::Solved(solution) = solve_with(&structure, &words, SolveOptions::default()) else {
            panic!("structure1 should be solvable");
        };
        assert_valid_fill(&structure, &words, &solution);
    }

    #[test]
    fn test_forward_checking_on_fixtures() {
        let options = SolveOptions { forward_checking: true, ..SolveOptions::default() };

        let (structure, words) = load_fixture("structure0.txt", "words0.txt");
        let SolveOutcome::Solved(solution) = solve_with(&structure, &words, options.clone()) else {
            panic!("structure0 should be solvable with forward checking");
        };
        assert_eq!(render_grid(&structure, &solution), "█SIX█\n█E██F\n█V██I\n█E██V\n█NINE\n");

        let (structure, words) = load_fixture("structure1.txt", "words1.txt");
        let SolveOutcome::Solved(solution) = solve_with(&structure, &words, options) else {
            panic!("structure1 should be solvable with forward checking");
        };
        assert_valid_fill(&structure, &words, &solution);
    }

    #[test]
    fn test_wrong_word_list_is_unsatisfiable() {
        let (structure, words) = load_fixture("structure1.txt", "words0.txt");
        assert_eq!(solve_with(&structure, &words, SolveOptions::default()), SolveOutcome::Unsatisfiable);
    }

    #[test]
    fn test_solve_is_reproducible() {
        let (structure, words) = load_fixture("structure1.txt", "words1.txt");
        let first = solve(&structure, words.words.iter().cloned());
        let second = solve(&structure, words.words.iter().cloned());
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod loading_errors {
    use super::*;

    #[test]
    fn test_missing_structure_file() {
        let err = Structure::load_from_path("tests/fixtures/does_not_exist.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.display_detailed().contains("E001"));
    }

    #[test]
    fn test_blank_word_list() {
        let err = WordList::load_from_path("tests/fixtures/empty_words.txt").unwrap_err();
        assert!(matches!(err, LoadError::EmptyWordList));
    }
}

#[cfg(test)]
mod small_grids {
    use super::*;

    #[test]
    fn test_single_slot_no_neighbors() {
        let structure: Structure = "___".parse().unwrap();
        let solution = solve(&structure, ["dog", "cat"]).unwrap();
        let slot = Slot::new(0, 0, Direction::Across, 3);
        assert_eq!(solution.get(&slot).map(|w| &**w), Some("cat"));
    }

    #[test]
    fn test_no_word_fits_the_slot() {
        let structure: Structure = "____".parse().unwrap();
        assert_eq!(solve(&structure, ["cat", "dog", "horse", "mouse"]), None);
    }

    #[test]
    fn test_crossing_pair() {
        let structure: Structure = "___\n##_\n##_".parse().unwrap();
        let across = Slot::new(0, 0, Direction::Across, 3);
        let down = Slot::new(0, 2, Direction::Down, 3);
        let (i, j) = structure.overlap(&across, &down).unwrap();

        let solution = solve(&structure, ["cat", "car", "rat"]).unwrap();
        let a = solution.get(&across).unwrap();
        let b = solution.get(&down).unwrap();
        assert_eq!(a.chars().nth(i), b.chars().nth(j));
        assert_eq!((&**a, &**b), ("car", "rat"));
    }

    #[test]
    fn test_grid_without_slots() {
        let structure: Structure = "#_#\n_#_".parse().unwrap();
        let solution = solve(&structure, ["cat"]).unwrap();
        assert!(solution.is_empty());
        assert_eq!(render_grid(&structure, &solution), "█ █\n █ \n");
    }
}
