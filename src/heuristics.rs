//! Search ordering: which slot to fill next, and which of its words to try first.

use crate::assignment::Assignment;
use crate::domain::letter_at;
use crate::solver::Solver;
use crate::structure::Slot;
use crate::word_list::Word;
use std::cmp::Reverse;

impl Solver<'_> {
    /// The unassigned slot with the fewest remaining words (minimum remaining values).
    ///
    /// Ties go to the slot with the most neighbors, then to the first slot in slot order.
    /// Returns `None` once every slot is assigned.
    #[must_use]
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<Slot> {
        self.structure
            .slots()
            .iter()
            .filter(|slot| !assignment.contains(slot))
            .min_by_key(|&slot| (self.domains.size(slot), Reverse(self.structure.degree(slot)), *slot))
            .copied()
    }

    /// The words of `var`, least constraining first.
    ///
    /// A word's cost is the number of words it would rule out across the unassigned
    /// neighbors of `var`: those whose letter at the crossing differs. Equal costs keep
    /// lexicographic order.
    #[must_use]
    pub fn order_domain_values(&self, var: &Slot, assignment: &Assignment) -> Vec<Word> {
        // (index in `var`, letter counts in the neighbor at the crossing, neighbor domain size)
        let crossings: Vec<_> = self
            .structure
            .neighbors(var)
            .filter(|n| !assignment.contains(n))
            .filter_map(|n| {
                let (i, j) = self.structure.overlap(var, &n)?;
                Some((i, self.domains.letter_counts(&n, j), self.domains.size(&n)))
            })
            .collect();

        let mut ranked: Vec<(usize, Word)> = self
            .domains
            .words(var)
            .map(|word| {
                let ruled_out: usize = crossings
                    .iter()
                    .map(|(i, counts, size)| {
                        let agreeing = letter_at(word, *i).and_then(|c| counts.get(&c)).copied().unwrap_or(0);
                        size - agreeing
                    })
                    .sum();
                (ruled_out, Word::clone(word))
            })
            .collect();

        ranked.sort();
        ranked.into_iter().map(|(_, word)| word).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::assignment::Assignment;
    use crate::solver::Solver;
    use crate::structure::{Direction, Slot, Structure};
    use crate::word_list::Word;

    fn structure(grid: &str) -> Structure {
        grid.parse().unwrap()
    }

    fn names(words: &[Word]) -> Vec<&str> {
        words.iter().map(|w| &**w).collect()
    }

    #[test]
    fn test_select_prefers_smallest_domain() {
        // 4-letter across slot and 3-letter down slot.
        let s = structure("____\n_###\n_###");
        let across = Slot::new(0, 0, Direction::Across, 4);
        let down = Slot::new(0, 0, Direction::Down, 3);
        let mut solver = Solver::new(&s, ["ABLE", "ACID", "AREA", "ANT", "ART"]);
        solver.enforce_node_consistency();

        let chosen = solver.select_unassigned_variable(&Assignment::new()).unwrap();
        assert_eq!(chosen, down);
        for slot in s.slots() {
            assert!(solver.domains().size(&chosen) <= solver.domains().size(slot));
        }

        let partial = Assignment::new().with(down, Word::from("ANT"));
        assert_eq!(solver.select_unassigned_variable(&partial), Some(across));

        let full = partial.with(across, Word::from("ABLE"));
        assert_eq!(solver.select_unassigned_variable(&full), None);
    }

    #[test]
    fn test_select_breaks_ties_by_degree() {
        // An isolated slot at the top, and a crossing pair below it:
        //   ___
        //   ###
        //   ___
        //   _##
        //   _##
        let s = structure("___\n###\n___\n_##\n_##");
        let isolated = Slot::new(0, 0, Direction::Across, 3);
        let crossing = Slot::new(2, 0, Direction::Across, 3);
        let solver = Solver::new(&s, ["CAT", "COT", "TOT"]);

        assert_eq!(s.degree(&isolated), 0);
        assert_eq!(s.degree(&crossing), 1);
        // All domains are the same size; the isolated slot sorts first but has degree 0.
        assert_eq!(solver.select_unassigned_variable(&Assignment::new()), Some(crossing));
    }

    #[test]
    fn test_select_breaks_remaining_ties_by_slot_order() {
        let s = structure("___\n###\n___");
        let solver = Solver::new(&s, ["CAT", "DOG"]);
        assert_eq!(
            solver.select_unassigned_variable(&Assignment::new()),
            Some(Slot::new(0, 0, Direction::Across, 3))
        );
    }

    #[test]
    fn test_order_values_least_constraining_first() {
        // `across` ends where `down` begins.
        let s = structure("___\n##_\n##_");
        let across = Slot::new(0, 0, Direction::Across, 3);
        let solver = Solver::new(&s, ["CAT", "CAR", "RAT", "TAR", "TOE"]);

        // Down words start with C (2), R (1), T (2). CAT/RAT end in T and rule out 3;
        // CAR/TAR end in R and rule out 4; TOE ends in E and rules out all 5.
        let ordered = solver.order_domain_values(&across, &Assignment::new());
        assert_eq!(names(&ordered), vec!["CAT", "RAT", "CAR", "TAR", "TOE"]);
    }

    #[test]
    fn test_order_values_ignores_assigned_neighbors() {
        let s = structure("___\n##_\n##_");
        let across = Slot::new(0, 0, Direction::Across, 3);
        let down = Slot::new(0, 2, Direction::Down, 3);
        let solver = Solver::new(&s, ["TOE", "CAT", "RAT"]);

        let partial = Assignment::new().with(down, Word::from("TOE"));
        let ordered = solver.order_domain_values(&across, &partial);
        assert_eq!(names(&ordered), vec!["CAT", "RAT", "TOE"]);
    }

    #[test]
    fn test_order_values_without_neighbors_is_lexicographic() {
        let s = structure("___");
        let solver = Solver::new(&s, ["DOG", "CAT", "EMU"]);
        let ordered = solver.order_domain_values(&s.slots()[0], &Assignment::new());
        assert_eq!(names(&ordered), vec!["CAT", "DOG", "EMU"]);
    }
}
