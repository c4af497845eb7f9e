//! Propagation: node consistency, AC-3 arc consistency, and the forward-checking step
//! built on top of AC-3.

use crate::assignment::Assignment;
use crate::domain::{letter_at, word_len};
use crate::solver::Solver;
use crate::structure::Slot;
use crate::word_list::Word;
use log::debug;
use std::collections::VecDeque;

impl Solver<'_> {
    /// Remove from every slot's domain the words whose length differs from the slot's.
    ///
    /// Never fails: a slot left without words is detected by AC-3 or by the search.
    pub fn enforce_node_consistency(&mut self) {
        let structure = self.structure;
        for slot in structure.slots() {
            let removed = self.domains.retain(slot, |word| word_len(word) == slot.length);
            self.stats.removed_by_node_consistency += removed;
        }
        debug!(
            "Node consistency removed {} values",
            self.stats.removed_by_node_consistency
        );
    }

    /// Make `x` arc consistent with `y`: drop every word of `x` whose letter at the
    /// crossing matches no word of `y`.
    ///
    /// Returns `true` if the domain of `x` changed. Slots that don't cross never change.
    pub fn revise(&mut self, x: &Slot, y: &Slot) -> bool {
        let Some((ix, iy)) = self.structure.overlap(x, y) else {
            return false;
        };
        self.stats.revisions += 1;

        // Letters `y` can still supply at the crossing, taken before `x` is touched.
        let supported = self.domains.letters_at(y, iy);
        let removed = self
            .domains
            .retain(x, |word| letter_at(word, ix).is_some_and(|c| supported.contains(&c)));
        self.stats.removed_by_propagation += removed;

        removed > 0
    }

    /// Enforce arc consistency with a FIFO work queue (AC-3).
    ///
    /// The queue starts with `arcs`, or with every ordered pair of crossing slots when
    /// `arcs` is `None`. Whenever `revise(x, y)` shrinks `x`, the arcs `(n, x)` for every
    /// other neighbor `n` of `x` are queued again. The queue is always drained.
    ///
    /// Returns `false` as soon as a domain becomes empty, `true` otherwise.
    pub fn ac3(&mut self, arcs: Option<Vec<(Slot, Slot)>>) -> bool {
        let structure = self.structure;
        let mut queue: VecDeque<(Slot, Slot)> = arcs.unwrap_or_else(|| structure.arcs()).into();

        while let Some((x, y)) = queue.pop_front() {
            if !self.revise(&x, &y) {
                continue;
            }
            if self.domains.is_empty(&x) {
                debug!("Domain of {x} emptied while revising against {y}");
                return false;
            }
            queue.extend(structure.neighbors(&x).filter(|&n| n != y).map(|n| (n, x)));
        }

        true
    }

    /// Forward-checking step after a trial assignment `var := value`: pin `var` to
    /// `value`, then propagate to its unassigned neighbors.
    ///
    /// Returns `false` if some domain is wiped out, in which case the domains are left
    /// partially pruned and the caller must restore its copy.
    pub(crate) fn infer(&mut self, var: &Slot, value: &Word, assignment: &Assignment) -> bool {
        self.domains.restrict_to(var, value);
        let arcs = self
            .structure
            .neighbors(var)
            .filter(|n| !assignment.contains(n))
            .map(|n| (n, *var))
            .collect();
        self.ac3(Some(arcs))
    }
}
