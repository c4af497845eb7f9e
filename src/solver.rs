//! The solver: fills every slot of a [`Structure`] with a word from a word list.
//!
//! A solve runs three stages over a domain store that it owns exclusively:
//!
//! 1. node consistency drops words of the wrong length from each slot,
//! 2. AC-3 removes words with no support in a crossing slot, and may prove the
//!    puzzle unsatisfiable outright,
//! 3. backtracking search picks slots by minimum remaining values (ties broken by
//!    degree, then slot order) and tries words least-constraining first.
//!
//! Search never touches the post-AC-3 domains unless forward checking is enabled in
//! [`SolveOptions`], in which case each branch works on its own pruned copy.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use crossfill::solver;
//! use crossfill::structure::{Direction, Slot, Structure};
//!
//! let structure: Structure = "___\n##_\n##_".parse()?;
//! let solution = solver::solve(&structure, ["CAT", "CAR", "RAT"]).expect("solvable");
//!
//! let across = Slot::new(0, 0, Direction::Across, 3);
//! let down = Slot::new(0, 2, Direction::Down, 3);
//! assert_eq!(solution.get(&across).map(|w| &**w), Some("CAR"));
//! assert_eq!(solution.get(&down).map(|w| &**w), Some("RAT"));
//! # Ok::<(), crossfill::errors::LoadError>(())
//! ```
//!
//! ## Options and Statistics
//!
//! ```
//! use std::time::Duration;
//! use crossfill::solver::{SolveOptions, SolveOutcome, Solver};
//! use crossfill::structure::Structure;
//!
//! let structure: Structure = "____".parse()?;
//! let options = SolveOptions {
//!     forward_checking: true,
//!     time_limit: Some(Duration::from_secs(5)),
//! };
//! let report = Solver::new(&structure, ["ABC", "ABCDE"]).with_options(options).run();
//!
//! match report.outcome {
//!     SolveOutcome::Solved(assignment) => println!("filled {} slots", assignment.len()),
//!     SolveOutcome::Unsatisfiable => println!("no solution"),
//!     SolveOutcome::TimedOut { elapsed } => println!("gave up after {elapsed:?}"),
//! }
//! println!("{} search nodes", report.stats.nodes);
//! # Ok::<(), crossfill::errors::LoadError>(())
//! ```

use crate::assignment::Assignment;
use crate::domain::Domains;
use crate::structure::Structure;
use crate::word_list::Word;
use instant::Instant;
use log::{debug, info, trace};
use std::time::Duration;

/// Knobs for a single solve. The defaults give the plain baseline search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Re-establish arc consistency on a copy of the domains after every assignment.
    pub forward_checking: bool,
    /// Give up once the search has run this long.
    pub time_limit: Option<Duration>,
}

/// How a solve ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every slot has a word and all constraints hold.
    Solved(Assignment),

    /// Propagation emptied a domain, or the search space was exhausted.
    Unsatisfiable,

    /// The time limit expired before the search finished. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Counters collected during a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Words dropped because their length didn't match the slot.
    pub removed_by_node_consistency: usize,
    /// Calls to `revise` on crossing slots.
    pub revisions: usize,
    /// Words dropped by arc consistency (including forward checking).
    pub removed_by_propagation: usize,
    /// Recursive search steps.
    pub nodes: usize,
    /// Values tried that did not lead to a solution.
    pub backtracks: usize,
}

/// Outcome plus statistics of one solve.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub outcome: SolveOutcome,
    pub stats: SolveStats,
}

impl SolveReport {
    /// The solution, if one was found.
    #[must_use]
    pub fn into_assignment(self) -> Option<Assignment> {
        match self.outcome {
            SolveOutcome::Solved(assignment) => Some(assignment),
            SolveOutcome::Unsatisfiable | SolveOutcome::TimedOut { .. } => None,
        }
    }
}

/// Simple helper to enforce an optional wall-clock time limit.
///
/// Usage:
/// ```ignore
///  let budget = TimeBudget::new(Some(Duration::from_secs(30)));
///  while !budget.expired() {
///    // do some work
///  }
/// ```
#[derive(Debug)]
struct TimeBudget {
    start: Instant,           // when the budget began
    limit: Option<Duration>,  // `None` never expires
}

impl TimeBudget {
    fn new(limit: Option<Duration>) -> Self {
        Self { start: Instant::now(), limit }
    }

    /// How long this budget has been running.
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns true if the allowed time has fully elapsed.
    fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }
}

/// Marker for a search unwound by the time budget.
#[derive(Debug)]
struct TimedOut;

macro_rules! timed_stop {
    ($budget:expr) => {
        if $budget.expired() {
            return Err(TimedOut);
        }
    };
}

/// One solve: the structure being filled and the domain store this solve owns.
///
/// The stages are exposed individually (`enforce_node_consistency`, `ac3`, `backtrack`,
/// ...) so they can be driven and inspected step by step; [`Solver::run`] chains them.
#[derive(Debug)]
pub struct Solver<'a> {
    pub(crate) structure: &'a Structure,
    pub(crate) domains: Domains,
    pub(crate) stats: SolveStats,
    options: SolveOptions,
    budget: TimeBudget,
}

impl<'a> Solver<'a> {
    /// Set up a solve where every slot starts with the full word list.
    pub fn new<I, W>(structure: &'a Structure, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<Word>,
    {
        let words: Vec<Word> = words.into_iter().map(Into::into).collect();
        Solver {
            structure,
            domains: Domains::new(structure.slots(), &words),
            stats: SolveStats::default(),
            options: SolveOptions::default(),
            budget: TimeBudget::new(None),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.budget = TimeBudget::new(options.time_limit);
        self.options = options;
        self
    }

    /// The current domain store.
    #[must_use]
    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    #[must_use]
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Whether `assignment` satisfies every constraint of the structure.
    #[must_use]
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        assignment.is_consistent(self.structure)
    }

    /// Run node consistency, AC-3 and backtracking search, in that order.
    ///
    /// If AC-3 empties a domain the puzzle is reported unsatisfiable without searching.
    /// A structure with no slots is solved by the empty assignment.
    pub fn run(mut self) -> SolveReport {
        self.budget = TimeBudget::new(self.options.time_limit);
        info!(
            "Solving {} slots with {} candidate values",
            self.structure.slots().len(),
            self.domains.total_size()
        );

        self.enforce_node_consistency();

        if !self.ac3(None) {
            info!("Arc consistency left a slot with no candidates; no solution");
            return self.report(SolveOutcome::Unsatisfiable);
        }
        debug!("{} candidate values remain after propagation", self.domains.total_size());

        let outcome = match self.search(&Assignment::new()) {
            Ok(Some(assignment)) => SolveOutcome::Solved(assignment),
            Ok(None) => SolveOutcome::Unsatisfiable,
            Err(TimedOut) => SolveOutcome::TimedOut { elapsed: self.budget.elapsed() },
        };
        self.report(outcome)
    }

    /// Extend `assignment` to a complete, consistent assignment, or return `None` if
    /// no extension exists (or the time limit runs out).
    pub fn backtrack(&mut self, assignment: &Assignment) -> Option<Assignment> {
        self.search(assignment).ok().flatten()
    }

    fn report(self, outcome: SolveOutcome) -> SolveReport {
        info!(
            "Finished after {} search nodes and {} backtracks ({} revisions)",
            self.stats.nodes, self.stats.backtracks, self.stats.revisions
        );
        SolveReport { outcome, stats: self.stats }
    }

    /// Depth-first search over assignments.
    ///
    /// Picks the next slot with [`Solver::select_unassigned_variable`], tries its words in
    /// [`Solver::order_domain_values`] order, and recurses on every consistent extension.
    /// The first complete assignment found is returned immediately.
    ///
    /// # Errors
    /// Returns `Err(TimedOut)` as soon as the time budget has expired.
    fn search(&mut self, assignment: &Assignment) -> Result<Option<Assignment>, TimedOut> {
        timed_stop!(self.budget);
        self.stats.nodes += 1;

        let Some(var) = self.select_unassigned_variable(assignment) else {
            debug_assert!(assignment.is_complete(self.structure));
            return Ok(Some(assignment.clone()));
        };

        for value in self.order_domain_values(&var, assignment) {
            let trial = assignment.with(var, Word::clone(&value));
            if !self.consistent(&trial) {
                continue;
            }

            // Forward checking prunes a copy; the parent's domains come back afterwards.
            let saved = if self.options.forward_checking {
                let saved = self.domains.clone();
                if !self.infer(&var, &value, &trial) {
                    trace!("{var} = {value} wipes out a neighbor");
                    self.domains = saved;
                    self.stats.backtracks += 1;
                    continue;
                }
                Some(saved)
            } else {
                None
            };

            let result = self.search(&trial);
            if let Some(saved) = saved {
                self.domains = saved;
            }
            if let Some(solution) = result? {
                return Ok(Some(solution));
            }
            self.stats.backtracks += 1;
        }

        trace!("dead end at {var} with {} slots assigned", assignment.len());
        Ok(None)
    }
}

/// Fill `structure` from `words`.
///
/// Returns a complete assignment in which every word fits its slot, crossing slots agree,
/// and no word is used twice; or `None` if no such assignment exists.
pub fn solve<I, W>(structure: &Structure, words: I) -> Option<Assignment>
where
    I: IntoIterator<Item = W>,
    W: Into<Word>,
{
    Solver::new(structure, words).run().into_assignment()
}
