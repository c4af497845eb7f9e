//! `structure` — the immutable grid model the solver works against.
//!
//! A grid description is plain text, one line per row:
//! - `_` marks a fillable cell,
//! - any other character marks a blocked cell,
//! - rows shorter than the longest row are padded with blocked cells.
//!
//! From the fillable cells we derive the slots (maximal runs of at least two fillable
//! cells, across and down), the neighbor relation between slots that share a cell, and
//! an overlap table giving, for every crossing pair, the index of the shared cell
//! within each slot. All of it is computed once in [`Structure::new`] and never changes,
//! so a `Structure` can be borrowed by any number of sequential solves.

use crate::errors::LoadError;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Character marking a fillable cell in a grid description.
pub const FILLABLE: char = '_';

/// Zero-indexed `(row, col)` coordinates of a grid cell.
pub type Cell = (usize, usize);

/// Direction a slot runs in. `Across` sorts before `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// One run of fillable cells that takes a single word.
///
/// Two slots with the same start, direction and length are the same slot. The derived
/// ordering (row, column, direction, length) is the fixed total order used for every
/// deterministic tie-break in the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Slot {
    #[must_use]
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Slot { row, col, direction, length }
    }

    /// The cell holding the `k`-th letter of this slot's word.
    #[must_use]
    pub fn cell(&self, k: usize) -> Cell {
        debug_assert!(k < self.length, "index {k} out of bounds for slot {}", self);
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }

    /// Cells covered by this slot, in word order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let slot = *self;
        (0..slot.length).map(move |k| slot.cell(k))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {} : {}", self.row, self.col, self.direction, self.length)
    }
}

/// Grid dimensions, fillable cells, slots, and the constraint graph between slots.
#[derive(Debug, Clone)]
pub struct Structure {
    width: usize,
    height: usize,
    /// Row-major fillable flags.
    cells: Vec<bool>,
    /// All slots, sorted.
    slots: Vec<Slot>,
    /// Every slot has an entry, possibly empty.
    neighbors: BTreeMap<Slot, BTreeSet<Slot>>,
    /// `(a, b) -> (index in a, index in b)`; both orientations are stored.
    overlaps: HashMap<(Slot, Slot), (usize, usize)>,
}

impl Structure {
    /// Build a structure from a row-major matrix of fillable flags.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DimensionMismatch`] if `cells.len() != width * height`, including
    /// when `width * height` does not fit in a `usize`.
    pub fn new(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, LoadError> {
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(LoadError::DimensionMismatch { width, height, cells: cells.len() });
        }

        let mut structure = Structure {
            width,
            height,
            cells,
            slots: Vec::new(),
            neighbors: BTreeMap::new(),
            overlaps: HashMap::new(),
        };
        structure.slots = structure.find_slots();
        structure.link_slots();

        Ok(structure)
    }

    /// Native-only convenience method: read a grid description from a file and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file can't be read, or any error from parsing.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, LoadError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| LoadError::io(path_ref, e))?;
        data.parse()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at `(row, col)` takes a letter. Out-of-range cells are blocked.
    #[must_use]
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// All slots, in slot order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slots sharing a cell with `slot`, in slot order.
    pub fn neighbors(&self, slot: &Slot) -> impl Iterator<Item = Slot> + '_ {
        self.neighbors.get(slot).into_iter().flatten().copied()
    }

    /// Number of neighbors of `slot`.
    #[must_use]
    pub fn degree(&self, slot: &Slot) -> usize {
        self.neighbors.get(slot).map_or(0, BTreeSet::len)
    }

    /// Position of the shared cell within `a` and within `b`, or `None` if they don't cross.
    #[must_use]
    pub fn overlap(&self, a: &Slot, b: &Slot) -> Option<(usize, usize)> {
        self.overlaps.get(&(*a, *b)).copied()
    }

    /// Every ordered pair of crossing slots, sorted by slot order.
    #[must_use]
    pub fn arcs(&self) -> Vec<(Slot, Slot)> {
        self.neighbors
            .iter()
            .flat_map(|(&x, ys)| ys.iter().map(move |&y| (x, y)))
            .collect()
    }

    /// Scan rows and columns for maximal runs of two or more fillable cells.
    fn find_slots(&self) -> Vec<Slot> {
        let mut slots = Vec::new();

        for row in 0..self.height {
            for col in 0..self.width {
                if !self.is_fillable(row, col) {
                    continue;
                }

                // A run starts here if the previous cell in that direction is blocked.
                if row == 0 || !self.is_fillable(row - 1, col) {
                    let length = (row..self.height).take_while(|&r| self.is_fillable(r, col)).count();
                    if length > 1 {
                        slots.push(Slot::new(row, col, Direction::Down, length));
                    }
                }
                if col == 0 || !self.is_fillable(row, col - 1) {
                    let length = (col..self.width).take_while(|&c| self.is_fillable(row, c)).count();
                    if length > 1 {
                        slots.push(Slot::new(row, col, Direction::Across, length));
                    }
                }
            }
        }

        slots.sort_unstable();
        slots
    }

    /// Fill in `neighbors` and `overlaps` from `slots`.
    fn link_slots(&mut self) {
        // A cell belongs to at most one across and one down slot.
        let mut covering: HashMap<Cell, Vec<(Slot, usize)>> = HashMap::new();
        for &slot in &self.slots {
            self.neighbors.insert(slot, BTreeSet::new());
            for (k, cell) in slot.cells().enumerate() {
                covering.entry(cell).or_default().push((slot, k));
            }
        }

        for owners in covering.values() {
            for &(a, ia) in owners {
                for &(b, ib) in owners {
                    if a == b {
                        continue;
                    }
                    self.overlaps.insert((a, b), (ia, ib));
                    self.neighbors.entry(a).or_default().insert(b);
                }
            }
        }

        debug_assert!(
            self.overlaps.iter().all(|(&(a, b), &(ia, ib))| self.overlaps.get(&(b, a)) == Some(&(ib, ia))),
            "overlap table must be symmetric"
        );
    }
}

impl FromStr for Structure {
    type Err = LoadError;

    /// Parse a grid description (see the module docs for the format).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s.lines().map(|line| line.chars().collect()).collect();
        if rows.is_empty() {
            return Err(LoadError::EmptyStructure);
        }

        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut cells = Vec::with_capacity(width * height);
        for row in &rows {
            for col in 0..width {
                cells.push(row.get(col) == Some(&FILLABLE));
            }
        }

        Structure::new(width, height, cells)
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let c = if self.is_fillable(row, col) { FILLABLE } else { '#' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
