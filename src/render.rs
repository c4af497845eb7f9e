//! Turn an assignment back into a grid of letters.

use crate::assignment::Assignment;
use crate::errors::LoadError;
use crate::structure::Structure;
use std::path::Path;

/// Character printed for blocked cells.
pub const BLOCKED: char = '█';

/// Letters placed in each cell by `assignment`, row-major. Cells no assigned slot
/// covers are `None`.
#[must_use]
pub fn letter_grid(structure: &Structure, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; structure.width()]; structure.height()];
    for (slot, word) in assignment {
        for ((row, col), letter) in slot.cells().zip(word.chars()) {
            if row < structure.height() && col < structure.width() {
                letters[row][col] = Some(letter);
            }
        }
    }
    letters
}

/// Render the grid as text: one line per row, blocked cells as [`BLOCKED`], empty
/// fillable cells as spaces.
#[must_use]
pub fn render_grid(structure: &Structure, assignment: &Assignment) -> String {
    let letters = letter_grid(structure, assignment);
    let mut out = String::with_capacity((structure.width() + 1) * structure.height());
    for (row, cells) in letters.iter().enumerate() {
        for (col, letter) in cells.iter().enumerate() {
            if structure.is_fillable(row, col) {
                out.push(letter.unwrap_or(' '));
            } else {
                out.push(BLOCKED);
            }
        }
        out.push('\n');
    }
    out
}

/// Write [`render_grid`] output to `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file can't be written.
pub fn save_grid<P: AsRef<Path>>(structure: &Structure, assignment: &Assignment, path: P) -> Result<(), LoadError> {
    let path_ref = path.as_ref();
    std::fs::write(path_ref, render_grid(structure, assignment)).map_err(|e| LoadError::io(path_ref, e))
}
