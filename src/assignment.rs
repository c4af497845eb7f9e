//! Assignments of words to slots, and the check that an assignment breaks no constraint.

use crate::domain::{letter_at, word_len};
use crate::structure::{Slot, Structure};
use crate::word_list::Word;
use std::collections::{BTreeMap, HashSet};

/// A (possibly partial) mapping from slots to chosen words, in slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    words: BTreeMap<Slot, Word>,
}

impl Assignment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, slot: &Slot) -> Option<&Word> {
        self.words.get(slot)
    }

    #[must_use]
    pub fn contains(&self, slot: &Slot) -> bool {
        self.words.contains_key(slot)
    }

    /// Assign `word` to `slot`, returning the previous word if there was one.
    pub fn insert(&mut self, slot: Slot, word: Word) -> Option<Word> {
        self.words.insert(slot, word)
    }

    /// A copy of this assignment extended with `slot := word`.
    #[must_use]
    pub fn with(&self, slot: Slot, word: Word) -> Self {
        let mut extended = self.clone();
        extended.insert(slot, word);
        extended
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Slot, &Word)> + '_ {
        self.words.iter()
    }

    /// True when every slot of `structure` has a word.
    #[must_use]
    pub fn is_complete(&self, structure: &Structure) -> bool {
        structure.slots().iter().all(|slot| self.contains(slot))
    }

    /// True when no constraint is violated:
    /// - no word is used twice,
    /// - every word fits its slot's length,
    /// - every pair of assigned crossing slots agrees on the shared letter.
    #[must_use]
    pub fn is_consistent(&self, structure: &Structure) -> bool {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.words.len());
        if !self.words.values().all(|word| seen.insert(word)) {
            return false;
        }

        if self.words.iter().any(|(slot, word)| word_len(word) != slot.length) {
            return false;
        }

        self.words.iter().all(|(slot, word)| {
            structure.neighbors(slot).all(|other| {
                let (Some(other_word), Some((i, j))) = (self.words.get(&other), structure.overlap(slot, &other)) else {
                    return true;
                };
                letter_at(word, i) == letter_at(other_word, j)
            })
        })
    }
}

impl FromIterator<(Slot, Word)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Slot, Word)>>(iter: T) -> Self {
        Assignment { words: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = (&'a Slot, &'a Word);
    type IntoIter = std::collections::btree_map::Iter<'a, Slot, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
