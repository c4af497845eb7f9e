//! The domain store: for each slot, the words still considered possible.
//!
//! Domains are `BTreeSet`s so that iteration is lexicographic; every pass over a domain
//! (propagation, value ordering, search) is therefore reproducible.

use crate::structure::Slot;
use crate::word_list::Word;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Number of letters in `word`.
#[must_use]
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// The letter at position `index` of `word`, if any.
#[must_use]
pub fn letter_at(word: &str, index: usize) -> Option<char> {
    word.chars().nth(index)
}

/// Mutable mapping from slot to candidate words, owned by a single solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domains {
    by_slot: BTreeMap<Slot, BTreeSet<Word>>,
}

impl Domains {
    /// Give every slot the full word list.
    #[must_use]
    pub fn new(slots: &[Slot], words: &[Word]) -> Self {
        let all: BTreeSet<Word> = words.iter().cloned().collect();
        Domains {
            by_slot: slots.iter().map(|&slot| (slot, all.clone())).collect(),
        }
    }

    /// Words of `slot` in lexicographic order. Unknown slots have no words.
    pub fn words(&self, slot: &Slot) -> impl Iterator<Item = &Word> + '_ {
        self.by_slot.get(slot).into_iter().flatten()
    }

    #[must_use]
    pub fn contains(&self, slot: &Slot, word: &str) -> bool {
        self.by_slot.get(slot).is_some_and(|d| d.contains(word))
    }

    /// Current domain size of `slot`.
    #[must_use]
    pub fn size(&self, slot: &Slot) -> usize {
        self.by_slot.get(slot).map_or(0, BTreeSet::len)
    }

    #[must_use]
    pub fn is_empty(&self, slot: &Slot) -> bool {
        self.size(slot) == 0
    }

    /// Sum of all domain sizes.
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.by_slot.values().map(BTreeSet::len).sum()
    }

    /// Distinct letters found at `index` across the words of `slot`.
    #[must_use]
    pub fn letters_at(&self, slot: &Slot, index: usize) -> HashSet<char> {
        self.words(slot).filter_map(|w| letter_at(w, index)).collect()
    }

    /// How many words of `slot` carry each letter at `index`.
    #[must_use]
    pub fn letter_counts(&self, slot: &Slot, index: usize) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for c in self.words(slot).filter_map(|w| letter_at(w, index)) {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }

    /// Keep only the words of `slot` for which `keep` holds. Returns how many were removed.
    pub fn retain<F>(&mut self, slot: &Slot, mut keep: F) -> usize
    where
        F: FnMut(&Word) -> bool,
    {
        let Some(domain) = self.by_slot.get_mut(slot) else {
            return 0;
        };
        let before = domain.len();
        domain.retain(|w| keep(w));
        before - domain.len()
    }

    /// Reduce the domain of `slot` to the single `word`.
    pub fn restrict_to(&mut self, slot: &Slot, word: &Word) {
        if let Some(domain) = self.by_slot.get_mut(slot) {
            domain.clear();
            domain.insert(Word::clone(word));
        }
    }
}
