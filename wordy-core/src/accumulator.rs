//! Sliding-window n-gram accumulator
//!
//! The accumulator keeps `group_size` windows in a ring, each started one
//! token after the previous one. Every incoming token is appended to all
//! started windows; a window that reaches `group_size` tokens is joined into
//! a grouping, counted, and cleared so its slot can be restarted. One fresh
//! window is started per token at the rotating cursor, so every contiguous
//! run of `group_size` tokens is counted exactly once.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::report::{Grouping, Report};

/// In-progress window; groupings of up to four words stay inline.
type Window = SmallVec<[String; 4]>;

/// Counts contiguous word groupings of a fixed size
#[derive(Debug, Clone)]
pub struct Accumulator {
    group_size: usize,
    /// Ring of in-progress windows, one per slot
    windows: Vec<Window>,
    /// Slot receiving the next fresh window
    next_slot: usize,
    /// Grouping text -> index into `entries`
    index: HashMap<String, usize>,
    /// Groupings in first-completion order
    entries: Vec<Grouping>,
    completed: u64,
}

impl Accumulator {
    /// Create an accumulator for groupings of `group_size` words.
    ///
    /// A size of zero is accepted but nothing is ever counted.
    pub fn new(group_size: usize) -> Self {
        Self {
            group_size,
            windows: vec![Window::new(); group_size],
            next_slot: 0,
            index: HashMap::new(),
            entries: Vec::new(),
            completed: 0,
        }
    }

    /// Add the next token of the stream.
    ///
    /// Tokens are taken as given: callers lowercase them and skip empty
    /// ones.
    pub fn add(&mut self, token: &str) {
        if self.group_size == 0 {
            return;
        }

        // Extend started windows, then count and clear the ones that are full.
        for slot in 0..self.windows.len() {
            if !self.windows[slot].is_empty() {
                self.windows[slot].push(token.to_owned());
            }
            if self.windows[slot].len() == self.group_size {
                self.complete(slot);
            }
        }

        // Start this token's own window.
        self.windows[self.next_slot].push(token.to_owned());
        if self.windows[self.next_slot].len() == self.group_size {
            // Only single-word groupings are full right after starting.
            self.complete(self.next_slot);
        }

        log::trace!(
            "added '{}' on window {}: {:?}",
            token,
            self.next_slot,
            self.windows
        );

        self.next_slot = (self.next_slot + 1) % self.group_size;
    }

    /// Join the window at `slot` into a grouping, count it and clear the slot
    fn complete(&mut self, slot: usize) {
        let text = self.windows[slot].join(" ");
        self.windows[slot].clear();
        self.completed += 1;

        match self.index.get(&text) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(text.clone(), self.entries.len());
                self.entries.push(Grouping { text, count: 1 });
            }
        }
    }

    /// All groupings, most frequent first.
    ///
    /// Equal counts keep the order in which the groupings were first seen.
    pub fn report(&self) -> Report {
        Report::from_entries(self.entries.clone())
    }

    /// Number of words per grouping
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Number of distinct groupings counted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no grouping has been completed yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total groupings counted, duplicates included
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Count recorded for one grouping
    pub fn count(&self, grouping: &str) -> u64 {
        self.index
            .get(grouping)
            .map_or(0, |&i| self.entries[i].count)
    }

    #[cfg(test)]
    fn window_lengths(&self) -> Vec<usize> {
        self.windows.iter().map(|w| w.len()).collect()
    }
}
