//! Command history
//!
//! Bounded, append-only record of submitted lines with up/down recall.

use std::collections::VecDeque;

/// Default number of entries kept before the oldest is dropped.
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    max_size: usize,
    cursor: Option<usize>,
    /// Entries dropped off the front since the last reset.
    dropped: usize,
}

impl CommandHistory {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_size: max_size.max(1),
            cursor: None,
            dropped: 0,
        }
    }

    /// Record a submitted line. Blank lines and repeats of the immediately
    /// preceding entry are dropped. Returns whether the line was stored.
    pub fn push(&mut self, line: &str) -> bool {
        self.cursor = None;
        if line.trim().is_empty() {
            return false;
        }
        if self.entries.back().map_or(false, |last| last == line) {
            tracing::trace!(line, "skipping repeated history entry");
            return false;
        }
        if self.entries.len() >= self.max_size {
            self.entries.pop_front();
            self.dropped += 1;
        }
        self.entries.push_back(line.to_string());
        true
    }

    /// Step back one entry (up arrow). Stays on the oldest entry once reached.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.entries.get(index).map(|s| s.as_str())
    }

    /// Step forward one entry (down arrow). Moving past the newest entry
    /// leaves recall mode and returns `None`.
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor {
            Some(idx) if idx + 1 < self.entries.len() => {
                self.cursor = Some(idx + 1);
                self.entries.get(idx + 1).map(|s| s.as_str())
            }
            _ => {
                self.cursor = None;
                None
            }
        }
    }

    /// Leave recall mode without touching the entries.
    pub fn reset_navigation(&mut self) {
        self.cursor = None;
    }

    /// Drop every entry. Numbering restarts at 1.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
        self.dropped = 0;
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    /// Entries oldest first with their session-wide number, which keeps
    /// counting after old entries fall off the front.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        let first = self.dropped + 1;
        self.entries.iter().enumerate().map(move |(i, s)| (first + i, s.as_str()))
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
