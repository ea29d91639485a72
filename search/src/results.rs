//! Search results types.

use symdex_core::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Emitting keys that start with the needle, in insertion order.
    Prefix,
    /// Emitting keys that contain, but do not start with, the needle.
    Substring,
    Done,
}

/// Lazy sequence of matched entries.
///
/// Borrows the engine's entry table and scans it twice: once for prefix
/// matches, once for the remaining substring matches, so no entry is
/// yielded more than once. Restartable: each [`SearchEngine::query`] call
/// produces a fresh `Hits`, and `Hits` is `Clone`.
///
/// [`SearchEngine::query`]: crate::SearchEngine::query
#[derive(Debug, Clone)]
pub struct Hits<'a> {
    entries: &'a [Entry],
    needle: String,
    phase: Phase,
    pos: usize,
    remaining: Option<usize>,
}

impl<'a> Hits<'a> {
    pub(crate) fn new(entries: &'a [Entry], needle: String, limit: Option<usize>) -> Self {
        // Empty text is a no-op query, not a match-all.
        let phase = if needle.is_empty() {
            Phase::Done
        } else {
            Phase::Prefix
        };

        Self {
            entries,
            needle,
            phase,
            pos: 0,
            remaining: limit,
        }
    }
}

impl<'a> Iterator for Hits<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }

        loop {
            if self.phase == Phase::Done {
                return None;
            }

            let Some(entry) = self.entries.get(self.pos) else {
                // Current pass exhausted; rewind for the next one.
                self.phase = match self.phase {
                    Phase::Prefix => Phase::Substring,
                    _ => Phase::Done,
                };
                self.pos = 0;
                continue;
            };
            self.pos += 1;

            let key = entry.key.as_str();
            let is_prefix = key.starts_with(self.needle.as_str());
            let matched = match self.phase {
                Phase::Prefix => is_prefix,
                Phase::Substring => !is_prefix && key.contains(self.needle.as_str()),
                Phase::Done => false,
            };

            if matched {
                if let Some(remaining) = &mut self.remaining {
                    *remaining -= 1;
                }
                return Some(entry);
            }
        }
    }
}
