//! Key sequence tracking for the hidden terminal
//! Keeps a sliding window of the most recent key identifiers and reports when it spells the code

use std::collections::VecDeque;

/// ↑↑↓↓←→←→BA, as reported by `KeyboardEvent.key`
pub const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Rolling buffer of the last key presses, never longer than the code
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeySequenceBuffer {
    keys: VecDeque<String>,
}

impl KeySequenceBuffer {
    pub fn new() -> Self {
        Self {
            keys: VecDeque::with_capacity(KONAMI_CODE.len()),
        }
    }

    /// Records a key press and returns `true` when the buffer matches the code.
    /// A match clears the buffer, so the next match needs a full sequence again.
    pub fn push(&mut self, key: impl Into<String>) -> bool {
        self.keys.push_back(key.into());
        if self.keys.len() > KONAMI_CODE.len() {
            self.keys.pop_front();
        }

        if self.is_match() {
            self.keys.clear();
            return true;
        }
        false
    }

    fn is_match(&self) -> bool {
        self.keys.len() == KONAMI_CODE.len() &&
            self.keys
                .iter()
                .zip(KONAMI_CODE.iter())
                .all(|(key, expected)| key == expected)
    }
}
