//! Typing-prompt state machine.
//!
//! DESIGN
//! ======
//! The machine is pure: it knows which delay comes next and how to take one
//! step, but never schedules anything itself. `util::typing_driver` owns the
//! timer and calls [`TypingState::advance`] when the delay elapses.
//!
//! Prefix lengths are counted in chars so a phrase with multi-byte text never
//! renders a split code point.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Delay after which one more character appears.
pub const KEYSTROKE_MS: u32 = 100;
/// Delay a fully typed phrase stays on screen before it is cleared.
pub const PAUSE_MS: u32 = 2_000;

/// Errors raised when building a [`TypingState`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypingError {
    #[error("typing prompt needs at least one phrase")]
    NoPhrases,
}

/// Delays used by the typing loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTiming {
    pub keystroke_ms: u32,
    pub pause_ms: u32,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self { keystroke_ms: KEYSTROKE_MS, pause_ms: PAUSE_MS }
    }
}

/// What the next timer tick will do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The prefix is shorter than the phrase; the next tick adds a character.
    Typing,
    /// The phrase is complete; the next tick clears it and moves on.
    Pausing,
}

/// Current phrase index plus how much of it has been typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingState {
    phrases: Vec<String>,
    index: usize,
    typed_chars: usize,
}

impl TypingState {
    /// Start at the first phrase with nothing typed.
    ///
    /// # Errors
    ///
    /// Returns [`TypingError::NoPhrases`] for an empty sequence.
    pub fn new(phrases: Vec<String>) -> Result<Self, TypingError> {
        if phrases.is_empty() {
            return Err(TypingError::NoPhrases);
        }
        Ok(Self { phrases, index: 0, typed_chars: 0 })
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    #[must_use]
    pub fn typed_chars(&self) -> usize {
        self.typed_chars
    }

    /// The visible prefix of the current phrase.
    #[must_use]
    pub fn typed_text(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.typed_chars)
            .map_or(phrase.len(), |(offset, _)| offset);
        &phrase[..end]
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.typed_chars < self.current_phrase().chars().count() {
            Phase::Typing
        } else {
            Phase::Pausing
        }
    }

    /// Delay before the next [`advance`](Self::advance).
    #[must_use]
    pub fn next_delay_ms(&self, timing: TypingTiming) -> u32 {
        match self.phase() {
            Phase::Typing => timing.keystroke_ms,
            Phase::Pausing => timing.pause_ms,
        }
    }

    /// Take one step: type a character, or clear and move to the next phrase.
    pub fn advance(&mut self) {
        match self.phase() {
            Phase::Typing => self.typed_chars += 1,
            Phase::Pausing => {
                self.typed_chars = 0;
                self.index = (self.index + 1) % self.phrases.len();
            }
        }
    }
}
