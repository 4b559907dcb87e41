// Typewriter word cycler.
//
// The machine is driven by a single timer: [`Typewriter::next_delay`] says
// how long to wait, [`Typewriter::fire`] performs the step once that timer
// elapses. Nothing here knows about the clock.

use super::constants::{
    CARET_HALF_PERIOD_SEC, TYPEWRITER_DELETING_MS, TYPEWRITER_PAUSE_MS, TYPEWRITER_TYPING_MS,
};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub typing: Duration,
    pub deleting: Duration,
    pub pause: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(TYPEWRITER_TYPING_MS),
            deleting: Duration::from_millis(TYPEWRITER_DELETING_MS),
            pause: Duration::from_millis(TYPEWRITER_PAUSE_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    config: TypewriterConfig,
    word_index: usize,
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(words: I, config: TypewriterConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().chars().collect())
                .collect(),
            config,
            word_index: 0,
            visible: 0,
            phase: Phase::Typing,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn is_idle(&self) -> bool {
        self.words.is_empty()
    }

    fn word(&self) -> &[char] {
        self.words
            .get(self.word_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Visible prefix of the current word.
    pub fn text(&self) -> String {
        self.word()[..self.visible].iter().collect()
    }

    /// Delay before the next [`fire`](Self::fire); `None` when there is
    /// nothing to animate.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.words.is_empty() {
            return None;
        }
        Some(match self.phase {
            Phase::Typing => self.config.typing,
            Phase::Pausing => self.config.pause,
            Phase::Deleting => self.config.deleting,
        })
    }

    pub fn fire(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let len = self.word().len();
        match self.phase {
            Phase::Typing => {
                if self.visible < len {
                    self.visible += 1;
                }
                if self.visible >= len {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.word_index = (self.word_index + 1) % self.words.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

/// Caret opacity: a triangle wave 1 → 0 → 1 with a half period of 0.5 s.
pub fn caret_opacity(elapsed: Duration) -> f32 {
    let t = elapsed.as_secs_f32() / CARET_HALF_PERIOD_SEC;
    let phase = t % 2.0;
    if phase < 1.0 {
        1.0 - phase
    } else {
        phase - 1.0
    }
}
