//! Timed attempts
//!
//! Score, hint budget and time limit for one play of a level. The clock
//! itself lives with the caller; an attempt only sees remaining time.

use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::level::Connection;
use crate::tuning::Tuning;

/// Result of checking an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    InProgress,
    /// Level solved; the next level should be unlocked
    Won { score: u32, unlocked_level: u32 },
    TimedOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub level_index: u32,
    /// Never negative; penalties saturate at zero
    pub score: u32,
    pub hints_left: u8,
    pub time_limit_ms: u64,
    hint_penalty: u32,
    time_bonus_per_second: u32,
    /// Final outcome, once won or timed out
    outcome: Option<AttemptOutcome>,
}

impl Attempt {
    pub fn new(level_index: u32, tuning: &Tuning) -> Self {
        Self {
            level_index,
            score: 0,
            hints_left: tuning.hints_per_level,
            time_limit_ms: tuning.time_limit_ms(level_index),
            hint_penalty: tuning.hint_penalty,
            time_bonus_per_second: tuning.time_bonus_per_second,
            outcome: None,
        }
    }

    /// Spend a hint on the engine's next pending connection
    ///
    /// Nothing is charged when no hints remain or nothing is pending.
    pub fn use_hint(&mut self, engine: &Engine) -> Option<Connection> {
        if self.hints_left == 0 || self.is_finished() {
            return None;
        }
        let hint = engine.request_hint()?;
        self.hints_left -= 1;
        self.score = self.score.saturating_sub(self.hint_penalty);
        log::debug!(
            "Hint {:?} used on level {} ({} left)",
            hint.ids(),
            self.level_index,
            self.hints_left
        );
        Some(hint)
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Check the attempt against the engine and the time left
    ///
    /// A completed level is won once, with a bonus per whole second left.
    /// After that the final outcome is reported again unchanged.
    pub fn finish(&mut self, engine: &Engine, remaining_ms: u64) -> AttemptOutcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        if engine.is_complete() {
            let seconds = u32::try_from(remaining_ms.min(self.time_limit_ms) / 1000).unwrap_or(u32::MAX);
            self.add_points(seconds.saturating_mul(self.time_bonus_per_second));
            log::info!("Level {} won with score {}", self.level_index, self.score);
            let outcome = AttemptOutcome::Won {
                score: self.score,
                unlocked_level: self.level_index.saturating_add(1),
            };
            self.outcome = Some(outcome);
            return outcome;
        }
        if remaining_ms == 0 {
            log::info!("Level {} timed out", self.level_index);
            self.outcome = Some(AttemptOutcome::TimedOut);
            return AttemptOutcome::TimedOut;
        }
        AttemptOutcome::InProgress
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<AttemptOutcome> {
        self.outcome
    }
}
