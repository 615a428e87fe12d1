use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use crate::models::GameResult;

use super::store::{KeyValueStore, StorageError};

/// Keys under which the statistics are persisted.
pub mod keys {
    pub const CORRECT_ANSWERS: &str = "correctAnswers";
    pub const TOTAL_QUESTIONS: &str = "totalQuestions";
    pub const GAMES_COUNT: &str = "gamesCount";
    pub const BEST_GAME: &str = "bestGame";
}

/// Lifetime totals as read at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub games_count: u32,
    pub correct_answers: u32,
    pub total_questions: u32,
    pub best_game: GameResult,
}

impl Statistics {
    /// Lifetime accuracy in percent, rounded to two decimals.
    pub fn total_accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        let accuracy =
            f64::from(self.correct_answers) / f64::from(self.total_questions) * 100.0;
        (accuracy * 100.0).round() / 100.0
    }
}

/// Records finished rounds and answers questions about past ones.
///
/// `store` and every read go through the same lock, so a reader never sees
/// half of an update.
pub struct StatisticService {
    store: Arc<dyn KeyValueStore>,
    lock: Mutex<()>,
}

impl StatisticService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Record a finished round and return the updated totals.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or written; nothing
    /// is written in that case.
    pub fn store(&self, correct: u32, total: u32) -> Result<Statistics, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.read()?;

        let game = GameResult::new(correct, total, Utc::now());
        let best_game = if game.is_better_than(&current.best_game) {
            game
        } else {
            current.best_game
        };

        let next = Statistics {
            games_count: current.games_count.saturating_add(1),
            correct_answers: current.correct_answers.saturating_add(correct),
            total_questions: current.total_questions.saturating_add(total),
            best_game,
        };

        self.store.set_many(vec![
            (keys::GAMES_COUNT.to_string(), next.games_count.to_string()),
            (keys::CORRECT_ANSWERS.to_string(), next.correct_answers.to_string()),
            (keys::TOTAL_QUESTIONS.to_string(), next.total_questions.to_string()),
            (keys::BEST_GAME.to_string(), serde_json::to_string(&next.best_game)?),
        ])?;

        log::info!(
            "Stored game {}/{} (games played: {}, best: {}/{})",
            correct,
            total,
            next.games_count,
            next.best_game.correct,
            next.best_game.total
        );
        Ok(next)
    }

    /// All totals, read consistently.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub fn snapshot(&self) -> Result<Statistics, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read()
    }

    pub fn games_count(&self) -> Result<u32, StorageError> {
        Ok(self.snapshot()?.games_count)
    }

    pub fn correct_answers(&self) -> Result<u32, StorageError> {
        Ok(self.snapshot()?.correct_answers)
    }

    pub fn total_questions(&self) -> Result<u32, StorageError> {
        Ok(self.snapshot()?.total_questions)
    }

    pub fn best_game(&self) -> Result<GameResult, StorageError> {
        Ok(self.snapshot()?.best_game)
    }

    pub fn total_accuracy(&self) -> Result<f64, StorageError> {
        Ok(self.snapshot()?.total_accuracy())
    }

    fn read(&self) -> Result<Statistics, StorageError> {
        Ok(Statistics {
            games_count: self.read_count(keys::GAMES_COUNT)?,
            correct_answers: self.read_count(keys::CORRECT_ANSWERS)?,
            total_questions: self.read_count(keys::TOTAL_QUESTIONS)?,
            best_game: self.read_best_game()?,
        })
    }

    fn read_count(&self, key: &str) -> Result<u32, StorageError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(0);
        };
        Ok(raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring malformed value {:?} for {}", raw, key);
            0
        }))
    }

    fn read_best_game(&self) -> Result<GameResult, StorageError> {
        let Some(raw) = self.store.get(keys::BEST_GAME)? else {
            return Ok(GameResult::empty());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("Ignoring malformed best game record: {}", err);
            GameResult::empty()
        }))
    }
}
