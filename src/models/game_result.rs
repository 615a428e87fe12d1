use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one completed round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub correct: u32,
    pub total: u32,
    pub date: DateTime<Utc>,
}

impl GameResult {
    pub fn new(correct: u32, total: u32, date: DateTime<Utc>) -> Self {
        Self {
            correct,
            total,
            date,
        }
    }

    /// Placeholder best game used before any round has been stored.
    pub fn empty() -> Self {
        Self::new(0, 0, Utc::now())
    }

    /// Share of correct answers in `[0, 1]`; zero for an empty round.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total)
        }
    }

    /// Strictly higher accuracy wins; ties keep the existing record.
    pub fn is_better_than(&self, other: &GameResult) -> bool {
        self.accuracy() > other.accuracy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_of_empty_result_is_zero() {
        assert_eq!(GameResult::empty().accuracy(), 0.0);
    }

    #[test]
    fn test_is_better_than() {
        let now = Utc::now();
        let seven = GameResult::new(7, 10, now);
        let nine = GameResult::new(9, 10, now);
        assert!(nine.is_better_than(&seven));
        assert!(!seven.is_better_than(&nine));
        assert!(!seven.is_better_than(&GameResult::new(7, 10, now)));
        assert!(seven.is_better_than(&GameResult::empty()));
        assert!(!GameResult::new(0, 10, now).is_better_than(&GameResult::empty()));
    }

    #[test]
    fn test_serialization_layout() {
        let result = GameResult::new(9, 10, Utc::now());
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"correct\":9"));
        assert!(json.contains("\"total\":10"));
        assert!(json.contains("\"date\""));

        let back: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
