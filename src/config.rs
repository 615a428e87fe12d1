//! Round settings and defaults.

use std::time::Duration;

/// Questions per round.
pub const DEFAULT_QUESTIONS_AMOUNT: usize = 10;

/// How long answer feedback stays on screen.
pub const DEFAULT_ANSWER_DELAY: Duration = Duration::from_secs(1);

/// Movie-list endpoint; the API key is appended as the last path segment.
pub const DEFAULT_API_URL: &str = "https://tv-api.com/en/API/Top250Movies";

/// Where statistics are kept when no path is given.
pub const DEFAULT_STATS_PATH: &str = "movie-quiz-stats.json";

/// Settings for one quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub questions_amount: usize,
    pub answer_delay: Duration,
}

impl QuizConfig {
    pub fn with_questions_amount(mut self, questions_amount: usize) -> Self {
        self.questions_amount = questions_amount.max(1);
        self
    }

    pub fn with_answer_delay(mut self, answer_delay: Duration) -> Self {
        self.answer_delay = answer_delay;
        self
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_amount: DEFAULT_QUESTIONS_AMOUNT,
            answer_delay: DEFAULT_ANSWER_DELAY,
        }
    }
}

/// Full movie-list URL for `api_url` and `api_key`.
pub fn movies_url(api_url: &str, api_key: &str) -> String {
    format!("{}/{}", api_url.trim_end_matches('/'), api_key.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.questions_amount, 10);
        assert_eq!(config.answer_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_questions_amount_is_at_least_one() {
        assert_eq!(QuizConfig::default().with_questions_amount(0).questions_amount, 1);
    }

    #[test]
    fn test_movies_url() {
        assert_eq!(
            movies_url("https://tv-api.com/en/API/Top250Movies/", "k_123"),
            "https://tv-api.com/en/API/Top250Movies/k_123"
        );
    }
}
