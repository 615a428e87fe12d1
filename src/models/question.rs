/// A yes/no question about a movie's rating, built around its poster.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub image: Vec<u8>,
    pub text: String,
    pub correct_answer: bool,
}

impl Question {
    /// Whether the player's answer matches the expected one.
    pub fn is_correct(&self, answer: bool) -> bool {
        self.correct_answer == answer
    }
}
