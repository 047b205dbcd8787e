use serde::Serialize;
use thiserror::Error;

/// One fixed trivia question.
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub answer: &'static str,
}

pub const QUESTIONS: [QuizQuestion; 4] = [
    QuizQuestion {
        prompt: "Which heritage city is famous for the Chola temples?",
        answer: "Thanjavur",
    },
    QuizQuestion {
        prompt: "Rani ki Vav is located in which state?",
        answer: "Gujarat",
    },
    QuizQuestion {
        prompt: "Which art form is Shekhawati known for?",
        answer: "Frescoes",
    },
    QuizQuestion {
        prompt: "Which city is famous for its Terracotta temples?",
        answer: "Bishnupur",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    /// Waiting for an answer to the current question.
    Answering,
    /// Correctness shown; waiting for "next".
    Answered,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("This question has already been answered; press next")]
    AlreadyAnswered,
    #[error("Answer the current question before moving on")]
    NotYetAnswered,
}

#[derive(Debug, Clone, Copy)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub expected: &'static str,
    pub score: u32,
}

/// Result of advancing past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index.
    Next(usize),
    /// That was the last question; the session has been reset for replay.
    Finished { final_score: u32, total: u32 },
}

/// Per-session quiz state: current question index, cumulative score, and
/// whether the current question has been answered.
#[derive(Debug, Clone)]
pub struct QuizSession {
    index: usize,
    score: u32,
    phase: QuizPhase,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        QuizSession {
            index: 0,
            score: 0,
            phase: QuizPhase::Answering,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn question(&self) -> &'static QuizQuestion {
        &QUESTIONS[self.index]
    }

    /// Checks an answer against the current question. Only legal while
    /// `Answering`; transitions to `Answered` whether or not the answer
    /// was right.
    pub fn submit(&mut self, answer: &str) -> Result<AnswerOutcome, QuizError> {
        if self.phase != QuizPhase::Answering {
            return Err(QuizError::AlreadyAnswered);
        }

        let expected = self.question().answer;
        let correct = answer.trim().to_lowercase() == expected.trim().to_lowercase();
        if correct {
            self.score += 1;
        }
        self.phase = QuizPhase::Answered;
        Ok(AnswerOutcome {
            correct,
            expected,
            score: self.score,
        })
    }

    /// Moves to the next question. Only legal while `Answered`. Advancing
    /// past the last question reports the final score and resets the
    /// session to question one for replay.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        if self.phase != QuizPhase::Answered {
            return Err(QuizError::NotYetAnswered);
        }

        if self.index + 1 >= QUESTIONS.len() {
            let final_score = self.score;
            *self = QuizSession::new();
            return Ok(Advance::Finished {
                final_score,
                total: QUESTIONS.len() as u32,
            });
        }

        self.index += 1;
        self.phase = QuizPhase::Answering;
        Ok(Advance::Next(self.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_answer_scores_and_transitions() {
        let mut session = QuizSession::new();
        let outcome = session.submit("  thanjavur ").unwrap();
        assert!(outcome.correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), QuizPhase::Answered);
    }

    #[test]
    fn wrong_answer_still_transitions_without_scoring() {
        let mut session = QuizSession::new();
        let outcome = session.submit("Madurai").unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.expected, "Thanjavur");
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), QuizPhase::Answered);
    }

    #[test]
    fn submit_rejected_once_answered() {
        let mut session = QuizSession::new();
        session.submit("Thanjavur").unwrap();
        assert!(matches!(
            session.submit("Thanjavur"),
            Err(QuizError::AlreadyAnswered)
        ));
    }

    #[test]
    fn advance_rejected_before_answering() {
        let mut session = QuizSession::new();
        assert_eq!(session.advance(), Err(QuizError::NotYetAnswered));
    }

    #[test]
    fn perfect_run_finishes_four_of_four_then_resets() {
        let mut session = QuizSession::new();
        for i in 0..QUESTIONS.len() {
            let outcome = session.submit(QUESTIONS[i].answer).unwrap();
            assert!(outcome.correct);
            match session.advance().unwrap() {
                Advance::Next(index) => assert_eq!(index, i + 1),
                Advance::Finished { final_score, total } => {
                    assert_eq!(i, QUESTIONS.len() - 1);
                    assert_eq!(final_score, 4);
                    assert_eq!(total, 4);
                }
            }
        }
        // reset for replay
        assert_eq!(session.index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), QuizPhase::Answering);
    }
}
