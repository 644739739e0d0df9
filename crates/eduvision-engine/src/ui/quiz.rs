//! Quiz state machine shared by the widgets.
//!
//! A fixed question bank cycled by index. The index advances circularly on
//! a correct answer only; answer comparison strips all whitespace and is
//! otherwise an exact, case-sensitive string match.

/// One question in a bank.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub prompt: String,
    pub answer: String,
}

impl QuizQuestion {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

/// Result of checking an answer against the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Correct { expected: String },
    Incorrect { expected: String },
}

/// Fixed-size question bank with a circular cursor.
pub struct QuizBank {
    questions: Vec<QuizQuestion>,
    current: usize,
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

impl QuizBank {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            current: 0,
        }
    }

    /// The question the cursor points at, if the bank is non-empty.
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    /// Index of the current question.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Check an answer against the current question. A correct answer
    /// advances the cursor circularly; an incorrect one leaves it in place.
    pub fn check(&mut self, answer: &str) -> Option<QuizOutcome> {
        let question = self.questions.get(self.current)?;
        let expected = question.answer.clone();

        if strip_whitespace(answer) == strip_whitespace(&expected) {
            self.current = (self.current + 1) % self.questions.len();
            Some(QuizOutcome::Correct { expected })
        } else {
            Some(QuizOutcome::Incorrect { expected })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> QuizBank {
        QuizBank::new(vec![
            QuizQuestion::new("What is the electron configuration of C?", "2,4"),
            QuizQuestion::new("What is the electron configuration of O?", "2,6"),
        ])
    }

    #[test]
    fn whitespace_is_ignored_in_answers() {
        let mut quiz = bank();
        let outcome = quiz.check("2, 4").unwrap();
        assert_eq!(
            outcome,
            QuizOutcome::Correct {
                expected: "2,4".into()
            }
        );
        assert_eq!(quiz.current_index(), 1);

        assert!(matches!(
            quiz.check(" 2 , 6 ").unwrap(),
            QuizOutcome::Correct { .. }
        ));
    }

    #[test]
    fn wrong_answer_does_not_advance() {
        let mut quiz = bank();
        let outcome = quiz.check("2.4").unwrap();
        assert_eq!(
            outcome,
            QuizOutcome::Incorrect {
                expected: "2,4".into()
            }
        );
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let mut quiz = QuizBank::new(vec![QuizQuestion::new("?", "Na")]);
        assert!(matches!(
            quiz.check("na").unwrap(),
            QuizOutcome::Incorrect { .. }
        ));
    }

    #[test]
    fn cursor_wraps_around() {
        let mut quiz = bank();
        quiz.check("2,4");
        quiz.check("2,6");
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn empty_bank_yields_none() {
        let mut quiz = QuizBank::new(Vec::new());
        assert!(quiz.check("anything").is_none());
        assert!(quiz.current().is_none());
    }
}
