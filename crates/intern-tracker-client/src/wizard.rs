/*
[INPUT]:  Ordered follow-up questions and user answer input
[OUTPUT]: Index-aligned answer set and navigation/progress state
[POS]:    Form layer - single-question follow-up wizard
[UPDATE]: When wizard navigation or completeness rules change
*/

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Follow-up session has no questions")]
    NoQuestions,
    #[error("Please answer all {total} questions ({answered} answered)")]
    Incomplete { answered: usize, total: usize },
}

/// One answer per question, index-aligned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerBuffer {
    answers: Vec<String>,
}

impl AnswerBuffer {
    pub fn new(len: usize) -> Self {
        Self {
            answers: vec![String::new(); len],
        }
    }

    pub fn set(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.answers.get_mut(index) {
            *slot = text.into();
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.answers.get(index).map(String::as_str)
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.get(index).is_some_and(|answer| !answer.trim().is_empty())
    }

    pub fn answered_count(&self) -> usize {
        self.answers
            .iter()
            .filter(|answer| !answer.trim().is_empty())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.answers.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.answers
    }
}

/// Navigator presenting one question at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionWizard {
    questions: Vec<String>,
    answers: AnswerBuffer,
    cursor: usize,
}

impl QuestionWizard {
    pub fn new(questions: Vec<String>) -> Result<Self, WizardError> {
        if questions.is_empty() {
            return Err(WizardError::NoQuestions);
        }
        let answers = AnswerBuffer::new(questions.len());
        Ok(Self {
            questions,
            answers,
            cursor: 0,
        })
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_question(&self) -> &str {
        &self.questions[self.cursor]
    }

    pub fn current_answer(&self) -> &str {
        self.answers.get(self.cursor).unwrap_or_default()
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.total()
    }

    /// Advance; no-op on the last question
    pub fn next(&mut self) {
        if !self.is_last() {
            self.cursor += 1;
        }
    }

    /// Step back; no-op on the first question
    pub fn previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move to `index`, clamped to the last question
    pub fn jump_to(&mut self, index: usize) {
        self.cursor = index.min(self.total() - 1);
    }

    /// Overwrite the answer of the current question
    pub fn set_answer(&mut self, text: impl Into<String>) {
        self.answers.set(self.cursor, text);
    }

    pub fn answers(&self) -> &AnswerBuffer {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    pub fn first_unanswered(&self) -> Option<usize> {
        (0..self.total()).find(|&index| !self.answers.is_answered(index))
    }

    /// Fraction of the way through the questions, in `(0, 1]`
    pub fn progress(&self) -> f64 {
        (self.cursor + 1) as f64 / self.total() as f64
    }

    pub fn status_line(&self) -> String {
        format!(
            "Question {} of {} ({} answered)",
            self.cursor + 1,
            self.total(),
            self.answered_count()
        )
    }

    /// Answer set for submission; rejected while any answer is blank
    pub fn submit(&self) -> Result<Vec<String>, WizardError> {
        if !self.answers.is_complete() {
            return Err(WizardError::Incomplete {
                answered: self.answered_count(),
                total: self.total(),
            });
        }
        Ok(self.answers.as_slice().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard(count: usize) -> QuestionWizard {
        QuestionWizard::new((1..=count).map(|i| format!("Q{i}")).collect()).unwrap()
    }

    #[test]
    fn test_rejects_empty_question_list() {
        assert_eq!(QuestionWizard::new(Vec::new()), Err(WizardError::NoQuestions));
    }

    #[test]
    fn test_initial_state() {
        let w = wizard(2);
        assert_eq!(w.cursor(), 0);
        assert_eq!(w.current_question(), "Q1");
        assert_eq!(w.current_answer(), "");
        assert_eq!(w.status_line(), "Question 1 of 2 (0 answered)");
        assert_eq!(w.progress(), 0.5);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut w = wizard(3);
        w.previous();
        assert_eq!(w.cursor(), 0);

        for _ in 0..10 {
            w.next();
            assert!(w.cursor() <= 2);
        }
        assert_eq!(w.cursor(), 2);
        assert!(w.is_last());
        assert_eq!(w.progress(), 1.0);

        for _ in 0..10 {
            w.previous();
        }
        assert_eq!(w.cursor(), 0);
        assert!(w.is_first());

        w.jump_to(99);
        assert_eq!(w.cursor(), 2);
    }

    #[test]
    fn test_single_question_wizard() {
        let mut w = wizard(1);
        w.next();
        w.previous();
        assert_eq!(w.cursor(), 0);
        assert!(w.is_first() && w.is_last());
    }

    #[test]
    fn test_set_answer_targets_cursor() {
        let mut w = wizard(2);
        w.next();
        w.set_answer("A2");
        assert_eq!(w.answers().as_slice(), ["", "A2"]);
        w.set_answer("A2 revised");
        assert_eq!(w.answers().get(1), Some("A2 revised"));
        assert_eq!(w.status_line(), "Question 2 of 2 (1 answered)");
        assert_eq!(w.first_unanswered(), Some(0));
    }

    #[test]
    fn test_submit_requires_every_answer() {
        let mut w = wizard(2);
        w.jump_to(1);
        w.set_answer("A2");
        assert_eq!(
            w.submit(),
            Err(WizardError::Incomplete {
                answered: 1,
                total: 2
            })
        );

        w.jump_to(0);
        w.set_answer("   ");
        assert!(w.submit().is_err());

        w.set_answer("A1");
        assert_eq!(w.submit(), Ok(vec!["A1".to_string(), "A2".to_string()]));
        assert_eq!(w.first_unanswered(), None);
    }
}
