//! Quiz engine.
//!
//! Drives a quiz from the first question to a scored result. A session is
//! ephemeral: created when a quiz is loaded, dropped when the user
//! navigates away, never persisted.

use crate::error::EngineError;
use crate::model::{CourseRef, Question, Quiz};

/// Engine phase. `advance()` is the only path to `Finished` and runs
/// exactly once per question, in order, so a finished session always has
/// one recorded answer per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Finished,
}

/// Ephemeral state for one run through a quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    current: usize,
    /// Tentative answer for the current question; cleared on advance.
    selected: Option<usize>,
    answers: Vec<usize>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Start a session at question 0 with no recorded answers.
    pub fn new(quiz: Quiz) -> Result<Self, EngineError> {
        if quiz.questions.is_empty() {
            return Err(EngineError::EmptyQuiz);
        }
        Ok(Self {
            quiz,
            current: 0,
            selected: None,
            answers: Vec::new(),
            phase: QuizPhase::InProgress,
        })
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    /// 0-based index of the question currently shown.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.quiz.questions.len()
    }

    /// The question currently awaiting an answer, or `None` once finished.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::InProgress => self.quiz.questions.get(self.current),
            QuizPhase::Finished => None,
        }
    }

    /// The tentative selection for the current question, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Recorded answers in traversal order.
    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    /// Record a tentative answer for the current question. May be called
    /// repeatedly; each call overwrites the previous tentative value.
    pub fn select_option(&mut self, index: usize) -> Result<(), EngineError> {
        let question = self
            .current_question()
            .ok_or(EngineError::InvalidTransition("quiz already finished"))?;
        if index >= question.options.len() {
            return Err(EngineError::OptionOutOfRange {
                index,
                len: question.options.len(),
            });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Commit the tentative answer and move on. On the last question this
    /// transitions to `Finished`; otherwise the next question is shown with
    /// the tentative selection cleared.
    ///
    /// Fails with `InvalidTransition` when nothing is selected; the
    /// intended UI disables advancement in that case, so this is a
    /// defensive contract only. State is unchanged on failure.
    pub fn advance(&mut self) -> Result<QuizPhase, EngineError> {
        if self.phase == QuizPhase::Finished {
            return Err(EngineError::InvalidTransition("quiz already finished"));
        }
        let answer = self
            .selected
            .ok_or(EngineError::InvalidTransition("no option selected"))?;

        self.answers.push(answer);
        self.selected = None;
        if self.current + 1 < self.quiz.questions.len() {
            self.current += 1;
        } else {
            self.phase = QuizPhase::Finished;
        }
        Ok(self.phase)
    }

    /// Number of correct answers. Only available once finished.
    pub fn score(&self) -> Option<usize> {
        if self.phase != QuizPhase::Finished {
            return None;
        }
        let correct = self
            .quiz
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, &a)| a == q.correct_answer_index)
            .count();
        Some(correct)
    }

    /// Per-question breakdown in original question order. Only available
    /// once finished.
    pub fn review(&self) -> Option<Vec<QuestionReview>> {
        if self.phase != QuizPhase::Finished {
            return None;
        }
        let reviews = self
            .quiz
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(q, &answer)| {
                let correct = answer == q.correct_answer_index;
                QuestionReview {
                    text: q.text.clone(),
                    correct,
                    correct_option: q
                        .options
                        .get(q.correct_answer_index)
                        .cloned()
                        .unwrap_or_default(),
                    chosen_option: if correct {
                        None
                    } else {
                        q.options.get(answer).cloned()
                    },
                    explanation: q.explanation.clone(),
                    related_courses: q.related_courses.clone(),
                }
            })
            .collect();
        Some(reviews)
    }

    /// Identifier of the quiz being taken, used to key the recommendation
    /// lookup on the Finished transition.
    pub fn quiz_id(&self) -> &str {
        &self.quiz.id
    }

    pub fn quiz_title(&self) -> &str {
        &self.quiz.title
    }
}

/// One question's result in the finished breakdown.
#[derive(Debug, Clone)]
pub struct QuestionReview {
    pub text: String,
    pub correct: bool,
    /// Text of the correct option.
    pub correct_option: String,
    /// Text of the user's choice, present only when it was wrong.
    pub chosen_option: Option<String>,
    pub explanation: String,
    pub related_courses: Vec<CourseRef>,
}
