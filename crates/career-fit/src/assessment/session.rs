use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AnswerSet, AnswerValue, Question};
use super::result::AssessmentResult;
use super::scoring::ScoringEngine;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("no question with id '{0}'")]
    UnknownQuestion(String),
    #[error("answer {value} is not one of the {options} options of '{question_id}'")]
    OptionOutOfRange {
        question_id: String,
        value: String,
        options: usize,
    },
}

/// Stored shape of an in-progress assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    #[serde(default, alias = "currentQuestionIndex")]
    pub current_index: usize,
    #[serde(default)]
    pub answers: AnswerSet,
    pub start_time: DateTime<Utc>,
}

/// Stored shape of a finished assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedAssessment {
    pub result: AssessmentResult,
    pub answers: AnswerSet,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Elapsed milliseconds between start and end.
    pub duration: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// 1-based position of the current question.
    pub current: usize,
    pub total: usize,
    pub answered: usize,
    pub percent_complete: u8,
}

/// Cursor and answers for one pass through the question bank.
#[derive(Debug, Clone)]
pub struct AssessmentSession<'a> {
    engine: &'a ScoringEngine,
    current_index: usize,
    answers: AnswerSet,
    start_time: DateTime<Utc>,
}

impl<'a> AssessmentSession<'a> {
    pub fn start(engine: &'a ScoringEngine, now: DateTime<Utc>) -> Self {
        Self {
            engine,
            current_index: 0,
            answers: AnswerSet::new(),
            start_time: now,
        }
    }

    /// Rebuilds a session from storage, clamping a cursor past the last question.
    pub fn resume(engine: &'a ScoringEngine, snapshot: ProgressSnapshot) -> Self {
        let last = engine.bank().len().saturating_sub(1);
        Self {
            engine,
            current_index: snapshot.current_index.min(last),
            answers: snapshot.answers,
            start_time: snapshot.start_time,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        self.engine.bank().at(self.current_index)
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.engine.bank().len()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id).map(|answer| &answer.value)
    }

    /// Records (or replaces) the answer for `question_id`.
    pub fn record(
        &mut self,
        question_id: &str,
        value: AnswerValue,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let question = self
            .engine
            .bank()
            .get(question_id)
            .ok_or_else(|| SessionError::UnknownQuestion(question_id.to_string()))?;

        if value.option_index(question.options.len()).is_none() {
            return Err(SessionError::OptionOutOfRange {
                question_id: question_id.to_string(),
                value: match &value {
                    AnswerValue::Index(index) => index.to_string(),
                    AnswerValue::Text(text) => text.clone(),
                },
                options: question.options.len(),
            });
        }

        self.answers.record(question_id, value, now);
        Ok(())
    }

    pub fn record_current(
        &mut self,
        value: AnswerValue,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let question_id = self
            .current_question()
            .map(|question| question.id)
            .ok_or_else(|| SessionError::UnknownQuestion(self.current_index.to_string()))?;
        self.record(question_id, value, now)
    }

    /// Moves to the next question; returns `false` when already on the last.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Moves to the previous question; returns `false` when already on the first.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    pub fn progress(&self) -> Progress {
        let total = self.engine.bank().len();
        let current = (self.current_index + 1).min(total);
        let percent = if total == 0 {
            0.0
        } else {
            (current as f64 / total as f64 * 100.0).round()
        };

        Progress {
            current,
            total,
            answered: self.answers.len(),
            percent_complete: percent.clamp(0.0, 100.0) as u8,
        }
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            current_index: self.current_index,
            answers: self.answers.clone(),
            start_time: self.start_time,
        }
    }

    /// Scores the collected answers and packages the completed snapshot.
    pub fn complete(&self, now: DateTime<Utc>) -> CompletedAssessment {
        let result = self.engine.evaluate(&self.answers);
        CompletedAssessment {
            result,
            answers: self.answers.clone(),
            start_time: self.start_time,
            end_time: now,
            duration: (now - self.start_time).num_milliseconds(),
        }
    }
}
