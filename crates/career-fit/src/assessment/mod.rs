//! Career-fit questionnaire: question bank, scoring, result generation, and
//! the session/storage plumbing a front end drives.

mod bank;
pub mod domain;
pub mod result;
pub mod scoring;
mod session;
pub mod storage;

#[cfg(test)]
mod tests;

pub use bank::{QuestionBank, QuestionBankError};
pub use domain::{
    AggregationGroup, Answer, AnswerSet, AnswerValue, Question, QuestionKind, Section,
    WiscarTrait,
};
pub use result::{
    format_duration, generate_result, AssessmentResult, CareerPath, LearningStage,
    Recommendation, StageLevel,
};
pub use scoring::{AssessmentScore, ScoringEngine, WiscarScores};
pub use session::{
    AssessmentSession, CompletedAssessment, Progress, ProgressSnapshot, SessionError,
};
pub use storage::{AssessmentStore, InMemoryStore, JsonFileStore, KeyValueStore, StoreError};
