use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::assessment::domain::{
    AnswerSet, AnswerValue, Question, QuestionKind, Section, WiscarTrait,
};
use crate::assessment::{QuestionBank, ScoringEngine};

const OPTION_LABELS: [&str; 6] = ["o0", "o1", "o2", "o3", "o4", "o5"];

pub(super) fn started_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 14, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn minutes_later(minutes: i64) -> DateTime<Utc> {
    started_at() + Duration::minutes(minutes)
}

pub(super) fn question(
    id: &'static str,
    section: Section,
    trait_tag: &'static str,
    option_count: usize,
    weight: f64,
) -> Question {
    Question {
        id,
        section,
        category: "Fixture",
        prompt: "fixture prompt",
        kind: QuestionKind::Likert,
        options: OPTION_LABELS[..option_count].to_vec(),
        weight,
        trait_tag,
    }
}

pub(super) fn engine_for(questions: Vec<Question>) -> ScoringEngine {
    ScoringEngine::new(QuestionBank::new(questions).expect("fixture bank validates"))
}

pub(super) fn standard_engine() -> ScoringEngine {
    ScoringEngine::standard().expect("standard bank validates")
}

/// One five-option question per section and per WISCAR trait, all weight 1.
pub(super) fn uniform_engine() -> ScoringEngine {
    let mut questions = vec![
        question("psy", Section::Psychometric, "grit", 5, 1.0),
        question("tech", Section::Technical, "logic", 5, 1.0),
        question("dom", Section::Domain, "iam", 5, 1.0),
    ];
    let wiscar_ids = [
        "w-will",
        "w-interest",
        "w-skill",
        "w-cognition",
        "w-ability",
        "w-real",
    ];
    for (id, kind) in wiscar_ids.into_iter().zip(WiscarTrait::ordered()) {
        questions.push(question(id, Section::Wiscar, kind.tag(), 5, 1.0));
    }
    engine_for(questions)
}

pub(super) fn answer_all(engine: &ScoringEngine, pick: impl Fn(&Question) -> usize) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for (offset, question) in engine.bank().questions().iter().enumerate() {
        answers.record(
            question.id,
            AnswerValue::from(pick(question)),
            minutes_later(offset as i64),
        );
    }
    answers
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
