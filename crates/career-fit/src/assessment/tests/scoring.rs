use super::common::*;
use crate::assessment::domain::{AnswerSet, AnswerValue, Section, WiscarTrait};
use crate::assessment::scoring::{
    AssessmentScore, DOMAIN_WEIGHT, PSYCHOMETRIC_WEIGHT, TECHNICAL_WEIGHT, WISCAR_WEIGHT,
};
use crate::assessment::{Recommendation, StageLevel};

fn all_scores(score: &AssessmentScore) -> Vec<f64> {
    let mut values = vec![
        score.psychometric,
        score.technical,
        score.domain,
        score.overall,
    ];
    values.extend(WiscarTrait::ordered().map(|kind| score.wiscar.get(kind)));
    values
}

#[test]
fn composite_weights_sum_to_one() {
    let sum = PSYCHOMETRIC_WEIGHT + TECHNICAL_WEIGHT + DOMAIN_WEIGHT + WISCAR_WEIGHT;
    assert!((sum - 1.0).abs() < 1e-12, "weights sum to {sum}");
}

#[test]
fn empty_answers_score_zero_everywhere() {
    let engine = standard_engine();
    let score = engine.calculate_scores(&AnswerSet::new());

    assert_eq!(score, AssessmentScore::default());

    let result = engine.evaluate(&AnswerSet::new());
    assert_eq!(result.recommendation, Recommendation::NotRecommended);
    let stages: Vec<StageLevel> = result.learning_path.iter().map(|s| s.stage).collect();
    assert_eq!(stages, vec![StageLevel::Beginner]);
}

#[test]
fn weighted_mean_uses_question_weights() {
    let engine = engine_for(vec![
        question("light", Section::Technical, "logic", 4, 1.0),
        question("heavy", Section::Technical, "logic", 4, 3.0),
    ]);
    let mut answers = AnswerSet::new();
    answers.record("light", AnswerValue::Index(0), started_at());
    answers.record("heavy", AnswerValue::Index(3), started_at());

    let score = engine.calculate_scores(&answers);
    assert_eq!(score.technical, 75.0);
    assert_eq!(score.psychometric, 0.0);
}

#[test]
fn unanswered_questions_leave_the_denominator() {
    let engine = engine_for(vec![
        question("answered", Section::Domain, "iam", 5, 2.0),
        question("skipped", Section::Domain, "iam", 5, 8.0),
    ]);
    let mut answers = AnswerSet::new();
    answers.record("answered", AnswerValue::Index(4), started_at());

    assert_eq!(engine.calculate_scores(&answers).domain, 100.0);
}

#[test]
fn string_encoded_indices_score_like_numbers() {
    let engine = standard_engine();
    let mut numeric = AnswerSet::new();
    numeric.record("domain-2", AnswerValue::Index(1), started_at());
    let mut text = AnswerSet::new();
    text.record("domain-2", AnswerValue::from("1"), started_at());

    assert_eq!(
        engine.calculate_scores(&numeric),
        engine.calculate_scores(&text)
    );
    assert_close(engine.calculate_scores(&text).domain, 100.0 / 3.0);
}

#[test]
fn unresolvable_answers_are_ignored() {
    let engine = engine_for(vec![
        question("a", Section::Technical, "logic", 4, 1.0),
        question("b", Section::Technical, "logic", 4, 1.0),
        question("c", Section::Technical, "logic", 4, 1.0),
    ]);
    let mut answers = AnswerSet::new();
    answers.record("a", AnswerValue::Index(3), started_at());
    answers.record("b", AnswerValue::Index(9), started_at());
    answers.record("c", AnswerValue::from("three"), started_at());
    answers.record("not-in-bank", AnswerValue::Index(0), started_at());

    assert_eq!(engine.calculate_scores(&answers).technical, 100.0);
}

#[test]
fn psychometric_trait_tags_do_not_feed_wiscar() {
    let engine = standard_engine();
    let mut answers = AnswerSet::new();
    answers.record("interest-1", AnswerValue::Index(4), started_at());

    let score = engine.calculate_scores(&answers);
    assert_close(score.psychometric, 100.0);
    assert_eq!(score.wiscar.interest, 0.0);

    answers.record("wiscar-interest-1", AnswerValue::Index(2), started_at());
    let score = engine.calculate_scores(&answers);
    assert_close(score.wiscar.interest, 50.0);
    assert_close(score.psychometric, 100.0);
}

#[test]
fn every_score_stays_within_bounds() {
    let engine = standard_engine();
    let lowest = answer_all(&engine, |_| 0);
    let highest = answer_all(&engine, |question| question.options.len() - 1);
    let mixed = answer_all(&engine, |question| question.id.len() % question.options.len());

    for answers in [lowest, highest, mixed] {
        let score = engine.calculate_scores(&answers);
        for value in all_scores(&score) {
            assert!((0.0..=100.0).contains(&value), "{value} out of range");
        }
    }

    let full = engine.calculate_scores(&answer_all(&engine, |q| q.options.len() - 1));
    assert_close(full.overall, 100.0);
    assert_eq!(
        engine.evaluate(&answer_all(&engine, |q| q.options.len() - 1)).recommendation,
        Recommendation::StronglyRecommended
    );
}

#[test]
fn scoring_is_idempotent() {
    let engine = standard_engine();
    let answers = answer_all(&engine, |question| question.options.len() / 2);

    let first = engine.calculate_scores(&answers);
    let second = engine.calculate_scores(&answers);
    let first_bits: Vec<u64> = all_scores(&first).into_iter().map(f64::to_bits).collect();
    let second_bits: Vec<u64> = all_scores(&second).into_iter().map(f64::to_bits).collect();
    assert_eq!(first_bits, second_bits);
    assert_eq!(engine.evaluate(&answers), engine.evaluate(&answers));
}

#[test]
fn raising_one_answer_never_lowers_its_group() {
    let engine = standard_engine();
    let baseline = answer_all(&engine, |question| question.options.len() / 2);

    for question in engine.bank().questions() {
        let group_score = |score: &AssessmentScore| match question.section {
            Section::Wiscar => {
                let kind = WiscarTrait::from_tag(question.trait_tag).expect("known trait");
                score.wiscar.get(kind)
            }
            section => score.section(section),
        };

        let mut previous = f64::NEG_INFINITY;
        for index in 0..question.options.len() {
            let mut answers = baseline.clone();
            answers.record(question.id, AnswerValue::from(index), started_at());
            let current = group_score(&engine.calculate_scores(&answers));
            assert!(
                current >= previous,
                "{} index {index}: {current} < {previous}",
                question.id
            );
            previous = current;
        }
    }
}

#[test]
fn overall_of_seventy_five_opens_intermediate_and_advanced() {
    let engine = uniform_engine();
    let answers = answer_all(&engine, |_| 3);

    let result = engine.evaluate(&answers);
    assert_eq!(result.scores.overall, 75.0);
    assert_eq!(result.confidence_score, 75.0);
    assert_eq!(result.recommendation, Recommendation::Recommended);
    let stages: Vec<StageLevel> = result.learning_path.iter().map(|s| s.stage).collect();
    assert_eq!(stages, vec![StageLevel::Intermediate, StageLevel::Advanced]);
}

#[test]
fn career_paths_are_sorted_descending() {
    let engine = standard_engine();
    let answers = answer_all(&engine, |question| {
        if question.section == Section::Technical || question.id == "wiscar-ability-1" {
            question.options.len() - 1
        } else {
            1
        }
    });

    let result = engine.evaluate(&answers);
    assert_eq!(result.career_paths.len(), 4);
    for pair in result.career_paths.windows(2) {
        assert!(pair[0].alignment >= pair[1].alignment);
    }
    assert_eq!(
        result.top_career_path().map(|path| path.title.as_str()),
        Some("DevSecOps Specialist")
    );
}
