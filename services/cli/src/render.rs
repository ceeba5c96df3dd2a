use career_fit::assessment::{
    format_duration, AssessmentResult, AssessmentSession, Question, Section, WiscarTrait,
};
use std::fmt::Write;

pub(crate) fn question_listing(questions: &[&Question]) -> String {
    let mut out = String::new();
    let mut section = None;
    for question in questions {
        if section != Some(question.section) {
            section = Some(question.section);
            writeln!(&mut out, "\n{}", question.section.label()).expect("write section heading");
        }
        writeln!(
            &mut out,
            "  [{}] {} ({}, weight {:.1})",
            question.id,
            question.prompt,
            question.kind.label(),
            question.weight
        )
        .expect("write question line");
    }
    out
}

pub(crate) fn current_question(session: &AssessmentSession<'_>) -> String {
    let mut out = String::new();
    let progress = session.progress();
    writeln!(
        &mut out,
        "Question {} of {} ({}% complete, {} answered)",
        progress.current, progress.total, progress.percent_complete, progress.answered
    )
    .expect("write progress");

    let Some(question) = session.current_question() else {
        return out;
    };

    let selected = session
        .answer_for(question.id)
        .and_then(|value| value.option_index(question.options.len()));

    writeln!(
        &mut out,
        "{} / {}\n{}",
        question.section.label(),
        question.category,
        question.prompt
    )
    .expect("write prompt");
    for (index, option) in question.options.iter().enumerate() {
        let marker = if selected == Some(index) { '*' } else { ' ' };
        writeln!(&mut out, " {marker} {index}. {option}").expect("write option");
    }

    let hint = if session.is_last() {
        "Answer with `career-fit answer <n>`, then `career-fit complete`."
    } else {
        "Answer with `career-fit answer <n>`."
    };
    writeln!(&mut out, "{hint}").expect("write hint");
    out
}

pub(crate) fn report(result: &AssessmentResult, duration_ms: Option<i64>) -> String {
    let mut out = String::new();
    writeln!(
        &mut out,
        "Recommendation: {} (confidence {:.0}%)",
        result.recommendation.label(),
        result.confidence_score
    )
    .expect("write recommendation");
    if let Some(duration_ms) = duration_ms {
        writeln!(&mut out, "Completed in {}", format_duration(duration_ms))
            .expect("write duration");
    }

    out.push_str("\nScores\n");
    for section in [Section::Psychometric, Section::Technical, Section::Domain] {
        writeln!(
            &mut out,
            "  {:<22} {:>5.1}",
            section.label(),
            result.scores.section(section)
        )
        .expect("write section score");
    }
    for kind in WiscarTrait::ordered() {
        writeln!(
            &mut out,
            "  WISCAR {:<15} {:>5.1}",
            kind.label(),
            result.scores.wiscar.get(kind)
        )
        .expect("write trait score");
    }
    writeln!(&mut out, "  {:<22} {:>5.1}", "Overall", result.scores.overall)
        .expect("write overall score");

    out.push_str("\nInsights\n");
    for insight in &result.insights {
        writeln!(&mut out, "  - {insight}").expect("write insight");
    }

    out.push_str("\nCareer paths\n");
    for path in &result.career_paths {
        writeln!(&mut out, "  {:>5.1}%  {}", path.alignment, path.title)
            .expect("write career title");
        writeln!(&mut out, "          {}", path.description).expect("write career description");
        if !path.skill_gaps.is_empty() {
            writeln!(&mut out, "          gaps: {}", path.skill_gaps.join(", "))
                .expect("write skill gaps");
        }
    }

    out.push_str("\nLearning path\n");
    for stage in &result.learning_path {
        writeln!(&mut out, "  {} ({})", stage.stage.label(), stage.duration)
            .expect("write stage heading");
        writeln!(&mut out, "    topics: {}", stage.topics.join(", ")).expect("write topics");
        writeln!(&mut out, "    tools: {}", stage.tools.join(", ")).expect("write tools");
        writeln!(
            &mut out,
            "    certifications: {}",
            stage.certifications.join(", ")
        )
        .expect("write certifications");
    }

    out.push_str("\nNext steps\n");
    for (index, step) in result.next_steps.iter().enumerate() {
        writeln!(&mut out, "  {}. {step}", index + 1).expect("write next step");
    }
    out
}
