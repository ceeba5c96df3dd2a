use crate::infra::{parse_answer_value, AssessmentContext};
use crate::render;
use career_fit::assessment::{AnswerSet, Section};
use career_fit::error::AppError;
use chrono::Utc;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Only list one section (psychometric, technical, domain, wiscar)
    #[arg(long, value_parser = crate::infra::parse_section)]
    pub(crate) section: Option<Section>,
}

#[derive(Args, Debug)]
pub(crate) struct AnswerArgs {
    /// Option number to select (0 = first option)
    pub(crate) value: String,
    /// Answer this question instead of the current one; the cursor stays put
    #[arg(long)]
    pub(crate) question: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding a list of {questionId, value, timestamp} answers
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn list_questions(
    context: &AssessmentContext,
    args: QuestionsArgs,
) -> Result<(), AppError> {
    let bank = context.engine.bank();
    let questions = match args.section {
        Some(section) => bank.questions_for_section(section),
        None => bank.questions().iter().collect(),
    };
    println!("{}", render::question_listing(&questions));
    Ok(())
}

pub(crate) fn start(context: &AssessmentContext) -> Result<(), AppError> {
    context.store.restart()?;
    let session = context.load_session(Utc::now())?;
    context.save_session(&session)?;
    info!(questions = context.engine.bank().len(), "assessment started");
    print!("{}", render::current_question(&session));
    Ok(())
}

pub(crate) fn status(context: &AssessmentContext) -> Result<(), AppError> {
    let session = context.load_session(Utc::now())?;
    print!("{}", render::current_question(&session));
    Ok(())
}

pub(crate) fn answer(context: &AssessmentContext, args: AnswerArgs) -> Result<(), AppError> {
    let now = Utc::now();
    let mut session = context.load_session(now)?;
    let value = parse_answer_value(&args.value);

    match args.question {
        Some(question_id) => session.record(&question_id, value, now)?,
        None => {
            session.record_current(value, now)?;
            if !session.advance() {
                println!("All questions visited. Run `career-fit complete` to see your results.");
            }
        }
    }

    context.save_session(&session)?;
    print!("{}", render::current_question(&session));
    Ok(())
}

pub(crate) fn back(context: &AssessmentContext) -> Result<(), AppError> {
    let mut session = context.load_session(Utc::now())?;
    if session.retreat() {
        context.save_session(&session)?;
    } else {
        println!("Already at the first question.");
    }
    print!("{}", render::current_question(&session));
    Ok(())
}

pub(crate) fn complete(context: &AssessmentContext) -> Result<(), AppError> {
    let session = context.load_session(Utc::now())?;
    let progress = session.progress();
    if progress.answered < progress.total {
        println!(
            "Scoring {} of {} answers; unanswered questions are left out.",
            progress.answered, progress.total
        );
    }

    let completed = session.complete(Utc::now());
    context.store.save_completed(&completed)?;
    print!(
        "{}",
        render::report(&completed.result, Some(completed.duration))
    );
    Ok(())
}

pub(crate) fn report(context: &AssessmentContext) -> Result<(), AppError> {
    match context.store.load_completed()? {
        Some(completed) => print!(
            "{}",
            render::report(&completed.result, Some(completed.duration))
        ),
        None => println!("No completed assessment found. Run `career-fit start` to begin."),
    }
    Ok(())
}

pub(crate) fn score(context: &AssessmentContext, args: ScoreArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.answers)?;
    let answers: AnswerSet = serde_json::from_str(&raw)?;
    let result = context.engine.evaluate(&answers);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::report(&result, None));
    }
    Ok(())
}

pub(crate) fn restart(context: &AssessmentContext) -> Result<(), AppError> {
    context.store.restart()?;
    println!("Saved progress and results cleared.");
    Ok(())
}
