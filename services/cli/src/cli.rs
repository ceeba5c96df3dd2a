use crate::commands::{self, AnswerArgs, QuestionsArgs, ScoreArgs};
use crate::infra::AssessmentContext;
use career_fit::config::AppConfig;
use career_fit::error::AppError;
use career_fit::telemetry;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "career-fit",
    about = "Take the cloud security career-fit assessment from the command line",
    version
)]
struct Cli {
    /// Directory holding assessment snapshots (overrides CAREER_FIT_STORE_DIR)
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the questionnaire, optionally for one section
    Questions(QuestionsArgs),
    /// Discard any saved state and begin a fresh assessment
    Start,
    /// Show the current question and progress (default command)
    Status,
    /// Answer the current question (or a named one) and move on
    Answer(AnswerArgs),
    /// Return to the previous question
    Back,
    /// Score the saved answers and store the result
    Complete,
    /// Show the stored result of the last completed assessment
    Report,
    /// Score a JSON answer list without touching saved state
    Score(ScoreArgs),
    /// Clear saved progress and results
    Restart,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(dir) = cli.store_dir {
        config.storage.store_dir = dir;
    }

    telemetry::init(&config.telemetry)?;
    debug!(
        ?config.environment,
        store = %config.storage.store_dir.display(),
        "configuration loaded"
    );

    let context = AssessmentContext::from_config(&config)?;

    match cli.command.unwrap_or(Command::Status) {
        Command::Questions(args) => commands::list_questions(&context, args),
        Command::Start => commands::start(&context),
        Command::Status => commands::status(&context),
        Command::Answer(args) => commands::answer(&context, args),
        Command::Back => commands::back(&context),
        Command::Complete => commands::complete(&context),
        Command::Report => commands::report(&context),
        Command::Score(args) => commands::score(&context, args),
        Command::Restart => commands::restart(&context),
    }
}
