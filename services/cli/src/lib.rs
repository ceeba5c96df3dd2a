mod cli;
mod commands;
mod infra;
mod render;

use career_fit::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
