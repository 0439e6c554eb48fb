mod cli;
mod commands;
mod demo;
mod infra;

use passage_calc::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
