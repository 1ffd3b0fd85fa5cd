pub mod errors;
pub mod games;
pub mod models;
pub mod state;

use std::{io, path::Path};

use errors::AppError;
use state::{AppConfig, DATA_DIR};

use crate::games::{
    hangman::{engine::run_session, utils::random_word_index},
    init::initialize_game,
};

pub fn start_game() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.log_level)
        .with_ansi(config.ansi)
        .init();

    let state = initialize_game(config, Path::new(DATA_DIR))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&state, &mut stdin.lock(), &mut stdout.lock(), random_word_index)?;

    Ok(())
}
