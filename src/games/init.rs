use std::path::Path;

use crate::{
    errors::AppError,
    models::word_loader::{load_images, load_words},
    state::{AppConfig, AppState, IMAGES_FILE, WORDS_FILE},
};

pub fn initialize_game(config: AppConfig, data_dir: &Path) -> Result<AppState, AppError> {
    tracing::info!("Loading game data from {}", data_dir.display());

    let words = load_words(&data_dir.join(WORDS_FILE))?;
    let images = load_images(&data_dir.join(IMAGES_FILE))?;

    if images.len() == 1 {
        tracing::warn!("Only one stage image found, the first miss ends the round");
    }

    tracing::info!(
        "Loaded {} words and {} stage images",
        words.len(),
        images.len()
    );

    Ok(AppState {
        config,
        words,
        images,
    })
}
