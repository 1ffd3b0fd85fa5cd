use tracing::Level;

use crate::errors::AppError;

pub const DATA_DIR: &str = "./data";
pub const WORDS_FILE: &str = "words.txt";
pub const IMAGES_FILE: &str = "images.txt";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ansi: bool,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ansi: true,
            log_level: Level::WARN,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup so it can be
    /// exercised without touching the process environment.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(value) = lookup("HANGMAN_ANSI") {
            config.ansi = match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => {
                    return Err(AppError::EnvError(format!(
                        "HANGMAN_ANSI must be a boolean, got '{other}'"
                    )));
                }
            };
        }

        // NO_COLOR wins over any HANGMAN_ANSI setting.
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.ansi = false;
        }

        if let Some(value) = lookup("HANGMAN_LOG") {
            config.log_level = value.trim().parse::<Level>().map_err(|_| {
                AppError::EnvError(format!("HANGMAN_LOG is not a log level: '{value}'"))
            })?;
        }

        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub words: Vec<String>,
    pub images: Vec<String>,
}
