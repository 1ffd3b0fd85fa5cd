use std::collections::HashMap;

use hangman::{errors::AppError, state::AppConfig};
use tracing::Level;

fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).unwrap();
    assert!(config.ansi);
    assert_eq!(config.log_level, Level::WARN);
}

#[test]
fn test_no_color_disables_ansi() {
    let config = config_from(&[("NO_COLOR", "1")]).unwrap();
    assert!(!config.ansi);

    // An empty NO_COLOR does not count
    let config = config_from(&[("NO_COLOR", "")]).unwrap();
    assert!(config.ansi);
}

#[test]
fn test_hangman_ansi_overrides() {
    assert!(!config_from(&[("HANGMAN_ANSI", "false")]).unwrap().ansi);
    assert!(!config_from(&[("HANGMAN_ANSI", "0")]).unwrap().ansi);
    assert!(config_from(&[("HANGMAN_ANSI", "on")]).unwrap().ansi);

    let err = config_from(&[("HANGMAN_ANSI", "maybe")]).unwrap_err();
    assert!(matches!(err, AppError::EnvError(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_no_color_beats_hangman_ansi() {
    assert!(!config_from(&[("NO_COLOR", "1"), ("HANGMAN_ANSI", "1")]).unwrap().ansi);
    assert!(!config_from(&[("NO_COLOR", "1"), ("HANGMAN_ANSI", "true")]).unwrap().ansi);

    // A bad HANGMAN_ANSI is still reported
    assert!(config_from(&[("NO_COLOR", "1"), ("HANGMAN_ANSI", "maybe")]).is_err());
}

#[test]
fn test_log_level() {
    assert_eq!(config_from(&[("HANGMAN_LOG", "debug")]).unwrap().log_level, Level::DEBUG);
    assert_eq!(config_from(&[("HANGMAN_LOG", "ERROR")]).unwrap().log_level, Level::ERROR);
    assert!(config_from(&[("HANGMAN_LOG", "loud")]).is_err());
}
