use std::{fs, path::Path};

use crate::errors::AppError;

pub fn read_lines(path: &Path) -> Result<Vec<String>, AppError> {
    let contents = read_file(path)?;
    Ok(contents.lines().map(str::to_string).collect())
}

pub fn parse_words<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Splits the image file on commas. Line breaks directly after a comma
/// belong to the separator, and trailing text with no closing comma is
/// dropped.
pub fn parse_images(contents: &str) -> Vec<String> {
    let mut images = Vec::new();
    let mut rest = contents;

    while let Some(end) = rest.find(',') {
        images.push(rest[..end].to_string());
        rest = rest[end + 1..].trim_start_matches(['\r', '\n']);
    }

    if !rest.trim().is_empty() {
        tracing::debug!("Ignoring {} trailing bytes after last image", rest.len());
    }

    images
}

pub fn load_words(path: &Path) -> Result<Vec<String>, AppError> {
    let words = parse_words(&read_lines(path)?);
    if words.is_empty() {
        return Err(AppError::EmptyWordList(path.to_path_buf()));
    }
    Ok(words)
}

pub fn load_images(path: &Path) -> Result<Vec<String>, AppError> {
    let images = parse_images(&read_file(path)?);
    if images.is_empty() {
        return Err(AppError::NoImages(path.to_path_buf()));
    }
    Ok(images)
}

fn read_file(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| {
        tracing::error!("Failed to open file {}: {}", path.display(), source);
        AppError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}
