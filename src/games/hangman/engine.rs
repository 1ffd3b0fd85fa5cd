use std::io::{BufRead, Write};

use crate::{
    errors::AppError,
    games::hangman::{
        rules::{GuessContext, validate_guess},
        utils::{Screen, render_screen},
    },
    models::{Gameword, GuessOutcome},
    state::AppState,
};

const GUESS_PROMPT: &str = "Enter a guess: ";
const REPLAY_PROMPT: &str = "Play again? (y/n): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
    Quit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub wins: u32,
    pub losses: u32,
}

/// Reads one line, `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

pub fn play_round(
    word: &str,
    images: &[String],
    input: &mut impl BufRead,
    output: &mut impl Write,
    ansi: bool,
) -> Result<RoundOutcome, AppError> {
    let mut gameword = Gameword::new(word);
    let last_stage = images.len().saturating_sub(1);
    let mut stage = 0;
    let mut status: Option<String> = None;

    tracing::debug!("Starting round with a {}-letter word", gameword.word().len());

    loop {
        if gameword.was_guessed() {
            let msg = format!("You won! The word was {}.", gameword.word());
            let screen = final_screen(images, stage, &gameword, &msg, false);
            render_screen(output, &screen, ansi)?;
            tracing::info!("Round won after {} misses", gameword.misses());
            return Ok(RoundOutcome::Won);
        }
        if stage > 0 && stage >= last_stage {
            let msg = format!("You lost! The word was {}.", gameword.word());
            let screen = final_screen(images, stage, &gameword, &msg, true);
            render_screen(output, &screen, ansi)?;
            tracing::info!("Round lost on word {}", gameword.word());
            return Ok(RoundOutcome::Lost);
        }

        let screen = Screen {
            image: images.get(stage).map(String::as_str).unwrap_or_default(),
            gameword: &gameword,
            reveal: false,
            status: status.as_deref(),
            prompt: Some(GUESS_PROMPT),
        };
        render_screen(output, &screen, ansi)?;

        let Some(line) = read_line(input)? else {
            writeln!(output)?;
            tracing::info!("Input closed mid-round");
            return Ok(RoundOutcome::Quit);
        };

        let ctx = GuessContext {
            guessed: gameword.guessed_mask(),
        };
        let letter = match validate_guess(&line, &ctx) {
            Ok(letter) => letter,
            Err(msg) => {
                status = Some(msg);
                continue;
            }
        };

        status = match gameword.guess(letter) {
            GuessOutcome::Hit { count: 1 } => Some(format!("There is one {letter}.")),
            GuessOutcome::Hit { count } => Some(format!("There are {count} {letter}'s.")),
            GuessOutcome::Miss => {
                stage += 1;
                Some(format!("No {letter} in the word."))
            }
            // Rules reject both of these before we get here.
            GuessOutcome::AlreadyGuessed | GuessOutcome::Invalid => {
                tracing::warn!("Unexpected guess outcome for {letter}");
                None
            }
        };
    }
}

fn final_screen<'a>(
    images: &'a [String],
    stage: usize,
    gameword: &'a Gameword,
    msg: &'a str,
    reveal: bool,
) -> Screen<'a> {
    let shown = stage.min(images.len().saturating_sub(1));
    Screen {
        image: images.get(shown).map(String::as_str).unwrap_or_default(),
        gameword,
        reveal,
        status: Some(msg),
        prompt: None,
    }
}

fn wants_replay(input: &mut impl BufRead, output: &mut impl Write) -> Result<bool, AppError> {
    write!(output, "{REPLAY_PROMPT}")?;
    output.flush()?;
    let Some(answer) = read_line(input)? else {
        writeln!(output)?;
        return Ok(false);
    };
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Plays rounds until the player declines a replay or input runs out.
/// `pick` maps the word-list length to the index of the next word.
pub fn run_session(
    state: &AppState,
    input: &mut impl BufRead,
    output: &mut impl Write,
    mut pick: impl FnMut(usize) -> usize,
) -> Result<SessionStats, AppError> {
    let mut stats = SessionStats::default();

    loop {
        if state.words.is_empty() {
            return Err(AppError::NoWordsLoaded);
        }
        let index = pick(state.words.len()).min(state.words.len() - 1);
        let word = &state.words[index];

        match play_round(word, &state.images, input, output, state.config.ansi)? {
            RoundOutcome::Won => stats.wins += 1,
            RoundOutcome::Lost => stats.losses += 1,
            RoundOutcome::Quit => break,
        }

        if !wants_replay(input, output)? {
            break;
        }
    }

    writeln!(output, "Wins: {}  Losses: {}", stats.wins, stats.losses)?;
    output.flush()?;
    tracing::info!("Session over: {} wins, {} losses", stats.wins, stats.losses);

    Ok(stats)
}
