use std::io::{self, Write};

use rand::{Rng, rng};

use crate::models::Gameword;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const GUESSED_STYLE: &str = "\x1b[2;9m";
const RESET_STYLE: &str = "\x1b[0m";
const LETTERS_PER_ROW: u8 = 10;

pub fn random_word_index(len: usize) -> usize {
    rng().random_range(0..len)
}

pub fn render_alphabet(gameword: &Gameword, ansi: bool) -> String {
    let mut out = String::new();
    for (i, c) in ('A'..='Z').enumerate() {
        let i = i as u8;
        if i > 0 {
            out.push(if i % LETTERS_PER_ROW == 0 { '\n' } else { ' ' });
        }
        match (gameword.is_guessed(c), ansi) {
            (false, _) => out.push(c),
            (true, true) => {
                out.push_str(GUESSED_STYLE);
                out.push(c);
                out.push_str(RESET_STYLE);
            }
            (true, false) => out.push('-'),
        }
    }
    out
}

pub struct Screen<'a> {
    pub image: &'a str,
    pub gameword: &'a Gameword,
    /// Show the whole word instead of the masked one.
    pub reveal: bool,
    pub status: Option<&'a str>,
    pub prompt: Option<&'a str>,
}

pub fn render_screen(out: &mut impl Write, screen: &Screen<'_>, ansi: bool) -> io::Result<()> {
    if ansi {
        write!(out, "{CLEAR_SCREEN}")?;
    }
    write!(out, "{}\n\n", screen.image)?;
    let word = if screen.reveal {
        screen.gameword.revealed()
    } else {
        screen.gameword.masked()
    };
    write!(out, "Word: {word}\n\n")?;
    write!(out, "{}\n\n", render_alphabet(screen.gameword, ansi))?;
    if let Some(status) = screen.status {
        writeln!(out, "{status}")?;
    }
    if let Some(prompt) = screen.prompt {
        write!(out, "{prompt}")?;
    }
    out.flush()
}
