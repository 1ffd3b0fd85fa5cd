/// Result of applying a single letter to a [`Gameword`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit { count: usize },
    Miss,
    AlreadyGuessed,
    Invalid,
}

/// The secret word of a round and the letters guessed against it.
///
/// Guessed letters live in a 26-bit mask, bit `n` standing for `'A' + n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gameword {
    word: String,
    guessed: u32,
}

/// Mask bit for an ASCII letter of either case, `None` for anything else.
pub fn letter_bit(c: char) -> Option<u32> {
    let c = c.to_ascii_uppercase();
    c.is_ascii_uppercase().then(|| 1 << (c as u8 - b'A'))
}

impl Gameword {
    pub fn new(word: &str) -> Self {
        let mut gameword = Self::default();
        gameword.set_word(word);
        gameword
    }

    pub fn set_word(&mut self, word: &str) {
        self.word = word.trim().to_uppercase();
        self.guessed = 0;
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guessed_mask(&self) -> u32 {
        self.guessed
    }

    pub fn guess(&mut self, c: char) -> GuessOutcome {
        let Some(bit) = letter_bit(c) else {
            return GuessOutcome::Invalid;
        };
        if self.guessed & bit != 0 {
            return GuessOutcome::AlreadyGuessed;
        }
        self.guessed |= bit;

        let upper = c.to_ascii_uppercase();
        match self.word.chars().filter(|&ch| ch == upper).count() {
            0 => GuessOutcome::Miss,
            count => GuessOutcome::Hit { count },
        }
    }

    pub fn is_guessed(&self, c: char) -> bool {
        letter_bit(c).is_some_and(|bit| self.guessed & bit != 0)
    }

    pub fn was_guessed(&self) -> bool {
        self.word
            .chars()
            .all(|ch| letter_bit(ch).is_none_or(|bit| self.guessed & bit != 0))
    }

    pub fn misses(&self) -> usize {
        let in_word = self
            .word
            .chars()
            .filter_map(letter_bit)
            .fold(0u32, |mask, bit| mask | bit);
        (self.guessed & !in_word).count_ones() as usize
    }

    pub fn masked(&self) -> String {
        self.spaced(|ch| match letter_bit(ch) {
            Some(bit) if self.guessed & bit == 0 => '_',
            _ => ch,
        })
    }

    pub fn revealed(&self) -> String {
        self.spaced(|ch| ch)
    }

    fn spaced(&self, show: impl Fn(char) -> char) -> String {
        let mut out = String::with_capacity(self.word.len() * 2);
        for (i, ch) in self.word.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(show(ch));
        }
        out
    }
}
