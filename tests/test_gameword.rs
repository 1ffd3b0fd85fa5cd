use hangman::models::{Gameword, GuessOutcome, gameword::letter_bit};

#[test]
fn test_new_word_is_fully_masked() {
    let word = Gameword::new("hello");

    assert_eq!(word.word(), "HELLO");
    assert_eq!(word.masked(), "_ _ _ _ _");
    assert_eq!(word.revealed(), "H E L L O");
    assert_eq!(word.guessed_mask(), 0);
    assert!(!word.was_guessed());
}

#[test]
fn test_guess_reveals_every_occurrence() {
    let mut word = Gameword::new("hello");

    assert_eq!(word.guess('l'), GuessOutcome::Hit { count: 2 });
    assert_eq!(word.masked(), "_ _ L L _");

    assert_eq!(word.guess('H'), GuessOutcome::Hit { count: 1 });
    assert_eq!(word.masked(), "H _ L L _");
}

#[test]
fn test_guess_miss_and_repeat() {
    let mut word = Gameword::new("hello");

    assert_eq!(word.guess('z'), GuessOutcome::Miss);
    assert_eq!(word.guess('Z'), GuessOutcome::AlreadyGuessed);
    assert_eq!(word.guess('l'), GuessOutcome::Hit { count: 2 });
    assert_eq!(word.guess('L'), GuessOutcome::AlreadyGuessed);

    assert_eq!(word.misses(), 1);
    assert!(word.is_guessed('z'));
    assert!(word.is_guessed('l'));
    assert!(!word.is_guessed('h'));
}

#[test]
fn test_guess_rejects_non_letters() {
    let mut word = Gameword::new("abc");

    assert_eq!(word.guess('1'), GuessOutcome::Invalid);
    assert_eq!(word.guess(' '), GuessOutcome::Invalid);
    assert_eq!(word.guess('ä'), GuessOutcome::Invalid);
    assert_eq!(word.guessed_mask(), 0);
}

#[test]
fn test_guessed_mask_bits() {
    assert_eq!(letter_bit('a'), Some(1));
    assert_eq!(letter_bit('A'), Some(1));
    assert_eq!(letter_bit('z'), Some(1 << 25));
    assert_eq!(letter_bit('['), None);

    let mut word = Gameword::new("abc");
    word.guess('a');
    word.guess('z');
    assert_eq!(word.guessed_mask(), 1 | (1 << 25));
}

#[test]
fn test_was_guessed_once_all_letters_found() {
    let mut word = Gameword::new("banana");

    word.guess('b');
    word.guess('n');
    assert!(!word.was_guessed());

    word.guess('a');
    assert!(word.was_guessed());
    assert_eq!(word.masked(), "B A N A N A");
    assert_eq!(word.misses(), 0);
}

#[test]
fn test_punctuation_is_shown_and_never_guessed() {
    let mut word = Gameword::new("t-rex");

    assert_eq!(word.masked(), "_ - _ _ _");

    for c in ['t', 'r', 'e', 'x'] {
        word.guess(c);
    }
    assert!(word.was_guessed());
}

#[test]
fn test_set_word_resets_guesses() {
    let mut word = Gameword::new("cat");
    word.guess('c');
    word.guess('q');

    word.set_word("dog");
    assert_eq!(word.word(), "DOG");
    assert_eq!(word.guessed_mask(), 0);
    assert_eq!(word.misses(), 0);
    assert_eq!(word.masked(), "_ _ _");
}
