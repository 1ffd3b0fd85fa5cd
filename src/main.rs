fn main() {
    if let Err(e) = hangman::start_game() {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}
