pub mod hangman;
pub mod init;
