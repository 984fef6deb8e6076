use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tap dance error: {0}")]
    Dance(String),

    #[error("Keymap error: {0}")]
    Keymap(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
