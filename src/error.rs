use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid key: character '{duplicate}' appears more than once")]
    InvalidKey { duplicate: char },

    #[error("No key set")]
    MissingKey,

    #[error("Malformed ciphertext: {0} symbols after filtering, expected an even count")]
    MalformedCiphertext(usize),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
