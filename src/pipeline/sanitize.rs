use crate::alphabet::{is_cipher_symbol, is_plain_symbol};
use crate::error::{CipherError, Result};

/// Which way a message is travelling through the cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Uppercase `text` and keep only the symbols the given direction accepts.
///
/// Encoding keeps `A`-`Z` and `0`-`9`. Decoding keeps only the six
/// transmission symbols, which drops the spaces the encoder inserts between
/// pairs. Each plaintext symbol decodes from two transmission symbols, so an
/// odd count when decoding is an error.
pub fn sanitize(text: &str, direction: Direction) -> Result<Vec<char>> {
    let keep: fn(char) -> bool = match direction {
        Direction::Encode => is_plain_symbol,
        Direction::Decode => is_cipher_symbol,
    };

    let symbols: Vec<char> = text.to_uppercase().chars().filter(|&c| keep(c)).collect();

    if direction == Direction::Decode && symbols.len() % 2 != 0 {
        return Err(CipherError::MalformedCiphertext(symbols.len()));
    }

    Ok(symbols)
}
