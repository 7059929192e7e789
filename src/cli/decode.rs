use crate::cli::build_cipher;
use crate::cli::grid::GridSource;
use crate::error::Result;

/// Options for the decode command
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub key: String,
    pub grid: GridSource,
}

/// Decode `ciphertext` and return the lowercase plaintext
pub fn decode_message(ciphertext: &str, options: &DecodeOptions) -> Result<String> {
    let cipher = build_cipher(&options.key, &options.grid)?;
    cipher.try_decode(ciphertext)
}
