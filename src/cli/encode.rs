use crate::cli::grid::GridSource;
use crate::cli::build_cipher;
use crate::error::Result;

/// Options for the encode command
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub key: String,
    pub grid: GridSource,
}

/// Encode `message` and return the grouped ciphertext
pub fn encode_message(message: &str, options: &EncodeOptions) -> Result<String> {
    let cipher = build_cipher(&options.key, &options.grid)?;
    cipher.try_encode(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn test_encode_message_with_seed() {
        let options = EncodeOptions {
            key: "JOHN".into(),
            grid: GridSource::Seed(7),
        };
        let coded = encode_message("Hello my dear", &options).unwrap();
        assert_eq!(coded.len(), 11 * 3 - 1);
        assert!(coded.chars().all(|c| c == ' ' || "ADFGVX".contains(c)));
    }

    #[test]
    fn test_encode_message_reports_bad_key() {
        let options = EncodeOptions {
            key: "HELLO".into(),
            grid: GridSource::Seed(7),
        };
        assert!(matches!(
            encode_message("hi", &options),
            Err(CipherError::InvalidKey { duplicate: 'L' })
        ));
    }

    #[test]
    fn test_encode_message_reports_missing_key() {
        let options = EncodeOptions::default();
        assert!(matches!(
            encode_message("hi", &options),
            Err(CipherError::MissingKey)
        ));
    }
}
