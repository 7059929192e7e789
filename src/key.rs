//! Transposition key and the two column orderings derived from it.

use crate::error::{CipherError, Result};
use std::collections::HashSet;

/// A validated key: one column per character, in typed order, plus the
/// permutation that visits those columns by ascending header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyColumns {
    key: String,
    headers: Vec<char>,
    header_order: Vec<usize>,
}

impl KeyColumns {
    /// Validate `raw` and derive its column orderings.
    ///
    /// Characters are compared exactly as given, so `"Aa"` is a valid
    /// two-column key.
    pub fn parse(raw: &str) -> Result<Self> {
        let headers: Vec<char> = raw.chars().collect();
        if headers.is_empty() {
            return Err(CipherError::MissingKey);
        }

        let mut seen = HashSet::with_capacity(headers.len());
        for &header in &headers {
            if !seen.insert(header) {
                return Err(CipherError::InvalidKey { duplicate: header });
            }
        }

        let mut header_order: Vec<usize> = (0..headers.len()).collect();
        header_order.sort_by_key(|&i| headers[i]);

        Ok(Self {
            key: raw.to_string(),
            headers,
            header_order,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Header character of the column at key position `index`
    pub fn header(&self, index: usize) -> char {
        self.headers[index]
    }

    /// Column indices as typed: `0, 1, .., len - 1`
    pub fn key_order(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.headers.len()
    }

    /// Column indices sorted by ascending header character
    pub fn header_order(&self) -> &[usize] {
        &self.header_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_john() {
        let key = KeyColumns::parse("JOHN").unwrap();
        assert_eq!(key.len(), 4);
        assert_eq!(key.as_str(), "JOHN");
        assert_eq!(key.key_order().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        // H, J, N, O
        assert_eq!(key.header_order(), &[2, 0, 3, 1]);
        let sorted: String = key.header_order().iter().map(|&i| key.header(i)).collect();
        assert_eq!(sorted, "HJNO");
    }

    #[test]
    fn test_parse_rejects_repeated_character() {
        match KeyColumns::parse("HELLO") {
            Err(CipherError::InvalidKey { duplicate }) => assert_eq!(duplicate, 'L'),
            other => panic!("expected InvalidKey, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(KeyColumns::parse(""), Err(CipherError::MissingKey)));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let key = KeyColumns::parse("aA").unwrap();
        assert_eq!(key.header_order(), &[1, 0]);
    }

    #[test]
    fn test_parse_accepts_digits_and_symbols() {
        let key = KeyColumns::parse("3 a!").unwrap();
        let sorted: String = key.header_order().iter().map(|&i| key.header(i)).collect();
        assert_eq!(sorted, " !3a");
    }
}
