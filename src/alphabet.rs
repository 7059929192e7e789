//! The six transmission symbols and the 36 plaintext symbols.
//!
//! A, D, F, G, V and X were picked because their Morse codes are hard to
//! confuse with one another. They label the rows and columns of the grid and
//! are the only symbols that ever appear in a ciphertext.

/// Grid side length, equal to the number of transmission symbols.
pub const GRID_SIZE: usize = 6;

/// Row/column headers of the grid and the ciphertext alphabet.
pub const ALPHABET: [char; GRID_SIZE] = ['A', 'D', 'F', 'G', 'V', 'X'];

/// Every symbol the grid can hold: `A`-`Z` followed by `0`-`9`.
pub const PLAIN_SYMBOLS: [char; GRID_SIZE * GRID_SIZE] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Read-only view of the ciphertext alphabet
pub fn alphabet() -> &'static [char; GRID_SIZE] {
    &ALPHABET
}

/// Position of `symbol` in [`ALPHABET`], if it is a transmission symbol
pub fn symbol_index(symbol: char) -> Option<usize> {
    ALPHABET.iter().position(|&s| s == symbol)
}

pub fn is_cipher_symbol(symbol: char) -> bool {
    symbol_index(symbol).is_some()
}

/// Uppercase ASCII letter or ASCII digit
pub fn is_plain_symbol(symbol: char) -> bool {
    symbol.is_ascii_uppercase() || symbol.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_is_distinct() {
        let set: HashSet<char> = ALPHABET.iter().copied().collect();
        assert_eq!(set.len(), GRID_SIZE);
    }

    #[test]
    fn test_plain_symbols_are_distinct_and_complete() {
        let set: HashSet<char> = PLAIN_SYMBOLS.iter().copied().collect();
        assert_eq!(set.len(), 36);
        assert!(PLAIN_SYMBOLS.iter().all(|&c| is_plain_symbol(c)));
    }

    #[test]
    fn test_symbol_index() {
        assert_eq!(symbol_index('A'), Some(0));
        assert_eq!(symbol_index('X'), Some(5));
        assert_eq!(symbol_index('B'), None);
        assert_eq!(symbol_index('a'), None);
    }

    #[test]
    fn test_is_plain_symbol_rejects_lowercase_and_punctuation() {
        assert!(is_plain_symbol('Q'));
        assert!(is_plain_symbol('7'));
        assert!(!is_plain_symbol('q'));
        assert!(!is_plain_symbol(' '));
        assert!(!is_plain_symbol('É'));
    }
}
