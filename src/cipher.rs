use crate::alphabet::{alphabet, GRID_SIZE};
use crate::error::{CipherError, Result};
use crate::grid::Grid;
use crate::key::KeyColumns;
use crate::pipeline::{
    detranspose, group_pairs, sanitize, substitute, transpose, unsubstitute, Direction,
};
use rand::Rng;

/// An ADFGVX cipher: one substitution grid plus the current transposition key.
///
/// The grid is fixed for the life of the instance. Column buffers are built
/// per call, so a configured instance can be shared read-only across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adfgvx {
    grid: Grid,
    key: Option<KeyColumns>,
}

impl Adfgvx {
    /// Random grid, then [`set_key`](Self::set_key)
    pub fn new(key: &str) -> Self {
        Self::with_grid(Grid::random(), key)
    }

    /// Grid drawn from `rng`
    pub fn with_rng<R: Rng + ?Sized>(key: &str, rng: &mut R) -> Self {
        Self::with_grid(Grid::generate(rng), key)
    }

    pub fn with_grid(grid: Grid, key: &str) -> Self {
        let mut cipher = Self { grid, key: None };
        cipher.set_key(key);
        cipher
    }

    /// Replace the transposition key. A key with a repeated character, or an
    /// empty one, leaves the cipher without a key and every call returns "".
    /// The grid is untouched.
    pub fn set_key(&mut self, key: &str) {
        self.key = KeyColumns::parse(key).ok();
    }

    pub fn clear_key(&mut self) {
        self.key = None;
    }

    pub fn has_valid_key(&self) -> bool {
        self.key.is_some()
    }

    /// The accepted key, if any
    pub fn key(&self) -> Option<&str> {
        self.key.as_ref().map(KeyColumns::as_str)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn alphabet(&self) -> &'static [char; GRID_SIZE] {
        alphabet()
    }

    /// Ciphertext grouped in pairs, or "" when there is no key or nothing to encode
    pub fn encode(&self, plaintext: &str) -> String {
        self.try_encode(plaintext).unwrap_or_default()
    }

    /// Lowercase plaintext, or "" when there is no key or the ciphertext is malformed
    pub fn decode(&self, ciphertext: &str) -> String {
        self.try_decode(ciphertext).unwrap_or_default()
    }

    /// Like [`encode`](Self::encode) but reports a missing key
    pub fn try_encode(&self, plaintext: &str) -> Result<String> {
        let key = self.key.as_ref().ok_or(CipherError::MissingKey)?;

        let plain = sanitize(plaintext, Direction::Encode)?;
        if plain.is_empty() {
            return Ok(String::new());
        }

        let stream = substitute(&self.grid, &plain);
        let cipher = transpose(key, &stream);
        Ok(group_pairs(&cipher))
    }

    /// Like [`decode`](Self::decode) but reports a missing key or an odd
    /// number of transmission symbols
    pub fn try_decode(&self, ciphertext: &str) -> Result<String> {
        let key = self.key.as_ref().ok_or(CipherError::MissingKey)?;

        let cipher = sanitize(ciphertext, Direction::Decode)?;
        if cipher.is_empty() {
            return Ok(String::new());
        }

        let stream = detranspose(key, &cipher);
        let plain = unsubstitute(&self.grid, &stream)
            .ok_or(CipherError::MalformedCiphertext(cipher.len()))?;
        Ok(plain.into_iter().collect::<String>().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::tests::textbook_grid;

    #[test]
    fn test_encode_textbook() {
        let cipher = Adfgvx::with_grid(textbook_grid(), "JOHN");
        assert_eq!(
            cipher.encode("Hello my dear"),
            "AG AA AV GG FA XF DV AG GD GD FV"
        );
    }

    #[test]
    fn test_decode_textbook() {
        let cipher = Adfgvx::with_grid(textbook_grid(), "JOHN");
        assert_eq!(
            cipher.decode("AG AA AV GG FA XF DV AG GD GD FV"),
            "hellomydear"
        );
        // Separators are cosmetic
        assert_eq!(cipher.decode("agaaavggfaxfdvaggdgdfv"), "hellomydear");
    }

    #[test]
    fn test_hello_under_john_roundtrips() {
        let cipher = Adfgvx::with_grid(Grid::from_seed(1), "JOHN");
        let coded = cipher.encode("HELLO");
        assert_eq!(coded.split(' ').count(), 5);
        assert_eq!(cipher.decode(&coded), "hello");
    }

    #[test]
    fn test_invalid_key_disables_both_directions() {
        let cipher = Adfgvx::with_grid(textbook_grid(), "HELLO");
        assert!(!cipher.has_valid_key());
        assert_eq!(cipher.key(), None);
        assert_eq!(cipher.encode("attack at dawn"), "");
        assert_eq!(cipher.decode("AG AA"), "");
        assert!(matches!(
            cipher.try_encode("attack"),
            Err(CipherError::MissingKey)
        ));
    }

    #[test]
    fn test_set_key_keeps_grid() {
        let mut cipher = Adfgvx::with_grid(Grid::from_seed(5), "HELLO");
        let grid = *cipher.grid();
        cipher.set_key("WORLD");
        assert!(cipher.has_valid_key());
        assert_eq!(cipher.key(), Some("WORLD"));
        assert_eq!(*cipher.grid(), grid);

        cipher.set_key("LOOP");
        assert!(!cipher.has_valid_key());
        assert_eq!(*cipher.grid(), grid);
    }

    #[test]
    fn test_clear_key() {
        let mut cipher = Adfgvx::with_grid(textbook_grid(), "JOHN");
        cipher.clear_key();
        assert_eq!(cipher.encode("hello"), "");
    }

    #[test]
    fn test_key_change_changes_ciphertext() {
        let mut cipher = Adfgvx::with_grid(textbook_grid(), "JOHN");
        let first = cipher.encode("attack at dawn");
        cipher.set_key("PAUL");
        let second = cipher.encode("attack at dawn");
        assert_ne!(first, second);
        assert_eq!(cipher.decode(&second), "attackatdawn");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let cipher = Adfgvx::with_grid(Grid::from_seed(3), "CIPHER");
        assert_eq!(
            cipher.encode("The quick brown fox"),
            cipher.encode("The quick brown fox")
        );
    }

    #[test]
    fn test_odd_ciphertext_decodes_to_empty() {
        let cipher = Adfgvx::with_grid(textbook_grid(), "JOHN");
        assert_eq!(cipher.decode("A"), "");
        assert!(matches!(
            cipher.try_decode("AG A"),
            Err(CipherError::MalformedCiphertext(3))
        ));
    }

    #[test]
    fn test_filtered_out_input_is_empty() {
        let cipher = Adfgvx::with_grid(textbook_grid(), "JOHN");
        assert_eq!(cipher.encode("!!! ... ???"), "");
        assert_eq!(cipher.decode("!!! ... ???"), "");
        assert_eq!(cipher.try_encode("").unwrap(), "");
    }

    #[test]
    fn test_with_rng_is_reproducible() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let a = Adfgvx::with_rng("KEY", &mut StdRng::seed_from_u64(11));
        let b = Adfgvx::with_rng("KEY", &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
        assert_eq!(a.encode("same grid"), b.encode("same grid"));
    }

    #[test]
    fn test_accessors() {
        let cipher = Adfgvx::with_grid(textbook_grid(), "JOHN");
        assert_eq!(cipher.alphabet(), &['A', 'D', 'F', 'G', 'V', 'X']);
        assert_eq!(cipher.grid().rows()[0][0], 'D');
    }

    #[test]
    fn test_shared_across_threads() {
        let cipher = std::sync::Arc::new(Adfgvx::with_grid(Grid::from_seed(8), "THREAD"));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cipher = cipher.clone();
                std::thread::spawn(move || {
                    let msg = format!("message number {}", i);
                    cipher.decode(&cipher.encode(&msg))
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("messagenumber{}", i));
        }
    }
}
