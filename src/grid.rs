//! The 6x6 substitution grid.
//!
//! Each of the 36 plaintext symbols sits in exactly one cell. A symbol is
//! substituted by the pair (row header, column header) of its cell.

use crate::alphabet::{is_plain_symbol, ALPHABET, GRID_SIZE, PLAIN_SYMBOLS};
use crate::error::{CipherError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

/// Bijection between the plaintext symbols and grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridFile", into = "GridFile")]
pub struct Grid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Lay out a uniformly random permutation of the plaintext symbols row-major
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool = PLAIN_SYMBOLS;
        pool.shuffle(rng);

        let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
        for (row, chunk) in cells.iter_mut().zip(pool.chunks_exact(GRID_SIZE)) {
            row.copy_from_slice(chunk);
        }
        Self { cells }
    }

    /// Grid drawn from the thread-local generator
    pub fn random() -> Self {
        Self::generate(&mut rand::thread_rng())
    }

    /// Reproducible grid for a numeric seed
    pub fn from_seed(seed: u64) -> Self {
        Self::generate(&mut StdRng::seed_from_u64(seed))
    }

    /// Reproducible grid shared through a passphrase.
    /// The SHA3-256 digest of the passphrase seeds the generator.
    pub fn from_passphrase(passphrase: &str) -> Self {
        let seed: [u8; 32] = Sha3_256::digest(passphrase.as_bytes()).into();
        Self::generate(&mut StdRng::from_seed(seed))
    }

    /// Build a grid from explicit rows, checking that every plaintext symbol
    /// appears exactly once. Lowercase letters are accepted and stored uppercase.
    pub fn from_rows(rows: [[char; GRID_SIZE]; GRID_SIZE]) -> Result<Self> {
        let mut seen = [false; GRID_SIZE * GRID_SIZE];
        let mut cells = rows;

        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let symbol = cell.to_ascii_uppercase();
                if !is_plain_symbol(symbol) {
                    return Err(CipherError::InvalidGrid(format!(
                        "cell ({}, {}) holds {:?}, expected A-Z or 0-9",
                        r, c, cell
                    )));
                }
                let slot = plain_index(symbol);
                if seen[slot] {
                    return Err(CipherError::InvalidGrid(format!(
                        "symbol {} appears more than once",
                        symbol
                    )));
                }
                seen[slot] = true;
                *cell = symbol;
            }
        }

        Ok(Self { cells })
    }

    /// Coordinates (row, column) of `symbol`.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is not one of the 36 plaintext symbols. Sanitized
    /// input never reaches this with anything else.
    pub fn locate(&self, symbol: char) -> (usize, usize) {
        for (r, row) in self.cells.iter().enumerate() {
            if let Some(c) = row.iter().position(|&cell| cell == symbol) {
                return (r, c);
            }
        }
        panic!("symbol {:?} not found in grid", symbol);
    }

    /// Symbol stored at (row, column). Both indices must be below [`GRID_SIZE`].
    pub fn resolve(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    /// Read-only view of the matrix, indexed like [`ALPHABET`]
    pub fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }
}

fn plain_index(symbol: char) -> usize {
    match symbol {
        'A'..='Z' => symbol as usize - 'A' as usize,
        '0'..='9' => 26 + (symbol as usize - '0' as usize),
        _ => unreachable!("caller checked is_plain_symbol"),
    }
}

/// On-disk form of a grid: the alphabet as a string plus one string per row
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GridFile {
    alphabet: String,
    rows: Vec<String>,
}

impl From<Grid> for GridFile {
    fn from(grid: Grid) -> Self {
        Self {
            alphabet: ALPHABET.iter().collect(),
            rows: grid.cells.iter().map(|row| row.iter().collect()).collect(),
        }
    }
}

impl TryFrom<GridFile> for Grid {
    type Error = CipherError;

    fn try_from(file: GridFile) -> Result<Self> {
        let expected: String = ALPHABET.iter().collect();
        if file.alphabet != expected {
            return Err(CipherError::InvalidGrid(format!(
                "alphabet {:?} does not match {}",
                file.alphabet, expected
            )));
        }
        if file.rows.len() != GRID_SIZE {
            return Err(CipherError::InvalidGrid(format!(
                "expected {} rows, found {}",
                GRID_SIZE,
                file.rows.len()
            )));
        }

        let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
        for (r, (row, text)) in cells.iter_mut().zip(&file.rows).enumerate() {
            let symbols: Vec<char> = text.chars().collect();
            if symbols.len() != GRID_SIZE {
                return Err(CipherError::InvalidGrid(format!(
                    "row {} has {} symbols, expected {}",
                    r,
                    symbols.len(),
                    GRID_SIZE
                )));
            }
            row.copy_from_slice(&symbols);
        }

        Grid::from_rows(cells)
    }
}
