//! ADFGVX - the German field cipher of 1918
//!
//! A message is enciphered in two stages:
//!
//! ```text
//! Plaintext → Sanitize → Substitute (6x6 grid) → Transpose (keyed columns) → Group → Ciphertext
//! ```
//!
//! - **Sanitize**: uppercase and keep `A`-`Z`, `0`-`9`
//! - **Substitute**: each symbol becomes the row and column headers of its
//!   grid cell, drawn from `A D F G V X`
//! - **Transpose**: the pairs are written row by row under the key, and the
//!   columns are read out in alphabetical order of their key characters
//! - **Group**: pairs separated by spaces for transmission
//!
//! Decoding filters everything but the six transmission symbols, undoes the
//! transposition and looks each pair up in the grid. The recovered plaintext
//! is lowercase.
//!
//! This is a classical cipher and offers no real security.
//!
//! ## Example
//!
//! ```
//! use adfgvx::{Adfgvx, Grid};
//!
//! let cipher = Adfgvx::with_grid(Grid::from_seed(1918), "JOHN");
//! let coded = cipher.encode("Hello");
//! assert_eq!(cipher.decode(&coded), "hello");
//!
//! // A repeated key character disables the cipher
//! let broken = Adfgvx::with_grid(Grid::from_seed(1918), "HELLO");
//! assert_eq!(broken.encode("Hello"), "");
//! ```

pub mod alphabet;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod grid;
pub mod key;
pub mod pipeline;

pub use alphabet::{alphabet, ALPHABET, GRID_SIZE};
pub use cipher::Adfgvx;
pub use error::{CipherError, Result};
pub use grid::Grid;
pub use key::KeyColumns;
