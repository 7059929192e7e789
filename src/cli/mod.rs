pub mod decode;
pub mod demo;
pub mod encode;
pub mod grid;

pub use decode::*;
pub use demo::*;
pub use encode::*;
pub use grid::*;

use crate::cipher::Adfgvx;
use crate::error::Result;
use crate::key::KeyColumns;

/// Build a cipher for the CLI, reporting a bad key instead of silently
/// disabling the cipher
fn build_cipher(key: &str, source: &GridSource) -> Result<Adfgvx> {
    KeyColumns::parse(key)?;
    let grid = source.load()?;
    Ok(Adfgvx::with_grid(grid, key))
}
