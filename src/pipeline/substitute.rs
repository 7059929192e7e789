use crate::alphabet::{symbol_index, ALPHABET};
use crate::grid::Grid;

/// Replace every plaintext symbol with its row header followed by its column header
pub fn substitute(grid: &Grid, plain: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(plain.len() * 2);
    for &symbol in plain {
        let (row, col) = grid.locate(symbol);
        out.push(ALPHABET[row]);
        out.push(ALPHABET[col]);
    }
    out
}

/// Map each (row header, column header) pair back through the grid.
/// Returns `None` if the stream has odd length or holds a non-alphabet symbol.
pub fn unsubstitute(grid: &Grid, stream: &[char]) -> Option<Vec<char>> {
    if stream.len() % 2 != 0 {
        return None;
    }

    stream
        .chunks_exact(2)
        .map(|pair| {
            let row = symbol_index(pair[0])?;
            let col = symbol_index(pair[1])?;
            Some(grid.resolve(row, col))
        })
        .collect()
}
