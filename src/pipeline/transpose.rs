use crate::key::KeyColumns;
use crate::pipeline::allocate::allocate;

/// Fixed-capacity buffer of transmission symbols under one key character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    header: char,
    capacity: usize,
    symbols: Vec<char>,
}

impl Column {
    pub fn new(header: char, capacity: usize) -> Self {
        Self {
            header,
            capacity,
            symbols: Vec::with_capacity(capacity),
        }
    }

    pub fn header(&self) -> char {
        self.header
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.symbols.len() == self.capacity
    }

    /// Append below the current bottom symbol
    pub fn push(&mut self, symbol: char) {
        assert!(
            !self.is_full(),
            "column '{}' is already full ({} symbols)",
            self.header,
            self.capacity
        );
        self.symbols.push(symbol);
    }

    pub fn get(&self, row: usize) -> Option<char> {
        self.symbols.get(row).copied()
    }

    /// Contents top to bottom
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

/// Fresh columns in key order, sized for a message of `total` symbols
pub fn layout_columns(key: &KeyColumns, total: usize) -> Vec<Column> {
    allocate(total, key.len())
        .into_iter()
        .zip(key.key_order())
        .map(|(capacity, i)| Column::new(key.header(i), capacity))
        .collect()
}

/// Write `stream` row by row under the key, then read the columns out in
/// header order.
///
/// The write cursor advances one column per symbol and wraps at the end of
/// the row, so the two halves of a substituted pair can land in different rows.
pub fn transpose(key: &KeyColumns, stream: &[char]) -> Vec<char> {
    if key.is_empty() {
        return Vec::new();
    }

    let mut columns = layout_columns(key, stream.len());
    let width = columns.len();
    for (i, &symbol) in stream.iter().enumerate() {
        columns[i % width].push(symbol);
    }

    key.header_order()
        .iter()
        .flat_map(|&i| columns[i].symbols().iter().copied())
        .collect()
}

/// Inverse of [`transpose`].
///
/// Column heights come from key order while the ciphertext is poured into the
/// columns in header order; the two orderings must not be mixed up.
pub fn detranspose(key: &KeyColumns, cipher: &[char]) -> Vec<char> {
    if key.is_empty() {
        return Vec::new();
    }

    let mut columns = layout_columns(key, cipher.len());

    let mut remaining = cipher;
    for &i in key.header_order() {
        let column = &mut columns[i];
        let (head, tail) = remaining.split_at(column.capacity());
        for &symbol in head {
            column.push(symbol);
        }
        remaining = tail;
    }

    let rows = columns.first().map_or(0, Column::len);
    let mut stream = Vec::with_capacity(cipher.len());
    for row in 0..rows {
        for column in &columns {
            match column.get(row) {
                Some(symbol) => stream.push(symbol),
                // Shorter columns are always the trailing ones
                None => break,
            }
        }
    }
    stream
}
