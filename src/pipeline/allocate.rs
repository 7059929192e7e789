/// Number of symbols each column holds for a message of `total` symbols.
///
/// Every column gets `total / columns`; the first `total % columns` columns in
/// key order get one more. Returns an empty vector when there are no columns.
pub fn allocate(total: usize, columns: usize) -> Vec<usize> {
    if columns == 0 {
        return Vec::new();
    }

    let base = total / columns;
    let remainder = total - base * columns;

    (0..columns)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}
