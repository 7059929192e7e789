/// Render a symbol stream as space-separated pairs: `"AG AA AV"`.
/// A trailing odd symbol ends up alone in the last group.
pub fn group_pairs(symbols: &[char]) -> String {
    let mut out = String::with_capacity(symbols.len() + symbols.len() / 2);
    for (i, pair) in symbols.chunks(2).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.extend(pair);
    }
    out
}
