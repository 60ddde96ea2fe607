/// Decode bytes as UTF-8, replacing invalid sequences.
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Best-effort decode for unknown file types: keep printable ASCII and
/// newlines, drop everything else.
pub fn decode_sanitized(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|c| *c == '\n' || (' '..='~').contains(c))
        .collect()
}
