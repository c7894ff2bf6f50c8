/// Lines starting with this character are comments.
pub const COMMENT_PREFIX: char = '#';

/// Whether a line carries frame bytes (non-blank, not a comment).
pub fn is_frame_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with(COMMENT_PREFIX)
}

/// Decode one line of hex pairs into bytes.
///
/// Interior ASCII whitespace is allowed between pairs; digits are
/// case-insensitive. Returns a message describing the first offending digit
/// or an odd digit count.
pub fn decode_hex_line(line: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<char> = line
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace())
        .collect();
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits: {}", digits.len()));
    }

    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks(2) {
        let high = hex_value(pair[0])?;
        let low = hex_value(pair[1])?;
        bytes.push((high << 4) | low);
    }
    Ok(bytes)
}

fn hex_value(digit: char) -> Result<u8, String> {
    digit
        .to_digit(16)
        .map(|value| value as u8)
        .ok_or_else(|| format!("invalid hex digit '{digit}'"))
}
