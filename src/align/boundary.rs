/// Punctuation that already marks a clean end boundary
const PUNCTUATION: [char; 8] = ['.', ',', ';', '!', '?', ':', '\'', '"'];

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Snap a raw start offset to the beginning of a word.
///
/// A start on whitespace skips the delimiter; a start inside a word walks back
/// to the word's first character.
pub fn adjust_start(chars: &[char], start: usize) -> usize {
    let len = chars.len();
    if start >= len {
        return len;
    }

    if chars[start].is_whitespace() {
        return start + 1;
    }

    let mut start = start;
    while start > 0 && !chars[start - 1].is_whitespace() {
        start -= 1;
    }
    start
}

/// Snap a raw end offset (exclusive) to the end of a word.
///
/// Trailing whitespace is dropped, a trailing punctuation mark is kept as is,
/// and an end inside a word is extended to finish the word plus one trailing
/// delimiter when that delimiter is not whitespace. End of script counts as a
/// boundary.
pub fn adjust_end(chars: &[char], end: usize) -> usize {
    let len = chars.len();
    let mut end = end.min(len);
    if end == 0 {
        return 0;
    }

    let last = chars[end - 1];
    if last.is_whitespace() {
        return end - 1;
    }
    if is_punctuation(last) {
        return end;
    }

    while end < len && chars[end].is_alphanumeric() {
        end += 1;
    }
    if end < len && !chars[end].is_whitespace() {
        end += 1;
    }
    end
}

/// Snap a raw `[start, end)` window; the result never has `end < start`
pub fn adjust(chars: &[char], start: usize, end: usize) -> (usize, usize) {
    let start = adjust_start(chars, start);
    let end = adjust_end(chars, end).max(start);
    (start, end)
}
