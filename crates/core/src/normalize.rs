//! Document normalization run before block segmentation.

/// Punctuation that may be backslash-escaped to be taken literally.
const ESCAPABLE: &[char] = &[
    '.', '~', '*', '_', '`', '#', '-', '[', ']', '(', ')', '{', '}', '+', '!', '|',
];

/// Normalizes a raw article body.
///
/// - `\r\n` and lone `\r` become `\n` (the line count is unchanged).
/// - A backslash before ``. ~ * _ ` # - [ ] ( ) { } + ! |`` is dropped, keeping
///   the punctuation character.
/// - `->` becomes `→` and `<-` becomes `←`.
///
/// ```
/// use quire_core::normalize;
///
/// assert_eq!(normalize("a\r\nb \\*c\\* -> d"), "a\nb *c* → d");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push('\n');
            }
            '\\' => match chars.next_if(|next| ESCAPABLE.contains(next)) {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            },
            '-' if chars.next_if_eq(&'>').is_some() => out.push('\u{2192}'),
            '<' if chars.next_if_eq(&'-').is_some() => out.push('\u{2190}'),
            _ => out.push(c),
        }
    }

    out
}
