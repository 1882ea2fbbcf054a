//! Typographic substitutions over formatted HTML (arrows, optional dashes).

/// Replaces escaped arrows (`-&gt;`, `&lt;-`) with `→`/`←` and, when
/// `dashes` is set, `---`/`--` with em/en dashes.
///
/// Tags are copied verbatim and `<code>` content is left untouched.
pub fn apply_typography(html: &str, dashes: bool) -> String {
    if !html.contains('-') {
        return html.to_string();
    }

    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    let mut code_depth = 0usize;

    while let Some(c) = rest.chars().next() {
        if c == '<' {
            let end = rest.find('>').map_or(rest.len(), |i| i + 1);
            let tag = &rest[..end];
            track_code_depth(tag, &mut code_depth);
            out.push_str(tag);
            rest = &rest[end..];
            continue;
        }

        if code_depth == 0
            && let Some((replacement, consumed)) = substitution(rest, dashes)
        {
            out.push(replacement);
            rest = &rest[consumed..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn substitution(text: &str, dashes: bool) -> Option<(char, usize)> {
    const RULES: &[(&str, char, bool)] = &[
        ("-&gt;", '\u{2192}', false),
        ("&lt;-", '\u{2190}', false),
        ("---", '\u{2014}', true),
        ("--", '\u{2013}', true),
    ];

    RULES
        .iter()
        .filter(|(_, _, needs_dashes)| dashes || !needs_dashes)
        .find(|(pattern, _, _)| text.starts_with(pattern))
        .map(|(pattern, replacement, _)| (*replacement, pattern.len()))
}

fn track_code_depth(tag: &str, code_depth: &mut usize) {
    let lower = tag.to_ascii_lowercase();
    if lower.starts_with("<code") {
        *code_depth += 1;
    } else if lower.starts_with("</code") {
        *code_depth = code_depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::apply_typography;

    #[test]
    fn replaces_escaped_arrows() {
        assert_eq!(
            apply_typography("in -&gt; out &lt;- back", false),
            "in \u{2192} out \u{2190} back"
        );
    }

    #[test]
    fn dashes_only_when_enabled() {
        assert_eq!(apply_typography("a -- b --- c", false), "a -- b --- c");
        assert_eq!(
            apply_typography("a -- b --- c", true),
            "a \u{2013} b \u{2014} c"
        );
    }

    #[test]
    fn skips_tags_and_code() {
        let input = "<a href=\"/x--y\">x--y</a> <code>a -&gt; b --</code> -&gt;";
        assert_eq!(
            apply_typography(input, true),
            "<a href=\"/x--y\">x\u{2013}y</a> <code>a -&gt; b --</code> \u{2192}"
        );
    }
}
