//! HTML escaping and URL policy.

use once_cell::sync::Lazy;
use regex::Regex;

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});")
        .expect("valid entity pattern")
});
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];
const SAFE_IMAGE_DATA: &[&str] = &[
    "data:image/png",
    "data:image/gif",
    "data:image/jpeg",
    "data:image/jpg",
    "data:image/webp",
    "data:image/avif",
];

/// Escapes `&`, `<` and `>` for HTML text content.
///
/// An `&` that already starts a character reference (`&amp;`, `&#8594;`,
/// `&#x2192;`) is left alone, so escaping twice equals escaping once.
///
/// ```
/// use quire_html::escape_html;
///
/// let once = escape_html("Fish & <Chips>");
/// assert_eq!(once, "Fish &amp; &lt;Chips&gt;");
/// assert_eq!(escape_html(&once), once);
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for (index, c) in text.char_indices() {
        match c {
            '&' if ENTITY.is_match(&text[index..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Encodes already text-escaped content for a double-quoted attribute.
///
/// The value is decoded first so existing entities are not escaped twice.
pub fn encode_attr(value: &str) -> String {
    let decoded = html_escape::decode_html_entities(value);
    html_escape::encode_double_quoted_attribute(&decoded).into_owned()
}

/// Plain text of an HTML fragment: tags removed, entities decoded.
pub fn strip_tags(html: &str) -> String {
    let text = TAG.replace_all(html, "");
    html_escape::decode_html_entities(&text).trim().to_string()
}

/// Where a URL is going to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlContext {
    /// `href` of an anchor.
    Link,
    /// `src` of an image.
    Image,
}

/// Checks a link or image URL against the scheme allow-list.
///
/// Scheme-less URLs (relative paths, `#fragments`, `//host/path`) are allowed,
/// as are `http`, `https`, `mailto` and `tel`. Images also accept raster
/// `data:image/...` URLs. The check runs on the entity-decoded value with
/// whitespace and control characters removed, the way browsers read it.
///
/// ```
/// use quire_html::{is_safe_url, UrlContext};
///
/// assert!(is_safe_url("https://example.com", UrlContext::Link));
/// assert!(is_safe_url("/articles/budget", UrlContext::Link));
/// assert!(!is_safe_url("JavaScript:alert(1)", UrlContext::Link));
/// ```
pub fn is_safe_url(url: &str, context: UrlContext) -> bool {
    let decoded = html_escape::decode_html_entities(url);
    let cleaned: String = decoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    let Some(scheme) = scheme_of(&cleaned) else {
        return true;
    };
    if SAFE_SCHEMES.contains(&scheme) {
        return true;
    }
    context == UrlContext::Image
        && scheme == "data"
        && SAFE_IMAGE_DATA
            .iter()
            .any(|prefix| cleaned.starts_with(prefix))
}

/// Scheme of a URL, `None` when it is relative.
fn scheme_of(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let candidate = &url[..colon];
    let mut chars = candidate.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(candidate)
}
