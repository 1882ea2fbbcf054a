//! Inline formatting: escaping, images, links, emphasis, code and arrows.
//!
//! Each step is a global substitution over the output of the previous one.
//! Image and link tags are stashed behind private-use placeholders while the
//! emphasis steps run, so their attribute values are never rewritten.

use once_cell::sync::Lazy;
use quire_core::{Diagnostics, RenderWarning, SourceLocation};
use regex::{Captures, Regex};

use crate::escape::{UrlContext, encode_attr, escape_html, is_safe_url};
use crate::options::RenderOptions;
use crate::typography::apply_typography;

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("valid image pattern"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x{E000}(\d+)\x{E001}").expect("valid placeholder pattern"));

/// Emphasis and code substitutions, applied in order.
static EMPHASIS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\*\*\*(\S(?:.*?\S)?)\*\*\*", "<strong><em>${1}</em></strong>"),
        (r"\b___(\S(?:.*?\S)?)___\b", "<strong><em>${1}</em></strong>"),
        (r"\*\*(\S(?:.*?\S)?)\*\*", "<strong>${1}</strong>"),
        (r"\b__(\S(?:.*?\S)?)__\b", "<strong>${1}</strong>"),
        (r"\*([^*\s](?:[^*]*?[^*\s])?)\*", "<em>${1}</em>"),
        (r"\b_([^_\s](?:[^_]*?[^_\s])?)_\b", "<em>${1}</em>"),
        (r"`([^`]+)`", "<code>${1}</code>"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("valid emphasis pattern"),
            replacement,
        )
    })
    .collect()
});

/// Formats one line of text with the default options.
///
/// ```
/// use quire_html::format_inline;
///
/// assert_eq!(format_inline("**a** *b*"), "<strong>a</strong> <em>b</em>");
/// assert_eq!(format_inline(""), "");
/// ```
pub fn format_inline(text: &str) -> String {
    let mut diagnostics = Diagnostics::new();
    format(text, &RenderOptions::default(), 1, &mut diagnostics)
}

/// Formats one line of text found at source line `line`, recording rejected
/// URLs in `diagnostics`.
pub(crate) fn format(
    text: &str,
    options: &RenderOptions,
    line: usize,
    diagnostics: &mut Diagnostics,
) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut formatter = Formatter {
        options,
        line,
        diagnostics,
        stash: Vec::new(),
    };

    let cleaned: String = text.chars().filter(|c| *c != OPEN && *c != CLOSE).collect();
    let html = escape_html(&cleaned);
    let html = IMAGE
        .replace_all(&html, |caps: &Captures<'_>| formatter.image(caps))
        .into_owned();
    let mut html = LINK
        .replace_all(&html, |caps: &Captures<'_>| formatter.link(caps))
        .into_owned();

    for (pattern, replacement) in EMPHASIS.iter() {
        html = pattern.replace_all(&html, *replacement).into_owned();
    }

    let html = formatter.restore(&html);
    apply_typography(&html, options.enable_smart_dashes)
}

struct Formatter<'a> {
    options: &'a RenderOptions,
    line: usize,
    diagnostics: &'a mut Diagnostics,
    stash: Vec<String>,
}

impl Formatter<'_> {
    fn image(&mut self, caps: &Captures<'_>) -> String {
        let alt = &caps[1];
        let url = caps[2].trim();
        if !self.accepts(url, UrlContext::Image) {
            return alt.to_string();
        }

        let lazy = if self.options.enable_lazy_images {
            " loading=\"lazy\""
        } else {
            ""
        };
        let img = format!(
            "<img src=\"{}\" alt=\"{}\"{} />",
            encode_attr(url),
            encode_attr(alt),
            lazy
        );
        let markup = if self.options.enable_image_captions && !alt.trim().is_empty() {
            format!("<figure>{img}<figcaption>{alt}</figcaption></figure>")
        } else {
            img
        };
        self.stash(markup)
    }

    fn link(&mut self, caps: &Captures<'_>) -> String {
        let text = &caps[1];
        let url = caps[2].trim();
        if !self.accepts(url, UrlContext::Link) {
            return text.to_string();
        }

        let target = if self.options.open_links_in_new_tab {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };
        let open = self.stash(format!("<a href=\"{}\"{}>", encode_attr(url), target));
        format!("{open}{text}</a>")
    }

    fn accepts(&mut self, url: &str, context: UrlContext) -> bool {
        if self.options.allow_unsafe_urls || is_safe_url(url, context) {
            return true;
        }
        log::warn!(
            "line {}: dropping {} with disallowed URL {:?}",
            self.line,
            match context {
                UrlContext::Link => "link",
                UrlContext::Image => "image",
            },
            url
        );
        self.diagnostics.add_warning(RenderWarning::UnsafeUrl {
            location: SourceLocation::line(self.line),
            url: url.to_string(),
        });
        false
    }

    fn stash(&mut self, markup: String) -> String {
        let placeholder = format!("{OPEN}{}{CLOSE}", self.stash.len());
        self.stash.push(markup);
        placeholder
    }

    fn restore(&self, html: &str) -> String {
        if self.stash.is_empty() {
            return html.to_string();
        }
        PLACEHOLDER
            .replace_all(html, |caps: &Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.stash.get(index))
                    .cloned()
                    .unwrap_or_default()
            })
            .into_owned()
    }
}
