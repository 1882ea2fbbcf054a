use std::collections::HashMap;

/// Heading slug generator, deduplicating within one document.
///
/// Slugs follow the github-slugger shape: lowercase, letters/digits/`-`/`_`
/// kept, spaces become hyphens, everything else dropped.
#[derive(Debug, Default)]
pub struct Slugger {
    counts: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a new slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the next unique slug for the given heading text.
    ///
    /// Suffixed slugs are registered too, so a later heading whose own text
    /// slugifies to `why-budget-1` gets `why-budget-1-1`.
    ///
    /// ```
    /// use quire_core::Slugger;
    ///
    /// let mut slugger = Slugger::new();
    /// assert_eq!(slugger.next_slug("Why Budget?"), "why-budget");
    /// assert_eq!(slugger.next_slug("Why Budget?"), "why-budget-1");
    /// ```
    pub fn next_slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut slug = base.clone();
        while self.counts.contains_key(&slug) {
            let count = self.counts.entry(base.clone()).or_insert(0);
            *count += 1;
            slug = format!("{base}-{count}");
        }
        self.counts.insert(slug.clone(), 0);
        slug
    }
}

/// Slugifies a single heading text without deduplication.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if ch == ' ' {
            slug.push('-');
        } else if ch == '-' || ch == '_' || ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        }
    }

    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("TypeScript & JSX"), "typescript--jsx");
        assert_eq!(slugify("Using __dirname"), "using-__dirname");
    }

    #[test]
    fn unicode_preserved() {
        assert_eq!(
            slugify("Финансовая грамотность"),
            "финансовая-грамотность"
        );
        assert_eq!(slugify("Héllo Wörld"), "héllo-wörld");
    }

    #[test]
    fn punctuation_only_falls_back() {
        assert_eq!(slugify("?!"), "section");
        assert_eq!(slugify("   "), "section");
    }

    #[test]
    fn deduplication() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.next_slug("Title"), "title");
        assert_eq!(slugger.next_slug("Title"), "title-1");
        assert_eq!(slugger.next_slug("title"), "title-2");
        assert_eq!(slugger.next_slug("Other"), "other");
    }

    #[test]
    fn suffixed_slugs_are_reserved() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.next_slug("Intro"), "intro");
        assert_eq!(slugger.next_slug("Intro"), "intro-1");
        assert_eq!(slugger.next_slug("Intro 1"), "intro-1-1");

        let mut slugger = Slugger::new();
        assert_eq!(slugger.next_slug("Intro 1"), "intro-1");
        assert_eq!(slugger.next_slug("Intro"), "intro");
        assert_eq!(slugger.next_slug("Intro"), "intro-2");
    }
}
