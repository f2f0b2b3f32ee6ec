use regex::{Captures, Regex};

/// A piece of scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    Text(&'t str),
    Match(&'t str),
}

/// The compiled unicode and shortcode patterns.
#[derive(Debug, Clone)]
pub struct Matcher {
    unicode: Regex,
    shortcode: Regex,
    single: Regex,
}

impl Matcher {
    pub fn new(unicode_pattern: &str, shortcode_pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            unicode: Regex::new(unicode_pattern)?,
            shortcode: Regex::new(shortcode_pattern)?,
            single: Regex::new(&format!("^(?:{shortcode_pattern}|{unicode_pattern})$"))?,
        })
    }

    pub fn unicode(&self) -> &Regex {
        &self.unicode
    }

    pub fn shortcode(&self) -> &Regex {
        &self.shortcode
    }

    /// Whether `text`, minus surrounding whitespace, is exactly one shortcode
    /// or one emoji sequence.
    pub fn is_single_token(&self, text: &str) -> bool {
        let trimmed = text.trim();
        !trimmed.is_empty() && self.single.is_match(trimmed)
    }
}

/// Replace every non-overlapping match of `pattern` with `transform(match)`.
pub fn substitute_all<F>(text: &str, pattern: &Regex, mut transform: F) -> String
where
    F: FnMut(&str) -> String,
{
    pattern
        .replace_all(text, |caps: &Captures| transform(&caps[0]))
        .into_owned()
}

/// Split `text` into literal runs and matches, dropping empty literal runs.
pub fn split<'t>(text: &'t str, pattern: &Regex) -> Vec<Segment<'t>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in pattern.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Text(&text[last..m.start()]));
        }
        segments.push(Segment::Match(m.as_str()));
        last = m.end();
    }

    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }

    segments
}
