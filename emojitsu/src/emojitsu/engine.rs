use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use regex::Regex;
use thiserror::Error;

use crate::emojitsu::html::{self, EscapeFn};
use crate::emojitsu::matcher::{self, Matcher, Segment};
use crate::emojitsu::renderer::{self, RenderOptions};
use crate::emojitsu::store::{DataIntegrityError, EmojiStore};
use crate::emojitsu::types::{Artifact, EmojiRecord};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("emoji data is not valid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Integrity(#[from] DataIntegrityError),

    #[error("emoji pattern does not compile: {0}")]
    Pattern(#[from] regex::Error),
}

/// Output of [`Emojitsu::render_to_tokens`]: literal text interleaved with
/// whatever the caller produced for each emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'t, T> {
    Text(&'t str),
    Emoji(T),
}

#[derive(Clone, Copy)]
enum Lookup {
    Unicode,
    Shortname,
}

/// Loaded emoji data plus the compiled scanners.
///
/// ```no_run
/// use emojitsu::{Emojitsu, RenderOptions};
///
/// let emoji = Emojitsu::load("vendor/emojis.json".as_ref())?;
/// assert_eq!(emoji.shortnames_to_unicode(":banana:").as_deref(), Some("🍌"));
/// let html = emoji.render("hi 🍌", &RenderOptions::default());
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// Every text operation is soft: unknown emoji and shortcodes pass through
/// untouched, and a `None` input yields `None` (or `false`) instead of an
/// error, which keeps templating callers simple.
#[derive(Debug, Clone)]
pub struct Emojitsu {
    store: EmojiStore,
    matcher: Matcher,
    spec_version: String,
    assets_version: String,
    escape: EscapeFn,
}

impl Emojitsu {
    pub fn from_artifact(artifact: Artifact) -> Result<Self, LoadError> {
        let matcher = Matcher::new(
            &artifact.unicode_match_pattern,
            &artifact.shortcode_match_pattern,
        )?;
        let store = EmojiStore::load(artifact.collection)?;

        if artifact.total_count != store.len() {
            warn!(
                "emoji data claims {} entries but holds {}",
                artifact.total_count,
                store.len()
            );
        }
        debug!(
            "loaded {} emoji (unicode {}, assets {})",
            store.len(),
            artifact.spec_version,
            artifact.assets_version
        );

        Ok(Self {
            store,
            matcher,
            spec_version: artifact.spec_version,
            assets_version: artifact.assets_version,
            escape: html::escape,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Self::from_artifact(Artifact::from_json(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let artifact = Artifact::load(path)?;
        Self::from_artifact(artifact)
            .with_context(|| format!("loading emoji data from {}", path.display()))
    }

    /// Replace the HTML escaper applied by the `render*` operations.
    pub fn with_escaper(mut self, escape: EscapeFn) -> Self {
        self.escape = escape;
        self
    }

    pub fn store(&self) -> &EmojiStore {
        &self.store
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn spec_version(&self) -> &str {
        &self.spec_version
    }

    pub fn assets_version(&self) -> &str {
        &self.assets_version
    }

    pub fn is_single_emoji<'a>(&self, text: impl Into<Option<&'a str>>) -> bool {
        text.into()
            .is_some_and(|text| self.matcher.is_single_token(text))
    }

    /// `":banana:"` to its emoji; unknown shortnames come back unchanged.
    pub fn shortname_to_unicode(&self, shortname: &str) -> String {
        self.store
            .by_shortname(shortname)
            .map(EmojiRecord::unicode)
            .unwrap_or_else(|| shortname.to_string())
    }

    /// An emoji to its shortname; unknown input comes back unchanged.
    pub fn unicode_to_shortname(&self, unicode: &str) -> String {
        self.store
            .by_unicode(unicode)
            .map(|record| record.shortname.clone())
            .unwrap_or_else(|| unicode.to_string())
    }

    pub fn shortnames_to_unicode<'a>(&self, text: impl Into<Option<&'a str>>) -> Option<String> {
        let text = text.into()?;
        Some(matcher::substitute_all(text, self.matcher.shortcode(), |code| {
            self.shortname_to_unicode(code)
        }))
    }

    pub fn unicode_to_shortnames<'a>(&self, text: impl Into<Option<&'a str>>) -> Option<String> {
        let text = text.into()?;
        Some(matcher::substitute_all(text, self.matcher.unicode(), |unicode| {
            self.unicode_to_shortname(unicode)
        }))
    }

    /// Replace unicode emoji with image tags.
    pub fn render<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
        options: &RenderOptions,
    ) -> Option<String> {
        let text = text.into()?;
        Some(self.render_with(text, options, self.matcher.unicode(), Lookup::Unicode))
    }

    /// Replace shortcodes with image tags.
    pub fn render_shortnames<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
        options: &RenderOptions,
    ) -> Option<String> {
        let text = text.into()?;
        Some(self.render_with(text, options, self.matcher.shortcode(), Lookup::Shortname))
    }

    /// Split `text` around unicode emoji, letting `on_match` decide what each
    /// known emoji becomes.
    ///
    /// `on_match` receives the emoji id, its canonical text and the running
    /// index of the match (unknown matches count too). Returning `None` drops
    /// the emoji. Text is not escaped.
    pub fn render_to_tokens<'t, T, F>(
        &self,
        text: impl Into<Option<&'t str>>,
        mut on_match: F,
    ) -> Option<Vec<Token<'t, T>>>
    where
        F: FnMut(&str, &str, usize) -> Option<T>,
    {
        let text = text.into()?;
        let mut tokens = Vec::new();
        let mut index = 0;

        for segment in matcher::split(text, self.matcher.unicode()) {
            match segment {
                Segment::Text(literal) => tokens.push(Token::Text(literal)),
                Segment::Match(span) => {
                    match self.store.by_unicode(span) {
                        Some(record) => {
                            let (id, glyph) = (record.id(), record.unicode());
                            if let Some(item) = on_match(id.as_str(), glyph.as_str(), index) {
                                tokens.push(Token::Emoji(item));
                            }
                        }
                        None => tokens.push(Token::Text(span)),
                    }
                    index += 1;
                }
            }
        }

        Some(tokens)
    }

    /// Image tag for one record.
    pub fn image_tag(&self, record: &EmojiRecord, options: &RenderOptions) -> String {
        renderer::image_tag(&record.hex, &self.assets_version, options)
    }

    pub fn image_src(&self, record: &EmojiRecord, options: &RenderOptions) -> String {
        renderer::image_src(&record.id(), &self.assets_version, options)
    }

    fn lookup(&self, lookup: Lookup, span: &str) -> Option<&EmojiRecord> {
        match lookup {
            Lookup::Unicode => self.store.by_unicode(span),
            Lookup::Shortname => self.store.by_shortname(span),
        }
    }

    fn render_with(
        &self,
        text: &str,
        options: &RenderOptions,
        pattern: &Regex,
        lookup: Lookup,
    ) -> String {
        let compile = |span: &str| match self.lookup(lookup, span) {
            Some(record) => self.image_tag(record, options),
            None => span.to_string(),
        };

        // Single mode trusts the caller: no scan, no escaping.
        if options.single {
            return compile(text);
        }

        let sanitized: Cow<'_, str> = if options.unsafe_html {
            Cow::Borrowed(text)
        } else {
            Cow::Owned((self.escape)(text))
        };

        matcher::substitute_all(&sanitized, pattern, compile)
    }
}
