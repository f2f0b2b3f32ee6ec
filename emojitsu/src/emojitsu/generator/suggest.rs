use once_cell::sync::Lazy;
use regex::Regex;

use crate::emojitsu::generator::assets::AssetEntry;
use crate::emojitsu::types::EmojiRecord;

/// Categories that make no sense in an autocomplete list.
const SKIPPED_CATEGORIES: &[&str] = &["flags", "modifier", "extras", "regional"];

static UNSUITABLE_SHORTNAMES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^:family_",
        r"^:clock",
        r"_(diamond|square|triangle|circle|sign):$",
    ]
    .iter()
    .map(|re| Regex::new(re).expect("suggestion filter regex"))
    .collect()
});

pub fn is_suggestable(asset: &AssetEntry, max_unicode_version: f64) -> bool {
    let optional = asset
        .diversity
        .as_deref()
        .is_some_and(|tone| !tone.is_empty());
    let skipped = SKIPPED_CATEGORIES.contains(&asset.category.as_str());
    let desirable = UNSUITABLE_SHORTNAMES
        .iter()
        .all(|re| !re.is_match(&asset.shortname));
    let supported = asset.unicode_version <= max_unicode_version;

    asset.display && !optional && !skipped && desirable && supported
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    /// One `shortname glyph` pair per line.
    #[default]
    List,
    /// All shortnames on one line, all glyphs on the next.
    Inline,
}

/// Human readable listing of the suggestable records, sorted by shortname.
pub fn report<'a, I>(records: I, style: ReportStyle) -> String
where
    I: IntoIterator<Item = &'a EmojiRecord>,
{
    let mut suggested: Vec<(&str, String)> = records
        .into_iter()
        .filter(|record| record.suggest)
        .map(|record| (record.shortname.as_str(), record.unicode()))
        .collect();
    suggested.sort();

    let body = match style {
        ReportStyle::Inline => {
            let shortnames: Vec<&str> = suggested.iter().map(|(name, _)| *name).collect();
            let glyphs: Vec<&str> = suggested.iter().map(|(_, glyph)| glyph.as_str()).collect();
            format!("{}\n{}", shortnames.join(" "), glyphs.join(" "))
        }
        ReportStyle::List => suggested
            .iter()
            .map(|(name, glyph)| format!("{name} {glyph}"))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    format!("Suggesting:\n{body}\nTotal: {}", suggested.len())
}
