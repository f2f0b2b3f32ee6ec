use serde::{Deserialize, Serialize};

use crate::emojitsu::codec;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    pub category: String,
    pub shortname: String,
    /// Preferred code point sequence, dash-joined lowercase hex.
    pub hex: String,
    #[serde(default)]
    pub suggest: bool,
}

impl EmojiRecord {
    /// Lookup id (also the image file stem).
    pub fn id(&self) -> String {
        codec::hex_to_id(&self.hex)
    }

    /// The emoji as text. Empty when `hex` is malformed; records that went
    /// through [`EmojiStore::load`](crate::emojitsu::store::EmojiStore::load)
    /// always decode.
    pub fn unicode(&self) -> String {
        codec::hex_to_text(&self.hex).unwrap_or_default()
    }
}

/// The generated data set shipped to runtime consumers.
///
/// `unicode_match_pattern` is written in the `regex` crate dialect: the
/// trailing selector is `\x{FE0F}` and character classes may hold
/// supplementary-plane characters directly. Consumers on another regex engine
/// must translate it (e.g. a JavaScript `RegExp` needs the `u` flag and
/// `\u{FE0F}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub collection: Vec<EmojiRecord>,
    pub unicode_match_pattern: String,
    pub shortcode_match_pattern: String,
    pub total_count: usize,
    pub spec_version: String,
    pub assets_version: String,
}
