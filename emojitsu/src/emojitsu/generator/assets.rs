use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::emojitsu::codec;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetEntry {
    pub shortname: String,
    pub category: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub order: u64,
    #[serde(default, deserialize_with = "flag")]
    pub display: bool,
    /// Skin tone of a diversity variant, `None` for base emoji.
    #[serde(default)]
    pub diversity: Option<String>,
    #[serde(default, deserialize_with = "version")]
    pub unicode_version: f64,
}

/// The vendor asset table: one entry per emoji image, keyed by id.
pub type AssetTable = BTreeMap<String, AssetEntry>;

/// Parse the asset JSON. Keys are normalized with [`codec::hex_to_id`] so
/// they line up with ids derived from the unicode spec.
pub fn parse(json: &str) -> serde_json::Result<AssetTable> {
    let raw: BTreeMap<String, AssetEntry> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .map(|(key, entry)| (codec::hex_to_id(&key), entry))
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Number(f64),
    Text(String),
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Number(n)) => n != 0.0,
        Some(Flag::Text(s)) => !(s.is_empty() || s == "0" || s == "false"),
        None => false,
    })
}

fn version<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Number(n)) => n,
        Some(Flag::Text(s)) => s.trim().parse().unwrap_or(0.0),
        Some(Flag::Bool(_)) | None => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_loose_field_types() {
        let table = parse(
            r#"{
                "0023-FE0F-20E3": {"shortname": ":hash:", "category": "symbols", "order": 3, "display": 1, "unicode_version": "3.0"},
                "1f44d-1f3ff": {"shortname": ":thumbsup_tone5:", "category": "people", "display": true, "diversity": "1f3ff", "unicode_version": 8}
            }"#,
        )
        .unwrap();

        let hash = &table["0023-20e3"];
        assert!(hash.display);
        assert_eq!(hash.order, 3);
        assert_eq!(hash.unicode_version, 3.0);
        assert_eq!(hash.diversity, None);

        let toned = &table["1f44d-1f3ff"];
        assert_eq!(toned.diversity.as_deref(), Some("1f3ff"));
        assert_eq!(toned.unicode_version, 8.0);
    }

    #[test]
    fn missing_display_means_hidden() {
        let table = parse(r#"{"1f34c": {"shortname": ":banana:", "category": "food"}}"#).unwrap();
        assert!(!table["1f34c"].display);
        assert_eq!(table["1f34c"].unicode_version, 0.0);
    }
}
