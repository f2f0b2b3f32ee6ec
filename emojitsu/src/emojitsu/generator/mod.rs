pub mod assets;
pub mod spec;
pub mod suggest;
pub mod trie;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;

use anyhow::{Context, Result, bail};
use log::{debug, info, warn};

use crate::emojitsu::codec;
use crate::emojitsu::config::GeneratorConfig;
use crate::emojitsu::store::EmojiStore;
use crate::emojitsu::types::{Artifact, EmojiRecord};

use self::assets::{AssetEntry, AssetTable};
use self::spec::{Qualification, UnicodeSpec};
use self::trie::Trie;

/// Shortcodes are not data driven: `:` + word characters or hyphens + `:`.
pub const SHORTCODE_PATTERN: &str = "(:[0-9A-Za-z_-]+:)";

/// Some platforms append an extra emoji presentation selector.
const TRAILING_SELECTOR: &str = r"\x{FE0F}?";

/// Offline builder for the emoji data artifact.
pub struct Generator {
    assets_version: String,
    fallback_spec_version: String,
    max_suggest_version: f64,
}

struct EmojiGroup<'a> {
    variants: Vec<(&'a str, Qualification)>,
    asset: &'a AssetEntry,
}

impl Generator {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            assets_version: config.assets_version.clone(),
            fallback_spec_version: config.spec_version.clone(),
            max_suggest_version: config.max_suggest_version,
        }
    }

    /// Read the configured inputs, build the artifact and publish it to
    /// `output_path`.
    pub fn run(config: &GeneratorConfig) -> Result<Artifact> {
        let spec_path = config.spec_path();
        let spec_src = fs::read_to_string(&spec_path)
            .with_context(|| format!("reading unicode spec at {}", spec_path.display()))?;
        let spec = UnicodeSpec::parse(&spec_src)
            .with_context(|| format!("parsing unicode spec at {}", spec_path.display()))?;

        let assets_path = config.assets_path();
        let assets_src = fs::read_to_string(&assets_path)
            .with_context(|| format!("reading asset table at {}", assets_path.display()))?;
        let assets = assets::parse(&assets_src)
            .with_context(|| format!("parsing asset table at {}", assets_path.display()))?;

        let artifact = Generator::new(config).generate(&spec, &assets)?;

        let output = config.output_path();
        artifact.save(&output)?;
        info!(
            "Created {} entries, results saved to {}",
            artifact.total_count,
            output.display()
        );

        Ok(artifact)
    }

    pub fn generate(&self, spec: &UnicodeSpec, assets: &AssetTable) -> Result<Artifact> {
        let groups = group_by_id(spec, assets);
        if groups.is_empty() {
            bail!("no spec entry matched the asset table");
        }

        let omitted: Vec<&str> = assets
            .keys()
            .filter(|key| !groups.contains_key(key.as_str()))
            .map(String::as_str)
            .collect();
        if !omitted.is_empty() {
            info!(
                "{} asset keys have no unicode entry: {}",
                omitted.len(),
                omitted.join(", ")
            );
        }

        let collection = self.collection(&groups);
        EmojiStore::load(collection.clone()).context("generated collection is inconsistent")?;

        let unicode_match_pattern = unicode_pattern(
            groups
                .values()
                .flat_map(|group| group.variants.iter().map(|(hex, _)| *hex)),
        )
        .context("no emoji sequences to build a pattern from")?;
        debug!("unicode pattern is {} bytes", unicode_match_pattern.len());

        Ok(Artifact {
            total_count: collection.len(),
            collection,
            unicode_match_pattern,
            shortcode_match_pattern: SHORTCODE_PATTERN.to_string(),
            spec_version: spec
                .version
                .clone()
                .unwrap_or_else(|| self.fallback_spec_version.clone()),
            assets_version: self.assets_version.clone(),
        })
    }

    fn collection(&self, groups: &BTreeMap<String, EmojiGroup<'_>>) -> Vec<EmojiRecord> {
        let mut ordered: Vec<(&String, &EmojiGroup<'_>)> = groups.iter().collect();
        ordered.sort_by(|(id_a, a), (id_b, b)| {
            a.asset.order.cmp(&b.asset.order).then_with(|| id_a.cmp(id_b))
        });

        ordered
            .into_iter()
            .map(|(_, group)| {
                let (hex, _) = group
                    .variants
                    .iter()
                    .find(|(_, q)| *q == Qualification::FullyQualified)
                    .unwrap_or(&group.variants[0]);

                EmojiRecord {
                    category: group.asset.category.clone(),
                    shortname: group.asset.shortname.clone(),
                    hex: hex.to_string(),
                    suggest: suggest::is_suggestable(group.asset, self.max_suggest_version),
                }
            })
            .collect()
    }
}

fn group_by_id<'a>(
    spec: &'a UnicodeSpec,
    assets: &'a AssetTable,
) -> BTreeMap<String, EmojiGroup<'a>> {
    let mut groups: BTreeMap<String, EmojiGroup<'a>> = BTreeMap::new();

    for entry in &spec.entries {
        let id = codec::hex_to_id(&entry.hex);

        let Some(asset) = assets.get(&id) else {
            warn!("Couldn't find {id} ({}) in the assets data", entry.name);
            continue;
        };

        groups
            .entry(id)
            .or_insert_with(|| EmojiGroup {
                variants: Vec::new(),
                asset,
            })
            .variants
            .push((entry.hex.as_str(), entry.qualified));
    }

    groups
}

/// Regex source matching any of the given hex sequences, longest first, with
/// an optional trailing variation selector. `None` when there is nothing to
/// match.
///
/// Sequences are sorted on their hex form (longest first, then ascending)
/// before being decoded; the trie keeps that order in its alternations.
pub fn unicode_pattern<'a, I>(sequences: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut codes: Vec<&str> = sequences
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    codes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut trie = Trie::new();
    trie.add_all(codes.iter().filter_map(|hex| codec::hex_to_text(hex)));

    if trie.is_empty() {
        return None;
    }

    Some(format!("({}){TRAILING_SELECTOR}", trie.to_pattern()))
}
