use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::emojitsu::types::Artifact;

impl Artifact {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Pretty printed with a trailing newline, the on-disk form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading emoji data at {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parsing emoji data at {}", path.display()))
    }

    /// Write to a sibling temp file, then rename over `path` so readers never
    /// see a partial artifact.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir at {}", parent.display()))?;
        }

        let staging = staging_path(path);
        let json = self.to_json().context("serializing emoji data")?;
        fs::write(&staging, json)
            .with_context(|| format!("writing emoji data to {}", staging.display()))?;
        fs::rename(&staging, path)
            .with_context(|| format!("publishing emoji data to {}", path.display()))?;

        debug!("emoji data written to {}", path.display());
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "emojis.json".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emojitsu::types::EmojiRecord;

    fn sample() -> Artifact {
        Artifact {
            collection: vec![EmojiRecord {
                category: "food".into(),
                shortname: ":banana:".into(),
                hex: "1f34c".into(),
                suggest: true,
            }],
            unicode_match_pattern: "(\u{1f34c})\\x{FE0F}?".into(),
            shortcode_match_pattern: "(:[0-9A-Za-z_-]+:)".into(),
            total_count: 1,
            spec_version: "13.1".into(),
            assets_version: "6.6".into(),
        }
    }

    #[test]
    fn uses_camel_case_field_names() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"unicodeMatchPattern\""));
        assert!(json.contains("\"shortcodeMatchPattern\""));
        assert!(json.contains("\"totalCount\": 1"));
        assert!(json.contains("\"assetsVersion\": \"6.6\""));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vendor").join("emojis.json");

        sample().save(&path).unwrap();

        assert_eq!(Artifact::load(&path).unwrap(), sample());
        assert!(!dir.path().join("vendor").join(".emojis.json.tmp").exists());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Artifact::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("reading emoji data"));
    }
}
