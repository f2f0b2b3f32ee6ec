use std::path::{Path, PathBuf};

use confik::{Configuration, EnvSource};
use serde::{Deserialize, Serialize};

use self::yaml::YamlFileSource;

pub const DEFAULT_CONFIG_FILE: &str = "emojitsu.yml";

fn default_spec_path() -> String {
    "data/emoji-test.txt".into()
}

fn default_assets_path() -> String {
    "data/emoji-assets.json".into()
}

fn default_output_path() -> String {
    "vendor/emojis.json".into()
}

fn default_assets_version() -> String {
    "6.6".into()
}

fn default_spec_version() -> String {
    "13.1".into()
}

fn default_max_suggest_version() -> f64 {
    13.0
}

/// Settings for the offline data generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Configuration)]
pub struct GeneratorConfig {
    /// Unicode `emoji-test.txt` file.
    #[confik(default = default_spec_path())]
    pub spec_path: String,
    /// Vendor asset table (JSON keyed by emoji id).
    #[confik(default = default_assets_path())]
    pub assets_path: String,
    /// Where the generated artifact is published.
    #[confik(default = default_output_path())]
    pub output_path: String,
    /// Version of the image assets, baked into image URLs.
    #[confik(default = default_assets_version())]
    pub assets_version: String,
    /// Used when `emoji-test.txt` has no `# Version:` header.
    #[confik(default = default_spec_version())]
    pub spec_version: String,
    /// Emoji newer than this are never suggested.
    #[confik(default = default_max_suggest_version())]
    pub max_suggest_version: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            spec_path: default_spec_path(),
            assets_path: default_assets_path(),
            output_path: default_output_path(),
            assets_version: default_assets_version(),
            spec_version: default_spec_version(),
            max_suggest_version: default_max_suggest_version(),
        }
    }
}

impl GeneratorConfig {
    /// Load from `emojitsu.yml` in the working directory (if present) and
    /// environment variables.
    pub fn load() -> Self {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Like [`GeneratorConfig::load`] with an explicit YAML path. Falls back to
    /// the compiled-in defaults when parsing fails.
    pub fn load_from(config_path: &Path) -> Self {
        let mut builder = GeneratorConfig::builder();

        if config_path.exists() {
            builder.override_with(YamlFileSource::new(config_path));
        }

        builder.override_with(EnvSource::new());

        match builder.try_build() {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!(
                    "Failed to load {} or env overrides: {err}. Using defaults.",
                    config_path.display()
                );
                GeneratorConfig::default()
            }
        }
    }

    pub fn spec_path(&self) -> PathBuf {
        PathBuf::from(&self.spec_path)
    }

    pub fn assets_path(&self) -> PathBuf {
        PathBuf::from(&self.assets_path)
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_path)
    }
}

mod yaml {
    use std::error::Error;
    use std::path::PathBuf;

    use confik::Source;
    use serde::de::DeserializeOwned;

    #[derive(Debug)]
    pub struct YamlFileSource {
        path: PathBuf,
    }

    impl YamlFileSource {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }
    }

    impl<T> Source<T> for YamlFileSource
    where
        T: DeserializeOwned + confik::ConfigurationBuilder,
    {
        fn allows_secrets(&self) -> bool {
            false
        }

        fn provide(&self) -> Result<T, Box<dyn Error + Sync + Send>> {
            let contents = std::fs::read_to_string(&self.path)?;
            let parsed = serde_yaml::from_str(&contents)?;
            Ok(parsed)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn yaml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "spec_path: spec/emoji-test.txt\nassets_path: spec/assets.json\noutput_path: out/emojis.json\nassets_version: \"7.0\"\nspec_version: \"15.0\"\nmax_suggest_version: 14.0"
        )
        .unwrap();

        let config = GeneratorConfig::load_from(file.path());
        assert_eq!(config.spec_path, "spec/emoji-test.txt");
        assert_eq!(config.output_path(), PathBuf::from("out/emojis.json"));
        assert_eq!(config.assets_version, "7.0");
        assert_eq!(config.max_suggest_version, 14.0);
    }

    #[test]
    fn broken_yaml_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "spec_path: [unterminated").unwrap();

        assert_eq!(GeneratorConfig::load_from(file.path()), GeneratorConfig::default());
    }
}
