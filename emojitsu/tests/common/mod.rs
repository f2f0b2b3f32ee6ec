#![allow(dead_code)]

use emojitsu::emojitsu::generator::Generator;
use emojitsu::emojitsu::generator::assets::{self, AssetTable};
use emojitsu::emojitsu::generator::spec::UnicodeSpec;
use emojitsu::{Artifact, Emojitsu, GeneratorConfig};

pub const SPEC: &str = include_str!("../fixtures/emoji-test.txt");
pub const ASSETS: &str = include_str!("../fixtures/emoji-assets.json");

pub struct Sample {
    pub shortname: &'static str,
    pub unicode: &'static str,
    pub id: &'static str,
}

pub const BACON: Sample = Sample {
    shortname: ":bacon:",
    unicode: "\u{1f953}",
    id: "1f953",
};

pub const TONED: Sample = Sample {
    shortname: ":thumbsup_tone5:",
    unicode: "\u{1f44d}\u{1f3ff}",
    id: "1f44d-1f3ff",
};

pub const FAMILY: Sample = Sample {
    shortname: ":family_wwb:",
    unicode: "\u{1f469}\u{200d}\u{1f469}\u{200d}\u{1f466}",
    id: "1f469-1f469-1f466",
};

pub const ASTRONAUT: Sample = Sample {
    shortname: ":woman_astronaut_tone3:",
    unicode: "\u{1f469}\u{1f3fd}\u{200d}\u{1f680}",
    id: "1f469-1f3fd-1f680",
};

pub const PILOT: Sample = Sample {
    shortname: ":man_pilot_tone5:",
    unicode: "\u{1f468}\u{1f3ff}\u{200d}\u{2708}\u{fe0f}",
    id: "1f468-1f3ff-2708",
};

pub const ALL: [&Sample; 5] = [&PILOT, &ASTRONAUT, &FAMILY, &TONED, &BACON];

pub fn config() -> GeneratorConfig {
    GeneratorConfig {
        assets_version: "6.6".into(),
        max_suggest_version: 13.0,
        ..GeneratorConfig::default()
    }
}

pub fn spec() -> UnicodeSpec {
    UnicodeSpec::parse(SPEC).expect("fixture spec parses")
}

pub fn assets() -> AssetTable {
    assets::parse(ASSETS).expect("fixture assets parse")
}

pub fn artifact() -> Artifact {
    Generator::new(&config())
        .generate(&spec(), &assets())
        .expect("fixture artifact generates")
}

pub fn engine() -> Emojitsu {
    Emojitsu::from_artifact(artifact()).expect("fixture artifact loads")
}

pub fn img(id: &str, alt: &str) -> String {
    format!(
        r#"<img src="/images/emojis/6.6/64/{id}.png" alt="{alt}" draggable="false" data-emoji="{id}" />"#
    )
}

impl Sample {
    pub fn img(&self) -> String {
        img(self.id, self.unicode)
    }
}
