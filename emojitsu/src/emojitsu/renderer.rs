use serde::{Deserialize, Serialize};

use crate::emojitsu::codec;

/// Root of the bundled image assets.
pub const IMAGE_BASE_PATH: &str = "/images/emojis";

/// Pixel sizes published for the bundled assets.
pub const AVAILABLE_SIZES: [u32; 3] = [32, 64, 128];

pub const DEFAULT_SIZE: u32 = 64;

fn default_size() -> u32 {
    DEFAULT_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Image size when the bundled assets are used. Unsupported values fall
    /// back to [`DEFAULT_SIZE`].
    #[serde(default = "default_size")]
    pub size: u32,
    /// CSS class for emitted image tags.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Skip HTML escaping of the surrounding text.
    #[serde(default, rename = "unsafe")]
    pub unsafe_html: bool,
    /// Treat the whole input as exactly one emoji and skip scanning.
    #[serde(default)]
    pub single: bool,
    /// Parent path for images, replacing the bundled location.
    #[serde(default)]
    pub cdn: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            class_name: None,
            unsafe_html: false,
            single: false,
            cdn: None,
        }
    }
}

impl RenderOptions {
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_cdn(mut self, cdn: impl Into<String>) -> Self {
        self.cdn = Some(cdn.into());
        self
    }

    pub fn unsafe_html(mut self, unsafe_html: bool) -> Self {
        self.unsafe_html = unsafe_html;
        self
    }

    pub fn single(mut self, single: bool) -> Self {
        self.single = single;
        self
    }

    fn image_size(&self) -> u32 {
        if AVAILABLE_SIZES.contains(&self.size) {
            self.size
        } else {
            DEFAULT_SIZE
        }
    }
}

/// `{cdn}/{id}.png`, or `{base}/{assets_version}/{size}/{id}.png` without a CDN.
pub fn image_src(id: &str, assets_version: &str, options: &RenderOptions) -> String {
    match options.cdn.as_deref().filter(|cdn| !cdn.is_empty()) {
        Some(cdn) => format!("{cdn}/{id}.png"),
        None => format!(
            "{IMAGE_BASE_PATH}/{assets_version}/{}/{id}.png",
            options.image_size()
        ),
    }
}

/// Image tag for the emoji spelled by `hex`.
pub fn image_tag(hex: &str, assets_version: &str, options: &RenderOptions) -> String {
    let id = codec::hex_to_id(hex);
    let src = image_src(&id, assets_version, options);
    let alt = codec::hex_to_text(hex).unwrap_or_default();

    let mut props = format!(r#"draggable="false" data-emoji="{id}""#);
    if let Some(class) = options.class_name.as_deref().filter(|c| !c.is_empty()) {
        props.push_str(&format!(r#" class="{class}""#));
    }

    format!(r#"<img src="{src}" alt="{alt}" {props} />"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_src_honours_size_whitelist() {
        let opts = RenderOptions::default();
        assert_eq!(image_src("1f34c", "6.6", &opts), "/images/emojis/6.6/64/1f34c.png");
        assert_eq!(
            image_src("1f34c", "6.6", &opts.clone().with_size(128)),
            "/images/emojis/6.6/128/1f34c.png"
        );
        assert_eq!(
            image_src("1f34c", "6.6", &opts.with_size(999_999)),
            "/images/emojis/6.6/64/1f34c.png"
        );
    }

    #[test]
    fn image_src_uses_cdn_verbatim() {
        let opts = RenderOptions::default().with_cdn("http://maxcdn.com/1024");
        assert_eq!(image_src("1f34c", "6.6", &opts), "http://maxcdn.com/1024/1f34c.png");
    }

    #[test]
    fn image_tag_layout() {
        let tag = image_tag("1f468-1f3ff-200d-2708-fe0f", "6.6", &RenderOptions::default());
        assert_eq!(
            tag,
            "<img src=\"/images/emojis/6.6/64/1f468-1f3ff-2708.png\" alt=\"\u{1f468}\u{1f3ff}\u{200d}\u{2708}\u{fe0f}\" draggable=\"false\" data-emoji=\"1f468-1f3ff-2708\" />"
        );

        let classy = image_tag(
            "1f34c",
            "6.6",
            &RenderOptions::default().with_class_name("bruv"),
        );
        assert!(classy.starts_with("<img"));
        assert!(classy.ends_with(r#" class="bruv" />"#));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: RenderOptions = serde_json::from_str(r#"{"className": "e", "unsafe": true}"#).unwrap();
        assert_eq!(opts.size, DEFAULT_SIZE);
        assert_eq!(opts.class_name.as_deref(), Some("e"));
        assert!(opts.unsafe_html);
        assert!(!opts.single);
    }
}
