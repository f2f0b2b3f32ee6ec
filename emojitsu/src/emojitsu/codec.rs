const ZERO_WIDTH_JOINER: u32 = 0x200d;
const VARIATION_SELECTOR: u32 = 0xfe0f;

/// Lowercase hex for every code point in `text`, padded to four digits and
/// joined with `-` (`"#\u{fe0f}\u{20e3}"` becomes `"0023-fe0f-20e3"`).
pub fn text_to_hex(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:04x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

/// Inverse of [`text_to_hex`]. Returns `None` when a group is not hex or not
/// a unicode scalar value.
pub fn hex_to_text(hex: &str) -> Option<String> {
    if hex.is_empty() {
        return Some(String::new());
    }

    hex.split('-')
        .map(|group| parse_group(group).and_then(char::from_u32))
        .collect()
}

/// Identifier used for lookups and image file names.
///
/// Groups are normalized to padded lowercase hex and the joiner / variation
/// selector groups are dropped, so every qualified spelling of an emoji
/// collapses onto the same id.
pub fn hex_to_id(hex: &str) -> String {
    hex.split('-')
        .filter_map(|group| match parse_group(group) {
            Some(ZERO_WIDTH_JOINER | VARIATION_SELECTOR) => None,
            Some(cp) => Some(format!("{cp:04x}")),
            None => Some(group.trim().to_ascii_lowercase()),
        })
        .collect::<Vec<_>>()
        .join("-")
}

pub fn text_to_id(text: &str) -> String {
    text.chars()
        .map(|c| c as u32)
        .filter(|cp| !matches!(*cp, ZERO_WIDTH_JOINER | VARIATION_SELECTOR))
        .map(|cp| format!("{cp:04x}"))
        .collect::<Vec<_>>()
        .join("-")
}

/// Normalize spaced or mixed-case code point lists (`"1F468 200D"`) to the
/// dash-joined form.
pub fn normalize_hex(raw: &str) -> Option<String> {
    raw.split(|c: char| c == '-' || c.is_whitespace())
        .filter(|group| !group.is_empty())
        .map(|group| parse_group(group).map(|cp| format!("{cp:04x}")))
        .collect::<Option<Vec<_>>>()
        .filter(|groups| !groups.is_empty())
        .map(|groups| groups.join("-"))
}

pub fn is_valid_hex(hex: &str) -> bool {
    !hex.is_empty() && hex_to_text(hex).is_some()
}

fn parse_group(group: &str) -> Option<u32> {
    let group = group.trim();
    if group.is_empty() || group.len() > 8 {
        return None;
    }
    u32::from_str_radix(group, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_to_hex_pads_and_splits_supplementary_planes() {
        assert_eq!(text_to_hex("#\u{fe0f}\u{20e3}"), "0023-fe0f-20e3");
        assert_eq!(text_to_hex("\u{1f468}\u{1f3ff}"), "1f468-1f3ff");
        assert_eq!(text_to_hex(""), "");
    }

    #[test]
    fn hex_to_text_inverts_text_to_hex() {
        let pilot = "\u{1f468}\u{1f3ff}\u{200d}\u{2708}\u{fe0f}";
        assert_eq!(hex_to_text(&text_to_hex(pilot)).as_deref(), Some(pilot));
        assert_eq!(hex_to_text("1F34C").as_deref(), Some("\u{1f34c}"));
    }

    #[test]
    fn hex_to_text_rejects_garbage() {
        assert_eq!(hex_to_text("zz"), None);
        assert_eq!(hex_to_text("d800"), None);
        assert_eq!(hex_to_text("1f34c--1f34c"), None);
    }

    #[test]
    fn ids_drop_joiners_and_selectors() {
        assert_eq!(hex_to_id("1f468-1f3ff-200d-2708-fe0f"), "1f468-1f3ff-2708");
        assert_eq!(hex_to_id("1F468-1F3FF-200D-2708"), "1f468-1f3ff-2708");
        assert_eq!(hex_to_id("23-fe0f-20e3"), "0023-20e3");
        assert_eq!(
            text_to_id("\u{1f469}\u{200d}\u{1f469}\u{200d}\u{1f466}"),
            "1f469-1f469-1f466"
        );
        assert_eq!(text_to_id("\u{2b06}\u{fe0f}"), text_to_id("\u{2b06}"));
    }

    #[test]
    fn normalize_hex_accepts_spaced_lists() {
        assert_eq!(
            normalize_hex("1F469 200D 1F469").as_deref(),
            Some("1f469-200d-1f469")
        );
        assert_eq!(normalize_hex("  "), None);
        assert_eq!(normalize_hex("1F469 XYZ"), None);
    }
}
