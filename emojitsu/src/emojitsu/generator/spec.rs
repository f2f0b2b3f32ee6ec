use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::emojitsu::codec;

static ENTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<points>[0-9A-Fa-f]{4,6}(?:\s+[0-9A-Fa-f]{4,6})*)\s*;\s*(?P<status>[a-z-]+)\s*#\s*\S+\s+E\d+\.\d+\s+(?P<name>.+)$",
    )
    .expect("emoji-test entry regex")
});

static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#\s*Version:\s*(\S+)").expect("emoji-test version regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecParseError {
    #[error("line {line}: unrecognised entry '{content}'")]
    Malformed { line: usize, content: String },

    #[error("line {line}: unknown qualification status '{status}'")]
    UnknownStatus { line: usize, status: String },

    #[error("emoji spec contains no entries")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualification {
    Component,
    FullyQualified,
    MinimallyQualified,
    Unqualified,
}

impl FromStr for Qualification {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "component" => Ok(Self::Component),
            "fully-qualified" => Ok(Self::FullyQualified),
            "minimally-qualified" => Ok(Self::MinimallyQualified),
            "unqualified" => Ok(Self::Unqualified),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpecEntry {
    /// Dash-joined lowercase hex, joiners and selectors included.
    pub hex: String,
    pub qualified: Qualification,
    pub name: String,
}

/// Parsed Unicode `emoji-test.txt`.
#[derive(Debug, Clone, Default)]
pub struct UnicodeSpec {
    /// Value of the `# Version:` header, if the file has one.
    pub version: Option<String>,
    pub entries: Vec<SpecEntry>,
}

impl UnicodeSpec {
    pub fn parse(input: &str) -> Result<Self, SpecParseError> {
        let mut spec = UnicodeSpec::default();

        for (index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('#') {
                if spec.version.is_none() {
                    if let Some(cap) = VERSION_RE.captures(line) {
                        spec.version = Some(cap[1].to_string());
                    }
                }
                continue;
            }

            let line_no = index + 1;
            let cap = ENTRY_RE
                .captures(line)
                .ok_or_else(|| SpecParseError::Malformed {
                    line: line_no,
                    content: line.to_string(),
                })?;

            let hex = codec::normalize_hex(&cap["points"]).ok_or_else(|| {
                SpecParseError::Malformed {
                    line: line_no,
                    content: line.to_string(),
                }
            })?;
            let qualified = cap["status"].parse().map_err(|_| SpecParseError::UnknownStatus {
                line: line_no,
                status: cap["status"].to_string(),
            })?;

            spec.entries.push(SpecEntry {
                hex,
                qualified,
                name: cap["name"].trim().to_string(),
            });
        }

        if spec.entries.is_empty() {
            return Err(SpecParseError::Empty);
        }

        Ok(spec)
    }
}
