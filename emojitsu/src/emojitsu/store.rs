use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::emojitsu::codec;
use crate::emojitsu::types::EmojiRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataIntegrityError {
    #[error("emoji collection is empty")]
    Empty,

    #[error("record #{index} has an empty {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("record {shortname} has malformed hex '{hex}'")]
    MalformedHex { shortname: String, hex: String },

    #[error("shortname {0} is used by more than one record")]
    DuplicateShortname(String),

    #[error("code point key {0} is used by more than one record")]
    DuplicateKey(String),
}

/// Immutable emoji table with its two lookup indices.
#[derive(Debug, Clone)]
pub struct EmojiStore {
    collection: Vec<EmojiRecord>,
    by_id: HashMap<String, usize>,
    by_shortname: HashMap<String, usize>,
}

impl EmojiStore {
    pub fn load(collection: Vec<EmojiRecord>) -> Result<Self, DataIntegrityError> {
        if collection.is_empty() {
            return Err(DataIntegrityError::Empty);
        }

        let mut by_id = HashMap::with_capacity(collection.len());
        let mut by_shortname = HashMap::with_capacity(collection.len());

        for (index, record) in collection.iter().enumerate() {
            if record.hex.trim().is_empty() {
                return Err(DataIntegrityError::MissingField { index, field: "hex" });
            }
            if record.shortname.trim().is_empty() {
                return Err(DataIntegrityError::MissingField {
                    index,
                    field: "shortname",
                });
            }
            if !codec::is_valid_hex(&record.hex) {
                return Err(DataIntegrityError::MalformedHex {
                    shortname: record.shortname.clone(),
                    hex: record.hex.clone(),
                });
            }

            let id = record.id();
            if by_id.insert(id.clone(), index).is_some() {
                return Err(DataIntegrityError::DuplicateKey(id));
            }
            if by_shortname
                .insert(record.shortname.clone(), index)
                .is_some()
            {
                return Err(DataIntegrityError::DuplicateShortname(
                    record.shortname.clone(),
                ));
            }
        }

        debug!("emoji store loaded with {} records", collection.len());

        Ok(Self {
            collection,
            by_id,
            by_shortname,
        })
    }

    /// Look up an emoji by its text, tolerating missing or extra joiners and
    /// variation selectors.
    pub fn by_unicode(&self, text: &str) -> Option<&EmojiRecord> {
        self.get_by_id(&codec::text_to_id(text))
    }

    /// Exact, case-sensitive lookup (`":banana:"`).
    pub fn by_shortname(&self, shortname: &str) -> Option<&EmojiRecord> {
        self.by_shortname
            .get(shortname)
            .map(|&index| &self.collection[index])
    }

    pub fn get_by_id(&self, id: &str) -> Option<&EmojiRecord> {
        self.by_id.get(id).map(|&index| &self.collection[index])
    }

    pub fn collection(&self) -> &[EmojiRecord] {
        &self.collection
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Records flagged for autocompletion, in collection order.
    pub fn suggestions(&self) -> impl Iterator<Item = &EmojiRecord> {
        self.collection.iter().filter(|record| record.suggest)
    }
}
