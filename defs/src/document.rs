use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Item, ItemList, KvsError};

/// Desired items of a key value store, as stored in an S3 object or a local file.
///
/// The layout is the one CloudFront accepts as an import source:
/// `{"data": [{"key": "...", "value": "..."}, ...]}`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyValueStoreData {
    pub data: Vec<Item>,
}

impl KeyValueStoreData {
    /// Parses and validates a document. Any invalid entry rejects the whole document.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KvsError> {
        let kvs_data: KeyValueStoreData = serde_json::from_slice(bytes)
            .map_err(|e| KvsError::InvalidDocument(e.to_string()))?;
        kvs_data.validate()?;
        Ok(kvs_data)
    }

    pub fn validate(&self) -> Result<(), KvsError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.data.len());
        for (i, item) in self.data.iter().enumerate() {
            if item.key.is_empty() {
                return Err(KvsError::EmptyKey(i + 1));
            }
            if item.value.is_empty() {
                return Err(KvsError::EmptyValue(item.key.clone()));
            }
            if !seen.insert(item.key.as_str()) {
                return Err(KvsError::DuplicateKey(item.key.clone()));
            }
        }
        Ok(())
    }

    pub fn into_item_list(self) -> ItemList {
        ItemList::new(self.data)
    }
}
