use std::path::Path;

use kvs_defs::{KeyValueStoreData, KvsError};

/// Reads the desired items of a store from a local JSON file.
pub fn read_key_value_store_data(path: &Path) -> Result<KeyValueStoreData, KvsError> {
    if !path.exists() {
        return Err(KvsError::Fetch(format!(
            "key value store data: file not found: {}",
            path.display()
        )));
    }

    let bytes = std::fs::read(path).map_err(|e| {
        KvsError::Fetch(format!(
            "key value store data from {}: {}",
            path.display(),
            e
        ))
    })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    KeyValueStoreData::from_bytes(&bytes)
}
