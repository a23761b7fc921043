use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::KvsError;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct KeyValueStore {
    pub id: String,
    pub name: String,
    pub comment: String,
    pub status: String,
    pub arn: String,
}

/// Control plane and data plane description of one store.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyValueStoreFull {
    pub id: String,
    pub arn: String,
    pub name: String,
    pub comment: String,
    pub status: String,
    pub item_count: i32,
    pub total_size_in_bytes: i64,
    pub created: DateTime<Utc>,
    pub last_modified: Option<DateTime<Utc>>,
    pub failure_reason: String,
    pub etag: String,
}

/// Size of a store after a write.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    pub item_count: i32,
    #[serde(rename = "totalSize")]
    pub total_size_in_bytes: i64,
}

/// S3 object to seed a new store with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportSource {
    pub bucket: String,
    pub key: String,
}

impl ImportSource {
    /// Pairs the bucket and object key flags. Giving either flag requires both to
    /// be non-empty; giving neither means there is no S3 object.
    pub fn from_flags(
        bucket: Option<&str>,
        object_key: Option<&str>,
    ) -> Result<Option<Self>, KvsError> {
        if bucket.is_none() && object_key.is_none() {
            return Ok(None);
        }
        let bucket = bucket.unwrap_or_default();
        let key = object_key.unwrap_or_default();
        KvsError::ensure_present("bucket", bucket)?;
        KvsError::ensure_present("object-key", key)?;
        Ok(Some(ImportSource {
            bucket: bucket.to_string(),
            key: key.to_string(),
        }))
    }

    pub fn arn(&self) -> String {
        format!("arn:aws:s3:::{}/{}", self.bucket, self.key)
    }
}
