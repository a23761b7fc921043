use std::path::PathBuf;

use crate::{ImportSource, KvsError};

/// Where the desired items for a sync come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DesiredStateSource {
    S3 { bucket: String, key: String },
    File { path: PathBuf },
}

impl DesiredStateSource {
    /// Selects the source from the sync flags. Exactly one of an S3 object
    /// (bucket and object key together) or a local file must be given.
    pub fn from_args(
        bucket: Option<&str>,
        object_key: Option<&str>,
        file: Option<&str>,
    ) -> Result<Self, KvsError> {
        let s3_requested = bucket.is_some() || object_key.is_some();
        match (s3_requested, file) {
            (true, Some(_)) => Err(KvsError::InvalidArguments(
                "specify either bucket and object-key, or file, not both".to_string(),
            )),
            (false, None) => Err(KvsError::InvalidArguments(
                "either bucket and object-key, or file is required".to_string(),
            )),
            (false, Some(path)) => {
                KvsError::ensure_present("file", path)?;
                Ok(DesiredStateSource::File {
                    path: PathBuf::from(path),
                })
            }
            (true, None) => match ImportSource::from_flags(bucket, object_key)? {
                Some(ImportSource { bucket, key }) => Ok(DesiredStateSource::S3 { bucket, key }),
                None => Err(KvsError::InvalidArguments(
                    "either bucket and object-key, or file is required".to_string(),
                )),
            },
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DesiredStateSource::S3 { bucket, key } => format!("s3://{}/{}", bucket, key),
            DesiredStateSource::File { path } => path.display().to_string(),
        }
    }
}
