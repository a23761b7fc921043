use kvs_defs::{ImportSource, KeyValueStore, KeyValueStoreFull, KeyValueStoreProvider, KvsError};
use log::info;

use super::api_item::stale_store;

pub async fn list_stores<P>(provider: &P) -> Result<Vec<KeyValueStore>, KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    provider.list_stores().await
}

/// Picks the S3 object to import from. Bucket and object key go together.
pub fn import_source(
    bucket: Option<&str>,
    object_key: Option<&str>,
) -> Result<Option<ImportSource>, KvsError> {
    ImportSource::from_flags(bucket, object_key)
}

pub async fn create_store<P>(
    provider: &P,
    name: &str,
    comment: &str,
    bucket: Option<&str>,
    object_key: Option<&str>,
) -> Result<KeyValueStore, KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    KvsError::ensure_present("name", name)?;
    let source = import_source(bucket, object_key)?;

    let kvs = provider.create_store(name, comment, source).await?;
    info!("Created key value store {} ({})", kvs.name, kvs.arn);
    Ok(kvs)
}

pub async fn describe_store<P>(provider: &P, name: &str) -> Result<KeyValueStoreFull, KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    KvsError::ensure_present("name", name)?;
    provider.describe_store(name).await
}

/// Deletes a store, guarded by the ETag read right before the delete.
pub async fn delete_store<P>(provider: &P, name: &str) -> Result<(), KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    KvsError::ensure_present("name", name)?;

    let etag = provider.get_store_etag(name).await?;
    provider
        .delete_store(name, &etag)
        .await
        .map_err(|e| stale_store(e, name))?;
    info!("Deleted key value store {}", name);
    Ok(())
}
