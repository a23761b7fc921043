use async_trait::async_trait;

use crate::{
    ImportSource, Item, ItemList, KeyValueStore, KeyValueStoreFull, KvsError, StoreSummary,
};

/// Remote key value store service.
///
/// Writes take the store's current ETag and are rejected with
/// [`KvsError::PreconditionFailed`] when the store changed after it was read.
#[async_trait]
pub trait KeyValueStoreProvider: Send + Sync {
    // Stores
    async fn list_stores(&self) -> Result<Vec<KeyValueStore>, KvsError>;
    async fn create_store(
        &self,
        name: &str,
        comment: &str,
        source: Option<ImportSource>,
    ) -> Result<KeyValueStore, KvsError>;
    async fn describe_store(&self, name: &str) -> Result<KeyValueStoreFull, KvsError>;
    async fn get_store_etag(&self, name: &str) -> Result<String, KvsError>;
    async fn delete_store(&self, name: &str, etag: &str) -> Result<(), KvsError>;
    async fn get_store_arn(&self, name: &str) -> Result<String, KvsError>;

    // Items
    async fn list_items(&self, kvs_arn: &str) -> Result<ItemList, KvsError>;
    async fn get_item(&self, kvs_arn: &str, key: &str) -> Result<Item, KvsError>;
    async fn get_etag(&self, kvs_arn: &str) -> Result<String, KvsError>;
    async fn put_item(
        &self,
        kvs_arn: &str,
        item: &Item,
        etag: &str,
    ) -> Result<StoreSummary, KvsError>;
    async fn delete_item(
        &self,
        kvs_arn: &str,
        key: &str,
        etag: &str,
    ) -> Result<StoreSummary, KvsError>;
    /// Applies all puts and deletes atomically, or none of them.
    async fn apply_batch(
        &self,
        kvs_arn: &str,
        puts: &[Item],
        deletes: &[String],
        etag: &str,
    ) -> Result<StoreSummary, KvsError>;
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, KvsError>;
}
