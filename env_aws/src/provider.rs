use async_trait::async_trait;
use kvs_defs::{
    ImportSource, Item, ItemList, KeyValueStore, KeyValueStoreFull, KeyValueStoreProvider,
    KvsError, ObjectStore, StoreSummary,
};

use crate::utils::{load_sdk_config, to_chrono};
use crate::{cloudfront, keyvaluestore, s3};

/// CloudFront KeyValueStore backed by the AWS SDK, with S3 as the object store.
#[derive(Clone)]
pub struct AwsKeyValueStoreProvider {
    pub region: String,
    cloudfront: aws_sdk_cloudfront::Client,
    kvs: aws_sdk_cloudfrontkeyvaluestore::Client,
    s3: aws_sdk_s3::Client,
}

impl AwsKeyValueStoreProvider {
    pub async fn new(region: Option<&str>) -> Self {
        let config = load_sdk_config(region).await;
        let region = config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_default();
        log::debug!("Using region: {}", region);

        AwsKeyValueStoreProvider {
            region,
            cloudfront: aws_sdk_cloudfront::Client::new(&config),
            kvs: aws_sdk_cloudfrontkeyvaluestore::Client::new(&config),
            s3: aws_sdk_s3::Client::new(&config),
        }
    }
}

#[async_trait]
impl KeyValueStoreProvider for AwsKeyValueStoreProvider {
    async fn list_stores(&self) -> Result<Vec<KeyValueStore>, KvsError> {
        cloudfront::list_key_value_stores(&self.cloudfront).await
    }

    async fn create_store(
        &self,
        name: &str,
        comment: &str,
        source: Option<ImportSource>,
    ) -> Result<KeyValueStore, KvsError> {
        cloudfront::create_key_value_store(&self.cloudfront, name, comment, source).await
    }

    async fn describe_store(&self, name: &str) -> Result<KeyValueStoreFull, KvsError> {
        let (kvs, _) = cloudfront::describe_key_value_store(&self.cloudfront, name).await?;
        let details = keyvaluestore::describe(&self.kvs, kvs.arn()).await?;

        Ok(KeyValueStoreFull {
            id: kvs.id().to_string(),
            arn: kvs.arn().to_string(),
            name: kvs.name().to_string(),
            comment: kvs.comment().to_string(),
            status: kvs.status().unwrap_or_default().to_string(),
            item_count: details.item_count(),
            total_size_in_bytes: details.total_size_in_bytes(),
            created: to_chrono(details.created()),
            last_modified: details.last_modified().map(to_chrono),
            failure_reason: details.failure_reason().unwrap_or_default().to_string(),
            etag: details.e_tag().to_string(),
        })
    }

    async fn get_store_etag(&self, name: &str) -> Result<String, KvsError> {
        let (_, etag) = cloudfront::describe_key_value_store(&self.cloudfront, name).await?;
        Ok(etag)
    }

    async fn delete_store(&self, name: &str, etag: &str) -> Result<(), KvsError> {
        cloudfront::delete_key_value_store(&self.cloudfront, name, etag).await
    }

    async fn get_store_arn(&self, name: &str) -> Result<String, KvsError> {
        cloudfront::get_key_value_store_arn(&self.cloudfront, name).await
    }

    async fn list_items(&self, kvs_arn: &str) -> Result<ItemList, KvsError> {
        keyvaluestore::list_items(&self.kvs, kvs_arn).await
    }

    async fn get_item(&self, kvs_arn: &str, key: &str) -> Result<Item, KvsError> {
        keyvaluestore::get_item(&self.kvs, kvs_arn, key).await
    }

    async fn get_etag(&self, kvs_arn: &str) -> Result<String, KvsError> {
        keyvaluestore::get_etag(&self.kvs, kvs_arn).await
    }

    async fn put_item(
        &self,
        kvs_arn: &str,
        item: &Item,
        etag: &str,
    ) -> Result<StoreSummary, KvsError> {
        keyvaluestore::put_item(&self.kvs, kvs_arn, item, etag).await
    }

    async fn delete_item(
        &self,
        kvs_arn: &str,
        key: &str,
        etag: &str,
    ) -> Result<StoreSummary, KvsError> {
        keyvaluestore::delete_item(&self.kvs, kvs_arn, key, etag).await
    }

    async fn apply_batch(
        &self,
        kvs_arn: &str,
        puts: &[Item],
        deletes: &[String],
        etag: &str,
    ) -> Result<StoreSummary, KvsError> {
        keyvaluestore::update_keys(&self.kvs, kvs_arn, puts, deletes, etag).await
    }
}

#[async_trait]
impl ObjectStore for AwsKeyValueStoreProvider {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, KvsError> {
        s3::get_object(&self.s3, bucket, key).await
    }
}
