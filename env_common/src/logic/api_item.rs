use kvs_defs::{Item, ItemList, KeyValueStoreProvider, KvsError, StoreSummary};
use log::{debug, info};

pub async fn list_items<P>(provider: &P, kvs_name: &str) -> Result<ItemList, KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    KvsError::ensure_present("kvs-name", kvs_name)?;

    let kvs_arn = provider.get_store_arn(kvs_name).await?;
    provider.list_items(&kvs_arn).await
}

pub async fn get_item<P>(provider: &P, kvs_name: &str, key: &str) -> Result<Item, KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    KvsError::ensure_present("kvs-name", kvs_name)?;
    KvsError::ensure_present("key", key)?;

    let kvs_arn = provider.get_store_arn(kvs_name).await?;
    provider.get_item(&kvs_arn, key).await
}

/// Creates or overwrites one item. The ETag is read right before the write.
pub async fn put_item<P>(
    provider: &P,
    kvs_name: &str,
    key: &str,
    value: &str,
) -> Result<StoreSummary, KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    KvsError::ensure_present("kvs-name", kvs_name)?;
    KvsError::ensure_present("key", key)?;
    KvsError::ensure_present("value", value)?;

    let kvs_arn = provider.get_store_arn(kvs_name).await?;
    let etag = provider.get_etag(&kvs_arn).await?;
    debug!("Putting item '{}' into {} (etag {})", key, kvs_arn, etag);

    let summary = provider
        .put_item(&kvs_arn, &Item::new(key, value), &etag)
        .await
        .map_err(|e| stale_store(e, kvs_name))?;
    info!("Put item '{}' into {}", key, kvs_name);
    Ok(summary)
}

pub async fn delete_item<P>(provider: &P, kvs_name: &str, key: &str) -> Result<StoreSummary, KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    KvsError::ensure_present("kvs-name", kvs_name)?;
    KvsError::ensure_present("key", key)?;

    let kvs_arn = provider.get_store_arn(kvs_name).await?;
    let etag = provider.get_etag(&kvs_arn).await?;
    debug!("Deleting item '{}' from {} (etag {})", key, kvs_arn, etag);

    let summary = provider
        .delete_item(&kvs_arn, key, &etag)
        .await
        .map_err(|e| stale_store(e, kvs_name))?;
    info!("Deleted item '{}' from {}", key, kvs_name);
    Ok(summary)
}

/// Reports a rejected precondition by store name rather than ARN.
pub(crate) fn stale_store(e: KvsError, kvs_name: &str) -> KvsError {
    match e {
        KvsError::PreconditionFailed(_) => KvsError::PreconditionFailed(kvs_name.to_string()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::test_support::{InMemoryStore, MockProvider};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    const ARN: &str = "arn:aws:cloudfront::123456789012:key-value-store/abc";

    fn provider_with_arn() -> MockProvider {
        let mut provider = MockProvider::new();
        provider
            .expect_get_store_arn()
            .with(eq("my-kvs"))
            .returning(|_| Ok(ARN.to_string()));
        provider
    }

    #[tokio::test]
    async fn test_list_items() {
        let mut provider = provider_with_arn();
        provider
            .expect_list_items()
            .with(eq(ARN))
            .times(1)
            .returning(|_| Ok(ItemList::new(vec![Item::new("k1", "v1")])));

        let items = list_items(&provider, "my-kvs").await.unwrap();
        assert_eq!(items.to_vec(), vec![Item::new("k1", "v1")]);
    }

    #[tokio::test]
    async fn test_list_items_requires_name() {
        let provider = MockProvider::new();
        let err = list_items(&provider, "").await.unwrap_err();
        assert_eq!(err.to_string(), "kvs-name is required");
    }

    #[tokio::test]
    async fn test_list_items_unknown_store() {
        let mut provider = MockProvider::new();
        provider
            .expect_get_store_arn()
            .returning(|name| Err(KvsError::StoreNotFound(name.to_string())));

        let err = list_items(&provider, "missing").await.unwrap_err();
        assert!(matches!(err, KvsError::StoreNotFound(_)));
    }

    #[tokio::test]
    async fn test_get_item() {
        let mut provider = provider_with_arn();
        provider
            .expect_get_item()
            .with(eq(ARN), eq("k1"))
            .returning(|_, key| Ok(Item::new(key, "v1")));

        let item = get_item(&provider, "my-kvs", "k1").await.unwrap();
        assert_eq!(item, Item::new("k1", "v1"));
    }

    #[tokio::test]
    async fn test_get_item_requires_key() {
        let provider = MockProvider::new();
        let err = get_item(&provider, "my-kvs", "").await.unwrap_err();
        assert_eq!(err.to_string(), "key is required");
    }

    #[tokio::test]
    async fn test_put_item_uses_fresh_etag() {
        let mut provider = provider_with_arn();
        provider
            .expect_get_etag()
            .with(eq(ARN))
            .times(1)
            .returning(|_| Ok("etag-1".to_string()));
        provider
            .expect_put_item()
            .with(eq(ARN), eq(Item::new("k1", "v1")), eq("etag-1"))
            .times(1)
            .returning(|_, _, _| {
                Ok(StoreSummary {
                    item_count: 1,
                    total_size_in_bytes: 4,
                })
            });

        let summary = put_item(&provider, "my-kvs", "k1", "v1").await.unwrap();
        assert_eq!(
            summary,
            StoreSummary {
                item_count: 1,
                total_size_in_bytes: 4
            }
        );
    }

    #[tokio::test]
    async fn test_put_item_validation_happens_before_io() {
        let provider = MockProvider::new();

        for (name, key, value, field) in [
            ("", "k", "v", "kvs-name"),
            ("my-kvs", "", "v", "key"),
            ("my-kvs", "k", "", "value"),
        ] {
            let err = put_item(&provider, name, key, value).await.unwrap_err();
            assert_eq!(err.to_string(), format!("{} is required", field));
        }
    }

    #[tokio::test]
    async fn test_put_item_etag_failure_skips_write() {
        let mut provider = provider_with_arn();
        provider
            .expect_get_etag()
            .returning(|_| Err(KvsError::Fetch("key value store description".to_string())));
        provider.expect_put_item().never();

        let err = put_item(&provider, "my-kvs", "k1", "v1").await.unwrap_err();
        assert!(matches!(err, KvsError::Fetch(_)));
    }

    #[tokio::test]
    async fn test_delete_item_conflict_names_store() {
        let mut provider = provider_with_arn();
        provider
            .expect_get_etag()
            .returning(|_| Ok("etag-1".to_string()));
        provider
            .expect_delete_item()
            .with(eq(ARN), eq("k1"), eq("etag-1"))
            .returning(|arn, _, _| Err(KvsError::PreconditionFailed(arn.to_string())));

        let err = delete_item(&provider, "my-kvs", "k1").await.unwrap_err();
        assert!(matches!(err, KvsError::PreconditionFailed(ref name) if name == "my-kvs"));
    }

    #[tokio::test]
    async fn test_put_then_delete_against_store() {
        let store = InMemoryStore::new(vec![Item::new("k1", "v1")]);

        let summary = put_item(&store, InMemoryStore::NAME, "k2", "v2").await.unwrap();
        assert_eq!(summary.item_count, 2);

        let summary = put_item(&store, InMemoryStore::NAME, "k1", "v1-new").await.unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(
            get_item(&store, InMemoryStore::NAME, "k1").await.unwrap(),
            Item::new("k1", "v1-new")
        );

        let summary = delete_item(&store, InMemoryStore::NAME, "k2").await.unwrap();
        assert_eq!(summary.item_count, 1);
        assert_eq!(
            list_items(&store, InMemoryStore::NAME).await.unwrap().to_vec(),
            vec![Item::new("k1", "v1-new")]
        );
        assert_eq!(store.writes(), 3);
    }
}
