use aws_sdk_cloudfrontkeyvaluestore::operation::describe_key_value_store::DescribeKeyValueStoreOutput;
use aws_sdk_cloudfrontkeyvaluestore::types::{DeleteKeyRequestListItem, PutKeyRequestListItem};
use aws_sdk_cloudfrontkeyvaluestore::Client;
use kvs_defs::{Item, ItemList, KvsError, StoreSummary};
use log::debug;

use crate::utils::{fetch_error, write_error};

const LIST_KEYS_PAGE_SIZE: i32 = 50;

/// Every item of the store, following pagination to the end.
pub async fn list_items(client: &Client, kvs_arn: &str) -> Result<ItemList, KvsError> {
    let mut items = ItemList::default();
    let mut next_token: Option<String> = None;

    loop {
        let out = client
            .list_keys()
            .kvs_arn(kvs_arn)
            .max_results(LIST_KEYS_PAGE_SIZE)
            .set_next_token(next_token.take())
            .send()
            .await
            .map_err(|e| fetch_error("items of the key value store", e))?;

        for item in out.items() {
            items.append(Item::new(item.key(), item.value()));
        }

        match out.next_token() {
            Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
            _ => break,
        }
    }

    debug!("Listed {} items in {}", items.len(), kvs_arn);
    Ok(items)
}

pub async fn get_item(client: &Client, kvs_arn: &str, key: &str) -> Result<Item, KvsError> {
    let out = client
        .get_key()
        .kvs_arn(kvs_arn)
        .key(key)
        .send()
        .await
        .map_err(|e| fetch_error(&format!("item '{}'", key), e))?;

    Ok(Item::new(out.key(), out.value()))
}

pub async fn describe(client: &Client, kvs_arn: &str) -> Result<DescribeKeyValueStoreOutput, KvsError> {
    client
        .describe_key_value_store()
        .kvs_arn(kvs_arn)
        .send()
        .await
        .map_err(|e| fetch_error("key value store description", e))
}

/// Current ETag of the store, to be passed as the precondition of the next write.
pub async fn get_etag(client: &Client, kvs_arn: &str) -> Result<String, KvsError> {
    let out = describe(client, kvs_arn).await?;
    Ok(out.e_tag().to_string())
}

pub async fn put_item(
    client: &Client,
    kvs_arn: &str,
    item: &Item,
    etag: &str,
) -> Result<StoreSummary, KvsError> {
    let out = client
        .put_key()
        .kvs_arn(kvs_arn)
        .key(&item.key)
        .value(&item.value)
        .if_match(etag)
        .send()
        .await
        .map_err(|e| {
            if e.as_service_error()
                .map(|se| se.is_conflict_exception())
                .unwrap_or(false)
            {
                KvsError::PreconditionFailed(kvs_arn.to_string())
            } else {
                write_error(&format!("put item '{}'", item.key), e)
            }
        })?;

    Ok(StoreSummary {
        item_count: out.item_count(),
        total_size_in_bytes: out.total_size_in_bytes(),
    })
}

pub async fn delete_item(
    client: &Client,
    kvs_arn: &str,
    key: &str,
    etag: &str,
) -> Result<StoreSummary, KvsError> {
    let out = client
        .delete_key()
        .kvs_arn(kvs_arn)
        .key(key)
        .if_match(etag)
        .send()
        .await
        .map_err(|e| {
            if e.as_service_error()
                .map(|se| se.is_conflict_exception())
                .unwrap_or(false)
            {
                KvsError::PreconditionFailed(kvs_arn.to_string())
            } else {
                write_error(&format!("delete item '{}'", key), e)
            }
        })?;

    Ok(StoreSummary {
        item_count: out.item_count(),
        total_size_in_bytes: out.total_size_in_bytes(),
    })
}

/// Writes puts and deletes in one UpdateKeys call, which the service applies atomically.
pub async fn update_keys(
    client: &Client,
    kvs_arn: &str,
    puts: &[Item],
    deletes: &[String],
    etag: &str,
) -> Result<StoreSummary, KvsError> {
    let put_items = puts
        .iter()
        .map(|item| {
            PutKeyRequestListItem::builder()
                .key(&item.key)
                .value(&item.value)
                .build()
                .map_err(|e| write_error("build put request", e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let delete_items = deletes
        .iter()
        .map(|key| {
            DeleteKeyRequestListItem::builder()
                .key(key)
                .build()
                .map_err(|e| write_error("build delete request", e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "UpdateKeys on {}: {} puts, {} deletes",
        kvs_arn,
        put_items.len(),
        delete_items.len()
    );

    let out = client
        .update_keys()
        .kvs_arn(kvs_arn)
        .if_match(etag)
        .set_puts(Some(put_items))
        .set_deletes(Some(delete_items))
        .send()
        .await
        .map_err(|e| {
            if e.as_service_error()
                .map(|se| se.is_conflict_exception())
                .unwrap_or(false)
            {
                KvsError::PreconditionFailed(kvs_arn.to_string())
            } else {
                write_error("update keys", e)
            }
        })?;

    Ok(StoreSummary {
        item_count: out.item_count(),
        total_size_in_bytes: out.total_size_in_bytes(),
    })
}
