use aws_sdk_cloudfront::types::{ImportSourceType, KeyValueStore as CfKeyValueStore};
use aws_sdk_cloudfront::Client;
use kvs_defs::{ImportSource, KeyValueStore, KvsError};
use log::debug;

use crate::utils::{fetch_error, write_error};

pub fn to_key_value_store(kvs: &CfKeyValueStore) -> KeyValueStore {
    KeyValueStore {
        id: kvs.id().to_string(),
        name: kvs.name().to_string(),
        comment: kvs.comment().to_string(),
        status: kvs.status().unwrap_or_default().to_string(),
        arn: kvs.arn().to_string(),
    }
}

pub async fn list_key_value_stores(client: &Client) -> Result<Vec<KeyValueStore>, KvsError> {
    let mut stores = Vec::new();
    let mut marker: Option<String> = None;

    loop {
        let out = client
            .list_key_value_stores()
            .set_marker(marker.take())
            .send()
            .await
            .map_err(|e| fetch_error("key value stores", e))?;

        let Some(list) = out.key_value_store_list() else {
            break;
        };
        stores.extend(list.items().iter().map(to_key_value_store));

        match list.next_marker() {
            Some(next) if !next.is_empty() => marker = Some(next.to_string()),
            _ => break,
        }
    }

    debug!("Listed {} key value stores", stores.len());
    Ok(stores)
}

pub async fn get_key_value_store_arn(client: &Client, name: &str) -> Result<String, KvsError> {
    list_key_value_stores(client)
        .await?
        .into_iter()
        .find(|kvs| kvs.name == name)
        .map(|kvs| kvs.arn)
        .ok_or_else(|| KvsError::StoreNotFound(name.to_string()))
}

pub async fn create_key_value_store(
    client: &Client,
    name: &str,
    comment: &str,
    source: Option<ImportSource>,
) -> Result<KeyValueStore, KvsError> {
    let import_source = match source {
        Some(source) => Some(
            aws_sdk_cloudfront::types::ImportSource::builder()
                .source_type(ImportSourceType::S3)
                .source_arn(source.arn())
                .build()
                .map_err(|e| write_error("build import source", e))?,
        ),
        None => None,
    };

    let out = client
        .create_key_value_store()
        .name(name)
        .comment(comment)
        .set_import_source(import_source)
        .send()
        .await
        .map_err(|e| write_error("create key value store", e))?;

    out.key_value_store()
        .map(to_key_value_store)
        .ok_or_else(|| KvsError::Other(anyhow::anyhow!("CreateKeyValueStore returned no store")))
}

/// Control plane description and ETag of a store.
pub async fn describe_key_value_store(
    client: &Client,
    name: &str,
) -> Result<(CfKeyValueStore, String), KvsError> {
    let out = client
        .describe_key_value_store()
        .name(name)
        .send()
        .await
        .map_err(|e| {
            if e.as_service_error()
                .map(|se| se.is_entity_not_found())
                .unwrap_or(false)
            {
                KvsError::StoreNotFound(name.to_string())
            } else {
                fetch_error("key value store description", e)
            }
        })?;

    let kvs = out
        .key_value_store()
        .cloned()
        .ok_or_else(|| KvsError::StoreNotFound(name.to_string()))?;
    let etag = out.e_tag().unwrap_or_default().to_string();
    Ok((kvs, etag))
}

pub async fn delete_key_value_store(
    client: &Client,
    name: &str,
    etag: &str,
) -> Result<(), KvsError> {
    client
        .delete_key_value_store()
        .name(name)
        .if_match(etag)
        .send()
        .await
        .map_err(|e| {
            let stale = e
                .as_service_error()
                .map(|se| se.is_precondition_failed() || se.is_invalid_if_match_version())
                .unwrap_or(false);
            if stale {
                KvsError::PreconditionFailed(name.to_string())
            } else {
                write_error("delete key value store", e)
            }
        })?;
    Ok(())
}
