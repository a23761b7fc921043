use aws_sdk_s3::Client;
use kvs_defs::KvsError;
use log::debug;

use crate::utils::fetch_error;

pub async fn get_object(client: &Client, bucket: &str, key: &str) -> Result<Vec<u8>, KvsError> {
    let what = format!("s3://{}/{}", bucket, key);
    let out = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| fetch_error(&what, e))?;

    let data = out
        .body
        .collect()
        .await
        .map_err(|e| fetch_error(&what, e))?
        .into_bytes();

    debug!("Read {} bytes from {}", data.len(), what);
    Ok(data.to_vec())
}
