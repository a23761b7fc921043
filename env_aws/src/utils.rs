use aws_config::meta::region::RegionProviderChain;
use aws_config::SdkConfig;
use aws_smithy_types::error::display::DisplayErrorContext;
use chrono::{DateTime, Utc};
use kvs_defs::KvsError;

/// Loads the shared SDK configuration. An explicit region wins over the
/// default provider chain (AWS_REGION, profile, instance metadata).
pub async fn load_sdk_config(region: Option<&str>) -> SdkConfig {
    let region_provider = match region {
        Some(region) => RegionProviderChain::first_try(aws_config::Region::new(region.to_string())),
        None => RegionProviderChain::default_provider(),
    };
    aws_config::from_env().region(region_provider).load().await
}

pub fn fetch_error<E: std::error::Error>(what: &str, e: E) -> KvsError {
    KvsError::Fetch(format!("{}: {}", what, DisplayErrorContext(&e)))
}

pub fn write_error<E: std::error::Error>(what: &str, e: E) -> KvsError {
    KvsError::Other(anyhow::anyhow!(
        "Failed to {}: {}",
        what,
        DisplayErrorContext(&e)
    ))
}

pub fn to_chrono(time: &aws_smithy_types::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp(time.secs(), time.subsec_nanos()).unwrap_or_default()
}
