mod cloudfront;
mod keyvaluestore;
mod provider;
mod s3;
mod utils;

pub use provider::AwsKeyValueStoreProvider;
