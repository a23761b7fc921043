use thiserror::Error;

#[derive(Error, Debug)]
pub enum KvsError {
    #[error("{0} is required")]
    Validation(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Invalid configuration file {0}: {1}")]
    InvalidConfig(String, String),

    #[error("Invalid key value store data: {0}")]
    InvalidDocument(String),

    #[error("Item #{0} in key value store data has an empty key")]
    EmptyKey(usize),

    #[error("Item '{0}' in key value store data has an empty value")]
    EmptyValue(String),

    #[error("Key '{0}' appears more than once in key value store data")]
    DuplicateKey(String),

    #[error("The key value store '{0}' is not found")]
    StoreNotFound(String),

    #[error("Failed to fetch {0}")]
    Fetch(String),

    #[error("The key value store '{0}' was modified after it was read, please run the command again")]
    PreconditionFailed(String),

    #[error("Unsupported output: {0}")]
    UnsupportedOutput(String),

    #[error("Other error occurred: {0}")]
    Other(#[from] anyhow::Error),
}

impl KvsError {
    pub fn required(field: &str) -> Self {
        KvsError::Validation(field.to_string())
    }

    /// Rejects an empty flag value before any remote call is made.
    pub fn ensure_present(field: &str, value: &str) -> Result<(), KvsError> {
        if value.is_empty() {
            return Err(KvsError::required(field));
        }
        Ok(())
    }
}
