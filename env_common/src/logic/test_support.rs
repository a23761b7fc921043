use std::sync::{Mutex, Once};

use async_trait::async_trait;
use kvs_defs::{
    ImportSource, Item, ItemList, KeyValueStore, KeyValueStoreFull, KeyValueStoreProvider,
    KvsError, ObjectStore, StoreSummary,
};
use log::{Level, LevelFilter, Log, Metadata, Record};
use mockall::mock;

mock! {
    pub Provider {}

    #[async_trait]
    impl KeyValueStoreProvider for Provider {
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
        async fn apply_batch(
            &self,
            kvs_arn: &str,
            puts: &[Item],
            deletes: &[String],
            etag: &str,
        ) -> Result<StoreSummary, KvsError>;
    }
}

mock! {
    pub Objects {}

    #[async_trait]
    impl ObjectStore for Objects {
        async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, KvsError>;
    }
}

struct State {
    items: ItemList,
    version: u64,
    writes: usize,
}

/// A single store held in memory. Every write bumps the ETag and writes made
/// with an old ETag are rejected, like the real service does.
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub const NAME: &'static str = "in-memory";
    pub const ARN: &'static str = "arn:aws:cloudfront::000000000000:key-value-store/in-memory";

    pub fn new(items: Vec<Item>) -> Self {
        InMemoryStore {
            state: Mutex::new(State {
                items: ItemList::new(items),
                version: 1,
                writes: 0,
            }),
        }
    }

    pub fn items(&self) -> ItemList {
        self.state.lock().unwrap().items.clone()
    }

    /// Number of accepted writes made through the provider.
    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    pub fn current_etag(&self) -> String {
        format!("etag-{}", self.state.lock().unwrap().version)
    }

    pub fn size(&self) -> i64 {
        Self::summary(&self.state.lock().unwrap().items).total_size_in_bytes
    }

    /// A write from someone else, which makes any ETag read before it stale.
    pub fn external_write(&self, item: Item) {
        let mut state = self.state.lock().unwrap();
        state.items.append(item);
        state.version += 1;
    }

    fn summary(items: &ItemList) -> StoreSummary {
        StoreSummary {
            item_count: items.len() as i32,
            total_size_in_bytes: items
                .iter()
                .map(|i| (i.key.len() + i.value.len()) as i64)
                .sum(),
        }
    }

    fn check_arn(kvs_arn: &str) -> Result<(), KvsError> {
        if kvs_arn != Self::ARN {
            return Err(KvsError::StoreNotFound(kvs_arn.to_string()));
        }
        Ok(())
    }

    fn write(&self, puts: &[Item], deletes: &[String], etag: &str) -> Result<StoreSummary, KvsError> {
        let mut state = self.state.lock().unwrap();
        if etag != format!("etag-{}", state.version) {
            return Err(KvsError::PreconditionFailed(Self::ARN.to_string()));
        }
        for item in puts {
            state.items.append(item.clone());
        }
        state.items = state
            .items
            .iter()
            .filter(|i| !deletes.contains(&i.key))
            .cloned()
            .collect();
        state.version += 1;
        state.writes += 1;
        Ok(Self::summary(&state.items))
    }
}

#[async_trait]
impl KeyValueStoreProvider for InMemoryStore {
    async fn list_stores(&self) -> Result<Vec<KeyValueStore>, KvsError> {
        Ok(vec![KeyValueStore {
            id: Self::NAME.to_string(),
            name: Self::NAME.to_string(),
            comment: String::new(),
            status: "READY".to_string(),
            arn: Self::ARN.to_string(),
        }])
    }

    async fn create_store(
        &self,
        name: &str,
        _comment: &str,
        _source: Option<ImportSource>,
    ) -> Result<KeyValueStore, KvsError> {
        Err(KvsError::InvalidArguments(format!(
            "cannot create {} in memory",
            name
        )))
    }

    async fn describe_store(&self, name: &str) -> Result<KeyValueStoreFull, KvsError> {
        Err(KvsError::StoreNotFound(name.to_string()))
    }

    async fn get_store_etag(&self, name: &str) -> Result<String, KvsError> {
        Err(KvsError::StoreNotFound(name.to_string()))
    }

    async fn delete_store(&self, name: &str, _etag: &str) -> Result<(), KvsError> {
        Err(KvsError::StoreNotFound(name.to_string()))
    }

    async fn get_store_arn(&self, name: &str) -> Result<String, KvsError> {
        if name != Self::NAME {
            return Err(KvsError::StoreNotFound(name.to_string()));
        }
        Ok(Self::ARN.to_string())
    }

    async fn list_items(&self, kvs_arn: &str) -> Result<ItemList, KvsError> {
        Self::check_arn(kvs_arn)?;
        Ok(self.items())
    }

    async fn get_item(&self, kvs_arn: &str, key: &str) -> Result<Item, KvsError> {
        Self::check_arn(kvs_arn)?;
        self.items()
            .get(key)
            .cloned()
            .ok_or_else(|| KvsError::Fetch(format!("item '{}'", key)))
    }

    async fn get_etag(&self, kvs_arn: &str) -> Result<String, KvsError> {
        Self::check_arn(kvs_arn)?;
        Ok(self.current_etag())
    }

    async fn put_item(
        &self,
        kvs_arn: &str,
        item: &Item,
        etag: &str,
    ) -> Result<StoreSummary, KvsError> {
        Self::check_arn(kvs_arn)?;
        self.write(std::slice::from_ref(item), &[], etag)
    }

    async fn delete_item(
        &self,
        kvs_arn: &str,
        key: &str,
        etag: &str,
    ) -> Result<StoreSummary, KvsError> {
        Self::check_arn(kvs_arn)?;
        self.write(&[], &[key.to_string()], etag)
    }

    async fn apply_batch(
        &self,
        kvs_arn: &str,
        puts: &[Item],
        deletes: &[String],
        etag: &str,
    ) -> Result<StoreSummary, KvsError> {
        Self::check_arn(kvs_arn)?;
        self.write(puts, deletes, etag)
    }
}

/// Collects every log record of the test process. Tests run in parallel, so
/// callers filter by a store name unique to their test.
struct CapturedLogs {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturedLogs {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURED: CapturedLogs = CapturedLogs {
    records: Mutex::new(Vec::new()),
};

static INSTALL: Once = Once::new();

/// Starts capturing logs if not yet done. Call before the code under test runs.
pub fn capture_logs() {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURED).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

/// Error records logged so far that mention `needle`.
pub fn logged_errors(needle: &str) -> Vec<String> {
    CAPTURED
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, message)| *level == Level::Error && message.contains(needle))
        .map(|(_, message)| message.clone())
        .collect()
}
