mod diff;
mod document;
mod errors;
mod item;
mod provider;
mod source;
mod store;

pub use diff::{ItemAddition, ItemChange, ItemListDiff, ItemRemoval};
pub use document::KeyValueStoreData;
pub use errors::KvsError;
pub use item::{Item, ItemList};
pub use provider::{KeyValueStoreProvider, ObjectStore};
pub use source::DesiredStateSource;
pub use store::{ImportSource, KeyValueStore, KeyValueStoreFull, StoreSummary};
