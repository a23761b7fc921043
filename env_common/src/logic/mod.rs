mod api_item;
mod api_store;
mod sync;

#[cfg(test)]
pub(crate) mod test_support;

pub use api_item::{delete_item, get_item, list_items, put_item};

pub use api_store::{create_store, delete_store, describe_store, import_source, list_stores};

pub use sync::{
    apply_sync, load_desired_items, plan_sync, sync_items, SyncOutcome, SyncPhase, SyncPlan,
    SyncRequest,
};
