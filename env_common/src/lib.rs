pub mod logic;

pub use logic::{
    apply_sync, create_store, delete_item, delete_store, describe_store, get_item, import_source,
    list_items, list_stores, load_desired_items, plan_sync, put_item, sync_items, SyncOutcome,
    SyncPhase, SyncPlan, SyncRequest,
};
