use std::fmt;

use kvs_defs::{
    DesiredStateSource, ItemList, ItemListDiff, KeyValueStoreData, KeyValueStoreProvider, KvsError,
    ObjectStore, StoreSummary,
};
use kvs_utils::{diff_items, read_key_value_store_data};
use log::{error, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncPhase {
    Fetching,
    Diffing,
    Reviewing,
    Applying,
    Idle,
}

impl fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncPhase::Fetching => "fetching",
            SyncPhase::Diffing => "diffing",
            SyncPhase::Reviewing => "reviewing",
            SyncPhase::Applying => "applying",
            SyncPhase::Idle => "idle",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug)]
pub struct SyncRequest {
    pub kvs_name: String,
    pub source: DesiredStateSource,
    /// Remove items that are missing from the desired items.
    pub delete: bool,
    /// Apply the diff. Without it the sync stops after review.
    pub yes: bool,
}

/// Result of fetching and diffing, before anything is written.
#[derive(Clone, Debug)]
pub struct SyncPlan {
    pub kvs_name: String,
    pub kvs_arn: String,
    pub before: ItemList,
    pub after: ItemList,
    pub diff: ItemListDiff,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    DryRun,
    NothingToApply,
    Applied(StoreSummary),
}

fn enter(phase: SyncPhase, kvs_name: &str) {
    info!("sync {}: {}", kvs_name, phase);
}

fn failed(phase: SyncPhase, kvs_name: &str) -> impl FnOnce(KvsError) -> KvsError + '_ {
    move |e| {
        error!("sync {} failed while {}: {}", kvs_name, phase, e);
        e
    }
}

pub async fn load_desired_items<O>(
    objects: &O,
    source: &DesiredStateSource,
) -> Result<ItemList, KvsError>
where
    O: ObjectStore + ?Sized,
{
    let kvs_data = match source {
        DesiredStateSource::S3 { bucket, key } => {
            let bytes = objects.get_object(bucket, key).await?;
            KeyValueStoreData::from_bytes(&bytes)?
        }
        DesiredStateSource::File { path } => read_key_value_store_data(path)?,
    };
    Ok(kvs_data.into_item_list())
}

/// Fetches the current items, then the desired items, and diffs them.
pub async fn plan_sync<P, O>(
    provider: &P,
    objects: &O,
    kvs_name: &str,
    source: &DesiredStateSource,
    include_deletes: bool,
) -> Result<SyncPlan, KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
    O: ObjectStore + ?Sized,
{
    KvsError::ensure_present("kvs-name", kvs_name)
        .map_err(failed(SyncPhase::Fetching, kvs_name))?;

    enter(SyncPhase::Fetching, kvs_name);
    let kvs_arn = provider
        .get_store_arn(kvs_name)
        .await
        .map_err(failed(SyncPhase::Fetching, kvs_name))?;
    let before = provider
        .list_items(&kvs_arn)
        .await
        .map_err(failed(SyncPhase::Fetching, kvs_name))?;
    let after = load_desired_items(objects, source)
        .await
        .map_err(failed(SyncPhase::Fetching, kvs_name))?;
    info!(
        "{} items in {}, {} items in {}",
        before.len(),
        kvs_name,
        after.len(),
        source.describe()
    );

    enter(SyncPhase::Diffing, kvs_name);
    let diff = diff_items(Some(&before), Some(&after), include_deletes);

    Ok(SyncPlan {
        kvs_name: kvs_name.to_string(),
        kvs_arn,
        before,
        after,
        diff,
    })
}

/// Writes the diff as one conditional batch. The ETag is fetched here, right
/// before the write, never reused from an earlier read.
pub async fn apply_sync<P>(provider: &P, plan: &SyncPlan) -> Result<StoreSummary, KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    enter(SyncPhase::Applying, &plan.kvs_name);
    let puts = plan.diff.put_list();
    let deletes = plan.diff.delete_list();

    let etag = provider
        .get_etag(&plan.kvs_arn)
        .await
        .map_err(failed(SyncPhase::Applying, &plan.kvs_name))?;
    match provider
        .apply_batch(&plan.kvs_arn, &puts, &deletes, &etag)
        .await
    {
        Ok(summary) => {
            info!(
                "Applied {} puts and {} deletes to {}",
                puts.len(),
                deletes.len(),
                plan.kvs_name
            );
            Ok(summary)
        }
        Err(KvsError::PreconditionFailed(_)) => {
            error!("{} changed since it was read, nothing was applied", plan.kvs_name);
            Err(KvsError::PreconditionFailed(plan.kvs_name.clone()))
        }
        Err(e) => Err(failed(SyncPhase::Applying, &plan.kvs_name)(e)),
    }
}

/// Runs a whole sync: fetch, diff, hand the diff to `review`, and apply it only
/// when the request says so. `review` runs on every successful diff, dry run included.
pub async fn sync_items<P, O, F>(
    provider: &P,
    objects: &O,
    request: &SyncRequest,
    review: F,
) -> Result<SyncOutcome, KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
    O: ObjectStore + ?Sized,
    F: FnOnce(&ItemListDiff) -> Result<(), KvsError>,
{
    let plan = plan_sync(
        provider,
        objects,
        &request.kvs_name,
        &request.source,
        request.delete,
    )
    .await?;

    enter(SyncPhase::Reviewing, &request.kvs_name);
    review(&plan.diff)?;

    let outcome = if !request.yes {
        SyncOutcome::DryRun
    } else if plan.diff.is_empty() {
        SyncOutcome::NothingToApply
    } else {
        SyncOutcome::Applied(apply_sync(provider, &plan).await?)
    };

    enter(SyncPhase::Idle, &request.kvs_name);
    Ok(outcome)
}
