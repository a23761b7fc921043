use kvs_common::logic::{
    delete_item, get_item, list_items, put_item, sync_items, SyncOutcome, SyncRequest,
};
use kvs_defs::{DesiredStateSource, KeyValueStoreProvider, KvsError, ObjectStore};

use crate::output::{Printer, Renderable};

pub async fn handle_list<P>(
    provider: &P,
    kvs_name: &str,
    printer: &mut Printer<'_>,
) -> Result<(), KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    let items = list_items(provider, kvs_name).await?;
    printer.render(&Renderable::ItemList(&items))
}

pub async fn handle_get<P>(
    provider: &P,
    kvs_name: &str,
    key: &str,
    printer: &mut Printer<'_>,
) -> Result<(), KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    let item = get_item(provider, kvs_name, key).await?;
    printer.render(&Renderable::Item(&item))
}

pub async fn handle_put<P>(
    provider: &P,
    kvs_name: &str,
    key: &str,
    value: &str,
    printer: &mut Printer<'_>,
) -> Result<(), KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    let summary = put_item(provider, kvs_name, key, value).await?;
    printer.render(&Renderable::StoreSummary(&summary))
}

pub async fn handle_delete<P>(
    provider: &P,
    kvs_name: &str,
    key: &str,
    printer: &mut Printer<'_>,
) -> Result<(), KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    let summary = delete_item(provider, kvs_name, key).await?;
    printer.render(&Renderable::StoreSummary(&summary))
}

pub struct SyncArgs<'a> {
    pub kvs_name: &'a str,
    pub bucket: Option<&'a str>,
    pub object_key: Option<&'a str>,
    pub file: Option<&'a str>,
    pub delete: bool,
    pub yes: bool,
}

/// Shows the diff between the store and the source, and applies it when `yes` is set.
pub async fn handle_sync<P>(
    provider: &P,
    args: SyncArgs<'_>,
    printer: &mut Printer<'_>,
) -> Result<(), KvsError>
where
    P: KeyValueStoreProvider + ObjectStore + ?Sized,
{
    let source = DesiredStateSource::from_args(args.bucket, args.object_key, args.file)?;
    let request = SyncRequest {
        kvs_name: args.kvs_name.to_string(),
        source,
        delete: args.delete,
        yes: args.yes,
    };

    let outcome = sync_items(provider, provider, &request, |diff| {
        printer.render(&Renderable::Diff(diff))
    })
    .await?;

    match outcome {
        SyncOutcome::DryRun => {
            printer.notice("\nDry run, nothing was changed. Run again with --yes to sync.")
        }
        SyncOutcome::NothingToApply => {
            printer.notice("\nKey value store is already in sync, nothing to apply.")
        }
        SyncOutcome::Applied(summary) => {
            printer.notice("\nSync completed.")?;
            printer.render_after(&Renderable::StoreSummary(&summary))
        }
    }
}
