use kvs_common::logic::{create_store, delete_store, describe_store, list_stores};
use kvs_defs::{KeyValueStoreProvider, KvsError};
use log::info;

use crate::output::{Printer, Renderable};

pub async fn handle_list<P>(provider: &P, printer: &mut Printer<'_>) -> Result<(), KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    let stores = list_stores(provider).await?;
    printer.render(&Renderable::StoreList(&stores))
}

pub async fn handle_create<P>(
    provider: &P,
    name: &str,
    comment: &str,
    bucket: Option<&str>,
    object_key: Option<&str>,
    printer: &mut Printer<'_>,
) -> Result<(), KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    let kvs = create_store(provider, name, comment, bucket, object_key).await?;
    printer.render(&Renderable::Store(&kvs))
}

pub async fn handle_info<P>(
    provider: &P,
    name: &str,
    printer: &mut Printer<'_>,
) -> Result<(), KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    let kvs = describe_store(provider, name).await?;
    printer.render(&Renderable::StoreFull(&kvs))
}

/// Without `yes` the store is only shown.
pub async fn handle_delete<P>(
    provider: &P,
    name: &str,
    yes: bool,
    printer: &mut Printer<'_>,
) -> Result<(), KvsError>
where
    P: KeyValueStoreProvider + ?Sized,
{
    if !yes {
        let kvs = describe_store(provider, name).await?;
        printer.render(&Renderable::StoreFull(&kvs))?;
        return printer.notice(&format!(
            "Key value store '{}' will be deleted. Run again with --yes to delete it.",
            name
        ));
    }

    delete_store(provider, name).await?;
    info!("Key value store {} deleted", name);
    printer.notice(&format!("Key value store '{}' deleted.", name))
}
