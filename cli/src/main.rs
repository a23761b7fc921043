mod cli;
mod commands;
mod config;
mod output;

use std::io::{self, Write};

use anyhow::Result;
use clap::ArgMatches;
use kvs_aws::AwsKeyValueStoreProvider;
use kvs_defs::{KeyValueStoreProvider, KvsError, ObjectStore};
use kvs_utils::setup_logging;
use log::debug;

use crate::cli::build_cli;
use crate::commands::item::SyncArgs;
use crate::commands::{item, store};
use crate::config::{CliConfig, Settings};
use crate::output::Printer;

fn main() {
    let matches = build_cli(env!("APP_VERSION")).get_matches();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(&matches)) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(matches: &ArgMatches) -> Result<()> {
    let config = CliConfig::load()?;
    let settings = Settings::resolve(matches, &config)?;
    if let Err(e) = setup_logging(settings.debug) {
        eprintln!("Failed to set up logging: {}", e);
    }
    debug!("Running with {:?}", settings);

    let provider = AwsKeyValueStoreProvider::new(settings.region.as_deref()).await;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut printer = Printer::new(settings.output, &mut out);
    dispatch(&provider, matches, &mut printer).await?;
    out.flush()?;
    Ok(())
}

fn arg<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    opt_arg(matches, id).unwrap_or_default()
}

fn opt_arg<'a>(matches: &'a ArgMatches, id: &str) -> Option<&'a str> {
    matches.get_one::<String>(id).map(String::as_str)
}

async fn dispatch<P>(
    provider: &P,
    matches: &ArgMatches,
    printer: &mut Printer<'_>,
) -> Result<(), KvsError>
where
    P: KeyValueStoreProvider + ObjectStore,
{
    match matches.subcommand() {
        Some(("kvs", kvs_matches)) => match kvs_matches.subcommand() {
            Some(("list", _)) => store::handle_list(provider, printer).await,
            Some(("create", m)) => {
                store::handle_create(
                    provider,
                    arg(m, "name"),
                    arg(m, "comment"),
                    opt_arg(m, "bucket"),
                    opt_arg(m, "object-key"),
                    printer,
                )
                .await
            }
            Some(("info", m)) => store::handle_info(provider, arg(m, "name"), printer).await,
            Some(("delete", m)) => {
                store::handle_delete(provider, arg(m, "name"), m.get_flag("yes"), printer).await
            }
            _ => Err(KvsError::InvalidArguments(
                "unknown kvs subcommand".to_string(),
            )),
        },
        Some(("item", item_matches)) => match item_matches.subcommand() {
            Some(("list", m)) => item::handle_list(provider, arg(m, "kvs-name"), printer).await,
            Some(("get", m)) => {
                item::handle_get(provider, arg(m, "kvs-name"), arg(m, "key"), printer).await
            }
            Some(("put", m)) => {
                item::handle_put(
                    provider,
                    arg(m, "kvs-name"),
                    arg(m, "key"),
                    arg(m, "value"),
                    printer,
                )
                .await
            }
            Some(("delete", m)) => {
                item::handle_delete(provider, arg(m, "kvs-name"), arg(m, "key"), printer).await
            }
            Some(("sync", m)) => {
                let args = SyncArgs {
                    kvs_name: arg(m, "kvs-name"),
                    bucket: opt_arg(m, "bucket"),
                    object_key: opt_arg(m, "object-key"),
                    file: opt_arg(m, "file"),
                    delete: m.get_flag("delete"),
                    yes: m.get_flag("yes"),
                };
                item::handle_sync(provider, args, printer).await
            }
            _ => Err(KvsError::InvalidArguments(
                "unknown item subcommand".to_string(),
            )),
        },
        _ => Err(KvsError::InvalidArguments("unknown command".to_string())),
    }
}
