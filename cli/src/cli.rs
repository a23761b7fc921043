use clap::{Arg, ArgAction, Command};

fn kvs_name_arg() -> Arg {
    Arg::new("kvs-name")
        .long("kvs-name")
        .help("Name of the key value store")
        .required(true)
}

fn name_arg() -> Arg {
    Arg::new("name")
        .long("name")
        .help("Name of the key value store")
        .required(true)
}

fn yes_arg(help: &'static str) -> Arg {
    Arg::new("yes")
        .short('y')
        .long("yes")
        .help(help)
        .action(ArgAction::SetTrue)
}

fn bucket_args() -> [Arg; 2] {
    [
        Arg::new("bucket")
            .long("bucket")
            .help("S3 bucket holding the key value store data"),
        Arg::new("object-key")
            .long("object-key")
            .help("S3 object key of the key value store data, e.g. data.json"),
    ]
}

fn kvs_command() -> Command {
    Command::new("kvs")
        .about("Key value store operations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List key value stores"))
        .subcommand(
            Command::new("create")
                .about("Create a key value store, optionally importing items from S3")
                .arg(name_arg())
                .arg(
                    Arg::new("comment")
                        .long("comment")
                        .help("Comment for the key value store"),
                )
                .args(bucket_args()),
        )
        .subcommand(
            Command::new("info")
                .about("Show details of a key value store")
                .arg(name_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a key value store")
                .arg(name_arg())
                .arg(yes_arg(
                    "Execute the delete. If not specified, only show the key value store to be deleted",
                )),
        )
}

fn item_command() -> Command {
    Command::new("item")
        .about("Items in a specific key value store")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List items in the key value store")
                .arg(kvs_name_arg()),
        )
        .subcommand(
            Command::new("get")
                .about("Get an item in the key value store")
                .arg(kvs_name_arg())
                .arg(Arg::new("key").long("key").help("Key of the item to get").required(true)),
        )
        .subcommand(
            Command::new("put")
                .about("Put an item in the key value store")
                .arg(kvs_name_arg())
                .arg(Arg::new("key").long("key").help("Key of the item to put").required(true))
                .arg(
                    Arg::new("value")
                        .long("value")
                        .help("Value of the item to put")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an item in the key value store")
                .arg(kvs_name_arg())
                .arg(
                    Arg::new("key")
                        .long("key")
                        .help("Key of the item to delete")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("sync")
                .about("Sync items in the key value store with an S3 object or a local file")
                .arg(kvs_name_arg())
                .args(bucket_args())
                .arg(
                    Arg::new("file")
                        .long("file")
                        .help("Local JSON file to sync the key value store with"),
                )
                .arg(
                    Arg::new("delete")
                        .long("delete")
                        .help("Delete items that are not in the source")
                        .action(ArgAction::SetTrue),
                )
                .arg(yes_arg(
                    "Execute sync. If not specified, only show the items to be synced",
                )),
        )
}

/// Builds the command tree. `version` is printed by `--version`.
pub fn build_cli(version: &'static str) -> Command {
    Command::new("cfkvs")
        .version(version)
        .about("A simple cli tool to manage CloudFront Key Value Stores")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("output")
                .long("output")
                .help("Output format")
                .value_parser(["json", "table"])
                .global(true),
        )
        .arg(
            Arg::new("region")
                .long("region")
                .help("AWS region, e.g. us-east-1")
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(kvs_command())
        .subcommand(item_command())
}
