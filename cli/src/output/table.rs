use std::io::Write;

use colored::Colorize;
use prettytable::{format, row, Row, Table};

use super::{write_failed, Renderable};
use kvs_defs::{ItemListDiff, KeyValueStore, KvsError};

fn new_table(titles: Row) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(titles);
    table
}

fn store_row(kvs: &KeyValueStore) -> Row {
    row![kvs.id, kvs.name, kvs.comment, kvs.status, kvs.arn]
}

fn to_table(data: &Renderable) -> Result<Table, KvsError> {
    let table = match data {
        Renderable::Store(kvs) => {
            let mut table = new_table(row!["ID", "NAME", "COMMENT", "STATUS", "ARN"]);
            table.add_row(store_row(kvs));
            table
        }
        Renderable::StoreList(stores) => {
            let mut table = new_table(row!["ID", "NAME", "COMMENT", "STATUS", "ARN"]);
            for kvs in stores.iter() {
                table.add_row(store_row(kvs));
            }
            table
        }
        Renderable::StoreFull(kvs) => {
            // Too wide for columns, so one field per row.
            let mut table = new_table(row!["FIELD", "VALUE"]);
            let last_modified = kvs
                .last_modified
                .map(|t| t.to_rfc3339())
                .unwrap_or_default();
            table.add_row(row!["ID", kvs.id]);
            table.add_row(row!["NAME", kvs.name]);
            table.add_row(row!["ARN", kvs.arn]);
            table.add_row(row!["COMMENT", kvs.comment]);
            table.add_row(row!["STATUS", kvs.status]);
            table.add_row(row!["ITEM COUNT", kvs.item_count]);
            table.add_row(row!["TOTAL SIZE (BYTES)", kvs.total_size_in_bytes]);
            table.add_row(row!["CREATED", kvs.created.to_rfc3339()]);
            table.add_row(row!["LAST MODIFIED", last_modified]);
            table.add_row(row!["FAILURE REASON", kvs.failure_reason]);
            table.add_row(row!["ETAG", kvs.etag]);
            table
        }
        Renderable::Item(item) => {
            let mut table = new_table(row!["KEY", "VALUE"]);
            table.add_row(row![item.key, item.value]);
            table
        }
        Renderable::ItemList(items) => {
            let mut table = new_table(row!["KEY", "VALUE"]);
            for item in items.iter() {
                table.add_row(row![item.key, item.value]);
            }
            table
        }
        Renderable::StoreSummary(summary) => {
            let mut table = new_table(row!["ITEM COUNT", "TOTAL SIZE (BYTES)"]);
            table.add_row(row![summary.item_count, summary.total_size_in_bytes]);
            table
        }
        Renderable::Diff(_) => {
            return Err(KvsError::UnsupportedOutput(
                "a diff renders as sections, not a single table".to_string(),
            ))
        }
    };
    Ok(table)
}

/// Builds the added, updated and deleted tables. Rows are numbered from 1 in each.
fn diff_tables(diff: &ItemListDiff) -> (Table, Table, Table) {
    let mut added = new_table(row!["#", "KEY", "VALUE"]);
    for (i, a) in diff.additions.iter().enumerate() {
        added.add_row(row![i + 1, a.key, a.value]);
    }

    let mut updated = new_table(row!["#", "KEY", "BEFORE VALUE", "AFTER VALUE"]);
    for (i, c) in diff.changes.iter().enumerate() {
        updated.add_row(row![i + 1, c.key, c.old_value, c.new_value]);
    }

    let mut deleted = new_table(row!["#", "KEY", "VALUE"]);
    for (i, r) in diff.removals.iter().enumerate() {
        deleted.add_row(row![i + 1, r.key, r.value]);
    }

    (added, updated, deleted)
}

fn render_section(
    tag: colored::ColoredString,
    verb: &str,
    rows: usize,
    table: &Table,
    out: &mut dyn Write,
) -> Result<(), KvsError> {
    if rows == 0 {
        writeln!(out, "\n{} No items will be {}.", tag, verb).map_err(write_failed)?;
        return Ok(());
    }
    writeln!(out, "\n{} Following items will be {}.", tag, verb).map_err(write_failed)?;
    table.print(out).map_err(write_failed)?;
    Ok(())
}

fn render_diff(diff: &ItemListDiff, out: &mut dyn Write) -> Result<(), KvsError> {
    let (added, updated, deleted) = diff_tables(diff);

    let tag = "[ADDED]".green().bold();
    render_section(tag, "added", diff.additions.len(), &added, out)?;
    let tag = "[UPDATED]".yellow().bold();
    render_section(tag, "updated", diff.changes.len(), &updated, out)?;
    let tag = "[DELETED]".red().bold();
    render_section(tag, "deleted", diff.removals.len(), &deleted, out)?;
    Ok(())
}

pub fn render(data: &Renderable, out: &mut dyn Write) -> Result<(), KvsError> {
    if let Renderable::Diff(diff) = data {
        return render_diff(diff, out);
    }
    to_table(data)?.print(out).map_err(write_failed)?;
    Ok(())
}
