use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::{write_failed, Renderable};
use kvs_defs::KvsError;

const JSON_INDENT: &[u8] = b"    ";

fn write_json<T>(value: &T, out: &mut dyn Write) -> Result<(), KvsError>
where
    T: Serialize + ?Sized,
{
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut *out, formatter);
    value.serialize(&mut ser).map_err(write_failed)?;
    writeln!(out).map_err(write_failed)
}

pub fn render(data: &Renderable, out: &mut dyn Write) -> Result<(), KvsError> {
    match data {
        Renderable::Store(kvs) => write_json(kvs, out),
        Renderable::StoreList(stores) => write_json(stores, out),
        Renderable::StoreFull(kvs) => write_json(kvs, out),
        Renderable::Item(item) => write_json(item, out),
        Renderable::ItemList(items) => write_json(items, out),
        Renderable::StoreSummary(summary) => write_json(summary, out),
        Renderable::Diff(diff) => write_json(diff, out),
    }
}
