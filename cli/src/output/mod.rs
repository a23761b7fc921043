mod json;
mod table;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use kvs_defs::{
    Item, ItemList, ItemListDiff, KeyValueStore, KeyValueStoreFull, KvsError, StoreSummary,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

impl FromStr for OutputFormat {
    type Err = KvsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(KvsError::UnsupportedOutput(format!(
                "'{}', expected one of: json, table",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// Everything a command can print.
pub enum Renderable<'a> {
    Store(&'a KeyValueStore),
    StoreList(&'a [KeyValueStore]),
    StoreFull(&'a KeyValueStoreFull),
    Item(&'a Item),
    ItemList(&'a ItemList),
    StoreSummary(&'a StoreSummary),
    Diff(&'a ItemListDiff),
}

/// Writes rendered results in the selected format. Messages meant for the
/// operator rather than for scripts go through `notice`.
pub struct Printer<'w> {
    format: OutputFormat,
    out: &'w mut dyn Write,
}

impl<'w> Printer<'w> {
    pub fn new(format: OutputFormat, out: &'w mut dyn Write) -> Self {
        Printer { format, out }
    }

    pub fn render(&mut self, data: &Renderable) -> Result<(), KvsError> {
        match self.format {
            OutputFormat::Json => json::render(data, self.out),
            OutputFormat::Table => table::render(data, self.out),
        }
    }

    /// Renders a result that follows an earlier `render` of the same command.
    /// With JSON output stdout already holds one document, so the result goes to stderr.
    pub fn render_after(&mut self, data: &Renderable) -> Result<(), KvsError> {
        match self.format {
            OutputFormat::Json => json::render(data, &mut std::io::stderr().lock()),
            OutputFormat::Table => table::render(data, self.out),
        }
    }

    pub fn notice(&mut self, message: &str) -> Result<(), KvsError> {
        if self.format == OutputFormat::Json {
            eprintln!("{}", message);
            return Ok(());
        }
        writeln!(self.out, "{}", message).map_err(write_failed)
    }
}

pub(crate) fn write_failed<E>(e: E) -> KvsError
where
    E: Into<anyhow::Error>,
{
    KvsError::Other(e.into().context("Failed to write output"))
}
