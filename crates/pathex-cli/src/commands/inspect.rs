use pathex_config::PathexConfig;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::{GlobalFlags, PeekArgs};
use crate::output;

#[derive(Serialize)]
struct TableSample<'a> {
    table: &'a str,
    columns: &'a [String],
    row: Option<pathex_core::Record>,
}

/// Handle `pathex tables`.
pub async fn tables(config: &PathexConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = bootstrap::open_catalog(config).await?;
    let tables = catalog.list_tables().await?;
    output::emit(flags.format, &tables, &tables)
}

/// Handle `pathex peek`.
pub async fn peek(args: &PeekArgs, config: &PathexConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = bootstrap::open_catalog(config).await?;
    let set = catalog.peek_table(&args.table).await?;
    let columns = set.columns.clone();
    let row = set.into_records().into_iter().next();

    let mut lines = vec![args.table.clone(), columns.join(", ")];
    if let Some(record) = &row {
        lines.push(
            record
                .iter()
                .map(|(_, value)| value.render())
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    let sample = TableSample {
        table: &args.table,
        columns: &columns,
        row,
    };
    output::emit(flags.format, &sample, &lines)
}
