use std::io::Write;

use anyhow::{Context, Result};

use crate::config::{Config, PROPORTION_COLUMN};
use crate::data::loader::load_csv;
use crate::data::sort::{sort_by_column, SortedView};
use crate::present::{Presenter, ScatterChart};
use crate::report::{write_report, REPORT_LIMIT};

/// Load → sort → present → report.
///
/// The report is only written once `presenter` has returned, and any failure
/// stops the remaining stages.
pub fn run(config: &Config, presenter: &mut dyn Presenter, out: &mut dyn Write) -> Result<SortedView> {
    let dataset = load_csv(&config.input)
        .with_context(|| format!("loading {}", config.input.display()))?;

    let view = sort_by_column(&dataset, PROPORTION_COLUMN)
        .with_context(|| format!("sorting {} by '{PROPORTION_COLUMN}'", config.input.display()))?;

    log::info!("Sorted {} rows by '{}'", view.len(), view.column);
    if let Some(first) = view.rows.first() {
        log::debug!("Smallest value at source row {}: {:?}", first.source_index, first.row);
    }

    presenter.present(ScatterChart::from_view(&view))?;

    write_report(out, &view.values(), view.integer, REPORT_LIMIT).context("writing report")?;
    Ok(view)
}
