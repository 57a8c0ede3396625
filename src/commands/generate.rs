use super::Host;
use super::common::{Session, ensure_parent_dir};
use crate::Result;
use crate::aggregate::{self, MonthBound, View, ViewOptions};
use crate::codec;
use crate::model::Snapshot;
use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{NaiveDate, Utc};
use clap::Args;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "generate";

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The report to generate
    #[arg(value_enum)]
    pub view: View,

    /// Data file to read
    #[arg(value_name = "DATA_FILE")]
    pub data_file: Utf8PathBuf,

    /// Where to write the series
    #[arg(long, short, value_name = "OUTPUT")]
    pub output: Utf8PathBuf,

    /// Add a series of open issues carrying LABEL, shown as GROUP (issue-counts only)
    #[arg(long = "show-label", num_args = 2, value_names = ["GROUP", "LABEL"])]
    pub show_label: Vec<String>,

    /// Include the trailing partial month in monthly views
    #[arg(long)]
    pub trailing_month: bool,

    /// Last day to report on (defaults to today, UTC)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub until: Option<NaiveDate>,
}

pub fn generate<H: Host>(host: &mut H, session: &Session, args: &GenerateArgs) -> Result<()> {
    if !args.show_label.is_empty() && args.view != View::IssueCounts {
        bail!("--show-label only applies to the {} view", View::IssueCounts);
    }

    let snapshot = codec::load(&args.data_file).with_context(|| format!("loading snapshot '{}'", args.data_file))?;

    let mut options = ViewOptions::new(args.until.unwrap_or_else(|| Utc::now().date_naive()));
    options.groups = args
        .show_label
        .chunks_exact(2)
        .filter_map(|pair| match pair {
            [group, label] => Some((group.clone(), label.clone())),
            _ => None,
        })
        .collect();
    options.month_bound = if args.trailing_month {
        MonthBound::Trailing
    } else {
        session.config.month_bound()
    };

    let count = write_view(args.view, &snapshot, &options, &args.output)?;
    writeln!(host.output(), "Wrote {count} series to '{}'", args.output)?;
    Ok(())
}

/// Generate `view` and write it to `output`, returning the number of series written.
pub fn write_view(view: View, snapshot: &Snapshot, options: &ViewOptions, output: &Utf8Path) -> Result<usize> {
    let series = aggregate::generate(view, snapshot, options).with_context(|| format!("generating the {view} view"))?;
    let text = aggregate::render(&series)?;

    ensure_parent_dir(output)?;
    fs::write(output, text).with_context(|| format!("writing '{output}'"))?;

    log::info!(target: LOG_TARGET, "Wrote {} series for the {view} view to '{output}'", series.len());
    Ok(series.len())
}
