// src/cli.rs
//
// Headless front end: load, filter, then print / export / compare.

use std::{fs, path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};
use tracing::info;

use crate::{
    compare::{self, ComparisonPair},
    config::options::AppOptions,
    core::FirstTable,
    data::{Selection, SelectionView},
    export,
    pipeline,
    progress::{Progress, StderrProgress},
    specs::constituents::CANONICAL_COLUMNS,
    store::{self, RecordTable},
};

#[derive(Debug, Parser)]
#[command(name = "nifty_stats", version, about = "Nifty 50 constituents: filter, export, compare")]
pub struct Args {
    /// Keep only this company (repeatable). Default: all.
    #[arg(long = "company", value_name = "NAME")]
    pub companies: Vec<String>,

    /// Keep only this sector (repeatable). Default: all.
    #[arg(long = "sector", value_name = "NAME")]
    pub sectors: Vec<String>,

    /// Keep only this analyst rating (repeatable). Default: all.
    #[arg(long = "rating", value_name = "RATING")]
    pub ratings: Vec<String>,

    /// Compare two companies from the filtered rows.
    #[arg(long, num_args = 2, value_names = ["A", "B"])]
    pub compare: Option<Vec<String>>,

    /// Write the filtered rows as CSV (file or directory).
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    /// Print an HTML download link for the filtered rows.
    #[arg(long)]
    pub link: bool,

    /// Read the page from a saved file instead of the network.
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Source page URL.
    #[arg(long)]
    pub url: Option<String>,

    /// Fetch timeout in seconds (default: none).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(url) = &self.url {
            opts.fetch.url = url.clone();
        }
        opts.fetch.timeout = self.timeout.map(Duration::from_secs);
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts
    }

    /// Empty filter lists mean "everything".
    pub fn selection(&self, table: &RecordTable) -> Selection {
        let mut sel = Selection::all(table);
        if !self.companies.is_empty() {
            sel.companies = self.companies.iter().cloned().collect();
        }
        if !self.sectors.is_empty() {
            sel.sectors = self.sectors.iter().cloned().collect();
        }
        if !self.ratings.is_empty() {
            sel.ratings = self.ratings.iter().cloned().collect();
        }
        sel
    }
}

pub fn run() -> Result<()> {
    crate::log::init();
    let args = Args::parse();
    let opts = args.options();

    let mut prog = StderrProgress::default();
    let table = load(&args, &opts, &mut prog)?;

    let sel = args.selection(&table);
    let view = SelectionView::new(&table, &sel);
    println!("Nifty 50 Results: {} rows found", view.len());

    if args.out.is_some() {
        let path = export::write_csv(&opts.export, &view)?;
        eprintln!("Wrote {}", path.display());
    }

    if args.link {
        println!("{}", export::download_link(&view)?);
    }

    match args.compare.as_deref() {
        Some([a, b]) => print_comparison(&view, a, b)?,
        Some(_) => bail!("--compare takes exactly two company names"),
        None if args.out.is_none() && !args.link => print_rows(&view)?,
        None => {}
    }
    Ok(())
}

fn load(args: &Args, opts: &AppOptions, prog: &mut dyn Progress) -> Result<Arc<RecordTable>> {
    match &args.html {
        Some(file) => {
            let html = fs::read_to_string(file)
                .wrap_err_with(|| format!("reading {}", file.display()))?;
            info!(path = %file.display(), "Load: saved page");
            prog.begin(3);
            let table = pipeline::build_table_with(&FirstTable, &html, prog)?;
            prog.finish();
            Ok(Arc::new(table))
        }
        None => Ok(store::shared_table(&opts.fetch, Some(prog))?),
    }
}

fn print_rows(view: &SelectionView<'_>) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(std::io::stdout());
    wtr.write_record(CANONICAL_COLUMNS)?;
    for row in view.rows() {
        wtr.write_record(row.to_record())?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_comparison(view: &SelectionView<'_>, a: &str, b: &str) -> Result<()> {
    let pair = ComparisonPair::new(a, b)?;
    let cmp = compare::compare(view, &pair)?;
    for chart in &cmp.charts {
        println!("{}", chart.heading);
        for bar in &chart.bars {
            println!("  {:<24} {}", bar.company, bar.label);
        }
    }
    Ok(())
}
