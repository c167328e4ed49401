// Entry point and menu loop.
//
// The dataset is loaded and cleaned once at startup; a missing file stops the
// run before anything else happens. Every menu action after that recomputes
// the dashboard from the cleaned records and the current filter selection.
mod aggregate;
mod config;
mod dashboard;
mod error;
mod filter;
mod geo;
mod loader;
mod output;
mod prompt;
mod types;
mod util;

use anyhow::Context;
use config::Config;
use dashboard::DashboardView;
use log::{info, warn};
use std::path::Path;
use types::{FilterSelection, Record};

struct Session {
    cfg: Config,
    records: Vec<Record>,
    has_coordinates: bool,
    selection: FilterSelection,
    locations: Vec<String>,
    statuses: Vec<String>,
}

impl Session {
    fn view(&self) -> DashboardView {
        dashboard::build(&self.records, &self.selection, self.has_coordinates)
    }
}

fn open_session(cfg: Config) -> Result<Session, error::DashboardError> {
    let table = loader::load_raw(&cfg.data_file)?;
    let (records, report) = loader::clean(&table.rows);
    println!(
        "Processing dataset... ({} rows loaded, {} usable)",
        util::format_int(report.total_rows),
        util::format_int(report.kept_rows)
    );
    let skipped = report.missing_fields + report.bad_balance + table.unreadable_rows;
    if skipped > 0 {
        println!(
            "Note: {} rows skipped due to missing or malformed values.",
            util::format_int(skipped)
        );
    }
    println!();
    Ok(Session {
        locations: filter::distinct_locations(&records),
        statuses: filter::distinct_statuses(&records),
        cfg,
        records,
        has_coordinates: table.has_coordinates,
        selection: FilterSelection::default(),
    })
}

fn handle_export(session: &Session) -> anyhow::Result<()> {
    let DashboardView::Ready(d) = session.view() else {
        println!("Warning: {}\n", output::EMPTY_WARNING);
        return Ok(());
    };
    let written = output::export(&d, &session.selection, Path::new("."))
        .context("exporting dashboard tables")?;
    println!("Outputs saved: {}\n", written.join(", "));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = Config::from_args(std::env::args());
    info!("using data file {}", cfg.data_file.display());
    let mut session = match open_session(cfg) {
        Ok(s) => s,
        Err(e @ error::DashboardError::MissingFile(_)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("loading dataset"),
    };

    loop {
        println!("Filter Options");
        println!("[1] Select Location");
        println!("[2] Select Status");
        println!("[3] Show Dashboard");
        println!("[4] Export Tables");
        println!("[5] Exit\n");
        output::render_selection(&session.selection);
        let Some(choice) = prompt::read_choice() else {
            break;
        };
        match choice.as_str() {
            "1" => {
                session.selection.locations = prompt::multiselect(
                    "Select Location",
                    &session.locations,
                    &session.selection.locations,
                );
            }
            "2" => {
                session.selection.statuses = prompt::multiselect(
                    "Select Status",
                    &session.statuses,
                    &session.selection.statuses,
                );
            }
            "3" => {
                println!();
                let view = session.view();
                if matches!(view, DashboardView::Empty) {
                    warn!("selection {:?} matched no rows", session.selection);
                }
                output::render(&view, &session.cfg);
                if !prompt::prompt_back_to_menu() {
                    break;
                }
            }
            "4" => handle_export(&session)?,
            "5" => break,
            _ => println!("Invalid choice. Please enter 1-5.\n"),
        }
    }
    println!("Exiting the program.");
    Ok(())
}
