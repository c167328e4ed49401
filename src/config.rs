// Fixed settings for the dashboard run.
//
// There are no flags; the only thing a user can change from the command line
// is the dataset path (first positional argument).
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "AllLocationSchemeCollectionPending.csv";

pub const CURRENCY_SYMBOL: &str = "₹";

pub const GROUPED_CSV: &str = "grouped_balance.csv";
pub const STATUS_CSV: &str = "status_distribution.csv";
pub const LOCATION_CSV: &str = "location_distribution.csv";
pub const RECORDS_CSV: &str = "filtered_records.csv";
pub const SUMMARY_JSON: &str = "summary.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    /// Rows shown in the console data table; exports are never truncated.
    pub preview_rows: usize,
    /// Character width of the longest bar in the grouped balance table.
    pub bar_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            preview_rows: 20,
            bar_width: 30,
        }
    }
}

impl Config {
    pub fn from_args<I>(mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        let mut cfg = Config::default();
        // Skip the program name.
        args.next();
        if let Some(path) = args.next().filter(|p| !p.trim().is_empty()) {
            cfg.data_file = PathBuf::from(path);
        }
        cfg
    }
}
