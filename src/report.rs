use std::{
    fmt,
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use csv::WriterBuilder;
use log::debug;

use crate::error::Result;
use crate::harness::{ResultSink, TrialResult};

pub const CSV_HEADER: [&str; 10] = [
    "dataset",
    "N",
    "ins_bst_sorted_ns",
    "ins_avl_sorted_ns",
    "ins_bst_random_ns",
    "ins_avl_random_ns",
    "sea_bst_sorted_ns",
    "sea_avl_sorted_ns",
    "sea_bst_random_ns",
    "sea_avl_random_ns",
];

const RULE_HEAVY: &str = "==================================================";
const RULE_LIGHT: &str = "--------------------------------------------------";

pub fn ns_to_sec(ns: u64) -> f64 {
    ns as f64 / 1_000_000_000.0
}

impl fmt::Display for TrialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE_HEAVY)?;
        writeln!(f, "Dataset: {}", self.dataset)?;
        writeln!(f, "N      : {}", self.n)?;
        writeln!(f, "Units  : seconds")?;
        writeln!(f, "{}", RULE_LIGHT)?;

        let rows = [
            ("INSERT (sorted)", self.insert_bst_sorted, self.insert_avl_sorted),
            ("INSERT (random)", self.insert_bst_random, self.insert_avl_random),
            ("SEARCH (sorted)", self.search_bst_sorted, self.search_avl_sorted),
            ("SEARCH (random)", self.search_bst_random, self.search_avl_random),
        ];

        for (label, bst, avl) in rows {
            writeln!(
                f,
                "{}  BST={:10.6}   AVL={:10.6}",
                label,
                ns_to_sec(bst),
                ns_to_sec(avl)
            )?;
        }

        write!(f, "{}", RULE_HEAVY)
    }
}

/// Appends one row per trial to a results file, keeping earlier runs' rows.
#[derive(Debug, Clone)]
pub struct CsvReporter {
    path: PathBuf,
}

impl CsvReporter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        CsvReporter { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The header goes in only when the file did not exist before this call.
    pub fn append(&self, result: &TrialResult) -> Result<()> {
        let write_header = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        if write_header {
            debug!("create results file {}", self.path.display());
            writer.write_record(CSV_HEADER)?;
        }

        let mut row = Vec::with_capacity(CSV_HEADER.len());
        row.push(result.dataset.clone());
        row.push(result.n.to_string());
        row.extend(result.timings().iter().map(u64::to_string));

        writer.write_record(&row)?;
        writer.flush()?;

        Ok(())
    }
}

impl ResultSink for CsvReporter {
    fn accept(&mut self, result: &TrialResult) -> Result<()> {
        self.append(result)
    }
}

/// Prints each result to stdout unless quiet, then appends it to the CSV file.
#[derive(Debug, Clone)]
pub struct Reporter {
    csv: CsvReporter,
    quiet: bool,
}

impl Reporter {
    pub fn new(csv: CsvReporter, quiet: bool) -> Self {
        Reporter { csv, quiet }
    }
}

impl ResultSink for Reporter {
    fn accept(&mut self, result: &TrialResult) -> Result<()> {
        if !self.quiet {
            println!("{}", result);
        }

        self.csv.append(result)
    }
}
