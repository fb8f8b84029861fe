use std::path::Path;

use common::{
    config::Settings,
    plot::{Plot, plot},
};
use eyre::{Result, bail};
use seq_io::{RESULTS_FILE_EXT, check_results_dir, discover_results, load_results};
use seq_io_scatter::SeqIoScatter;
use seq_io_summary::SeqIoSummary;
use tracing::{debug, info};

pub fn plots() -> Vec<Box<dyn Plot>> {
    vec![Box::new(SeqIoSummary), Box::new(SeqIoScatter)]
}

/// Loads every result file in `results_dir` and hands the series to the plots
pub async fn run(results_dir: &Path, settings: &Settings) -> Result<()> {
    check_results_dir(results_dir).await?;

    let results_files = discover_results(results_dir).await?;
    if results_files.is_empty() {
        bail!(
            "No .{RESULTS_FILE_EXT} result files in {}",
            results_dir.display()
        );
    }

    let (mut write, mut read) = load_results(&results_files).await?;
    if settings.sort_by_time {
        debug!("Sorting series by timestamp");
        write.sort_by_timestamp();
        read.sort_by_timestamp();
    }
    info!(
        "Loaded {} files: write_points={} read_points={}",
        results_files.len(),
        write.len(),
        read.len()
    );

    plot(&plots(), &write, &read, settings).await
}
