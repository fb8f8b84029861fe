use std::fmt::Write;

use common::{
    config::Settings,
    plot::Plot,
    series::{Direction, Series, SummaryStats},
};
use eyre::{Context, Result};
use tracing::debug;

/// Min, max and mean throughput of both directions, printed to stdout
#[derive(Debug, Default, Clone)]
pub struct SeqIoSummary;

pub fn render_summary(write: &SummaryStats, read: &SummaryStats) -> String {
    let mut out = String::from("IO Summary\n----------\n");
    for (direction, stats) in [(Direction::Write, write), (Direction::Read, read)] {
        _ = write!(
            out,
            "\n{} speed (MB/s):\n  Min    : {:.2}\n  Max    : {:.2}\n  Mean   : {:.2}\n",
            direction.label(),
            stats.min,
            stats.max,
            stats.mean
        );
    }
    out
}

#[async_trait::async_trait]
impl Plot for SeqIoSummary {
    fn name(&self) -> &'static str {
        "seq-io-summary"
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.summary
    }

    async fn plot(&self, write: &Series, read: &Series, _: &Settings) -> Result<()> {
        let write_stats = write.summary().context("Write speed summary")?;
        let read_stats = read.summary().context("Read speed summary")?;
        debug!("write={write_stats:?} read={read_stats:?}");
        print!("{}", render_summary(&write_stats, &read_stats));
        Ok(())
    }
}
