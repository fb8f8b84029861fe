use core::fmt::Debug;

use eyre::{Context, Result};
use tracing::debug;

use crate::{config::Settings, series::Series};

#[async_trait::async_trait]
pub trait Plot: Debug + Send + Sync {
    /// Name of the plot, for identification
    fn name(&self) -> &'static str;
    /// Whether the settings ask for this plot
    fn enabled(&self, settings: &Settings) -> bool;
    /// Presents the data
    ///
    /// Arguments:
    /// * `write` - Write throughput series
    /// * `read` - Read throughput series
    /// * `settings` - Loaded settings
    async fn plot(&self, write: &Series, read: &Series, settings: &Settings) -> Result<()>;
}

pub async fn plot(
    plots: &[Box<dyn Plot>],
    write: &Series,
    read: &Series,
    settings: &Settings,
) -> Result<()> {
    if plots.is_empty() {
        debug!("No plots");
        return Ok(());
    }

    for plot in plots {
        if !plot.enabled(settings) {
            debug!("Skipping plot {}", plot.name());
            continue;
        }
        debug!("Running plot {}", plot.name());
        plot.plot(write, read, settings)
            .await
            .context(format!("Plot {}", plot.name()))?;
    }
    Ok(())
}
