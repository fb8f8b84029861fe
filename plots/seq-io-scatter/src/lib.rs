use common::{
    config::Settings,
    plot::Plot,
    series::{Direction, Series},
    util::plot_python,
};
use eyre::{ContextCompat, Result};
use serde::Serialize;
use tracing::debug;

/// Write and read throughput against date, one scatter subplot each
#[derive(Debug, Default, Clone)]
pub struct SeqIoScatter;

#[derive(Debug, Serialize)]
struct ScatterData {
    write: ScatterSeries,
    read: ScatterSeries,
}

#[derive(Debug, Serialize)]
struct ScatterSeries {
    direction: Direction,
    /// Epoch milliseconds
    timestamps: Vec<i64>,
    speeds: Vec<f64>,
}

impl From<&Series> for ScatterSeries {
    fn from(series: &Series) -> Self {
        ScatterSeries {
            direction: series.direction,
            timestamps: series
                .points
                .iter()
                .map(|x| x.timestamp.timestamp_millis())
                .collect(),
            speeds: series.speeds(),
        }
    }
}

fn scatter_args(settings: &Settings) -> Result<Vec<(String, String)>> {
    let mut args = Vec::new();
    if let Some(output) = &settings.output {
        args.push((
            "--output".to_owned(),
            output
                .to_str()
                .context(format!("Invalid output path {output:?}"))?
                .to_owned(),
        ));
    }
    Ok(args)
}

#[async_trait::async_trait]
impl Plot for SeqIoScatter {
    fn name(&self) -> &'static str {
        "seq-io-scatter"
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.plot
    }

    async fn plot(&self, write: &Series, read: &Series, settings: &Settings) -> Result<()> {
        let data = ScatterData {
            write: write.into(),
            read: read.into(),
        };
        debug!(
            "Scatter points: write={} read={}",
            data.write.speeds.len(),
            data.read.speeds.len()
        );
        let data = serde_json::to_vec(&data)?;
        plot_python(
            &settings.python,
            &settings.plot_script,
            &scatter_args(settings)?,
            &data,
        )
        .await
    }
}
