use std::{fmt, path::Path, process::Stdio, str::FromStr};

use eyre::{Context, ContextCompat, Result, bail};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::{fs::read_to_string, io::AsyncWriteExt, process::Command};
use tracing::debug;

use crate::GB_TO_MB;

#[derive(Error, Debug, PartialEq)]
pub enum ThroughputError {
    #[error("Malformed throughput {0:?}, expected \"<value> <unit>/s\"")]
    Malformed(String),
    #[error("Invalid magnitude in throughput {0:?}")]
    InvalidMagnitude(String),
    #[error("Unsupported throughput unit {0:?}")]
    UnsupportedUnit(String),
    #[error("No throughput samples to average")]
    NoSamples,
}

/// Units a seq-io speed string may carry, each with its factor to MB/s
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThroughputUnit {
    MegabytesPerSec,
    GigabytesPerSec,
}

impl ThroughputUnit {
    const TABLE: [(&'static str, ThroughputUnit); 2] = [
        ("MB", ThroughputUnit::MegabytesPerSec),
        ("GB", ThroughputUnit::GigabytesPerSec),
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            ThroughputUnit::MegabytesPerSec => "MB",
            ThroughputUnit::GigabytesPerSec => "GB",
        }
    }

    pub fn scale_to_mbs(&self) -> f64 {
        match self {
            ThroughputUnit::MegabytesPerSec => 1.0,
            ThroughputUnit::GigabytesPerSec => GB_TO_MB,
        }
    }
}

impl FromStr for ThroughputUnit {
    type Err = ThroughputError;

    fn from_str(unit: &str) -> Result<Self, Self::Err> {
        let prefix = unit
            .strip_suffix("/s")
            .ok_or_else(|| ThroughputError::UnsupportedUnit(unit.to_owned()))?;
        Self::TABLE
            .iter()
            .find(|(symbol, _)| *symbol == prefix)
            .map(|(_, unit)| *unit)
            .ok_or_else(|| ThroughputError::UnsupportedUnit(unit.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    pub value: f64,
    pub unit: ThroughputUnit,
}

impl Throughput {
    pub fn to_mbs(&self) -> f64 {
        self.value * self.unit.scale_to_mbs()
    }
}

impl FromStr for Throughput {
    type Err = ThroughputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(value), Some(unit), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ThroughputError::Malformed(s.to_owned()));
        };

        let value = value
            .parse::<f64>()
            .map_err(|_| ThroughputError::InvalidMagnitude(s.to_owned()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(ThroughputError::InvalidMagnitude(s.to_owned()));
        }

        Ok(Throughput {
            value,
            unit: unit.parse()?,
        })
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/s", self.value, self.unit.symbol())
    }
}

pub fn parse_throughput(speed: &str) -> Result<Throughput, ThroughputError> {
    speed.parse()
}

/// Parses a speed such as `1.2 GB/s` into megabytes per second
pub fn to_mbs(speed: &str) -> Result<f64, ThroughputError> {
    Ok(parse_throughput(speed)?.to_mbs())
}

/// Mean of a list of speed strings, in megabytes per second
pub fn mean_mbs<S: AsRef<str>>(speeds: &[S]) -> Result<f64, ThroughputError> {
    if speeds.is_empty() {
        return Err(ThroughputError::NoSamples);
    }

    let mut sum = 0.0;
    for speed in speeds {
        sum += to_mbs(speed.as_ref())?;
    }
    Ok(sum / speeds.len() as f64)
}

pub async fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let data = read_to_string(path)
        .await
        .context(format!("Read {}", path.display()))?;
    serde_json::from_str(&data).context(format!("Parse {}", path.display()))
}

/// Runs a python plotting script, feeding `data` on its stdin, and waits for it to exit
///
/// Arguments:
/// * `python` - The interpreter, ie. python3
/// * `script` - Path to the plotting script
/// * `args` - Flag/value pairs passed after the script
/// * `data` - Plot data, usually json
pub async fn plot_python(
    python: &str,
    script: &Path,
    args: &[(String, String)],
    data: &[u8],
) -> Result<()> {
    let mut cmd = Command::new(python);
    cmd.arg(script);
    for (flag, value) in args {
        cmd.arg(flag).arg(value);
    }

    debug!("Running {python} {} {args:?}", script.display());
    let mut child = cmd
        .stdin(Stdio::piped())
        .spawn()
        .context(format!("Spawn {python} {}", script.display()))?;

    let mut stdin = child.stdin.take().context("Missing stdin for plot script")?;
    stdin.write_all(data).await?;
    stdin.flush().await?;
    drop(stdin);

    let status = child.wait().await?;
    if !status.success() {
        bail!("Plot script {} failed with {status}", script.display());
    }
    Ok(())
}
