use std::path::PathBuf;

use clap::Parser;
use common::config::Settings;
use eyre::{Context, Result};
use tokio::fs::read_to_string;
use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

mod report;

const MODULES: &[&str] = &["common", "seq_io", "seq_io_scatter", "seq_io_summary"];

#[derive(Parser, Debug)]
#[command(
    name = "plot-seq-io",
    about = "Plot write and read throughput from seq-io result files"
)]
struct Cli {
    /// Directory holding the seq-io json results
    results_dir: PathBuf,
    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Sort by timestamp instead of keeping result file order
    #[arg(long, default_value_t = false)]
    sort_by_time: bool,
    /// Do not render the scatter plot
    #[arg(long, default_value_t = false)]
    no_plot: bool,
    /// Do not print the summary
    #[arg(long, default_value_t = false)]
    no_summary: bool,
    /// Save the plot to this file instead of opening a window
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long)]
    log: Vec<String>,
}

impl Cli {
    /// Settings file (or defaults) with the command line flags applied on top
    async fn settings(&self) -> Result<Settings> {
        let mut settings: Settings = match &self.config {
            Some(path) => serde_yml::from_str(
                &read_to_string(path)
                    .await
                    .context(format!("Read {}", path.display()))?,
            )
            .context(format!("Parse {}", path.display()))?,
            None => Settings::default(),
        };

        if self.sort_by_time {
            settings.sort_by_time = true;
        }
        if self.no_plot {
            settings.plot = false;
        }
        if self.no_summary {
            settings.summary = false;
        }
        if let Some(output) = &self.output {
            settings.output = Some(output.clone());
        }
        Ok(settings)
    }
}

fn init_tracing(directives: &[String]) -> Result<WorkerGuard> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let file_appender = tracing_appender::rolling::never(".", "log.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let mut env_filter = EnvFilter::new(format!("plot_seq_io={log_level}"));
    for directive in directives {
        env_filter = env_filter.add_directive(directive.parse()?);
    }
    for module in MODULES {
        if !directives.iter().any(|x| x.starts_with(module)) {
            env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_writer(std::io::stderr)
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .with(layer().with_writer(non_blocking))
        .init();
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let _guard = init_tracing(&args.log)?;
    let settings = args.settings().await?;

    if let Err(err) = report::run(&args.results_dir, &settings).await {
        error!("{err:#?}");
        return Err(err);
    }
    Ok(())
}
