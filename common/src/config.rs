use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sort series chronologically instead of keeping result file order
    pub sort_by_time: bool,
    /// Render the scatter plot
    pub plot: bool,
    /// Print the text summary
    pub summary: bool,
    pub python: String,
    pub plot_script: PathBuf,
    /// Save the plot here instead of opening a window
    pub output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            sort_by_time: false,
            plot: true,
            summary: true,
            python: "python3".to_owned(),
            plot_script: PathBuf::from("plots/seq_io_scatter.py"),
            output: None,
        }
    }
}
