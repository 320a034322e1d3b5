use std::path::PathBuf;

/// Column names the analysis looks up.
pub mod columns {
    pub const VOTE_COUNT: &str = "vote_count";
    pub const VOTE_AVERAGE: &str = "vote_average";
    pub const ORIGINAL_LANGUAGE: &str = "original_language";
}

pub const INPUT_FILE: &str = "data.csv";
pub const RELATIONAL_PLOT_FILE: &str = "relational_plot.png";
pub const CATEGORICAL_PLOT_FILE: &str = "categorical_plot.png";
pub const STATISTICAL_PLOT_FILE: &str = "statistical_plot.png";

/// Fixed run parameters. `Default` gives the production values.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input_path: PathBuf,
    /// Directory the three charts are written into.
    pub output_dir: PathBuf,
    /// Column whose moments are reported.
    pub target_column: String,
    /// Rows shown in the numeric preview.
    pub head_rows: usize,
    /// Chart size in pixels.
    pub image_size: (u32, u32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_FILE),
            output_dir: PathBuf::from("."),
            target_column: columns::VOTE_AVERAGE.to_string(),
            head_rows: 5,
            image_size: (800, 600),
        }
    }
}

impl Settings {
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
