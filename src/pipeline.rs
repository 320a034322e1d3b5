use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::data::model::Dataset;
use crate::data::{clean, loader, summary};
use crate::plot::{categorical, relational, statistical, PlotError};
use crate::report;
use crate::settings::{Settings, CATEGORICAL_PLOT_FILE, RELATIONAL_PLOT_FILE, STATISTICAL_PLOT_FILE};
use crate::stats::moments::Moments;

type PlotStep = fn(&Dataset, &Path, (u32, u32)) -> core::result::Result<(), PlotError>;

/// Chart steps in run order: name, output file, renderer.
const PLOT_STEPS: [(&str, &str, PlotStep); 3] = [
    ("relational", RELATIONAL_PLOT_FILE, relational::plot_relational),
    ("statistical", STATISTICAL_PLOT_FILE, statistical::plot_statistical),
    ("categorical", CATEGORICAL_PLOT_FILE, categorical::plot_categorical),
];

/// What happened to one chart step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Written,
    SkippedMissingColumn(String),
}

/// Load, summarise and clean the input.
pub fn prepare<W: Write>(settings: &Settings, out: &mut W) -> Result<Dataset> {
    let raw = loader::load_csv(&settings.input_path)?;
    summary::print_numeric_overview(&raw, settings.head_rows, out)?;

    let cleaned = clean::drop_missing(&raw);
    info!(
        "dropped {} rows with missing values, {} remain",
        raw.len() - cleaned.len(),
        cleaned.len()
    );
    if cleaned.is_empty() {
        warn!("no complete rows remain after dropping missing values");
    }
    Ok(cleaned)
}

/// Run one chart step, downgrading a missing column to a skip.
pub fn run_plot_step(
    name: &str,
    step: PlotStep,
    dataset: &Dataset,
    settings: &Settings,
    file_name: &str,
) -> Result<StepOutcome> {
    let path = settings.output_path(file_name);
    match step(dataset, &path, settings.image_size) {
        Ok(()) => {
            info!("{name} plot written to {}", path.display());
            Ok(StepOutcome::Written)
        }
        Err(err) => match err.missing_column() {
            Some(column) => {
                warn!("column '{column}' not found; skipping {name} plot");
                Ok(StepOutcome::SkippedMissingColumn(column.to_string()))
            }
            None => Err(err).with_context(|| format!("rendering {name} plot")),
        },
    }
}

/// The whole analysis: load → clean → plot → compute → print.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    run_with_steps(settings, &PLOT_STEPS, out)
}

/// [`run`] with an explicit chart table, executed in slice order.
pub fn run_with_steps<W: Write>(
    settings: &Settings,
    steps: &[(&str, &str, PlotStep)],
    out: &mut W,
) -> Result<()> {
    let dataset = prepare(settings, out)?;

    for &(name, file_name, step) in steps {
        run_plot_step(name, step, &dataset, settings, file_name)?;
    }

    let moments = Moments::of_column(&dataset, &settings.target_column)?;
    report::write_moments(out, &moments, &settings.target_column)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::LoadError;
    use crate::settings::columns::{ORIGINAL_LANGUAGE, VOTE_AVERAGE};
    use crate::stats::grouping::group_means;

    // Renderers that check the same columns as the real charts but write a
    // marker file, so step sequencing is testable without system fonts.
    fn marker(path: &Path) -> core::result::Result<(), PlotError> {
        std::fs::write(path, b"chart").map_err(|e| PlotError::Drawing(e.to_string()))
    }

    fn marker_scatter(ds: &Dataset, path: &Path, _: (u32, u32)) -> core::result::Result<(), PlotError> {
        relational::scatter_points(ds)?;
        marker(path)
    }

    fn marker_box(ds: &Dataset, path: &Path, _: (u32, u32)) -> core::result::Result<(), PlotError> {
        ds.numeric_values(VOTE_AVERAGE)?;
        marker(path)
    }

    fn marker_bars(ds: &Dataset, path: &Path, _: (u32, u32)) -> core::result::Result<(), PlotError> {
        group_means(ds, ORIGINAL_LANGUAGE, VOTE_AVERAGE)?;
        marker(path)
    }

    const MARKER_STEPS: [(&str, &str, PlotStep); 3] = [
        ("relational", RELATIONAL_PLOT_FILE, marker_scatter),
        ("statistical", STATISTICAL_PLOT_FILE, marker_box),
        ("categorical", CATEGORICAL_PLOT_FILE, marker_bars),
    ];

    const SAMPLE: &str = "\
id,title,original_language,popularity,vote_count,vote_average
1,Alpha,en,12.5,1200,7.1
2,Beta,fr,3.2,85,6.4
3,Gamma,en,,40,5.9
4,Delta,ja,8.8,560,7.8
5,Epsilon,fr,1.1,12,4.9
";

    fn settings_for(dir: &Path, csv: &str) -> Settings {
        let input_path = dir.join("data.csv");
        std::fs::write(&input_path, csv).unwrap();
        Settings {
            input_path,
            output_dir: dir.to_path_buf(),
            ..Settings::default()
        }
    }

    #[test]
    fn prepare_prints_overview_and_drops_rows() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path(), SAMPLE);
        let mut out = Vec::new();

        let cleaned = prepare(&settings, &mut out).unwrap();
        assert_eq!(cleaned.len(), 4);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("popularity"));
        assert!(!text.contains("Alpha"));
    }

    #[test]
    fn prepare_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path(), SAMPLE);
        let (mut first, mut second) = (Vec::new(), Vec::new());
        prepare(&settings, &mut first).unwrap();
        prepare(&settings, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_input_is_reported_before_any_output() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            input_path: dir.path().join("data.csv"),
            output_dir: dir.path().to_path_buf(),
            ..Settings::default()
        };
        let mut out = Vec::new();

        let err = run(&settings, &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::FileNotFound(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn missing_columns_skip_only_their_steps() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path(), "title,popularity\nA,1.0\n");
        let mut out = Vec::new();
        let dataset = prepare(&settings, &mut out).unwrap();

        for (name, file_name, step) in PLOT_STEPS {
            let outcome = run_plot_step(name, step, &dataset, &settings, file_name).unwrap();
            assert!(matches!(outcome, StepOutcome::SkippedMissingColumn(_)));
            assert!(!settings.output_path(file_name).exists());
        }

        let moments = Moments::of_column(&dataset, VOTE_AVERAGE).unwrap();
        let before = out.len();
        report::write_moments(&mut out, &moments, VOTE_AVERAGE).unwrap();
        assert_eq!(out.len(), before);
    }

    #[test]
    fn non_numeric_target_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(
            dir.path(),
            &format!("{ORIGINAL_LANGUAGE},{VOTE_AVERAGE}\nen,good\n"),
        );
        let mut out = Vec::new();
        let dataset = prepare(&settings, &mut out).unwrap();

        let (name, file_name, step) = PLOT_STEPS[1];
        assert!(run_plot_step(name, step, &dataset, &settings, file_name).is_err());
    }

    #[test]
    fn skipped_step_does_not_stop_later_steps() {
        let dir = tempfile::tempdir().unwrap();
        let csv = format!("{ORIGINAL_LANGUAGE},{VOTE_AVERAGE}\nen,7.0\nfr,5.0\nen,6.0\n");
        let settings = settings_for(dir.path(), &csv);
        let mut out = Vec::new();

        run_with_steps(&settings, &MARKER_STEPS, &mut out).unwrap();
        assert!(!settings.output_path(RELATIONAL_PLOT_FILE).exists());
        assert!(settings.output_path(STATISTICAL_PLOT_FILE).exists());
        assert!(settings.output_path(CATEGORICAL_PLOT_FILE).exists());
        assert!(String::from_utf8(out).unwrap().contains("For the attribute vote_average:"));
    }

    #[test]
    fn stdout_is_identical_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path(), SAMPLE);
        let (mut first, mut second) = (Vec::new(), Vec::new());

        run_with_steps(&settings, &MARKER_STEPS, &mut first).unwrap();
        run_with_steps(&settings, &MARKER_STEPS, &mut second).unwrap();
        assert_eq!(first, second);
        assert!(String::from_utf8(first).unwrap().contains("The data was"));
        for file_name in [RELATIONAL_PLOT_FILE, CATEGORICAL_PLOT_FILE, STATISTICAL_PLOT_FILE] {
            assert!(settings.output_path(file_name).exists());
        }
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn relational_skip_leaves_other_charts() {
        let dir = tempfile::tempdir().unwrap();
        let csv = format!("{ORIGINAL_LANGUAGE},{VOTE_AVERAGE}\nen,7.0\nfr,5.0\nen,6.0\n");
        let settings = settings_for(dir.path(), &csv);
        let mut out = Vec::new();

        run(&settings, &mut out).unwrap();
        assert!(!settings.output_path(RELATIONAL_PLOT_FILE).exists());
        assert!(settings.output_path(STATISTICAL_PLOT_FILE).exists());
        assert!(settings.output_path(CATEGORICAL_PLOT_FILE).exists());
        assert!(String::from_utf8(out).unwrap().contains("For the attribute vote_average:"));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn full_run_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path(), SAMPLE);
        let (mut first, mut second) = (Vec::new(), Vec::new());

        run(&settings, &mut first).unwrap();
        run(&settings, &mut second).unwrap();
        assert_eq!(first, second);
        for file_name in [RELATIONAL_PLOT_FILE, CATEGORICAL_PLOT_FILE, STATISTICAL_PLOT_FILE] {
            assert!(settings.output_path(file_name).exists());
        }
    }
}
