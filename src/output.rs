use crate::testbed::StepSummary;

use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error while writing summaries: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize summaries to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
}

/// Persists the summary sequence produced by a testbed run. The csv format
/// writes one headerless `step,average_reward,percent_optimal` row per time
/// step; json writes the whole sequence as a single array.
pub fn write_summaries(
    path: &Path,
    format: OutputFormat,
    summaries: &[StepSummary],
) -> Result<(), OutputError> {
    let mut writer = BufWriter::new(File::create(path)?);

    match format {
        OutputFormat::Csv => {
            for (step, summary) in summaries.iter().enumerate() {
                writeln!(
                    writer,
                    "{},{},{}",
                    step, summary.average_reward, summary.percent_optimal
                )?;
            }
        }
        OutputFormat::Json => serde_json::to_writer(&mut writer, summaries)?,
    }

    writer.flush()?;
    info!(path = %path.display(), rows = summaries.len(), "Wrote step summaries");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn summaries() -> Vec<StepSummary> {
        vec![
            StepSummary {
                average_reward: 0.5,
                percent_optimal: 0.25,
            },
            StepSummary {
                average_reward: 1.5,
                percent_optimal: 1.0,
            },
        ]
    }

    #[test]
    fn writes_one_csv_row_per_step() {
        let path = std::env::temp_dir().join("bandit_testbed_summaries.csv");
        write_summaries(&path, OutputFormat::Csv, &summaries()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = contents.lines().collect();
        assert_eq!(rows, vec!["0,0.5,0.25", "1,1.5,1"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn writes_json_array() {
        let path = std::env::temp_dir().join("bandit_testbed_summaries.json");
        write_summaries(&path, OutputFormat::Json, &summaries()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.as_array().map(|rows| rows.len()), Some(2));

        let _ = fs::remove_file(&path);
    }
}
