use anyhow::Context;
use speedcore::processing::{ModelReport, ReportBuilder};
use speedcore::ModelParameters;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Drives render cycles for the CLI and the HTTP bridge.
#[derive(Clone, Default)]
pub struct Runner {
    builder: Arc<ReportBuilder>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder(&self) -> &ReportBuilder {
        &self.builder
    }

    pub fn execute(&self, params: &ModelParameters) -> ModelReport {
        self.builder.build(params)
    }

    /// Appends a one-line summary of `report` to the log at `path`.
    pub fn append_report<P: AsRef<Path>>(&self, report: &ModelReport, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        let line = format!(
            "s0={} rate={}% hours={} final={:.2} interpretation={} points={}\n",
            report.parameters.initial_speed,
            report.parameters.rate_percent,
            report.parameters.hours,
            report.final_speed,
            report.interpretation.label(),
            report.curve.len()
        );
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening report log {}", path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("writing report log {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::AppConfig;
    use tempfile::tempdir;

    #[test]
    fn runner_executes_render_cycle() {
        let cfg = AppConfig::from_args(90.0, 8, 2);
        let report = Runner::new().execute(&cfg.to_parameters().unwrap());
        assert_eq!(report.curve.len(), 200);
        assert_eq!(format!("{:.2}", report.final_speed), "104.98");
    }

    #[test]
    fn report_log_appends_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/report.log");
        let runner = Runner::new();
        let report = runner.execute(&ModelParameters::default());
        runner.append_report(&report, &path).unwrap();
        runner.append_report(&report, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.starts_with("s0=90 rate=8% hours=2 final=104.98"));
    }
}
