use anyhow::Context;
use serde::{Deserialize, Serialize};
use speedcore::ModelParameters;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub initial_speed: f64,
    pub rate_percent: i32,
    pub hours: u32,
    pub bind: SocketAddr,
    pub report_log: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let params = ModelParameters::default();
        Self {
            initial_speed: params.initial_speed,
            rate_percent: params.rate_percent,
            hours: params.hours,
            bind: SocketAddr::from(([127, 0, 0, 1], 9000)),
            report_log: PathBuf::from("tools/data/offline_report.log"),
        }
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading config {}", path_ref.display()))?;
        let config: AppConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(initial_speed: f64, rate_percent: i32, hours: u32) -> Self {
        Self {
            initial_speed,
            rate_percent,
            hours,
            ..Default::default()
        }
    }

    pub fn to_parameters(&self) -> anyhow::Result<ModelParameters> {
        ModelParameters::new(self.initial_speed, self.rate_percent, self.hours)
            .context("validating model parameters")
    }
}
