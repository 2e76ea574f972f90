use chronostat_core::error::{ChronostatError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    pub version: u32,

    #[serde(default)]
    pub monitor: MonitorSection,
}

impl MonitorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ChronostatError::UnsupportedVersion);
        }

        self.monitor.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    #[serde(default = "default_monitoring_port")]
    pub monitoring_port: u16,

    #[serde(default = "default_snapshot_interval_ms")]
    pub snapshot_interval_ms: u64,
}

impl Default for MonitorSection {
    fn default() -> Self {
        Self {
            monitoring_port: default_monitoring_port(),
            snapshot_interval_ms: default_snapshot_interval_ms(),
        }
    }
}

impl MonitorSection {
    pub fn validate(&self) -> Result<()> {
        if self.monitoring_port == 0 {
            return Err(ChronostatError::BadConfig(
                "monitor.monitoring_port must not be 0".into(),
            ));
        }
        if !(100..=60000).contains(&self.snapshot_interval_ms) {
            return Err(ChronostatError::BadConfig(
                "monitor.snapshot_interval_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_monitoring_port() -> u16 {
    4269
}
fn default_snapshot_interval_ms() -> u64 {
    1000
}
