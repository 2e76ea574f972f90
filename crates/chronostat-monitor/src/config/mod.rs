//! Monitor config loader (strict parsing).

pub mod schema;

use std::fs;

use chronostat_core::error::{ChronostatError, Result};

pub use schema::{MonitorConfig, MonitorSection};

pub fn load_from_file(path: &str) -> Result<MonitorConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ChronostatError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<MonitorConfig> {
    let cfg: MonitorConfig = serde_yaml::from_str(s)
        .map_err(|e| ChronostatError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
