//! chronostat monitor
//!
//! Runs the reporting loop the counter core is designed around:
//! - HTTP endpoint: GET /counters (flattened export as JSON)
//! - Periodic snapshot of the live counters into the report copy

use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use chronostat_core::stats::Stats;
use chronostat_monitor::{config, json::JsonStats};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Config (strict parsing + validate)
    let cfg = config::load_from_file("chronostat.yaml").expect("config load failed");

    let stats = JsonStats::new();
    stats.start(cfg.monitor.monitoring_port);

    tracing::info!(
        port = cfg.monitor.monitoring_port,
        interval_ms = cfg.monitor.snapshot_interval_ms,
        "chronostat-monitor starting"
    );

    let mut tick = tokio::time::interval(Duration::from_millis(cfg.monitor.snapshot_interval_ms));
    loop {
        tick.tick().await;
        stats.snapshot();
    }
}
