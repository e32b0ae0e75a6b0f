pub mod config;

use crate::collectors::Sampler;
use crate::config::AppConfig;
use crate::tracker::ActiveWindowTracker;
use crate::utils::units::{format_speed, format_time_left};
use log::{debug, error, info, warn};
use std::time::Duration;

pub mod collectors;
pub mod connections;
pub mod history;
pub mod models;
pub mod rate;
pub mod tracker;
pub mod utils;

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting telemetry engine");

    tokio::select! {
        result = main_loop(config) => {
            match result {
                Ok(_) => info!("Engine completed successfully"),
                Err(e) => {
                    error!("Engine error: {e:#}");
                    // Print chain of error causes
                    let mut source = e.source();
                    while let Some(e) = source {
                        error!("Caused by: {e}");
                        source = e.source();
                    }
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}

/// The external scheduler: one engine tick per refresh interval. All
/// engine state lives on this single task, so there is no locking.
async fn main_loop(config: AppConfig) -> anyhow::Result<()> {
    let mut interval = tokio::time::interval(Duration::from_millis(config.monitor.refresh_ms.max(1)));

    let mut sampler = Sampler::new(&config);
    let mut tracker = ActiveWindowTracker::new(config.monitor.enable_app_usage_tracker);
    if !tracker.enabled() {
        info!("App usage tracker disabled");
    }

    loop {
        interval.tick().await; // Wait for the next tick

        let snap = sampler.read_snapshot();
        let rows = sampler.connections(config.monitor.max_connections_rows);
        let (active, usage) = tracker.tick();

        info!(
            "cpu {:.1}% | ram {:.1}% ({:.2}/{:.2} GB) | up {} | down {} | {} conns",
            snap.cpu.percent,
            snap.ram.percent,
            snap.ram.used_gb,
            snap.ram.total_gb,
            format_speed(snap.net.up_bps),
            format_speed(snap.net.down_bps),
            rows.len(),
        );

        if snap.cpu.percent >= config.alerts.cpu_crit {
            warn!("CPU critical: {:.1}%", snap.cpu.percent);
        } else if snap.cpu.percent >= config.alerts.cpu_warn {
            warn!("CPU high: {:.1}%", snap.cpu.percent);
        }
        if snap.ram.percent >= config.alerts.ram_crit {
            warn!("RAM critical: {:.1}%", snap.ram.percent);
        } else if snap.ram.percent >= config.alerts.ram_warn {
            warn!("RAM high: {:.1}%", snap.ram.percent);
        }
        for disk in &snap.disks {
            if disk.free_gb <= config.alerts.disk_free_crit_gb {
                warn!("Disk {} critically low: {:.2} GB free", disk.mount, disk.free_gb);
            } else if disk.free_gb <= config.alerts.disk_free_warn_gb {
                warn!("Disk {} low: {:.2} GB free", disk.mount, disk.free_gb);
            }
        }

        if snap.battery.present {
            debug!(
                "battery {:.0}% | {} left",
                snap.battery.percent.unwrap_or(0.0),
                format_time_left(snap.battery.secs_left)
            );
        }
        if let Some(app) = &active {
            debug!("foreground: {} (pid {})", app.name, app.pid);
        }
        for entry in ActiveWindowTracker::top_usage(&usage, 5) {
            debug!("usage: {} {}", entry.app, entry.time);
        }
    }
}
