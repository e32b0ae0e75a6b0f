use humansize::{format_size, BINARY};
use std::time::{SystemTime, UNIX_EPOCH};

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

/// Seconds since the Unix epoch, fractional.
pub fn epoch_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

/// Bytes to gigabytes, rounded to 2 decimal places.
pub fn bytes_to_gb(bytes: u64) -> f64 {
    round2(bytes as f64 / BYTES_PER_GB)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_speed(bps: f64) -> String {
    format!("{}/s", format_size(bps.max(0.0) as u64, BINARY))
}

/// "2h 30m" above an hour, "5m 0s" above a minute, "45s" below.
pub fn format_duration(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{}h {}m", h, m)
    } else if m > 0 {
        format!("{}m {}s", m, s)
    } else {
        format!("{}s", s)
    }
}

/// Battery time remaining, "N/A" when the provider cannot estimate it.
pub fn format_time_left(secs: Option<u64>) -> String {
    match secs {
        Some(secs) => format!("{}h {}m", secs / 3600, (secs % 3600) / 60),
        None => "N/A".to_string(),
    }
}
