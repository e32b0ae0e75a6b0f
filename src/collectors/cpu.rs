use log::debug;
use std::time::Instant;
use sysinfo::System as SysInfo;

/// Overall and per-core utilisation since the previous refresh. The
/// provider reports load as a delta between refreshes, so the sampler
/// primes one refresh at construction and discards it.
pub fn collect_usage(sys: &mut SysInfo) -> (f32, Vec<f32>) {
    let start = Instant::now();
    sys.refresh_cpu_usage();
    let percent = sys.global_cpu_usage();
    let per_core = sys.cpus().iter().map(|cpu| cpu.cpu_usage()).collect();
    debug!("collect_usage took: {} ms", start.elapsed().as_millis());
    (percent, per_core)
}

/// Frequency of the first core in MHz, None when the sensor is absent.
pub fn collect_frequency(sys: &SysInfo) -> Option<f64> {
    let mhz = sys.cpus().first().map(|cpu| cpu.frequency()).unwrap_or(0);
    if mhz == 0 {
        None
    } else {
        Some(mhz as f64)
    }
}
