use log::debug;
use std::time::Instant;
use sysinfo::Networks as SysInfoNetworks;

/// Cumulative `(sent, received)` byte counters summed across all
/// interfaces. The rate calculator turns consecutive readings into
/// throughput.
pub fn collect_counters(networks: &mut SysInfoNetworks) -> (u64, u64) {
    let start = Instant::now();
    networks.refresh(true);
    let result = networks.iter().fold((0u64, 0u64), |(sent, recv), (_, data)| {
        (
            sent.saturating_add(data.total_transmitted()),
            recv.saturating_add(data.total_received()),
        )
    });
    debug!("collect_counters took: {} ms", start.elapsed().as_millis());
    result
}
