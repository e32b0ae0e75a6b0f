use log::debug;
use std::time::Instant;
use sysinfo::System as SysInfo;

use crate::models::memory::RamInfo;
use crate::utils::units::bytes_to_gb;

pub fn collect_ram(sys: &mut SysInfo) -> RamInfo {
    let start = Instant::now();
    sys.refresh_memory();
    let used = sys.used_memory();
    let total = sys.total_memory();
    let percent = if total > 0 {
        used as f32 / total as f32 * 100.0
    } else {
        0.0
    };
    let result = RamInfo {
        used_gb: bytes_to_gb(used),
        total_gb: bytes_to_gb(total),
        percent,
    };
    debug!("collect_ram took: {} ms", start.elapsed().as_millis());
    result
}
