use log::debug;
use std::collections::HashSet;
use std::time::Instant;
use sysinfo::Disks as SysInfoDisks;

use crate::models::disk::DiskInfo;
use crate::utils::units::bytes_to_gb;

/// Usage per mounted volume. A volume whose usage cannot be read
/// (reported with a total of zero) is skipped rather than failing the
/// whole read.
pub fn collect_volumes(disks: &mut SysInfoDisks) -> Vec<DiskInfo> {
    let start = Instant::now();
    let mut volumes = Vec::new();

    disks.refresh(true);
    for disk in disks.iter() {
        let total = disk.total_space();
        if total == 0 {
            continue;
        }
        let free = disk.available_space();
        let used = total.saturating_sub(free);
        volumes.push(DiskInfo {
            mount: disk.mount_point().to_string_lossy().into_owned(),
            used_gb: bytes_to_gb(used),
            total_gb: bytes_to_gb(total),
            free_gb: bytes_to_gb(free),
            percent: used as f32 / total as f32 * 100.0,
        });
    }

    let result = dedup_and_sort(volumes);
    debug!("collect_volumes took: {} ms", start.elapsed().as_millis());
    result
}

/// First occurrence wins on a duplicate mount key; output is ordered by
/// case-folded mount name.
pub(crate) fn dedup_and_sort(volumes: Vec<DiskInfo>) -> Vec<DiskInfo> {
    let mut seen = HashSet::new();
    let mut result: Vec<DiskInfo> = volumes
        .into_iter()
        .filter(|v| seen.insert(v.mount.clone()))
        .collect();
    result.sort_by_key(|v| v.mount.to_lowercase());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(mount: &str, total_gb: f64) -> DiskInfo {
        DiskInfo {
            mount: mount.to_string(),
            used_gb: 0.0,
            total_gb,
            free_gb: total_gb,
            percent: 0.0,
        }
    }

    #[test]
    fn test_duplicate_mount_keeps_first() {
        let volumes = vec![volume("/", 100.0), volume("/", 200.0), volume("/home", 50.0)];
        let result = dedup_and_sort(volumes);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].mount, "/");
        assert_eq!(result[0].total_gb, 100.0);
    }

    #[test]
    fn test_sorted_case_insensitively() {
        let volumes = vec![volume("D:\\", 1.0), volume("c:\\", 1.0), volume("B:\\", 1.0)];
        let result = dedup_and_sort(volumes);
        let mounts: Vec<&str> = result.iter().map(|v| v.mount.as_str()).collect();
        assert_eq!(mounts, vec!["B:\\", "c:\\", "D:\\"]);
    }
}
