use log::debug;
use std::time::Instant;
use sysinfo::{Disks as SysInfoDisks, Networks as SysInfoNetworks, System as SysInfo};
use systemstat::{Platform, System as SystemStat};

use crate::config::AppConfig;
use crate::connections;
use crate::history::SnapshotHistory;
use crate::models::network::ConnectionRow;
use crate::models::{cpu::CpuInfo, network::NetInfo, Snapshot};
use crate::rate::NetRate;
use crate::utils::units::{bytes_to_gb, epoch_secs};

pub(crate) mod battery;
pub(crate) mod cpu;
pub(crate) mod disk;
pub(crate) mod memory;
pub(crate) mod network;

/// Pulls one full reading from the OS per tick. Per-subsystem failures
/// degrade into empty optional fields; `read_snapshot` itself never
/// fails.
pub struct Sampler {
    sys: SysInfo,
    disks: SysInfoDisks,
    networks: SysInfoNetworks,
    stat: SystemStat,
    rate: NetRate,
    history: SnapshotHistory,
}

impl Sampler {
    pub fn new(config: &AppConfig) -> Self {
        let mut sys = SysInfo::new_all();
        // Priming read: the provider reports CPU load as a delta since
        // the previous refresh, so the first measurement is discarded.
        sys.refresh_all();

        let disks = SysInfoDisks::new_with_refreshed_list();
        let mut networks = SysInfoNetworks::new_with_refreshed_list();
        let (sent, recv) = network::collect_counters(&mut networks);
        let rate = NetRate::new(sent, recv, epoch_secs());

        Sampler {
            sys,
            disks,
            networks,
            stat: SystemStat::new(),
            rate,
            history: SnapshotHistory::new(config.monitor.history_points),
        }
    }

    /// One complete reading. Also appends to all history series, so the
    /// chart data stays index-aligned with the returned snapshot.
    pub fn read_snapshot(&mut self) -> Snapshot {
        let start = Instant::now();
        let ts = epoch_secs();

        let (percent, per_core) = cpu::collect_usage(&mut self.sys);
        let freq_mhz = cpu::collect_frequency(&self.sys);
        let ram = memory::collect_ram(&mut self.sys);
        let disks = disk::collect_volumes(&mut self.disks);

        let (sent, recv) = network::collect_counters(&mut self.networks);
        let (up_bps, down_bps) = self.rate.update(sent, recv, ts);
        let net = NetInfo {
            up_bps,
            down_bps,
            total_sent_gb: bytes_to_gb(sent),
            total_recv_gb: bytes_to_gb(recv),
        };

        let battery = battery::collect_battery(&self.stat);

        let snap = Snapshot {
            ts,
            cpu: CpuInfo {
                percent,
                freq_mhz,
                per_core,
            },
            ram,
            disks,
            net,
            battery,
        };
        self.history.record(&snap);

        debug!("read_snapshot took: {} ms", start.elapsed().as_millis());
        snap
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    /// Ranked connection table, capped at `max_rows`. Enumeration
    /// failure yields an empty list, never an error.
    pub fn connections(&mut self, max_rows: usize) -> Vec<ConnectionRow> {
        connections::list_connections(&mut self.sys, max_rows)
    }
}
