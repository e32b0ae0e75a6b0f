pub mod battery;
pub mod cpu;
pub mod disk;
pub mod memory;
pub mod network;


/// One complete telemetry reading, captured in a single tick.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub ts: f64,
    pub cpu: cpu::CpuInfo,
    pub ram: memory::RamInfo,
    pub disks: Vec<disk::DiskInfo>,
    pub net: network::NetInfo,
    pub battery: battery::BatteryInfo,
}
