#[derive(Debug, Clone, Default)]
pub struct DiskInfo {
    pub mount: String,
    pub used_gb: f64,
    pub total_gb: f64,
    pub free_gb: f64,
    pub percent: f32,
}
