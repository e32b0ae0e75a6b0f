#[derive(Debug, Clone, Default)]
pub struct RamInfo {
    pub used_gb: f64,
    pub total_gb: f64,
    pub percent: f32,
}
