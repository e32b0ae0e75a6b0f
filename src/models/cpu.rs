#[derive(Debug, Clone, Default)]
pub struct CpuInfo {
    pub percent: f32,
    /// None when the platform exposes no frequency sensor.
    pub freq_mhz: Option<f64>,
    pub per_core: Vec<f32>,
}
