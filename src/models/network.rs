#[derive(Debug, Clone, Default)]
pub struct NetInfo {
    pub up_bps: f64,
    pub down_bps: f64,
    pub total_sent_gb: f64,
    pub total_recv_gb: f64,
}

/// One row of the ranked connection table. Recomputed on every call,
/// never stored.
#[derive(Debug, Clone)]
pub struct ConnectionRow {
    pub local: String,
    pub remote: String,
    pub status: String,
    pub pid: Option<u32>,
    pub process: String,
}
