/// Floor on the elapsed interval so back-to-back calls or a stalled
/// clock never divide by zero.
const MIN_INTERVAL_SECS: f64 = 1e-6;

/// Turns cumulative interface byte counters into instantaneous
/// throughput. State is replaced after every call; there is no reset.
#[derive(Debug, Clone)]
pub struct NetRate {
    last_sent: u64,
    last_recv: u64,
    last_ts: f64,
}

impl NetRate {
    pub fn new(sent: u64, recv: u64, ts: f64) -> Self {
        Self {
            last_sent: sent,
            last_recv: recv,
            last_ts: ts,
        }
    }

    /// Returns `(up_bps, down_bps)` for the interval since the previous
    /// call. A counter that went backwards (provider restart) counts as
    /// a zero delta rather than a negative rate.
    pub fn update(&mut self, sent: u64, recv: u64, now: f64) -> (f64, f64) {
        let dt = (now - self.last_ts).max(MIN_INTERVAL_SECS);
        let up_bps = sent.saturating_sub(self.last_sent) as f64 / dt;
        let down_bps = recv.saturating_sub(self.last_recv) as f64 / dt;

        self.last_sent = sent;
        self.last_recv = recv;
        self.last_ts = now;

        (up_bps, down_bps)
    }
}
