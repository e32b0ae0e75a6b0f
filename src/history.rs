use std::collections::VecDeque;

use crate::models::Snapshot;

/// Bounded FIFO of scalar samples. Appending at capacity evicts the
/// oldest element; reads never mutate.
#[derive(Debug, Clone)]
pub struct History<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T: Copy> History<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.buf.len() >= self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.buf.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// The rolling series behind the charts. All five are appended in one
/// call per tick so their indices stay aligned.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    pub ts: History<f64>,
    pub cpu: History<f32>,
    pub ram: History<f32>,
    pub net_up: History<f64>,
    pub net_down: History<f64>,
}

impl SnapshotHistory {
    pub fn new(points: usize) -> Self {
        Self {
            ts: History::new(points),
            cpu: History::new(points),
            ram: History::new(points),
            net_up: History::new(points),
            net_down: History::new(points),
        }
    }

    pub fn record(&mut self, snap: &Snapshot) {
        self.ts.push(snap.ts);
        self.cpu.push(snap.cpu.percent);
        self.ram.push(snap.ram.percent);
        self.net_up.push(snap.net.up_bps);
        self.net_down.push(snap.net.down_bps);
    }
}
