use log::debug;
use std::collections::HashMap;

use crate::utils::units::{epoch_secs, format_duration};

const MAX_TITLE_CHARS: usize = 80;

/// Foreground process observed at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveApp {
    pub name: String,
    pub title: String,
    pub pid: u32,
}

/// One row of the top-usage report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppUsage {
    pub app: String,
    pub time: String,
}

/// Foreground-window introspection is a capability the host may not
/// have. The tracker is handed one of two variants at construction and
/// branches only on `enabled()`, never on platform checks.
pub trait ForegroundProvider {
    fn enabled(&self) -> bool;
    fn foreground_app(&self) -> Option<ActiveApp>;
}

/// Live provider backed by the platform window manager.
pub struct ForegroundWindow;

impl ForegroundProvider for ForegroundWindow {
    fn enabled(&self) -> bool {
        true
    }

    fn foreground_app(&self) -> Option<ActiveApp> {
        let window = match active_win_pos_rs::get_active_window() {
            Ok(window) => window,
            // also hit on compositors without focus introspection
            Err(()) => {
                debug!("Foreground window lookup failed");
                return None;
            }
        };
        if window.process_id == 0 {
            return None;
        }

        let pid = window.process_id as u32;
        let name = if window.app_name.is_empty() {
            window
                .process_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("PID {}", pid))
        } else {
            window.app_name
        };

        Some(ActiveApp {
            name,
            title: window.title.chars().take(MAX_TITLE_CHARS).collect(),
            pid,
        })
    }
}

/// Stub used when the tracker is switched off in the config or the
/// platform cannot support it.
pub struct Disabled;

impl ForegroundProvider for Disabled {
    fn enabled(&self) -> bool {
        false
    }

    fn foreground_app(&self) -> Option<ActiveApp> {
        None
    }
}

/// Attributes elapsed wall-clock time to whichever application held
/// focus, one observation per tick. Elapsed time is credited to the app
/// observed at the *start* of the interval, so the credit lands one
/// tick late by design.
pub struct ActiveWindowTracker {
    provider: Box<dyn ForegroundProvider + Send>,
    last_app: Option<ActiveApp>,
    last_ts: f64,
    usage_seconds: HashMap<String, u64>,
}

impl ActiveWindowTracker {
    pub fn new(enable: bool) -> Self {
        let provider: Box<dyn ForegroundProvider + Send> = if enable {
            Box::new(ForegroundWindow)
        } else {
            Box::new(Disabled)
        };
        Self::with_provider(provider)
    }

    pub fn with_provider(provider: Box<dyn ForegroundProvider + Send>) -> Self {
        ActiveWindowTracker {
            provider,
            last_app: None,
            last_ts: epoch_secs(),
            usage_seconds: HashMap::new(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.provider.enabled()
    }

    /// Call once per refresh cycle. Returns the current observation and
    /// a read-only copy of the ledger.
    pub fn tick(&mut self) -> (Option<ActiveApp>, HashMap<String, u64>) {
        let current = if self.provider.enabled() {
            self.provider.foreground_app()
        } else {
            None
        };
        self.observe(epoch_secs(), current)
    }

    fn observe(
        &mut self,
        now: f64,
        current: Option<ActiveApp>,
    ) -> (Option<ActiveApp>, HashMap<String, u64>) {
        let dt = (now - self.last_ts).max(0.0) as u64;
        self.last_ts = now;

        if let Some(last) = &self.last_app {
            if dt > 0 {
                *self.usage_seconds.entry(last.name.clone()).or_insert(0) += dt;
            }
        }

        self.last_app = current.clone();
        (current, self.usage_seconds.clone())
    }

    pub fn usage_seconds(&self) -> &HashMap<String, u64> {
        &self.usage_seconds
    }

    /// Apps ranked by accumulated focus time, descending, capped at
    /// `limit`.
    pub fn top_usage(usage_seconds: &HashMap<String, u64>, limit: usize) -> Vec<AppUsage> {
        let mut items: Vec<(&String, &u64)> = usage_seconds.iter().collect();
        items.sort_by(|a, b| b.1.cmp(a.1));
        items.truncate(limit);
        items
            .into_iter()
            .map(|(app, secs)| AppUsage {
                app: app.clone(),
                time: format_duration(*secs),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str) -> Option<ActiveApp> {
        Some(ActiveApp {
            name: name.to_string(),
            title: format!("{} window", name),
            pid: 42,
        })
    }

    fn tracker_at(t0: f64) -> ActiveWindowTracker {
        let mut tracker = ActiveWindowTracker::new(false);
        tracker.last_ts = t0;
        tracker
    }

    #[test]
    fn test_retroactive_attribution() {
        let mut tracker = tracker_at(0.0);
        tracker.observe(0.0, app("A"));

        // B comes to the front at t=5: the elapsed 5s belong to A
        let (current, ledger) = tracker.observe(5.0, app("B"));
        assert_eq!(current.unwrap().name, "B");
        assert_eq!(ledger.get("A"), Some(&5));
        assert_eq!(ledger.get("B"), None);

        let (_, ledger) = tracker.observe(8.0, app("A"));
        assert_eq!(ledger.get("A"), Some(&5));
        assert_eq!(ledger.get("B"), Some(&3));
    }

    #[test]
    fn test_ledger_sums_to_elapsed_time() {
        let mut tracker = tracker_at(0.0);
        tracker.observe(0.0, app("A"));
        tracker.observe(4.0, app("B"));
        tracker.observe(9.0, app("A"));
        let (_, ledger) = tracker.observe(10.0, app("A"));
        let total: u64 = ledger.values().sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn test_no_observation_attributes_nothing() {
        let mut tracker = tracker_at(0.0);
        tracker.observe(0.0, None);
        let (_, ledger) = tracker.observe(5.0, None);
        assert!(ledger.is_empty());

        // an interval starting with no observation stays unattributed
        tracker.observe(6.0, app("A"));
        let (_, ledger) = tracker.observe(9.0, None);
        assert_eq!(ledger.get("A"), Some(&3));
        assert_eq!(ledger.values().sum::<u64>(), 3);
    }

    #[test]
    fn test_clock_going_backwards_credits_nothing() {
        let mut tracker = tracker_at(10.0);
        tracker.observe(10.0, app("A"));
        let (_, ledger) = tracker.observe(7.0, app("A"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_disabled_tracker_is_a_noop() {
        let mut tracker = ActiveWindowTracker::new(false);
        assert!(!tracker.enabled());
        let (current, ledger) = tracker.tick();
        assert!(current.is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_top_usage_ranking_and_format() {
        let mut ledger = HashMap::new();
        ledger.insert("A".to_string(), 300u64);
        ledger.insert("B".to_string(), 9000u64);
        ledger.insert("C".to_string(), 45u64);

        let top = ActiveWindowTracker::top_usage(&ledger, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].app, "B");
        assert_eq!(top[0].time, "2h 30m");
        assert_eq!(top[1].app, "A");
        assert_eq!(top[1].time, "5m 0s");
    }
}
