use log::debug;
use std::time::Instant;
use systemstat::{Platform, System as SystemStat};

use crate::models::battery::BatteryInfo;

/// Battery state, or `present: false` on machines without one. The
/// provider reporting an error here is the normal desktop case, so it
/// is logged at debug level only.
pub fn collect_battery(sys: &SystemStat) -> BatteryInfo {
    let start = Instant::now();
    let result = match sys.battery_life() {
        Ok(battery) => {
            let secs = battery.remaining_time.as_secs();
            BatteryInfo {
                present: true,
                percent: Some(battery.remaining_capacity * 100.0),
                plugged: sys.on_ac_power().ok(),
                // zero means the estimate is not available yet
                secs_left: if secs == 0 { None } else { Some(secs) },
            }
        }
        Err(x) => {
            debug!("Battery status unavailable: {}", x);
            BatteryInfo::default()
        }
    };
    debug!("collect_battery took: {} ms", start.elapsed().as_millis());
    result
}
