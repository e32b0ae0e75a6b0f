/// Battery state. A machine without a battery reports `present: false`
/// with every optional field empty, which is distinct from a reading of
/// zero.
#[derive(Debug, Clone, Default)]
pub struct BatteryInfo {
    pub present: bool,
    pub percent: Option<f32>,
    pub plugged: Option<bool>,
    pub secs_left: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_means_capability_absent() {
        let battery = BatteryInfo::default();
        assert!(!battery.present);
        assert_eq!(battery.percent, None);
        assert_eq!(battery.plugged, None);
        assert_eq!(battery.secs_left, None);
    }
}
