//! Sensor selection.
//!
//! Out of the candidate CPU temperature sensors, exactly one is chosen
//! at session start and monitored for the whole run.

use thermoprobe_hw::SensorReading;

/// Label fragments that identify a package-level temperature reading.
/// Matched case-sensitively.
pub const PREFERRED_LABELS: [&str; 3] = ["Package", "Average", "Tdie"];

/// Picks the sensor to monitor for the session.
///
/// Ranking, first match wins:
/// 1. the first sensor whose label contains one of [`PREFERRED_LABELS`]
///    and whose value is present and above zero,
/// 2. the sensor with the largest present value above zero, earliest
///    occurrence winning ties,
/// 3. the first sensor in the list regardless of value state.
///
/// Returns `None` only for an empty candidate list.
pub fn select_sensor(sensors: &[SensorReading]) -> Option<&SensorReading> {
    if let Some(preferred) = sensors.iter().find(|s| {
        PREFERRED_LABELS.iter().any(|p| s.label.contains(p))
            && s.temperature.is_some_and(|t| t > 0.0)
    }) {
        return Some(preferred);
    }

    let mut hottest: Option<(&SensorReading, f64)> = None;
    for sensor in sensors {
        let Some(t) = sensor.temperature else { continue };
        if t <= 0.0 {
            continue;
        }
        match hottest {
            Some((_, best)) if best >= t => {}
            _ => hottest = Some((sensor, t)),
        }
    }
    if let Some((sensor, _)) = hottest {
        return Some(sensor);
    }

    sensors.first()
}
