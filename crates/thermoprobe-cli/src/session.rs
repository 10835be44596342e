//! Fixed-cadence sampling loop.

use std::time::Duration;
use thermoprobe_hw::TemperatureSource;
use tracing::{debug, info, warn};

/// Readings must be strictly above this value, after rounding, to count
/// as samples; anything at or below it is treated as sensor noise.
pub const NOISE_FLOOR: f64 = 10.0;

/// Timing parameters of one sampling session.
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    /// Total monitoring duration.
    pub duration: Duration,

    /// Pause between consecutive samples.
    pub interval: Duration,
}

impl SessionSettings {
    /// Number of sampling ticks the session performs.
    pub fn total_ticks(&self) -> u64 {
        self.duration.as_secs() / self.interval.as_secs()
    }
}

/// Runs the sampling loop against the selected sensor.
///
/// Performs [`SessionSettings::total_ticks`] iterations. Each tick
/// refreshes the source, re-resolves the sensor by label in the fresh
/// snapshot, and reads its value. Accepted readings are rounded to two
/// decimals and must exceed [`NOISE_FLOOR`]; absent readings are
/// skipped without aborting the loop. Sleeps one interval between
/// ticks, never after the last one.
pub async fn run<S: TemperatureSource>(
    source: &mut S,
    label: &str,
    settings: &SessionSettings,
) -> Vec<f64> {
    let total = settings.total_ticks();
    let mut samples = Vec::new();

    for tick in 1..=total {
        source.refresh();

        let value = source
            .cpu_sensors()
            .iter()
            .find(|s| s.label == label)
            .and_then(|s| s.temperature);

        match value {
            Some(raw) => {
                let rounded = (raw * 100.0).round() / 100.0;
                if rounded > NOISE_FLOOR {
                    info!("Tick {}/{}: {:.2} °C", tick, total, rounded);
                    samples.push(rounded);
                } else {
                    debug!(
                        "Tick {}/{}: {:.2} °C at or below noise floor, discarded",
                        tick, total, rounded
                    );
                }
            }
            None => {
                warn!("Tick {}/{}: no reading available, skipping", tick, total);
            }
        }

        if tick < total {
            tokio::time::sleep(settings.interval).await;
        }
    }

    samples
}
