//! Sensor snapshot entries.

/// One temperature-capable sensor as reported by a snapshot.
///
/// Readings are ephemeral: a fresh set is obtained from the source after
/// every refresh, and a sensor is re-located by its label rather than
/// held onto across refreshes.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// Sensor label, e.g. "coretemp Package id 0".
    pub label: String,

    /// Current temperature in degrees Celsius, if the sensor has a
    /// value this instant.
    pub temperature: Option<f64>,
}

impl SensorReading {
    /// Creates a new reading.
    pub fn new(label: &str, temperature: Option<f64>) -> Self {
        Self {
            label: label.to_string(),
            temperature,
        }
    }
}
