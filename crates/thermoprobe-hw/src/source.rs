//! Temperature sensor sources.
//!
//! [`TemperatureSource`] is the contract the sampling loop drives:
//! refresh the hardware state, then list the CPU-class temperature
//! sensors of the fresh snapshot. [`SystemSensors`] implements it on
//! top of the platform component list.

use sysinfo::Components;
use tracing::{debug, info};

use crate::{Error, Result, SensorReading};

/// Label fragments that mark a component as belonging to the CPU
/// hardware node. Matched case-insensitively against component labels
/// such as "coretemp Package id 0" or "k10temp Tdie".
const CPU_LABEL_HINTS: [&str; 6] = ["cpu", "core", "package", "tdie", "tctl", "k10temp"];

/// Source of temperature sensor snapshots.
pub trait TemperatureSource {
    /// Re-reads hardware state so the next listing reflects it.
    fn refresh(&mut self);

    /// Returns the CPU-class temperature sensors of the current
    /// snapshot, in enumeration order.
    fn cpu_sensors(&self) -> Vec<SensorReading>;
}

/// Sensor access backed by the platform component list.
pub struct SystemSensors {
    components: Components,
}

impl SystemSensors {
    /// Opens the sensor interface.
    ///
    /// Fails on platforms without component enumeration support. An
    /// open that finds zero components succeeds; the empty candidate
    /// list surfaces at sensor selection instead.
    pub fn open() -> Result<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(Error::Unsupported);
        }

        let components = Components::new_with_refreshed_list();
        info!(
            "Sensor interface opened ({} temperature components)",
            components.len()
        );

        Ok(Self { components })
    }

    /// Returns every temperature component of the current snapshot,
    /// CPU-class or not. Intended for discovery diagnostics.
    pub fn all_sensors(&self) -> Vec<SensorReading> {
        self.components
            .iter()
            .map(|c| SensorReading::new(c.label(), c.temperature().map(f64::from)))
            .collect()
    }
}

impl TemperatureSource for SystemSensors {
    fn refresh(&mut self) {
        self.components.refresh(true);
        debug!("Refreshed {} components", self.components.len());
    }

    fn cpu_sensors(&self) -> Vec<SensorReading> {
        self.components
            .iter()
            .filter(|c| is_cpu_label(c.label()))
            .map(|c| SensorReading::new(c.label(), c.temperature().map(f64::from)))
            .collect()
    }
}

/// Returns true if a component label looks like a CPU temperature
/// sensor.
fn is_cpu_label(label: &str) -> bool {
    let lower = label.to_lowercase();
    CPU_LABEL_HINTS.iter().any(|hint| lower.contains(hint))
}
