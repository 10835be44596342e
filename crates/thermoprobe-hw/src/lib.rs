//! Thermoprobe Hardware Library
//!
//! Access to the host's temperature sensors through a narrow
//! refresh-and-list contract. The sampling core never learns how a
//! reading is obtained, only that it can ask for the current sensor
//! snapshot and read a value out of it, or find none.

pub mod error;
pub mod reading;
pub mod source;

pub use error::{Error, Result};
pub use reading::SensorReading;
pub use source::{SystemSensors, TemperatureSource};
