use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a flight configuration, i.e. one motor loadout of the whole airframe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct FlightConfigId(String);

impl FlightConfigId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FlightConfigId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for FlightConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rocket motor as far as the airframe geometry is concerned.
#[derive(Debug, Clone, PartialEq)]
pub struct Motor {
    /// Manufacturer designation (e.g., "C6-5").
    pub designation: String,
    /// Casing diameter in meters.
    pub diameter: f64,
    /// Casing length in meters.
    pub length: f64,
}

impl Motor {
    pub fn new(designation: &str, diameter: f64, length: f64) -> Self {
        Self {
            designation: designation.to_string(),
            diameter: diameter.max(0.0),
            length: length.max(0.0),
        }
    }
}

/// The flight event that ignites a motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IgnitionEvent {
    /// Launch for first stage motors, burnout of the previous stage otherwise.
    #[default]
    Automatic,
    Launch,
    EjectionCharge,
    Burnout,
    Never,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Invalid ignition event '{0}'")]
pub struct ParseIgnitionEventError(pub String);

impl FromStr for IgnitionEvent {
    type Err = ParseIgnitionEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "automatic" | "auto" => Ok(IgnitionEvent::Automatic),
            "launch" => Ok(IgnitionEvent::Launch),
            "ejection-charge" | "ejection" => Ok(IgnitionEvent::EjectionCharge),
            "burnout" => Ok(IgnitionEvent::Burnout),
            "never" => Ok(IgnitionEvent::Never),
            _ => Err(ParseIgnitionEventError(s.to_string())),
        }
    }
}

impl fmt::Display for IgnitionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                IgnitionEvent::Automatic => "automatic",
                IgnitionEvent::Launch => "launch",
                IgnitionEvent::EjectionCharge => "ejection-charge",
                IgnitionEvent::Burnout => "burnout",
                IgnitionEvent::Never => "never",
            }
        )
    }
}

/// Motor assignment and timing of one mount in one flight configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotorConfiguration {
    pub motor: Option<Motor>,
    /// Delay from burnout to ejection charge in seconds.
    pub ejection_delay: f64,
    pub ignition_event: IgnitionEvent,
    /// Delay from the ignition event to ignition in seconds.
    pub ignition_delay: f64,
}

impl MotorConfiguration {
    pub fn with_motor(motor: Motor) -> Self {
        Self {
            motor: Some(motor),
            ..Self::default()
        }
    }
}
