use super::motor::{FlightConfigId, Motor, MotorConfiguration};
use crate::core::utils::math::approx_eq;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MountError {
    #[error("No motor with id {config} defined.")]
    MissingMotor { config: FlightConfigId },
}

/// Per flight configuration motor storage of a single motor mount.
///
/// Configurations that were never set explicitly fall back to the default configuration.
/// The mount owns all of its state, so cloning it yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotorMount {
    configurations: HashMap<FlightConfigId, MotorConfiguration>,
    default_configuration: MotorConfiguration,
}

impl MotorMount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configuration for `id`, or the default configuration if `id` has none.
    pub fn flight_configuration(&self, id: &FlightConfigId) -> &MotorConfiguration {
        self.configurations
            .get(id)
            .unwrap_or(&self.default_configuration)
    }

    /// Stores `config` under `id`. Returns `true` if the effective configuration changed.
    pub fn set_flight_configuration(
        &mut self,
        id: FlightConfigId,
        config: MotorConfiguration,
    ) -> bool {
        if self.configurations.get(&id) == Some(&config) {
            return false;
        }
        self.configurations.insert(id, config);
        true
    }

    /// Copies the settings of `from` (or the default) under the new id `to`.
    pub fn clone_flight_configuration(&mut self, from: &FlightConfigId, to: FlightConfigId) -> bool {
        let config = self.flight_configuration(from).clone();
        self.set_flight_configuration(to, config)
    }

    pub fn default_flight_configuration(&self) -> &MotorConfiguration {
        &self.default_configuration
    }

    pub(crate) fn default_flight_configuration_mut(&mut self) -> &mut MotorConfiguration {
        &mut self.default_configuration
    }

    pub fn set_default_flight_configuration(&mut self, config: MotorConfiguration) -> bool {
        if self.default_configuration == config {
            return false;
        }
        self.default_configuration = config;
        true
    }

    /// Ids of all explicitly stored configurations, in no particular order.
    pub fn configuration_ids(&self) -> impl Iterator<Item = &FlightConfigId> {
        self.configurations.keys()
    }

    pub fn motor(&self, id: &FlightConfigId) -> Option<&Motor> {
        self.flight_configuration(id).motor.as_ref()
    }

    /// Assigns `motor` to configuration `id`. Returns `true` only if the stored motor changed.
    pub fn set_motor(&mut self, id: &FlightConfigId, motor: Option<Motor>) -> bool {
        if self.motor(id) == motor.as_ref() {
            return false;
        }
        self.configuration_entry(id).motor = motor;
        true
    }

    /// Ejection delay of the motor in configuration `id`.
    pub fn motor_delay(&self, id: &FlightConfigId) -> f64 {
        self.flight_configuration(id).ejection_delay
    }

    pub fn set_motor_delay(&mut self, id: &FlightConfigId, delay: f64) -> bool {
        if approx_eq(self.motor_delay(id), delay) {
            return false;
        }
        self.configuration_entry(id).ejection_delay = delay;
        true
    }

    fn configuration_entry(&mut self, id: &FlightConfigId) -> &mut MotorConfiguration {
        let default = &self.default_configuration;
        self.configurations
            .entry(id.clone())
            .or_insert_with(|| default.clone())
    }
}
