use crate::core::models::motor::FlightConfigId;
use crate::core::text::{DefaultTranslator, Translator};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Settings of an assembly inspection.
#[derive(Clone)]
pub struct InspectConfig {
    /// Flight configuration whose motors are reported.
    pub flight_config: FlightConfigId,
    /// Fail instead of reporting `None` when an enabled motor mount has no motor.
    pub require_motors: bool,
    pub translator: Arc<dyn Translator + Send + Sync>,
}

impl fmt::Debug for InspectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectConfig")
            .field("flight_config", &self.flight_config)
            .field("require_motors", &self.require_motors)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    flight_config: Option<FlightConfigId>,
    require_motors: Option<bool>,
    translator: Option<Arc<dyn Translator + Send + Sync>>,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flight_config(mut self, id: FlightConfigId) -> Self {
        self.flight_config = Some(id);
        self
    }
    pub fn require_motors(mut self, require: bool) -> Self {
        self.require_motors = Some(require);
        self
    }
    pub fn translator(mut self, translator: Arc<dyn Translator + Send + Sync>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn build(self) -> Result<InspectConfig, ConfigError> {
        Ok(InspectConfig {
            flight_config: self
                .flight_config
                .ok_or(ConfigError::MissingParameter("flight_config"))?,
            require_motors: self.require_motors.unwrap_or(false),
            translator: self
                .translator
                .unwrap_or_else(|| Arc::new(DefaultTranslator)),
        })
    }
}
