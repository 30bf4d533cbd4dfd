use super::body_tube::BodyTube;
use super::symmetric::{AutoRadius, ChainNeighbors, SymmetricComponent};
use super::transition::Transition;
use crate::core::text::Translator;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Structural category of a component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentCategory {
    /// Outer shell of the airframe (body tubes, nose cones, transitions).
    Body,
    /// Mounted on the outside of a body component (fins, launch lugs).
    External,
    /// Housed inside a body component (couplers, bulkheads, recovery gear).
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    // --- Body ---
    BodyTube,
    NoseCone,
    Transition,

    // --- External ---
    FinSet,
    LaunchLug,
    RailButton,

    // --- Internal ---
    InnerTube,
    TubeCoupler,
    CenteringRing,
    Bulkhead,
    EngineBlock,
    Parachute,
    Streamer,
    ShockCord,
    MassComponent,
}

impl ComponentKind {
    pub fn category(self) -> ComponentCategory {
        match self {
            ComponentKind::BodyTube | ComponentKind::NoseCone | ComponentKind::Transition => {
                ComponentCategory::Body
            }
            ComponentKind::FinSet | ComponentKind::LaunchLug | ComponentKind::RailButton => {
                ComponentCategory::External
            }
            ComponentKind::InnerTube
            | ComponentKind::TubeCoupler
            | ComponentKind::CenteringRing
            | ComponentKind::Bulkhead
            | ComponentKind::EngineBlock
            | ComponentKind::Parachute
            | ComponentKind::Streamer
            | ComponentKind::ShockCord
            | ComponentKind::MassComponent => ComponentCategory::Internal,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ComponentKind::BodyTube => "body-tube",
            ComponentKind::NoseCone => "nose-cone",
            ComponentKind::Transition => "transition",
            ComponentKind::FinSet => "fin-set",
            ComponentKind::LaunchLug => "launch-lug",
            ComponentKind::RailButton => "rail-button",
            ComponentKind::InnerTube => "inner-tube",
            ComponentKind::TubeCoupler => "tube-coupler",
            ComponentKind::CenteringRing => "centering-ring",
            ComponentKind::Bulkhead => "bulkhead",
            ComponentKind::EngineBlock => "engine-block",
            ComponentKind::Parachute => "parachute",
            ComponentKind::Streamer => "streamer",
            ComponentKind::ShockCord => "shock-cord",
            ComponentKind::MassComponent => "mass-component",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Invalid component kind '{0}'")]
pub struct ParseComponentKindError(pub String);

impl FromStr for ComponentKind {
    type Err = ParseComponentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "body-tube" => Ok(ComponentKind::BodyTube),
            "nose-cone" => Ok(ComponentKind::NoseCone),
            "transition" => Ok(ComponentKind::Transition),
            "fin-set" => Ok(ComponentKind::FinSet),
            "launch-lug" => Ok(ComponentKind::LaunchLug),
            "rail-button" => Ok(ComponentKind::RailButton),
            "inner-tube" => Ok(ComponentKind::InnerTube),
            "tube-coupler" => Ok(ComponentKind::TubeCoupler),
            "centering-ring" => Ok(ComponentKind::CenteringRing),
            "bulkhead" => Ok(ComponentKind::Bulkhead),
            "engine-block" => Ok(ComponentKind::EngineBlock),
            "parachute" => Ok(ComponentKind::Parachute),
            "streamer" => Ok(ComponentKind::Streamer),
            "shock-cord" => Ok(ComponentKind::ShockCord),
            "mass-component" => Ok(ComponentKind::MassComponent),
            _ => Err(ParseComponentKindError(s.to_string())),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A component that can occupy a position in the assembly chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    BodyTube(BodyTube),
    Transition(Transition),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::BodyTube(_) => ComponentKind::BodyTube,
            Component::Transition(t) if t.is_nose_cone() => ComponentKind::NoseCone,
            Component::Transition(_) => ComponentKind::Transition,
        }
    }

    pub fn as_body_tube(&self) -> Option<&BodyTube> {
        match self {
            Component::BodyTube(tube) => Some(tube),
            _ => None,
        }
    }

    pub fn as_body_tube_mut(&mut self) -> Option<&mut BodyTube> {
        match self {
            Component::BodyTube(tube) => Some(tube),
            _ => None,
        }
    }

    pub fn as_transition(&self) -> Option<&Transition> {
        match self {
            Component::Transition(transition) => Some(transition),
            _ => None,
        }
    }

    pub fn as_transition_mut(&mut self) -> Option<&mut Transition> {
        match self {
            Component::Transition(transition) => Some(transition),
            _ => None,
        }
    }

    /// Effective radius at the fore end.
    pub fn fore_radius(&self, neighbors: &impl ChainNeighbors) -> f64 {
        match self {
            Component::BodyTube(tube) => tube.outer_radius(neighbors),
            Component::Transition(transition) => transition.fore_radius(neighbors),
        }
    }

    /// Effective radius at the aft end.
    pub fn aft_radius(&self, neighbors: &impl ChainNeighbors) -> f64 {
        match self {
            Component::BodyTube(tube) => tube.outer_radius(neighbors),
            Component::Transition(transition) => transition.aft_radius(neighbors),
        }
    }

    pub fn component_name(&self, translator: &dyn Translator) -> String {
        match self {
            Component::BodyTube(tube) => tube.component_name(translator),
            Component::Transition(transition) => transition.component_name(translator),
        }
    }
}

impl SymmetricComponent for Component {
    fn length(&self) -> f64 {
        match self {
            Component::BodyTube(tube) => tube.length(),
            Component::Transition(transition) => transition.length(),
        }
    }

    fn front_auto_radius_contribution(&self) -> AutoRadius {
        match self {
            Component::BodyTube(tube) => tube.front_auto_radius_contribution(),
            Component::Transition(transition) => transition.front_auto_radius_contribution(),
        }
    }

    fn rear_auto_radius_contribution(&self) -> AutoRadius {
        match self {
            Component::BodyTube(tube) => tube.rear_auto_radius_contribution(),
            Component::Transition(transition) => transition.rear_auto_radius_contribution(),
        }
    }
}

impl From<BodyTube> for Component {
    fn from(tube: BodyTube) -> Self {
        Component::BodyTube(tube)
    }
}

impl From<Transition> for Component {
    fn from(transition: Transition) -> Self {
        Component::Transition(transition)
    }
}
