use super::error::EngineError;
use super::notify::ChangeNotifier;
use crate::core::models::assembly::Assembly;
use crate::core::models::body_tube::BodyTube;
use crate::core::models::change::ChangeKind;
use crate::core::models::component::{Component, ComponentKind};
use crate::core::models::ids::ComponentId;
use crate::core::models::material::Material;
use crate::core::models::motor::{FlightConfigId, IgnitionEvent, Motor, MotorConfiguration};
use crate::core::models::symmetric::NeighborRadii;
use crate::core::models::transition::Transition;
use crate::core::presets::preset::ComponentPreset;
use tracing::debug;

/// An edit of a single body tube.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyTubeCommand {
    SetLength(f64),
    SetOuterRadius(f64),
    SetOuterRadiusAutomatic(bool),
    SetThickness(f64),
    SetInnerRadius(f64),
    SetFilled(bool),
    SetMaterial(Material),
    LoadPreset(ComponentPreset),
    SetMotorMount(bool),
    SetMotor {
        config: FlightConfigId,
        motor: Option<Motor>,
    },
    SetMotorDelay {
        config: FlightConfigId,
        delay: f64,
    },
    SetFlightConfiguration {
        config: FlightConfigId,
        configuration: MotorConfiguration,
    },
    CloneFlightConfiguration {
        from: FlightConfigId,
        to: FlightConfigId,
    },
    SetIgnitionEvent(IgnitionEvent),
    SetIgnitionDelay(f64),
    SetMotorOverhang(f64),
}

/// An edit of a single transition or nose cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionCommand {
    SetLength(f64),
    SetForeRadius(f64),
    SetForeRadiusAutomatic(bool),
    SetAftRadius(f64),
    SetAftRadiusAutomatic(bool),
}

/// Applies edit commands to an assembly and notifies a listener of every actual change.
pub struct AssemblyEditor<'a> {
    assembly: &'a mut Assembly,
    notifier: ChangeNotifier<'a>,
}

impl<'a> AssemblyEditor<'a> {
    pub fn new(assembly: &'a mut Assembly, notifier: ChangeNotifier<'a>) -> Self {
        Self { assembly, notifier }
    }

    pub fn assembly(&self) -> &Assembly {
        self.assembly
    }

    /// Applies `command` to the body tube `id`.
    ///
    /// Returns the kind of change that was made, or `None` if the tube already had the
    /// requested state. Exactly one notification is emitted per change.
    pub fn apply_body_tube(
        &mut self,
        id: ComponentId,
        command: BodyTubeCommand,
    ) -> Result<Option<ChangeKind>, EngineError> {
        let neighbors = self
            .assembly
            .neighbor_radii(id)
            .ok_or(EngineError::ComponentNotFound(id))?;
        let tube = body_tube_mut(self.assembly, id)?;

        debug!(?id, ?command, "Applying body tube command.");
        let change = execute_body_tube(tube, &neighbors, command)?;
        Ok(self.notifier.emit(id, change))
    }

    /// Applies `command` to the transition `id`.
    pub fn apply_transition(
        &mut self,
        id: ComponentId,
        command: TransitionCommand,
    ) -> Result<Option<ChangeKind>, EngineError> {
        let transition = transition_mut(self.assembly, id)?;

        debug!(?id, ?command, "Applying transition command.");
        let change = match command {
            TransitionCommand::SetLength(length) => transition.set_length(length),
            TransitionCommand::SetForeRadius(radius) => transition.set_fore_radius(radius),
            TransitionCommand::SetForeRadiusAutomatic(auto) => {
                transition.set_fore_radius_automatic(auto)
            }
            TransitionCommand::SetAftRadius(radius) => transition.set_aft_radius(radius),
            TransitionCommand::SetAftRadiusAutomatic(auto) => {
                transition.set_aft_radius_automatic(auto)
            }
        };
        Ok(self.notifier.emit(id, change))
    }

    /// Moves `id` to chain position `index`.
    ///
    /// The moved component reports a geometry change since its automatic radii may now
    /// resolve differently.
    pub fn move_to(&mut self, id: ComponentId, index: usize) -> Result<(), EngineError> {
        let before = self.assembly.position(id);
        self.assembly.move_to(id, index)?;
        if before != Some(index) {
            self.notifier.emit(id, Some(ChangeKind::Geometry));
        }
        Ok(())
    }
}

fn execute_body_tube(
    tube: &mut BodyTube,
    neighbors: &NeighborRadii,
    command: BodyTubeCommand,
) -> Result<Option<ChangeKind>, EngineError> {
    let change = match command {
        BodyTubeCommand::SetLength(length) => tube.set_length(length),
        BodyTubeCommand::SetOuterRadius(radius) => tube.set_outer_radius(radius),
        BodyTubeCommand::SetOuterRadiusAutomatic(auto) => tube.set_outer_radius_automatic(auto),
        BodyTubeCommand::SetThickness(thickness) => tube.set_thickness(thickness, neighbors),
        BodyTubeCommand::SetInnerRadius(radius) => tube.set_inner_radius(radius, neighbors),
        BodyTubeCommand::SetFilled(filled) => tube.set_filled(filled),
        BodyTubeCommand::SetMaterial(material) => tube.set_material(material),
        BodyTubeCommand::LoadPreset(preset) => Some(tube.load_preset(&preset)?),
        BodyTubeCommand::SetMotorMount(mount) => tube.set_motor_mount(mount),
        BodyTubeCommand::SetMotor { config, motor } => tube.set_motor(&config, motor),
        BodyTubeCommand::SetMotorDelay { config, delay } => tube.set_motor_delay(&config, delay),
        BodyTubeCommand::SetFlightConfiguration {
            config,
            configuration,
        } => tube.set_flight_configuration(config, configuration),
        BodyTubeCommand::CloneFlightConfiguration { from, to } => {
            tube.clone_flight_configuration(&from, to)
        }
        BodyTubeCommand::SetIgnitionEvent(event) => tube.set_ignition_event(event),
        BodyTubeCommand::SetIgnitionDelay(delay) => tube.set_ignition_delay(delay),
        BodyTubeCommand::SetMotorOverhang(overhang) => tube.set_motor_overhang(overhang),
    };
    Ok(change)
}

fn body_tube_mut(assembly: &mut Assembly, id: ComponentId) -> Result<&mut BodyTube, EngineError> {
    match assembly.component_mut(id) {
        Some(Component::BodyTube(tube)) => Ok(tube),
        Some(other) => Err(EngineError::UnexpectedKind {
            id,
            expected: ComponentKind::BodyTube,
            found: other.kind(),
        }),
        None => Err(EngineError::ComponentNotFound(id)),
    }
}

fn transition_mut(
    assembly: &mut Assembly,
    id: ComponentId,
) -> Result<&mut Transition, EngineError> {
    match assembly.component_mut(id) {
        Some(Component::Transition(transition)) => Ok(transition),
        Some(other) => Err(EngineError::UnexpectedKind {
            id,
            expected: ComponentKind::Transition,
            found: other.kind(),
        }),
        None => Err(EngineError::ComponentNotFound(id)),
    }
}
