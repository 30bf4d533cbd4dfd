use crate::core::models::assembly::Assembly;
use crate::core::models::body_tube::BodyTube;
use crate::core::models::component::{Component, ComponentKind};
use crate::core::models::ids::ComponentId;
use crate::core::models::motor::{FlightConfigId, IgnitionEvent, Motor};
use crate::core::models::symmetric::{ChainNeighbors, SymmetricComponent};
use crate::core::utils::geometry::{AxialBound, MassPoint};
use crate::engine::error::EngineError;
use nalgebra::Point3;
use tracing::{debug, info, instrument};

pub use crate::engine::config::{ConfigError, InspectConfig, InspectConfigBuilder};

#[derive(Debug, Clone, PartialEq)]
pub struct InspectionReport {
    pub flight_config: FlightConfigId,
    pub components: Vec<ComponentReport>,
    /// Sum of the body tube masses.
    pub total_mass: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentReport {
    pub id: ComponentId,
    pub name: String,
    pub kind: ComponentKind,
    pub length: f64,
    pub fore_radius: f64,
    pub aft_radius: f64,
    pub fore_radius_automatic: bool,
    pub aft_radius_automatic: bool,
    /// Present for body tubes only.
    pub tube: Option<TubeProperties>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TubeProperties {
    pub inner_radius: f64,
    pub thickness: f64,
    pub filled: bool,
    pub material: String,
    pub preset: Option<String>,
    pub volume: f64,
    pub mass: f64,
    pub center_of_mass: MassPoint,
    pub longitudinal_unit_inertia: f64,
    pub rotational_unit_inertia: f64,
    pub bounds: [AxialBound; 2],
    /// Present when the tube is enabled as a motor mount.
    pub mount: Option<MountReport>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MountReport {
    pub diameter: f64,
    pub motor_count: usize,
    pub overhang: f64,
    pub ignition_event: IgnitionEvent,
    pub ignition_delay: f64,
    pub motor: Option<Motor>,
    pub ejection_delay: f64,
    /// `None` when the selected configuration has no motor.
    pub motor_position: Option<Point3<f64>>,
}

/// Resolves every component of `assembly` and reports its geometry and mass properties.
///
/// # Errors
///
/// Returns [`EngineError::Mount`] if `config.require_motors` is set and an enabled motor
/// mount has no motor in the selected flight configuration.
#[instrument(skip_all, name = "inspect_workflow")]
pub fn run(assembly: &Assembly, config: &InspectConfig) -> Result<InspectionReport, EngineError> {
    info!(
        components = assembly.len(),
        flight_config = %config.flight_config,
        "Inspecting assembly."
    );

    let mut components = Vec::with_capacity(assembly.len());
    for (id, component) in assembly.components() {
        let neighbors = assembly
            .neighbors(id)
            .ok_or(EngineError::ComponentNotFound(id))?;
        components.push(report_component(id, component, &neighbors, config)?);
    }

    let total_mass = components
        .iter()
        .filter_map(|report| report.tube.as_ref())
        .map(|tube| tube.mass)
        .sum();

    info!(total_mass, "Inspection finished.");
    Ok(InspectionReport {
        flight_config: config.flight_config.clone(),
        components,
        total_mass,
    })
}

fn report_component(
    id: ComponentId,
    component: &Component,
    neighbors: &impl ChainNeighbors,
    config: &InspectConfig,
) -> Result<ComponentReport, EngineError> {
    let (fore_radius_automatic, aft_radius_automatic, tube) = match component {
        Component::BodyTube(tube) => {
            let auto = tube.is_outer_radius_automatic();
            (auto, auto, Some(tube_properties(tube, neighbors, config)?))
        }
        Component::Transition(transition) => (
            transition.is_fore_radius_automatic(),
            transition.is_aft_radius_automatic(),
            None,
        ),
    };

    let report = ComponentReport {
        id,
        name: component.component_name(config.translator.as_ref()),
        kind: component.kind(),
        length: component.length(),
        fore_radius: component.fore_radius(neighbors),
        aft_radius: component.aft_radius(neighbors),
        fore_radius_automatic,
        aft_radius_automatic,
        tube,
    };
    debug!(
        ?id,
        kind = %report.kind,
        fore = report.fore_radius,
        aft = report.aft_radius,
        "Resolved component."
    );
    Ok(report)
}

fn tube_properties(
    tube: &BodyTube,
    neighbors: &impl ChainNeighbors,
    config: &InspectConfig,
) -> Result<TubeProperties, EngineError> {
    let mount = if tube.is_motor_mount() {
        Some(mount_report(tube, neighbors, config)?)
    } else {
        None
    };

    Ok(TubeProperties {
        inner_radius: tube.inner_radius(neighbors),
        thickness: tube.thickness(),
        filled: tube.is_filled(),
        material: tube.material().name.clone(),
        preset: tube.preset().map(|preset| preset.part_number.clone()),
        volume: tube.volume(neighbors),
        mass: tube.component_mass(neighbors),
        center_of_mass: tube.center_of_mass(neighbors),
        longitudinal_unit_inertia: tube.longitudinal_unit_inertia(neighbors),
        rotational_unit_inertia: tube.rotational_unit_inertia(neighbors),
        bounds: tube.bounds(neighbors),
        mount,
    })
}

fn mount_report(
    tube: &BodyTube,
    neighbors: &impl ChainNeighbors,
    config: &InspectConfig,
) -> Result<MountReport, EngineError> {
    let id = &config.flight_config;
    let motor_position = match tube.motor_position(id) {
        Ok(position) => Some(position),
        Err(e) if config.require_motors => return Err(e.into()),
        Err(_) => None,
    };

    Ok(MountReport {
        diameter: tube.motor_mount_diameter(neighbors),
        motor_count: tube.motor_count(),
        overhang: tube.motor_overhang(),
        ignition_event: tube.ignition_event(),
        ignition_delay: tube.ignition_delay(),
        motor: tube.motor(id).cloned(),
        ejection_delay: tube.motor_delay(id),
        motor_position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::mount::MountError;
    use crate::core::models::symmetric::DEFAULT_RADIUS;
    use crate::core::models::transition::Transition;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn config(id: &str) -> InspectConfig {
        InspectConfigBuilder::new()
            .flight_config(id.into())
            .build()
            .unwrap()
    }

    fn sample_assembly() -> (Assembly, ComponentId, ComponentId) {
        let mut assembly = Assembly::new();
        assembly.push(Transition::nose_cone(0.1));
        let upper = assembly.push(BodyTube::with_thickness(0.3, 0.02, 0.001));
        let mut booster = BodyTube::new();
        booster.set_motor_mount(true);
        booster.set_motor(&"A".into(), Some(Motor::new("C6-5", 0.018, 0.07)));
        booster.set_motor_overhang(0.01);
        let booster = assembly.push(booster);
        (assembly, upper, booster)
    }

    #[test]
    fn report_resolves_every_component_in_chain_order() {
        let (assembly, upper, booster) = sample_assembly();
        let report = run(&assembly, &config("A")).unwrap();

        assert_eq!(report.components.len(), 3);
        let nose = &report.components[0];
        assert_eq!(nose.kind, ComponentKind::NoseCone);
        assert_eq!(nose.name, "Nose cone");
        assert_eq!(nose.fore_radius, 0.0);
        assert_eq!(nose.aft_radius, 0.02);
        assert!(nose.tube.is_none());

        assert_eq!(report.components[1].id, upper);
        let booster_report = &report.components[2];
        assert_eq!(booster_report.id, booster);
        assert!(booster_report.fore_radius_automatic);
        assert_eq!(booster_report.fore_radius, 0.02);
    }

    #[test]
    fn tube_properties_use_resolved_radius() {
        let (assembly, _, booster) = sample_assembly();
        let report = run(&assembly, &config("A")).unwrap();
        let tube = report
            .components
            .iter()
            .find(|c| c.id == booster)
            .and_then(|c| c.tube.as_ref())
            .unwrap();

        assert!(f64_approx_equal(tube.inner_radius, 0.018));
        assert_eq!(tube.bounds[1].radius, 0.02);
        assert_eq!(tube.center_of_mass.axial_offset(), 4.0 * DEFAULT_RADIUS);
        assert_eq!(tube.material, "Cardboard");
    }

    #[test]
    fn mount_report_contains_motor_position() {
        let (assembly, _, _) = sample_assembly();
        let report = run(&assembly, &config("A")).unwrap();
        let mount = report.components[2]
            .tube
            .as_ref()
            .and_then(|t| t.mount.as_ref())
            .unwrap();

        assert_eq!(mount.motor_count, 1);
        assert!(f64_approx_equal(mount.diameter, 0.036));
        let position = mount.motor_position.unwrap();
        assert!(f64_approx_equal(position.x, 0.2 - 0.07 + 0.01));
        assert!(report.components[1].tube.as_ref().unwrap().mount.is_none());
    }

    #[test]
    fn missing_motor_is_reported_as_none_by_default() {
        let (assembly, _, _) = sample_assembly();
        let report = run(&assembly, &config("B")).unwrap();
        let mount = report.components[2]
            .tube
            .as_ref()
            .and_then(|t| t.mount.as_ref())
            .unwrap();
        assert!(mount.motor.is_none());
        assert!(mount.motor_position.is_none());
    }

    #[test]
    fn missing_motor_fails_when_motors_are_required() {
        let (assembly, _, _) = sample_assembly();
        let config = InspectConfigBuilder::new()
            .flight_config("B".into())
            .require_motors(true)
            .build()
            .unwrap();
        assert_eq!(
            run(&assembly, &config).unwrap_err(),
            EngineError::Mount {
                source: MountError::MissingMotor { config: "B".into() }
            }
        );
    }

    #[test]
    fn total_mass_sums_body_tubes() {
        let (assembly, _, _) = sample_assembly();
        let report = run(&assembly, &config("A")).unwrap();
        let expected: f64 = report
            .components
            .iter()
            .filter_map(|c| c.tube.as_ref().map(|t| t.mass))
            .sum();
        assert!(report.total_mass > 0.0);
        assert_eq!(report.total_mass, expected);
    }

    #[test]
    fn empty_assembly_yields_empty_report() {
        let report = run(&Assembly::new(), &config("A")).unwrap();
        assert!(report.components.is_empty());
        assert_eq!(report.total_mass, 0.0);
    }
}
