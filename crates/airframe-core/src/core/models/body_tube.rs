use super::change::ChangeKind;
use super::component::{ComponentCategory, ComponentKind};
use super::material::Material;
use super::motor::{FlightConfigId, IgnitionEvent, Motor, MotorConfiguration};
use super::mount::{MotorMount, MountError};
use super::symmetric::{
    AutoRadius, ChainNeighbors, DEFAULT_RADIUS, SymmetricComponent, resolve_auto_radius,
};
use crate::core::presets::preset::{ComponentPreset, PresetError, PresetKind};
use crate::core::text::Translator;
use crate::core::utils::geometry::{
    AxialBound, MassPoint, filled_cylinder_volume, tube_longitudinal_unit_inertia,
    tube_rotational_unit_inertia, tube_volume,
};
use crate::core::utils::math::approx_eq;
use nalgebra::Point3;
use tracing::debug;

const DEFAULT_THICKNESS: f64 = 0.002;

/// A cylindrical body segment of the airframe.
///
/// The outer radius is either stored explicitly or resolved automatically from the
/// neighboring components of the assembly chain. The tube can optionally act as a motor
/// mount; all motor state lives in an owned [`MotorMount`] delegate.
///
/// Every setter returns the [`ChangeKind`] it caused, or `None` if the stored value was
/// already equal to the requested one. Methods depending on the effective outer radius
/// take the tube's [`ChainNeighbors`].
#[derive(Debug, Clone, PartialEq)]
pub struct BodyTube {
    length: f64,
    outer_radius: f64,
    auto_radius: bool,
    thickness: f64,
    filled: bool,
    material: Material,
    motor_mount: bool,
    overhang: f64,
    mount: MotorMount,
    preset: Option<ComponentPreset>,
}

impl Default for BodyTube {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyTube {
    /// Creates a placeholder tube with automatic radius and a length of eight default radii.
    pub fn new() -> Self {
        Self {
            length: 8.0 * DEFAULT_RADIUS,
            outer_radius: DEFAULT_RADIUS,
            auto_radius: true,
            thickness: DEFAULT_THICKNESS,
            filled: false,
            material: Material::default(),
            motor_mount: false,
            overhang: 0.0,
            mount: MotorMount::new(),
            preset: None,
        }
    }

    /// Creates a tube with an explicit radius. Negative inputs are clamped to zero.
    pub fn with_dimensions(length: f64, radius: f64) -> Self {
        let outer_radius = radius.max(0.0);
        Self {
            length: length.max(0.0),
            outer_radius,
            auto_radius: false,
            thickness: DEFAULT_THICKNESS.min(outer_radius),
            ..Self::new()
        }
    }

    /// Creates a solid rod of the given dimensions.
    pub fn solid(length: f64, radius: f64) -> Self {
        Self {
            filled: true,
            ..Self::with_dimensions(length, radius)
        }
    }

    /// Creates a hollow tube with an explicit wall thickness, clamped to `[0, radius]`.
    pub fn with_thickness(length: f64, radius: f64, thickness: f64) -> Self {
        let tube = Self::with_dimensions(length, radius);
        Self {
            thickness: thickness.max(0.0).min(tube.outer_radius),
            ..tube
        }
    }

    pub fn kind(&self) -> ComponentKind {
        ComponentKind::BodyTube
    }

    pub fn preset_kind(&self) -> PresetKind {
        PresetKind::BodyTube
    }

    pub fn component_name(&self, translator: &dyn Translator) -> String {
        translator.get("BodyTube.BodyTube").into_owned()
    }

    // --- Geometry ---

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_length(&mut self, length: f64) -> Option<ChangeKind> {
        let length = length.max(0.0);
        if self.length == length {
            return None;
        }
        self.length = length;
        self.clear_preset();
        Some(ChangeKind::Geometry)
    }

    /// Returns the effective outer radius.
    ///
    /// In explicit mode this is the stored radius. In automatic mode the front neighbors
    /// are asked first, then the rear neighbors, and [`DEFAULT_RADIUS`] is used if neither
    /// direction resolves.
    pub fn outer_radius(&self, neighbors: &impl ChainNeighbors) -> f64 {
        if self.auto_radius {
            resolve_auto_radius(neighbors)
        } else {
            self.outer_radius
        }
    }

    /// The radius stored for explicit mode, regardless of the current mode.
    pub fn stored_outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Sets an explicit outer radius and turns automatic mode off.
    ///
    /// If the wall would become thicker than the new radius, the thickness is reduced to
    /// the radius.
    pub fn set_outer_radius(&mut self, radius: f64) -> Option<ChangeKind> {
        let radius = radius.max(0.0);
        if self.outer_radius == radius && !self.auto_radius {
            return None;
        }
        self.auto_radius = false;
        self.outer_radius = radius;
        if self.thickness > self.outer_radius {
            self.thickness = self.outer_radius;
        }
        self.clear_preset();
        Some(ChangeKind::Geometry)
    }

    pub fn is_outer_radius_automatic(&self) -> bool {
        self.auto_radius
    }

    pub fn set_outer_radius_automatic(&mut self, auto: bool) -> Option<ChangeKind> {
        if self.auto_radius == auto {
            return None;
        }
        self.auto_radius = auto;
        self.clear_preset();
        Some(ChangeKind::Geometry)
    }

    /// The stored wall thickness. Ignored by the geometry while the tube is filled.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Sets the wall thickness, clamped to `[0, outer radius]`, and makes the tube hollow.
    pub fn set_thickness(
        &mut self,
        thickness: f64,
        neighbors: &impl ChainNeighbors,
    ) -> Option<ChangeKind> {
        let thickness = thickness.max(0.0).min(self.outer_radius(neighbors));
        if self.thickness == thickness && !self.filled {
            return None;
        }
        self.thickness = thickness;
        self.filled = false;
        self.clear_preset();
        Some(ChangeKind::Geometry)
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn set_filled(&mut self, filled: bool) -> Option<ChangeKind> {
        if self.filled == filled {
            return None;
        }
        self.filled = filled;
        self.clear_preset();
        Some(ChangeKind::Geometry)
    }

    /// Inner radius: zero when filled, otherwise the outer radius minus the wall, never
    /// below zero.
    pub fn inner_radius(&self, neighbors: &impl ChainNeighbors) -> f64 {
        if self.filled {
            return 0.0;
        }
        (self.outer_radius(neighbors) - self.thickness).max(0.0)
    }

    /// Sets the inner radius by adjusting the wall thickness.
    pub fn set_inner_radius(
        &mut self,
        radius: f64,
        neighbors: &impl ChainNeighbors,
    ) -> Option<ChangeKind> {
        let thickness = self.outer_radius(neighbors) - radius;
        self.set_thickness(thickness, neighbors)
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_material(&mut self, material: Material) -> Option<ChangeKind> {
        if self.material == material {
            return None;
        }
        self.material = material;
        self.clear_preset();
        Some(ChangeKind::Mass)
    }

    // --- Presets ---

    /// The preset the current dimensions were loaded from, if no setter changed them since.
    pub fn preset(&self) -> Option<&ComponentPreset> {
        self.preset.as_ref()
    }

    /// Applies a catalog preset.
    ///
    /// Automatic radius is switched off. The outer diameter, and together with it the
    /// inner diameter, replace the radius and wall thickness; length and material are
    /// applied when the preset specifies them.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::KindMismatch`] if the preset is not a body tube preset.
    ///
    /// A successful load always reports [`ChangeKind::Geometry`], even when the same preset
    /// is loaded again.
    pub fn load_preset(&mut self, preset: &ComponentPreset) -> Result<ChangeKind, PresetError> {
        if preset.kind != self.preset_kind() {
            return Err(PresetError::KindMismatch {
                part_number: preset.part_number.clone(),
                expected: self.preset_kind(),
                found: preset.kind,
            });
        }

        self.auto_radius = false;
        if let Some(outer_diameter) = preset.outer_diameter {
            self.outer_radius = (outer_diameter / 2.0).max(0.0);
            if let Some(inner_diameter) = preset.inner_diameter {
                self.thickness =
                    ((outer_diameter - inner_diameter) / 2.0).clamp(0.0, self.outer_radius);
                self.filled = false;
            }
            self.thickness = self.thickness.min(self.outer_radius);
        }
        if let Some(length) = preset.length {
            self.length = length.max(0.0);
        }
        if let Some(material) = &preset.material {
            self.material = material.clone();
        }
        self.preset = Some(preset.clone());

        debug!(
            "Loaded preset {} {} into body tube (r = {}, t = {}).",
            preset.manufacturer, preset.part_number, self.outer_radius, self.thickness
        );
        Ok(ChangeKind::Geometry)
    }

    fn clear_preset(&mut self) {
        self.preset = None;
    }

    // --- Mass properties ---

    /// Material volume of the tube wall, or of the whole cylinder when filled.
    pub fn volume(&self, neighbors: &impl ChainNeighbors) -> f64 {
        let outer = self.outer_radius(neighbors);
        if self.filled {
            filled_cylinder_volume(outer, self.length)
        } else {
            tube_volume(outer, self.inner_radius(neighbors), self.length)
        }
    }

    pub fn component_mass(&self, neighbors: &impl ChainNeighbors) -> f64 {
        self.material.mass_of(self.volume(neighbors))
    }

    /// Center of mass, halfway along the tube, carrying the component mass.
    pub fn center_of_mass(&self, neighbors: &impl ChainNeighbors) -> MassPoint {
        MassPoint::on_axis(self.length / 2.0, self.component_mass(neighbors))
    }

    pub fn longitudinal_unit_inertia(&self, neighbors: &impl ChainNeighbors) -> f64 {
        tube_longitudinal_unit_inertia(
            self.inner_radius(neighbors),
            self.outer_radius(neighbors),
            self.length,
        )
    }

    pub fn rotational_unit_inertia(&self, neighbors: &impl ChainNeighbors) -> f64 {
        tube_rotational_unit_inertia(self.inner_radius(neighbors), self.outer_radius(neighbors))
    }

    /// The fore and aft stations of the tube; its convex hull contains the whole tube.
    pub fn bounds(&self, neighbors: &impl ChainNeighbors) -> [AxialBound; 2] {
        let radius = self.outer_radius(neighbors);
        [
            AxialBound::new(0.0, radius),
            AxialBound::new(self.length, radius),
        ]
    }

    /// Whether a component of `kind` may be placed inside this tube.
    ///
    /// Internal components are always accepted; external components are accepted unless
    /// they are body shells themselves.
    pub fn is_compatible_child(&self, kind: ComponentKind) -> bool {
        match kind.category() {
            ComponentCategory::Internal | ComponentCategory::External => true,
            ComponentCategory::Body => false,
        }
    }

    // --- Motor mount ---

    pub fn mount(&self) -> &MotorMount {
        &self.mount
    }

    pub fn flight_configuration(&self, id: &FlightConfigId) -> &MotorConfiguration {
        self.mount.flight_configuration(id)
    }

    pub fn set_flight_configuration(
        &mut self,
        id: FlightConfigId,
        config: MotorConfiguration,
    ) -> Option<ChangeKind> {
        self.mount
            .set_flight_configuration(id, config)
            .then_some(ChangeKind::Motor)
    }

    pub fn clone_flight_configuration(
        &mut self,
        from: &FlightConfigId,
        to: FlightConfigId,
    ) -> Option<ChangeKind> {
        self.mount
            .clone_flight_configuration(from, to)
            .then_some(ChangeKind::Motor)
    }

    pub fn default_flight_configuration(&self) -> &MotorConfiguration {
        self.mount.default_flight_configuration()
    }

    pub fn set_default_flight_configuration(
        &mut self,
        config: MotorConfiguration,
    ) -> Option<ChangeKind> {
        self.mount
            .set_default_flight_configuration(config)
            .then_some(ChangeKind::Motor)
    }

    pub fn motor(&self, id: &FlightConfigId) -> Option<&Motor> {
        self.mount.motor(id)
    }

    pub fn set_motor(&mut self, id: &FlightConfigId, motor: Option<Motor>) -> Option<ChangeKind> {
        self.mount.set_motor(id, motor).then_some(ChangeKind::Motor)
    }

    pub fn motor_delay(&self, id: &FlightConfigId) -> f64 {
        self.mount.motor_delay(id)
    }

    pub fn set_motor_delay(&mut self, id: &FlightConfigId, delay: f64) -> Option<ChangeKind> {
        self.mount
            .set_motor_delay(id, delay)
            .then_some(ChangeKind::Motor)
    }

    pub fn is_motor_mount(&self) -> bool {
        self.motor_mount
    }

    pub fn set_motor_mount(&mut self, mount: bool) -> Option<ChangeKind> {
        if self.motor_mount == mount {
            return None;
        }
        self.motor_mount = mount;
        Some(ChangeKind::Motor)
    }

    /// A body tube always holds exactly one motor.
    pub fn motor_count(&self) -> usize {
        1
    }

    pub fn motor_mount_diameter(&self, neighbors: &impl ChainNeighbors) -> f64 {
        self.inner_radius(neighbors) * 2.0
    }

    /// Ignition event of the default flight configuration.
    pub fn ignition_event(&self) -> IgnitionEvent {
        self.default_flight_configuration().ignition_event
    }

    /// Sets the ignition event of the default flight configuration.
    pub fn set_ignition_event(&mut self, event: IgnitionEvent) -> Option<ChangeKind> {
        if self.ignition_event() == event {
            return None;
        }
        self.mount.default_flight_configuration_mut().ignition_event = event;
        Some(ChangeKind::Event)
    }

    /// Ignition delay of the default flight configuration.
    pub fn ignition_delay(&self) -> f64 {
        self.default_flight_configuration().ignition_delay
    }

    /// Sets the ignition delay of the default flight configuration.
    pub fn set_ignition_delay(&mut self, delay: f64) -> Option<ChangeKind> {
        if approx_eq(delay, self.ignition_delay()) {
            return None;
        }
        self.mount.default_flight_configuration_mut().ignition_delay = delay;
        Some(ChangeKind::Event)
    }

    pub fn motor_overhang(&self) -> f64 {
        self.overhang
    }

    pub fn set_motor_overhang(&mut self, overhang: f64) -> Option<ChangeKind> {
        if approx_eq(self.overhang, overhang) {
            return None;
        }
        self.overhang = overhang;
        Some(ChangeKind::Geometry)
    }

    /// Position of the motor's fore end relative to the tube's fore end.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::MissingMotor`] if configuration `id` has no motor assigned.
    pub fn motor_position(&self, id: &FlightConfigId) -> Result<Point3<f64>, MountError> {
        let motor = self.motor(id).ok_or_else(|| MountError::MissingMotor {
            config: id.clone(),
        })?;
        Ok(Point3::new(
            self.length - motor.length + self.overhang,
            0.0,
            0.0,
        ))
    }
}

impl SymmetricComponent for BodyTube {
    fn length(&self) -> f64 {
        self.length
    }

    fn front_auto_radius_contribution(&self) -> AutoRadius {
        if self.auto_radius {
            AutoRadius::Deferred
        } else {
            AutoRadius::Resolved(self.outer_radius)
        }
    }

    fn rear_auto_radius_contribution(&self) -> AutoRadius {
        if self.auto_radius {
            AutoRadius::Deferred
        } else {
            AutoRadius::Resolved(self.outer_radius)
        }
    }
}
