use super::change::ChangeKind;
use super::component::ComponentKind;
use super::symmetric::{AutoRadius, ChainNeighbors, DEFAULT_RADIUS, SymmetricComponent};
use crate::core::text::Translator;

/// A conical shoulder between two body sections.
///
/// Fore and aft radii are independent and each may be automatic. An automatic fore radius
/// only looks at the components in front, an automatic aft radius only at the components
/// behind. A transition with an explicit fore radius of zero is a nose cone.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    length: f64,
    fore_radius: f64,
    fore_auto: bool,
    aft_radius: f64,
    aft_auto: bool,
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}

impl Transition {
    pub fn new() -> Self {
        Self {
            length: 4.0 * DEFAULT_RADIUS,
            fore_radius: DEFAULT_RADIUS,
            fore_auto: true,
            aft_radius: DEFAULT_RADIUS,
            aft_auto: true,
        }
    }

    pub fn with_radii(length: f64, fore_radius: f64, aft_radius: f64) -> Self {
        Self {
            length: length.max(0.0),
            fore_radius: fore_radius.max(0.0),
            fore_auto: false,
            aft_radius: aft_radius.max(0.0),
            aft_auto: false,
        }
    }

    /// A nose cone: pointed tip, base radius taken from the body behind it.
    pub fn nose_cone(length: f64) -> Self {
        Self {
            length: length.max(0.0),
            fore_radius: 0.0,
            fore_auto: false,
            ..Self::new()
        }
    }

    pub fn is_nose_cone(&self) -> bool {
        !self.fore_auto && self.fore_radius == 0.0
    }

    pub fn kind(&self) -> ComponentKind {
        if self.is_nose_cone() {
            ComponentKind::NoseCone
        } else {
            ComponentKind::Transition
        }
    }

    pub fn component_name(&self, translator: &dyn Translator) -> String {
        let key = if self.is_nose_cone() {
            "NoseCone.NoseCone"
        } else {
            "Transition.Transition"
        };
        translator.get(key).into_owned()
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_length(&mut self, length: f64) -> Option<ChangeKind> {
        let length = length.max(0.0);
        if self.length == length {
            return None;
        }
        self.length = length;
        Some(ChangeKind::Geometry)
    }

    pub fn fore_radius(&self, neighbors: &impl ChainNeighbors) -> f64 {
        if self.fore_auto {
            neighbors.front_auto_radius().unwrap_or(DEFAULT_RADIUS)
        } else {
            self.fore_radius
        }
    }

    pub fn aft_radius(&self, neighbors: &impl ChainNeighbors) -> f64 {
        if self.aft_auto {
            neighbors.rear_auto_radius().unwrap_or(DEFAULT_RADIUS)
        } else {
            self.aft_radius
        }
    }

    pub fn is_fore_radius_automatic(&self) -> bool {
        self.fore_auto
    }

    pub fn is_aft_radius_automatic(&self) -> bool {
        self.aft_auto
    }

    pub fn set_fore_radius(&mut self, radius: f64) -> Option<ChangeKind> {
        let radius = radius.max(0.0);
        if self.fore_radius == radius && !self.fore_auto {
            return None;
        }
        self.fore_radius = radius;
        self.fore_auto = false;
        Some(ChangeKind::Geometry)
    }

    pub fn set_fore_radius_automatic(&mut self, auto: bool) -> Option<ChangeKind> {
        if self.fore_auto == auto {
            return None;
        }
        self.fore_auto = auto;
        Some(ChangeKind::Geometry)
    }

    pub fn set_aft_radius(&mut self, radius: f64) -> Option<ChangeKind> {
        let radius = radius.max(0.0);
        if self.aft_radius == radius && !self.aft_auto {
            return None;
        }
        self.aft_radius = radius;
        self.aft_auto = false;
        Some(ChangeKind::Geometry)
    }

    pub fn set_aft_radius_automatic(&mut self, auto: bool) -> Option<ChangeKind> {
        if self.aft_auto == auto {
            return None;
        }
        self.aft_auto = auto;
        Some(ChangeKind::Geometry)
    }
}

impl SymmetricComponent for Transition {
    fn length(&self) -> f64 {
        self.length
    }

    // A transition never passes a query through: an automatic end stops the walk.
    fn front_auto_radius_contribution(&self) -> AutoRadius {
        if self.aft_auto {
            AutoRadius::Unresolved
        } else {
            AutoRadius::Resolved(self.aft_radius)
        }
    }

    fn rear_auto_radius_contribution(&self) -> AutoRadius {
        if self.fore_auto {
            AutoRadius::Unresolved
        } else {
            AutoRadius::Resolved(self.fore_radius)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::symmetric::{Isolated, NeighborRadii};
    use crate::core::text::DefaultTranslator;

    #[test]
    fn front_contribution_is_the_aft_radius() {
        let transition = Transition::with_radii(0.05, 0.02, 0.03);
        assert_eq!(
            transition.front_auto_radius_contribution(),
            AutoRadius::Resolved(0.03)
        );
        assert_eq!(
            transition.rear_auto_radius_contribution(),
            AutoRadius::Resolved(0.02)
        );
    }

    #[test]
    fn automatic_ends_stop_the_walk() {
        let transition = Transition::new();
        assert_eq!(
            transition.front_auto_radius_contribution(),
            AutoRadius::Unresolved
        );
        assert_eq!(
            transition.rear_auto_radius_contribution(),
            AutoRadius::Unresolved
        );
    }

    #[test]
    fn automatic_ends_look_in_one_direction_only() {
        let transition = Transition::new();
        let neighbors = NeighborRadii {
            front: None,
            rear: Some(0.04),
        };
        assert_eq!(transition.fore_radius(&neighbors), DEFAULT_RADIUS);
        assert_eq!(transition.aft_radius(&neighbors), 0.04);
    }

    #[test]
    fn nose_cone_has_pointed_tip_and_automatic_base() {
        let nose = Transition::nose_cone(0.1);
        assert!(nose.is_nose_cone());
        assert_eq!(nose.kind(), ComponentKind::NoseCone);
        assert_eq!(nose.fore_radius(&Isolated), 0.0);
        assert!(nose.is_aft_radius_automatic());
        assert_eq!(nose.rear_auto_radius_contribution(), AutoRadius::Resolved(0.0));
        assert_eq!(nose.component_name(&DefaultTranslator), "Nose cone");
    }

    #[test]
    fn explicit_fore_radius_turns_nose_cone_into_transition() {
        let mut nose = Transition::nose_cone(0.1);
        assert_eq!(nose.set_fore_radius(0.01), Some(ChangeKind::Geometry));
        assert!(!nose.is_nose_cone());
        assert_eq!(nose.component_name(&DefaultTranslator), "Transition");
    }

    #[test]
    fn radius_setters_are_equality_gated() {
        let mut transition = Transition::with_radii(0.05, 0.02, 0.03);
        assert_eq!(transition.set_fore_radius(0.02), None);
        assert_eq!(transition.set_aft_radius(0.03), None);
        assert_eq!(
            transition.set_aft_radius_automatic(true),
            Some(ChangeKind::Geometry)
        );
        assert_eq!(transition.set_aft_radius_automatic(true), None);
        assert_eq!(transition.set_aft_radius(0.03), Some(ChangeKind::Geometry));
        assert_eq!(transition.set_length(-1.0), Some(ChangeKind::Geometry));
        assert_eq!(transition.length(), 0.0);
    }
}
