use std::fmt;

/// Classification of an observable change reported by a component setter.
///
/// Setters return `Option<ChangeKind>`: `None` when the stored value did not change,
/// otherwise the single kind describing what consumers have to invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Only the aerodynamic shape changed. Body tube setters never report it alone; it
    /// completes the classification for consumers that filter by concern.
    Aerodynamic,
    /// Only mass properties changed (for example the material density).
    Mass,
    /// Shape and mass changed together; emitted by every geometric setter.
    Geometry,
    /// Motor assignment or motor mount configuration changed.
    Motor,
    /// Ignition settings changed.
    Event,
}

impl ChangeKind {
    pub fn affects_aerodynamics(self) -> bool {
        matches!(self, ChangeKind::Aerodynamic | ChangeKind::Geometry)
    }

    pub fn affects_mass(self) -> bool {
        matches!(self, ChangeKind::Mass | ChangeKind::Geometry)
    }

    pub fn affects_motors(self) -> bool {
        matches!(self, ChangeKind::Motor)
    }

    pub fn affects_events(self) -> bool {
        matches!(self, ChangeKind::Event)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ChangeKind::Aerodynamic => "aerodynamic",
                ChangeKind::Mass => "mass",
                ChangeKind::Geometry => "geometry",
                ChangeKind::Motor => "motor",
                ChangeKind::Event => "event",
            }
        )
    }
}
