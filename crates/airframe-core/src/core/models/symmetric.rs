use tracing::trace;

/// Radius used when an automatic radius cannot be resolved from any neighbor.
pub const DEFAULT_RADIUS: f64 = 0.025;

/// What a component offers to a neighbor that is resolving its automatic radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutoRadius {
    /// The component has a definite radius at the end facing the asking neighbor.
    Resolved(f64),
    /// The component is itself automatic and passes the query on to its own neighbor.
    Deferred,
    /// The component cannot provide a radius and the search stops here.
    Unresolved,
}

/// A rotationally symmetric component that can take part in automatic radius resolution.
pub trait SymmetricComponent {
    /// Axial length of the component.
    fn length(&self) -> f64;

    /// Radius offered to the component directly aft of this one.
    fn front_auto_radius_contribution(&self) -> AutoRadius;

    /// Radius offered to the component directly fore of this one.
    fn rear_auto_radius_contribution(&self) -> AutoRadius;
}

/// Neighbor queries of a component in an assembly chain.
///
/// `None` plays the role of the unresolved marker: no radius could be determined in that
/// direction before the chain ended or a component refused to answer.
pub trait ChainNeighbors {
    /// Front contribution of the predecessors, walked fore until something resolves.
    fn front_auto_radius(&self) -> Option<f64>;

    /// Rear contribution of the successors, walked aft until something resolves.
    fn rear_auto_radius(&self) -> Option<f64>;
}

/// Neighbors of a component that is not part of any chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Isolated;

impl ChainNeighbors for Isolated {
    fn front_auto_radius(&self) -> Option<f64> {
        None
    }

    fn rear_auto_radius(&self) -> Option<f64> {
        None
    }
}

/// Owned snapshot of both neighbor contributions.
///
/// Useful when the component has to be mutated while its neighbors are known, since the
/// snapshot holds no borrow of the assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NeighborRadii {
    pub front: Option<f64>,
    pub rear: Option<f64>,
}

impl NeighborRadii {
    pub fn capture(neighbors: &impl ChainNeighbors) -> Self {
        Self {
            front: neighbors.front_auto_radius(),
            rear: neighbors.rear_auto_radius(),
        }
    }
}

impl ChainNeighbors for NeighborRadii {
    fn front_auto_radius(&self) -> Option<f64> {
        self.front
    }

    fn rear_auto_radius(&self) -> Option<f64> {
        self.rear
    }
}

/// Walks a sequence of contributions, nearest neighbor first, until one resolves.
///
/// Deferred entries are skipped, the first resolved entry wins and an unresolved entry
/// ends the walk. Each entry is visited at most once, so the walk is bounded by the
/// length of the sequence.
pub fn walk_contributions<I>(contributions: I) -> Option<f64>
where
    I: IntoIterator<Item = AutoRadius>,
{
    for (steps, contribution) in contributions.into_iter().enumerate() {
        match contribution {
            AutoRadius::Resolved(radius) => {
                trace!(steps, radius, "Automatic radius resolved.");
                return Some(radius);
            }
            AutoRadius::Unresolved => {
                trace!(steps, "Automatic radius walk stopped at an unresolved component.");
                return None;
            }
            AutoRadius::Deferred => {}
        }
    }
    None
}

/// Resolves an automatic radius: front neighbors first, then rear neighbors, then
/// [`DEFAULT_RADIUS`].
pub fn resolve_auto_radius(neighbors: &impl ChainNeighbors) -> f64 {
    neighbors
        .front_auto_radius()
        .or_else(|| neighbors.rear_auto_radius())
        .unwrap_or(DEFAULT_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_skips_deferred_entries_until_resolved() {
        let walk = [
            AutoRadius::Deferred,
            AutoRadius::Deferred,
            AutoRadius::Resolved(0.04),
            AutoRadius::Resolved(0.09),
        ];
        assert_eq!(walk_contributions(walk), Some(0.04));
    }

    #[test]
    fn walk_stops_at_unresolved_entry() {
        let walk = [
            AutoRadius::Deferred,
            AutoRadius::Unresolved,
            AutoRadius::Resolved(0.04),
        ];
        assert_eq!(walk_contributions(walk), None);
    }

    #[test]
    fn walk_off_the_end_of_the_chain_is_unresolved() {
        assert_eq!(walk_contributions([AutoRadius::Deferred]), None);
        assert_eq!(walk_contributions(Vec::<AutoRadius>::new()), None);
    }

    #[test]
    fn front_contribution_wins_over_rear() {
        let neighbors = NeighborRadii {
            front: Some(0.02),
            rear: Some(0.05),
        };
        assert_eq!(resolve_auto_radius(&neighbors), 0.02);
    }

    #[test]
    fn rear_contribution_is_used_when_front_is_unresolved() {
        let neighbors = NeighborRadii {
            front: None,
            rear: Some(0.05),
        };
        assert_eq!(resolve_auto_radius(&neighbors), 0.05);
    }

    #[test]
    fn isolated_component_resolves_to_default_radius() {
        assert_eq!(resolve_auto_radius(&Isolated), DEFAULT_RADIUS);
    }

    #[test]
    fn capture_snapshots_both_directions() {
        let snapshot = NeighborRadii::capture(&Isolated);
        assert_eq!(snapshot, NeighborRadii::default());
    }
}
