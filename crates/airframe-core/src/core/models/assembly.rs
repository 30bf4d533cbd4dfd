use super::body_tube::BodyTube;
use super::component::Component;
use super::ids::ComponentId;
use super::symmetric::{ChainNeighbors, NeighborRadii, SymmetricComponent, walk_contributions};
use slotmap::SlotMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AssemblyError {
    #[error("Component {0:?} is not part of the assembly")]
    ComponentNotFound(ComponentId),
    #[error("Chain position {index} is out of bounds for a chain of {len} components")]
    PositionOutOfBounds { index: usize, len: usize },
}

/// An ordered fore-to-aft chain of coaxial components.
///
/// Components are stored in a slot map and addressed by [`ComponentId`]; the chain itself
/// is a list of ids. Neighbor queries walk the list, so an automatic radius lookup visits
/// every other component at most once.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    components: SlotMap<ComponentId, Component>,
    chain: Vec<ComponentId>,
}

impl Assembly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Appends a component at the aft end of the chain.
    pub fn push(&mut self, component: impl Into<Component>) -> ComponentId {
        let id = self.components.insert(component.into());
        self.chain.push(id);
        id
    }

    /// Inserts a component at chain position `index`, shifting later components aft.
    pub fn insert(
        &mut self,
        index: usize,
        component: impl Into<Component>,
    ) -> Result<ComponentId, AssemblyError> {
        if index > self.chain.len() {
            return Err(AssemblyError::PositionOutOfBounds {
                index,
                len: self.chain.len(),
            });
        }
        let id = self.components.insert(component.into());
        self.chain.insert(index, id);
        Ok(id)
    }

    /// Removes a component from the chain and returns it.
    pub fn remove(&mut self, id: ComponentId) -> Option<Component> {
        let index = self.position(id)?;
        self.chain.remove(index);
        self.components.remove(id)
    }

    /// Moves a component to chain position `index`.
    pub fn move_to(&mut self, id: ComponentId, index: usize) -> Result<(), AssemblyError> {
        let current = self
            .position(id)
            .ok_or(AssemblyError::ComponentNotFound(id))?;
        if index >= self.chain.len() {
            return Err(AssemblyError::PositionOutOfBounds {
                index,
                len: self.chain.len(),
            });
        }
        self.chain.remove(current);
        self.chain.insert(index, id);
        Ok(())
    }

    pub fn position(&self, id: ComponentId) -> Option<usize> {
        self.chain.iter().position(|&entry| entry == id)
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id)
    }

    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.get_mut(id)
    }

    pub fn body_tube(&self, id: ComponentId) -> Option<&BodyTube> {
        self.component(id)?.as_body_tube()
    }

    pub fn body_tube_mut(&mut self, id: ComponentId) -> Option<&mut BodyTube> {
        self.component_mut(id)?.as_body_tube_mut()
    }

    /// Components in chain order, fore to aft.
    pub fn components(&self) -> impl Iterator<Item = (ComponentId, &Component)> {
        self.chain
            .iter()
            .filter_map(|&id| self.components.get(id).map(|component| (id, component)))
    }

    pub fn ids(&self) -> &[ComponentId] {
        &self.chain
    }

    /// The chain entry directly in front of `id`.
    pub fn previous_symmetric(&self, id: ComponentId) -> Option<ComponentId> {
        let index = self.position(id)?;
        index.checked_sub(1).map(|prev| self.chain[prev])
    }

    /// The chain entry directly behind `id`.
    pub fn next_symmetric(&self, id: ComponentId) -> Option<ComponentId> {
        let index = self.position(id)?;
        self.chain.get(index + 1).copied()
    }

    /// A borrowed view of the neighbors of `id`, evaluated lazily on each query.
    pub fn neighbors(&self, id: ComponentId) -> Option<ChainCursor<'_>> {
        self.position(id).map(|index| ChainCursor {
            assembly: self,
            index,
        })
    }

    /// An owned snapshot of both neighbor contributions of `id`.
    pub fn neighbor_radii(&self, id: ComponentId) -> Option<NeighborRadii> {
        self.neighbors(id).map(|cursor| NeighborRadii::capture(&cursor))
    }

    /// Effective outer radius of the body tube `id`.
    pub fn outer_radius(&self, id: ComponentId) -> Option<f64> {
        let tube = self.body_tube(id)?;
        let neighbors = self.neighbors(id)?;
        Some(tube.outer_radius(&neighbors))
    }

    /// Inserts a deep copy of `id` directly behind it and returns the copy's id.
    pub fn duplicate(&mut self, id: ComponentId) -> Option<ComponentId> {
        let index = self.position(id)?;
        let copy = self.components.get(id)?.clone();
        let copy_id = self.components.insert(copy);
        self.chain.insert(index + 1, copy_id);
        Some(copy_id)
    }

    fn at(&self, index: usize) -> Option<&Component> {
        self.chain
            .get(index)
            .and_then(|&id| self.components.get(id))
    }
}

/// A position in an [`Assembly`] chain, answering neighbor queries for the component there.
#[derive(Debug, Clone, Copy)]
pub struct ChainCursor<'a> {
    assembly: &'a Assembly,
    index: usize,
}

impl ChainNeighbors for ChainCursor<'_> {
    fn front_auto_radius(&self) -> Option<f64> {
        walk_contributions(
            (0..self.index)
                .rev()
                .filter_map(|i| self.assembly.at(i))
                .map(|component| component.front_auto_radius_contribution()),
        )
    }

    fn rear_auto_radius(&self) -> Option<f64> {
        walk_contributions(
            (self.index + 1..self.assembly.len())
                .filter_map(|i| self.assembly.at(i))
                .map(|component| component.rear_auto_radius_contribution()),
        )
    }
}
