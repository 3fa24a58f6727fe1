//! Component trait and type-erased storage

use std::any::Any;
use std::collections::HashMap;

/// Marker trait for components
pub trait Component: 'static {}

/// Per-type component column keyed by entity id
pub(crate) struct ComponentStorage<T: Component> {
    components: HashMap<u32, T>,
}

impl<T: Component> ComponentStorage<T> {
    pub(crate) fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, id: u32, component: T) -> Option<T> {
        self.components.insert(id, component)
    }

    pub(crate) fn get(&self, id: u32) -> Option<&T> {
        self.components.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: u32) -> Option<&mut T> {
        self.components.get_mut(&id)
    }

    pub(crate) fn remove(&mut self, id: u32) -> Option<T> {
        self.components.remove(&id)
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.components.keys().copied()
    }
}

/// Object-safe view over a `ComponentStorage<T>` of unknown `T`
pub(crate) trait AnyStorage {
    /// Drop whatever component the entity has in this column
    fn remove_entity(&mut self, id: u32);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> AnyStorage for ComponentStorage<T> {
    fn remove_entity(&mut self, id: u32) {
        self.components.remove(&id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
