//! Entity store: entity identities and their component columns

use super::component::{AnyStorage, ComponentStorage};
use super::{Component, Entity};
use crate::foundation::collections::FreeList;
use std::any::TypeId;
use std::collections::HashMap;

/// Owns every live entity and the components attached to them
///
/// Entity ids are recycled through a free list. Lookups by id return the
/// entity currently occupying the slot, which is how callers holding an
/// old `Entity` value can tell that it has gone stale.
pub struct EntityStore {
    slots: FreeList<Entity>,
    next_serial: u64,
    storages: HashMap<TypeId, Box<dyn AnyStorage>>,
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            slots: FreeList::new(),
            next_serial: 1,
            storages: HashMap::new(),
        }
    }

    /// Create a new entity
    pub fn create_entity(&mut self) -> Entity {
        let serial = self.next_serial;
        self.next_serial += 1;
        let index = self.slots.insert_with(|index| {
            let id = u32::try_from(index).expect("entity id space exhausted");
            Entity::new(id, serial)
        });
        let entity = *self
            .slots
            .get(index)
            .expect("slot was filled by insert_with");
        log::trace!("Created {}", entity);
        entity
    }

    /// Destroy an entity and all of its components
    ///
    /// Returns `false` if `entity` is not live (already destroyed, or its id
    /// now belongs to a newer entity).
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        self.slots.remove(entity.id() as usize);
        for storage in self.storages.values_mut() {
            storage.remove_entity(entity.id());
        }
        log::trace!("Destroyed {}", entity);
        true
    }

    /// Look up the live entity occupying `id`
    pub fn get_entity(&self, id: u32) -> Option<Entity> {
        self.slots.get(id as usize).copied()
    }

    /// Whether this exact entity (id and serial) is still live
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.get_entity(entity.id()) == Some(entity)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the store holds no entities
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate live entities in id order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.slots.iter().map(|(_, entity)| *entity)
    }

    /// Attach a component, replacing any previous component of the same type
    ///
    /// Returns `false` and drops the component if the entity is not live.
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> bool {
        if !self.is_alive(entity) {
            log::warn!("Ignoring component for dead {}", entity);
            return false;
        }
        self.storage_mut::<T>().insert(entity.id(), component);
        true
    }

    /// Detach and return a component
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        if !self.is_alive(entity) {
            return None;
        }
        self.storages
            .get_mut(&TypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut::<ComponentStorage<T>>()?
            .remove(entity.id())
    }

    /// Get a component from an entity
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        if !self.is_alive(entity) {
            return None;
        }
        self.storage::<T>()?.get(entity.id())
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_alive(entity) {
            return None;
        }
        self.storages
            .get_mut(&TypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut::<ComponentStorage<T>>()?
            .get_mut(entity.id())
    }

    /// Whether the entity has a component of type `T`
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.get_component::<T>(entity).is_some()
    }

    /// Entities carrying a `T`, in ascending id order
    pub fn with_component<T: Component>(&self) -> Vec<Entity> {
        let Some(storage) = self.storage::<T>() else {
            return Vec::new();
        };
        let mut ids: Vec<u32> = storage.ids().collect();
        ids.sort_unstable();
        ids.into_iter().filter_map(|id| self.get_entity(id)).collect()
    }

    fn storage<T: Component>(&self) -> Option<&ComponentStorage<T>> {
        self.storages
            .get(&TypeId::of::<T>())?
            .as_any()
            .downcast_ref::<ComponentStorage<T>>()
    }

    fn storage_mut<T: Component>(&mut self) -> &mut ComponentStorage<T> {
        self.storages
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentStorage::<T>::new()))
            .as_any_mut()
            .downcast_mut::<ComponentStorage<T>>()
            .expect("storage registered under its own TypeId")
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(i32);
    impl Component for Health {}

    #[derive(Debug, PartialEq)]
    struct Tag;
    impl Component for Tag {}

    #[test]
    fn test_create_and_lookup() {
        let mut store = EntityStore::new();
        let a = store.create_entity();
        let b = store.create_entity();

        assert_ne!(a, b);
        assert_eq!(store.get_entity(a.id()), Some(a));
        assert_eq!(store.get_entity(b.id()), Some(b));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_recycled_id_is_not_identical() {
        let mut store = EntityStore::new();
        let old = store.create_entity();
        assert!(store.destroy_entity(old));

        let new = store.create_entity();
        assert_eq!(new.id(), old.id());
        assert_ne!(new, old);
        assert!(!store.is_alive(old));
        assert!(store.is_alive(new));
        assert_eq!(store.get_entity(old.id()), Some(new));
    }

    #[test]
    fn test_destroy_removes_components() {
        let mut store = EntityStore::new();
        let entity = store.create_entity();
        store.add_component(entity, Health(10));
        store.add_component(entity, Tag);

        assert!(store.destroy_entity(entity));
        assert!(!store.destroy_entity(entity));

        let reused = store.create_entity();
        assert_eq!(reused.id(), entity.id());
        assert!(store.get_component::<Health>(reused).is_none());
        assert!(store.with_component::<Tag>().is_empty());
    }

    #[test]
    fn test_component_access() {
        let mut store = EntityStore::new();
        let entity = store.create_entity();
        assert!(store.add_component(entity, Health(3)));

        store.get_component_mut::<Health>(entity).unwrap().0 += 2;
        assert_eq!(store.get_component::<Health>(entity), Some(&Health(5)));
        assert!(store.has_component::<Health>(entity));
        assert_eq!(store.remove_component::<Health>(entity), Some(Health(5)));
        assert!(!store.has_component::<Health>(entity));
    }

    #[test]
    fn test_stale_entity_cannot_touch_components() {
        let mut store = EntityStore::new();
        let old = store.create_entity();
        store.destroy_entity(old);
        let new = store.create_entity();
        store.add_component(new, Health(1));

        assert!(!store.add_component(old, Health(99)));
        assert!(store.get_component::<Health>(old).is_none());
        assert_eq!(store.get_component::<Health>(new), Some(&Health(1)));
    }

    #[test]
    fn test_with_component_is_sorted() {
        let mut store = EntityStore::new();
        let entities: Vec<_> = (0..5).map(|_| store.create_entity()).collect();
        for entity in entities.iter().rev() {
            store.add_component(*entity, Tag);
        }
        assert_eq!(store.with_component::<Tag>(), entities);
    }
}
