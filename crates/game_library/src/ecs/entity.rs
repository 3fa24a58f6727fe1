//! Entity implementation

use std::fmt;

/// Entity identifier
///
/// `id` is the lookup key and is recycled once the entity is destroyed.
/// `serial` is never reused, so an `Entity` value captured before its id
/// was recycled compares unequal to the entity now living under that id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    id: u32,
    serial: u64,
}

impl Entity {
    /// Create a new entity with the given ID and serial
    pub(super) fn new(id: u32, serial: u64) -> Self {
        Self { id, serial }
    }

    /// Get the entity ID
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the creation serial
    pub fn serial(&self) -> u64 {
        self.serial
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}#{})", self.id, self.serial)
    }
}
