//! Specialized collection types

pub use slotmap::{SlotMap, DefaultKey};

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<DefaultKey, T>;

/// Typed handle for type-safe asset references
pub struct TypedHandle<T> {
    key: DefaultKey,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

// Manual impls: derives would demand the same traits of `T`.
impl<T> Clone for TypedHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedHandle<T> {}

impl<T> PartialEq for TypedHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for TypedHandle<T> {}

impl<T> std::hash::Hash for TypedHandle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T> std::fmt::Debug for TypedHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TypedHandle").field(&self.key).finish()
    }
}

impl<T> TypedHandle<T> {
    /// Create a new typed handle from a key
    pub fn new(key: DefaultKey) -> Self {
        Self {
            key,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get the underlying key
    pub fn key(&self) -> DefaultKey {
        self.key
    }
}

/// Free list that recycles vacated indices
///
/// Indices are reused last-in first-out, so a freshly removed index is the
/// next one handed out.
pub struct FreeList<T> {
    items: Vec<Option<T>>,
    free_indices: Vec<usize>,
}

impl<T> FreeList<T> {
    /// Create a new free list
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            free_indices: Vec::new(),
        }
    }

    /// Insert an item built from the index it will occupy
    pub fn insert_with(&mut self, build: impl FnOnce(usize) -> T) -> usize {
        if let Some(index) = self.free_indices.pop() {
            self.items[index] = Some(build(index));
            index
        } else {
            let index = self.items.len();
            self.items.push(Some(build(index)));
            index
        }
    }

    /// Remove an item by index
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let item = self.items.get_mut(index)?.take()?;
        self.free_indices.push(index);
        Some(item)
    }

    /// Get an item by index
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)?.as_ref()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.items.len() - self.free_indices.len()
    }

    /// Whether no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate occupied slots in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| item.as_ref().map(|item| (index, item)))
    }
}

impl<T> Default for FreeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_list_reuses_last_freed_index() {
        let mut list = FreeList::new();
        let a = list.insert_with(|index| index * 10);
        let b = list.insert_with(|index| index * 10);
        assert_eq!((a, b), (0, 1));

        assert_eq!(list.remove(a), Some(0));
        assert_eq!(list.remove(a), None);
        assert_eq!(list.len(), 1);

        let c = list.insert_with(|index| index + 100);
        assert_eq!(c, 0);
        assert_eq!(list.get(c), Some(&100));
        assert_eq!(list.iter().count(), 2);
    }
}
