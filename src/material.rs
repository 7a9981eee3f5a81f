//! Material handles.
//!
//! The intersection core never looks inside a material. Primitives carry a
//! [`MaterialId`] and copy it into every [`HitRecord`](crate::hittable::HitRecord);
//! the scene owns the actual material values in a [`Materials`] arena and
//! resolves handles at shading time.

/// Opaque handle to a material stored in a [`Materials`] arena.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(u32);

impl MaterialId {
    /// Position of the material in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Scene-owned material storage.
///
/// Materials are append-only: a handle stays valid for as long as the arena
/// that issued it.
#[derive(Debug, Clone)]
pub struct Materials<M> {
    items: Vec<M>,
}

impl<M> Materials<M> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Store a material and return its handle.
    pub fn add(&mut self, material: M) -> MaterialId {
        debug_assert!(self.items.len() < u32::MAX as usize);
        let id = MaterialId(self.items.len() as u32);
        self.items.push(material);
        id
    }

    /// Resolve a handle. Handles from another arena may resolve to nothing.
    pub fn get(&self, id: MaterialId) -> Option<&M> {
        self.items.get(id.index())
    }

    /// Number of stored materials.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no material has been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over `(handle, material)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &M)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, m)| (MaterialId(i as u32), m))
    }
}

impl<M> Default for Materials<M> {
    fn default() -> Self {
        Self::new()
    }
}
