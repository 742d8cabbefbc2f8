//! Material library.
//!
//! Every generated room gets its own material entry, so changing one
//! room's color never bleeds into another room's tiles.

use std::collections::BTreeMap;

use mineworks_core::components::{Material, MaterialId};
use mineworks_core::types::Color;

#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    materials: BTreeMap<MaterialId, Material>,
    next_id: u32,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new material. Ids are never reused.
    pub fn create(&mut self, color: Color) -> MaterialId {
        let id = MaterialId(self.next_id);
        self.next_id += 1;
        self.materials.insert(id, Material { color });
        id
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(&id)
    }

    /// Recolor one material. Returns false if it does not exist.
    pub fn set_color(&mut self, id: MaterialId, color: Color) -> bool {
        match self.materials.get_mut(&id) {
            Some(material) => {
                material.color = color;
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, id: MaterialId) -> Option<Material> {
        self.materials.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
