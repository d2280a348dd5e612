//! Fixed-capacity storage for the karts in a race.
//!
//! A kart's id is its creation order and its slot index. Karts are never
//! removed; the whole registry is cleared between races.

use thiserror::Error;

use crate::assets::{sprite_filename, SpriteError, SpriteLoader};
use crate::types::{Vec2, Vehicle};

/// Number of kart slots. The last slot is reserved, so one fewer kart fits.
pub const MAX_VEHICLES: usize = 8;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry is full ({capacity} karts)")]
    Full { capacity: usize },
    #[error(transparent)]
    Sprite(#[from] SpriteError),
}

#[derive(Debug, Clone)]
pub struct VehicleRegistry {
    vehicles: Vec<Vehicle>,
}

impl Default for VehicleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self {
            vehicles: Vec::with_capacity(MAX_VEHICLES),
        }
    }

    /// Karts that can be created before the registry reports itself full.
    pub const fn capacity() -> usize {
        MAX_VEHICLES - 1
    }

    /// Create the next kart.
    ///
    /// It spawns at `start`, pushed down by `spacing` per slot so karts do
    /// not start on top of each other, and takes its size from its sprite.
    /// On error nothing is added.
    pub fn create<L: SpriteLoader + ?Sized>(
        &mut self,
        start: Vec2,
        spacing: f64,
        sprites: &mut L,
    ) -> Result<&mut Vehicle, RegistryError> {
        let slot = self.vehicles.len();
        if slot >= Self::capacity() {
            log::warn!("asked to add a kart with all {} slots taken", Self::capacity());
            return Err(RegistryError::Full {
                capacity: Self::capacity(),
            });
        }

        let sprite = sprites.load_image_with_dims(&sprite_filename(slot))?;
        let position = Vec2::new(start.x, start.y + slot as f64 * spacing);
        let mut vehicle = Vehicle::new(slot, position, sprite.width, sprite.height);
        vehicle.sprite = sprite.handle;

        log::debug!(
            "created kart {} at ({}, {}) size {}x{}",
            slot,
            position.x,
            position.y,
            sprite.width,
            sprite.height
        );
        self.vehicles.push(vehicle);
        Ok(&mut self.vehicles[slot])
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Vehicle> {
        self.vehicles.get(id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(id)
    }

    /// Karts in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vehicle> {
        self.vehicles.iter_mut()
    }

    pub fn for_each<F: FnMut(&mut Vehicle)>(&mut self, f: F) {
        self.vehicles.iter_mut().for_each(f);
    }

    /// Visit every unordered pair once, as `(i, j)` with `i < j`, in order.
    pub fn for_each_pair<F: FnMut(&mut Vehicle, &mut Vehicle)>(&mut self, mut f: F) {
        for i in 0..self.vehicles.len() {
            let (head, tail) = self.vehicles.split_at_mut(i + 1);
            let first = &mut head[i];
            for second in tail.iter_mut() {
                f(&mut *first, second);
            }
        }
    }

    pub fn clear(&mut self) {
        self.vehicles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedSprites;
    use crate::types::SpriteHandle;

    const START: Vec2 = Vec2::new(50.0, 80.0);

    fn filled(count: usize) -> VehicleRegistry {
        let mut registry = VehicleRegistry::new();
        let mut sprites = FixedSprites::new(32, 16);
        for _ in 0..count {
            registry.create(START, 20.0, &mut sprites).unwrap();
        }
        registry
    }

    #[test]
    fn test_create_initializes_kart() {
        let mut registry = VehicleRegistry::new();
        let mut sprites = FixedSprites::new(24, 12);

        registry.create(START, 20.0, &mut sprites).unwrap();
        let kart = registry.create(START, 20.0, &mut sprites).unwrap();

        assert_eq!(kart.id, 1);
        assert_eq!(kart.position, Vec2::new(50.0, 100.0));
        assert_eq!(kart.direction, Vec2::new(1.0, 0.0));
        assert_eq!(kart.force, Vec2::ZERO);
        assert_eq!((kart.width, kart.height), (24, 12));
        assert_eq!(kart.sprite, SpriteHandle(2));
        assert_eq!(sprites.requested, vec!["car0.bmp", "car1.bmp"]);
    }

    #[test]
    fn test_ids_match_slots() {
        let registry = filled(5);
        for (slot, kart) in registry.iter().enumerate() {
            assert_eq!(kart.id, slot);
        }
    }

    #[test]
    fn test_capacity_leaves_registry_untouched() {
        let mut registry = filled(VehicleRegistry::capacity());
        let mut sprites = FixedSprites::new(32, 16);

        let result = registry.create(START, 20.0, &mut sprites);

        assert!(matches!(result, Err(RegistryError::Full { capacity: 7 })));
        assert_eq!(registry.len(), 7);
        assert!(sprites.requested.is_empty(), "No sprite should be loaded");
    }

    #[test]
    fn test_sprite_failure_adds_nothing() {
        let mut registry = VehicleRegistry::new();
        let mut sprites = FixedSprites::new(32, 16);
        sprites.fail = true;

        let result = registry.create(START, 20.0, &mut sprites);

        assert!(matches!(result, Err(RegistryError::Sprite(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_pairs_visited_once_in_order() {
        let mut registry = filled(4);
        let mut pairs = vec![];

        registry.for_each_pair(|a, b| pairs.push((a.id, b.id)));

        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_pairs_with_single_kart() {
        let mut registry = filled(1);
        let mut visits = 0;
        registry.for_each_pair(|_, _| visits += 1);
        assert_eq!(visits, 0);
    }

    #[test]
    fn test_clear() {
        let mut registry = filled(3);
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get(0).is_none());
    }
}
