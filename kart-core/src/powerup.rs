//! Powerup pickup and use.
//!
//! A vehicle holds at most one powerup. It can only pick one up while empty
//! and only loses it by using it, so a held powerup is never swapped for
//! another.

use crate::types::{PowerupKind, Rect, Vec2, Vehicle};

/// World-side powerup boxes and the effects they trigger.
pub trait PowerupField {
    /// Powerup whose pickup box overlaps `bounds`, if any.
    fn check_hit(&mut self, bounds: Rect) -> Option<PowerupKind>;

    /// Fire `kind` from `position` heading along `direction`.
    fn trigger(&mut self, kind: PowerupKind, position: Vec2, direction: Vec2);
}

/// Collect a powerup under the vehicle if it is not already holding one.
///
/// Returns the newly acquired powerup.
pub fn try_pickup<P: PowerupField + ?Sized>(
    vehicle: &mut Vehicle,
    field: &mut P,
) -> Option<PowerupKind> {
    if vehicle.powerup.is_some() {
        return None;
    }
    let found = field.check_hit(vehicle.bounds())?;
    vehicle.powerup = Some(found);
    log::debug!("vehicle {} picked up {:?}", vehicle.id, found);
    Some(found)
}

/// Trigger the held powerup, if any, and empty the slot.
///
/// Returns the powerup that was used.
pub fn use_powerup<P: PowerupField + ?Sized>(
    vehicle: &mut Vehicle,
    field: &mut P,
) -> Option<PowerupKind> {
    let kind = vehicle.powerup.take()?;
    field.trigger(kind, vehicle.position, vehicle.direction);
    log::debug!("vehicle {} used {:?}", vehicle.id, kind);
    Some(kind)
}
