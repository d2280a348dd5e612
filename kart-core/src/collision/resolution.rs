//! Impulse response for overlapping karts.

use crate::collision::detection::{CollisionDetector, Contact};
use crate::types::Vehicle;

pub struct CollisionResolver;

impl CollisionResolver {
    /// Push both karts apart along the contact normal with `impulse` magnitude.
    pub fn resolve(first: &mut Vehicle, second: &mut Vehicle, contact: &Contact, impulse: f64) {
        let push = contact.normal * impulse;
        first.apply_force(push);
        second.apply_force(-push);
    }

    /// Detect and resolve in one go. Returns whether the karts overlapped.
    pub fn collide(first: &mut Vehicle, second: &mut Vehicle, impulse: f64) -> bool {
        match CollisionDetector::detect(first, second) {
            Some(contact) => {
                Self::resolve(first, second, &contact, impulse);
                log::trace!(
                    "karts {} and {} collided, normal ({:.3}, {:.3})",
                    first.id,
                    second.id,
                    contact.normal.x,
                    contact.normal.y
                );
                true
            }
            None => false,
        }
    }
}
