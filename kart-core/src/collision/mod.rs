//! Kart-to-kart collisions.
//!
//! - **Detection**: axis-aligned bounding-box overlap between two karts
//! - **Resolution**: equal and opposite impulse pushed into the force accumulators
//!
//! ```text
//!   ┌──────┐
//!   │  a ● │─┐        separation = center(a) - center(b)
//!   └──────┘ │        a.force += normalize(separation) * impulse
//!       │ ●  b │      b.force -= normalize(separation) * impulse
//!       └──────┘
//! ```
//!
//! Velocities are never touched directly, so overlapping karts may stay
//! visibly overlapped for a frame until the next integration pushes them apart.

pub mod detection;
pub mod resolution;

pub use detection::*;
pub use resolution::*;
