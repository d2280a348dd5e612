//! Asset collaborator used when a vehicle is created.

use thiserror::Error;

use crate::types::SpriteHandle;

/// Image handle together with its pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub handle: SpriteHandle,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Error)]
#[error("could not load sprite {filename}: {reason}")]
pub struct SpriteError {
    pub filename: String,
    pub reason: String,
}

/// Loads a vehicle image and reports its size.
pub trait SpriteLoader {
    fn load_image_with_dims(&mut self, filename: &str) -> Result<Sprite, SpriteError>;
}

/// Image file requested for the vehicle in `slot`.
pub fn sprite_filename(slot: usize) -> String {
    format!("car{}.bmp", slot)
}
