//! Sprite loader for headless runs: every kart gets the same configured size.

use kart_core::{Sprite, SpriteError, SpriteHandle, SpriteLoader};

#[derive(Debug, Clone)]
pub struct UniformSprites {
    width: u32,
    height: u32,
    loaded: u32,
}

impl UniformSprites {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            loaded: 0,
        }
    }
}

impl SpriteLoader for UniformSprites {
    fn load_image_with_dims(&mut self, filename: &str) -> Result<Sprite, SpriteError> {
        if self.width == 0 || self.height == 0 {
            return Err(SpriteError {
                filename: filename.to_string(),
                reason: format!("empty kart size {}x{}", self.width, self.height),
            });
        }
        self.loaded += 1;
        log::trace!("headless sprite {} for {}", self.loaded, filename);
        Ok(Sprite {
            handle: SpriteHandle(self.loaded),
            width: self.width,
            height: self.height,
        })
    }
}
